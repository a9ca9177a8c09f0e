use crate::config::{REPORT_GRAVITY, REPORT_RANGE_FACTOR, REPORT_TIME_FACTOR};
use macroquad::prelude::Vec2;
use std::f32::consts::PI;

const DEG2RAD: f32 = PI / 180.0;

// Single-precision numerator, double-precision division, stored back as f32.
// This reproduces the published report digits, e.g. -0.000787 for 90 deg.
fn over_gravity(numerator: f32) -> f32 {
    (numerator as f64 / REPORT_GRAVITY) as f32
}

/// Closed-form horizontal range for a launch angle in degrees.
pub fn theoretical_range(angle_deg: f32) -> f32 {
    over_gravity(REPORT_RANGE_FACTOR * (2.0 * (angle_deg * DEG2RAD)).sin())
}

/// Closed-form flight time for a launch angle in degrees.
pub fn theoretical_flight_time(angle_deg: f32) -> f32 {
    over_gravity(REPORT_TIME_FACTOR * (angle_deg * DEG2RAD).sin())
}

/// Initial velocity for a launch: the +x axis rotated by -angle, scaled to `speed`.
/// Screen space has y pointing down, so larger angles climb higher.
pub fn launch_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    Vec2::from_angle(-angle_deg * DEG2RAD) * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LAUNCH_ANGLES;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_range_symmetric_about_45() {
        // The table is built from complementary pairs
        let n = LAUNCH_ANGLES.len();
        for i in 0..n / 2 {
            let a = LAUNCH_ANGLES[i];
            let b = LAUNCH_ANGLES[n - 1 - i];
            assert_approx_eq!(a + b, 90.0, 1e-4);
            assert_approx_eq!(theoretical_range(a), theoretical_range(b), 0.05);
        }
    }

    #[test]
    fn test_range_supplementary_angle_mirrors() {
        for &a in LAUNCH_ANGLES.iter() {
            assert_approx_eq!(theoretical_range(180.0 - a), -theoretical_range(a), 0.05);
        }
    }

    #[test]
    fn test_range_maximum_at_45() {
        let best = LAUNCH_ANGLES
            .iter()
            .map(|&a| theoretical_range(a))
            .fold(f32::MIN, f32::max);
        assert_approx_eq!(best, theoretical_range(45.0));
        assert_approx_eq!(best, 9000.0, 1e-3);
    }

    #[test]
    fn test_flight_time_at_45() {
        assert_approx_eq!(theoretical_flight_time(45.0), 106.066017, 1e-4);
        assert_approx_eq!(theoretical_flight_time(0.0), 0.0);
        assert_approx_eq!(theoretical_flight_time(90.0), 150.0, 1e-4);
    }

    #[test]
    fn test_single_precision_residue_at_90() {
        // sin(pi) in f32 is not zero, so the vertical launch reports a tiny negative range
        let range = theoretical_range(90.0);
        assert!(range < 0.0);
        assert_approx_eq!(range, -0.000787, 1e-6);
        assert_approx_eq!(theoretical_range(69.095), 5999.963379, 2e-3);
    }

    #[test]
    fn test_launch_velocity() {
        let flat = launch_velocity(0.0, 120.0);
        assert_approx_eq!(flat.x, 120.0);
        assert_approx_eq!(flat.y, 0.0);

        // Straight up is negative y in screen space
        let up = launch_velocity(90.0, 120.0);
        assert_approx_eq!(up.x, 0.0, 1e-3);
        assert_approx_eq!(up.y, -120.0, 1e-3);

        let diag = launch_velocity(45.0, 120.0);
        assert_approx_eq!(diag.length(), 120.0, 1e-3);
        assert!(diag.x > 0.0 && diag.y < 0.0);
    }
}
