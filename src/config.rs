//! Configuration constants for the projectile demo.

// Launch angles in degrees, shared by the report and the simulation
pub const LAUNCH_ANGLES: [f32; 19] = [
    0.0, 3.19, 6.42, 9.736, 13.194, 16.874, 20.905, 25.529, 31.367, 45.0, 58.633, 64.471, 69.095,
    73.126, 76.806, 80.264, 83.58, 86.81, 90.0,
];

// Physics
pub const GRAVITY: f32 = 1.6; // Units/time^2, pointing down in screen space
pub const LAUNCH_HEIGHT: f32 = 600.0; // Launch altitude and ground threshold
pub const LAUNCH_SPEED: f32 = 120.0; // Units/time

// Report formula factors (LAUNCH_SPEED^2 and 2 * LAUNCH_SPEED)
pub const REPORT_RANGE_FACTOR: f32 = 14400.0;
pub const REPORT_TIME_FACTOR: f32 = 240.0;
pub const REPORT_GRAVITY: f64 = 1.6; // The division runs in double precision
pub const REPORT_FILE: &str = "test.txt";

// Rendering configuration
pub const WINDOW_TITLE: &str = "Physics-1";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 800;
pub const FRAME_RATE: u32 = 60; // Target frame rate
pub const PROJECTILE_RADIUS: f32 = 10.0;
pub const GROUND_BAR_HEIGHT: f32 = 20.0;
