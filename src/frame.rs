use macroquad::prelude::{KeyCode, get_frame_time, is_key_down, is_quit_requested};
use std::thread;
use std::time::{Duration, Instant};

/// Supplies frame timing and the close request to the simulation loop.
pub trait FrameSource {
    fn close_requested(&mut self) -> bool;

    /// Seconds elapsed since the previous frame.
    fn frame_time(&mut self) -> f32;
}

/// Frame source backed by the macroquad window.
pub struct WindowFrames;

impl FrameSource for WindowFrames {
    fn close_requested(&mut self) -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }

    fn frame_time(&mut self) -> f32 {
        get_frame_time()
    }
}

/// Caps the loop at a target rate by sleeping off whatever is left of each frame.
#[derive(Debug)]
pub struct FrameLimiter {
    target: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        FrameLimiter {
            target: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Blocks until one target interval has passed since the previous call.
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.target.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_target_interval() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.target(), Duration::from_secs_f64(1.0 / 60.0));
        // Zero is clamped rather than dividing by zero
        assert_eq!(FrameLimiter::new(0).target(), Duration::from_secs(1));
    }

    #[test]
    fn test_limiter_holds_frames_to_target() {
        let mut limiter = FrameLimiter::new(100);
        limiter.wait();
        let start = Instant::now();
        for _ in 0..3 {
            limiter.wait();
        }
        assert!(start.elapsed() >= limiter.target() * 3);
    }
}
