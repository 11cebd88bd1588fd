//! Fixed-rate frame pacing
//!
//! Sleeps out whatever is left of each frame. Slow frames are not caught up:
//! the simulation step is per frame, not per unit of wall-clock time.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's slot is over.
    /// Returns how long the frame's work took before sleeping.
    pub fn wait(&mut self) -> Duration {
        let busy = self.last.elapsed();
        if let Some(rest) = self.frame.checked_sub(busy) {
            thread::sleep(rest);
        }
        self.last = Instant::now();
        busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FramePacer::new(50).frame_duration(), Duration::from_millis(20));
        // Zero is treated as one frame per second rather than dividing by zero
        assert_eq!(FramePacer::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_fills_the_frame() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(100);
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(19));
    }

    #[test]
    fn test_late_frame_does_not_sleep() {
        let mut pacer = FramePacer::new(1000);
        thread::sleep(Duration::from_millis(5));
        let busy = pacer.wait();
        assert!(busy >= Duration::from_millis(5));
    }
}
