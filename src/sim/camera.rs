//! Vertical camera tracking
//!
//! First-order exponential smoothing toward a target that keeps the actor's
//! top edge at mid-screen. No velocity term, so it never overshoots.

/// Ease `camera_y` toward the actor; returns the new offset
#[inline]
pub fn follow(camera_y: f32, actor_y: f32, viewport_height: f32, smoothing: f32) -> f32 {
    let target = actor_y - viewport_height / 2.0;
    camera_y + (target - camera_y) * smoothing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_fraction_of_the_way() {
        // target = 510 - 300 = 210
        let y = follow(0.0, 510.0, 600.0, 0.1);
        assert!((y - 21.0).abs() < 1e-4);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut y = 0.0;
        let mut last_gap = f32::INFINITY;
        for _ in 0..200 {
            y = follow(y, -1000.0, 600.0, 0.1);
            let gap = y - (-1300.0);
            assert!(gap >= 0.0, "camera overshot the target");
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 0.01);
    }

    #[test]
    fn test_at_target_is_fixed_point() {
        assert_eq!(follow(-300.0, 0.0, 600.0, 0.1), -300.0);
    }
}
