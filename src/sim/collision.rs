//! Landing detection and response
//!
//! Platforms are one-way landing pads: there are no side or ceiling
//! collisions. A landing needs an overlap while the actor is falling or at
//! rest (vy >= 0), so jumping up through a platform never snaps onto it.

use super::platforms::PlatformStore;
use super::state::{Actor, Platform};

/// Outcome of a frame's landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub platform_id: u32,
    /// World y the actor's feet were snapped to
    pub surface_y: f32,
    /// The platform wore through and was removed
    pub crumbled: bool,
}

/// Whether `platform` would catch the actor this frame
#[inline]
pub fn catches(actor: &Actor, platform: &Platform) -> bool {
    actor.vel.y >= 0.0 && actor.rect.overlaps(&platform.rect)
}

/// Resolve the actor against every live platform.
///
/// `grounded` is recomputed from scratch each frame. When more than one
/// platform overlaps, the first in store order wins. On landing the actor's
/// bottom edge is snapped to the platform's top edge, vertical velocity is
/// zeroed and the air jump budget is restored.
///
/// An unstable platform that wears through is removed immediately and the
/// actor is no longer grounded; it falls on the next frame.
pub fn resolve(actor: &mut Actor, platforms: &mut PlatformStore) -> Option<Landing> {
    actor.grounded = false;

    let platform = platforms.iter_mut().find(|p| catches(actor, p))?;

    let surface_y = platform.rect.top();
    actor.rect.pos.y = surface_y - actor.rect.height();
    actor.vel.y = 0.0;
    actor.grounded = true;
    actor.extra_jumps_used = 0;

    let platform_id = platform.id;
    let crumbled = platform.register_contact();
    if crumbled {
        platforms.remove(platform_id);
        actor.grounded = false;
    }

    Some(Landing {
        platform_id,
        surface_y,
        crumbled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ActorTuning, Tuning, UnstableTuning};
    use crate::sim::physics::{self, Controls};
    use crate::sim::rect::Rect;
    use crate::sim::state::PlatformKind;

    fn store() -> PlatformStore {
        PlatformStore::new(1, &Tuning::default())
    }

    fn actor_at(x: f32, y: f32, vy: f32) -> Actor {
        let mut actor = Actor::spawn(&ActorTuning::default());
        actor.rect = Rect::new(x, y, 20.0, 40.0);
        actor.vel.y = vy;
        actor
    }

    #[test]
    fn test_lands_and_snaps_to_top() {
        let mut platforms = store();
        let mut actor = actor_at(400.0, 540.5, 0.5);
        actor.extra_jumps_used = 1;

        let landing = resolve(&mut actor, &mut platforms).unwrap();
        assert_eq!(landing.surface_y, 550.0);
        assert!(!landing.crumbled);
        assert_eq!(actor.rect.pos.y, 510.0);
        assert_eq!(actor.vel.y, 0.0);
        assert!(actor.grounded);
        assert_eq!(actor.extra_jumps_used, 0);
    }

    #[test]
    fn test_rising_actor_passes_through() {
        let mut platforms = store();
        let mut actor = actor_at(400.0, 540.0, -8.0);
        actor.grounded = true;

        assert!(resolve(&mut actor, &mut platforms).is_none());
        assert_eq!(actor.rect.pos.y, 540.0);
        assert_eq!(actor.vel.y, -8.0);
        assert!(!actor.grounded);
    }

    #[test]
    fn test_no_side_collisions() {
        let mut platforms = store();
        // Beside the first starter, overlapping nothing
        let mut actor = actor_at(200.0, 540.0, 3.0);
        assert!(resolve(&mut actor, &mut platforms).is_none());
        assert_eq!(actor.rect.pos.y, 540.0);
    }

    #[test]
    fn test_resting_is_stable() {
        let tuning = ActorTuning::default();
        let mut platforms = store();
        let mut actor = actor_at(400.0, 510.0, 0.0);
        actor.grounded = true;

        for _ in 0..120 {
            physics::step(&mut actor, &tuning, 800.0, Controls::default());
            assert!(resolve(&mut actor, &mut platforms).is_some());
            assert_eq!(actor.rect.pos.y, 510.0);
            assert_eq!(actor.vel.y, 0.0);
            assert!(actor.grounded);
        }
    }

    #[test]
    fn test_unstable_platform_crumbles() {
        let tuning = Tuning::default();
        let mut platforms = PlatformStore::new(1, &tuning);
        let id = platforms.as_slice()[0].id;
        for p in platforms.iter_mut() {
            if p.id == id {
                p.kind = PlatformKind::Unstable {
                    decay_frames: UnstableTuning::default().decay_frames,
                    contact_frames: 0,
                };
            }
        }

        let mut actor = actor_at(400.0, 510.0, 0.0);
        let mut frames = 0;
        let landing = loop {
            frames += 1;
            physics::step(&mut actor, &tuning.actor, tuning.world_width, Controls::default());
            let landing = resolve(&mut actor, &mut platforms).unwrap();
            if landing.crumbled {
                break landing;
            }
        };

        assert_eq!(frames, 61);
        assert_eq!(landing.platform_id, id);
        assert!(!actor.grounded);
        assert!(platforms.iter().all(|p| p.id != id));

        // Nothing left underneath: the actor falls
        physics::step(&mut actor, &tuning.actor, tuning.world_width, Controls::default());
        assert!(resolve(&mut actor, &mut platforms).is_none());
        assert!(actor.rect.pos.y > 510.0);
    }
}
