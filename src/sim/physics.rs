//! Actor physics and jump policy
//!
//! One call to [`step`] is one frame: controls are resolved into velocity,
//! then gravity and a single semi-implicit Euler step are applied. There is
//! no sub-stepping, so very fast falls can tunnel through thin platforms.

use super::state::Actor;
use crate::settings::ActorTuning;

/// Horizontal control for a frame. Input fully overrides vx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    Left,
    Right,
    #[default]
    Idle,
}

impl Horizontal {
    /// Left wins when both keys are held
    pub fn from_keys(left: bool, right: bool) -> Self {
        if left {
            Horizontal::Left
        } else if right {
            Horizontal::Right
        } else {
            Horizontal::Idle
        }
    }
}

/// Per-frame control sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub horizontal: Horizontal,
    /// Level-triggered: sampled every frame, not as a press edge
    pub jump: bool,
}

/// Which jump a frame's input turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Air,
}

/// Resolve jump input against the grounded / near-peak rules.
///
/// Holding jump is re-entrant: an air jump fires on the first held frame
/// where vy has risen above the near-peak threshold, and stops once the
/// air jump budget is spent.
pub fn apply_jump(actor: &mut Actor, tuning: &ActorTuning, jump_pressed: bool) -> Option<JumpKind> {
    if !jump_pressed {
        return None;
    }

    if actor.grounded {
        actor.vel.y = tuning.jump_impulse;
        actor.grounded = false;
        actor.extra_jumps_used = 0;
        Some(JumpKind::Ground)
    } else if actor.extra_jumps_used < tuning.max_extra_jumps
        && actor.vel.y > tuning.near_peak_threshold
    {
        actor.vel.y = tuning.jump_impulse;
        actor.extra_jumps_used += 1;
        Some(JumpKind::Air)
    } else {
        None
    }
}

/// Set horizontal velocity and resolve jumps
pub fn apply_controls(actor: &mut Actor, tuning: &ActorTuning, controls: Controls) -> Option<JumpKind> {
    actor.vel.x = match controls.horizontal {
        Horizontal::Left => -tuning.move_speed,
        Horizontal::Right => tuning.move_speed,
        Horizontal::Idle => 0.0,
    };
    apply_jump(actor, tuning, controls.jump)
}

/// Gravity, then move, then clamp to the side walls. Gravity applies even
/// while grounded; the collision pass undoes it.
pub fn integrate(actor: &mut Actor, tuning: &ActorTuning, world_width: f32) {
    actor.vel.y += tuning.gravity;
    actor.rect.pos += actor.vel;

    let max_x = (world_width - actor.rect.width()).max(0.0);
    actor.rect.pos.x = actor.rect.pos.x.min(max_x).max(0.0);
}

/// Advance the actor by exactly one frame
pub fn step(
    actor: &mut Actor,
    tuning: &ActorTuning,
    world_width: f32,
    controls: Controls,
) -> Option<JumpKind> {
    let jump = apply_controls(actor, tuning, controls);
    integrate(actor, tuning, world_width);
    jump
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grounded_actor(tuning: &ActorTuning) -> Actor {
        let mut actor = Actor::spawn(tuning);
        actor.grounded = true;
        actor
    }

    #[test]
    fn test_gravity_applies_every_frame() {
        let tuning = ActorTuning::default();
        let mut actor = Actor::spawn(&tuning);
        step(&mut actor, &tuning, 800.0, Controls::default());
        assert_eq!(actor.vel.y, 0.5);
        assert_eq!(actor.rect.pos.y, 540.5);

        step(&mut actor, &tuning, 800.0, Controls::default());
        assert_eq!(actor.vel.y, 1.0);
        assert_eq!(actor.rect.pos.y, 541.5);
    }

    #[test]
    fn test_horizontal_overrides_velocity() {
        let tuning = ActorTuning::default();
        let mut actor = Actor::spawn(&tuning);

        let left = Controls {
            horizontal: Horizontal::from_keys(true, true),
            jump: false,
        };
        step(&mut actor, &tuning, 800.0, left);
        assert_eq!(actor.vel.x, -5.0);
        assert_eq!(actor.rect.pos.x, 395.0);

        step(&mut actor, &tuning, 800.0, Controls::default());
        assert_eq!(actor.vel.x, 0.0);
        assert_eq!(actor.rect.pos.x, 395.0);
    }

    #[test]
    fn test_clamped_to_walls() {
        let tuning = ActorTuning::default();
        let mut actor = Actor::spawn(&tuning);
        actor.rect.pos.x = 2.0;
        let left = Controls {
            horizontal: Horizontal::Left,
            jump: false,
        };
        step(&mut actor, &tuning, 800.0, left);
        assert_eq!(actor.rect.pos.x, 0.0);

        actor.rect.pos.x = 778.0;
        let right = Controls {
            horizontal: Horizontal::Right,
            jump: false,
        };
        step(&mut actor, &tuning, 800.0, right);
        assert_eq!(actor.rect.pos.x, 780.0);
    }

    #[test]
    fn test_ground_jump() {
        let tuning = ActorTuning::default();
        let mut actor = grounded_actor(&tuning);
        actor.extra_jumps_used = 1;

        assert_eq!(apply_jump(&mut actor, &tuning, true), Some(JumpKind::Ground));
        assert_eq!(actor.vel.y, tuning.jump_impulse);
        assert!(!actor.grounded);
        assert_eq!(actor.extra_jumps_used, 0);
    }

    #[test]
    fn test_no_air_jump_right_after_ground_jump() {
        let tuning = ActorTuning::default();
        let mut actor = grounded_actor(&tuning);
        apply_jump(&mut actor, &tuning, true);

        assert_eq!(apply_jump(&mut actor, &tuning, true), None);
        assert_eq!(actor.vel.y, tuning.jump_impulse);
        assert_eq!(actor.extra_jumps_used, 0);
    }

    #[test]
    fn test_air_jump_near_peak() {
        let tuning = ActorTuning::default();
        let mut actor = Actor::spawn(&tuning);
        actor.vel.y = -6.0;
        assert_eq!(apply_jump(&mut actor, &tuning, true), None, "threshold is exclusive");

        actor.vel.y = -5.5;
        assert_eq!(apply_jump(&mut actor, &tuning, true), Some(JumpKind::Air));
        assert_eq!(actor.vel.y, tuning.jump_impulse);
        assert_eq!(actor.extra_jumps_used, 1);

        actor.vel.y = 3.0;
        assert_eq!(apply_jump(&mut actor, &tuning, true), None, "budget spent");
    }

    #[test]
    fn test_holding_jump_fires_one_air_jump_per_budget() {
        let tuning = ActorTuning {
            max_extra_jumps: 2,
            ..ActorTuning::default()
        };
        let mut actor = grounded_actor(&tuning);
        let held = Controls {
            horizontal: Horizontal::Idle,
            jump: true,
        };

        let mut jumps = Vec::new();
        for _ in 0..200 {
            if let Some(kind) = step(&mut actor, &tuning, 800.0, held) {
                jumps.push(kind);
            }
        }
        assert_eq!(jumps, vec![JumpKind::Ground, JumpKind::Air, JumpKind::Air]);
    }

    proptest! {
        #[test]
        fn prop_actor_stays_inside_walls(
            start_x in 0.0f32..780.0,
            keys in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..300),
        ) {
            let tuning = ActorTuning::default();
            let mut actor = Actor::spawn(&tuning);
            actor.rect.pos.x = start_x;
            for (left, right, jump) in keys {
                let controls = Controls { horizontal: Horizontal::from_keys(left, right), jump };
                step(&mut actor, &tuning, 800.0, controls);
                prop_assert!(actor.rect.pos.x >= 0.0);
                prop_assert!(actor.rect.pos.x <= 800.0 - actor.rect.width());
            }
        }
    }
}
