//! Input sources
//!
//! The frame loop asks for one [`TickInput`] per frame. Real keyboards and
//! windows live outside this crate; what ships here is a replayable script
//! and a simple bot for demos and soak runs.

use std::collections::VecDeque;

use crate::sim::{GameState, Platform, RunPhase, TickInput};

/// Anything that can be sampled once per frame
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed list of inputs, then repeats a fallback forever
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    inputs: VecDeque<TickInput>,
    fallback: TickInput,
}

impl Scripted {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            fallback: TickInput::default(),
        }
    }

    /// Input to repeat once the script runs out (idle by default)
    pub fn then(mut self, fallback: TickInput) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        self.inputs.pop_front().unwrap_or(self.fallback)
    }
}

/// Bot that hops toward the next platform up.
///
/// The target is chosen while standing and held through the whole jump, so
/// rising past its surface does not make the bot chase a higher platform it
/// cannot reach. It restarts a limited number of times after drowning, then
/// quits.
#[derive(Debug, Clone)]
pub struct Autopilot {
    restarts_left: u32,
    target: Option<u32>,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
            target: None,
        }
    }

    /// Id of the platform the bot is heading for
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    fn climb(&mut self, state: &GameState) -> TickInput {
        let actor = &state.actor;
        let held = self
            .target
            .filter(|&id| !actor.grounded && state.platforms.iter().any(|p| p.id == id));
        self.target = held.or_else(|| pick_target(state));

        let Some(target) = self
            .target
            .and_then(|id| state.platforms.iter().find(|p| p.id == id))
        else {
            return TickInput::default();
        };

        let feet = actor.rect.bottom();
        let dx = target.rect.center_x() - actor.rect.center_x();
        let tolerance = ((target.rect.width() - actor.rect.width()) * 0.25).max(1.0);
        let left = dx < -tolerance;
        let right = dx > tolerance;

        let jump = if actor.grounded {
            // Take off once the target is within one jump sideways, or before
            // walking off the current ledge
            let tuning = &state.tuning.actor;
            let rise_frames = -tuning.jump_impulse / tuning.gravity;
            let reach = tuning.move_speed * rise_frames + target.rect.width() / 2.0;
            let at_edge = ledge(state).is_none_or(|under| {
                (right && actor.rect.left() + tuning.move_speed >= under.rect.right())
                    || (left && actor.rect.right() - tuning.move_speed <= under.rect.left())
            });
            dx.abs() <= reach || at_edge
        } else {
            // Air jumps are saved for when a fall drops below the target
            actor.vel.y > 0.0 && feet > target.rect.top()
        };

        TickInput {
            left,
            right,
            jump,
            ..Default::default()
        }
    }
}

/// Platforms whose surface is above the actor's feet
fn above_feet(state: &GameState) -> impl Iterator<Item = &Platform> {
    let feet = state.actor.rect.bottom();
    state.platforms.iter().filter(move |p| p.rect.top() < feet - 1.0)
}

/// The platform the actor is standing on
fn ledge(state: &GameState) -> Option<&Platform> {
    let actor = &state.actor.rect;
    state.platforms.iter().find(|p| {
        (p.rect.top() - actor.bottom()).abs() < 0.5
            && p.rect.left() < actor.right()
            && p.rect.right() > actor.left()
    })
}

/// Nearest platform sideways that a single jump clears; failing that, the
/// lowest platform above
fn pick_target(state: &GameState) -> Option<u32> {
    let feet = state.actor.rect.bottom();
    let center = state.actor.rect.center_x();
    let apex = state.tuning.jump_apex_height();
    let offset = |p: &Platform| (p.rect.center_x() - center).abs();

    above_feet(state)
        .filter(|p| feet - p.rect.top() <= apex)
        .min_by(|a, b| offset(*a).total_cmp(&offset(*b)))
        .or_else(|| above_feet(state).max_by(|a, b| a.rect.top().total_cmp(&b.rect.top())))
        .map(|p| p.id)
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            RunPhase::Playing => self.climb(state),
            RunPhase::GameOver if self.restarts_left > 0 => {
                self.restarts_left -= 1;
                self.target = None;
                TickInput {
                    restart: true,
                    ..Default::default()
                }
            }
            RunPhase::GameOver => TickInput {
                quit: true,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use glam::Vec2;

    #[test]
    fn test_script_then_fallback() {
        let state = GameState::new(1, Tuning::default());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let close = TickInput {
            close: true,
            ..Default::default()
        };
        let mut script = Scripted::new([jump]).then(close);

        assert_eq!(script.remaining(), 1);
        assert_eq!(script.poll(&state), jump);
        assert_eq!(script.poll(&state), close);
        assert_eq!(script.poll(&state), close);
    }

    #[test]
    fn test_autopilot_heads_for_next_platform() {
        let mut state = GameState::new(1, Tuning::default());
        // Standing on the first starter; next one up is centred at x=360
        state.actor.rect.pos.y = 510.0;
        state.actor.grounded = true;

        let input = Autopilot::new(0).poll(&state);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.jump);
    }

    #[test]
    fn test_autopilot_holds_target_until_landing() {
        let mut state = GameState::new(1, Tuning::default());
        state.platforms.generate_if_needed(0.0);
        let mut bot = Autopilot::new(0);

        // Standing on the second starter, the third is the only one in reach
        state.actor.rect.pos = Vec2::new(340.0, 410.0);
        state.actor.grounded = true;
        let input = bot.poll(&state);
        assert_eq!(bot.target(), Some(3));
        assert!(input.right);
        // Too far sideways to jump yet, and not at the ledge
        assert!(!input.jump);

        // Rising past the third starter's surface keeps it as the target
        state.actor.grounded = false;
        state.actor.rect.pos = Vec2::new(500.0, 290.0);
        state.actor.vel.y = -3.0;
        let input = bot.poll(&state);
        assert_eq!(bot.target(), Some(3));
        assert!(input.right);
        assert!(!input.jump);

        // Landing on it picks the next one up
        state.actor.rect.pos = Vec2::new(540.0, 310.0);
        state.actor.vel.y = 0.0;
        state.actor.grounded = true;
        bot.poll(&state);
        let next = bot.target().unwrap();
        assert_ne!(next, 3);
        assert!(state.platforms.iter().any(|p| p.id == next && p.rect.top() < 350.0));
    }

    #[test]
    fn test_autopilot_jumps_before_leaving_ledge() {
        let mut state = GameState::new(1, Tuning::default());
        // Second starter pushed far left, out of reach from the first
        for p in state.platforms.iter_mut() {
            if p.id == 2 {
                p.rect.pos.x = 50.0;
            }
        }
        state.actor.rect.pos = Vec2::new(400.0, 510.0);
        state.actor.grounded = true;
        let mut bot = Autopilot::new(0);

        // Walks toward it first
        let input = bot.poll(&state);
        assert_eq!(bot.target(), Some(2));
        assert!(input.left);
        assert!(!input.jump);

        // One more step would leave the first starter
        state.actor.rect.pos.x = 362.0;
        let input = bot.poll(&state);
        assert!(input.left && input.jump);
    }

    #[test]
    fn test_autopilot_restarts_then_quits() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = RunPhase::GameOver;
        let mut bot = Autopilot::new(1);

        assert!(bot.poll(&state).restart);
        let last = bot.poll(&state);
        assert!(last.quit);
        assert!(!last.restart);
    }
}
