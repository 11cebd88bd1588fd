//! Fixed timestep simulation tick
//!
//! Runs the per-frame pipeline in a fixed order:
//! controls -> physics -> collision -> camera -> flood -> platform upkeep -> score.

use super::collision::Landing;
use super::physics::{self, Controls, Horizontal, JumpKind};
use super::state::{GameState, RunPhase};
use super::{camera, collision};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump held this frame
    pub jump: bool,
    /// Start a new run (only read in GameOver)
    pub restart: bool,
    /// Leave the game (only read in GameOver)
    pub quit: bool,
    /// Window closed; ends the game from any phase
    pub close: bool,
}

impl TickInput {
    pub fn controls(&self) -> Controls {
        Controls {
            horizontal: Horizontal::from_keys(self.left, self.right),
            jump: self.jump,
        }
    }
}

/// What the outer loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if input.close {
        log::info!("Window closed (score {})", state.score);
        return TickOutcome::Quit;
    }

    match state.phase {
        RunPhase::GameOver => {
            if input.quit {
                log::info!("Quit after {} run(s), best score {}", state.runs, state.best_score);
                return TickOutcome::Quit;
            }
            if input.restart {
                state.reset();
                log::info!("Run {} started", state.runs);
            }
            return TickOutcome::Continue;
        }
        RunPhase::Playing => {}
    }

    state.time_ticks += 1;
    let tuning = &state.tuning;

    let jump = physics::step(
        &mut state.actor,
        &tuning.actor,
        tuning.world_width,
        input.controls(),
    );
    match jump {
        Some(JumpKind::Ground) => log::debug!("Jump from y {:.1}", state.actor.rect.bottom()),
        Some(JumpKind::Air) => log::debug!(
            "Air jump {}/{} at y {:.1}",
            state.actor.extra_jumps_used,
            tuning.actor.max_extra_jumps,
            state.actor.rect.bottom()
        ),
        None => {}
    }

    let landing = collision::resolve(&mut state.actor, &mut state.platforms);
    if let Some(Landing {
        platform_id,
        crumbled: true,
        ..
    }) = landing
    {
        log::debug!(
            "Platform {platform_id} crumbled under the actor at frame {}",
            state.time_ticks
        );
    }

    state.camera_y = camera::follow(
        state.camera_y,
        state.actor.rect.top(),
        tuning.viewport_height,
        tuning.camera_smoothing,
    );

    state.hazard.update(state.camera_y, tuning.viewport_height);
    if state.hazard.engulfs(&state.actor) {
        state.phase = RunPhase::GameOver;
        log::info!(
            "Flood caught the actor after {} frames, score {}",
            state.time_ticks,
            state.score
        );
        return TickOutcome::Continue;
    }

    state.platforms.prune(state.camera_y);
    state.platforms.generate_if_needed(state.camera_y);

    state.update_score();
    TickOutcome::Continue
}
