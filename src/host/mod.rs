//! Host layer
//!
//! Everything around the simulation that a frame loop needs:
//! - Input sampling (`input`)
//! - Frame pacing (`pacer`)
//! - The loop itself: input -> tick -> render, once per frame

pub mod input;
pub mod pacer;

pub use input::{Autopilot, InputSource, Scripted};
pub use pacer::FramePacer;

use crate::renderer::{FrameSnapshot, RenderError, RenderSink};
use crate::sim::{GameState, TickOutcome, tick};

/// Unrecoverable host failures
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// How a frame loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames simulated and presented
    pub frames: u64,
    pub runs: u32,
    pub final_score: u64,
    pub best_score: u64,
    /// Ended by a quit/close request rather than the frame budget
    pub quit: bool,
}

/// Drive the game until quit, the frame budget runs out, or the sink fails.
///
/// With a pacer the loop sleeps out each frame; without one it runs flat out.
pub fn run(
    state: &mut GameState,
    input: &mut impl InputSource,
    sink: &mut impl RenderSink,
    mut pacer: Option<&mut FramePacer>,
    max_frames: Option<u64>,
) -> Result<RunSummary, HostError> {
    let mut frames = 0;
    let mut quit = false;

    while max_frames.is_none_or(|max| frames < max) {
        let sample = input.poll(state);
        if tick(state, &sample) == TickOutcome::Quit {
            quit = true;
            break;
        }

        sink.present(&FrameSnapshot::capture(state))
            .inspect_err(|e| log::error!("Stopping after frame {frames}: {e}"))?;
        frames += 1;

        if let Some(pacer) = pacer.as_deref_mut() {
            pacer.wait();
        }
    }

    Ok(RunSummary {
        frames,
        runs: state.runs,
        final_score: state.score,
        best_score: state.best_score,
        quit,
    })
}
