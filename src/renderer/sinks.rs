//! Headless render sinks
//!
//! - `LogSink`: reports through the `log` facade
//! - `TraceSink`: one JSON snapshot per line, for replays and tooling

use std::io::{BufWriter, Write};

use super::{FrameSnapshot, RenderError, RenderSink};
use crate::settings::Backdrop;
use crate::sim::RunPhase;

/// Logs phase changes and a periodic status line
pub struct LogSink {
    backdrop: Backdrop,
    /// Status line interval in frames (0 disables it)
    every: u64,
    presented: u64,
    last_phase: Option<RunPhase>,
}

impl LogSink {
    pub fn new(backdrop: Backdrop, every: u64) -> Self {
        Self {
            backdrop,
            every,
            presented: 0,
            last_phase: None,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        if self.presented == 0 {
            log::info!("Rendering over {:?}", self.backdrop);
        }
        self.presented += 1;

        if self.last_phase != Some(frame.phase) {
            match frame.phase {
                RunPhase::Playing => log::info!("Climbing..."),
                RunPhase::GameOver => log::info!("Game over! Score {}", frame.score),
            }
            self.last_phase = Some(frame.phase);
        }

        if self.every > 0 && self.presented.is_multiple_of(self.every) {
            log::debug!(
                "frame {} score {} camera {:.1} actor ({:.1}, {:.1}) water {:.1} platforms {}",
                frame.frame,
                frame.score,
                frame.camera_y,
                frame.actor.pos.x,
                frame.actor.pos.y,
                frame.water_y,
                frame.platforms.len()
            );
        }
        Ok(())
    }
}

/// Writes every snapshot as a JSON line
pub struct TraceSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> TraceSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Flush and hand back the writer
    pub fn finish(self) -> Result<W, RenderError> {
        self.out
            .into_inner()
            .map_err(|e| RenderError::Io(e.into_error()))
    }
}

impl<W: Write> RenderSink for TraceSink<W> {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}
