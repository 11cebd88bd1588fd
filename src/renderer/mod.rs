//! Render sink boundary
//!
//! The simulation draws nothing itself. Once per frame the host captures a
//! [`FrameSnapshot`] (everything already shifted into camera-relative space)
//! and hands it to a [`RenderSink`].

pub mod sinks;
pub mod snapshot;

pub use sinks::{LogSink, TraceSink};
pub use snapshot::{FrameSnapshot, PlatformSprite};

/// Errors a sink can raise; any of them ends the frame loop
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Something that turns frame snapshots into output
pub trait RenderSink {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError>;
}
