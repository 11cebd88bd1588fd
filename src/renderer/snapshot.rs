//! Per-frame hand-off to the renderer

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, PlatformKind, Rect, RunPhase};
use crate::world_to_screen_y;

/// A platform ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSprite {
    /// Camera-relative rectangle
    pub rect: Rect,
    pub unstable: bool,
    /// 0 = untouched, 1 = about to crumble
    pub wear: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub camera_y: f32,
    pub platforms: Vec<PlatformSprite>,
    /// Camera-relative actor rectangle
    pub actor: Rect,
    /// Camera-relative y of the water surface
    pub water_y: f32,
    pub score: u64,
    pub phase: RunPhase,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let camera_y = state.camera_y;
        let platforms = state
            .platforms
            .iter()
            .map(|p| PlatformSprite {
                rect: p.rect.to_screen(camera_y),
                unstable: matches!(p.kind, PlatformKind::Unstable { .. }),
                wear: p.wear(),
            })
            .collect();

        Self {
            frame: state.time_ticks,
            camera_y,
            platforms,
            actor: state.actor.rect.to_screen(camera_y),
            water_y: world_to_screen_y(state.hazard.level(), camera_y),
            score: state.score,
            phase: state.phase,
        }
    }
}
