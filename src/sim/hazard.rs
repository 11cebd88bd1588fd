//! Rising flood line
//!
//! The water level is never set directly: it always trails the camera by a
//! fixed offset below the visible window, so it climbs exactly as fast as the
//! view does.

use serde::{Deserialize, Serialize};

use super::state::Actor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    level: f32,
    /// Distance below the bottom of the view
    offset: f32,
}

impl Hazard {
    /// Run-start flood line: the bottom of the first view
    pub fn new(viewport_height: f32, offset: f32) -> Self {
        Self {
            level: viewport_height,
            offset,
        }
    }

    /// World y of the water surface
    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Re-derive the water surface from the camera
    pub fn update(&mut self, camera_y: f32, viewport_height: f32) -> f32 {
        self.level = camera_y + viewport_height + self.offset;
        self.level
    }

    /// True once the actor's feet are below the surface
    pub fn engulfs(&self, actor: &Actor) -> bool {
        actor.rect.bottom() > self.level
    }
}
