//! Axis-aligned rectangle geometry for the actor and platforms
//!
//! World space has y growing downward, so "higher" means a smaller y:
//! - top edge: `pos.y`
//! - bottom edge: `pos.y + size.y`

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world_to_screen_y;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both strictly positive)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// The same rectangle in camera-relative coordinates
    pub fn to_screen(&self, camera_y: f32) -> Rect {
        Rect {
            pos: Vec2::new(self.pos.x, world_to_screen_y(self.pos.y, camera_y)),
            size: self.size,
        }
    }
}
