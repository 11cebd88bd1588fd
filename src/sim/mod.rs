//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (platforms keep generation order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod hazard;
pub mod physics;
pub mod platforms;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Landing, resolve};
pub use hazard::Hazard;
pub use physics::{Controls, Horizontal, JumpKind};
pub use platforms::PlatformStore;
pub use rect::Rect;
pub use state::{Actor, GameState, Platform, PlatformKind, RunPhase};
pub use tick::{TickInput, TickOutcome, tick};
