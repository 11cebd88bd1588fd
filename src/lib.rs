//! Flood Climb - an endless vertical-survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platforms, flood)
//! - `renderer`: Camera-relative frame snapshots handed to a render sink
//! - `host`: Input sources, frame pacing and the outer frame loop
//! - `settings`: Data-driven tuning and cosmetic variants

pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Backdrop, SettingsError, Tuning, Variant};

/// Game configuration constants
///
/// These are the defaults behind [`Tuning::default`]; the simulation itself
/// only ever reads the tuning it was created with.
pub mod consts {
    /// Target frame rate. One simulation step per frame.
    pub const FRAME_RATE: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Actor physics (units per frame, units per frame²)
    pub const GRAVITY: f32 = 0.5;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// Extra jumps unlock once vy rises above this (near the apex, or falling)
    pub const NEAR_PEAK_THRESHOLD: f32 = -6.0;
    pub const MAX_EXTRA_JUMPS: u32 = 1;

    /// Actor body
    pub const ACTOR_WIDTH: f32 = 20.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    pub const ACTOR_SPAWN_X: f32 = 400.0;
    pub const ACTOR_SPAWN_Y: f32 = 540.0;

    /// Platform generation
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 80.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 120.0;
    pub const PLATFORM_MIN_GAP: f32 = 100.0;
    pub const PLATFORM_MAX_GAP: f32 = 120.0;
    pub const PLATFORM_MARGIN: f32 = 50.0;
    /// Upper bound on platforms generated in a single maintenance pass
    pub const MAX_PLATFORMS_PER_FRAME: usize = 256;

    /// Camera easing toward the actor, per frame
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Water sits this far below the bottom of the view
    pub const HAZARD_OFFSET: f32 = 100.0;
    /// World units climbed per score point
    pub const DISTANCE_UNIT: f32 = 10.0;

    /// Fixed layout used at run start and whenever the store runs dry: (x, y, width, height)
    pub const STARTER_PLATFORMS: [(f32, f32, f32, f32); 3] = [
        (380.0, 550.0, 100.0, 20.0),
        (300.0, 450.0, 120.0, 20.0),
        (500.0, 350.0, 100.0, 20.0),
    ];
}

/// Convert a world y coordinate to camera-relative (screen) space
#[inline]
pub fn world_to_screen_y(world_y: f32, camera_y: f32) -> f32 {
    world_y - camera_y
}
