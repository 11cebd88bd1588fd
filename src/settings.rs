//! Game tuning and cosmetic variants
//!
//! Loaded from JSON at startup; every field falls back to the defaults in
//! [`crate::consts`] so partial files only override what they name.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating tuning
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
    #[error("unknown variant `{0}` (expected classic, triple-jump or planks)")]
    UnknownVariant(String),
}

/// Repository variants, expressed as tuning presets instead of forked loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Double jump, stable platforms only
    #[default]
    Classic,
    /// Two extra jumps in the air
    TripleJump,
    /// Single jump, half of the generated planks crumble under the actor
    Planks,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::TripleJump => "triple-jump",
            Variant::Planks => "planks",
        }
    }

    /// Extra air jumps granted after leaving the ground
    pub fn max_extra_jumps(&self) -> u32 {
        match self {
            Variant::Classic => MAX_EXTRA_JUMPS,
            Variant::TripleJump => 2,
            Variant::Planks => 0,
        }
    }

    /// Crumbling plank settings, if this variant generates any
    pub fn unstable(&self) -> Option<UnstableTuning> {
        match self {
            Variant::Planks => Some(UnstableTuning::default()),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" | "double" | "double-jump" => Ok(Variant::Classic),
            "triple" | "triple-jump" => Ok(Variant::TripleJump),
            "planks" | "plank" => Ok(Variant::Planks),
            _ => Err(SettingsError::UnknownVariant(s.to_string())),
        }
    }
}

/// How the renderer should paint behind the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    Solid { color: [u8; 3] },
    Image { path: PathBuf },
    Video { path: PathBuf },
}

impl Default for Backdrop {
    fn default() -> Self {
        Backdrop::Solid {
            color: [135, 206, 235],
        }
    }
}

impl Backdrop {
    /// Swap a missing image/video asset for the default solid fill
    pub fn resolve(self) -> Backdrop {
        match &self {
            Backdrop::Solid { .. } => self,
            Backdrop::Image { path } | Backdrop::Video { path } => {
                if path.exists() {
                    self
                } else {
                    log::warn!(
                        "Backdrop asset {} not found, using a solid fill instead",
                        path.display()
                    );
                    Backdrop::default()
                }
            }
        }
    }
}

/// Actor body and movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorTuning {
    pub width: f32,
    pub height: f32,
    /// Top-left corner at run start
    pub spawn: Vec2,
    pub gravity: f32,
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    pub near_peak_threshold: f32,
    pub max_extra_jumps: u32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            width: ACTOR_WIDTH,
            height: ACTOR_HEIGHT,
            spawn: Vec2::new(ACTOR_SPAWN_X, ACTOR_SPAWN_Y),
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            near_peak_threshold: NEAR_PEAK_THRESHOLD,
            max_extra_jumps: MAX_EXTRA_JUMPS,
        }
    }
}

/// Crumbling plank behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnstableTuning {
    /// Frames of contact a plank survives
    pub decay_frames: u32,
    /// Probability that a generated platform is unstable
    pub chance: f32,
}

impl Default for UnstableTuning {
    fn default() -> Self {
        Self {
            decay_frames: 60,
            chance: 0.5,
        }
    }
}

/// Procedural platform layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformTuning {
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    /// Vertical distance between consecutive platforms
    pub min_gap: f32,
    pub max_gap: f32,
    /// Horizontal keep-out at both world edges
    pub margin: f32,
    pub unstable: Option<UnstableTuning>,
}

impl Default for PlatformTuning {
    fn default() -> Self {
        Self {
            height: PLATFORM_HEIGHT,
            min_width: PLATFORM_MIN_WIDTH,
            max_width: PLATFORM_MAX_WIDTH,
            min_gap: PLATFORM_MIN_GAP,
            max_gap: PLATFORM_MAX_GAP,
            margin: PLATFORM_MARGIN,
            unstable: None,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub variant: Variant,
    pub world_width: f32,
    pub viewport_height: f32,
    pub actor: ActorTuning,
    pub platforms: PlatformTuning,
    pub camera_smoothing: f32,
    pub hazard_offset: f32,
    pub distance_unit: f32,
    pub frame_rate: u32,
    pub backdrop: Backdrop,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            world_width: WORLD_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            actor: ActorTuning::default(),
            platforms: PlatformTuning::default(),
            camera_smoothing: CAMERA_SMOOTHING,
            hazard_offset: HAZARD_OFFSET,
            distance_unit: DISTANCE_UNIT,
            frame_rate: FRAME_RATE,
            backdrop: Backdrop::default(),
        }
    }
}

impl Tuning {
    /// Create tuning from a variant (applies preset defaults)
    pub fn from_preset(variant: Variant) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(variant);
        tuning
    }

    /// Apply a variant preset (updates variant-dependent settings only)
    pub fn apply_preset(&mut self, variant: Variant) {
        self.variant = variant;
        self.actor.max_extra_jumps = variant.max_extra_jumps();
        self.platforms.unstable = variant.unstable();
    }

    /// Height gained by a single jump from rest, stepping the same way the
    /// simulation does (impulse, then gravity, then integrate).
    pub fn jump_apex_height(&self) -> f32 {
        let gravity = self.actor.gravity;
        let mut vy = self.actor.jump_impulse;
        if gravity <= 0.0 || vy >= 0.0 {
            return 0.0;
        }

        let mut rise = 0.0;
        loop {
            vy += gravity;
            if vy >= 0.0 {
                break;
            }
            rise -= vy;
        }
        rise
    }

    /// Reject configurations the simulation cannot run safely
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));
        let a = &self.actor;
        let p = &self.platforms;

        if self.world_width <= 0.0 || self.viewport_height <= 0.0 {
            return invalid("world width and viewport height must be positive".into());
        }
        if a.width <= 0.0 || a.height <= 0.0 || a.width > self.world_width {
            return invalid(format!(
                "actor size {}x{} does not fit a world {} wide",
                a.width, a.height, self.world_width
            ));
        }
        if a.gravity <= 0.0 || a.jump_impulse >= 0.0 {
            return invalid("gravity must pull down and jumps must push up".into());
        }
        if p.height <= 0.0 || p.min_width <= 0.0 || p.min_width > p.max_width {
            return invalid(format!(
                "platform widths {}..={} (height {}) are not a positive range",
                p.min_width, p.max_width, p.height
            ));
        }
        if p.max_width + 2.0 * p.margin > self.world_width {
            return invalid(format!(
                "platforms up to {} wide with margin {} do not fit a world {} wide",
                p.max_width, p.margin, self.world_width
            ));
        }
        if p.min_gap <= 0.0 || p.min_gap > p.max_gap {
            return invalid(format!(
                "platform gaps {}..={} are not a positive range",
                p.min_gap, p.max_gap
            ));
        }
        let apex = self.jump_apex_height();
        if p.max_gap > apex {
            return invalid(format!(
                "max gap {} exceeds the jump apex height {}",
                p.max_gap, apex
            ));
        }
        if let Some(unstable) = &p.unstable {
            if !(0.0..=1.0).contains(&unstable.chance) {
                return invalid(format!("unstable chance {} outside 0..=1", unstable.chance));
            }
        }
        if self.camera_smoothing <= 0.0 || self.camera_smoothing > 1.0 {
            return invalid(format!(
                "camera smoothing {} outside (0, 1]",
                self.camera_smoothing
            ));
        }
        if self.distance_unit <= 0.0 {
            return invalid("distance unit must be positive".into());
        }
        if self.frame_rate == 0 {
            return invalid("frame rate must be positive".into());
        }
        Ok(())
    }

    /// Load tuning from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Tuning = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Pretty JSON for `--dump-config`
    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
