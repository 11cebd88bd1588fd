//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; components get
//! the pieces they need by reference from [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hazard::Hazard;
use super::platforms::PlatformStore;
use super::rect::Rect;
use crate::settings::{ActorTuning, Tuning};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Actor is climbing
    Playing,
    /// Flood caught the actor; waiting for restart or quit
    GameOver,
}

/// The player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Units per frame; positive y is down
    pub vel: Vec2,
    /// Resting on a platform this frame
    pub grounded: bool,
    /// Air jumps spent since last leaving the ground
    pub extra_jumps_used: u32,
    /// Reserved gate, never cleared by the current jump rules
    pub can_jump: bool,
}

impl Actor {
    /// Fresh actor at the spawn point, at rest and airborne
    pub fn spawn(tuning: &ActorTuning) -> Self {
        Self {
            rect: Rect::new(tuning.spawn.x, tuning.spawn.y, tuning.width, tuning.height),
            vel: Vec2::ZERO,
            grounded: false,
            extra_jumps_used: 0,
            can_jump: true,
        }
    }
}

/// Platform behaviour under the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Stable,
    /// Crumbles after `decay_frames` frames of contact
    Unstable { decay_frames: u32, contact_frames: u32 },
}

/// A landing pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    /// Count one frame of the actor standing here.
    /// Returns true once an unstable platform has worn through.
    pub fn register_contact(&mut self) -> bool {
        match &mut self.kind {
            PlatformKind::Stable => false,
            PlatformKind::Unstable {
                decay_frames,
                contact_frames,
            } => {
                *contact_frames += 1;
                *contact_frames > *decay_frames
            }
        }
    }

    /// Fraction of the decay budget already used (0 for stable platforms)
    pub fn wear(&self) -> f32 {
        match self.kind {
            PlatformKind::Stable => 0.0,
            PlatformKind::Unstable {
                decay_frames,
                contact_frames,
            } => {
                if decay_frames == 0 {
                    1.0
                } else {
                    (contact_frames as f32 / decay_frames as f32).min(1.0)
                }
            }
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tuning the run was created with
    pub tuning: Tuning,
    pub phase: RunPhase,
    pub actor: Actor,
    pub platforms: PlatformStore,
    /// World-to-screen vertical offset
    pub camera_y: f32,
    pub hazard: Hazard,
    /// Best distance climbed this run
    pub score: u64,
    /// Best score over every run of this process
    pub best_score: u64,
    /// Frames simulated in the current run
    pub time_ticks: u64,
    /// Runs started, including the first
    pub runs: u32,
}

impl GameState {
    /// Create a new game state with the given seed.
    ///
    /// `tuning` should already have passed [`Tuning::validate`]; debug builds
    /// assert it.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let platforms = PlatformStore::new(seed, &tuning);
        Self {
            seed,
            actor: Actor::spawn(&tuning.actor),
            platforms,
            camera_y: 0.0,
            hazard: Hazard::new(tuning.viewport_height, tuning.hazard_offset),
            phase: RunPhase::Playing,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            runs: 1,
            tuning,
        }
    }

    /// Put every entity back to its run-start state.
    /// The platform RNG keeps its stream so each run lays out differently.
    pub fn reset(&mut self) {
        self.actor = Actor::spawn(&self.tuning.actor);
        self.platforms.reset();
        self.camera_y = 0.0;
        self.hazard = Hazard::new(self.tuning.viewport_height, self.tuning.hazard_offset);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = RunPhase::Playing;
        self.runs += 1;
    }

    /// Raise the score to the distance climbed so far; never lowers it
    pub fn update_score(&mut self) {
        let climbed = (self.camera_y.abs() / self.tuning.distance_unit).floor() as u64;
        self.score = self.score.max(climbed);
        self.best_score = self.best_score.max(self.score);
    }
}
