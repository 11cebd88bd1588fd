//! Procedural platform store
//!
//! Keeps an ordered list of platforms (oldest first, so the last entry is the
//! most recently generated and normally the highest). Maintenance runs once
//! per frame relative to the camera:
//! - `prune` drops everything outside a band of two viewports either side
//! - `generate_if_needed` stacks new platforms until one sits a full viewport
//!   above the camera
//!
//! Together they bound memory and collision cost independent of run length.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Platform, PlatformKind};
use crate::consts::{MAX_PLATFORMS_PER_FRAME, STARTER_PLATFORMS};
use crate::settings::{PlatformTuning, Tuning};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStore {
    platforms: Vec<Platform>,
    layout: PlatformTuning,
    world_width: f32,
    viewport_height: f32,
    rng: Pcg32,
    next_id: u32,
}

impl PlatformStore {
    /// Store seeded with the starter layout.
    ///
    /// `tuning` must pass [`Tuning::validate`]; an empty width or gap range
    /// would panic at the first generation.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "invalid tuning passed to PlatformStore::new"
        );
        let mut store = Self {
            platforms: Vec::new(),
            layout: tuning.platforms.clone(),
            world_width: tuning.world_width,
            viewport_height: tuning.viewport_height,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        store.reseed();
        store
    }

    fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append the fixed starter platforms
    fn reseed(&mut self) {
        for (x, y, w, h) in STARTER_PLATFORMS {
            let id = self.next_platform_id();
            self.platforms.push(Platform {
                id,
                rect: Rect::new(x, y, w, h),
                kind: PlatformKind::Stable,
            });
        }
    }

    /// Back to exactly the starter layout (new run)
    pub fn reset(&mut self) {
        self.platforms.clear();
        self.reseed();
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Platform> {
        self.platforms.iter_mut()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    /// Top edge of the highest (smallest y) live platform
    pub fn highest_top(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.rect.top()).reduce(f32::min)
    }

    /// Remove a platform by id, keeping the order of the rest
    pub fn remove(&mut self, id: u32) -> Option<Platform> {
        let index = self.platforms.iter().position(|p| p.id == id)?;
        Some(self.platforms.remove(index))
    }

    /// Generate until the highest platform is at least one viewport above the
    /// camera. An empty store is reseeded with the starter layout first.
    /// Returns how many platforms were added.
    pub fn generate_if_needed(&mut self, camera_y: f32) -> usize {
        if self.platforms.is_empty() {
            log::debug!("Platform store ran dry at camera {camera_y:.1}, reseeding");
            self.reseed();
        }

        let ceiling = camera_y - self.viewport_height;
        let mut added = 0;
        while self.highest_top().is_some_and(|top| top > ceiling) {
            if added == MAX_PLATFORMS_PER_FRAME {
                log::warn!(
                    "Generated {added} platforms in one frame, deferring the rest (camera {camera_y:.1})"
                );
                break;
            }
            let Some(anchor) = self.platforms.last().map(|p| p.rect.top()) else {
                break;
            };
            let platform = self.spawn_above(anchor);
            self.platforms.push(platform);
            added += 1;
        }

        if added > 1 {
            log::debug!("Generated {added} platforms (camera {camera_y:.1})");
        }
        added
    }

    /// Roll a new platform one random gap above `anchor_y`
    fn spawn_above(&mut self, anchor_y: f32) -> Platform {
        let layout = &self.layout;

        let width = self.rng.random_range(layout.min_width..=layout.max_width);
        let max_x = self.world_width - width - layout.margin;
        let x = if max_x > layout.margin {
            self.rng.random_range(layout.margin..=max_x)
        } else {
            layout.margin
        };
        let gap = self.rng.random_range(layout.min_gap..=layout.max_gap);

        let kind = match layout.unstable {
            Some(unstable) if self.rng.random_bool(unstable.chance.clamp(0.0, 1.0) as f64) => {
                PlatformKind::Unstable {
                    decay_frames: unstable.decay_frames,
                    contact_frames: 0,
                }
            }
            _ => PlatformKind::Stable,
        };

        let height = layout.height;
        Platform {
            id: self.next_platform_id(),
            rect: Rect::new(x, anchor_y - gap, width, height),
            kind,
        }
    }

    /// Drop platforms whose top is outside `(camera_y - 2h, camera_y + 2h)`.
    /// Survivors are collected into a fresh list in their original order.
    /// Returns how many were dropped.
    pub fn prune(&mut self, camera_y: f32) -> usize {
        let low = camera_y - 2.0 * self.viewport_height;
        let high = camera_y + 2.0 * self.viewport_height;

        let before = self.platforms.len();
        self.platforms = std::mem::take(&mut self.platforms)
            .into_iter()
            .filter(|p| p.rect.top() > low && p.rect.top() < high)
            .collect();
        before - self.platforms.len()
    }
}
