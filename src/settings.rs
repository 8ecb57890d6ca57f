//! Runtime settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.
//! Balance constants are not configurable and live in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    BOSS_BOUNCE_MARGIN, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_MARGIN_Y, PLAYER_SPAWN_OFFSET,
};
use crate::sim::MAX_PARTICLES;

/// Narrowest accepted field
pub const MIN_FIELD_WIDTH: f32 = 2.0 * BOSS_BOUNCE_MARGIN;
/// Shortest accepted field
pub const MIN_FIELD_HEIGHT: f32 = 2.0 * PLAYER_MARGIN_Y + PLAYER_SPAWN_OFFSET;

/// Settings loading errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Session and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; the same seed and inputs replay the same session
    pub seed: u64,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Visual Effects ===
    /// Particle effects (explosions, sparks)
    pub particles: bool,
    /// Live particle cap
    pub max_particles: usize,
    /// Screen shake on player damage
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (disables shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            particles: true,
            max_particles: MAX_PARTICLES,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace unusable field dimensions with the defaults
    ///
    /// The field must leave room for the boss strafe lane and for the
    /// player's clamp margins below the spawn point.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    fn sanitize(&mut self) {
        if !(self.field_width.is_finite() && self.field_width >= MIN_FIELD_WIDTH) {
            log::warn!("Invalid field width {}, using {}", self.field_width, FIELD_WIDTH);
            self.field_width = FIELD_WIDTH;
        }
        if !(self.field_height.is_finite() && self.field_height >= MIN_FIELD_HEIGHT) {
            log::warn!(
                "Invalid field height {}, using {}",
                self.field_height,
                FIELD_HEIGHT
            );
            self.field_height = FIELD_HEIGHT;
        }
    }
}
