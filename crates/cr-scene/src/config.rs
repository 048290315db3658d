//! Scene configuration.
//!
//! Typically loaded from a JSON file by the host binary and handed to
//! [`SceneBuilder`][crate::SceneBuilder].  Every field has a default, so a
//! file only needs to list what it changes; unknown fields are rejected.
//!
//! ```json
//! {
//!   "canvas": { "width": 1280, "height": 720 },
//!   "critter_count": 30,
//!   "seed": 7,
//!   "traits": { "top_speed": 4 }
//! }
//! ```

use std::path::Path;

use cr_core::Size;
use cr_critter::{TraitOverrides, Traits};
use cr_critter::critter::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// Top-level scene configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Canvas extent.  Destinations are sampled inside it; critters wrap
    /// around its edges.
    pub canvas: Size,

    /// Number of critters spawned by `SceneBuilder::build` in addition to
    /// any added explicitly.
    pub critter_count: usize,

    /// Body size of every spawned critter.  Also the wrap margin.
    pub critter_size: Size,

    /// Master RNG seed.  The same seed always produces identical scenes.
    pub seed: u64,

    /// Seconds between status reconsiderations.  Independent of curiosity.
    pub status_interval: f64,

    /// Seconds between destination changes for a freshly spawned critter.
    /// After a rest, the interval is derived from curiosity instead.
    pub initial_wander_interval: f64,

    /// Draw a uniform curiosity in `[-1, 1]` for every spawned critter whose
    /// overrides (per-critter or scene-wide) leave curiosity unset.
    pub randomize_curiosity: bool,

    /// Scene-wide trait overrides, applied beneath per-critter ones.
    pub traits: TraitOverrides,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas:                  Size::new(800.0, 600.0),
            critter_count:           12,
            critter_size:            DEFAULT_SIZE,
            seed:                    0,
            status_interval:         5.0,
            initial_wander_interval: 1.0,
            randomize_curiosity:     true,
            traits:                  TraitOverrides::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: &Path) -> SceneResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every field that has a constrained range.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.canvas.is_positive() {
            return Err(SceneError::Config(format!("canvas must be positive, got {}", self.canvas)));
        }
        if !self.critter_size.is_positive() {
            return Err(SceneError::Config(format!(
                "critter_size must be positive, got {}",
                self.critter_size
            )));
        }
        for (name, value) in [
            ("status_interval", self.status_interval),
            ("initial_wander_interval", self.initial_wander_interval),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        Traits::from_overrides(&self.traits)?;
        Ok(())
    }
}
