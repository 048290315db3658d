//! Immutable per-critter traits and their configuration overrides.
//!
//! # Resolution
//!
//! Traits are resolved once, when a critter is created:
//!
//! ```text
//! per-critter overrides  ─or─▶  scene-wide overrides  ─or─▶  Traits::default()
//! ```
//!
//! [`TraitOverrides`] lists every recognised field as an `Option`; unknown
//! fields in a configuration file are rejected by serde rather than ignored.
//! The merged result is range-checked by [`Traits::from_overrides`] and never
//! changes afterwards: `Traits` has no setters.

use serde::{Deserialize, Serialize};

use crate::{CritterError, CritterResult};

pub const DEFAULT_CURIOSITY:        f64 = 0.0;
pub const DEFAULT_TOP_SPEED:        f64 = 5.0;
pub const DEFAULT_COLLISION_RADIUS: f64 = 50.0;

/// Upper bound of `top_speed`.  Must stay below the turn-rate base (15) so
/// the turn divisor never reaches zero.
pub const MAX_TOP_SPEED: f64 = 10.0;

/// Base of the turn-rate divisor: heading changes by `angle / (15 - top_speed)`.
pub const TURN_RATE_BASE: f64 = 15.0;

// ── Traits ────────────────────────────────────────────────────────────────────

/// The validated, immutable trait set of one critter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Traits {
    curiosity:        f64,
    top_speed:        f64,
    collision_radius: f64,
}

impl Default for Traits {
    fn default() -> Self {
        Self {
            curiosity:        DEFAULT_CURIOSITY,
            top_speed:        DEFAULT_TOP_SPEED,
            collision_radius: DEFAULT_COLLISION_RADIUS,
        }
    }
}

impl Traits {
    /// Build a trait set, checking every range.
    pub fn new(curiosity: f64, top_speed: f64, collision_radius: f64) -> CritterResult<Self> {
        if !(-1.0..=1.0).contains(&curiosity) {
            return Err(CritterError::InvalidTrait {
                name:     "curiosity",
                value:    curiosity,
                expected: "[-1, 1]",
            });
        }
        if !(0.0..=MAX_TOP_SPEED).contains(&top_speed) {
            return Err(CritterError::InvalidTrait {
                name:     "top_speed",
                value:    top_speed,
                expected: "[0, 10]",
            });
        }
        if !(collision_radius.is_finite() && collision_radius > 0.0) {
            return Err(CritterError::InvalidTrait {
                name:     "collision_radius",
                value:    collision_radius,
                expected: "(0, ∞)",
            });
        }
        Ok(Self { curiosity, top_speed, collision_radius })
    }

    /// Resolve `overrides` against the defaults.
    pub fn from_overrides(overrides: &TraitOverrides) -> CritterResult<Self> {
        let defaults = Traits::default();
        Traits::new(
            overrides.curiosity.unwrap_or(defaults.curiosity),
            overrides.top_speed.unwrap_or(defaults.top_speed),
            overrides.collision_radius.unwrap_or(defaults.collision_radius),
        )
    }

    /// In `[-1, 1]`.  Drives both whether and how often a critter wanders.
    #[inline]
    pub fn curiosity(&self) -> f64 {
        self.curiosity
    }

    /// In `[0, 10]`.  Speed cap, acceleration scale and turn damping.
    #[inline]
    pub fn top_speed(&self) -> f64 {
        self.top_speed
    }

    /// Distance from the destination at which the critter starts braking.
    #[inline]
    pub fn collision_radius(&self) -> f64 {
        self.collision_radius
    }

    /// Curiosity mapped onto `[0, 1]`: the status switch probability.
    #[inline]
    pub fn normalized_curiosity(&self) -> f64 {
        (self.curiosity + 1.0) / 2.0
    }

    /// Divisor applied to the heading error each frame.  Always in `[5, 15]`.
    #[inline]
    pub fn turn_divisor(&self) -> f64 {
        TURN_RATE_BASE - self.top_speed
    }
}

// ── TraitOverrides ────────────────────────────────────────────────────────────

/// A partial trait set: `None` fields fall back to the next layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraitOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curiosity:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_speed:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_radius: Option<f64>,
}

impl TraitOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curiosity(mut self, value: f64) -> Self {
        self.curiosity = Some(value);
        self
    }

    pub fn top_speed(mut self, value: f64) -> Self {
        self.top_speed = Some(value);
        self
    }

    pub fn collision_radius(mut self, value: f64) -> Self {
        self.collision_radius = Some(value);
        self
    }

    /// Field-by-field merge: values set in `self` win over `fallback`.
    pub fn or(self, fallback: TraitOverrides) -> TraitOverrides {
        TraitOverrides {
            curiosity:        self.curiosity.or(fallback.curiosity),
            top_speed:        self.top_speed.or(fallback.top_speed),
            collision_radius: self.collision_radius.or(fallback.collision_radius),
        }
    }

    /// `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.curiosity.is_none() && self.top_speed.is_none() && self.collision_radius.is_none()
    }
}
