//! Deterministic per-critter and scene-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each critter gets its own independent `SmallRng` seeded by:
//!
//!   seed = scene_seed XOR (critter_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive critter IDs uniformly across the seed space.
//! This means:
//!
//! - Critters never share RNG state, so the order in which their scheduled
//!   behaviours fire never changes what any one of them draws.
//! - Spawning more critters does not disturb the seeds of existing ones, so
//!   a scene replays identically as its population grows.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CritterId, Size, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CritterRng ────────────────────────────────────────────────────────────────

/// Per-critter deterministic RNG.
///
/// Owned by the critter it belongs to; drives its spawn placement, its
/// random destinations and its status coin flips.
#[derive(Clone, Debug)]
pub struct CritterRng(SmallRng);

impl CritterRng {
    /// Seed deterministically from the scene seed and a critter ID.
    pub fn new(scene_seed: u64, critter: CritterId) -> Self {
        let seed = scene_seed ^ (critter.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CritterRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform point inside `canvas`.
    #[inline]
    pub fn point_in(&mut self, canvas: Size) -> Vec2 {
        canvas.sample_point(&mut self.0)
    }
}

// ── SceneRng ──────────────────────────────────────────────────────────────────

/// Scene-level RNG for operations that do not belong to a single critter,
/// such as drawing the trait overrides of a freshly spawned population.
pub struct SceneRng(SmallRng);

impl SceneRng {
    pub fn new(seed: u64) -> Self {
        SceneRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
