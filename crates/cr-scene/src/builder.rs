//! Fluent builder for constructing a [`Scene`].

use cr_critter::TraitOverrides;

use crate::{Scene, SceneConfig, SceneResult};

/// Fluent builder for [`Scene`].
///
/// `build` spawns `config.critter_count` critters with no per-critter
/// overrides, then one critter per `.critter(..)` call, in call order.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = SceneBuilder::new(SceneConfig { critter_count: 10, ..Default::default() })
///     .critter(TraitOverrides::new().curiosity(1.0))
///     .build()?;
/// scene.run_frames(600, 1.0 / 60.0, &mut NoopObserver)?;
/// ```
pub struct SceneBuilder {
    config:   SceneConfig,
    critters: Vec<TraitOverrides>,
}

impl SceneBuilder {
    pub fn new(config: SceneConfig) -> Self {
        Self { config, critters: Vec::new() }
    }

    /// Add one critter with explicit trait overrides.
    pub fn critter(mut self, overrides: TraitOverrides) -> Self {
        self.critters.push(overrides);
        self
    }

    /// Validate the configuration, spawn every critter and register their
    /// tasks.
    pub fn build(self) -> SceneResult<Scene> {
        let defaults = std::iter::repeat_n(TraitOverrides::default(), self.config.critter_count);
        let mut scene = Scene::new(self.config)?;
        for overrides in defaults.chain(self.critters) {
            scene.spawn(&overrides)?;
        }
        tracing::debug!(critters = scene.world().len(), tasks = scene.scheduler().len(), "scene built");
        Ok(scene)
    }
}
