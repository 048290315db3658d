//! The `Scene` struct and its frame loop.

use cr_core::{CritterId, FrameClock, SceneRng, Size};
use cr_critter::{Critter, CritterResult, TraitOverrides, Traits};
use cr_schedule::{ScheduleError, Scheduler};

use crate::tasks::{register_critter_tasks, unregister_critter_tasks};
use crate::{CritterSlot, CritterTasks, FrameObserver, SceneConfig, SceneError, SceneResult, World};

// ── Scene ─────────────────────────────────────────────────────────────────────

/// The host-facing simulation runner.
///
/// `Scene` owns the world, the scheduler that drives the critters'
/// low-frequency behaviours, and the frame clock.  Each call to
/// [`frame`](Self::frame) runs:
///
/// 1. **Kinematics**: every live critter steers and moves once, in ascending
///    `CritterId` order.
/// 2. **Scheduled behaviours**: the scheduler is advanced by the frame's
///    delta, firing wander and status tasks that came due.
/// 3. **Clock**: the frame counter and elapsed time move on.
///
/// Destination and status changes made in step 2 are therefore first seen
/// by the kinematics of the next frame.
///
/// Create via [`SceneBuilder`][crate::SceneBuilder] or [`Scene::new`].
pub struct Scene {
    config:    SceneConfig,
    clock:     FrameClock,
    world:     World,
    scheduler: Scheduler<World>,
    rng:       SceneRng,
}

impl Scene {
    /// An empty scene.  Fails if `config` does not validate.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        config.validate()?;
        Ok(Self {
            clock:     FrameClock::new(),
            world:     World::new(config.canvas),
            scheduler: Scheduler::new(),
            rng:       SceneRng::new(config.seed),
            config,
        })
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Process one frame covering `delta` seconds of host time.
    ///
    /// A task failure is returned after the frame has been counted; the
    /// kinematics of this frame have already been applied.
    pub fn frame(&mut self, delta: f64) -> SceneResult<()> {
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(ScheduleError::InvalidElapsed(delta).into());
        }
        self.world.iterate_all();
        let outcome = self.scheduler.advance(delta, &mut self.world);
        self.clock.advance(delta);
        outcome?;
        Ok(())
    }

    /// Run `n` frames of `delta` seconds each, notifying `observer`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_frames<O: FrameObserver>(
        &mut self,
        n:        u64,
        delta:    f64,
        observer: &mut O,
    ) -> SceneResult<()> {
        for _ in 0..n {
            let frame = self.clock.current_frame;
            observer.on_frame_start(frame);
            self.frame(delta)?;
            observer.on_frame_end(frame, &self.world);
        }
        observer.on_run_end(&self.clock);
        Ok(())
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Spawn a critter at a random position and register its tasks.
    ///
    /// Trait resolution, highest precedence first: `overrides`, the scene's
    /// `config.traits`, a random curiosity (if `config.randomize_curiosity`),
    /// the built-in defaults.
    pub fn spawn(&mut self, overrides: &TraitOverrides) -> SceneResult<CritterId> {
        let mut merged = overrides.or(self.config.traits);
        if merged.curiosity.is_none() && self.config.randomize_curiosity {
            merged.curiosity = Some(self.rng.gen_range(-1.0..=1.0));
        }
        let traits = Traits::from_overrides(&merged)?;

        let (seed, canvas, size) = (self.config.seed, self.world.canvas(), self.config.critter_size);
        self.insert_with(|id| Critter::spawn(id, seed, canvas, size, traits))
    }

    /// Insert a critter built by `make` and register its tasks.
    ///
    /// `make` receives the id the critter must carry.  A resting critter is
    /// registered without a wander task.
    pub fn insert_with<F>(&mut self, make: F) -> SceneResult<CritterId>
    where
        F: FnOnce(CritterId) -> CritterResult<Critter>,
    {
        let id = self.world.next_id();
        let critter = make(id)?;
        if critter.id() != id {
            return Err(SceneError::Config(format!(
                "critter built as {} but the next free id is {id}",
                critter.id()
            )));
        }

        let tasks = register_critter_tasks(
            &mut self.scheduler,
            id,
            critter.status(),
            self.config.initial_wander_interval,
            self.config.status_interval,
        )?;
        tracing::debug!(critter = %id, position = %critter.position(), "spawned");
        self.world.push(CritterSlot { critter, tasks });
        Ok(id)
    }

    /// Remove critter `id` and every task registered for it.
    pub fn despawn(&mut self, id: CritterId) -> SceneResult<Critter> {
        let slot = self.world.remove(id).ok_or(SceneError::CritterNotFound(id))?;
        unregister_critter_tasks(&mut self.scheduler, &slot.tasks);
        tracing::debug!(critter = %id, "despawned");
        Ok(slot.critter)
    }

    /// Change the canvas.  Positions are left alone; critters outside the
    /// new bounds wrap back on their next move.
    pub fn resize(&mut self, canvas: Size) -> SceneResult<()> {
        if !canvas.is_positive() {
            return Err(SceneError::Config(format!("canvas must be positive, got {canvas}")));
        }
        self.config.canvas = canvas;
        self.world.set_canvas(canvas);
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn critter(&self, id: CritterId) -> Option<&Critter> {
        self.world.critter(id)
    }

    /// Live critters in ascending id order.
    pub fn critters(&self) -> impl Iterator<Item = &Critter> + '_ {
        self.world.critters()
    }

    /// Tasks currently registered for critter `id`.
    pub fn tasks_of(&self, id: CritterId) -> Option<CritterTasks> {
        self.world.slot(id).map(|s| s.tasks)
    }

    pub fn scheduler(&self) -> &Scheduler<World> {
        &self.scheduler
    }

    /// Mutable scheduler access, for hosts that add their own periodic
    /// tasks over the world.
    pub fn scheduler_mut(&mut self) -> &mut Scheduler<World> {
        &mut self.scheduler
    }
}
