//! `cr-scene` — frame loop orchestrator for the critters simulation.
//!
//! # Frame loop
//!
//! ```text
//! for every host frame (delta seconds):
//!   ① Kinematics — Critter::iterate for each live critter, ascending id.
//!   ② Schedule   — Scheduler::advance(delta, &mut world):
//!                    wander task  → Critter::wander (new destination)
//!                    status task  → Critter::update_status, then
//!                                   replace or cancel the wander task
//!   ③ Clock      — FrameClock::advance(delta)
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `SceneConfig` (JSON-loadable)                              |
//! | [`world`]    | `World`, `CritterSlot`, `CritterTasks`                     |
//! | [`tasks`]    | Wander and status task closures                            |
//! | [`scene`]    | `Scene` — frame loop, spawn/despawn                        |
//! | [`builder`]  | `SceneBuilder`                                             |
//! | [`observer`] | `FrameObserver`, `NoopObserver`                            |
//! | [`error`]    | `SceneError`, `SceneResult<T>`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cr_scene::{NoopObserver, SceneBuilder, SceneConfig};
//!
//! let mut scene = SceneBuilder::new(SceneConfig::default()).build()?;
//! scene.run_frames(600, 1.0 / 60.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod scene;
pub mod tasks;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SceneBuilder;
pub use config::SceneConfig;
pub use error::{SceneError, SceneResult};
pub use observer::{FrameObserver, NoopObserver};
pub use scene::Scene;
pub use world::{CritterSlot, CritterTasks, World};
