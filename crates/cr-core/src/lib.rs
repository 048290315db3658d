//! `cr-core` — foundational types for the critters simulation.
//!
//! This crate is a dependency of every other `cr-*` crate.  It intentionally
//! has no `cr-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CritterId`, `TaskId`                                 |
//! | [`geom`]        | `Vec2`, `Size`, signed angles                         |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `CritterRng` (per-critter), `SceneRng` (global)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |
//!           | Required by scene configuration files.                     |

pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geom::{Size, Vec2};
pub use ids::{CritterId, TaskId};
pub use rng::{CritterRng, SceneRng};
pub use time::{Frame, FrameClock};
