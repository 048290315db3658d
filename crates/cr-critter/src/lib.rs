//! `cr-critter` — the critter agent: traits, status machine, kinematics.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`traits`]     | `Traits` (immutable), `TraitOverrides` (partial config)  |
//! | [`status`]     | `Status`, `StatusChange`                                 |
//! | [`kinematics`] | `Velocity`, `steer`, `wrap_position`                     |
//! | [`critter`]    | `Critter` — per-frame `iterate`, scheduled behaviours    |
//! | [`error`]      | `CritterError`, `CritterResult<T>`                       |
//!
//! # Two cadences
//!
//! A critter is updated at two rates:
//!
//! 1. **Every frame** the host calls [`Critter::iterate`], which steers and
//!    moves it.
//! 2. **On scheduler ticks** [`Critter::wander`] and
//!    [`Critter::update_status`] change where it wants to go and whether it
//!    wants to go anywhere at all.
//!
//! This crate knows nothing about the scheduler; `cr-scene` wires the second
//! cadence up.

pub mod critter;
pub mod error;
pub mod kinematics;
pub mod status;
pub mod traits;


pub use critter::Critter;
pub use error::{CritterError, CritterResult};
pub use kinematics::Velocity;
pub use status::{Status, StatusChange};
pub use traits::{TraitOverrides, Traits};
