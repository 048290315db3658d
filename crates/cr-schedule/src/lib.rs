//! `cr-schedule` — multi-frequency periodic task scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `Scheduler<C>`, `ScheduledTask<C>`, `TaskFn<C>`           |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`, `TaskFault`         |
//!
//! # Model (summary)
//!
//! Every task has an `interval` and a `countdown`.  Each frame the host calls
//! `advance(elapsed, &mut ctx)`:
//!
//! ```text
//! for task in registered tasks (ascending TaskId):
//!     countdown -= elapsed
//!     if countdown < 0: countdown = interval; callback(ctx, scheduler)
//! ```
//!
//! Callbacks are closures; the owner they act on is a handle they capture,
//! resolved through `ctx`.  There is no name-based dispatch.

pub mod error;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult, TaskFault, TaskResult};
pub use scheduler::{ScheduledTask, Scheduler, TaskFn};
