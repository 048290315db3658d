//! `Scheduler` — a registry of independently timed periodic callbacks.
//!
//! # Overview
//!
//! Critter kinematics run every frame, but their higher-level behaviours
//! ("pick a new destination", "reconsider resting") run far less often, at
//! intervals that are neither integer multiples of the frame time nor of each
//! other.  Rather than give every critter its own timers, all of them share a
//! single countdown map that the host advances once per frame by the frame's
//! elapsed time.
//!
//! # Firing rule
//!
//! ```text
//! countdown -= elapsed
//! if countdown < 0 { countdown = interval; fire() }
//! ```
//!
//! The reset discards any overshoot, so a task driven by coarse frames drifts
//! late rather than firing in bursts to catch up.  Tasks fire in ascending
//! `TaskId` order within one `advance`.
//!
//! # Context and ownership
//!
//! The scheduler is generic over a context `C` that `advance` lends to every
//! firing callback as `&mut C`.  Callbacks identify their owner by capturing
//! a handle (e.g. a `CritterId`) and looking it up in the context, so the
//! scheduler never keeps an owner alive.  Callbacks also receive
//! `&mut Scheduler<C>` so a behaviour can re-register or cancel tasks
//! (including itself) while firing.

use std::collections::BTreeMap;
use std::fmt;

use cr_core::TaskId;

use crate::{ScheduleError, ScheduleResult, TaskResult};

/// Boxed task callback.  See the module docs for the two arguments.
pub type TaskFn<C> = Box<dyn FnMut(&mut C, &mut Scheduler<C>) -> TaskResult>;

// ── ScheduledTask ─────────────────────────────────────────────────────────────

/// One registry entry.
pub struct ScheduledTask<C> {
    callback:  TaskFn<C>,
    interval:  f64,
    countdown: f64,
}

impl<C> ScheduledTask<C> {
    /// Time between firings, in seconds.
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Time left until the next firing, in seconds.
    #[inline]
    pub fn countdown(&self) -> f64 {
        self.countdown
    }
}

impl<C> fmt::Debug for ScheduledTask<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("interval", &self.interval)
            .field("countdown", &self.countdown)
            .finish_non_exhaustive()
    }
}

// ── Firing state ──────────────────────────────────────────────────────────────

/// Bookkeeping for the task whose callback is currently running.
///
/// The task is taken out of the registry while its callback borrows the
/// scheduler, so `unregister` on that id has to be remembered here instead.
#[derive(Debug, Clone, Copy)]
struct Firing {
    id:        TaskId,
    cancelled: bool,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Periodic task registry, advanced by elapsed time.
///
/// Construct one per scene; there is no global instance.
pub struct Scheduler<C> {
    tasks:   BTreeMap<TaskId, ScheduledTask<C>>,
    next_id: TaskId,
    firing:  Option<Firing>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self {
            tasks:   BTreeMap::new(),
            next_id: TaskId(0),
            firing:  None,
        }
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `callback` to fire every `interval` seconds.
    ///
    /// The first firing happens once more than `interval` seconds have been
    /// advanced.  `interval` must be strictly positive and finite.
    pub fn register<F>(&mut self, callback: F, interval: f64) -> ScheduleResult<TaskId>
    where
        F: FnMut(&mut C, &mut Scheduler<C>) -> TaskResult + 'static,
    {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ScheduleError::InvalidInterval(interval));
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.tasks.insert(
            id,
            ScheduledTask { callback: Box::new(callback), interval, countdown: interval },
        );
        Ok(id)
    }

    /// Remove the task `id`.
    ///
    /// Returns `true` if a task was removed.  Unknown ids (never issued, or
    /// already removed) are a no-op returning `false`.  A task may remove
    /// itself from its own callback.
    pub fn unregister(&mut self, id: TaskId) -> bool {
        if self.tasks.remove(&id).is_some() {
            return true;
        }
        match &mut self.firing {
            Some(firing) if firing.id == id && !firing.cancelled => {
                firing.cancelled = true;
                true
            }
            _ => false,
        }
    }

    // ── Advancing ─────────────────────────────────────────────────────────

    /// Advance every task by `elapsed` seconds, firing those that come due.
    ///
    /// Only tasks registered when the call starts take part:
    ///
    /// - tasks registered by a callback during this call are neither
    ///   decremented nor fired until the next call;
    /// - tasks unregistered by a callback before being reached are skipped.
    ///
    /// A failing callback aborts the call: the error is returned as
    /// [`ScheduleError::TaskFailed`] and tasks after it are left untouched
    /// for this call.  The failed task itself stays registered with its
    /// countdown already reset.
    pub fn advance(&mut self, elapsed: f64, ctx: &mut C) -> ScheduleResult<()> {
        if self.firing.is_some() {
            return Err(ScheduleError::Reentrant);
        }
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(ScheduleError::InvalidElapsed(elapsed));
        }

        let snapshot: Vec<TaskId> = self.tasks.keys().copied().collect();
        for id in snapshot {
            let Some(task) = self.tasks.get_mut(&id) else {
                continue;
            };
            task.countdown -= elapsed;
            if task.countdown >= 0.0 {
                continue;
            }
            task.countdown = task.interval;
            self.fire(id, ctx)?;
        }
        Ok(())
    }

    /// Run the callback of `id`, which must currently be registered.
    fn fire(&mut self, id: TaskId, ctx: &mut C) -> ScheduleResult<()> {
        let Some(mut task) = self.tasks.remove(&id) else {
            return Ok(());
        };
        tracing::trace!(%id, interval = task.interval, "task fired");

        self.firing = Some(Firing { id, cancelled: false });
        let outcome = (task.callback)(ctx, self);
        let cancelled = self.firing.take().is_some_and(|f| f.cancelled);

        if !cancelled {
            self.tasks.insert(id, task);
        }
        outcome.map_err(|source| ScheduleError::TaskFailed { id, source })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `true` if `id` is currently registered.
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// The entry for `id`, if registered.
    pub fn task(&self, id: TaskId) -> Option<&ScheduledTask<C>> {
        self.tasks.get(&id)
    }

    /// Interval of task `id`, if registered.
    pub fn interval(&self, id: TaskId) -> Option<f64> {
        self.tasks.get(&id).map(ScheduledTask::interval)
    }

    /// Remaining countdown of task `id`, if registered.
    pub fn countdown(&self, id: TaskId) -> Option<f64> {
        self.tasks.get(&id).map(ScheduledTask::countdown)
    }

    /// Registered ids in ascending (firing) order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.keys().copied()
    }
}

impl<C> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .finish()
    }
}
