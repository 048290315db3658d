//! Scheduler wiring for the critters' low-frequency behaviours.
//!
//! Each critter owns at most one wander task and exactly one status task.
//! Both are closures that capture only the critter's `CritterId` and resolve
//! it through the `World` on every firing.

use cr_core::CritterId;
use cr_critter::Status;
use cr_schedule::{ScheduleResult, Scheduler, TaskResult};

use crate::{CritterTasks, SceneError, World};

/// Refresh the destination of critter `id`.
pub fn wander_task(id: CritterId) -> impl FnMut(&mut World, &mut Scheduler<World>) -> TaskResult {
    move |world, _| {
        let canvas = world.canvas();
        let critter = world.critter_mut(id).ok_or(SceneError::CritterNotFound(id))?;
        critter.wander(canvas);
        Ok(())
    }
}

/// Reconsider the status of critter `id`, replacing or cancelling its wander
/// task on a transition.
pub fn status_task(id: CritterId) -> impl FnMut(&mut World, &mut Scheduler<World>) -> TaskResult {
    move |world, scheduler| {
        let slot = world.slot_mut(id).ok_or(SceneError::CritterNotFound(id))?;
        let Some(change) = slot.critter.update_status() else {
            return Ok(());
        };
        tracing::debug!(critter = %id, from = %change.from, to = %change.to, "status changed");

        if let Some(old) = slot.tasks.wander.take() {
            scheduler.unregister(old);
        }
        if change.to == Status::Wandering {
            let interval = slot.critter.wander_interval();
            slot.tasks.wander = Some(scheduler.register(wander_task(id), interval)?);
        }
        Ok(())
    }
}

/// Register the tasks of a critter that starts in `status`.
///
/// A resting critter gets no wander task until it resumes wandering.
pub fn register_critter_tasks(
    scheduler:       &mut Scheduler<World>,
    id:              CritterId,
    status:          Status,
    wander_interval: f64,
    status_interval: f64,
) -> ScheduleResult<CritterTasks> {
    let wander = match status {
        Status::Wandering => Some(scheduler.register(wander_task(id), wander_interval)?),
        Status::Resting   => None,
    };
    let status = match scheduler.register(status_task(id), status_interval) {
        Ok(task) => task,
        Err(e) => {
            if let Some(task) = wander {
                scheduler.unregister(task);
            }
            return Err(e);
        }
    };
    Ok(CritterTasks { wander, status: Some(status) })
}

/// Remove every task registered for a critter.
pub fn unregister_critter_tasks(scheduler: &mut Scheduler<World>, tasks: &CritterTasks) {
    for task in tasks.ids() {
        scheduler.unregister(task);
    }
}
