use cr_core::TaskId;
use thiserror::Error;

/// Boxed error returned by a failing task callback.
pub type TaskFault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a task callback returns.
pub type TaskResult = Result<(), TaskFault>;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("task interval must be positive and finite, got {0}")]
    InvalidInterval(f64),

    #[error("elapsed time must be non-negative and finite, got {0}")]
    InvalidElapsed(f64),

    #[error("advance called from inside a firing task")]
    Reentrant,

    #[error("{id} failed: {source}")]
    TaskFailed {
        id:     TaskId,
        #[source]
        source: TaskFault,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
