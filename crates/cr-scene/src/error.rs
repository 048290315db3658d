use cr_core::CritterId;
use cr_critter::CritterError;
use cr_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("critter {0} not found")]
    CritterNotFound(CritterId),

    #[error("scene configuration error: {0}")]
    Config(String),

    #[error("critter error: {0}")]
    Critter(#[from] CritterError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
