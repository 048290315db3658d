use cr_core::Size;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CritterError {
    #[error("trait `{name}` = {value} is outside {expected}")]
    InvalidTrait {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },

    #[error("critter size must be positive and finite, got {0}")]
    InvalidSize(Size),
}

pub type CritterResult<T> = Result<T, CritterError>;
