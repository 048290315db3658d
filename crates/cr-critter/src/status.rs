//! The critter status machine.
//!
//! ```text
//!            update_status (p)
//! Wandering ─────────────────▶ Resting
//!     ▲                           │
//!     └───────────────────────────┘
//!            update_status (p)
//! ```
//!
//! Both directions share the same switch probability `p`, derived from the
//! critter's curiosity.  There is no terminal state.

use std::fmt;

/// What a critter is currently doing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Seeking a destination that is replaced periodically.  Initial state.
    #[default]
    Wandering,
    /// Coasting to a stop; the destination is no longer refreshed.
    Resting,
}

impl Status {
    /// The state a successful switch leads to.
    #[inline]
    pub fn toggled(self) -> Status {
        match self {
            Status::Wandering => Status::Resting,
            Status::Resting   => Status::Wandering,
        }
    }

    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, Status::Resting)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Wandering => "wandering",
            Status::Resting   => "resting",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transition produced by [`Critter::update_status`][crate::Critter::update_status].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StatusChange {
    pub from: Status,
    pub to:   Status,
}
