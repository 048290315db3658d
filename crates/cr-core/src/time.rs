//! Frame-clock model.
//!
//! # Design
//!
//! The host decides when frames happen and how much wall time each one
//! covers.  Two quantities are tracked:
//!
//! - `Frame`: an integer frame counter, the unit of the per-frame kinematics
//!   (velocity decay and acceleration are applied once per frame, regardless
//!   of the frame's duration).
//! - elapsed seconds: the sum of every frame delta handed to the scene,
//!   which is what the scheduler's intervals are measured against.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and the accumulated host time.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// The frame about to be (or being) processed.
    pub current_frame: Frame,
    /// Sum of all deltas passed to [`advance`](Self::advance), in seconds.
    pub elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which covered `delta_secs` of host time.
    #[inline]
    pub fn advance(&mut self, delta_secs: f64) {
        self.current_frame = self.current_frame + 1;
        self.elapsed_secs += delta_secs;
    }

    /// Average frame rate so far, or `None` before the first frame.
    pub fn mean_fps(&self) -> Option<f64> {
        (self.current_frame.0 > 0 && self.elapsed_secs > 0.0)
            .then(|| self.current_frame.0 as f64 / self.elapsed_secs)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed_secs)
    }
}
