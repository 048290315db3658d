//! Frame observer trait for progress reporting and telemetry overlays.

use cr_core::{Frame, FrameClock};

use crate::World;

/// Callbacks invoked by [`Scene::run_frames`][crate::Scene::run_frames] at
/// key points in the frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — head-count printer
///
/// ```rust,ignore
/// struct HeadCount { every: u64 }
///
/// impl FrameObserver for HeadCount {
///     fn on_frame_end(&mut self, frame: Frame, world: &World) {
///         if frame.0 % self.every == 0 {
///             let (wandering, resting) = world.status_counts();
///             println!("{frame}: {wandering} wandering, {resting} resting");
///         }
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called once kinematics and scheduled behaviours for `frame` have run.
    fn on_frame_end(&mut self, _frame: Frame, _world: &World) {}

    /// Called once after the final frame of a run.
    fn on_run_end(&mut self, _clock: &FrameClock) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
