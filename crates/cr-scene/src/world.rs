//! `World` — the state every scheduled task operates on.
//!
//! Critters live in slots indexed by `CritterId`.  A despawned critter leaves
//! an empty slot behind and its id is never reissued, so a handle held by a
//! task can only ever resolve to its own critter or to nothing.

use cr_core::{CritterId, Size, TaskId};
use cr_critter::{Critter, Status};

/// The scheduler tasks currently registered on behalf of one critter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CritterTasks {
    /// Destination refresh.  `None` while resting.
    pub wander: Option<TaskId>,
    /// Status reconsideration.  Registered for the critter's whole life.
    pub status: Option<TaskId>,
}

impl CritterTasks {
    /// All live task ids.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> {
        self.wander.into_iter().chain(self.status)
    }
}

/// A critter plus its scheduling bookkeeping.
#[derive(Debug)]
pub struct CritterSlot {
    pub critter: Critter,
    pub tasks:   CritterTasks,
}

/// Canvas bounds and the critter population.
#[derive(Debug)]
pub struct World {
    canvas: Size,
    slots:  Vec<Option<CritterSlot>>,
}

impl World {
    pub fn new(canvas: Size) -> Self {
        Self { canvas, slots: Vec::new() }
    }

    #[inline]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The id the next inserted critter must carry.
    #[inline]
    pub fn next_id(&self) -> CritterId {
        CritterId(self.slots.len() as u32)
    }

    // ── Slots ─────────────────────────────────────────────────────────────

    pub(crate) fn set_canvas(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    /// Append `slot`.  The caller guarantees `slot.critter.id() == next_id()`.
    pub(crate) fn push(&mut self, slot: CritterSlot) {
        debug_assert_eq!(slot.critter.id(), self.next_id());
        self.slots.push(Some(slot));
    }

    pub(crate) fn remove(&mut self, id: CritterId) -> Option<CritterSlot> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    pub fn slot(&self, id: CritterId) -> Option<&CritterSlot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn slot_mut(&mut self, id: CritterId) -> Option<&mut CritterSlot> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    // ── Critters ──────────────────────────────────────────────────────────

    pub fn critter(&self, id: CritterId) -> Option<&Critter> {
        self.slot(id).map(|s| &s.critter)
    }

    pub fn critter_mut(&mut self, id: CritterId) -> Option<&mut Critter> {
        self.slot_mut(id).map(|s| &mut s.critter)
    }

    /// Live critters in ascending id order.
    pub fn critters(&self) -> impl Iterator<Item = &Critter> + '_ {
        self.slots.iter().flatten().map(|s| &s.critter)
    }

    /// Number of live critters.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(wandering, resting)` head counts.
    pub fn status_counts(&self) -> (usize, usize) {
        self.critters().fold((0, 0), |(w, r), c| match c.status() {
            Status::Wandering => (w + 1, r),
            Status::Resting   => (w, r + 1),
        })
    }

    /// Run one frame of kinematics for every live critter.
    pub fn iterate_all(&mut self) {
        let canvas = self.canvas;
        for slot in self.slots.iter_mut().flatten() {
            slot.critter.iterate(canvas);
        }
    }
}
