//! The `Critter` agent.

use std::f64::consts::PI;

use cr_core::{CritterId, CritterRng, Size, Vec2};

use crate::kinematics::{steer, wrap_position};
use crate::{CritterError, CritterResult, Status, StatusChange, Traits, Velocity};

/// Body size used when the host does not specify one.
pub const DEFAULT_SIZE: Size = Size { width: 20.0, height: 30.0 };

/// The wander interval is `WANDER_INTERVAL_SCALE × (1 − p)` seconds, where
/// `p` is the normalised curiosity.
pub const WANDER_INTERVAL_SCALE: f64 = 5.0;

/// Floor of the curiosity-scaled wander interval: one 60 Hz frame.  A fully
/// curious critter (`p = 1`) would otherwise ask for a zero interval.
pub const MIN_WANDER_INTERVAL: f64 = 1.0 / 60.0;

/// An autonomous agent wandering the canvas.
///
/// Position, velocity, destination and status change over time; size and
/// traits are fixed at creation.  The canvas is not stored: the host passes
/// its current size to every call that needs it.
#[derive(Clone, Debug)]
pub struct Critter {
    id:          CritterId,
    position:    Vec2,
    velocity:    Velocity,
    destination: Vec2,
    size:        Size,
    traits:      Traits,
    status:      Status,
    rng:         CritterRng,
}

impl Critter {
    /// Create a critter at an explicit position, at rest, facing +x.
    pub fn new(
        id:          CritterId,
        position:    Vec2,
        destination: Vec2,
        size:        Size,
        traits:      Traits,
        rng:         CritterRng,
    ) -> CritterResult<Self> {
        if !size.is_positive() {
            return Err(CritterError::InvalidSize(size));
        }
        Ok(Self {
            id,
            position,
            velocity: Velocity::default(),
            destination,
            size,
            traits,
            status: Status::Wandering,
            rng,
        })
    }

    /// Create a critter with a random position, heading and destination,
    /// drawn from its own RNG seeded by `scene_seed` and `id`.
    pub fn spawn(
        id:         CritterId,
        scene_seed: u64,
        canvas:     Size,
        size:       Size,
        traits:     Traits,
    ) -> CritterResult<Self> {
        let mut rng = CritterRng::new(scene_seed, id);
        let position = rng.point_in(canvas);
        let destination = rng.point_in(canvas);
        let heading = rng.gen_range(-PI..PI);
        Ok(Critter::new(id, position, destination, size, traits, rng)?
            .with_velocity(Velocity::new(0.0, heading)))
    }

    /// Replace the velocity.  Speeds are clamped to `[0, top_speed]`.
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        let speed = velocity.speed.clamp(0.0, self.traits.top_speed());
        self.velocity = Velocity::new(speed, velocity.heading);
        self
    }

    /// Replace the initial status.  Only meaningful before the critter's
    /// tasks are registered with a scheduler.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    // ── Per-frame update ──────────────────────────────────────────────────

    /// Advance one frame: steer towards the destination, then move and wrap.
    pub fn iterate(&mut self, canvas: Size) {
        self.velocity = steer(
            self.velocity,
            self.position,
            self.destination,
            self.status,
            &self.traits,
        );
        self.position = wrap_position(self.position + self.velocity.as_vec(), canvas, self.size);
    }

    // ── Scheduled behaviours ──────────────────────────────────────────────

    /// Pick a fresh destination uniformly inside `canvas`.
    pub fn wander(&mut self, canvas: Size) {
        self.destination = self.rng.point_in(canvas);
    }

    /// Flip between wandering and resting with probability equal to the
    /// normalised curiosity.  Returns the transition, if one happened.
    ///
    /// The caller owns the scheduling consequences (replacing or cancelling
    /// the wander task).
    pub fn update_status(&mut self) -> Option<StatusChange> {
        if !self.rng.gen_bool(self.traits.normalized_curiosity()) {
            return None;
        }
        let from = self.status;
        self.status = from.toggled();
        Some(StatusChange { from, to: self.status })
    }

    /// Interval for a wander task registered when this critter resumes
    /// wandering: more curious critters change their mind more often.
    pub fn wander_interval(&self) -> f64 {
        let p = self.traits.normalized_curiosity();
        (WANDER_INTERVAL_SCALE - WANDER_INTERVAL_SCALE * p).max(MIN_WANDER_INTERVAL)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CritterId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.speed
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.velocity.heading
    }

    #[inline]
    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn traits(&self) -> &Traits {
        &self.traits
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Straight-line distance to the destination (ignoring wrap).
    #[inline]
    pub fn distance_to_destination(&self) -> f64 {
        self.position.distance(self.destination)
    }
}
