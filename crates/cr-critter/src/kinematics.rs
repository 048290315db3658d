//! Per-frame steering and integration.
//!
//! These are plain functions over values so they can be exercised without a
//! full critter.  [`Critter::iterate`][crate::Critter::iterate] is the only
//! production caller.
//!
//! # Speed rule
//!
//! | Status    | Condition               | New speed                         |
//! |-----------|-------------------------|-----------------------------------|
//! | Resting   | —                       | `speed × 0.9`, `0` below `0.01`   |
//! | Wandering | `d < 1`                 | `0`                               |
//! | Wandering | `d ≤ collision_radius`  | `top_speed × d / collision_radius`|
//! | Wandering | otherwise               | `speed + top_speed / 10`          |
//!
//! The result is clamped to `[0, top_speed]`.  The heading then turns by the
//! signed angle to the destination divided by `15 − top_speed`.
//!
//! Nothing here is scaled by the frame delta: decay, acceleration and
//! displacement are per frame.

use cr_core::geom::wrap_angle;
use cr_core::{Size, Vec2};

use crate::{Status, Traits};

/// Per-frame speed multiplier while resting.
pub const RESTING_DECAY: f64 = 0.9;

/// Resting speeds below this snap to exactly zero.
pub const STOP_THRESHOLD: f64 = 0.01;

/// A wandering critter closer than this to its destination stops.
pub const ARRIVAL_TOLERANCE: f64 = 1.0;

/// Outside the collision radius speed grows by `top_speed / ACCELERATION_STEPS`
/// per frame, reaching top speed after this many frames.
pub const ACCELERATION_STEPS: f64 = 10.0;

// ── Velocity ──────────────────────────────────────────────────────────────────

/// Speed and heading, kept in polar form.
///
/// Storing the heading separately keeps it meaningful while the critter is
/// stationary, so a resting critter still knows which way it faces.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// Distance covered per frame.  Never negative.
    pub speed:   f64,
    /// Direction of travel in radians, within `(-π, π]`.
    pub heading: f64,
}

impl Velocity {
    #[inline]
    pub fn new(speed: f64, heading: f64) -> Self {
        Self { speed, heading: wrap_angle(heading) }
    }

    /// Displacement applied to the position in one frame.
    #[inline]
    pub fn as_vec(self) -> Vec2 {
        Vec2::from_polar(self.speed, self.heading)
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// Next frame's velocity for a critter at `position` heading to `destination`.
pub fn steer(
    velocity:    Velocity,
    position:    Vec2,
    destination: Vec2,
    status:      Status,
    traits:      &Traits,
) -> Velocity {
    let top_speed = traits.top_speed();

    let speed = match status {
        Status::Resting => {
            let decayed = velocity.speed * RESTING_DECAY;
            if decayed < STOP_THRESHOLD { 0.0 } else { decayed }
        }
        Status::Wandering => {
            let distance = position.distance(destination);
            let radius = traits.collision_radius();
            if distance < ARRIVAL_TOLERANCE {
                0.0
            } else if distance <= radius {
                top_speed * (distance / radius)
            } else {
                velocity.speed + top_speed / ACCELERATION_STEPS
            }
        }
    };
    let speed = speed.clamp(0.0, top_speed);

    let facing = Vec2::from_polar(1.0, velocity.heading);
    let turn = facing.signed_angle_to(destination - position) / traits.turn_divisor();

    Velocity::new(speed, velocity.heading + turn)
}

// ── Wrap ──────────────────────────────────────────────────────────────────────

/// Toroidal wrap of `position` for a body of size `body` on `canvas`.
///
/// A body is only moved once it is a full body-length past an edge, and it
/// reappears half a body-length beyond the opposite edge, so it never pops
/// into view and never immediately wraps back.
pub fn wrap_position(position: Vec2, canvas: Size, body: Size) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, canvas.width, body.width),
        wrap_axis(position.y, canvas.height, body.height),
    )
}

#[inline]
fn wrap_axis(value: f64, extent: f64, body: f64) -> f64 {
    if value < -body {
        extent + body / 2.0
    } else if value > extent + body {
        -body / 2.0
    } else {
        value
    }
}
