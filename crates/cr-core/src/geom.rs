//! Planar vector and extent types.
//!
//! `Vec2` uses `f64` throughout.  The simulation is tiny (tens of critters)
//! so there is nothing to gain from single precision, and doubles keep the
//! repeated heading/decay updates well away from accumulated rounding.
//!
//! Angles are radians, measured counter-clockwise from the +x axis in the
//! usual `atan2` convention.  On a y-down canvas this reads as clockwise;
//! the steering maths does not care as long as it is consistent.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rand::Rng;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2D point or displacement.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from its length and angle (radians).
    #[inline]
    pub fn from_polar(length: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: length * cos, y: length * sin }
    }

    /// Uniformly distributed point in the unit square `[0, 1) × [0, 1)`.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { x: rng.r#gen::<f64>(), y: rng.r#gen::<f64>() }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Angle of the vector in `(-π, π]`.  The zero vector reports `0.0`.
    #[inline]
    pub fn angle(self) -> f64 {
        if self.is_zero() { 0.0 } else { self.y.atan2(self.x) }
    }

    /// Same direction, new length.  The zero vector points along +x.
    #[inline]
    pub fn with_length(self, length: f64) -> Self {
        Self::from_polar(length, self.angle())
    }

    /// Same length, new direction.
    #[inline]
    pub fn with_angle(self, angle: f64) -> Self {
        Self::from_polar(self.length(), angle)
    }

    /// Rescale to `length`.  Alias of [`with_length`](Self::with_length) kept
    /// for call sites that read better as "normalize to".
    #[inline]
    pub fn normalize(self, length: f64) -> Self {
        self.with_length(length)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Component-wise product, e.g. scaling a unit-square sample to a canvas.
    #[inline]
    pub fn component_mul(self, other: Vec2) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    /// Signed angle that rotates `self` onto `other`, in `(-π, π]`.
    ///
    /// Returns `0.0` when either vector is zero: there is no direction to
    /// turn towards.
    pub fn signed_angle_to(self, other: Vec2) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        wrap_angle(other.angle() - self.angle())
    }
}

/// Map any angle onto `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI { PI } else { wrapped }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Size ──────────────────────────────────────────────────────────────────────

/// A width/height extent: the canvas, or a critter's body.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width:  f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent as a vector `(width, height)`.
    #[inline]
    pub fn as_vec(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Half the extent as a vector.
    #[inline]
    pub fn half(self) -> Vec2 {
        self.as_vec() * 0.5
    }

    /// `true` if both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Uniformly distributed point in `[0, width) × [0, height)`.
    pub fn sample_point<R: Rng + ?Sized>(self, rng: &mut R) -> Vec2 {
        Vec2::random_unit(rng).component_mul(self.as_vec())
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}
