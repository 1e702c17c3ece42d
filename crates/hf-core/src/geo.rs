//! Planar coordinate type used for both positions and velocities.
//!
//! `Point2D` has no `PartialEq`; compare with [`Point2D::approx_eq`].

use std::ops::{Add, AddAssign, Sub};

/// Absolute tolerance used by [`Point2D::approx_eq`].
pub const ABS_TOLERANCE: f64 = 1e-8;

/// Relative tolerance used by [`Point2D::approx_eq`].
pub const REL_TOLERANCE: f64 = 1e-5;

/// A 2D point or vector in field coordinates (pixels).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

/// A point interpreted as an agent position.
pub type Position = Point2D;

/// A point interpreted as a per-tick displacement.
pub type Velocity = Point2D;

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tolerance-based equality, checked independently on each component.
    ///
    /// Two components `a` and `b` match when
    /// `|a - b| <= ABS_TOLERANCE + REL_TOLERANCE * max(|a|, |b|)`.
    /// NaN never matches anything.
    pub fn approx_eq(self, other: Point2D) -> bool {
        close(self.x, other.x) && close(self.y, other.y)
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point2D) -> f64 {
        (self - other).norm()
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABS_TOLERANCE + REL_TOLERANCE * a.abs().max(b.abs())
}

impl Add for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    #[inline]
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
