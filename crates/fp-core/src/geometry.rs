//! 2D value types for the layout engine.
//!
//! `Location` is an absolute position, `Vector` a displacement (or force).
//! The operator set is deliberately asymmetric: locations cannot be added to
//! each other or scaled, only offset by vectors.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::Real;

/// A 2D displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: Real,
    pub y: Real,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn squared_norm(self) -> Real {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn norm(self) -> Real {
        self.squared_norm().sqrt()
    }

    /// Unit vector in the same direction, together with the original norm.
    ///
    /// The zero vector has no direction: its components come back as NaN.
    /// Use [`Vector::try_normalized`] where that case must be handled.
    #[inline]
    pub fn normalized(self) -> (Vector, Real) {
        let norm = self.norm();
        let inverse = 1.0 / norm;
        (Vector::new(self.x * inverse, self.y * inverse), norm)
    }

    /// Like [`Vector::normalized`], but `None` when the squared length is
    /// zero. That includes vectors so short that `x² + y²` underflows.
    #[inline]
    pub fn try_normalized(self) -> Option<(Vector, Real)> {
        if self.squared_norm() == 0.0 {
            None
        } else {
            Some(self.normalized())
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Real> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, s: Real) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl core::iter::Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, Add::add)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An absolute 2D position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: Real,
    pub y: Real,
}

impl Location {
    pub const ORIGIN: Location = Location { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Location) -> Real {
        (self - other).norm()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Mean of a set of locations, as the displacement from the origin.
    ///
    /// Returns `None` for an empty input.
    pub fn centroid<I>(locations: I) -> Option<Vector>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut sum = Vector::ZERO;
        let mut count = 0usize;
        for location in locations {
            sum += Vector::from(location);
            count += 1;
        }
        (count > 0).then(|| sum * (1.0 / count as Real))
    }
}

impl Sub for Location {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Location) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Location {
    type Output = Location;

    #[inline]
    fn add(self, v: Vector) -> Location {
        Location::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector> for Location {
    type Output = Location;

    #[inline]
    fn sub(self, v: Vector) -> Location {
        Location::new(self.x - v.x, self.y - v.y)
    }
}

impl From<Location> for Vector {
    #[inline]
    fn from(l: Location) -> Self {
        Vector::new(l.x, l.y)
    }
}

impl From<Vector> for Location {
    #[inline]
    fn from(v: Vector) -> Self {
        Location::new(v.x, v.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
