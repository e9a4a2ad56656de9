//! 2D point type.

use crate::d2::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec2;
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// A point in the plane, or the undefined sentinel.
///
/// Defined points always hold finite coordinates. Coordinate-dependent
/// operations on an undefined point return [`GeometryError::Undefined`].
///
/// Equality is value equality between defined points. An undefined point is
/// not equal to anything, including another undefined point.
#[derive(Debug, Clone, Copy)]
pub struct Point<F> {
    coordinates: Option<Vec2<F>>,
}

impl<F: Float> Point<F> {
    /// Creates a defined point.
    ///
    /// Fails with [`GeometryError::InvalidArgument`] if a coordinate is NaN or infinite.
    pub fn new(x: F, y: F) -> Result<Self> {
        Self::from_vector(Vec2::new(x, y))
    }

    /// Creates a defined point from a position vector.
    pub fn from_vector(coordinates: Vec2<F>) -> Result<Self> {
        if !coordinates.is_finite() {
            return Err(GeometryError::InvalidArgument(
                "point coordinates must be finite".to_string(),
            ));
        }
        Ok(Self {
            coordinates: Some(coordinates),
        })
    }

    /// The point (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            coordinates: Some(Vec2::zero()),
        }
    }

    /// The undefined point.
    #[inline]
    pub fn undefined() -> Self {
        Self { coordinates: None }
    }

    /// Returns `true` unless this is the undefined point.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Returns the position vector of this point.
    #[inline]
    pub fn coordinates(&self) -> Result<Vec2<F>> {
        self.coordinates.ok_or(GeometryError::Undefined("Point"))
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> Result<F> {
        Ok(self.coordinates()?.x)
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> Result<F> {
        Ok(self.coordinates()?.y)
    }

    /// Returns the displacement from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Result<Vec2<F>> {
        Ok(other.coordinates()? - self.coordinates()?)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> Result<F> {
        Ok(self.vector_to(other)?.magnitude())
    }

    /// Returns `true` if `other` lies within `tolerance` of this point.
    pub fn is_near(&self, other: &Self, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;
        Ok(self.distance_to(other)? <= tolerance)
    }

    /// Returns this point displaced by `translation`.
    pub fn translate(&self, translation: Vec2<F>) -> Result<Self> {
        Self::from_vector(self.coordinates()? + translation)
    }

    /// Returns the image of this point under `transformation`.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        transformation.apply_to_point(self)
    }
}

impl<F: PartialEq> PartialEq for Point<F> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.coordinates, &other.coordinates) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: Float> TryFrom<[F; 2]> for Point<F> {
    type Error = GeometryError;

    fn try_from([x, y]: [F; 2]) -> Result<Self> {
        Self::new(x, y)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates {
            Some(c) => write!(f, "[{}, {}]", c.x, c.y),
            None => f.write_str("Undefined"),
        }
    }
}
