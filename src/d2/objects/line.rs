//! Infinite 2D line.

use super::Point;
use crate::d2::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec2;
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// An infinite line through `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<F> {
    origin: Point<F>,
    direction: Option<Vec2<F>>,
}

impl<F: Float> Line<F> {
    /// Creates a line through `origin` along `direction`.
    ///
    /// The direction is normalized. A zero or non-finite direction is rejected.
    pub fn new(origin: Point<F>, direction: Vec2<F>) -> Result<Self> {
        let direction = normalize_direction(direction)?;
        Ok(Self {
            origin,
            direction: Some(direction),
        })
    }

    /// Creates the line through two distinct points, directed from `first` to `second`.
    pub fn through(first: &Point<F>, second: &Point<F>) -> Result<Self> {
        Self::new(*first, first.vector_to(second)?)
    }

    /// The undefined line.
    #[inline]
    pub fn undefined() -> Self {
        Self {
            origin: Point::undefined(),
            direction: None,
        }
    }

    /// Returns `true` if both the origin and the direction are defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.origin.is_defined() && self.direction.is_some()
    }

    /// A point of the line.
    pub fn origin(&self) -> Result<Point<F>> {
        self.check_defined()?;
        Ok(self.origin)
    }

    /// Unit direction vector.
    pub fn direction(&self) -> Result<Vec2<F>> {
        self.check_defined()?;
        self.direction.ok_or(GeometryError::Undefined("Line"))
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn closest_point(&self, point: &Point<F>) -> Result<Point<F>> {
        let d = self.direction()?;
        let o = self.origin.coordinates()?;
        let t = (point.coordinates()? - o).dot(d);
        Point::from_vector(o + d * t)
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to(&self, point: &Point<F>) -> Result<F> {
        let d = self.direction()?;
        let v = self.origin.vector_to(point)?;
        Ok(v.cross(d).abs())
    }

    /// Returns `true` if `point` lies within `tolerance` of the line.
    pub fn contains(&self, point: &Point<F>, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;
        Ok(self.distance_to(point)? <= tolerance)
    }

    /// Returns the image of this line under `transformation`.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        let direction = self.direction()?;
        let origin = transformation.apply_to_point(&self.origin)?;
        let direction = transformation.apply_to_vector(direction)?;
        Self::new(origin, direction)
    }

    fn check_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::Undefined("Line"))
        }
    }
}

fn normalize_direction<F: Float>(direction: Vec2<F>) -> Result<Vec2<F>> {
    if !direction.is_finite() {
        return Err(GeometryError::InvalidArgument(
            "line direction must be finite".to_string(),
        ));
    }
    direction.normalize().ok_or_else(|| {
        GeometryError::InvalidArgument("line direction must be non-zero".to_string())
    })
}

impl<F: Float + fmt::Display> fmt::Display for Line<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(d) if self.origin.is_defined() => {
                write!(f, "Line({} -> [{}, {}])", self.origin, d.x, d.y)
            }
            _ => f.write_str("Undefined"),
        }
    }
}
