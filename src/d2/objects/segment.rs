//! 2D line segment.

use super::{Line, Point};
use crate::d2::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec2;
use num_traits::Float;
use std::fmt;

/// A straight segment between two endpoints.
///
/// Equality ignores endpoint order.
#[derive(Debug, Clone, Copy)]
pub struct Segment<F> {
    first: Point<F>,
    second: Point<F>,
}

impl<F: Float> Segment<F> {
    /// Creates a segment. It is defined only if both endpoints are.
    #[inline]
    pub fn new(first: Point<F>, second: Point<F>) -> Self {
        Self { first, second }
    }

    /// The undefined segment.
    #[inline]
    pub fn undefined() -> Self {
        Self::new(Point::undefined(), Point::undefined())
    }

    /// Returns `true` if both endpoints are defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.first.is_defined() && self.second.is_defined()
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_degenerate(&self) -> Result<bool> {
        self.check_defined()?;
        Ok(self.first == self.second)
    }

    /// The first endpoint.
    pub fn first_point(&self) -> Result<Point<F>> {
        self.check_defined()?;
        Ok(self.first)
    }

    /// The second endpoint.
    pub fn second_point(&self) -> Result<Point<F>> {
        self.check_defined()?;
        Ok(self.second)
    }

    /// Midpoint of the segment.
    pub fn center(&self) -> Result<Point<F>> {
        self.check_defined()?;
        let two = F::one() + F::one();
        Point::from_vector((self.first.coordinates()? + self.second.coordinates()?) / two)
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> Result<F> {
        self.check_defined()?;
        self.first.distance_to(&self.second)
    }

    /// Unit vector from the first to the second endpoint.
    ///
    /// Fails with [`GeometryError::InvalidArgument`] on a degenerate segment.
    pub fn direction(&self) -> Result<Vec2<F>> {
        self.check_defined()?;
        self.first.vector_to(&self.second)?.normalize().ok_or_else(|| {
            GeometryError::InvalidArgument("segment is degenerate".to_string())
        })
    }

    /// Point of the segment closest to `point`.
    pub fn closest_point(&self, point: &Point<F>) -> Result<Point<F>> {
        self.check_defined()?;
        let start = self.first.coordinates()?;
        let v = self.second.coordinates()? - start;
        let len_sq = v.magnitude_squared();

        if len_sq == F::zero() {
            point.coordinates()?;
            return Ok(self.first);
        }

        // Project onto the supporting line, clamped to the segment
        let t = (point.coordinates()? - start).dot(v) / len_sq;
        let t = t.max(F::zero()).min(F::one());

        Point::from_vector(start + v * t)
    }

    /// Distance from `point` to the closest point of the segment.
    pub fn distance_to(&self, point: &Point<F>) -> Result<F> {
        self.closest_point(point)?.distance_to(point)
    }

    /// Supporting line, directed from the first to the second endpoint.
    pub fn to_line(&self) -> Result<Line<F>> {
        self.check_defined()?;
        Line::through(&self.first, &self.second)
    }

    /// Returns the image of this segment under `transformation`.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        self.check_defined()?;
        Ok(Self::new(
            transformation.apply_to_point(&self.first)?,
            transformation.apply_to_point(&self.second)?,
        ))
    }

    fn check_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::Undefined("Segment"))
        }
    }
}

impl<F: PartialEq> PartialEq for Segment<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<F: Float> From<(Point<F>, Point<F>)> for Segment<F> {
    fn from((first, second): (Point<F>, Point<F>)) -> Self {
        Self::new(first, second)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Segment<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "[{} - {}]", self.first, self.second)
        } else {
            f.write_str("Undefined")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn test_equality() {
        let a = Segment::new(p(0.0, 0.0), p(0.0, 1.0));
        assert_eq!(a, Segment::new(p(0.0, 0.0), p(0.0, 1.0)));
        assert_eq!(a, Segment::new(p(0.0, 1.0), p(0.0, 0.0)));
        assert_ne!(a, Segment::new(p(0.0, 0.0), p(0.0, 2.0)));
        assert_ne!(a, Segment::undefined());
        assert_ne!(Segment::<f64>::undefined(), Segment::undefined());
    }

    #[test]
    fn test_measures() {
        let s = Segment::new(p(0.0, 0.0), p(3.0, 4.0));
        assert_relative_eq!(s.length().unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(s.center().unwrap(), p(1.5, 2.0));
        let d = s.direction().unwrap();
        assert_relative_eq!(d.x, 0.6, epsilon = 1e-12);
        assert!(!s.is_degenerate().unwrap());
    }

    #[test]
    fn test_degenerate() {
        let s = Segment::new(p(1.0, 1.0), p(1.0, 1.0));
        assert!(s.is_degenerate().unwrap());
        assert!(s.direction().is_err());
        assert_eq!(s.closest_point(&p(5.0, 5.0)).unwrap(), p(1.0, 1.0));
    }

    #[test]
    fn test_closest_point() {
        let s = Segment::new(p(0.0, 0.0), p(10.0, 0.0));
        assert_eq!(s.closest_point(&p(5.0, 5.0)).unwrap(), p(5.0, 0.0));
        assert_eq!(s.closest_point(&p(-5.0, 1.0)).unwrap(), p(0.0, 0.0));
        assert_eq!(s.closest_point(&p(15.0, 0.0)).unwrap(), p(10.0, 0.0));
        assert_relative_eq!(s.distance_to(&p(13.0, 4.0)).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closest_point_short_segment() {
        let s = Segment::new(p(0.0, 0.0), p(0.0, 1e-9));
        assert!(!s.is_degenerate().unwrap());
        assert_eq!(s.closest_point(&p(0.0, 3.0)).unwrap(), p(0.0, 1e-9));
        assert_relative_eq!(s.distance_to(&p(0.0, 3.0)).unwrap(), 3.0 - 1e-9, epsilon = 1e-15);
    }

    #[test]
    fn test_undefined_errors() {
        let s: Segment<f64> = Segment::new(p(0.0, 0.0), Point::undefined());
        assert!(!s.is_defined());
        assert_eq!(s.length(), Err(GeometryError::Undefined("Segment")));
        assert_eq!(s.to_line(), Err(GeometryError::Undefined("Segment")));
    }

    #[test]
    fn test_apply_transformation() {
        let s = Segment::new(p(0.0, 0.0), p(1.0, 0.0));
        let t = Transformation::translation(Vec2::new(0.0, 2.0));
        let moved = s.apply_transformation(&t).unwrap();
        assert_eq!(moved, Segment::new(p(0.0, 2.0), p(1.0, 2.0)));
    }
}
