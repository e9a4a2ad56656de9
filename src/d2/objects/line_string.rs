//! 2D polyline.

use super::point_set::closest_point;
use super::{Point, Segment};
use crate::d2::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec2;
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// An ordered sequence of points forming a connected polyline.
///
/// A line string is defined when every point is defined. The empty line
/// string is a degenerate but defined value; use [`LineString::is_empty`] to
/// tell it apart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<F> {
    points: Vec<Point<F>>,
}

impl<F: Float> LineString<F> {
    /// Creates a line string from points in path order.
    pub fn new(points: impl IntoIterator<Item = Point<F>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Creates an empty line string.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a two-point line string from a segment.
    pub fn from_segment(segment: &Segment<F>) -> Result<Self> {
        Ok(Self::new([segment.first_point()?, segment.second_point()?]))
    }

    /// Returns `true` if every point is defined. An empty line string is defined.
    pub fn is_defined(&self) -> bool {
        self.points.iter().all(Point::is_defined)
    }

    /// Returns `true` if the line string has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points, duplicates included.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The points, in order.
    #[inline]
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    /// Iterates over the points in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<F>> {
        self.points.iter()
    }

    /// Returns the point at `index`.
    pub fn access_point_at(&self, index: usize) -> Result<&Point<F>> {
        self.points.get(index).ok_or(GeometryError::OutOfRange {
            index,
            count: self.points.len(),
        })
    }

    /// Returns `true` if both line strings have the same number of points and
    /// corresponding points lie within `tolerance`.
    ///
    /// Empty line strings are never near anything.
    pub fn is_near(&self, other: &Self, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;

        if self.is_empty() || other.is_empty() || self.point_count() != other.point_count() {
            return Ok(false);
        }

        for (a, b) in self.points.iter().zip(&other.points) {
            if !a.is_near(b, tolerance)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns the vertex closest to `point`.
    pub fn point_closest_to(&self, point: &Point<F>) -> Result<Point<F>> {
        if !point.is_defined() {
            return Err(GeometryError::Undefined("Point"));
        }
        closest_point(&self.points, point)?.ok_or(GeometryError::Undefined("Line string"))
    }

    /// Total length of the polyline.
    pub fn length(&self) -> Result<F> {
        self.check_defined()?;
        let mut length = F::zero();
        for pair in self.points.windows(2) {
            length = length + pair[0].distance_to(&pair[1])?;
        }
        Ok(length)
    }

    /// Consecutive vertex pairs as segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Returns this line string displaced by `translation`.
    pub fn translate(&self, translation: Vec2<F>) -> Result<Self> {
        self.check_defined()?;
        let points = self
            .points
            .iter()
            .map(|p| p.translate(translation))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    /// Returns the image of this line string under `transformation`.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        if !transformation.is_defined() {
            return Err(GeometryError::Undefined("Transformation"));
        }
        self.check_defined()?;
        let points = self
            .points
            .iter()
            .map(|p| transformation.apply_to_point(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    fn check_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::Undefined("Line string"))
        }
    }
}

impl<F: Float> FromIterator<Point<F>> for LineString<F> {
    fn from_iter<I: IntoIterator<Item = Point<F>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<F: Float> From<Vec<Point<F>>> for LineString<F> {
    fn from(points: Vec<Point<F>>) -> Self {
        Self { points }
    }
}

impl<'a, F: Float> IntoIterator for &'a LineString<F> {
    type Item = &'a Point<F>;
    type IntoIter = std::slice::Iter<'a, Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Float + fmt::Display> fmt::Display for LineString<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y).unwrap()
    }

    fn square() -> LineString<f64> {
        LineString::new([p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
    }

    #[test]
    fn test_defined() {
        assert!(square().is_defined());
        assert!(!square().is_empty());
        assert!(LineString::<f64>::empty().is_defined());
        assert!(LineString::<f64>::empty().is_empty());
        assert!(!LineString::new([p(0.0, 0.0), Point::undefined()]).is_defined());
    }

    #[test]
    fn test_access_point_at() {
        let ls = square();
        assert_eq!(ls.point_count(), 4);
        assert_eq!(*ls.access_point_at(2).unwrap(), p(1.0, 1.0));
        assert_eq!(
            ls.access_point_at(4),
            Err(GeometryError::OutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_order_matters() {
        let reversed: LineString<f64> = square().iter().rev().copied().collect();
        assert_ne!(square(), reversed);
    }

    #[test]
    fn test_from_segment() {
        let s = Segment::new(p(0.0, 0.0), p(2.0, 0.0));
        let ls = LineString::from_segment(&s).unwrap();
        assert_eq!(ls, LineString::new([p(0.0, 0.0), p(2.0, 0.0)]));
        assert!(LineString::from_segment(&Segment::<f64>::undefined()).is_err());
    }

    #[test]
    fn test_is_near() {
        let shifted = square().translate(Vec2::new(0.01, 0.0)).unwrap();
        assert!(square().is_near(&shifted, 0.02).unwrap());
        assert!(!square().is_near(&shifted, 0.001).unwrap());
        assert!(!LineString::empty().is_near(&square(), 1.0).unwrap());
        let shorter = LineString::new([p(0.0, 0.0), p(1.0, 0.0)]);
        assert!(!square().is_near(&shorter, 10.0).unwrap());
    }

    #[test]
    fn test_point_closest_to() {
        assert_eq!(square().point_closest_to(&p(0.9, 1.2)).unwrap(), p(1.0, 1.0));
        assert_eq!(
            LineString::empty().point_closest_to(&p(0.0, 0.0)),
            Err(GeometryError::Undefined("Line string"))
        );
    }

    #[test]
    fn test_length_and_segments() {
        assert_relative_eq!(square().length().unwrap(), 3.0, epsilon = 1e-12);
        assert_eq!(LineString::<f64>::empty().length().unwrap(), 0.0);
        let segments: Vec<_> = square().segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Segment::new(p(1.0, 0.0), p(1.0, 1.0)));
    }

    #[test]
    fn test_apply_transformation() {
        let t = Transformation::scaling(2.0, 3.0);
        let scaled = square().apply_transformation(&t).unwrap();
        assert_eq!(*scaled.access_point_at(2).unwrap(), p(2.0, 3.0));

        let broken = LineString::new([p(0.0, 0.0), Point::undefined()]);
        assert_eq!(
            broken.apply_transformation(&t),
            Err(GeometryError::Undefined("Line string"))
        );
        assert_eq!(
            square().apply_transformation(&Transformation::undefined()),
            Err(GeometryError::Undefined("Transformation"))
        );
    }
}
