//! Infinite 3D line.

use super::Point;
use crate::d3::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec3;
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// An infinite line through `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<F> {
    origin: Point<F>,
    direction: Option<Vec3<F>>,
}

impl<F: Float> Line<F> {
    /// Creates a line through `origin` along `direction`.
    ///
    /// The direction is normalized. A zero or non-finite direction is rejected.
    pub fn new(origin: Point<F>, direction: Vec3<F>) -> Result<Self> {
        if !direction.is_finite() {
            return Err(GeometryError::InvalidArgument(
                "line direction must be finite".to_string(),
            ));
        }
        let direction = direction.normalize().ok_or_else(|| {
            GeometryError::InvalidArgument("line direction must be non-zero".to_string())
        })?;
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
        self.direction()?;
        Ok(self.origin)
    }

    /// Unit direction vector.
    pub fn direction(&self) -> Result<Vec3<F>> {
        match self.direction {
            Some(d) if self.origin.is_defined() => Ok(d),
            _ => Err(GeometryError::Undefined("Line")),
        }
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
        Ok(self.origin.vector_to(point)?.cross(d).magnitude())
    }

    /// Returns `true` if `point` lies within `tolerance` of the line.
    pub fn contains(&self, point: &Point<F>, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;
        Ok(self.distance_to(point)? <= tolerance)
    }

    /// Returns the image of this line under `transformation`.
    ///
    /// Fails with [`GeometryError::InvalidArgument`] if the map collapses the direction.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        let direction = self.direction()?;
        Self::new(
            transformation.apply_to_point(&self.origin)?,
            transformation.apply_to_vector(direction)?,
        )
    }
}

impl<F: Float + fmt::Display> fmt::Display for Line<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Ok(d) => write!(f, "Line({} -> [{}, {}, {}])", self.origin, d.x, d.y, d.z),
            Err(_) => f.write_str("Undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64, z: f64) -> Point<f64> {
        Point::new(x, y, z).unwrap()
    }

    #[test]
    fn test_new() {
        let line = Line::new(p(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(line.direction().unwrap(), Vec3::unit_z());
        assert!(Line::new(p(0.0, 0.0, 0.0), Vec3::zero()).is_err());
        assert!(Line::new(p(0.0, 0.0, 0.0), Vec3::new(0.0, f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_new_large_direction() {
        let line = Line::new(p(0.0, 0.0, 0.0), Vec3::new(1e200, 1e200, 0.0)).unwrap();
        let d = line.direction().unwrap();
        assert_relative_eq!(d.x, 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(d.y, 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(d.z, 0.0);

        assert_relative_eq!(line.distance_to(&p(0.0, 0.0, 5.0)).unwrap(), 5.0, epsilon = 1e-12);
        assert!(!line.contains(&p(0.0, 0.0, 5.0), 1.0).unwrap());
        assert!(line.contains(&p(3.0, 3.0, 0.0), 1e-12).unwrap());
    }

    #[test]
    fn test_undefined() {
        let line: Line<f64> = Line::undefined();
        assert!(!line.is_defined());
        assert_eq!(line.origin(), Err(GeometryError::Undefined("Line")));
        assert_eq!(
            line.distance_to(&p(0.0, 0.0, 0.0)),
            Err(GeometryError::Undefined("Line"))
        );
    }

    #[test]
    fn test_distance() {
        let line = Line::through(&p(0.0, 0.0, 0.0), &p(10.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(line.distance_to(&p(5.0, 3.0, 4.0)).unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(line.closest_point(&p(-5.0, 3.0, 4.0)).unwrap(), p(-5.0, 0.0, 0.0));
        assert!(line.contains(&p(123.0, 0.0, 0.0), 0.0).unwrap());
    }

    #[test]
    fn test_apply_transformation() {
        let line = Line::new(p(1.0, 0.0, 0.0), Vec3::unit_x()).unwrap();
        let t = Transformation::rotation(Vec3::unit_z(), FRAC_PI_2).unwrap();
        let rotated = line.apply_transformation(&t).unwrap();
        let d = rotated.direction().unwrap();
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 1.0, epsilon = 1e-12);
        assert!(rotated.contains(&p(0.0, -3.0, 0.0), 1e-12).unwrap());
    }
}
