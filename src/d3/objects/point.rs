//! 3D point type.

use crate::d3::Transformation;
use crate::error::{GeometryError, Result};
use crate::linalg::Vec3;
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// A point in space, or the undefined sentinel.
///
/// Defined points always hold finite coordinates; an undefined point has no
/// coordinates at all and rejects every coordinate-dependent operation.
#[derive(Debug, Clone, Copy)]
pub struct Point<F> {
    coordinates: Option<Vec3<F>>,
}

impl<F: Float> Point<F> {
    /// Creates a defined point.
    ///
    /// Fails with [`GeometryError::InvalidArgument`] if a coordinate is NaN or infinite.
    pub fn new(x: F, y: F, z: F) -> Result<Self> {
        Self::from_vector(Vec3::new(x, y, z))
    }

    /// Creates a defined point from a position vector.
    pub fn from_vector(coordinates: Vec3<F>) -> Result<Self> {
        if !coordinates.is_finite() {
            return Err(GeometryError::InvalidArgument(
                "point coordinates must be finite".to_string(),
            ));
        }
        Ok(Self {
            coordinates: Some(coordinates),
        })
    }

    /// The point (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            coordinates: Some(Vec3::zero()),
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

    /// The coordinate vector.
    #[inline]
    pub fn coordinates(&self) -> Result<Vec3<F>> {
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

    /// The z coordinate.
    #[inline]
    pub fn z(&self) -> Result<F> {
        Ok(self.coordinates()?.z)
    }

    /// Returns the displacement from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Result<Vec3<F>> {
        Ok(other.coordinates()? - self.coordinates()?)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> Result<F> {
        Ok(self.vector_to(other)?.magnitude())
    }

    /// Returns `true` if `other` lies within `tolerance` of this point.
    pub fn is_near(&self, other: &Self, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;
        Ok(self.distance_to(other)? <= tolerance)
    }

    /// Returns this point moved by `translation`.
    pub fn translate(&self, translation: Vec3<F>) -> Result<Self> {
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

impl<F: Float> TryFrom<[F; 3]> for Point<F> {
    type Error = GeometryError;

    fn try_from([x, y, z]: [F; 3]) -> Result<Self> {
        Self::new(x, y, z)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates {
            Some(c) => write!(f, "[{}, {}, {}]", c.x, c.y, c.z),
            None => f.write_str("Undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p: Point<f64> = Point::new(-1.0, 1.0, 1.0).unwrap();
        assert!(p.is_defined());
        assert_eq!(p.coordinates().unwrap(), Vec3::new(-1.0, 1.0, 1.0));
        assert_eq!(p.z().unwrap(), 1.0);
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(
            Point::new(0.0, 0.0, f64::NAN),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(Point::try_from([f64::NEG_INFINITY, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_origin() {
        let o: Point<f64> = Point::origin();
        assert_eq!(o, Point::new(0.0, 0.0, 0.0).unwrap());
        assert_eq!(o, Point::origin());
    }

    #[test]
    fn test_undefined() {
        let u: Point<f32> = Point::undefined();
        assert!(!u.is_defined());
        assert_eq!(u.z(), Err(GeometryError::Undefined("Point")));
        assert_ne!(u, Point::undefined());
        assert!(u.distance_to(&Point::origin()).is_err());
    }

    #[test]
    fn test_distance_and_near() {
        let a: Point<f64> = Point::origin();
        let b = Point::new(2.0, 3.0, 6.0).unwrap();
        assert_relative_eq!(a.distance_to(&b).unwrap(), 7.0, epsilon = 1e-12);
        assert!(a.is_near(&b, 7.0).unwrap());
        assert!(!a.is_near(&b, 6.9).unwrap());
        assert!(a.is_near(&b, f64::NAN).is_err());
    }

    #[test]
    fn test_translate() {
        let p: Point<f64> = Point::new(1.0, 2.0, 3.0).unwrap();
        let q = p.translate(Vec3::new(3.0, 4.0, 5.0)).unwrap();
        assert_eq!(q, Point::new(4.0, 6.0, 8.0).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.0_f64, 2.0, 3.5).unwrap().to_string(), "[1, 2, 3.5]");
        assert_eq!(Point::<f64>::undefined().to_string(), "Undefined");
    }
}
