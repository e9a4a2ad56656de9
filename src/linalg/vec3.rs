//! 3D vector type.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3D vector, used both for point coordinates and for displacements.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Unit vector along X.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }

    /// Unit vector along Y.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one(), F::zero())
    }

    /// Unit vector along Z.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::zero(), F::zero(), F::one())
    }

    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// When the squared length overflows or underflows, the components are
    /// rescaled by the largest magnitude first, so the result stays accurate
    /// for any finite vector whose length is representable.
    #[inline]
    pub fn magnitude(self) -> F {
        let squared = self.magnitude_squared();
        if squared.is_normal() {
            return squared.sqrt();
        }
        let scale = self.max_abs();
        if scale == F::zero() || !scale.is_finite() {
            return squared.sqrt();
        }
        (self / scale).magnitude_squared().sqrt() * scale
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Returns `None` for the zero vector and for vectors with non-finite
    /// components.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let scale = self.max_abs();
        if scale == F::zero() || !scale.is_finite() {
            return None;
        }
        let scaled = self / scale;
        let unit = scaled / scaled.magnitude_squared().sqrt();
        unit.is_finite().then_some(unit)
    }

    /// Largest absolute component.
    #[inline]
    fn max_abs(self) -> F {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }
}

impl<F: Float> From<[F; 3]> for Vec3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross() {
        let z = Vec3::<f64>::unit_x().cross(Vec3::unit_y());
        assert_eq!(z, Vec3::unit_z());
        let y = Vec3::<f64>::unit_z().cross(Vec3::unit_x());
        assert_eq!(y, Vec3::unit_y());
    }

    #[test]
    fn test_magnitude() {
        let v: Vec3<f64> = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude_squared(), 49.0);
        assert_relative_eq!(v.magnitude(), 7.0, epsilon = 1e-12);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert!(Vec3::<f64>::zero().normalize().is_none());
    }

    #[test]
    fn test_normalize_large_components() {
        let v: Vec3<f64> = Vec3::new(1e200, 1e200, 0.0);
        assert_relative_eq!(v.magnitude(), 2.0_f64.sqrt() * 1e200, max_relative = 1e-12);

        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.5_f64.sqrt(), epsilon = 1e-12);

        let tiny = Vec3::new(0.0, 0.0, 1e-200_f64).normalize().unwrap();
        assert_eq!(tiny, Vec3::unit_z());
    }

    #[test]
    fn test_normalize_non_finite() {
        assert!(Vec3::new(f64::INFINITY, 0.0, 0.0).normalize().is_none());
        assert!(Vec3::new(0.0, f64::NAN, 1.0).normalize().is_none());
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1.0_f64, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f64::NEG_INFINITY, 3.0).is_finite());
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 9.0);
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(a + b, Vec3::new(5.0, 8.0, 12.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 3.0, 4.5));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }
}
