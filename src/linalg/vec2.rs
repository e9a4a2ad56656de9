//! 2D vector type.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector, used both for point coordinates and for displacements.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Unit vector along X.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero())
    }

    /// Unit vector along Y.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product (z-component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
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
        self.x.abs().max(self.y.abs())
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }
}

impl<F: Float> From<[F; 2]> for Vec2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_products() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Vec2::<f64>::unit_x().cross(Vec2::unit_y()), 1.0);
        assert_eq!(Vec2::<f64>::unit_y().cross(Vec2::unit_x()), -1.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(3.0_f64, 4.0).normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
        assert!(Vec2::<f64>::zero().normalize().is_none());
    }

    #[test]
    fn test_normalize_large_components() {
        let v: Vec2<f64> = Vec2::new(3e200, -4e200);
        assert_relative_eq!(v.magnitude(), 5e200, max_relative = 1e-12);

        let n = v.normalize().unwrap();
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.y, -0.8, epsilon = 1e-12);
        assert!(Vec2::new(f64::INFINITY, 1.0).normalize().is_none());
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec2::new(1.0_f64, -2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::from([5.0, 6.0]).to_array(), [5.0, 6.0]);
    }
}
