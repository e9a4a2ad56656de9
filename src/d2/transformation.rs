//! 2D affine transformation.

use super::objects::Point;
use super::Object;
use crate::error::{GeometryError, Result};
use crate::kind::TransformationType;
use crate::linalg::Vec2;
use num_traits::Float;
use std::ops::Mul;

/// An affine map of the plane, or the undefined transformation.
///
/// Stored as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// - Point: `(a*x + b*y + tx, c*x + d*y + ty)`
/// - Vector: `(a*x + b*y, c*x + d*y)` (no translation)
///
/// # Example
///
/// ```
/// use geokernel::d2::objects::{LineString, Point};
/// use geokernel::d2::{Object, Transformation};
/// use geokernel::Vec2;
///
/// let path = LineString::new([Point::new(0.0, 0.0)?, Point::new(1.0, 0.0)?]);
/// let shift = Transformation::translation(Vec2::new(0.0, 2.0));
///
/// let moved = shift.apply_to(&Object::from(path))?;
/// assert!(moved.is_line_string());
/// # Ok::<(), geokernel::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transformation<F> {
    affine: Option<Affine<F>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine<F> {
    kind: TransformationType,
    a: F,
    b: F,
    c: F,
    d: F,
    tx: F,
    ty: F,
}

impl<F: Float> Transformation<F> {
    fn from_affine(affine: Affine<F>) -> Self {
        Self {
            affine: Some(affine),
        }
    }

    fn linear(kind: TransformationType, a: F, b: F, c: F, d: F) -> Self {
        Self::from_affine(Affine {
            kind,
            a,
            b,
            c,
            d,
            tx: F::zero(),
            ty: F::zero(),
        })
    }

    /// The identity map.
    pub fn identity() -> Self {
        Self::linear(
            TransformationType::Identity,
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
        )
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec2<F>) -> Self {
        Self::from_affine(Affine {
            kind: TransformationType::Translation,
            a: F::one(),
            b: F::zero(),
            c: F::zero(),
            d: F::one(),
            tx: offset.x,
            ty: offset.y,
        })
    }

    /// Rotation about the origin. Angle is in radians, positive is counter-clockwise.
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::linear(TransformationType::Rotation, cos_a, -sin_a, sin_a, cos_a)
    }

    /// Rotation about `center`.
    pub fn rotation_around(angle: F, center: &Point<F>) -> Result<Self> {
        let c = center.coordinates()?;
        Self::translation(-c)
            .then(&Self::rotation(angle))?
            .then(&Self::translation(c))
    }

    /// Axis-aligned scaling about the origin.
    pub fn scaling(sx: F, sy: F) -> Self {
        Self::linear(TransformationType::Scaling, sx, F::zero(), F::zero(), sy)
    }

    /// General affine map `x -> linear * x + translation`.
    ///
    /// `linear` is row-major. Fails if any entry is not finite.
    pub fn from_matrix(linear: [[F; 2]; 2], translation: Vec2<F>) -> Result<Self> {
        let finite = linear.iter().flatten().all(|v| v.is_finite()) && translation.is_finite();
        if !finite {
            return Err(GeometryError::InvalidArgument(
                "transformation matrix must be finite".to_string(),
            ));
        }
        Ok(Self::from_affine(Affine {
            kind: TransformationType::General,
            a: linear[0][0],
            b: linear[0][1],
            c: linear[1][0],
            d: linear[1][1],
            tx: translation.x,
            ty: translation.y,
        }))
    }

    /// The undefined transformation.
    #[inline]
    pub fn undefined() -> Self {
        Self { affine: None }
    }

    /// Returns `true` unless this is the undefined transformation.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.affine.is_some()
    }

    /// The kind of map this transformation was built as.
    pub fn transformation_type(&self) -> Result<TransformationType> {
        Ok(self.affine()?.kind)
    }

    /// Homogeneous 3x3 matrix in row-major order.
    pub fn to_matrix(&self) -> Result<[[F; 3]; 3]> {
        let m = self.affine()?;
        Ok([
            [m.a, m.b, m.tx],
            [m.c, m.d, m.ty],
            [F::zero(), F::zero(), F::one()],
        ])
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> Result<F> {
        let m = self.affine()?;
        Ok(m.a * m.d - m.b * m.c)
    }

    /// Returns the inverse map.
    ///
    /// Fails with [`GeometryError::NotInvertible`] if the linear part is singular.
    /// The determinant is compared against the product of the row norms, so the
    /// test does not depend on the overall scale of the map.
    pub fn inverse(&self) -> Result<Self> {
        let m = self.affine()?;
        let det = m.a * m.d - m.b * m.c;
        let bound = Vec2::new(m.a, m.b).magnitude() * Vec2::new(m.c, m.d).magnitude();
        if det.abs() <= F::epsilon() * bound {
            return Err(GeometryError::NotInvertible);
        }

        let inv_det = F::one() / det;
        let inverse = Affine {
            kind: m.kind,
            a: m.d * inv_det,
            b: -m.b * inv_det,
            c: -m.c * inv_det,
            d: m.a * inv_det,
            tx: (m.b * m.ty - m.d * m.tx) * inv_det,
            ty: (m.c * m.tx - m.a * m.ty) * inv_det,
        };
        let entries = [inverse.a, inverse.b, inverse.c, inverse.d, inverse.tx, inverse.ty];
        if !entries.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NotInvertible);
        }
        Ok(Self::from_affine(inverse))
    }

    /// Composes two maps: the result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        let s = self.affine()?;
        let o = other.affine()?;
        Ok(Self::from_affine(Affine {
            kind: s.kind.combine(o.kind),
            a: s.a * o.a + s.b * o.c,
            b: s.a * o.b + s.b * o.d,
            c: s.c * o.a + s.d * o.c,
            d: s.c * o.b + s.d * o.d,
            tx: s.a * o.tx + s.b * o.ty + s.tx,
            ty: s.c * o.tx + s.d * o.ty + s.ty,
        }))
    }

    /// Returns a map that applies `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: &Self) -> Result<Self> {
        other.compose(self)
    }

    /// Maps a point.
    pub fn apply_to_point(&self, point: &Point<F>) -> Result<Point<F>> {
        let m = self.affine()?;
        let p = point.coordinates()?;
        Point::new(m.a * p.x + m.b * p.y + m.tx, m.c * p.x + m.d * p.y + m.ty)
    }

    /// Maps a displacement; translation does not apply.
    pub fn apply_to_vector(&self, v: Vec2<F>) -> Result<Vec2<F>> {
        let m = self.affine()?;
        Ok(Vec2::new(m.a * v.x + m.b * v.y, m.c * v.x + m.d * v.y))
    }

    /// Maps any object to an object of the same variant.
    pub fn apply_to(&self, object: &Object<F>) -> Result<Object<F>> {
        object.apply_transformation(self)
    }

    fn affine(&self) -> Result<&Affine<F>> {
        self.affine
            .as_ref()
            .ok_or(GeometryError::Undefined("Transformation"))
    }
}

impl<F: PartialEq> PartialEq for Transformation<F> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.affine, &other.affine) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: Float> Default for Transformation<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// `self * rhs` applies `rhs` first. Undefined if either operand is.
impl<F: Float> Mul for Transformation<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs).unwrap_or_else(|_| Self::undefined())
    }
}
