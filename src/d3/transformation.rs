//! 3D affine transformation.

use super::objects::Point;
use super::Object;
use crate::error::{GeometryError, Result};
use crate::kind::TransformationType;
use crate::linalg::Vec3;
use num_traits::Float;
use std::ops::Mul;

/// An affine map of space, `x -> linear * x + translation`, or the undefined
/// transformation.
///
/// `linear` is a row-major 3x3 matrix. Vectors are mapped by the linear part
/// only.
#[derive(Debug, Clone, Copy)]
pub struct Transformation<F> {
    affine: Option<Affine<F>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine<F> {
    kind: TransformationType,
    linear: [[F; 3]; 3],
    translation: Vec3<F>,
}

impl<F: Float> Transformation<F> {
    fn from_parts(kind: TransformationType, linear: [[F; 3]; 3], translation: Vec3<F>) -> Self {
        Self {
            affine: Some(Affine {
                kind,
                linear,
                translation,
            }),
        }
    }

    /// The identity map.
    pub fn identity() -> Self {
        Self::from_parts(TransformationType::Identity, identity_matrix(), Vec3::zero())
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3<F>) -> Self {
        Self::from_parts(TransformationType::Translation, identity_matrix(), offset)
    }

    /// Right-handed rotation by `angle` radians about `axis` through the origin.
    ///
    /// The axis does not need to be normalized, but must be finite and non-zero.
    pub fn rotation(axis: Vec3<F>, angle: F) -> Result<Self> {
        if !axis.is_finite() || !angle.is_finite() {
            return Err(GeometryError::InvalidArgument(
                "rotation axis and angle must be finite".to_string(),
            ));
        }
        let k = axis.normalize().ok_or_else(|| {
            GeometryError::InvalidArgument("rotation axis must be non-zero".to_string())
        })?;

        // Rodrigues: R = cos(a) I + sin(a) [k]x + (1 - cos(a)) k k^T
        let (s, c) = angle.sin_cos();
        let t = F::one() - c;
        let linear = [
            [c + t * k.x * k.x, t * k.x * k.y - s * k.z, t * k.x * k.z + s * k.y],
            [t * k.x * k.y + s * k.z, c + t * k.y * k.y, t * k.y * k.z - s * k.x],
            [t * k.x * k.z - s * k.y, t * k.y * k.z + s * k.x, c + t * k.z * k.z],
        ];

        Ok(Self::from_parts(TransformationType::Rotation, linear, Vec3::zero()))
    }

    /// Axis-aligned scaling about the origin.
    pub fn scaling(sx: F, sy: F, sz: F) -> Self {
        let zero = F::zero();
        let linear = [[sx, zero, zero], [zero, sy, zero], [zero, zero, sz]];
        Self::from_parts(TransformationType::Scaling, linear, Vec3::zero())
    }

    /// General affine map. Fails if any entry is not finite.
    pub fn from_matrix(linear: [[F; 3]; 3], translation: Vec3<F>) -> Result<Self> {
        let finite = linear.iter().flatten().all(|v| v.is_finite()) && translation.is_finite();
        if !finite {
            return Err(GeometryError::InvalidArgument(
                "transformation matrix must be finite".to_string(),
            ));
        }
        Ok(Self::from_parts(TransformationType::General, linear, translation))
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

    /// Homogeneous 4x4 matrix in row-major order.
    pub fn to_matrix(&self) -> Result<[[F; 4]; 4]> {
        let m = self.affine()?;
        let t = m.translation.to_array();
        let mut out = [[F::zero(); 4]; 4];
        for i in 0..3 {
            out[i][..3].copy_from_slice(&m.linear[i]);
            out[i][3] = t[i];
        }
        out[3][3] = F::one();
        Ok(out)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> Result<F> {
        Ok(determinant(&self.affine()?.linear))
    }

    /// Returns the inverse map.
    ///
    /// Fails with [`GeometryError::NotInvertible`] if the linear part is singular.
    /// The determinant is compared against the product of the row norms, so the
    /// test does not depend on the overall scale of the map.
    pub fn inverse(&self) -> Result<Self> {
        let m = self.affine()?;
        let det = determinant(&m.linear);
        let bound = m
            .linear
            .iter()
            .fold(F::one(), |acc, row| acc * Vec3::from(*row).magnitude());
        if det.abs() <= F::epsilon() * bound {
            return Err(GeometryError::NotInvertible);
        }

        let a = &m.linear;
        let inv_det = F::one() / det;
        // Adjugate (transposed cofactors) scaled by 1/det
        let inv = [
            [
                (a[1][1] * a[2][2] - a[1][2] * a[2][1]) * inv_det,
                (a[0][2] * a[2][1] - a[0][1] * a[2][2]) * inv_det,
                (a[0][1] * a[1][2] - a[0][2] * a[1][1]) * inv_det,
            ],
            [
                (a[1][2] * a[2][0] - a[1][0] * a[2][2]) * inv_det,
                (a[0][0] * a[2][2] - a[0][2] * a[2][0]) * inv_det,
                (a[0][2] * a[1][0] - a[0][0] * a[1][2]) * inv_det,
            ],
            [
                (a[1][0] * a[2][1] - a[1][1] * a[2][0]) * inv_det,
                (a[0][1] * a[2][0] - a[0][0] * a[2][1]) * inv_det,
                (a[0][0] * a[1][1] - a[0][1] * a[1][0]) * inv_det,
            ],
        ];
        let translation = -mul_vec(&inv, m.translation);
        if !translation.is_finite() || !inv.iter().flatten().all(|v| v.is_finite()) {
            return Err(GeometryError::NotInvertible);
        }

        Ok(Self::from_parts(m.kind, inv, translation))
    }

    /// Composes two maps: the result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        let s = self.affine()?;
        let o = other.affine()?;

        let mut linear = [[F::zero(); 3]; 3];
        for (i, row) in linear.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..3).fold(F::zero(), |acc, k| acc + s.linear[i][k] * o.linear[k][j]);
            }
        }
        let translation = mul_vec(&s.linear, o.translation) + s.translation;

        Ok(Self::from_parts(s.kind.combine(o.kind), linear, translation))
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
        Point::from_vector(mul_vec(&m.linear, p) + m.translation)
    }

    /// Maps a displacement; translation does not apply.
    pub fn apply_to_vector(&self, v: Vec3<F>) -> Result<Vec3<F>> {
        Ok(mul_vec(&self.affine()?.linear, v))
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

fn identity_matrix<F: Float>() -> [[F; 3]; 3] {
    let (zero, one) = (F::zero(), F::one());
    [[one, zero, zero], [zero, one, zero], [zero, zero, one]]
}

fn determinant<F: Float>(a: &[[F; 3]; 3]) -> F {
    a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
        - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
        + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
}

fn mul_vec<F: Float>(a: &[[F; 3]; 3], v: Vec3<F>) -> Vec3<F> {
    Vec3::new(
        a[0][0] * v.x + a[0][1] * v.y + a[0][2] * v.z,
        a[1][0] * v.x + a[1][1] * v.y + a[1][2] * v.z,
        a[2][0] * v.x + a[2][1] * v.y + a[2][2] * v.z,
    )
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
