//! Heterogeneous container of 3D objects.

use super::{Line, LineString, Point, PointSet, Segment};
use crate::d3::{Object, Transformation};
use crate::error::{GeometryError, Result};
use crate::kind::ObjectType;
use num_traits::Float;
use std::fmt;
use std::ops::{Add, AddAssign};

/// An ordered, read-only collection of objects of any variant.
///
/// The composite owns its objects; references handed out by
/// [`Composite::access_object_at`] borrow from it.
///
/// The `is_*` classification queries hold only for a composite that wraps
/// exactly one object of the matching variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<F> {
    objects: Vec<Object<F>>,
}

impl<F: Float> Composite<F> {
    /// Wraps a single object.
    pub fn new(object: impl Into<Object<F>>) -> Self {
        Self {
            objects: vec![object.into()],
        }
    }

    /// Wraps a sequence of objects, keeping their order.
    pub fn from_objects(objects: impl IntoIterator<Item = Object<F>>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
        }
    }

    /// Creates a composite holding no objects.
    #[inline]
    pub fn empty() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Returns `true` if every contained object is defined. An empty composite is defined.
    pub fn is_defined(&self) -> bool {
        self.objects.iter().all(Object::is_defined)
    }

    /// Returns `true` if the composite holds no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns `true` if the composite holds exactly one point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.single_type() == Some(ObjectType::Point)
    }

    /// Returns `true` if the composite holds exactly one point set.
    #[inline]
    pub fn is_point_set(&self) -> bool {
        self.single_type() == Some(ObjectType::PointSet)
    }

    /// Returns `true` if the composite holds exactly one line.
    #[inline]
    pub fn is_line(&self) -> bool {
        self.single_type() == Some(ObjectType::Line)
    }

    /// Returns `true` if the composite holds exactly one segment.
    #[inline]
    pub fn is_segment(&self) -> bool {
        self.single_type() == Some(ObjectType::Segment)
    }

    /// Returns `true` if the composite holds exactly one line string.
    #[inline]
    pub fn is_line_string(&self) -> bool {
        self.single_type() == Some(ObjectType::LineString)
    }

    /// Returns `true` if the composite holds exactly one nested composite.
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.single_type() == Some(ObjectType::Composite)
    }

    /// Number of objects held.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the object at `index`.
    pub fn access_object_at(&self, index: usize) -> Result<&Object<F>> {
        self.objects.get(index).ok_or(GeometryError::OutOfRange {
            index,
            count: self.objects.len(),
        })
    }

    /// The held objects, in order.
    #[inline]
    pub fn objects(&self) -> &[Object<F>] {
        &self.objects
    }

    /// Iterates over the held objects in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Object<F>> {
        self.objects.iter()
    }

    /// Borrows the only object as a point.
    pub fn as_point(&self) -> Result<&Point<F>> {
        self.single(ObjectType::Point, Object::as_point)
    }

    /// Borrows the only object as a point set.
    pub fn as_point_set(&self) -> Result<&PointSet<F>> {
        self.single(ObjectType::PointSet, Object::as_point_set)
    }

    /// Borrows the only object as a line.
    pub fn as_line(&self) -> Result<&Line<F>> {
        self.single(ObjectType::Line, Object::as_line)
    }

    /// Borrows the only object as a segment.
    pub fn as_segment(&self) -> Result<&Segment<F>> {
        self.single(ObjectType::Segment, Object::as_segment)
    }

    /// Borrows the only object as a line string.
    pub fn as_line_string(&self) -> Result<&LineString<F>> {
        self.single(ObjectType::LineString, Object::as_line_string)
    }

    /// Borrows the only object as a nested composite.
    pub fn as_composite(&self) -> Result<&Composite<F>> {
        self.single(ObjectType::Composite, Object::as_composite)
    }

    /// Returns a composite holding the image of every object under `transformation`.
    ///
    /// Fails without producing a partial result if any object cannot be mapped.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        if !transformation.is_defined() {
            return Err(GeometryError::Undefined("Transformation"));
        }
        let objects = self
            .objects
            .iter()
            .map(|o| o.apply_transformation(transformation))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { objects })
    }

    /// Variant of the only object, or `None` unless exactly one object is held.
    fn single_type(&self) -> Option<ObjectType> {
        match self.objects.as_slice() {
            [object] => Some(object.object_type()),
            _ => None,
        }
    }

    fn single<'a, T>(
        &'a self,
        expected: ObjectType,
        cast: impl Fn(&'a Object<F>) -> Option<&'a T>,
    ) -> Result<&'a T> {
        match self.objects.as_slice() {
            [object] => cast(object).ok_or(GeometryError::WrongType {
                expected,
                found: object.object_type(),
            }),
            _ => Err(GeometryError::WrongType {
                expected,
                found: ObjectType::Composite,
            }),
        }
    }
}

impl<F: Float> Default for Composite<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Float> FromIterator<Object<F>> for Composite<F> {
    fn from_iter<I: IntoIterator<Item = Object<F>>>(iter: I) -> Self {
        Self::from_objects(iter)
    }
}

impl<F: Float> From<Vec<Object<F>>> for Composite<F> {
    fn from(objects: Vec<Object<F>>) -> Self {
        Self { objects }
    }
}

impl<'a, F: Float> IntoIterator for &'a Composite<F> {
    type Item = &'a Object<F>;
    type IntoIter = std::slice::Iter<'a, Object<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Float> IntoIterator for Composite<F> {
    type Item = Object<F>;
    type IntoIter = std::vec::IntoIter<Object<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

/// Concatenation.
impl<F: Float> Add for Composite<F> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<F: Float> AddAssign for Composite<F> {
    fn add_assign(&mut self, other: Self) {
        self.objects.extend(other.objects);
    }
}

impl<F: Float + fmt::Display> fmt::Display for Composite<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Composite(")?;
        for (i, object) in self.objects.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", object)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Vec3;

    fn p(x: f64, y: f64, z: f64) -> Point<f64> {
        Point::new(x, y, z).unwrap()
    }

    fn path() -> LineString<f64> {
        LineString::new([
            p(-1.0, 1.0, 1.0),
            p(1.0, 1.0, -1.0),
            p(1.0, -1.0, 1.0),
            p(-1.0, -1.0, 0.0),
        ])
    }

    #[test]
    fn test_single_line_string() {
        let composite = Composite::new(path());
        assert!(composite.is_defined());
        assert!(!composite.is_empty());
        assert!(!composite.is_point());
        assert!(!composite.is_line());
        assert!(composite.is_line_string());
        assert_eq!(composite.object_count(), 1);

        let accessed = composite.access_object_at(0).unwrap();
        assert!(accessed.is_defined());
        assert!(!accessed.is_composite());
        assert_eq!(accessed, &Object::from(path()));
    }

    #[test]
    fn test_round_trip() {
        let objects: Vec<Object<f64>> = vec![
            p(1.0, 2.0, 3.0).into(),
            Line::new(p(0.0, 0.0, 0.0), Vec3::unit_z()).unwrap().into(),
            Segment::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)).into(),
            path().into(),
        ];
        for object in objects {
            let composite = Composite::new(object.clone());
            let back = composite.access_object_at(0).unwrap();
            assert_eq!(back.object_type(), object.object_type());
            assert_eq!(back, &object);
        }
    }

    #[test]
    fn test_empty() {
        let composite = Composite::from_objects(Vec::<Object<f64>>::new());
        assert!(composite.is_empty());
        assert_eq!(composite.object_count(), 0);
        assert!(!composite.is_line_string());
        assert!(composite.access_object_at(0).is_err());
        assert_eq!(composite, Composite::default());
    }

    #[test]
    fn test_out_of_range() {
        let composite = Composite::new(path());
        for index in [1, 2, usize::MAX] {
            assert_eq!(
                composite.access_object_at(index),
                Err(GeometryError::OutOfRange { index, count: 1 })
            );
        }
    }

    #[test]
    fn test_nested() {
        let inner = Composite::from_objects([Object::from(p(0.0, 0.0, 0.0)), path().into()]);
        let outer = Composite::new(inner.clone());
        assert!(outer.is_composite());
        assert_eq!(outer.as_composite().unwrap(), &inner);
        assert_eq!(outer.as_composite().unwrap().object_count(), 2);
    }

    #[test]
    fn test_as_typed() {
        let composite = Composite::new(path());
        assert_eq!(composite.as_line_string().unwrap().point_count(), 4);
        assert_eq!(
            composite.as_segment(),
            Err(GeometryError::WrongType {
                expected: ObjectType::Segment,
                found: ObjectType::LineString,
            })
        );
    }

    #[test]
    fn test_concatenation() {
        let mut composite = Composite::new(p(0.0, 0.0, 0.0));
        composite += Composite::new(path());
        assert_eq!(composite.object_count(), 2);
        let types: Vec<ObjectType> = composite.iter().map(Object::object_type).collect();
        assert_eq!(types, vec![ObjectType::Point, ObjectType::LineString]);
    }

    #[test]
    fn test_apply_transformation() {
        let composite = Composite::new(path());
        let t = Transformation::translation(Vec3::new(0.0, 0.0, 1.0));
        let moved = composite.apply_transformation(&t).unwrap();
        assert!(moved.is_line_string());
        assert_eq!(
            *moved.as_line_string().unwrap().access_point_at(3).unwrap(),
            p(-1.0, -1.0, 1.0)
        );
    }
}
