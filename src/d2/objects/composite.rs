//! Heterogeneous container of 2D objects.

use super::{Line, LineString, Point, PointSet, Segment};
use crate::d2::{Object, Transformation};
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
    use crate::linalg::Vec2;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y).unwrap()
    }

    fn line_string() -> LineString<f64> {
        LineString::new([p(-1.0, 1.0), p(1.0, 1.0), p(1.0, -1.0), p(-1.0, -1.0)])
    }

    #[test]
    fn test_single_line_string() {
        let composite = Composite::new(line_string());
        assert!(composite.is_defined());
        assert!(!composite.is_empty());
        assert!(!composite.is_point());
        assert!(!composite.is_line());
        assert!(composite.is_line_string());
        assert_eq!(composite.object_count(), 1);

        let accessed = composite.access_object_at(0).unwrap();
        assert!(accessed.is_defined());
        assert!(matches!(accessed, Object::LineString(_)));
        assert_eq!(accessed, &Object::LineString(line_string()));
        assert_eq!(composite.as_line_string().unwrap(), &line_string());
    }

    #[test]
    fn test_single_classification_is_exclusive() {
        let composites = [
            Composite::new(p(0.0, 0.0)),
            Composite::new(Line::new(p(0.0, 0.0), Vec2::unit_y()).unwrap()),
            Composite::new(Segment::new(p(0.0, 0.0), p(1.0, 1.0))),
            Composite::new(PointSet::new([p(0.0, 0.0)])),
            Composite::new(line_string()),
            Composite::new(Composite::empty()),
        ];
        for composite in &composites {
            let flags = [
                composite.is_point(),
                composite.is_line(),
                composite.is_segment(),
                composite.is_point_set(),
                composite.is_line_string(),
                composite.is_composite(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }

    #[test]
    fn test_empty() {
        let composite = Composite::from_objects(Vec::<Object<f64>>::new());
        assert!(composite.is_empty());
        assert!(composite.is_defined());
        assert_eq!(composite.object_count(), 0);
        assert!(!composite.is_point());
        assert!(!composite.is_line_string());
        assert_eq!(
            composite.access_object_at(0),
            Err(GeometryError::OutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_multiple_objects_classify_as_nothing() {
        let composite = Composite::from_objects([Object::from(p(0.0, 0.0)), p(1.0, 1.0).into()]);
        assert_eq!(composite.object_count(), 2);
        assert!(!composite.is_point());
        assert!(!composite.is_empty());
        assert_eq!(
            composite.as_point(),
            Err(GeometryError::WrongType {
                expected: ObjectType::Point,
                found: ObjectType::Composite,
            })
        );
    }

    #[test]
    fn test_access_out_of_range() {
        let composite = Composite::new(line_string());
        assert_eq!(
            composite.access_object_at(1),
            Err(GeometryError::OutOfRange { index: 1, count: 1 })
        );
        assert_eq!(
            composite.as_point(),
            Err(GeometryError::WrongType {
                expected: ObjectType::Point,
                found: ObjectType::LineString,
            })
        );
    }

    #[test]
    fn test_is_defined_with_undefined_member() {
        let composite = Composite::from_objects([
            Object::from(line_string()),
            Object::Point(Point::undefined()),
        ]);
        assert!(!composite.is_defined());
    }

    #[test]
    fn test_concatenation() {
        let a = Composite::new(p(0.0, 0.0));
        let b = Composite::from_objects([Object::from(line_string()), p(2.0, 2.0).into()]);
        let mut c = a.clone() + b.clone();
        assert_eq!(c.object_count(), 3);
        assert!(c.access_object_at(1).unwrap().is_line_string());
        c += Composite::empty();
        assert_eq!(c.object_count(), a.object_count() + b.object_count());
    }

    #[test]
    fn test_apply_transformation() {
        let composite = Composite::from_objects([Object::from(line_string()), p(0.0, 0.0).into()]);
        let t = Transformation::translation(Vec2::new(1.0, 1.0));
        let moved = composite.apply_transformation(&t).unwrap();
        assert_eq!(moved.object_count(), 2);
        assert_eq!(moved.access_object_at(1).unwrap().as_point(), Some(&p(1.0, 1.0)));
        assert!(moved.access_object_at(0).unwrap().is_line_string());

        let broken = composite + Composite::new(Point::undefined());
        assert_eq!(
            broken.apply_transformation(&t),
            Err(GeometryError::Undefined("Point"))
        );
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Composite<f64>>();
        assert_send_sync::<Object<f32>>();
    }
}
