//! Tagged union over every 2D object variant.

use super::objects::{Composite, Line, LineString, Point, PointSet, Segment};
use super::Transformation;
use crate::error::{GeometryError, Result};
use crate::kind::ObjectType;
use num_traits::Float;
use std::fmt;

/// Any 2D geometric object.
///
/// The variant is the runtime type of the object. Callers distinguish
/// variants by matching, by [`Object::object_type`], or through the `as_*`
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum Object<F> {
    Point(Point<F>),
    PointSet(PointSet<F>),
    Line(Line<F>),
    Segment(Segment<F>),
    LineString(LineString<F>),
    Composite(Composite<F>),
}

impl<F: Float> Object<F> {
    /// Returns `true` if the wrapped object is in a well-formed state.
    pub fn is_defined(&self) -> bool {
        match self {
            Object::Point(o) => o.is_defined(),
            Object::PointSet(o) => o.is_defined(),
            Object::Line(o) => o.is_defined(),
            Object::Segment(o) => o.is_defined(),
            Object::LineString(o) => o.is_defined(),
            Object::Composite(o) => o.is_defined(),
        }
    }

    /// Returns the runtime variant tag.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Point(_) => ObjectType::Point,
            Object::PointSet(_) => ObjectType::PointSet,
            Object::Line(_) => ObjectType::Line,
            Object::Segment(_) => ObjectType::Segment,
            Object::LineString(_) => ObjectType::LineString,
            Object::Composite(_) => ObjectType::Composite,
        }
    }

    /// Returns `true` for the `Point` variant.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.object_type() == ObjectType::Point
    }

    /// Returns `true` for the `PointSet` variant.
    #[inline]
    pub fn is_point_set(&self) -> bool {
        self.object_type() == ObjectType::PointSet
    }

    /// Returns `true` for the `Line` variant.
    #[inline]
    pub fn is_line(&self) -> bool {
        self.object_type() == ObjectType::Line
    }

    /// Returns `true` for the `Segment` variant.
    #[inline]
    pub fn is_segment(&self) -> bool {
        self.object_type() == ObjectType::Segment
    }

    /// Returns `true` for the `LineString` variant.
    #[inline]
    pub fn is_line_string(&self) -> bool {
        self.object_type() == ObjectType::LineString
    }

    /// Returns `true` for the `Composite` variant.
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.object_type() == ObjectType::Composite
    }

    /// Borrows the wrapped point, if this is one.
    pub fn as_point(&self) -> Option<&Point<F>> {
        match self {
            Object::Point(o) => Some(o),
            _ => None,
        }
    }

    /// Borrows the wrapped point set, if this is one.
    pub fn as_point_set(&self) -> Option<&PointSet<F>> {
        match self {
            Object::PointSet(o) => Some(o),
            _ => None,
        }
    }

    /// Borrows the wrapped line, if this is one.
    pub fn as_line(&self) -> Option<&Line<F>> {
        match self {
            Object::Line(o) => Some(o),
            _ => None,
        }
    }

    /// Borrows the wrapped segment, if this is one.
    pub fn as_segment(&self) -> Option<&Segment<F>> {
        match self {
            Object::Segment(o) => Some(o),
            _ => None,
        }
    }

    /// Borrows the wrapped line string, if this is one.
    pub fn as_line_string(&self) -> Option<&LineString<F>> {
        match self {
            Object::LineString(o) => Some(o),
            _ => None,
        }
    }

    /// Borrows the wrapped composite, if this is one.
    pub fn as_composite(&self) -> Option<&Composite<F>> {
        match self {
            Object::Composite(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the image of this object under `transformation`.
    ///
    /// The result always has the same variant as `self`.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        Ok(match self {
            Object::Point(o) => Object::Point(o.apply_transformation(transformation)?),
            Object::PointSet(o) => Object::PointSet(o.apply_transformation(transformation)?),
            Object::Line(o) => Object::Line(o.apply_transformation(transformation)?),
            Object::Segment(o) => Object::Segment(o.apply_transformation(transformation)?),
            Object::LineString(o) => Object::LineString(o.apply_transformation(transformation)?),
            Object::Composite(o) => Object::Composite(o.apply_transformation(transformation)?),
        })
    }
}

impl<F: Float> From<Point<F>> for Object<F> {
    fn from(o: Point<F>) -> Self {
        Object::Point(o)
    }
}

impl<F: Float> From<PointSet<F>> for Object<F> {
    fn from(o: PointSet<F>) -> Self {
        Object::PointSet(o)
    }
}

impl<F: Float> From<Line<F>> for Object<F> {
    fn from(o: Line<F>) -> Self {
        Object::Line(o)
    }
}

impl<F: Float> From<Segment<F>> for Object<F> {
    fn from(o: Segment<F>) -> Self {
        Object::Segment(o)
    }
}

impl<F: Float> From<LineString<F>> for Object<F> {
    fn from(o: LineString<F>) -> Self {
        Object::LineString(o)
    }
}

impl<F: Float> From<Composite<F>> for Object<F> {
    fn from(o: Composite<F>) -> Self {
        Object::Composite(o)
    }
}

fn wrong_type<F: Float>(expected: ObjectType, found: &Object<F>) -> GeometryError {
    GeometryError::WrongType {
        expected,
        found: found.object_type(),
    }
}

impl<F: Float> TryFrom<Object<F>> for Point<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::Point(o) => Ok(o),
            other => Err(wrong_type(ObjectType::Point, &other)),
        }
    }
}

impl<F: Float> TryFrom<Object<F>> for PointSet<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::PointSet(o) => Ok(o),
            other => Err(wrong_type(ObjectType::PointSet, &other)),
        }
    }
}

impl<F: Float> TryFrom<Object<F>> for Line<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::Line(o) => Ok(o),
            other => Err(wrong_type(ObjectType::Line, &other)),
        }
    }
}

impl<F: Float> TryFrom<Object<F>> for Segment<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::Segment(o) => Ok(o),
            other => Err(wrong_type(ObjectType::Segment, &other)),
        }
    }
}

impl<F: Float> TryFrom<Object<F>> for LineString<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::LineString(o) => Ok(o),
            other => Err(wrong_type(ObjectType::LineString, &other)),
        }
    }
}

impl<F: Float> TryFrom<Object<F>> for Composite<F> {
    type Error = GeometryError;

    fn try_from(object: Object<F>) -> Result<Self> {
        match object {
            Object::Composite(o) => Ok(o),
            other => Err(wrong_type(ObjectType::Composite, &other)),
        }
    }
}

impl<F: Float + fmt::Display> fmt::Display for Object<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Point(o) => write!(f, "Point {}", o),
            Object::PointSet(o) => write!(f, "PointSet {}", o),
            Object::Line(o) => write!(f, "{}", o),
            Object::Segment(o) => write!(f, "Segment {}", o),
            Object::LineString(o) => write!(f, "LineString {}", o),
            Object::Composite(o) => write!(f, "{}", o),
        }
    }
}
