//! Variant tags shared by the 2D and 3D object models.

use std::fmt;

/// Runtime variant of a geometric object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Point,
    PointSet,
    Line,
    Segment,
    LineString,
    Composite,
}

impl ObjectType {
    /// Returns the variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Point => "Point",
            ObjectType::PointSet => "PointSet",
            ObjectType::Line => "Line",
            ObjectType::Segment => "Segment",
            ObjectType::LineString => "LineString",
            ObjectType::Composite => "Composite",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an affine transformation.
///
/// Composition keeps the tag when both operands share it (or one is the
/// identity) and falls back to [`TransformationType::General`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationType {
    Identity,
    Translation,
    Rotation,
    Scaling,
    General,
}

impl TransformationType {
    /// Tag of `self` composed with `other`.
    pub fn combine(self, other: Self) -> Self {
        use TransformationType::*;
        match (self, other) {
            (Identity, kind) | (kind, Identity) => kind,
            (Translation, Translation) => Translation,
            (Rotation, Rotation) => Rotation,
            (Scaling, Scaling) => Scaling,
            _ => General,
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformationType::Identity => "Identity",
            TransformationType::Translation => "Translation",
            TransformationType::Rotation => "Rotation",
            TransformationType::Scaling => "Scaling",
            TransformationType::General => "General",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_display() {
        assert_eq!(ObjectType::LineString.to_string(), "LineString");
        assert_eq!(ObjectType::PointSet.as_str(), "PointSet");
    }

    #[test]
    fn test_combine() {
        use TransformationType::*;
        assert_eq!(Identity.combine(Rotation), Rotation);
        assert_eq!(Scaling.combine(Identity), Scaling);
        assert_eq!(Translation.combine(Translation), Translation);
        assert_eq!(Rotation.combine(Translation), General);
        assert_eq!(General.combine(Identity), General);
    }
}
