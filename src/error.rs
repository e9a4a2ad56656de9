//! Error types for geometry operations.

use crate::kind::ObjectType;
use thiserror::Error;

/// Errors that can occur when constructing or querying geometric objects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The operation needs geometric data, but the value is undefined.
    #[error("{0} is undefined")]
    Undefined(&'static str),

    /// Indexed access outside `[0, count)`.
    #[error("index {index} is out of range (count is {count})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of available elements.
        count: usize,
    },

    /// Malformed construction input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An object was not of the requested variant.
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Variant that was asked for.
        expected: ObjectType,
        /// Variant that was actually held.
        found: ObjectType,
    },

    /// The transformation has a singular linear part.
    #[error("transformation is not invertible")]
    NotInvertible,
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GeometryError::Undefined("Point").to_string(),
            "Point is undefined"
        );
        assert_eq!(
            GeometryError::OutOfRange { index: 3, count: 1 }.to_string(),
            "index 3 is out of range (count is 1)"
        );
        assert_eq!(
            GeometryError::WrongType {
                expected: ObjectType::Point,
                found: ObjectType::LineString,
            }
            .to_string(),
            "expected Point, found LineString"
        );
    }
}
