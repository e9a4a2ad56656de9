//! Geometric objects in three-dimensional Euclidean space.

mod object;
pub mod objects;
mod transformation;

pub use object::Object;
pub use transformation::Transformation;
