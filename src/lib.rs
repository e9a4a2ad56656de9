//! geokernel - Typed 2D/3D geometry objects
//!
//! Points, point sets, lines, segments and line strings in the plane ([`d2`])
//! and in space ([`d3`]), a heterogeneous [`d3::objects::Composite`] container
//! that classifies what it holds, and affine transformations that map every
//! object to an object of the same variant.
//!
//! Every value can be *undefined*. Asking an undefined value whether it is
//! defined never fails; anything that needs its geometry returns
//! [`GeometryError::Undefined`].
//!
//! ```
//! use geokernel::d3::objects::{Composite, LineString, Point};
//!
//! let path = LineString::new([
//!     Point::new(-1.0, 1.0, 1.0)?,
//!     Point::new(1.0, 1.0, -1.0)?,
//!     Point::new(1.0, -1.0, 1.0)?,
//!     Point::new(-1.0, -1.0, 0.0)?,
//! ]);
//! let composite = Composite::new(path);
//!
//! assert!(composite.is_line_string());
//! assert_eq!(composite.object_count(), 1);
//! # Ok::<(), geokernel::GeometryError>(())
//! ```

pub mod d2;
pub mod d3;
pub mod error;
pub mod kind;
pub mod linalg;
mod tolerance;

pub use error::{GeometryError, Result};
pub use kind::{ObjectType, TransformationType};
pub use linalg::{Vec2, Vec3};
