//! Concrete 2D object types.

mod composite;
mod line;
mod line_string;
mod point;
mod point_set;
mod segment;

pub use composite::Composite;
pub use line::Line;
pub use line_string::LineString;
pub use point::Point;
pub use point_set::PointSet;
pub use segment::Segment;
