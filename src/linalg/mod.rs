//! Small fixed-size vectors used as coordinate storage and displacements.

mod vec2;
mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;
