//! Vector and matrix algebra.
//!
//! Everything here uses the **row-vector** convention: points are multiplied
//! on the left of a matrix (`p' = p * M`), so a composed matrix `A * B`
//! applies `A` first and `B` second.

pub mod mat4;
pub mod vec2;
pub mod vec3;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
