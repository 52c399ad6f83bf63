//! Homogeneous 4D vector and 4x4 matrix algebra.

pub mod mat4;
pub mod vec4;

pub use mat4::Mat4;
pub use vec4::Vec4;
