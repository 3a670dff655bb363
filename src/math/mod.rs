//! Vector and matrix types used by the geometry pipeline.

pub mod mat4;
pub mod vec2;
pub mod vec4;
