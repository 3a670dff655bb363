//! 2D point in screen space (pixels).

use super::vec4::Vec4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec4> for Vec2 {
    /// Drops z and w; used once a vertex is in pixel coordinates.
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y)
    }
}
