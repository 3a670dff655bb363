use crate::math::vec4::Vec4;

/// A flat-shaded triangle: three ordered vertices and one packed color.
///
/// Every pipeline stage builds new triangles from the previous stage's
/// output; a triangle is never mutated in place between stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    /// Packed `0xRRGGBBAA`, constant across the face.
    pub color: u32,
}

impl Triangle {
    pub const fn new(points: [Vec4; 3], color: u32) -> Self {
        Self { points, color }
    }

    /// Returns a triangle with `f` applied to every vertex and the same color.
    pub fn map(&self, f: impl Fn(Vec4) -> Vec4) -> Self {
        let [a, b, c] = self.points;
        Self::new([f(a), f(b), f(c)], self.color)
    }

    /// Mean z of the three vertices, the painter's algorithm sort key.
    pub fn avg_depth(&self) -> f32 {
        let [a, b, c] = self.points;
        (a.z + b.z + c.z) / 3.0
    }

    /// Un-normalized face normal `(p1 - p0) x (p2 - p0)`.
    pub fn face_normal(&self) -> Vec4 {
        let [a, b, c] = self.points;
        (b - a).cross(c - a)
    }

    /// Surface area in the triangle's own space.
    pub fn area(&self) -> f32 {
        self.face_normal().length() * 0.5
    }
}
