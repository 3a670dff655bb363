//! Homogeneous 3D vector.
//!
//! `x`, `y`, `z` carry the position in world units and `w` is the homogeneous
//! weight. Every operation in this module works on `x`, `y`, `z` only: the
//! length, dot and cross products ignore `w`, and arithmetic results are
//! positions again (`w = 1`). After a projective transform callers must do the
//! perspective divide ([`Vec4::perspective_divide`]) before using the vector.

use std::ops::{Add, Div, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Vec4 {
    /// The origin as a position (w=1).
    pub const ZERO: Self = Self::point(0.0, 0.0, 0.0);
    pub const UP: Self = Self::point(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::point(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w=1) from x, y, z coordinates.
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction vector (w=0) from x, y, z coordinates.
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Divides x, y, z by the length.
    ///
    /// A zero-length vector yields NaN components; use
    /// [`Vec4::try_normalize`] when the input may be degenerate.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Like [`Vec4::normalize`], but returns `None` for zero-length (or
    /// non-finite) input instead of producing NaN.
    pub fn try_normalize(&self) -> Option<Self> {
        let length = self.length();
        if length > f32::EPSILON && length.is_finite() {
            Some(*self / length)
        } else {
            None
        }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self::point(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Divides x, y, z by w. The result is a position with w reset to 1.
    ///
    /// Only meaningful for positions (w != 0) coming out of a projection.
    pub fn perspective_divide(&self) -> Self {
        *self / self.w
    }

    /// Point where the segment `line_start..line_end` crosses the plane through
    /// `plane_point` with normal `plane_normal`.
    ///
    /// The normal is normalized first. The segment must actually cross the
    /// plane: a segment parallel to it divides by zero.
    pub fn plane_intersect(
        plane_point: Self,
        plane_normal: Self,
        line_start: Self,
        line_end: Self,
    ) -> Self {
        let plane_normal = plane_normal.normalize();
        let plane_d = -plane_normal.dot(plane_point);
        let ad = line_start.dot(plane_normal);
        let bd = line_end.dot(plane_normal);
        let t = (-plane_d - ad) / (bd - ad);
        line_start + (line_end - line_start) * t
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::point(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::point(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::point(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Self::point(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Vec4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
