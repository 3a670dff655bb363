//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v * M`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * (A * B) == (v * A) * B`, so the
//!   combined matrix applies A first, then B
//!
//! # Example
//! ```ignore
//! let world = Mat4::rotation_x(theta) * Mat4::translation(0.0, 0.0, 5.0);
//! let moved = vertex * world; // rotate, then push away from the camera
//! ```

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::vec4::Vec4;

/// 4x4 matrix stored as `m[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix (offset in the last row).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix.
    ///
    /// # Arguments
    /// * `fov_y_degrees` - Vertical field of view in degrees
    /// * `aspect_ratio` - Viewport height divided by width
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    ///
    /// Depth is mapped to `[0, 1]` over `near..far`, and the `[2][3] = 1` entry
    /// copies view-space z into w for the perspective divide.
    pub fn perspective(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let focal = 1.0 / (fov_y_degrees.to_radians() * 0.5).tan();
        let depth = far / (far - near);
        Self::new([
            [aspect_ratio * focal, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [0.0, 0.0, depth, 1.0],
            [0.0, 0.0, -near * depth, 0.0],
        ])
    }

    /// Creates the camera-to-world ("point at") matrix.
    ///
    /// # Arguments
    ///
    /// * `position` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - Approximate up direction; re-orthogonalised against forward.
    ///
    /// The rows hold the orthonormal basis (right, up, forward) followed by the
    /// camera position. Invert it with [`Mat4::quick_inverse`] to get the view
    /// matrix.
    pub fn look_at(position: Vec4, target: Vec4, up: Vec4) -> Self {
        let forward = (target - position).normalize();
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);

        Self::new([
            [right.x, right.y, right.z, 0.0],
            [up.x, up.y, up.z, 0.0],
            [forward.x, forward.y, forward.z, 0.0],
            [position.x, position.y, position.z, 1.0],
        ])
    }

    /// Inverts a rigid transform (rotation + translation only).
    ///
    /// The rotation block is transposed and the translation row becomes
    /// `-translation * transposed_rotation`. Matrices containing scale, shear
    /// or projection produce a wrong result; use it on camera matrices only.
    pub fn quick_inverse(&self) -> Self {
        let m = &self.m;
        let mut inv = Self::identity();

        for row in 0..3 {
            for col in 0..3 {
                inv.m[row][col] = m[col][row];
            }
        }
        for col in 0..3 {
            inv.m[3][col] = -(m[3][0] * inv.m[0][col]
                + m[3][1] * inv.m[1][col]
                + m[3][2] * inv.m[2][col]);
        }

        inv
    }

    /// Returns a new matrix with transpose applied.
    pub fn transpose(&self) -> Self {
        let mut t = [[0.0f32; 4]; 4];
        for (row, values) in self.m.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                t[col][row] = *value;
            }
        }
        Self::new(t)
    }

    /// Transforms a row vector: `v * self`.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// With row vectors, `v * (A * B)` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.m[row][0] * rhs.m[0][col]
                    + self.m[row][1] * rhs.m[1][col]
                    + self.m[row][2] * rhs.m[2][col]
                    + self.m[row][3] * rhs.m[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a row vector by a matrix: Vec4 * Mat4.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs.transform(self)
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
