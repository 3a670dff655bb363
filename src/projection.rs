//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the perspective
//! parameters (FOV, aspect ratio, near/far planes). It generates the
//! projection matrix and the view-space near plane used for clipping.

use crate::clipper::Plane;
use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;

pub const DEFAULT_FOV_DEGREES: f32 = 90.0;
pub const DEFAULT_Z_NEAR: f32 = 0.1;
pub const DEFAULT_Z_FAR: f32 = 1000.0;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    fov_y_degrees: f32,
    /// Aspect ratio (height / width).
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y_degrees` - Vertical field of view in degrees
    /// * `aspect_ratio` - Height divided by width
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// The default 90 degree projection for a `width` x `height` viewport.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::new(
            DEFAULT_FOV_DEGREES,
            viewport_aspect(width, height),
            DEFAULT_Z_NEAR,
            DEFAULT_Z_FAR,
        )
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Returns the aspect ratio (height / width).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio after a window resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect_ratio = viewport_aspect(width, height);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y_degrees, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// View-space plane at `z = z_near` keeping everything in front of it.
    pub fn near_plane(&self) -> Plane {
        Plane::new(Vec4::point(0.0, 0.0, self.z_near), Vec4::point(0.0, 0.0, 1.0))
    }
}

fn viewport_aspect(width: u32, height: u32) -> f32 {
    height as f32 / width.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aspect_is_height_over_width() {
        let proj = Projection::for_viewport(1280, 720);
        assert_relative_eq!(proj.aspect_ratio(), 0.5625);
        assert_relative_eq!(proj.matrix().get(0, 0), 0.5625, epsilon = 1e-6);
        assert_relative_eq!(proj.matrix().get(1, 1), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn resize_only_changes_aspect() {
        let mut proj = Projection::for_viewport(1280, 720);
        proj.set_viewport(400, 400);
        assert_relative_eq!(proj.aspect_ratio(), 1.0);
        assert_relative_eq!(proj.z_near(), DEFAULT_Z_NEAR);
        assert_relative_eq!(proj.z_far(), DEFAULT_Z_FAR);
        assert_relative_eq!(proj.fov_y_degrees(), DEFAULT_FOV_DEGREES);
    }

    #[test]
    fn point_on_near_plane_projects_inside_ndc() {
        let proj = Projection::for_viewport(640, 480);
        let on_axis = Vec4::point(0.0, 0.0, proj.z_near());
        let clip = on_axis * proj.matrix();
        assert!(clip.w > 0.0);

        let ndc = clip.perspective_divide();
        assert!((-1.0..=1.0).contains(&ndc.x));
        assert!((-1.0..=1.0).contains(&ndc.y));
        assert_relative_eq!(ndc.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn near_plane_keeps_points_in_front() {
        let plane = Projection::for_viewport(640, 480).near_plane();
        assert!(plane.signed_distance(Vec4::point(0.0, 0.0, 1.0)) > 0.0);
        assert!(plane.signed_distance(Vec4::point(0.0, 0.0, 0.0)) < 0.0);
    }
}
