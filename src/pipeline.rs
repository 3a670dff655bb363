//! The per-frame geometry pipeline.
//!
//! Every mesh triangle goes through the same fixed sequence of stages:
//!
//! ```text
//! world transform -> shade / cull -> view transform -> near clip
//!     -> project + divide + screen map -> depth sort -> screen clip -> draw
//! ```
//!
//! Each stage builds new triangles from the previous stage's output. The
//! stages that carry real math are free functions so they can be tested on
//! their own; [`Pipeline`] only sequences them.

use crate::clipper::{clip_against_plane, clip_to_planes, screen_planes};
use crate::colors;
use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::render::DrawSurface;
use crate::scene::SceneState;
use crate::triangle::Triangle;

/// How far in front of the world origin the object is placed.
pub const OBJECT_DISTANCE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    /// Viewport size in pixels.
    pub width: u32,
    pub height: u32,
    pub light: DirectionalLight,
    /// Drop triangles facing away from the camera before shading.
    pub cull_back_faces: bool,
    pub object_distance: f32,
}

impl PipelineSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            light: DirectionalLight::default(),
            cull_back_faces: true,
            object_distance: OBJECT_DISTANCE,
        }
    }
}

pub struct Pipeline {
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.settings.width = width;
        self.settings.height = height;
    }

    /// Runs every stage up to (not including) drawing, for the configured
    /// viewport.
    ///
    /// Returns the on-screen triangles in draw order, farthest first, with
    /// pixel coordinates in x/y and normalized depth in z.
    pub fn render(&self, scene: &SceneState) -> Vec<Triangle> {
        self.render_viewport(scene, self.settings.width, self.settings.height)
    }

    /// Like [`Pipeline::render`], mapping and clipping to a `width` x `height`
    /// viewport instead of the configured one.
    pub fn render_viewport(&self, scene: &SceneState, width: u32, height: u32) -> Vec<Triangle> {
        let world = world_matrix(scene.theta, self.settings.object_distance);
        let view = scene.camera.view_matrix();
        let camera_position = scene.camera.position();
        let projection = scene.projection().matrix();
        let near_plane = scene.projection().near_plane();

        let mut projected = Vec::with_capacity(scene.mesh().len());
        for triangle in scene.mesh().triangles() {
            // Model Space --> World Space
            let transformed = triangle.map(|p| p * world);

            let Some(lit) = self.shade(&transformed, camera_position) else {
                continue;
            };

            // World Space --> View Space
            let viewed = lit.map(|p| p * view);

            for clipped in clip_against_plane(&near_plane, &viewed) {
                projected.push(project_to_screen(
                    &clipped,
                    &projection,
                    width as f32,
                    height as f32,
                ));
            }
        }

        sort_by_depth(&mut projected);

        let planes = screen_planes(width, height);
        let mut visible = Vec::with_capacity(projected.len());
        for triangle in projected {
            clip_to_planes(triangle, &planes, &mut visible);
        }

        log::trace!(
            "{} mesh triangles produced {} screen triangles",
            scene.mesh().len(),
            visible.len()
        );
        visible
    }

    /// Clears `surface` and draws the frame onto it, sized to the surface.
    /// Returns the number of triangles drawn.
    pub fn draw(&self, scene: &SceneState, surface: &mut impl DrawSurface) -> usize {
        surface.clear();

        let triangles = self.render_viewport(scene, surface.width(), surface.height());
        for triangle in &triangles {
            surface.fill_triangle(triangle.points.map(Vec2::from), colors::opaque(triangle.color));
        }
        triangles.len()
    }

    /// Culls and flat-shades one world-space triangle.
    ///
    /// Returns `None` for back faces (when culling is on) and for degenerate
    /// triangles whose normal can't be normalized.
    pub fn shade(&self, triangle: &Triangle, camera_position: Vec4) -> Option<Triangle> {
        let Some(normal) = triangle.face_normal().try_normalize() else {
            log::trace!("skipping degenerate triangle {:?}", triangle.points);
            return None;
        };

        // Front-facing when the normal points back toward the camera.
        let camera_ray = triangle.points[0] - camera_position;
        if self.settings.cull_back_faces && normal.dot(camera_ray) >= 0.0 {
            return None;
        }

        Some(Triangle::new(
            triangle.points,
            self.settings.light.shade(normal),
        ))
    }
}

/// Spins the object about Z at half the rate, then about X, then pushes it
/// `distance` units down +Z.
pub fn world_matrix(theta: f32, distance: f32) -> Mat4 {
    Mat4::rotation_z(theta * 0.5) * Mat4::rotation_x(theta) * Mat4::translation(0.0, 0.0, distance)
}

/// Projects a view-space triangle and maps it to pixel coordinates.
///
/// After the perspective divide x and y are flipped, shifted from [-1, 1]
/// into [0, 2] and scaled by half the viewport size. z keeps the normalized
/// depth for sorting.
pub fn project_to_screen(triangle: &Triangle, projection: &Mat4, width: f32, height: f32) -> Triangle {
    triangle.map(|p| {
        let ndc = (p * *projection).perspective_divide();
        Vec4::point(
            (1.0 - ndc.x) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
            ndc.z,
        )
    })
}

/// Painter's algorithm order: descending average depth, farthest first.
/// Stable, so equal depths keep their mesh order.
pub fn sort_by_depth(triangles: &mut [Triangle]) {
    triangles.sort_by(|a, b| b.avg_depth().total_cmp(&a.avg_depth()));
}
