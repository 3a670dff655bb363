//! Lighting types for the renderer.

use crate::colors;
use crate::math::vec4::Vec4;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized direction a lit face's normal should point toward.
    pub direction: Vec4,
    /// Lowest intensity a face can receive, so unlit faces never go black.
    pub min_intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec4::point(0.0, 1.0, -1.0), 0.1)
    }
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized automatically.
    pub fn new(direction: Vec4, min_intensity: f32) -> Self {
        Self {
            direction: direction.normalize(),
            min_intensity,
        }
    }

    /// Lambertian intensity for a unit face normal, floored at `min_intensity`.
    pub fn intensity(&self, normal: Vec4) -> f32 {
        self.direction.dot(normal).max(self.min_intensity)
    }

    /// Flat gray shade for a unit face normal.
    pub fn shade(&self, normal: Vec4) -> u32 {
        colors::gray(self.intensity(normal))
    }
}
