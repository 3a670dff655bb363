//! Per-frame scene state.
//!
//! Everything that changes between frames lives in one [`SceneState`] value
//! that the frame loop owns and passes to [`crate::pipeline::Pipeline`]
//! explicitly.

use std::time::Duration;

use crate::camera::{Camera, CameraController};
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::window::InputState;

/// Object spin rate in radians per second.
pub const SPIN_RATE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct SceneState {
    mesh: Mesh,
    pub camera: Camera,
    pub controller: CameraController,
    projection: Projection,
    /// Object spin angle in radians.
    pub theta: f32,
    pub spin: bool,
}

impl SceneState {
    pub fn new(mesh: Mesh, width: u32, height: u32) -> Self {
        Self {
            mesh,
            camera: Camera::default(),
            controller: CameraController::default(),
            projection: Projection::for_viewport(width, height),
            theta: 0.0,
            spin: false,
        }
    }

    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Applies held keys to the camera and advances the spin angle.
    pub fn update(&mut self, input: &InputState, frame_time: Duration) {
        let frame_ms = frame_time.as_secs_f32() * 1000.0;
        self.controller.update(&mut self.camera, input, frame_ms);

        if self.spin {
            self.theta += SPIN_RATE * frame_time.as_secs_f32();
        }
    }

    /// Rebuilds the projection for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_viewport(width, height);
    }
}
