//! Yaw-only first-person camera.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! The camera keeps a position and a yaw angle. The look direction is derived
//! from the yaw once per update and the view matrix from position + look
//! direction, so pitch and roll are always zero.

use std::f32::consts::FRAC_PI_4;

use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;
use crate::window::InputState;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec4,
    yaw: f32, // Rotation around Y-axis (radians)
    look_dir: Vec4,
}

impl Default for Camera {
    /// Up and to the left of the origin, turned toward an object at z=5.
    fn default() -> Self {
        Self::new(Vec4::point(-5.0, 1.0, 0.0), -FRAC_PI_4)
    }
}

impl Camera {
    pub fn new(position: Vec4, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            look_dir: Self::look_direction_for(yaw),
        }
    }

    /// Unit forward vector for a yaw angle: +Z rotated about Y.
    fn look_direction_for(yaw: f32) -> Vec4 {
        Vec4::FORWARD * Mat4::rotation_y(yaw)
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves the camera along its look direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.look_dir * distance;
    }

    /// Moves the camera along world Y.
    pub fn move_up(&mut self, distance: f32) {
        self.position.y += distance;
    }

    /// Turns the camera about world Y and refreshes the look direction.
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw += delta;
        self.look_dir = Self::look_direction_for(self.yaw);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec4 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn look_direction(&self) -> Vec4 {
        self.look_dir
    }

    /// Camera-to-world transform looking along the current direction.
    pub fn camera_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.look_dir, Vec4::UP)
    }

    /// World-to-view transform (rigid inverse of [`Camera::camera_matrix`]).
    pub fn view_matrix(&self) -> Mat4 {
        self.camera_matrix().quick_inverse()
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// Turns held keys into camera motion, scaled by frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    /// Units moved per millisecond of frame time.
    pub move_speed: f32,
    /// Upper bound on movement per frame.
    pub max_move: f32,
    /// Radians turned per millisecond of frame time.
    pub turn_speed: f32,
    /// Upper bound on rotation per frame.
    pub max_turn: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            move_speed: 0.010,
            max_move: 1.0,
            turn_speed: 0.0007,
            max_turn: 0.7,
        }
    }
}

impl CameraController {
    /// Updates the camera based on input state.
    ///
    /// # Input Mapping
    /// - W/S: Move forward/backward
    /// - A/D: Turn left/right
    /// - Left Shift/Left Ctrl: Move up/down
    pub fn update(&self, camera: &mut Camera, input: &InputState, frame_time_ms: f32) {
        let move_amount = (self.move_speed * frame_time_ms).min(self.max_move);
        let turn_amount = (self.turn_speed * frame_time_ms).min(self.max_turn);

        if input.forward {
            camera.move_forward(move_amount);
        }
        if input.back {
            camera.move_forward(-move_amount);
        }
        if input.turn_left {
            camera.rotate_yaw(-turn_amount);
        }
        if input.turn_right {
            camera.rotate_yaw(turn_amount);
        }
        if input.ascend {
            camera.move_up(move_amount);
        }
        if input.descend {
            camera.move_up(-move_amount);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn zero_yaw_looks_down_positive_z() {
        let camera = Camera::new(Vec4::ZERO, 0.0);
        assert_abs_diff_eq!(camera.look_direction(), Vec4::FORWARD, epsilon = 1e-6);
    }

    #[test]
    fn default_camera_faces_the_object() {
        let camera = Camera::default();
        let to_object = (Vec4::point(0.0, 1.0, 5.0) - camera.position()).normalize();
        assert_abs_diff_eq!(camera.look_direction(), to_object, epsilon = 1e-5);
    }

    #[test]
    fn yaw_turns_the_look_direction() {
        let mut camera = Camera::new(Vec4::ZERO, 0.0);
        camera.rotate_yaw(FRAC_PI_2);
        assert_abs_diff_eq!(camera.look_direction(), Vec4::point(-1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(camera.yaw(), FRAC_PI_2);
    }

    #[test]
    fn view_matrix_puts_camera_at_origin() {
        let camera = Camera::default();
        let origin = camera.position() * camera.view_matrix();
        assert_abs_diff_eq!(origin, Vec4::ZERO, epsilon = 1e-5);

        let ahead = (camera.position() + camera.look_direction() * 3.0) * camera.view_matrix();
        assert_abs_diff_eq!(ahead, Vec4::point(0.0, 0.0, 3.0), epsilon = 1e-5);
    }

    #[test]
    fn controller_scales_by_frame_time() {
        let controller = CameraController::default();
        let mut camera = Camera::new(Vec4::ZERO, 0.0);
        let input = InputState {
            forward: true,
            ascend: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 20.0);

        assert_relative_eq!(camera.position().z, 0.2, epsilon = 1e-6);
        assert_relative_eq!(camera.position().y, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn controller_clamps_long_frames() {
        let controller = CameraController::default();
        let mut camera = Camera::new(Vec4::ZERO, 0.0);
        let input = InputState {
            back: true,
            turn_right: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 5000.0);

        assert_relative_eq!(camera.position().z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.yaw(), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn opposing_keys_cancel() {
        let controller = CameraController::default();
        let mut camera = Camera::default();
        let start = camera.clone();
        let input = InputState {
            forward: true,
            back: true,
            ascend: true,
            descend: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 16.0);

        assert_abs_diff_eq!(camera.position(), start.position(), epsilon = 1e-5);
    }
}
