//! A minimal flat-shaded software 3D renderer.
//!
//! A mesh is loaded once, then every frame its triangles are transformed,
//! culled, lit by a single directional light, clipped against the near plane,
//! projected, depth sorted, clipped to the screen and rasterized on the CPU.
//! SDL2 is used only for window management and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatshade::prelude::*;
//!
//! let scene = SceneState::new(Mesh::cube(), 800, 600);
//! let pipeline = Pipeline::new(PipelineSettings::new(800, 600));
//! let mut frame = FrameBuffer::new(800, 600);
//! pipeline.draw(&scene, &mut frame);
//! frame.save_png("cube.png")?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod light;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod triangle;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod clipper;
pub(crate) mod mesh;
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use mesh::{LoadError, Mesh};
pub use pipeline::{Pipeline, PipelineSettings};
pub use render::{DrawSurface, FrameBuffer};
pub use scene::SceneState;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatshade::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, CameraController};

    // Scene & pipeline
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{LoadError, Mesh};
    pub use crate::pipeline::{Pipeline, PipelineSettings};
    pub use crate::projection::Projection;
    pub use crate::scene::SceneState;
    pub use crate::triangle::Triangle;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{DrawSurface, FrameBuffer};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::{clip_against_plane, clip_to_planes, screen_planes, Clipped, Plane};
    pub use crate::render::EdgeFunctionRasterizer;
}
