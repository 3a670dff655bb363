//! Drawing finished screen-space triangles.
//!
//! The pipeline only talks to a [`DrawSurface`]. [`FrameBuffer`] is the CPU
//! implementation: it rasterizes into an ARGB8888 pixel buffer that the window
//! uploads each frame, or that can be written to a PNG.

mod framebuffer;
mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::EdgeFunctionRasterizer;

use crate::math::vec2::Vec2;

/// Destination for rasterized triangles.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resets every pixel to the background color.
    fn clear(&mut self);

    /// Fills a triangle given in pixel coordinates.
    ///
    /// # Arguments
    /// * `points` - The three corners, any winding
    /// * `rgba` - Packed `0xRRGGBBAA` fill color
    fn fill_triangle(&mut self, points: [Vec2; 3], rgba: u32);
}
