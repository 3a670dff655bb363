//! Owned CPU color buffer.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::rasterizer::EdgeFunctionRasterizer;
use super::DrawSurface;
use crate::colors;
use crate::math::vec2::Vec2;

/// A `width * height` grid of `0xAARRGGBB` pixels, row-major from the top left.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Set a pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, argb: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = self.index(x as u32, y as u32);
            self.color_buffer[index] = argb;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The pixels as bytes, laid out for an ARGB8888 texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and stricter alignment than u8; the
        // slice covers exactly the buffer's bytes and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Writes the current frame to an image file (format from the extension).
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let image = RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::argb_to_bytes(self.color_buffer[self.index(x, y)]))
        });
        image.save(path)
    }
}

impl DrawSurface for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.color_buffer.fill(colors::BACKGROUND);
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], rgba: u32) {
        EdgeFunctionRasterizer.fill_triangle(points, self, colors::rgba_to_argb(rgba));
    }
}
