//! Edge function-based triangle rasterization.
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Pixel `(x, y)` is sampled at its top-left corner `(x, y)`, which is also the
//! coordinate the screen clipper works in: geometry clipped to
//! `x = width - 1` still covers the last column. A pixel is covered when the
//! sample has the same sign against all three edges, give or take
//! [`EDGE_TOLERANCE`] pixels. Checking the sign of the total signed area lets
//! clockwise and counter-clockwise triangles both fill.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// How far (in pixels) a sample may sit outside an edge and still count.
/// Absorbs the rounding left by clipping on pixel boundaries.
pub const EDGE_TOLERANCE: f32 = 1e-3;

/// Bounding-box triangle fill using edge functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    /// Signed area of the parallelogram spanned by (B - A) and (P - A).
    #[inline]
    fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }

    /// Fills `points` with a single `argb` color. Degenerate triangles draw nothing.
    pub fn fill_triangle(&self, points: [Vec2; 3], buffer: &mut FrameBuffer, argb: u32) {
        let [v0, v1, v2] = points;

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return;
        }

        // Normalize to positive winding; scale each tolerance by its edge length
        // so it is a distance in pixels.
        let orientation = area.signum();
        let tolerance = |a: Vec2, b: Vec2| -EDGE_TOLERANCE * (b.x - a.x).hypot(b.y - a.y);
        let (t0, t1, t2) = (tolerance(v1, v2), tolerance(v2, v0), tolerance(v0, v1));

        // Bounding box, clipped to the buffer.
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32, y as f32);

                let w0 = orientation * Self::edge_function(v1, v2, p);
                let w1 = orientation * Self::edge_function(v2, v0, p);
                let w2 = orientation * Self::edge_function(v0, v1, p);

                if w0 >= t0 && w1 >= t1 && w2 >= t2 {
                    buffer.set_pixel(x, y, argb);
                }
            }
        }
    }
}
