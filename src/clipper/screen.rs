//! Clipping screen-space triangles to the viewport edges.

use super::plane::{clip_against_plane, Plane};
use crate::math::vec4::Vec4;
use crate::triangle::Triangle;

/// The four viewport edges in pixel space, normals pointing on-screen.
///
/// Order: top, bottom, left, right.
pub fn screen_planes(width: u32, height: u32) -> [Plane; 4] {
    let right = width as f32 - 1.0;
    let bottom = height as f32 - 1.0;
    [
        Plane::new(Vec4::point(0.0, 0.0, 0.0), Vec4::point(0.0, 1.0, 0.0)),
        Plane::new(Vec4::point(0.0, bottom, 0.0), Vec4::point(0.0, -1.0, 0.0)),
        Plane::new(Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 0.0, 0.0)),
        Plane::new(Vec4::point(right, 0.0, 0.0), Vec4::point(-1.0, 0.0, 0.0)),
    ]
}

/// Clips one triangle against every plane in turn.
///
/// Each pass clips everything in the current worklist and collects the
/// results into the next one; the buffers are swapped between passes. Output
/// triangles are appended to `out`.
pub fn clip_to_planes(triangle: Triangle, planes: &[Plane], out: &mut Vec<Triangle>) {
    let mut current = vec![triangle];
    let mut next = Vec::with_capacity(4);

    for plane in planes {
        next.clear();
        for t in &current {
            next.extend(clip_against_plane(plane, t));
        }
        std::mem::swap(&mut current, &mut next);
        if current.is_empty() {
            return;
        }
    }

    out.append(&mut current);
}
