//! Triangle clipping.
//!
//! [`clip_against_plane`] cuts a single triangle by a single plane. The
//! pipeline uses it once for the near plane in view space, and through
//! [`clip_to_planes`] for the four viewport edges in screen space.

mod plane;
mod screen;

pub use plane::{clip_against_plane, Clipped, Plane};
pub use screen::{clip_to_planes, screen_planes};
