//! Packed color helpers.
//!
//! Shading produces `0xRRGGBBAA` colors with the alpha byte left empty; the
//! draw stage forces it opaque. The frame buffer stores `0xAARRGGBB` to match
//! the SDL streaming texture format.

pub const BACKGROUND: u32 = 0xFF000000;

/// Packs a [0, 1] intensity into a gray `0xRRGGBB00` color.
pub fn gray(intensity: f32) -> u32 {
    let c = (intensity.clamp(0.0, 1.0) * 255.0) as u32;
    (c << 24) | (c << 16) | (c << 8)
}

/// Sets the alpha byte of a `0xRRGGBBAA` color to fully opaque.
#[inline]
pub fn opaque(rgba: u32) -> u32 {
    rgba | 0x0000_00FF
}

/// Converts `0xRRGGBBAA` to `0xAARRGGBB`.
#[inline]
pub fn rgba_to_argb(rgba: u32) -> u32 {
    rgba.rotate_right(8)
}

/// Splits `0xAARRGGBB` into `[r, g, b, a]` bytes.
#[inline]
pub fn argb_to_bytes(argb: u32) -> [u8; 4] {
    let [a, r, g, b] = argb.to_be_bytes();
    [r, g, b, a]
}
