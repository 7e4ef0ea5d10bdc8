//! ARGB bit packing.
//!
//! A packed color is a `u32` holding four 8-bit channels:
//!
//! ```text
//! (alpha << 24) | (red << 16) | (green << 8) | blue
//! ```
//!
//! Channel arguments are `u32` and masked to their low byte on packing, so
//! callers holding wider intermediate values get the same truncation the
//! packed format implies.

/// Packs RGB components into an opaque ARGB color.
///
/// Alpha is set to 255. Each component is masked to its low 8 bits.
///
/// # Example
///
/// ```rust
/// use tonal_color::argb::argb_from_rgb;
///
/// assert_eq!(argb_from_rgb(18, 52, 86), 0xFF123456);
/// ```
#[inline]
pub fn argb_from_rgb(red: u32, green: u32, blue: u32) -> u32 {
    (255 << 24) | ((red & 255) << 16) | ((green & 255) << 8) | (blue & 255)
}

/// Returns the alpha component of an ARGB color.
#[inline]
pub fn alpha_from_argb(argb: u32) -> u32 {
    (argb >> 24) & 255
}

/// Returns the red component of an ARGB color.
#[inline]
pub fn red_from_argb(argb: u32) -> u32 {
    (argb >> 16) & 255
}

/// Returns the green component of an ARGB color.
#[inline]
pub fn green_from_argb(argb: u32) -> u32 {
    (argb >> 8) & 255
}

/// Returns the blue component of an ARGB color.
#[inline]
pub fn blue_from_argb(argb: u32) -> u32 {
    argb & 255
}

/// Returns whether an ARGB color is fully opaque.
#[inline]
pub fn is_opaque(argb: u32) -> bool {
    alpha_from_argb(argb) >= 255
}
