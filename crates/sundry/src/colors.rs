//! Byte-channel colors with alpha blending and interpolation.
//!
//! [`Rgba`] is the plain storage type; conversions to and from
//! [`palette::Srgba`] are provided for anything beyond blending and
//! lerping.

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::maths::more::lerp_f32;

/// A color with 8-bit red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// The same color with a different alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// The same color with zero alpha.
    pub const fn transparent(self) -> Self {
        self.with_alpha(0)
    }
}

impl From<Rgba> for Srgba<u8> {
    fn from(color: Rgba) -> Self {
        Srgba::new(color.r, color.g, color.b, color.a)
    }
}

impl From<Srgba<u8>> for Rgba {
    fn from(color: Srgba<u8>) -> Self {
        Rgba::new(color.red, color.green, color.blue, color.alpha)
    }
}

/// Blends two colors with alpha-1-minus-alpha (source over) blending:
/// `above` is drawn on top of `below`.
pub fn alpha_blend(below: Rgba, above: Rgba) -> Rgba {
    let below_alpha = f32::from(below.a) / 255.0;
    let above_alpha = f32::from(above.a) / 255.0;
    let keep = (1.0 - above_alpha).clamp(0.0, 1.0);

    let channel = |bottom: u8, top: u8| {
        let value = above_alpha * f32::from(top) + f32::from(bottom) * below_alpha * keep;
        value.round().clamp(0.0, 255.0) as u8
    };

    let alpha = above_alpha + below_alpha * keep;
    Rgba::new(
        channel(below.r, above.r),
        channel(below.g, above.g),
        channel(below.b, above.b),
        (alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Linearly interpolates between two colors, channel by channel. Unlike
/// the scalar [`lerp`](crate::maths::more::lerp), the amount is clamped to
/// `0..=1`.
pub fn lerp(start: Rgba, end: Rgba, amount: f32) -> Rgba {
    let amount = amount.clamp(0.0, 1.0);
    let channel =
        |s: u8, e: u8| lerp_f32(f32::from(s), f32::from(e), amount).round().clamp(0.0, 255.0) as u8;
    Rgba::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
        channel(start.a, end.a),
    )
}
