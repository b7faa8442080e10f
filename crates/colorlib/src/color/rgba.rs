use bytemuck::{Pod, Zeroable};

use super::{Color, FLOAT_EPSILON};

/// RGBA color with four independent `f32` channels.
///
/// Invariant:
/// - channels are stored exactly as given; nothing is clamped.
///
/// Layout is `#[repr(C)]` and `Pod`, so slices of `Color4` can be uploaded to
/// GPU buffers with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::with_alpha(0.0, 0.0, 0.0, 0.0);

    /// Opaque color; alpha is `1.0`.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from byte channels (`0`–`255`), each divided by 255.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::with_alpha(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl Color for Color4 {
    #[inline]
    fn r(&self) -> f32 {
        self.r
    }

    #[inline]
    fn g(&self) -> f32 {
        self.g
    }

    #[inline]
    fn b(&self) -> f32 {
        self.b
    }

    #[inline]
    fn a(&self) -> f32 {
        self.a
    }

    #[inline]
    fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::with_alpha(r, g, b, a)
    }

    #[inline]
    fn epsilon(&self) -> f32 {
        FLOAT_EPSILON
    }
}
