use bytemuck::{Pod, Zeroable};

use super::{Color, FLOAT_EPSILON};

/// RGB color with three `f32` channels.
///
/// Alpha is conceptually `1.0`. It is still carried in a private field so that
/// four-channel operations (`add_rgba`, `mul_scalar`, operators against a
/// `Color4`, ...) keep their full result; read it with [`Color::a`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    a: f32,
}

impl Color3 {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::with_alpha(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color for Color3 {
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
