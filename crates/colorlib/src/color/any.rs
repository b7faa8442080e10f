use super::{Color, Color3, Color4, PackedColor};

/// A color in any of the supported storage forms.
///
/// This is the closed sum over the storage forms. It is what a [`Gradient`]
/// stores, so keyframes keep whatever form the caller supplied.
///
/// Arithmetic on an `AnyColor` produces the `Rgba` variant, since that form
/// holds any result without loss.
///
/// [`Gradient`]: crate::Gradient
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnyColor {
    Packed(PackedColor),
    Rgb(Color3),
    Rgba(Color4),
}

impl AnyColor {
    /// Widens to `Color4`. Lossless for every variant.
    #[inline]
    pub fn to_color4(self) -> Color4 {
        match self {
            AnyColor::Rgba(c) => c,
            other => Color4::from_channels(other.channels()),
        }
    }
}

impl Default for AnyColor {
    fn default() -> Self {
        AnyColor::Rgba(Color4::TRANSPARENT)
    }
}

impl Color for AnyColor {
    #[inline]
    fn r(&self) -> f32 {
        match self {
            AnyColor::Packed(c) => c.r(),
            AnyColor::Rgb(c) => c.r,
            AnyColor::Rgba(c) => c.r,
        }
    }

    #[inline]
    fn g(&self) -> f32 {
        match self {
            AnyColor::Packed(c) => c.g(),
            AnyColor::Rgb(c) => c.g,
            AnyColor::Rgba(c) => c.g,
        }
    }

    #[inline]
    fn b(&self) -> f32 {
        match self {
            AnyColor::Packed(c) => c.b(),
            AnyColor::Rgb(c) => c.b,
            AnyColor::Rgba(c) => c.b,
        }
    }

    #[inline]
    fn a(&self) -> f32 {
        match self {
            AnyColor::Packed(c) => c.a(),
            AnyColor::Rgb(c) => c.a(),
            AnyColor::Rgba(c) => c.a,
        }
    }

    #[inline]
    fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        AnyColor::Rgba(Color4::with_alpha(r, g, b, a))
    }

    #[inline]
    fn epsilon(&self) -> f32 {
        match self {
            AnyColor::Packed(c) => c.epsilon(),
            AnyColor::Rgb(c) => c.epsilon(),
            AnyColor::Rgba(c) => c.epsilon(),
        }
    }
}

impl From<PackedColor> for AnyColor {
    #[inline]
    fn from(c: PackedColor) -> Self {
        AnyColor::Packed(c)
    }
}

impl From<Color3> for AnyColor {
    #[inline]
    fn from(c: Color3) -> Self {
        AnyColor::Rgb(c)
    }
}

impl From<Color4> for AnyColor {
    #[inline]
    fn from(c: Color4) -> Self {
        AnyColor::Rgba(c)
    }
}

/// Packed `0xRRGGBBAA` literal.
impl From<u32> for AnyColor {
    #[inline]
    fn from(rgba: u32) -> Self {
        AnyColor::Packed(PackedColor::from_u32(rgba))
    }
}
