//! Color values shared by every storage form.
//!
//! Scope:
//! - `PackedColor`: one `u32` laid out as `0xRRGGBBAA` (8 bits per channel)
//! - `Color3` / `Color4`: `f32` channels, never clamped
//! - `AnyColor`: closed sum over the three storage forms
//!
//! Every operation reads the logical `(r, g, b, a)` channels through the
//! [`Color`] accessors, so arithmetic and equality are defined for any pairing
//! of storage forms. Only construction and the accessors are variant-specific.

mod any;
mod error;
mod ops;
mod packed;
mod rgb;
mod rgba;

pub use any::AnyColor;
pub use error::ParseColorError;
pub use packed::PackedColor;
pub use rgb::Color3;
pub use rgba::Color4;

/// Tolerance for comparisons between two float-backed colors.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Tolerance for any comparison involving a packed color.
///
/// A step is `1/255`. A single round trip is off by half a step, but packed
/// arithmetic quantizes both operands and the result, so results drift by up
/// to two steps. This covers both with some slack.
pub const PACKED_EPSILON: f32 = 0.01;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::PackedColor {}
    impl Sealed for super::Color3 {}
    impl Sealed for super::Color4 {}
    impl Sealed for super::AnyColor {}
}

/// Capability contract implemented by every color storage form.
///
/// The set of implementers is closed: [`PackedColor`], [`Color3`], [`Color4`]
/// and [`AnyColor`].
///
/// Scalar arithmetic keeps the receiver's storage form. Arithmetic between two
/// colors is provided by the `std::ops` operators (see the crate docs for the
/// result type of each pairing).
pub trait Color: Copy + sealed::Sealed {
    fn r(&self) -> f32;
    fn g(&self) -> f32;
    fn b(&self) -> f32;
    fn a(&self) -> f32;

    /// Builds this storage form from logical channel values.
    ///
    /// Packed colors clamp and quantize here; float colors store as given.
    fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self;

    /// Comparison tolerance of this value's storage form.
    fn epsilon(&self) -> f32;

    #[inline]
    fn channels(&self) -> [f32; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    #[inline]
    fn from_channels(channels: [f32; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self::from_rgba(r, g, b, a)
    }

    // ── four scalars ──────────────────────────────────────────────────────

    #[inline]
    fn add_rgba(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(combine(self.channels(), [r, g, b, a], |x, y| x + y))
    }

    #[inline]
    fn sub_rgba(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(combine(self.channels(), [r, g, b, a], |x, y| x - y))
    }

    #[inline]
    fn mul_rgba(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(combine(self.channels(), [r, g, b, a], |x, y| x * y))
    }

    #[inline]
    fn div_rgba(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(combine(self.channels(), [r, g, b, a], |x, y| x / y))
    }

    // ── three scalars (alpha unchanged) ───────────────────────────────────

    #[inline]
    fn add_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.add_rgba(r, g, b, 0.0)
    }

    #[inline]
    fn sub_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.sub_rgba(r, g, b, 0.0)
    }

    #[inline]
    fn mul_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.mul_rgba(r, g, b, 1.0)
    }

    #[inline]
    fn div_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.div_rgba(r, g, b, 1.0)
    }

    // ── single scalar (all four channels) ─────────────────────────────────

    #[inline]
    fn mul_scalar(self, s: f32) -> Self {
        self.mul_rgba(s, s, s, s)
    }

    /// Divides every channel, alpha included, by `s`.
    ///
    /// Division by zero follows IEEE-754 and yields infinities or NaN.
    #[inline]
    fn div_scalar(self, s: f32) -> Self {
        self.div_rgba(s, s, s, s)
    }

    // ── equality ──────────────────────────────────────────────────────────

    /// Approximate equality against a color of any storage form.
    ///
    /// Uses the looser of the two operands' tolerances, so any comparison
    /// touching a packed color absorbs its quantization error.
    #[inline]
    fn approx_eq<C: Color>(&self, other: &C) -> bool {
        self.approx_eq_eps(other, self.epsilon().max(other.epsilon()))
    }

    /// Approximate equality with an explicit tolerance.
    #[inline]
    fn approx_eq_eps<C: Color>(&self, other: &C, eps: f32) -> bool {
        within(self.channels(), other.channels(), eps)
    }

    /// Compares against raw channels; the missing alpha is taken as `1.0`.
    #[inline]
    fn approx_eq_rgb(&self, r: f32, g: f32, b: f32) -> bool {
        self.approx_eq_rgba(r, g, b, 1.0)
    }

    #[inline]
    fn approx_eq_rgba(&self, r: f32, g: f32, b: f32, a: f32) -> bool {
        within(self.channels(), [r, g, b, a], self.epsilon())
    }

    /// Decodes `rgba` as `0xRRGGBBAA` and compares with the packed tolerance.
    #[inline]
    fn approx_eq_packed(&self, rgba: u32) -> bool {
        self.approx_eq(&PackedColor::from_u32(rgba))
    }

    // ── helpers ───────────────────────────────────────────────────────────

    /// Channel-wise linear interpolation towards `other`, alpha included.
    ///
    /// `t` is not clamped; values outside [0, 1] extrapolate.
    #[inline]
    fn lerp<C: Color>(self, other: C, t: f32) -> Self {
        Self::from_channels(combine(self.channels(), other.channels(), |x, y| {
            x + (y - x) * t
        }))
    }

    /// Returns `1 - channel` for r, g, b. Alpha is kept.
    #[inline]
    fn inverted(self) -> Self {
        Self::from_rgba(1.0 - self.r(), 1.0 - self.g(), 1.0 - self.b(), self.a())
    }

    /// Clamps all channels to [0, 1].
    #[inline]
    fn clamped(self) -> Self {
        Self::from_channels(self.channels().map(|c| c.clamp(0.0, 1.0)))
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    /// Quantizes this color into the packed `0xRRGGBBAA` form.
    #[inline]
    fn to_packed(&self) -> PackedColor {
        PackedColor::from_channels(self.channels())
    }
}

/// Applies `op` to each pair of corresponding channels.
#[inline]
pub(crate) fn combine(lhs: [f32; 4], rhs: [f32; 4], op: impl Fn(f32, f32) -> f32) -> [f32; 4] {
    [
        op(lhs[0], rhs[0]),
        op(lhs[1], rhs[1]),
        op(lhs[2], rhs[2]),
        op(lhs[3], rhs[3]),
    ]
}

/// True when every channel differs by strictly less than `eps`.
///
/// NaN channels never compare equal.
#[inline]
fn within(lhs: [f32; 4], rhs: [f32; 4], eps: f32) -> bool {
    lhs.iter().zip(rhs.iter()).all(|(x, y)| (x - y).abs() < eps)
}
