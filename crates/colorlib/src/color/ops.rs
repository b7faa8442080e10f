//! Operators and conversions between storage forms.
//!
//! Binary operators between two colors return the more precise operand form,
//! ranked `PackedColor < Color3 < Color4`. Any pairing with an `AnyColor`
//! returns `Color4`. Only the channel values are part of the contract.

use core::ops::{Add, Div, Mul, Sub};

use super::{AnyColor, Color, Color3, Color4, PackedColor, combine};

macro_rules! impl_color_ops {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {$(
        impl Add<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn add(self, rhs: $rhs) -> $out {
                <$out>::from_channels(combine(self.channels(), rhs.channels(), |x, y| x + y))
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn sub(self, rhs: $rhs) -> $out {
                <$out>::from_channels(combine(self.channels(), rhs.channels(), |x, y| x - y))
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                <$out>::from_channels(combine(self.channels(), rhs.channels(), |x, y| x * y))
            }
        }

        impl Div<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn div(self, rhs: $rhs) -> $out {
                <$out>::from_channels(combine(self.channels(), rhs.channels(), |x, y| x / y))
            }
        }
    )*};
}

impl_color_ops! {
    PackedColor, PackedColor => PackedColor;
    PackedColor, Color3 => Color3;
    PackedColor, Color4 => Color4;
    Color3, PackedColor => Color3;
    Color3, Color3 => Color3;
    Color3, Color4 => Color4;
    Color4, PackedColor => Color4;
    Color4, Color3 => Color4;
    Color4, Color4 => Color4;
    AnyColor, AnyColor => Color4;
    AnyColor, PackedColor => Color4;
    AnyColor, Color3 => Color4;
    AnyColor, Color4 => Color4;
    PackedColor, AnyColor => Color4;
    Color3, AnyColor => Color4;
    Color4, AnyColor => Color4;
}

macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {$(
        impl Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                self.mul_scalar(rhs)
            }
        }

        impl Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f32) -> $ty {
                self.div_scalar(rhs)
            }
        }
    )*};
}

impl_scalar_ops!(PackedColor, Color3, Color4, AnyColor);

// ── conversions ───────────────────────────────────────────────────────────

macro_rules! impl_convert {
    ($($from:ty => $to:ty;)*) => {$(
        impl From<$from> for $to {
            #[inline]
            fn from(c: $from) -> $to {
                <$to>::from_channels(c.channels())
            }
        }
    )*};
}

impl_convert! {
    PackedColor => Color3;
    PackedColor => Color4;
    Color3 => PackedColor;
    Color3 => Color4;
    Color4 => PackedColor;
    Color4 => Color3;
    AnyColor => PackedColor;
    AnyColor => Color3;
    AnyColor => Color4;
}
