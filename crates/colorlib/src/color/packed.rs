use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::{Color, PACKED_EPSILON, ParseColorError};

/// Color packed into a single `u32` as `0xRRGGBBAA`.
///
/// Each channel is one byte. Encoding clamps to [0, 1] and rounds to the
/// nearest of 256 levels; decoding divides the byte by 255. This is the only
/// storage form that clamps.
///
/// The integer layout doubles as an interchange format: `0x5F9EA0FF` is
/// R = 0x5F, G = 0x9E, B = 0xA0, A = 0xFF.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: Self = Self(0x0000_00FF);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    #[inline]
    pub const fn from_u32(rgba: u32) -> Self {
        Self(rgba)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Returns `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Opaque color from float channels; alpha is `0xFF`.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_alpha(r, g, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_bytes(
            encode_channel(r),
            encode_channel(g),
            encode_channel(b),
            encode_channel(a),
        )
    }
}

/// `round(clamp(v, 0, 1) * 255)`.
///
/// NaN encodes as 0 (saturating float-to-int cast).
#[inline]
pub(crate) fn encode_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
pub(crate) fn decode_channel(byte: u8) -> f32 {
    byte as f32 / 255.0
}

impl Color for PackedColor {
    #[inline]
    fn r(&self) -> f32 {
        decode_channel(self.to_bytes()[0])
    }

    #[inline]
    fn g(&self) -> f32 {
        decode_channel(self.to_bytes()[1])
    }

    #[inline]
    fn b(&self) -> f32 {
        decode_channel(self.to_bytes()[2])
    }

    #[inline]
    fn a(&self) -> f32 {
        decode_channel(self.to_bytes()[3])
    }

    #[inline]
    fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::with_alpha(r, g, b, a)
    }

    #[inline]
    fn epsilon(&self) -> f32 {
        PACKED_EPSILON
    }
}

impl From<u32> for PackedColor {
    #[inline]
    fn from(rgba: u32) -> Self {
        Self(rgba)
    }
}

impl From<PackedColor> for u32 {
    #[inline]
    fn from(c: PackedColor) -> Self {
        c.0
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedColor({:#010x})", self.0)
    }
}

/// Formats as `#rrggbbaa`.
impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
///
/// Six-digit literals are opaque.
impl FromStr for PackedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        // All characters are ASCII hex digits past this point, so byte length
        // equals digit count and the radix parse cannot fail.
        let rgba = match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(|rgb| (rgb << 8) | 0xFF),
            8 => u32::from_str_radix(hex, 16),
            n => return Err(ParseColorError::InvalidLength(n)),
        };
        rgba.map(Self).map_err(|_| ParseColorError::InvalidLength(hex.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color4;
    use approx::assert_abs_diff_eq;

    /// Every comparison here has a packed operand, so `approx_eq` picks
    /// `PACKED_EPSILON`.
    fn assert_close<A: Color, B: Color>(expected: A, actual: B) {
        assert!(
            expected.approx_eq(&actual),
            "expected {:?}, got {:?}",
            expected.channels(),
            actual.channels()
        );
    }

    fn p(r: f32, g: f32, b: f32, a: f32) -> PackedColor {
        PackedColor::with_alpha(r, g, b, a)
    }

    // ── encoding ──────────────────────────────────────────────────────────

    #[test]
    fn layout_is_rrggbbaa() {
        let c = PackedColor::from_u32(0x5F9EA0FF);
        assert_eq!(c.to_bytes(), [0x5F, 0x9E, 0xA0, 0xFF]);
        assert_eq!(PackedColor::from_bytes(0x5F, 0x9E, 0xA0, 0xFF), c);
    }

    #[test]
    fn literal_decodes_to_expected_channels() {
        let c = PackedColor::from_u32(0x5F9EA0FF);
        assert_close(Color4::with_alpha(0.372549, 0.619608, 0.627451, 1.0), c);
    }

    #[test]
    fn new_defaults_alpha_to_ff() {
        assert_eq!(PackedColor::new(1.0, 0.0, 0.0).to_u32(), 0xFF0000FF);
    }

    #[test]
    fn encode_clamps_out_of_range() {
        assert_eq!(p(1.5, -0.2, 0.5, 1.0).to_u32(), 0xFF0080FF);
    }

    #[test]
    fn encode_nan_is_zero() {
        assert_eq!(encode_channel(f32::NAN), 0);
    }

    #[test]
    fn round_trip_error_is_within_half_a_step() {
        for i in 0..=1000 {
            let v = i as f32 / 1000.0;
            let back = decode_channel(encode_channel(v));
            assert!((back - v).abs() <= 0.5 / 255.0 + 1e-6, "v = {v}, back = {back}");
        }
    }

    #[test]
    fn byte_round_trip_is_exact() {
        for byte in 0..=255u8 {
            assert_eq!(encode_channel(decode_channel(byte)), byte);
        }
    }

    #[test]
    fn decoded_channels() {
        let c = PackedColor::from_u32(0xFF00_3300);
        assert_abs_diff_eq!(c.r(), 1.0);
        assert_abs_diff_eq!(c.g(), 0.0);
        assert_abs_diff_eq!(c.b(), 0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(c.a(), 0.0);
    }

    #[test]
    fn u32_conversions() {
        let c: PackedColor = 0x11223344.into();
        let raw: u32 = c.into();
        assert_eq!(raw, 0x11223344);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_four_floats() {
        let c = p(0.3, 0.4, 0.5, 0.6);
        assert_close(p(0.4, 0.6, 0.8, 1.0), c.add_rgba(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn add_three_floats() {
        let c = p(0.3, 0.4, 0.5, 0.8);
        assert_close(p(0.4, 0.6, 0.8, 0.8), c.add_rgb(0.1, 0.2, 0.3));
    }

    #[test]
    fn sub_four_floats() {
        let c = p(0.4, 0.6, 0.8, 1.0);
        assert_close(p(0.3, 0.4, 0.5, 0.6), c.sub_rgba(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn sub_three_floats() {
        let c = p(0.4, 0.6, 0.8, 1.0);
        assert_close(p(0.3, 0.4, 0.5, 1.0), c.sub_rgb(0.1, 0.2, 0.3));
    }

    #[test]
    fn mul_four_floats() {
        let c = p(0.2, 0.3, 0.4, 0.5);
        assert_close(p(0.4, 0.9, 0.6, 1.0), c.mul_rgba(2.0, 3.0, 1.5, 2.0));
    }

    #[test]
    fn mul_three_floats() {
        let c = p(0.2, 0.3, 0.4, 1.0);
        assert_close(PackedColor::new(0.4, 0.9, 0.6), c.mul_rgb(2.0, 3.0, 1.5));
    }

    #[test]
    fn mul_scalar() {
        let c = p(0.2, 0.4, 0.6, 0.5);
        assert_close(p(0.3, 0.6, 0.9, 0.75), c.mul_scalar(1.5));
    }

    #[test]
    fn div_four_floats() {
        let c = p(1.0, 0.8, 0.6, 1.0);
        assert_close(p(0.5, 0.2, 0.2, 0.2), c.div_rgba(2.0, 4.0, 3.0, 5.0));
    }

    #[test]
    fn div_three_floats() {
        let c = p(1.0, 0.8, 0.6, 1.0);
        assert_close(p(0.5, 0.2, 0.2, 1.0), c.div_rgb(2.0, 4.0, 3.0));
    }

    #[test]
    fn div_scalar() {
        let c = p(1.0, 0.8, 0.6, 0.4);
        assert_close(p(0.5, 0.4, 0.3, 0.2), c.div_scalar(2.0));
    }

    #[test]
    fn div_by_zero_saturates() {
        let c = p(0.5, 0.0, 0.5, 1.0).div_scalar(0.0);
        // 0.5 / 0 = inf -> 255, 0 / 0 = NaN -> 0.
        assert_eq!(c.to_bytes(), [255, 0, 255, 255]);
    }

    #[test]
    fn results_are_clamped() {
        let c = p(0.8, 0.2, 0.5, 1.0).add_rgb(0.5, -0.5, 0.0);
        assert_eq!(c.to_bytes()[0], 255);
        assert_eq!(c.to_bytes()[1], 0);
    }

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn approx_eq_packed_int() {
        assert!(PackedColor::from_u32(0x5f9ea0ff).approx_eq_packed(0x5f9ea0ff));
        assert!(PackedColor::from_u32(0x5f9ea0ff).approx_eq_packed(0x5f9ea2ff));
        assert!(!PackedColor::from_u32(0x5f9ea0ff).approx_eq_packed(0x5f9ea4ff));
    }

    #[test]
    fn arithmetic_results_match_packed_literals() {
        let c1 = p(0.1, 0.2, 0.1, 0.4);
        let c2 = p(0.2, 0.2, 0.25, 0.5);
        assert!((c1 / c2).approx_eq_packed(0x80FF66CC));
        assert!((c1 * c2).approx_eq_packed(0x050A0733));
        assert!((c1 + c2).approx_eq(&p(0.3, 0.4, 0.35, 0.9)));
        assert!((c2 - c1).approx_eq(&p(0.1, 0.0, 0.15, 0.1)));
    }

    #[test]
    fn approx_eq_absorbs_quantization() {
        let c = PackedColor::new(0.3, 0.5, 0.7);
        assert!(c.approx_eq_rgb(0.3, 0.5, 0.7));
    }

    // ── formatting / parsing ──────────────────────────────────────────────

    #[test]
    fn display_is_hex() {
        assert_eq!(PackedColor::from_u32(0x5f9ea0ff).to_string(), "#5f9ea0ff");
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", PackedColor::from_u32(0xff)), "PackedColor(0x000000ff)");
    }

    #[test]
    fn parse_eight_digits() {
        assert_eq!("#5f9ea0ff".parse::<PackedColor>(), Ok(PackedColor::from_u32(0x5f9ea0ff)));
    }

    #[test]
    fn parse_six_digits_is_opaque() {
        assert_eq!("5F9EA0".parse::<PackedColor>(), Ok(PackedColor::from_u32(0x5f9ea0ff)));
    }

    #[test]
    fn parse_display_round_trip() {
        let c = PackedColor::from_u32(0x01020304);
        assert_eq!(c.to_string().parse::<PackedColor>(), Ok(c));
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert_eq!("#12345".parse::<PackedColor>(), Err(ParseColorError::InvalidLength(5)));
        assert_eq!("".parse::<PackedColor>(), Err(ParseColorError::InvalidLength(0)));
    }

    #[test]
    fn parse_rejects_bad_digit() {
        assert_eq!("#12345g".parse::<PackedColor>(), Err(ParseColorError::InvalidDigit('g')));
        assert_eq!("#+2345678".parse::<PackedColor>(), Err(ParseColorError::InvalidDigit('+')));
    }
}
