//! Color values in packed or floating-point storage, plus keyframe gradients.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Color` trait, `PackedColor`, `Color3`, `Color4`, `AnyColor` |
//! | [`gradient`] | `Gradient`, `Keyframe`, `GradientError` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! Arithmetic and equality work on the logical `(r, g, b, a)` channels, so any
//! two storage forms can be mixed. Binary operators return the more precise
//! operand form (`PackedColor < Color3 < Color4`); compare results with
//! [`Color::approx_eq`], not with `==`.
//!
//! # Quick start
//!
//! ```rust
//! use colorlib::{Color, Color3, Color4, Gradient, PACKED_EPSILON, PackedColor};
//!
//! let packed = PackedColor::from_u32(0x5F9EA0FF);
//! let sum: Color4 = packed + Color4::with_alpha(0.1, 0.1, 0.1, 0.0);
//! assert!(packed.approx_eq(&Color4::new(0.372549, 0.619608, 0.627451)));
//! assert!(sum.approx_eq_eps(&Color4::new(0.472549, 0.719608, 0.727451), PACKED_EPSILON));
//!
//! let gradient = Gradient::new()
//!     .add_point(Color3::new(1.0, 0.0, 0.0), 0.0)
//!     .add_point(Color3::new(0.0, 1.0, 0.0), 1.0);
//! let mid = gradient.sample(0.5).unwrap();
//! assert!(mid.approx_eq_rgb(0.5, 0.5, 0.0));
//! ```

pub mod color;
pub mod gradient;
pub mod logging;

pub use color::{
    AnyColor, Color, Color3, Color4, FLOAT_EPSILON, PACKED_EPSILON, PackedColor, ParseColorError,
};
pub use gradient::{Gradient, GradientError, Keyframe};
