use thiserror::Error;

use crate::color::{AnyColor, Color, Color4};

/// Errors reported by [`Gradient::sample`].
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum GradientError {
    /// There is no keyframe to sample from.
    #[error("cannot sample a gradient without keyframes")]
    Empty,

    #[error("gradient offset must not be NaN")]
    NanOffset,
}

/// A single gradient keyframe.
///
/// `offset` is in [0, 1] for every keyframe stored in a [`Gradient`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keyframe {
    pub offset: f32,
    pub color: AnyColor,
}

impl Keyframe {
    #[inline]
    pub fn new(offset: f32, color: impl Into<AnyColor>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// Ordered set of color keyframes with linear sampling.
///
/// Invariants:
/// - offsets are in [0, 1] and strictly increasing;
/// - no two keyframes share an offset.
///
/// Out-of-range offsets are clamped, both on insertion and on sampling.
/// Keyframes are only added through [`insert`](Self::insert) and its chaining
/// forms, so the invariants hold regardless of insertion order.
///
/// Equality compares offsets exactly and colors approximately (see
/// [`Color::approx_eq`]).
#[derive(Debug, Clone, Default)]
pub struct Gradient {
    keyframes: Vec<Keyframe>,
}

impl Gradient {
    #[inline]
    pub const fn new() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }

    /// Builds a gradient by inserting every `(offset, color)` pair in turn.
    pub fn from_keyframes<C, I>(keyframes: I) -> Self
    where
        C: Into<AnyColor>,
        I: IntoIterator<Item = (f32, C)>,
    {
        keyframes.into_iter().collect()
    }

    /// Adds a keyframe and returns the gradient for chaining.
    ///
    /// See [`insert`](Self::insert) for the placement rules.
    #[inline]
    pub fn add_point(mut self, color: impl Into<AnyColor>, offset: f32) -> Self {
        self.insert(offset, color);
        self
    }

    /// Same as [`add_point`](Self::add_point) with the arguments swapped.
    #[inline]
    pub fn add_point_at(self, offset: f32, color: impl Into<AnyColor>) -> Self {
        self.add_point(color, offset)
    }

    /// Inserts a keyframe at its sorted position.
    ///
    /// - `offset` is clamped to [0, 1].
    /// - A keyframe already at exactly `offset` has its color replaced.
    /// - A NaN offset is ignored.
    pub fn insert(&mut self, offset: f32, color: impl Into<AnyColor>) -> &mut Self {
        if offset.is_nan() {
            log::warn!("Gradient: ignoring keyframe with NaN offset");
            return self;
        }

        let offset = offset.clamp(0.0, 1.0);
        let color = color.into();
        let idx = self.keyframes.partition_point(|k| k.offset < offset);

        let exists = self.keyframes.get(idx).is_some_and(|k| k.offset == offset);
        if exists {
            log::trace!("Gradient: replacing keyframe color at offset {offset}");
            self.keyframes[idx].color = color;
        } else {
            log::trace!("Gradient: inserting keyframe at offset {offset} (index {idx})");
            self.keyframes.insert(idx, Keyframe { offset, color });
        }

        self
    }

    /// Samples the gradient at `t`.
    ///
    /// - `t` is clamped to [0, 1].
    /// - At or before the first keyframe, returns its color unchanged; likewise
    ///   at or after the last.
    /// - Between two keyframes, every channel (alpha included) is linearly
    ///   interpolated and the result is the `Rgba` variant.
    pub fn sample(&self, t: f32) -> Result<AnyColor, GradientError> {
        if t.is_nan() {
            return Err(GradientError::NanOffset);
        }

        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return Err(GradientError::Empty);
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return Ok(first.color);
        }
        if t >= last.offset {
            return Ok(last.color);
        }

        // first.offset < t < last.offset, so 1 <= upper < len.
        let upper = self.keyframes.partition_point(|k| k.offset <= t);
        let k0 = self.keyframes[upper - 1];
        let k1 = self.keyframes[upper];

        let f = (t - k0.offset) / (k1.offset - k0.offset);
        let c0 = k0.color.to_color4();
        Ok(AnyColor::Rgba(c0.lerp(k1.color, f)))
    }

    /// Like [`sample`](Self::sample), widened to `Color4`.
    #[inline]
    pub fn sample_color4(&self, t: f32) -> Result<Color4, GradientError> {
        self.sample(t).map(AnyColor::to_color4)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Keyframes in increasing offset order.
    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe> {
        self.keyframes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.keyframes.len() == other.keyframes.len()
            && self
                .keyframes
                .iter()
                .zip(&other.keyframes)
                .all(|(a, b)| a.offset == b.offset && a.color.approx_eq(&b.color))
    }
}

impl<C: Into<AnyColor>> FromIterator<(f32, C)> for Gradient {
    fn from_iter<I: IntoIterator<Item = (f32, C)>>(iter: I) -> Self {
        let mut gradient = Gradient::new();
        gradient.extend(iter);
        gradient
    }
}

impl<C: Into<AnyColor>> Extend<(f32, C)> for Gradient {
    fn extend<I: IntoIterator<Item = (f32, C)>>(&mut self, iter: I) {
        for (offset, color) in iter {
            self.insert(offset, color);
        }
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
