//! Proximity-to-response curves.
//!
//! A curve maps how close a spring is to its target (0 = on target, 1 = far)
//! to a scale in [0, 1] applied to the spring strength. Anything at or beyond
//! a distance of 1 saturates to exactly 1, whatever the curve's shape.

use crate::error::SwayError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;
use core::cmp::Ordering;

/// Strategy mapping proximity to response scale.
///
/// Implementors only provide [`sample`](ResponseCurve::sample) over [0, 1];
/// [`evaluate`](ResponseCurve::evaluate) handles sign and saturation.
pub trait ResponseCurve<F: Float> {
    /// Curve value at `proximity`, which is always in [0, 1) when called
    /// through `evaluate` with finite input.
    fn sample(&self, proximity: F) -> F;

    /// Response scale for a signed distance to the target.
    fn evaluate(&self, distance: F) -> F {
        let p = distance.abs();
        if p >= F::one() {
            F::one()
        } else {
            self.sample(p)
        }
    }
}

impl<F: Float, C: ResponseCurve<F> + ?Sized> ResponseCurve<F> for &C {
    fn sample(&self, proximity: F) -> F {
        (**self).sample(proximity)
    }
}

/// Identity ramp through (0, 0) and (1, 1). The default curve.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearResponse;

impl<F: Float> ResponseCurve<F> for LinearResponse {
    fn sample(&self, proximity: F) -> F {
        proximity
    }
}

/// Adapts any `Fn(F) -> F` into a response curve.
///
/// ```
/// use sway::curve::{FnResponse, ResponseCurve};
///
/// let ease = FnResponse(|p: f32| p * p);
/// assert_eq!(ease.evaluate(-0.5f32), 0.25);
/// assert_eq!(ease.evaluate(3.0f32), 1.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FnResponse<T>(pub T);

impl<F: Float, T: Fn(F) -> F> ResponseCurve<F> for FnResponse<T> {
    fn sample(&self, proximity: F) -> F {
        (self.0)(proximity)
    }
}

/// A control point on a [`KeyframeCurve`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe<F: Float> {
    pub time: F,
    pub value: F,
    /// Slope arriving at this key (Hermite only).
    pub in_tangent: F,
    /// Slope leaving this key (Hermite only).
    pub out_tangent: F,
}

impl<F: Float> Keyframe<F> {
    /// Key with flat tangents.
    pub fn new(time: F, value: F) -> Self {
        Keyframe { time, value, in_tangent: F::zero(), out_tangent: F::zero() }
    }

    pub fn with_tangents(mut self, in_tangent: F, out_tangent: F) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.value.is_finite()
            && self.in_tangent.is_finite()
            && self.out_tangent.is_finite()
    }
}

/// How a [`KeyframeCurve`] fills the space between two keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Straight line between key values; tangents are ignored.
    #[default]
    Linear,
    /// Cubic Hermite using each key's out/in tangents.
    Hermite,
}

/// Sampled curve through a sorted set of keyframes, clamped to the first and
/// last key value outside the key range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawKeyframeCurve<F>",
        bound(deserialize = "F: serde::Deserialize<'de>")
    )
)]
pub struct KeyframeCurve<F: Float> {
    keys: AllocVec<Keyframe<F>>,
    interpolation: Interpolation,
}

impl<F: Float> KeyframeCurve<F> {
    /// Build a curve from keys in any order.
    ///
    /// Fails on an empty key set, non-finite components, or two keys at the
    /// same time.
    pub fn new<I>(keys: I, interpolation: Interpolation) -> Result<Self, SwayError>
    where
        I: IntoIterator<Item = Keyframe<F>>,
    {
        let mut keys: AllocVec<Keyframe<F>> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(SwayError::EmptyCurve);
        }
        if let Some(index) = keys.iter().position(|k| !k.is_finite()) {
            return Err(SwayError::NonFiniteKeyframe { index });
        }
        // All times are finite here, so partial_cmp always answers.
        keys.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        if let Some(index) = keys.windows(2).position(|w| w[0].time == w[1].time) {
            return Err(SwayError::DuplicateKeyframe { index: index + 1 });
        }
        Ok(KeyframeCurve { keys, interpolation })
    }

    pub fn linear<I>(keys: I) -> Result<Self, SwayError>
    where
        I: IntoIterator<Item = Keyframe<F>>,
    {
        Self::new(keys, Interpolation::Linear)
    }

    pub fn hermite<I>(keys: I) -> Result<Self, SwayError>
    where
        I: IntoIterator<Item = Keyframe<F>>,
    {
        Self::new(keys, Interpolation::Hermite)
    }

    pub fn keys(&self) -> &[Keyframe<F>] { &self.keys }
    pub fn interpolation(&self) -> Interpolation { self.interpolation }

    fn segment(&self, a: &Keyframe<F>, b: &Keyframe<F>, t: F) -> F {
        let span = b.time - a.time;
        let s = (t - a.time) / span;
        match self.interpolation {
            Interpolation::Linear => a.value.lerp(b.value, s),
            Interpolation::Hermite => {
                let two = F::two();
                let three = F::from_f32(3.0);
                let s2 = s * s;
                let s3 = s2 * s;
                let h00 = two * s3 - three * s2 + F::one();
                let h10 = s3 - two * s2 + s;
                let h01 = three * s2 - two * s3;
                let h11 = s3 - s2;
                h00 * a.value + h10 * span * a.out_tangent + h01 * b.value + h11 * span * b.in_tangent
            }
        }
    }
}

impl<F: Float> Default for KeyframeCurve<F> {
    fn default() -> Self {
        KeyframeCurve {
            keys: alloc::vec![Keyframe::new(F::zero(), F::zero()), Keyframe::new(F::one(), F::one())],
            interpolation: Interpolation::Linear,
        }
    }
}

impl<F: Float> ResponseCurve<F> for KeyframeCurve<F> {
    fn sample(&self, t: F) -> F {
        if t.is_nan() {
            return t;
        }
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return t,
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }
        // first.time < t < last.time, so 1 <= i < len.
        let i = self.keys.partition_point(|k| k.time < t);
        self.segment(&self.keys[i - 1], &self.keys[i], t)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawKeyframeCurve<F: Float> {
    keys: AllocVec<Keyframe<F>>,
    #[serde(default)]
    interpolation: Interpolation,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawKeyframeCurve<F>> for KeyframeCurve<F> {
    type Error = SwayError;

    fn try_from(raw: RawKeyframeCurve<F>) -> Result<Self, SwayError> {
        KeyframeCurve::new(raw.keys, raw.interpolation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity_below_one() {
        assert_eq!(LinearResponse.evaluate(0.25f32), 0.25);
        assert_eq!(LinearResponse.evaluate(-0.25f32), 0.25);
    }

    #[test]
    fn saturates_at_one_regardless_of_shape() {
        let flat = FnResponse(|_p: f64| 0.0f64);
        assert_eq!(flat.evaluate(1.0), 1.0);
        assert_eq!(flat.evaluate(-4.0), 1.0);
        assert_eq!(flat.evaluate(0.99), 0.0);
    }

    #[test]
    fn hermite_flat_tangents_is_smoothstep() {
        let curve = KeyframeCurve::hermite([Keyframe::new(0.0f64, 0.0), Keyframe::new(1.0, 1.0)])
            .unwrap();
        let s = 0.3;
        let smoothstep = 3.0 * s * s - 2.0 * s * s * s;
        assert!((curve.sample(s) - smoothstep).abs() < 1e-12);
    }
}
