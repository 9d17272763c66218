//! Configuration types for spring axes and sway composition.

use crate::curve::{LinearResponse, ResponseCurve};
use crate::float::Float;

/// Default spring strength coefficient.
pub const DEFAULT_SPRING_STRENGTH: f32 = 0.12;
/// Default overshoot coefficient.
pub const DEFAULT_OVERSHOOT: f32 = 2.14;
/// Upper bound of the overshoot coefficient.
pub const MAX_OVERSHOOT: f32 = 20.0;

/// Coefficients and response curve for one spring axis.
///
/// `spring_strength` is held in [0, 1] and `overshoot` in [1, 20]. Every write
/// path clamps, so out-of-range input is silently corrected rather than
/// rejected.
///
/// # Builder Pattern
/// ```
/// use sway::config::SpringConfig;
///
/// let config: SpringConfig<f32> = SpringConfig::new()
///     .with_spring_strength(0.3)
///     .with_overshoot(45.0);
/// assert_eq!(config.overshoot(), 20.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "RawSpringConfig<F, C>",
        bound(deserialize = "F: serde::Deserialize<'de>, C: serde::Deserialize<'de>")
    )
)]
pub struct SpringConfig<F: Float, C: ResponseCurve<F> = LinearResponse> {
    spring_strength: F,
    overshoot: F,
    curve: C,
}

impl<F: Float> SpringConfig<F> {
    /// Default coefficients with the linear response curve.
    pub fn new() -> Self {
        SpringConfig::from_parts(
            F::from_f32(DEFAULT_SPRING_STRENGTH),
            F::from_f32(DEFAULT_OVERSHOOT),
            LinearResponse,
        )
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, C: ResponseCurve<F>> SpringConfig<F, C> {
    pub fn from_parts(spring_strength: F, overshoot: F, curve: C) -> Self {
        SpringConfig {
            spring_strength: clamp_strength(spring_strength),
            overshoot: clamp_overshoot(overshoot),
            curve,
        }
    }

    /// Set the spring strength, clamped to [0, 1].
    pub fn with_spring_strength(mut self, spring_strength: F) -> Self {
        self.set_spring_strength(spring_strength);
        self
    }

    /// Set the overshoot coefficient, clamped to [1, 20].
    pub fn with_overshoot(mut self, overshoot: F) -> Self {
        self.set_overshoot(overshoot);
        self
    }

    /// Swap the response curve, keeping both coefficients.
    pub fn with_curve<D: ResponseCurve<F>>(self, curve: D) -> SpringConfig<F, D> {
        SpringConfig {
            spring_strength: self.spring_strength,
            overshoot: self.overshoot,
            curve,
        }
    }

    pub fn spring_strength(&self) -> F { self.spring_strength }
    pub fn overshoot(&self) -> F { self.overshoot }
    pub fn curve(&self) -> &C { &self.curve }

    pub fn set_spring_strength(&mut self, spring_strength: F) {
        self.spring_strength = clamp_strength(spring_strength);
    }

    pub fn set_overshoot(&mut self, overshoot: F) {
        self.overshoot = clamp_overshoot(overshoot);
    }

    pub fn set_curve(&mut self, curve: C) {
        self.curve = curve;
    }

    /// `strength · overshoot · curve(distance)`, with `overshoot` clamped to
    /// [1, 20] so a fixed multiplier of 1 can be passed for the relaxed case.
    pub(crate) fn response(&self, overshoot: F, distance: F) -> F {
        self.spring_strength * clamp_overshoot(overshoot) * self.curve.evaluate(distance)
    }
}

fn clamp_strength<F: Float>(v: F) -> F {
    v.clamp(F::zero(), F::one())
}

fn clamp_overshoot<F: Float>(v: F) -> F {
    v.clamp(F::one(), F::from_f32(MAX_OVERSHOOT))
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpringConfig<F: Float, C: ResponseCurve<F>> {
    spring_strength: F,
    overshoot: F,
    curve: C,
}

#[cfg(feature = "serde")]
impl<F: Float, C: ResponseCurve<F>> From<RawSpringConfig<F, C>> for SpringConfig<F, C> {
    fn from(raw: RawSpringConfig<F, C>) -> Self {
        SpringConfig::from_parts(raw.spring_strength, raw.overshoot, raw.curve)
    }
}

/// Degrees of rotation per unit of spring output, per local axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationAmounts<F: Float> {
    /// Up/down tilt about local right. Default: 5.
    pub pitch: F,
    /// Left/right tilt about local up. Default: 30.
    pub yaw: F,
    /// Roll about local forward. Default: 20.
    pub roll: F,
}

impl<F: Float> Default for RotationAmounts<F> {
    fn default() -> Self {
        RotationAmounts {
            pitch: F::from_f32(5.0),
            yaw: F::from_f32(30.0),
            roll: F::from_f32(20.0),
        }
    }
}

/// Position units per unit of spring output.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAmounts<F: Float> {
    /// Left/right offset. Default: 0.1.
    pub horizontal: F,
    /// Up/down offset. Default: 0.1.
    pub vertical: F,
}

impl<F: Float> Default for PositionAmounts<F> {
    fn default() -> Self {
        PositionAmounts {
            horizontal: F::from_f32(0.1),
            vertical: F::from_f32(0.1),
        }
    }
}

/// Amount settings for a spring-driven sway.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwayConfig<F: Float> {
    pub rotation: RotationAmounts<F>,
    pub position: PositionAmounts<F>,
}

impl<F: Float> SwayConfig<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation(mut self, pitch: F, yaw: F, roll: F) -> Self {
        self.rotation = RotationAmounts { pitch, yaw, roll };
        self
    }

    pub fn with_position(mut self, horizontal: F, vertical: F) -> Self {
        self.position = PositionAmounts { horizontal, vertical };
        self
    }

    /// Scale every amount by `factor`, e.g. 0.5 while aiming down sights.
    pub fn scaled(self, factor: F) -> Self {
        SwayConfig {
            rotation: RotationAmounts {
                pitch: self.rotation.pitch * factor,
                yaw: self.rotation.yaw * factor,
                roll: self.rotation.roll * factor,
            },
            position: PositionAmounts {
                horizontal: self.position.horizontal * factor,
                vertical: self.position.vertical * factor,
            },
        }
    }
}

/// Settings for the interpolation-driven sway.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LerpSwayConfig<F: Float> {
    /// How fast the rotation chases the smoothed target. Default: 10.
    pub initial_rotation_speed: F,
    /// How fast the smoothed target follows the frame's input. Default: 5.
    pub return_rotation_speed: F,
    /// Degrees of pitch/yaw per unit of look input. Default: 20.
    pub linear_rotation_amount: F,
    /// Degrees of roll per unit of horizontal look input. Default: 30.
    pub forward_rotation_amount: F,
    /// Lerp speed of the position offset. Default: 3.
    pub movement_speed: F,
    /// Default: 1.
    pub horizontal_amount: F,
    /// Default: 1.
    pub vertical_amount: F,
}

impl<F: Float> LerpSwayConfig<F> {
    pub fn new() -> Self {
        LerpSwayConfig {
            initial_rotation_speed: F::from_f32(10.0),
            return_rotation_speed: F::from_f32(5.0),
            linear_rotation_amount: F::from_f32(20.0),
            forward_rotation_amount: F::from_f32(30.0),
            movement_speed: F::from_f32(3.0),
            horizontal_amount: F::one(),
            vertical_amount: F::one(),
        }
    }

    pub fn with_rotation_speeds(mut self, initial: F, ret: F) -> Self {
        self.initial_rotation_speed = initial;
        self.return_rotation_speed = ret;
        self
    }

    pub fn with_rotation_amounts(mut self, linear: F, forward: F) -> Self {
        self.linear_rotation_amount = linear;
        self.forward_rotation_amount = forward;
        self
    }

    pub fn with_movement(mut self, speed: F, horizontal: F, vertical: F) -> Self {
        self.movement_speed = speed;
        self.horizontal_amount = horizontal;
        self.vertical_amount = vertical;
        self
    }
}

impl<F: Float> Default for LerpSwayConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_clamp_on_every_write() {
        let mut config: SpringConfig<f32> = SpringConfig::from_parts(-3.0, 0.0, LinearResponse);
        assert_eq!(config.spring_strength(), 0.0);
        assert_eq!(config.overshoot(), 1.0);

        config.set_spring_strength(7.0);
        config.set_overshoot(1e9);
        assert_eq!(config.spring_strength(), 1.0);
        assert_eq!(config.overshoot(), 20.0);
    }

    #[test]
    fn nan_coefficient_lands_on_lower_bound() {
        let config: SpringConfig<f64> = SpringConfig::new()
            .with_spring_strength(f64::NAN)
            .with_overshoot(f64::NAN);
        assert_eq!(config.spring_strength(), 0.0);
        assert_eq!(config.overshoot(), 1.0);
    }

    #[test]
    fn scaled_halves_amounts() {
        let half = SwayConfig::<f32>::new().scaled(0.5);
        assert_eq!(half.rotation.yaw, 15.0);
        assert_eq!(half.position.vertical, 0.05);
    }
}
