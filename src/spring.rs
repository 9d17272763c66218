//! Direction-aware spring axis with asymmetric overshoot damping.
//!
//! Each axis tracks one scalar toward a target that may jump every frame.
//! The pull toward the target is `strength · curve(distance)`, stiffened by the
//! overshoot coefficient only while the velocity is still carrying the value
//! away from the target. Once the velocity turns back, the pull relaxes to the
//! plain strength. Velocity is added to the position undivided by `dt`, so the
//! integrator is tuned per frame rather than per second.

use crate::config::SpringConfig;
use crate::curve::{KeyframeCurve, LinearResponse, ResponseCurve};
use crate::error::SwayError;
use crate::float::Float;

/// Simulation state of one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringState<F: Float> {
    pub current: F,
    pub target: F,
    pub velocity: F,
}

/// Whether the velocity carries the value away from or toward its target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Moving further past the target: overshoot stiffening applies.
    Away,
    /// Moving back toward the target, or at rest: baseline response.
    Toward,
}

impl<F: Float> SpringState<F> {
    /// At `position`, targeting itself, with no velocity.
    pub fn at_rest(position: F) -> Self {
        SpringState { current: position, target: position, velocity: F::zero() }
    }

    /// Which way the velocity points relative to the target. A value sitting
    /// exactly on the target counts as below it.
    pub fn heading(&self) -> Heading {
        if self.current > self.target {
            if self.velocity > F::zero() { Heading::Away } else { Heading::Toward }
        } else if self.velocity < F::zero() {
            Heading::Away
        } else {
            Heading::Toward
        }
    }
}

/// Advance `state` one frame toward `target`.
///
/// Pure: the returned state has `target` recorded and, unless `dt` is zero,
/// the new velocity and position. A zero `dt` leaves position and velocity
/// untouched. Non-finite `target` or `dt` propagate into the result.
pub fn advance<F, C>(state: SpringState<F>, config: &SpringConfig<F, C>, target: F, dt: F) -> SpringState<F>
where
    F: Float,
    C: ResponseCurve<F>,
{
    let state = SpringState { target, ..state };
    if dt == F::zero() {
        return state;
    }

    let distance = state.target - state.current;
    let overshoot = match state.heading() {
        Heading::Away => config.overshoot(),
        Heading::Toward => F::one(),
    };
    let impulse = config.response(overshoot, distance) * dt;

    let velocity = if state.current > state.target {
        state.velocity - impulse
    } else {
        state.velocity + impulse
    };

    SpringState {
        current: state.current + velocity,
        target: state.target,
        velocity,
    }
}

/// Outcome of one [`SpringAxis::step_report`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepReport<F: Float> {
    pub before: SpringState<F>,
    pub after: SpringState<F>,
    /// Heading used to pick the response, judged against the new target.
    pub heading: Heading,
}

impl<F: Float> StepReport<F> {
    pub fn value(&self) -> F { self.after.current }
}

/// One independently owned spring axis: state plus configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "F: serde::Deserialize<'de>, C: serde::Deserialize<'de>"))
)]
pub struct SpringAxis<F: Float, C: ResponseCurve<F> = LinearResponse> {
    state: SpringState<F>,
    config: SpringConfig<F, C>,
}

/// Spring axis shaped by a keyframe curve.
pub type KeyframeSpringAxis<F> = SpringAxis<F, KeyframeCurve<F>>;

impl<F: Float> SpringAxis<F> {
    /// Axis at rest on `initial` with default coefficients and a linear curve.
    pub fn new(initial: F) -> Self {
        SpringAxis::with_config(initial, SpringConfig::new())
    }
}

impl<F: Float> Default for SpringAxis<F> {
    fn default() -> Self {
        Self::new(F::zero())
    }
}

impl<F: Float, C: ResponseCurve<F>> SpringAxis<F, C> {
    pub fn with_config(initial: F, config: SpringConfig<F, C>) -> Self {
        SpringAxis { state: SpringState::at_rest(initial), config }
    }

    pub fn from_state(state: SpringState<F>, config: SpringConfig<F, C>) -> Self {
        SpringAxis { state, config }
    }

    /// Record `target` and advance one frame of `dt` seconds. Returns the new value.
    ///
    /// `target` and `dt` are expected to be finite with `dt >= 0`; this is not
    /// checked. See [`SpringAxis::try_step`] for a validating variant.
    pub fn step(&mut self, target: F, dt: F) -> F {
        self.state = advance(self.state, &self.config, target, dt);
        self.state.current
    }

    /// Like [`SpringAxis::step`], also reporting the state transition.
    pub fn step_report(&mut self, target: F, dt: F) -> StepReport<F> {
        let before = self.state;
        let heading = SpringState { target, ..before }.heading();
        self.state = advance(before, &self.config, target, dt);
        StepReport { before, after: self.state, heading }
    }

    /// Validating step. Rejects non-finite input and negative `dt` without
    /// touching the state.
    pub fn try_step(&mut self, target: F, dt: F) -> Result<F, SwayError> {
        if !target.is_finite() {
            return Err(SwayError::NonFiniteTarget);
        }
        if !dt.is_finite() {
            return Err(SwayError::NonFiniteDeltaTime);
        }
        if dt < F::zero() {
            return Err(SwayError::NegativeDeltaTime);
        }
        Ok(self.step(target, dt))
    }

    pub fn value(&self) -> F { self.state.current }
    pub fn target(&self) -> F { self.state.target }
    pub fn velocity(&self) -> F { self.state.velocity }
    pub fn state(&self) -> SpringState<F> { self.state }
    pub fn config(&self) -> &SpringConfig<F, C> { &self.config }
    pub fn config_mut(&mut self) -> &mut SpringConfig<F, C> { &mut self.config }

    pub fn set_value(&mut self, value: F) { self.state.current = value; }
    pub fn set_target(&mut self, target: F) { self.state.target = target; }
    pub fn set_velocity(&mut self, velocity: F) { self.state.velocity = velocity; }

    pub fn is_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        (self.state.current - self.state.target).abs() < eps_pos
            && self.state.velocity.abs() < eps_vel
    }

    pub fn reset(&mut self, position: F) {
        self.state.current = position;
        self.state.velocity = F::zero();
    }

    pub fn snap_to_target(&mut self) {
        self.state.current = self.state.target;
        self.state.velocity = F::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_on_target_counts_as_below() {
        let still = SpringState { current: 2.0f32, target: 2.0, velocity: 0.0 };
        assert_eq!(still.heading(), Heading::Toward);
        let sinking = SpringState { velocity: -1.0, ..still };
        assert_eq!(sinking.heading(), Heading::Away);
    }

    #[test]
    fn advance_records_target_even_when_frozen() {
        let config = SpringConfig::<f32>::new();
        let next = advance(SpringState::at_rest(0.0), &config, 3.0, 0.0);
        assert_eq!(next, SpringState { current: 0.0, target: 3.0, velocity: 0.0 });
    }

    #[test]
    fn report_heading_uses_new_target() {
        let state = SpringState { current: 1.0f32, target: 2.0, velocity: 0.5 };
        let mut axis = SpringAxis::from_state(state, SpringConfig::new());
        // New target sits below the value while velocity is positive.
        let report = axis.step_report(0.0, 1.0 / 60.0);
        assert_eq!(report.heading, Heading::Away);
        assert_eq!(report.before, state);
        assert_eq!(report.value(), axis.value());
    }
}
