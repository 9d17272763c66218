//! Step observer trait for monitoring sway updates.

use crate::float::Float;
use crate::spring::StepReport;
use crate::sway::{Axis, SwayGroup};

/// Trait for observing sway axis steps.
///
/// Implement this to watch springs settle (debug overlays, tuning tools,
/// tests). All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after one axis of a sway group has stepped.
    fn on_axis_step(&mut self, _group: SwayGroup, _axis: Axis, _report: &StepReport<F>) {}

    /// Called once every axis of a sway update has stepped.
    fn on_frame_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Forwards every step to the `log` facade at trace level.
#[derive(Default)]
pub struct LogStepObserver {
    frames: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 { self.frames }
}

impl<F: Float> StepObserver<F> for LogStepObserver {
    fn on_axis_step(&mut self, group: SwayGroup, axis: Axis, report: &StepReport<F>) {
        log::trace!(
            target: "sway",
            "frame {} {:?}.{:?} {:?}: {:?} -> {:?} (target {:?}, velocity {:?})",
            self.frames,
            group,
            axis,
            report.heading,
            report.before.current,
            report.after.current,
            report.after.target,
            report.after.velocity,
        );
    }

    fn on_frame_complete(&mut self) {
        self.frames += 1;
    }
}
