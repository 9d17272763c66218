//! Error types for the strict sway entry points.

use core::fmt;

/// Errors reported by fallible constructors and [`SpringAxis::try_step`](crate::SpringAxis::try_step).
///
/// The regular stepping path never fails; these only surface where a caller
/// opted into validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SwayError {
    /// A keyframe curve needs at least one key.
    EmptyCurve,
    /// Keyframe time, value or tangent is NaN or infinite.
    NonFiniteKeyframe { index: usize },
    /// Two keyframes share the same time.
    DuplicateKeyframe { index: usize },
    /// Target passed to a step is NaN or infinite.
    NonFiniteTarget,
    /// Delta time is NaN or infinite.
    NonFiniteDeltaTime,
    /// Delta time is below zero.
    NegativeDeltaTime,
}

impl fmt::Display for SwayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwayError::EmptyCurve => write!(f, "response curve needs at least one keyframe"),
            SwayError::NonFiniteKeyframe { index } => {
                write!(f, "keyframe {} has a non-finite component", index)
            }
            SwayError::DuplicateKeyframe { index } => {
                write!(f, "keyframe {} repeats the time of a previous key", index)
            }
            SwayError::NonFiniteTarget => write!(f, "target must be finite"),
            SwayError::NonFiniteDeltaTime => write!(f, "delta time must be finite"),
            SwayError::NegativeDeltaTime => write!(f, "delta time must not be negative"),
        }
    }
}
