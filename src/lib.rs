//! Spring-damped look sway for first-person views.
//!
//! `sway` smooths weapon/camera drift in response to look input. At its core
//! is a per-axis spring that chases a moving target with direction-aware
//! damping: the pull stiffens by an overshoot coefficient only while the
//! value is still flying away from its target, and relaxes once it turns
//! back. The result is a "flick and settle" feel rather than a symmetric
//! oscillation.
//!
//! # Features
//!
//! - **Spring axes**: explicit state + clamped config + a pure `advance` step
//! - **Response curves**: linear default, keyframe (linear/Hermite), or any closure
//! - **Sway composition**: spring-driven `SpringSway` and slerp-driven `LerpSway`
//! - **Observable**: Monitor axis steps via the `StepObserver` trait (or `log`)
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use sway::{SpringAxis, SpringConfig};
//!
//! let mut axis = SpringAxis::with_config(0.0f32, SpringConfig::new());
//! let value = axis.step(1.0, 0.016);
//! assert!((value - 0.00192).abs() < 1e-7);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod curve;
pub mod spring;
pub mod sway;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Quat, Vec3};
pub use curve::{FnResponse, Interpolation, Keyframe, KeyframeCurve, LinearResponse, ResponseCurve};
pub use spring::{advance, Heading, KeyframeSpringAxis, SpringAxis, SpringState, StepReport};
pub use sway::{Axis, LerpSway, LookDelta, SpringSway, SwayGroup, SwayPose, SwayTriple};
pub use config::{LerpSwayConfig, PositionAmounts, RotationAmounts, SpringConfig, SwayConfig};
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::SwayError;
