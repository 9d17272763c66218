//! Look-driven sway built on spring axes.
//!
//! [`SpringSway`] feeds two look deltas per frame into a rotation triple and a
//! position triple of independent [`SpringAxis`] instances and composes the
//! results into a local pose. [`LerpSway`] produces the same kind of pose
//! without springs, by chasing the frame's target with slerp/lerp.

use crate::config::{LerpSwayConfig, SpringConfig, SwayConfig};
use crate::curve::{LinearResponse, ResponseCurve};
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::spring::SpringAxis;
use crate::vec::{Quat, Vec3};

/// Local basis axis a spring drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Right; pitch for rotation, horizontal for position.
    X,
    /// Up; yaw for rotation, vertical for position.
    Y,
    /// Forward; roll for rotation.
    Z,
}

/// Which half of a sway an axis belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwayGroup {
    Rotation,
    Position,
}

/// Per-frame look input, e.g. pointer deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LookDelta<F: Float> {
    pub horizontal: F,
    pub vertical: F,
}

impl<F: Float> LookDelta<F> {
    pub fn new(horizontal: F, vertical: F) -> Self { LookDelta { horizontal, vertical } }
}

/// Local rotation and position to apply to the swaying node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwayPose<F: Float> {
    pub rotation: Quat<F>,
    pub position: Vec3<F>,
}

impl<F: Float> Default for SwayPose<F> {
    fn default() -> Self {
        SwayPose { rotation: Quat::identity(), position: Vec3::zero() }
    }
}

/// Three independent spring axes, one per local basis vector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "F: serde::Deserialize<'de>, C: serde::Deserialize<'de>"))
)]
pub struct SwayTriple<F: Float, C: ResponseCurve<F> = LinearResponse> {
    pub x: SpringAxis<F, C>,
    pub y: SpringAxis<F, C>,
    pub z: SpringAxis<F, C>,
}

impl<F: Float, C: ResponseCurve<F>> SwayTriple<F, C> {
    pub fn new(x: SpringAxis<F, C>, y: SpringAxis<F, C>, z: SpringAxis<F, C>) -> Self {
        SwayTriple { x, y, z }
    }

    /// Three axes at rest on zero sharing one configuration.
    pub fn uniform(config: SpringConfig<F, C>) -> Self
    where
        C: Clone,
    {
        SwayTriple {
            x: SpringAxis::with_config(F::zero(), config.clone()),
            y: SpringAxis::with_config(F::zero(), config.clone()),
            z: SpringAxis::with_config(F::zero(), config),
        }
    }

    pub fn axis(&self, axis: Axis) -> &SpringAxis<F, C> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut SpringAxis<F, C> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    pub fn values(&self) -> Vec3<F> {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }

    fn reset(&mut self) {
        for spring in [&mut self.x, &mut self.y, &mut self.z] {
            spring.set_target(F::zero());
            spring.snap_to_target();
        }
    }
}

fn step_axis<F, C, O>(
    spring: &mut SpringAxis<F, C>,
    group: SwayGroup,
    axis: Axis,
    target: F,
    dt: F,
    observer: &mut O,
) -> F
where
    F: Float,
    C: ResponseCurve<F>,
    O: StepObserver<F>,
{
    let report = spring.step_report(target, dt);
    observer.on_axis_step(group, axis, &report);
    report.value()
}

/// Spring-driven sway: every degree of freedom settles through its own
/// [`SpringAxis`].
///
/// Per frame, rotation targets are `-vertical` (pitch), `horizontal` (yaw) and
/// `-horizontal` (roll); position targets are `horizontal` and `vertical`. The
/// position triple's z axis is never stepped.
#[derive(Clone, Debug)]
pub struct SpringSway<F: Float, C: ResponseCurve<F> = LinearResponse> {
    rotation: SwayTriple<F, C>,
    position: SwayTriple<F, C>,
    config: SwayConfig<F>,
    origin: Vec3<F>,
}

impl<F: Float> SpringSway<F> {
    /// Default spring coefficients on every axis.
    pub fn new(config: SwayConfig<F>) -> Self {
        SpringSway::with_springs(config, SpringConfig::new(), SpringConfig::new())
    }
}

impl<F: Float> Default for SpringSway<F> {
    fn default() -> Self {
        Self::new(SwayConfig::default())
    }
}

impl<F: Float, C: ResponseCurve<F>> SpringSway<F, C> {
    pub fn with_springs(
        config: SwayConfig<F>,
        rotation_spring: SpringConfig<F, C>,
        position_spring: SpringConfig<F, C>,
    ) -> Self
    where
        C: Clone,
    {
        SpringSway::from_triples(
            config,
            SwayTriple::uniform(rotation_spring),
            SwayTriple::uniform(position_spring),
        )
    }

    pub fn from_triples(config: SwayConfig<F>, rotation: SwayTriple<F, C>, position: SwayTriple<F, C>) -> Self {
        SpringSway { rotation, position, config, origin: Vec3::zero() }
    }

    /// Local position the offset is added to, usually the node's resting
    /// position captured at setup.
    pub fn with_origin(mut self, origin: Vec3<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn update(&mut self, look: LookDelta<F>, dt: F) -> SwayPose<F> {
        self.update_observed(look, dt, &mut NoOpStepObserver)
    }

    pub fn update_observed<O: StepObserver<F>>(
        &mut self,
        look: LookDelta<F>,
        dt: F,
        observer: &mut O,
    ) -> SwayPose<F> {
        use SwayGroup::{Position, Rotation};

        let pitch = step_axis(&mut self.rotation.x, Rotation, Axis::X, -look.vertical, dt, observer);
        let yaw = step_axis(&mut self.rotation.y, Rotation, Axis::Y, look.horizontal, dt, observer);
        let roll = step_axis(&mut self.rotation.z, Rotation, Axis::Z, -look.horizontal, dt, observer);

        let degrees = self.config.rotation;
        let rotation = Quat::from_axis_degrees(Vec3::right(), pitch * degrees.pitch)
            * Quat::from_axis_degrees(Vec3::up(), yaw * degrees.yaw)
            * Quat::from_axis_degrees(Vec3::forward(), roll * degrees.roll);

        let h = step_axis(&mut self.position.x, Position, Axis::X, look.horizontal, dt, observer);
        let v = step_axis(&mut self.position.y, Position, Axis::Y, look.vertical, dt, observer);

        let amounts = self.config.position;
        let position = Vec3::new(h * amounts.horizontal, v * amounts.vertical, F::zero()) + self.origin;

        observer.on_frame_complete();
        SwayPose { rotation, position }
    }

    /// Return every axis to rest on zero.
    pub fn reset(&mut self) {
        self.rotation.reset();
        self.position.reset();
    }

    pub fn rotation_axes(&self) -> &SwayTriple<F, C> { &self.rotation }
    pub fn rotation_axes_mut(&mut self) -> &mut SwayTriple<F, C> { &mut self.rotation }
    pub fn position_axes(&self) -> &SwayTriple<F, C> { &self.position }
    pub fn position_axes_mut(&mut self) -> &mut SwayTriple<F, C> { &mut self.position }
    pub fn config(&self) -> &SwayConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut SwayConfig<F> { &mut self.config }
    pub fn origin(&self) -> Vec3<F> { self.origin }
    pub fn set_origin(&mut self, origin: Vec3<F>) { self.origin = origin; }
}

/// Interpolation-driven sway with no spring state.
///
/// The frame's target rotation is smoothed twice (a slow-returning target,
/// then a faster chase of that target); the position offset is a single lerp.
/// All interpolation factors are `speed · dt`, clamped to [0, 1].
#[derive(Clone, Debug)]
pub struct LerpSway<F: Float> {
    config: LerpSwayConfig<F>,
    target_rotation: Quat<F>,
    rotation: Quat<F>,
    horizontal: F,
    vertical: F,
    origin: Vec3<F>,
}

impl<F: Float> LerpSway<F> {
    pub fn new(config: LerpSwayConfig<F>) -> Self {
        LerpSway {
            config,
            target_rotation: Quat::identity(),
            rotation: Quat::identity(),
            horizontal: F::zero(),
            vertical: F::zero(),
            origin: Vec3::zero(),
        }
    }

    pub fn with_origin(mut self, origin: Vec3<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn update(&mut self, look: LookDelta<F>, dt: F) -> SwayPose<F> {
        let c = &self.config;
        let frame_target = Quat::from_axis_degrees(Vec3::right(), -look.vertical * c.linear_rotation_amount)
            * Quat::from_axis_degrees(Vec3::up(), look.horizontal * c.linear_rotation_amount)
            * Quat::from_axis_degrees(Vec3::forward(), -look.horizontal * c.forward_rotation_amount);

        self.target_rotation = self.target_rotation.slerp(frame_target, dt * c.return_rotation_speed);
        self.rotation = self.rotation.slerp(self.target_rotation, c.initial_rotation_speed * dt);

        let t = (c.movement_speed * dt).clamp(F::zero(), F::one());
        self.horizontal = self.horizontal.lerp(look.horizontal * c.horizontal_amount, t);
        self.vertical = self.vertical.lerp(look.vertical * c.vertical_amount, t);

        self.pose()
    }

    pub fn pose(&self) -> SwayPose<F> {
        SwayPose {
            rotation: self.rotation,
            position: Vec3::new(self.horizontal, self.vertical, F::zero()) + self.origin,
        }
    }

    pub fn reset(&mut self) {
        self.target_rotation = Quat::identity();
        self.rotation = Quat::identity();
        self.horizontal = F::zero();
        self.vertical = F::zero();
    }

    pub fn config(&self) -> &LerpSwayConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut LerpSwayConfig<F> { &mut self.config }
    pub fn origin(&self) -> Vec3<F> { self.origin }
    pub fn set_origin(&mut self, origin: Vec3<F>) { self.origin = origin; }
}

impl<F: Float> Default for LerpSway<F> {
    fn default() -> Self {
        Self::new(LerpSwayConfig::default())
    }
}
