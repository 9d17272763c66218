use sway::{
    Keyframe, KeyframeCurve, LerpSway, LerpSwayConfig, LookDelta, SpringAxis, SpringConfig,
    SpringSway, SwayConfig, SwayPose,
};
use wasm_bindgen::prelude::*;

// ---- Axis Demo ----

/// Three springs chasing the same target with different overshoot settings.
#[wasm_bindgen]
pub struct AxisDemo {
    loose: SpringAxis<f32>,
    standard: SpringAxis<f32>,
    stiff: SpringAxis<f32>,
    target: f32,
}

#[wasm_bindgen]
impl AxisDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(strength: f32) -> Self {
        let config = SpringConfig::new().with_spring_strength(strength);
        AxisDemo {
            loose: SpringAxis::with_config(0.0, config.clone().with_overshoot(1.0)),
            standard: SpringAxis::with_config(0.0, config.clone()),
            stiff: SpringAxis::with_config(0.0, config.with_overshoot(20.0)),
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn update(&mut self, dt: f32) {
        self.loose.step(self.target, dt);
        self.standard.step(self.target, dt);
        self.stiff.step(self.target, dt);
    }

    /// Returns [loose, standard, stiff] values.
    pub fn values(&self) -> Vec<f32> {
        vec![self.loose.value(), self.standard.value(), self.stiff.value()]
    }
}

// ---- Sway Demo ----

/// Spring and lerp sway side by side, driven by pointer deltas.
#[wasm_bindgen]
pub struct SwayDemo {
    spring: SpringSway<f32, KeyframeCurve<f32>>,
    lerp: LerpSway<f32>,
    look: LookDelta<f32>,
    spring_pose: SwayPose<f32>,
    lerp_pose: SwayPose<f32>,
}

#[wasm_bindgen]
impl SwayDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SwayDemo, JsError> {
        // Softer pull near the target than the default ramp.
        let curve = KeyframeCurve::hermite([
            Keyframe::new(0.0f32, 0.0),
            Keyframe::new(1.0, 1.0).with_tangents(2.0, 0.0),
        ])
        .map_err(|e| JsError::new(&e.to_string()))?;
        let spring = SpringConfig::new().with_curve(curve);
        Ok(SwayDemo {
            spring: SpringSway::with_springs(SwayConfig::new(), spring.clone(), spring),
            lerp: LerpSway::new(LerpSwayConfig::new()),
            look: LookDelta::default(),
            spring_pose: SwayPose::default(),
            lerp_pose: SwayPose::default(),
        })
    }

    /// Pointer movement since the last frame, already scaled to look units.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        self.look = LookDelta::new(self.look.horizontal + dx, self.look.vertical + dy);
    }

    pub fn set_aiming(&mut self, aiming: bool) {
        let factor = if aiming { 0.5 } else { 1.0 };
        *self.spring.config_mut() = SwayConfig::new().scaled(factor);
    }

    pub fn update(&mut self, dt: f32) {
        self.spring_pose = self.spring.update(self.look, dt);
        self.lerp_pose = self.lerp.update(self.look, dt);
        self.look = LookDelta::default();
    }

    /// Returns [x, y, z, w] of the spring sway rotation.
    pub fn spring_rotation(&self) -> Vec<f32> {
        let q = self.spring_pose.rotation;
        vec![q.x, q.y, q.z, q.w]
    }

    /// Returns [x, y, z, w] of the lerp sway rotation.
    pub fn lerp_rotation(&self) -> Vec<f32> {
        let q = self.lerp_pose.rotation;
        vec![q.x, q.y, q.z, q.w]
    }

    /// Returns [spring_x, spring_y, lerp_x, lerp_y] position offsets.
    pub fn offsets(&self) -> Vec<f32> {
        let s = self.spring_pose.position;
        let l = self.lerp_pose.position;
        vec![s.x, s.y, l.x, l.y]
    }
}
