//! Vector and rotation types used to compose sway output.

use crate::float::Float;
use core::ops::{Add, Sub, Mul, Neg};

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D vector in the node's local space (x right, y up, z forward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Local right basis vector (+X).
    pub fn right() -> Self { Vec3 { x: F::one(), y: F::zero(), z: F::zero() } }

    /// Local up basis vector (+Y).
    pub fn up() -> Self { Vec3 { x: F::zero(), y: F::one(), z: F::zero() } }

    /// Local forward basis vector (+Z).
    pub fn forward() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::one() } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    pub fn length(self) -> F {
        self.dot(self).sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.abs() < F::from_f32(1e-10) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

// --------------------------------------------------------------------------
// Quat<F> — unit quaternion
// --------------------------------------------------------------------------

/// Rotation quaternion, `w` scalar part last.
///
/// Multiplication is the Hamilton product: `a * b` applies `b` first, then `a`,
/// when rotating a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    pub fn new(x: F, y: F, z: F, w: F) -> Self { Quat { x, y, z, w } }

    pub fn identity() -> Self { Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() } }

    /// Rotation of `radians` about `axis`. The axis is normalized first; a
    /// degenerate axis yields the identity.
    pub fn from_axis_angle(axis: Vec3<F>, radians: F) -> Self {
        let axis = axis.normalize();
        let half = radians * F::half();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    /// Same as [`Quat::from_axis_angle`] with the angle given in degrees.
    pub fn from_axis_degrees(axis: Vec3<F>, degrees: F) -> Self {
        Self::from_axis_angle(axis, degrees.to_radians())
    }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(self) -> F {
        self.dot(self).sqrt()
    }

    /// Normalize to unit length. Returns the identity if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.abs() < F::from_f32(1e-10) {
            return Self::identity();
        }
        let inv = F::one() / len;
        Quat { x: self.x * inv, y: self.y * inv, z: self.z * inv, w: self.w * inv }
    }

    /// Rotate a vector by this (unit) quaternion.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v).scale(F::two());
        v + t.scale(self.w) + u.cross(t)
    }

    /// Spherical interpolation along the shorter arc. `t` is clamped to [0, 1].
    pub fn slerp(self, other: Self, t: F) -> Self {
        let t = t.clamp(F::zero(), F::one());
        let mut cos_theta = self.dot(other);
        let mut end = other;
        if cos_theta < F::zero() {
            cos_theta = -cos_theta;
            end = Quat { x: -other.x, y: -other.y, z: -other.z, w: -other.w };
        }

        // Nearly parallel: sin(theta) -> 0, fall back to normalized lerp.
        if cos_theta > F::from_f32(0.9995) {
            return Quat {
                x: self.x.lerp(end.x, t),
                y: self.y.lerp(end.y, t),
                z: self.z.lerp(end.z, t),
                w: self.w.lerp(end.w, t),
            }
            .normalize();
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let a = ((F::one() - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Quat {
            x: self.x * a + end.x * b,
            y: self.y * a + end.y * b,
            z: self.z * a + end.z * b,
            w: self.w * a + end.w * b,
        }
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Quat<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

#[cfg(feature = "glam")]
impl From<Vec3<f32>> for glam::Vec3 {
    fn from(v: Vec3<f32>) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Quat<f32>> for glam::Quat {
    fn from(q: Quat<f32>) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f32>, b: Vec3<f32>) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn vec3_cross() {
        let k = Vec3::<f32>::right().cross(Vec3::up());
        assert!(close(k, Vec3::forward()));
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f32>::zero();
        assert_eq!(v.normalize(), Vec3::zero());
    }

    #[test]
    fn quarter_turn_about_up() {
        let q = Quat::from_axis_degrees(Vec3::<f32>::up(), 90.0);
        // Right-handed: +X rotates onto -Z about +Y.
        let r = q.rotate(Vec3::right());
        assert!(close(r, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", r);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let pitch = Quat::from_axis_degrees(Vec3::<f32>::right(), 90.0);
        let yaw = Quat::from_axis_degrees(Vec3::<f32>::up(), 90.0);
        let v = Vec3::forward();
        let composed = (pitch * yaw).rotate(v);
        let sequential = pitch.rotate(yaw.rotate(v));
        assert!(close(composed, sequential));
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Quat::<f32>::identity();
        let b = Quat::from_axis_degrees(Vec3::up(), 90.0);
        assert!((a.slerp(b, 0.0).dot(a) - 1.0).abs() < 1e-5);
        assert!((a.slerp(b, 1.0).dot(b) - 1.0).abs() < 1e-5);
        let mid = a.slerp(b, 0.5);
        let expected = Quat::from_axis_degrees(Vec3::up(), 45.0);
        assert!((mid.dot(expected) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn slerp_clamps_factor() {
        let a = Quat::<f32>::identity();
        let b = Quat::from_axis_degrees(Vec3::right(), 30.0);
        assert_eq!(a.slerp(b, 7.0), a.slerp(b, 1.0));
        assert_eq!(a.slerp(b, -2.0), a.slerp(b, 0.0));
    }
}
