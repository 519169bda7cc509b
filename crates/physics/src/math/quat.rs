use std::ops::Mul;

use super::Vec3;

/// Orientation quaternion, `w + xi + yj + zk`.
///
/// Kept at unit length whenever it is used as an orientation.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `radians` about `axis`. The axis is normalized here.
    ///
    /// # Panics
    ///
    /// Panics if `axis` has zero length.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let axis = axis.normalize();
        let (half_sine, half_cosine) = (0.5 * radians).sin_cos();
        Self::new(
            half_cosine,
            axis.x * half_sine,
            axis.y * half_sine,
            axis.z * half_sine,
        )
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// # Panics
    ///
    /// Panics if the quaternion has zero length.
    #[must_use]
    pub fn normalize(self) -> Self {
        let length = self.length();
        assert!(length > 0.0, "cannot normalize a zero-length quaternion");
        let inv = 1.0 / length;
        Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first, then `a`.
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn axis_is_normalized_before_use() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 5.0), FRAC_PI_2);
        assert!((q.length() - 1.0).abs() < 1e-6);
        assert!((q.w - FRAC_PI_4.cos()).abs() < 1e-6);
        assert!((q.z - FRAC_PI_4.sin()).abs() < 1e-6);
    }

    #[test]
    fn composing_two_quarter_turns_gives_half_turn() {
        let quarter = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let half = quarter * quarter;
        let expected = Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI);
        assert!((half.w - expected.w).abs() < 1e-6);
        assert!((half.y - expected.y).abs() < 1e-6);
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
    }
}
