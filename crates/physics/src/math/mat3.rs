use std::ops::{Add, Mul, Sub};

use super::{Quat, Vec3};

/// A 3x3 matrix stored column-major:
///
/// ```text
/// 0 3 6
/// 1 4 7
/// 2 5 8
/// ```
///
/// Used both as a rotation (orientation) and as an inertia tensor. A proper
/// rotation matrix is orthonormal, so its inverse is its transpose; the
/// engine relies on that instead of calling [`Mat3::inverse`] on
/// orientations.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const ZERO: Self = Self::from_cols_array([0.0; 9]);
    pub const IDENTITY: Self = Self::scale(1.0);

    #[must_use]
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Uniform scale matrix, `s` on the diagonal.
    #[must_use]
    pub const fn scale(s: f32) -> Self {
        Self::from_cols_array([s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, s])
    }

    /// Element at `row`, `col`.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 3 + row]
    }

    #[must_use]
    pub const fn col(&self, col: usize) -> Vec3 {
        Vec3::new(self.m[col * 3], self.m[col * 3 + 1], self.m[col * 3 + 2])
    }

    /// Rotation matrix for a unit quaternion. The quaternion is not
    /// renormalized here.
    #[must_use]
    pub fn from_rotation(q: Quat) -> Self {
        let Quat { w, x, y, z } = q;
        Self::from_cols_array([
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + z * w),
            2.0 * (x * z - y * w),
            2.0 * (x * y - z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + x * w),
            2.0 * (x * z + y * w),
            2.0 * (y * z - x * w),
            1.0 - 2.0 * (x * x + y * y),
        ])
    }

    #[must_use]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_cols_array([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[7] * m[5]) - m[3] * (m[1] * m[8] - m[7] * m[2])
            + m[6] * (m[1] * m[5] - m[4] * m[2])
    }

    /// General inverse through the adjugate divided by the determinant.
    ///
    /// Only well-conditioned matrices are passed in: inertia tensors of
    /// bodies with positive mass and positive radius, which are always
    /// invertible.
    ///
    /// # Panics
    ///
    /// Panics if the determinant is zero.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let m = &self.m;
        let adjugate = [
            m[4] * m[8] - m[7] * m[5],
            -(m[1] * m[8] - m[7] * m[2]),
            m[1] * m[5] - m[4] * m[2],
            -(m[3] * m[8] - m[6] * m[5]),
            m[0] * m[8] - m[6] * m[2],
            -(m[0] * m[5] - m[3] * m[2]),
            m[3] * m[7] - m[6] * m[4],
            -(m[0] * m[7] - m[6] * m[1]),
            m[0] * m[4] - m[3] * m[1],
        ];

        let det = m[0] * adjugate[0] + m[3] * adjugate[1] + m[6] * adjugate[2];
        assert!(det.abs() > 0.0, "cannot invert a singular matrix");

        Self::from_cols_array(adjugate) * (1.0 / det)
    }

    /// Element-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }
}

impl Mul for Mat3 {
    type Output = Self;

    /// Row-by-column composition: every entry is a sum of three products.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = self.get(row, 0) * rhs.get(0, col)
                    + self.get(row, 1) * rhs.get(1, col)
                    + self.get(row, 2) * rhs.get(2, col);
            }
        }
        Self::from_cols_array(out)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;

    fn mul(self, t: f32) -> Self {
        Self::from_cols_array(self.m.map(|v| v * t))
    }
}

impl Add for Mat3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self.m;
        for (o, r) in out.iter_mut().zip(rhs.m) {
            *o += r;
        }
        Self::from_cols_array(out)
    }
}

impl Sub for Mat3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs * -1.0
    }
}
