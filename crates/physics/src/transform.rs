//! Transform read-back for the renderer
//!
//! The host draws each body from its position, orientation, radius and tint.
//! [`BodyTransform`] packs exactly that into a `Pod` value so a whole frame
//! can be handed to a GPU buffer with `bytemuck::cast_slice`.

use crate::types::{Body, Mat3, Quat, Tint, Vec3};

/// Per-body drawing data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyTransform {
    pub position: Vec3,
    pub orientation: Quat,
    pub radius: f32,
    pub tint: Tint,
}

impl From<&Body> for BodyTransform {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position,
            orientation: body.orientation,
            radius: body.radius,
            tint: body.tint,
        }
    }
}

impl BodyTransform {
    /// Column-major model matrix `T(position) · R(orientation) · S(radius)`
    /// for a unit sphere mesh.
    #[must_use]
    pub fn model_matrix(&self) -> [[f32; 4]; 4] {
        let rotation = Mat3::from_rotation(self.orientation);
        let column = |i: usize| {
            let c = rotation.col(i) * self.radius;
            [c.x, c.y, c.z, 0.0]
        };

        [
            column(0),
            column(1),
            column(2),
            [self.position.x, self.position.y, self.position.z, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform_scales_by_radius() {
        let body = Body::sphere(Vec3::ZERO, 2.0, 1.0);
        let transform = BodyTransform::from(&body).model_matrix();

        assert_eq!(transform[0], [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(transform[1], [0.0, 2.0, 0.0, 0.0]);
        assert_eq!(transform[2], [0.0, 0.0, 2.0, 0.0]);
        assert_eq!(transform[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_translation_only() {
        let body = Body::sphere(Vec3::new(1.0, 2.0, 3.0), 1.0, 1.0);
        let transform = BodyTransform::from(&body).model_matrix();

        // Translation should be in the last column
        assert_eq!(transform[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_frame_casts_to_bytes() {
        let frame = [
            BodyTransform::from(&Body::sphere(Vec3::ZERO, 1.0, 1.0)),
            BodyTransform::from(&Body::sphere(Vec3::X, 1.0, 1.0)),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&frame);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<BodyTransform>());
        assert_eq!(std::mem::size_of::<BodyTransform>(), 36);
    }
}
