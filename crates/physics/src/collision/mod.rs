//! # Collision Detection and Response
//!
//! Sphere-sphere intersection producing a [`Contact`], and impulse-based
//! resolution of that contact. Detection never mutates a body; resolution
//! mutates exactly the two bodies of its contact.

mod broad_phase;
mod response;
mod sphere_sphere;

pub use broad_phase::*;
pub use response::*;
pub use sphere_sphere::*;

use crate::types::{BodyHandle, Vec3};

/// A single contact between two overlapping spheres.
///
/// Contacts are rebuilt every step and discarded after one resolution pass;
/// the handles are only meaningful for the step that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub handle_a: BodyHandle,
    pub handle_b: BodyHandle,
    /// Unit normal from body A towards body B
    pub normal: Vec3,
    /// Point on A's surface along the line of centres
    pub world_point_a: Vec3,
    /// Point on B's surface along the line of centres
    pub world_point_b: Vec3,
}

impl Contact {
    /// Overlap along the normal. Zero for touching spheres.
    #[must_use]
    pub fn penetration_depth(&self) -> f32 {
        (self.world_point_a - self.world_point_b).dot(self.normal)
    }
}

/// Combine restitution as the product of both bodies' elasticity.
#[must_use]
pub fn combine_elasticity(e1: f32, e2: f32) -> f32 {
    e1 * e2
}
