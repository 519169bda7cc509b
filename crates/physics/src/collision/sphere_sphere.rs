//! Sphere-sphere intersection test

use super::Contact;
use crate::types::{Body, BodyHandle, Vec3};

/// Normal used when both centres coincide and the line of centres is
/// undefined.
const COINCIDENT_FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Detect overlap between two spheres.
///
/// Spheres touching exactly at their surfaces count as intersecting. The
/// test is purely geometric: filtering out pairs of immovable bodies is the
/// caller's job.
#[must_use]
pub fn detect_sphere_sphere_collision(
    handle_a: BodyHandle,
    body_a: &Body,
    handle_b: BodyHandle,
    body_b: &Body,
) -> Option<Contact> {
    let delta = body_b.position - body_a.position;
    let distance_squared = delta.length_squared();
    let radius_sum = body_a.radius + body_b.radius;

    if distance_squared > radius_sum * radius_sum {
        return None;
    }

    let normal = if distance_squared > 0.0 {
        delta.normalize()
    } else {
        COINCIDENT_FALLBACK_NORMAL
    };

    Some(Contact {
        handle_a,
        handle_b,
        normal,
        world_point_a: body_a.position + normal * body_a.radius,
        world_point_b: body_b.position - normal * body_b.radius,
    })
}
