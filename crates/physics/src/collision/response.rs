//! Impulse-based contact response

use super::{combine_elasticity, Contact};
use crate::types::{Body, PhysParams};

/// Resolve a single contact: one normal impulse followed by a positional
/// projection that leaves the spheres just touching.
///
/// The impulse `j = -(1 + e) * (vab . n) / (inv_mass_a + inv_mass_b)` is
/// applied as a linear impulse, `+j * n` to A and `-j * n` to B. With
/// [`PhysParams::skip_separating_contacts`] set, no impulse is applied while
/// the bodies already move apart along the normal. The projection always
/// runs. No friction is modelled.
///
/// Returns the signed impulse magnitude applied to body A along the normal.
///
/// # Panics
///
/// Panics if both bodies are immovable. Such pairs are filtered out before
/// detection.
pub fn resolve_contact(
    body_a: &mut Body,
    body_b: &mut Body,
    contact: &Contact,
    params: &PhysParams,
) -> f32 {
    let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
    assert!(
        total_inv_mass > 0.0,
        "contact between two immovable bodies cannot be resolved"
    );

    let vab = body_a.linear_velocity - body_b.linear_velocity;
    let approach_speed = vab.dot(contact.normal);

    let mut impulse_j = 0.0;
    if approach_speed > 0.0 || !params.skip_separating_contacts {
        let elasticity = combine_elasticity(body_a.elasticity, body_b.elasticity);
        impulse_j = -(1.0 + elasticity) * approach_speed / total_inv_mass;
        let impulse = contact.normal * impulse_j;

        if !body_a.has_infinite_mass() {
            body_a.apply_linear_impulse(impulse);
        }
        if !body_b.has_infinite_mass() {
            body_b.apply_linear_impulse(-impulse);
        }
    }

    // Move the bodies apart along the line between the surface points,
    // heavier bodies moving less.
    let ds = contact.world_point_b - contact.world_point_a;
    let t_a = body_a.inv_mass / total_inv_mass;
    let t_b = body_b.inv_mass / total_inv_mass;

    body_a.position += ds * t_a;
    body_b.position -= ds * t_b;

    impulse_j
}
