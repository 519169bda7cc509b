//! # Physics Integration
//!
//! Gravity application and the per-body explicit Euler update of position,
//! angular velocity and (optionally) orientation.

use crate::types::{Body, PhysParams, Quat, Vec3};

/// Apply one step's worth of gravity to every movable body as a linear
/// impulse, `gravity · dt · mass`.
pub fn apply_gravity(bodies: &mut [Body], gravity: Vec3, dt: f32) {
    for body in bodies.iter_mut().filter(|b| !b.has_infinite_mass()) {
        let impulse = gravity * dt * body.mass();
        body.apply_linear_impulse(impulse);
    }
}

/// Integrate every body over `dt`.
pub fn integrate_bodies(bodies: &mut [Body], dt: f32, params: &PhysParams) {
    for body in bodies.iter_mut() {
        update_body(body, dt, params);
    }
}

/// Advance a single body over `dt`.
///
/// Position moves with the current linear velocity; linear velocity itself
/// is only changed by gravity and contact impulses. Angular velocity picks up
/// the torque-free gyroscopic term `I⁻¹ · (ω × (I · ω))` in world space.
pub fn update_body(body: &mut Body, dt: f32, params: &PhysParams) {
    body.position += body.linear_velocity * dt;

    // Immovable bodies have a singular inertia tensor and never spin.
    if body.has_infinite_mass() {
        return;
    }

    let inv_inertia_world = body.inv_inertia_tensor_world();
    let inertia_world = inv_inertia_world.inverse();
    let omega = body.angular_velocity;
    let alpha = inv_inertia_world * omega.cross(inertia_world * omega);
    body.angular_velocity += alpha * dt;

    if params.integrate_orientation {
        integrate_orientation(body, dt);
    }
}

/// Compose the rotation `ω · dt` onto the orientation and renormalize.
fn integrate_orientation(body: &mut Body, dt: f32) {
    let angle = body.angular_velocity.length() * dt;
    if angle <= 0.0 {
        return;
    }

    let delta = Quat::from_axis_angle(body.angular_velocity, angle);
    body.orientation = (delta * body.orientation).normalize();
}
