//! # Rigid Body Model
//!
//! Derived quantities of a [`Body`] (world-space inertia, centre of mass)
//! and the impulse operations the contact resolver drives.

use crate::types::{Body, Mat3, Quat, Tint, Vec3};

/// Angular speed cap in rad/s. Keeps degenerate contacts from spinning a
/// body up without bound.
pub const MAX_ANGULAR_SPEED: f32 = 30.0;

/// Centre of mass in body space. Spheres are symmetric about their origin.
const CENTER_OF_MASS_BODY: Vec3 = Vec3::ZERO;

/// Inverse inertia tensor per unit mass of a solid sphere, `1 / (2r²/5)`.
#[must_use]
pub fn sphere_inv_inertia(radius: f32) -> Mat3 {
    Mat3::scale(1.0 / (0.4 * radius * radius))
}

impl Body {
    /// A resting, unrotated sphere.
    #[must_use]
    pub fn sphere(position: Vec3, radius: f32, inv_mass: f32) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            inv_mass,
            inv_inertia_body: sphere_inv_inertia(radius),
            radius,
            elasticity: 0.5,
            tint: Tint::default(),
        }
    }

    #[must_use]
    pub fn has_infinite_mass(&self) -> bool {
        self.inv_mass == 0.0
    }

    #[must_use]
    pub fn mass(&self) -> f32 {
        if self.has_infinite_mass() {
            f32::INFINITY
        } else {
            1.0 / self.inv_mass
        }
    }

    /// Rotation matrix of the current orientation.
    #[must_use]
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rotation(self.orientation)
    }

    /// `R · (I⁻¹_body · m⁻¹) · Rᵗ` for the current orientation.
    ///
    /// Orientation may change inside a step, so this is never cached.
    #[must_use]
    pub fn inv_inertia_tensor_world(&self) -> Mat3 {
        let rotation = self.rotation();
        rotation * (self.inv_inertia_body * self.inv_mass) * rotation.transpose()
    }

    /// World-space inertia tensor.
    ///
    /// # Panics
    ///
    /// Panics for immovable bodies, whose inverse inertia is the zero matrix.
    #[must_use]
    pub fn inertia_tensor_world(&self) -> Mat3 {
        self.inv_inertia_tensor_world().inverse()
    }

    #[must_use]
    pub fn center_of_mass_world(&self) -> Vec3 {
        self.rotation() * CENTER_OF_MASS_BODY + self.position
    }

    pub fn apply_linear_impulse(&mut self, impulse: Vec3) {
        self.linear_velocity += impulse * self.inv_mass;
    }

    /// Adds `I⁻¹_world · impulse` to the angular velocity, then rescales it
    /// down to [`MAX_ANGULAR_SPEED`] if it exceeds that.
    pub fn apply_angular_impulse(&mut self, angular_impulse: Vec3) {
        self.angular_velocity += self.inv_inertia_tensor_world() * angular_impulse;

        if self.angular_velocity.length_squared() > MAX_ANGULAR_SPEED * MAX_ANGULAR_SPEED {
            self.angular_velocity = self.angular_velocity.normalize() * MAX_ANGULAR_SPEED;
        }
    }

    /// Applies `impulse` at world-space `point`, splitting it into a linear
    /// part and the torque impulse about the centre of mass.
    ///
    /// Immovable bodies ignore impulses.
    pub fn apply_impulse(&mut self, point: Vec3, impulse: Vec3) {
        if self.has_infinite_mass() {
            return;
        }

        self.apply_linear_impulse(impulse);

        let r = point - self.center_of_mass_world();
        self.apply_angular_impulse(r.cross(impulse));
    }

    #[must_use]
    pub fn linear_momentum(&self) -> Vec3 {
        if self.has_infinite_mass() {
            return Vec3::ZERO;
        }
        self.linear_velocity * self.mass()
    }

    /// Translational plus rotational kinetic energy. Zero for immovable
    /// bodies.
    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        if self.has_infinite_mass() {
            return 0.0;
        }
        let linear = 0.5 * self.mass() * self.linear_velocity.length_squared();
        let angular_momentum = self.inertia_tensor_world() * self.angular_velocity;
        let rotational = 0.5 * self.angular_velocity.dot(angular_momentum);
        linear + rotational
    }
}
