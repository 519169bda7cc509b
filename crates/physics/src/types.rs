pub use crate::math::{Mat3, Quat, Vec3};

/// Fixed logical timestep the host steps the simulation with (60 Hz).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Stable index of a body within a [`crate::PhysicsSim`].
///
/// Handles stay valid for the whole run because bodies are never added or
/// removed between resets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// RGBA colour a renderer draws a body with. The engine never reads it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A solid sphere rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    /// World-space position of the centre.
    pub position: Vec3,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    /// Radians per second, world space.
    pub angular_velocity: Vec3,
    /// `1 / mass`; zero marks an immovable body.
    pub inv_mass: f32,
    /// Body-space inverse inertia per unit mass. Multiplied by `inv_mass`
    /// to get the actual inverse inertia tensor.
    pub inv_inertia_body: Mat3,
    pub radius: f32,
    /// Restitution factor; the contact restitution is the product of both
    /// bodies' values.
    pub elasticity: f32,
    pub tint: Tint,
}

/// Global simulation parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysParams {
    /// Acceleration applied to every movable body each step.
    pub gravity: Vec3,
    /// Advance orientation from angular velocity during integration.
    ///
    /// Off by default: orientation then stays at its initial value and only
    /// angular velocity evolves.
    pub integrate_orientation: bool,
    /// Skip the velocity impulse for contacts whose bodies already move
    /// apart along the normal. Positional correction still runs.
    ///
    /// Off by default: every detected contact receives the impulse.
    pub skip_separating_contacts: bool,
}

impl Default for PhysParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -10.0, 0.0),
            integrate_orientation: false,
            skip_separating_contacts: false,
        }
    }
}

/// Snapshot of simulation counters and conserved quantities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsDebugInfo {
    pub num_bodies: usize,
    pub step_count: u64,
    pub contacts_last_step: usize,
    /// Linear plus rotational kinetic energy of all movable bodies.
    pub kinetic_energy: f32,
    /// Total linear momentum of all movable bodies.
    pub linear_momentum: Vec3,
}
