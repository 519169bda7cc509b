//! # Physics Simulation Core
//!
//! [`PhysicsSim`] owns the body arena and drives one fixed step at a time:
//! gravity, all-pairs detection with immediate resolution, then
//! integration. It is single-threaded and deterministic for a given
//! scenario and timestep.

use crate::builder::Scenario;
use crate::collision::{
    detect_sphere_sphere_collision, get_potential_collision_pairs, resolve_contact,
};
use crate::error::PhysicsError;
use crate::integrator::{apply_gravity, integrate_bodies};
use crate::transform::BodyTransform;
use crate::types::{Body, BodyHandle, PhysParams, PhysicsDebugInfo, Vec3};

/// Main physics simulation container
#[derive(Debug, Clone)]
pub struct PhysicsSim {
    bodies: Vec<Body>,
    // Validated scenario replayed on every reset
    initial: Vec<Body>,

    pub params: PhysParams,

    step_count: u64,
    contacts_last_step: usize,
}

impl PhysicsSim {
    /// Create a simulation from a scenario with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any body description in `scenario` is invalid.
    pub fn with_scenario(scenario: &Scenario) -> Result<Self, PhysicsError> {
        Self::with_scenario_and_params(scenario, PhysParams::default())
    }

    /// # Errors
    ///
    /// Returns an error if any body description in `scenario` is invalid.
    pub fn with_scenario_and_params(
        scenario: &Scenario,
        params: PhysParams,
    ) -> Result<Self, PhysicsError> {
        let initial = scenario.build()?;
        tracing::debug!(bodies = initial.len(), "scenario built");

        let mut sim = Self {
            bodies: Vec::with_capacity(initial.len()),
            initial,
            params,
            step_count: 0,
            contacts_last_step: 0,
        };
        sim.reset();
        Ok(sim)
    }

    /// Discard all body state and restore the initial scenario exactly.
    /// Parameters are kept.
    pub fn reset(&mut self) {
        self.bodies.clone_from(&self.initial);
        self.step_count = 0;
        self.contacts_last_step = 0;
        tracing::debug!(bodies = self.bodies.len(), "simulation reset");
    }

    /// Advance the simulation by one fixed step of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        // 1. Gravity as a linear impulse on every movable body
        apply_gravity(&mut self.bodies, self.params.gravity, dt);

        // 2. Detect and immediately resolve contacts, one pass per pair
        self.contacts_last_step = self.detect_and_resolve_collisions();

        // 3. Integrate
        integrate_bodies(&mut self.bodies, dt, &self.params);

        self.step_count += 1;
    }

    /// Run `steps` fixed steps of `dt` seconds.
    pub fn run(&mut self, dt: f32, steps: usize) {
        for _ in 0..steps {
            self.step(dt);
        }
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    #[must_use]
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Replace the contents of `out` with this frame's drawing data, in body
    /// order.
    pub fn write_transforms(&self, out: &mut Vec<BodyTransform>) {
        out.clear();
        out.extend(self.bodies.iter().map(BodyTransform::from));
    }

    #[must_use]
    pub fn debug_info(&self) -> PhysicsDebugInfo {
        PhysicsDebugInfo {
            num_bodies: self.bodies.len(),
            step_count: self.step_count,
            contacts_last_step: self.contacts_last_step,
            kinetic_energy: self.bodies.iter().map(Body::kinetic_energy).sum(),
            linear_momentum: self
                .bodies
                .iter()
                .fold(Vec3::ZERO, |acc, body| acc + body.linear_momentum()),
        }
    }
}

// CPU collision pass
impl PhysicsSim {
    /// Returns the number of contacts resolved.
    fn detect_and_resolve_collisions(&mut self) -> usize {
        let mut resolved = 0;
        let params = self.params;

        for (handle_a, handle_b) in get_potential_collision_pairs(&self.bodies) {
            let (body_a, body_b) = self.body_pair_mut(handle_a, handle_b);
            let Some(contact) = detect_sphere_sphere_collision(handle_a, body_a, handle_b, body_b)
            else {
                continue;
            };

            let impulse = resolve_contact(body_a, body_b, &contact, &params);
            resolved += 1;

            tracing::trace!(
                a = handle_a.0,
                b = handle_b.0,
                depth = contact.penetration_depth(),
                impulse,
                "contact resolved"
            );
        }

        resolved
    }

    /// Disjoint mutable borrows of two bodies. `a` must precede `b`.
    fn body_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> (&mut Body, &mut Body) {
        debug_assert!(a < b, "body pair must be ordered");
        let (before, after) = self.bodies.split_at_mut(b.index());
        (&mut before[a.index()], &mut after[0])
    }
}
