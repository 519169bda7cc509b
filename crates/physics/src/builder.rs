//! # Scenario Builder
//!
//! Describes the fixed set of bodies a simulation starts from (and returns
//! to on reset) and validates it before any [`Body`] is created.

use crate::body::sphere_inv_inertia;
use crate::error::PhysicsError;
use crate::types::{Body, BodyHandle, Quat, Tint, Vec3};

/// Description of one sphere in a [`Scenario`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub position: Vec3,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub inv_mass: f32,
    pub radius: f32,
    pub elasticity: f32,
    pub tint: Tint,
}

impl BodyDesc {
    /// A resting sphere of unit mass at the origin.
    #[must_use]
    pub fn sphere(radius: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            inv_mass: 1.0,
            radius,
            elasticity: 0.5,
            tint: Tint::default(),
        }
    }

    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_inv_mass(mut self, inv_mass: f32) -> Self {
        self.inv_mass = inv_mass;
        self
    }

    /// Infinite mass: the body never moves or spins.
    #[must_use]
    pub fn immovable(self) -> Self {
        self.with_inv_mass(0.0)
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_linear_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_angular_velocity(mut self, velocity: Vec3) -> Self {
        self.angular_velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    #[must_use]
    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    fn build(&self, index: usize) -> Result<Body, PhysicsError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(PhysicsError::InvalidRadius { index, radius: self.radius });
        }
        if !(self.inv_mass.is_finite() && self.inv_mass >= 0.0) {
            return Err(PhysicsError::InvalidInverseMass { index, inv_mass: self.inv_mass });
        }
        if !(self.elasticity.is_finite() && self.elasticity >= 0.0) {
            return Err(PhysicsError::InvalidElasticity { index, elasticity: self.elasticity });
        }
        for (field, value) in [
            ("position", self.position),
            ("linear velocity", self.linear_velocity),
            ("angular velocity", self.angular_velocity),
        ] {
            if !value.is_finite() {
                return Err(PhysicsError::NonFiniteState { index, field });
            }
        }
        if !self.orientation.is_finite() {
            return Err(PhysicsError::NonFiniteState { index, field: "orientation" });
        }
        if self.orientation.length_squared() <= 0.0 {
            return Err(PhysicsError::DegenerateOrientation { index });
        }

        Ok(Body {
            position: self.position,
            orientation: self.orientation.normalize(),
            linear_velocity: self.linear_velocity,
            angular_velocity: self.angular_velocity,
            inv_mass: self.inv_mass,
            inv_inertia_body: sphere_inv_inertia(self.radius),
            radius: self.radius,
            elasticity: self.elasticity,
            tint: self.tint,
        })
    }
}

/// The ordered set of bodies a simulation is (re)initialized with.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    bodies: Vec<BodyDesc>,
}

impl Scenario {
    /// Handle of the falling ball in the default scenario.
    pub const BALL: BodyHandle = BodyHandle(0);
    /// Handle of the ground sphere in the default scenario.
    pub const GROUND: BodyHandle = BodyHandle(1);

    /// An empty scenario. At least one body must be added before it builds.
    #[must_use]
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    #[must_use]
    pub fn with_body(mut self, body: BodyDesc) -> Self {
        self.bodies.push(body);
        self
    }

    #[must_use]
    pub fn bodies(&self) -> &[BodyDesc] {
        &self.bodies
    }

    /// Validate every description and create the bodies.
    ///
    /// # Errors
    ///
    /// Returns the first invalid description found, or
    /// [`PhysicsError::EmptyScenario`] / [`PhysicsError::TooManyBodies`].
    pub fn build(&self) -> Result<Vec<Body>, PhysicsError> {
        if self.bodies.is_empty() {
            return Err(PhysicsError::EmptyScenario);
        }
        if u32::try_from(self.bodies.len()).is_err() {
            return Err(PhysicsError::TooManyBodies(self.bodies.len()));
        }

        self.bodies
            .iter()
            .enumerate()
            .map(|(index, desc)| desc.build(index))
            .collect()
    }
}

impl Default for Scenario {
    /// A unit ball dropped from 5 m onto an immovable sphere so large it
    /// reads as flat ground, with its top at the origin.
    fn default() -> Self {
        Self::new()
            .with_body(
                BodyDesc::sphere(1.0)
                    .at(Vec3::new(0.0, 5.0, 0.0))
                    .with_inv_mass(1.0)
                    .with_elasticity(0.5)
                    .with_tint(Tint::RED),
            )
            .with_body(
                BodyDesc::sphere(1000.0)
                    .at(Vec3::new(0.0, -1000.0, 0.0))
                    .immovable()
                    .with_elasticity(0.5)
                    .with_tint(Tint::GREEN),
            )
    }
}
