#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::float_cmp, clippy::many_single_char_names)]
//! # Tumble Physics Engine
//!
//! A minimal, deterministic rigid-body engine for spheres.
//!
//! The crate advances a fixed set of spherical bodies frame by frame under
//! gravity, with pairwise collision detection and impulse-based contact
//! resolution. A host rendering loop resets the scenario, calls
//! [`PhysicsSim::step`] once per frame with a fixed timestep and reads body
//! transforms back for drawing. Windowing, input and rendering are the
//! host's business.
//!
//! ## Key Components
//!
//! -   **Math kernel:** [`Vec3`], the column-major [`Mat3`] and [`Quat`] in
//!     the [`math`] module.
//! -   **Bodies:** [`Body`] holds the per-sphere state; the [`body`] module
//!     derives world-space inertia and applies impulses.
//! -   **Collision:** sphere-sphere detection and contact resolution in
//!     [`collision`].
//! -   **Integration:** gravity and the per-body update in [`integrator`].
//! -   **Simulation:** [`PhysicsSim`] owns the bodies and runs each step; a
//!     [`Scenario`] describes what it is reset to.
//!
//! ## Usage
//!
//! ```rust
//! use tumble_physics::{PhysicsSim, Scenario, FIXED_DT};
//!
//! let mut sim = PhysicsSim::with_scenario(&Scenario::default())?;
//! sim.run(FIXED_DT, 60);
//!
//! let ball = sim.body(Scenario::BALL).unwrap();
//! assert!(ball.position.y < 5.0);
//! # Ok::<(), tumble_physics::PhysicsError>(())
//! ```

pub mod body;
pub mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod math;
pub mod simulation;
pub mod transform;
pub mod types;

pub use builder::{BodyDesc, Scenario};
pub use collision::Contact;
pub use error::PhysicsError;
pub use simulation::PhysicsSim;
pub use transform::BodyTransform;
pub use types::{
    Body, BodyHandle, Mat3, PhysParams, PhysicsDebugInfo, Quat, Tint, Vec3, FIXED_DT,
};
