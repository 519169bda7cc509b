use thiserror::Error;

/// Reasons a [`crate::Scenario`] is rejected before any body is created.
///
/// Everything past scenario construction is infallible: numerical
/// precondition violations inside a step are programming errors and panic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("scenario contains no bodies")]
    EmptyScenario,
    #[error("scenario has {0} bodies, more than a body handle can address")]
    TooManyBodies(usize),
    #[error("body {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("body {index}: inverse mass must be non-negative and finite, got {inv_mass}")]
    InvalidInverseMass { index: usize, inv_mass: f32 },
    #[error("body {index}: elasticity must be non-negative and finite, got {elasticity}")]
    InvalidElasticity { index: usize, elasticity: f32 },
    #[error("body {index}: {field} is not finite")]
    NonFiniteState { index: usize, field: &'static str },
    #[error("body {index}: orientation quaternion has zero length")]
    DegenerateOrientation { index: usize },
}
