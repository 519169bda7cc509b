//! # Math Kernel
//!
//! Small single-precision value types used throughout the engine: [`Vec3`],
//! a column-major [`Mat3`] and the orientation [`Quat`]. All operations are
//! pure; nothing here mutates through a shared reference.
//!
//! The types are `#[repr(C)]` and `bytemuck::Pod` so they can be copied into
//! vertex or uniform buffers by a renderer without conversion.

mod mat3;
mod quat;
mod vec3;

pub use mat3::Mat3;
pub use quat::Quat;
pub use vec3::Vec3;
