//! All-pairs broad phase

use crate::types::{Body, BodyHandle};

/// Every unordered pair of distinct bodies where at least one can move.
///
/// Pairs of immovable bodies never need resolution, and resolving them would
/// divide by a zero combined inverse mass.
#[must_use]
pub fn get_potential_collision_pairs(bodies: &[Body]) -> Vec<(BodyHandle, BodyHandle)> {
    let mut pairs = Vec::new();

    for (i, body_a) in bodies.iter().enumerate() {
        for (j, body_b) in bodies.iter().enumerate().skip(i + 1) {
            if body_a.has_infinite_mass() && body_b.has_infinite_mass() {
                continue;
            }
            pairs.push((handle_of(i), handle_of(j)));
        }
    }

    pairs
}

/// Body counts are bounded by `u32` when a scenario is built.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn handle_of(index: usize) -> BodyHandle {
    BodyHandle(index as u32)
}
