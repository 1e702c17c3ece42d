//! Brute-force collision queries of one agent against a collection.
//!
//! Both functions are O(n) in `others`; there is no broad phase.

use crate::Agent;

/// `true` if `agent` collides with at least one of `others`.
///
/// Stops at the first match.
pub fn do_collide(agent: &Agent, others: &[Agent]) -> bool {
    others.iter().any(|other| agent.does_collide(other))
}

/// Indices into `others` of every agent colliding with `agent`, ascending.
pub fn colliding_indices(agent: &Agent, others: &[Agent]) -> Vec<usize> {
    others
        .iter()
        .enumerate()
        .filter(|(_, other)| agent.does_collide(other))
        .map(|(i, _)| i)
        .collect()
}
