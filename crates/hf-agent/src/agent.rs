//! The `Agent` entity and its per-tick movement rule.

use hf_core::{FieldSize, Position, Velocity};

use crate::Collider;

/// A moving, collidable circle.
///
/// Position and velocity are plain public fields: they change every tick,
/// and callers (tests, scripted scenarios) may overwrite them directly.  The
/// collider is private so its radius cannot change after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Agent {
    pub position: Position,
    pub velocity: Velocity,
    collider:     Collider,
}

impl Agent {
    pub fn new(position: Position, velocity: Velocity, collider: Collider) -> Self {
        Self { position, velocity, collider }
    }

    #[inline]
    pub fn collider(&self) -> Collider {
        self.collider
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.collider.radius()
    }

    /// Advance one tick inside `field`.
    ///
    /// Moves by the current velocity first, then negates each velocity
    /// component whose axis ended up outside `[0, bound]`.  The position is
    /// not clamped: an agent may sit just past the edge for one tick before
    /// the reversed velocity carries it back.
    pub fn update(&mut self, field: FieldSize) {
        self.position += self.velocity;

        if !field.contains_x(self.position.x) {
            self.velocity.x = -self.velocity.x;
        }
        if !field.contains_y(self.position.y) {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Euclidean distance between the two agents' centres.
    #[inline]
    pub fn distance(&self, other: &Agent) -> f64 {
        self.position.distance(other.position)
    }

    /// `true` if the two circles overlap.
    ///
    /// Strict inequality: circles that exactly touch do not collide.
    #[inline]
    pub fn does_collide(&self, other: &Agent) -> bool {
        self.distance(other) < self.radius() + other.radius()
    }
}
