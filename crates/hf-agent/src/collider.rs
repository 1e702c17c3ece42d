//! Circular collision shape.

use hf_core::{HfError, HfResult};

/// A circle centred on its agent's position.
///
/// The radius is fixed at construction and is never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Collider {
    radius: f64,
}

impl Collider {
    /// Fails with `InvalidArgument` if `radius` is negative or NaN.
    pub fn new(radius: f64) -> HfResult<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(HfError::invalid(format!(
                "collider radius cannot be negative, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(self) -> f64 {
        self.radius
    }
}
