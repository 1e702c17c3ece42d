//! Rectangular simulation bounds.

use crate::{HfError, HfResult};

/// Width and height of the field, in whole pixels.
///
/// The field spans `[0, width] × [0, height]`, both ends inclusive.  Values
/// are signed so that a bad configuration is representable and can be
/// rejected by [`FieldSize::validate`] rather than wrapping silently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSize {
    pub width:  i32,
    pub height: i32,
}

impl FieldSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Fails with `InvalidArgument` unless both dimensions are positive.
    pub fn validate(self) -> HfResult<Self> {
        if self.width <= 0 || self.height <= 0 {
            return Err(HfError::invalid(format!(
                "field size must be positive, got {self}"
            )));
        }
        Ok(self)
    }

    /// `true` if `x` lies within `[0, width]`.
    #[inline]
    pub fn contains_x(self, x: f64) -> bool {
        (0.0..=self.width as f64).contains(&x)
    }

    /// `true` if `y` lies within `[0, height]`.
    #[inline]
    pub fn contains_y(self, y: f64) -> bool {
        (0.0..=self.height as f64).contains(&y)
    }
}

impl std::fmt::Display for FieldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
