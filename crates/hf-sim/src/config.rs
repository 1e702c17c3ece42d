//! Simulator construction parameters.

use hf_core::{FieldSize, Point2D};

/// Where the traveler starts on the x axis.
pub const TRAVELER_START_X: f64 = 0.0;

/// The traveler's fixed initial velocity: two pixels per tick to the right.
pub const TRAVELER_VELOCITY: Point2D = Point2D::new(2.0, 0.0);

/// Everything needed to populate a field.
///
/// Typically assembled by the application crate from CLI flags or a JSON
/// file and passed to [`Simulator::from_config`][crate::Simulator::from_config].
/// Validation happens during construction, not here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulatorConfig {
    /// Field bounds; both dimensions must be positive.
    pub field_size: FieldSize,

    /// Number of hornets to scatter over the field.
    pub hornet_count: usize,

    /// Collider radius shared by every hornet.
    pub hornet_collider_radius: f64,

    /// `(min, max)` bounds for each hornet velocity component; `min < max`.
    pub hornet_velocity_range: (f64, f64),

    /// Collider radius of the traveler.
    pub traveler_collider_radius: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            field_size:               FieldSize::new(2400, 1200),
            hornet_count:             200,
            hornet_collider_radius:   5.0,
            hornet_velocity_range:    (-5.0, 5.0),
            traveler_collider_radius: 20.0,
        }
    }
}

impl SimulatorConfig {
    /// The traveler's starting point: left edge, vertically centred
    /// (integer division of the height).
    pub fn traveler_start(&self) -> Point2D {
        Point2D::new(TRAVELER_START_X, (self.field_size.height / 2) as f64)
    }
}
