//! Random initial placement for agents.
//!
//! Both samplers take an explicit [`SimRng`] so a seeded run always produces
//! the same field.

use hf_core::{FieldSize, HfError, HfResult, Position, SimRng, Velocity};

/// A position with each coordinate drawn uniformly from the whole numbers in
/// `[0, bound]` (both ends inclusive), independently per axis.
///
/// Fails with `InvalidArgument` if either field dimension is not positive.
pub fn random_position(field: FieldSize, rng: &mut SimRng) -> HfResult<Position> {
    let field = field.validate()?;
    let x = rng.gen_range(0..=field.width);
    let y = rng.gen_range(0..=field.height);
    Ok(Position::new(x as f64, y as f64))
}

/// A velocity with x and y each drawn independently and uniformly from
/// `[min, max)`.
///
/// Fails with `InvalidArgument` unless `min < max`, both are finite, and
/// `max - min` is finite.
pub fn random_velocity((min, max): (f64, f64), rng: &mut SimRng) -> HfResult<Velocity> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(HfError::invalid(format!(
            "velocity range min must be less than max, got ({min}, {max})"
        )));
    }
    if !(max - min).is_finite() {
        return Err(HfError::invalid(format!(
            "velocity range ({min}, {max}) is too wide to sample"
        )));
    }
    let x = rng.gen_range(min..max);
    let y = rng.gen_range(min..max);
    Ok(Velocity::new(x, y))
}
