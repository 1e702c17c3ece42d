//! `hf-core` — foundational types for the hornet field simulation.
//!
//! This crate is a dependency of every other `hf-*` crate.  It has no `hf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point2D` (`Position`, `Velocity`), approx equality   |
//! | [`field`]       | `FieldSize` simulation bounds                         |
//! | [`rng`]         | `SimRng` seeded simulation RNG                        |
//! | [`error`]       | `HfError`, `HfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod field;
pub mod geo;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HfError, HfResult};
pub use field::FieldSize;
pub use geo::{Point2D, Position, Velocity};
pub use rng::SimRng;
