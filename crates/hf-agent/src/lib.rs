//! `hf-agent` — mobile, collidable agents for the hornet field simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`collider`]    | `Collider` (validated, immutable radius)                  |
//! | [`agent`]       | `Agent` with the move-then-bounce `update` rule           |
//! | [`sampling`]    | `random_position`, `random_velocity`                      |
//! | [`collision`]   | `do_collide`, `colliding_indices` (brute-force)           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `Agent` and `Collider`.             |

pub mod agent;
pub mod collider;
pub mod collision;
pub mod sampling;


pub use agent::Agent;
pub use collider::Collider;
pub use collision::{colliding_indices, do_collide};
pub use sampling::{random_position, random_velocity};
