//! `hf-sim` — tick loop orchestrator for the hornet field simulation.
//!
//! # The tick
//!
//! ```text
//! for each tick:
//!   ① Traveler  — move, bounce off edges; one run counted if velocity changed.
//!   ② Former    — keep the colliding-hornet set from the previous tick.
//!   ③ Hornets   — move, bounce off edges, in insertion order.
//!   ④ Collide   — recompute the colliding set; count entries not in ②.
//!   ⑤ Iteration — +1.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hf_core::SimRng;
//! use hf_sim::{NoopObserver, Simulator, SimulatorConfig};
//!
//! let mut rng = SimRng::new(42);
//! let mut sim = Simulator::from_config(&SimulatorConfig::default(), &mut rng)?;
//! sim.run(Some(1_000), &mut NoopObserver);
//! println!("{} collisions", sim.collision_count());
//! ```

pub mod config;
pub mod observer;
pub mod simulator;


pub use config::SimulatorConfig;
pub use observer::{NoopObserver, SimObserver};
pub use simulator::Simulator;
