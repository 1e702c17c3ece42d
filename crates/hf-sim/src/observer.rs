//! Simulation observer trait for progress reporting, output, and stopping.

use crate::Simulator;

/// Callbacks invoked by [`Simulator::run`] and [`Simulator::run_ticks`] at
/// tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access to the
/// simulator; the cached colliding set is already fresh at `on_tick_end`.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, sim: &Simulator) {
///         if sim.iteration() % self.interval == 0 {
///             println!("iteration {}: {} collisions", sim.iteration(), sim.collision_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each tick; `iteration` is the count before the tick.
    fn on_tick_start(&mut self, _iteration: u64) {}

    /// Called after each tick has fully updated the simulator.
    fn on_tick_end(&mut self, _sim: &Simulator) {}

    /// Polled by [`Simulator::run`] after every tick.  Returning `true` ends
    /// the run before the next tick starts.
    fn should_stop(&mut self) -> bool {
        false
    }

    /// Called once when [`Simulator::run`] returns.
    fn on_sim_end(&mut self, _sim: &Simulator) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
