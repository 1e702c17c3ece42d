//! Heads-up display text.

use hf_sim::Simulator;

/// The four HUD lines shown with each frame and logged at the end of a run.
///
/// `max_iteration` of `None` is shown as `inf`.
pub fn hud_lines(sim: &Simulator, elapsed_ms: u128, max_iteration: Option<u64>) -> Vec<String> {
    let max = max_iteration.map_or_else(|| "inf".to_owned(), |m| m.to_string());
    vec![
        format!("Iteration: {:>12} / {max}", sim.iteration()),
        format!("Time (ms): {elapsed_ms:>12}"),
        format!("Run count: {:>12}", sim.traveler_run_count()),
        format!("collision count: {:>6}", sim.collision_count()),
    ]
}
