//! hornet-field — runs the traveler-through-hornets simulation headlessly.
//!
//! Every tick can be paced to a frame rate, exported as a PNG image, and
//! recorded as CSV rows.  Ctrl-C ends the run cleanly after the current tick.
//!
//! ```text
//! RUST_LOG=debug hornet-field --max-iteration 600 --save-to-file --seed 42
//! ```

mod args;
mod observer;
mod pacing;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use hf_core::SimRng;
use hf_output::{CsvWriter, FrameExporter, FrameRenderer, SimOutputObserver, hud_lines};
use hf_sim::Simulator;

use args::Args;
use observer::RunObserver;
use pacing::FrameClock;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = args.validate() {
        error!("{e}");
        return Err(e);
    }

    if args.save_to_file {
        prepare_output_dir(&args.output_dir)?;
    } else if args.csv {
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("creating {}", args.output_dir.display()))?;
    }

    // ── Simulator ─────────────────────────────────────────────────────────────

    let config = args.sim_config()?;
    info!("Config: {config:?}");
    let mut rng = match args.seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    let mut sim = Simulator::from_config(&config, &mut rng).context("building the simulator")?;

    // ── Observers ─────────────────────────────────────────────────────────────

    let quit = Arc::new(AtomicBool::new(false));
    {
        let quit = Arc::clone(&quit);
        ctrlc::set_handler(move || quit.store(true, Ordering::Relaxed))
            .context("installing the Ctrl-C handler")?;
    }

    let clock = FrameClock::new(args.frame_rate, args.collision_frame_rate());
    let mut obs = RunObserver::new(Some(clock), Arc::clone(&quit));
    if args.csv {
        let writer = CsvWriter::new(&args.output_dir)
            .with_context(|| format!("opening CSV output in {}", args.output_dir.display()))?;
        obs.csv = Some(SimOutputObserver::new(writer, args.snapshot_interval));
    }
    if args.save_to_file {
        let renderer = FrameRenderer::new(args.render_config());
        obs.frames = Some(FrameExporter::new(renderer, &sim, &args.output_dir, args.max_iteration));
    }

    // ── Run ───────────────────────────────────────────────────────────────────

    info!("Starting the simulation");
    let started = Instant::now();
    let ticks = sim.run(args.max_iteration, &mut obs);
    let elapsed = started.elapsed();
    if quit.load(Ordering::Relaxed) {
        warn!("Interrupted after {ticks} iterations");
    }
    info!("Ending the simulation ({ticks} iterations in {:.2}s)", elapsed.as_secs_f64());

    for line in hud_lines(&sim, elapsed.as_millis(), args.max_iteration) {
        info!("Last HUD: {line}");
    }

    if let Some(e) = obs.take_error() {
        error!("output error: {e}");
        return Err(e).context("writing simulation output");
    }
    if args.writes_output() {
        info!("Output written to {}", args.output_dir.display());
    }
    Ok(())
}

/// Remove `dir` if it exists and recreate it empty.
fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("removing {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))
}
