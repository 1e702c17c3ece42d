//! Command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use hf_core::FieldSize;
use hf_output::{Color, RenderConfig};
use hf_sim::SimulatorConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hornet Field: a traveler crossing a field of bouncing hornets", long_about = None)]
pub struct Args {
    /// Number of hornet agents in the field.
    #[arg(long, default_value_t = 200)]
    pub hornet_count: usize,

    /// The color of hornet agents.
    #[arg(long, default_value = "yellow", value_parser = parse_color)]
    pub hornet_color: Color,

    /// The radius of the collider of hornet agents.
    #[arg(long, default_value_t = 5.0)]
    pub hornet_collider_radius: f64,

    /// The range from which random hornet velocity components are drawn.
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        default_values_t = [-5.0, 5.0],
        allow_negative_numbers = true
    )]
    pub hornet_velocity_range: Vec<f64>,

    /// The color of the traveler agent.
    #[arg(long, default_value = "blue", value_parser = parse_color)]
    pub traveler_color: Color,

    /// The radius of the collider of the traveler agent.
    #[arg(long, default_value_t = 20.0)]
    pub traveler_collider_radius: f64,

    /// The color of the traveler agent while in collision.
    #[arg(long, default_value = "red", value_parser = parse_color)]
    pub traveler_collision_color: Color,

    /// The color of the field (lightened when drawn, e.g. black -> gray).
    #[arg(long, default_value = "black", value_parser = parse_color)]
    pub field_color: Color,

    /// The size of the field.
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [2400, 1200])]
    pub field_size: Vec<i32>,

    /// Frames per second.
    #[arg(long, default_value_t = 200.0)]
    pub frame_rate: f64,

    /// Frames per second while the traveler is colliding [default: --frame-rate].
    #[arg(long)]
    pub collision_frame_rate: Option<f64>,

    /// Stop after this many iterations [default: run until interrupted].
    #[arg(long)]
    pub max_iteration: Option<u64>,

    /// Save every frame as an image in --output-dir.
    #[arg(long)]
    pub save_to_file: bool,

    /// Directory for frames and CSV tables.
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Seed for a reproducible field [default: from entropy].
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON simulator config; replaces the hornet, traveler and field flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write agent snapshots and tick summaries as CSV into --output-dir.
    #[arg(long)]
    pub csv: bool,

    /// Iterations between agent snapshot rows (0 = summaries only).
    #[arg(long, default_value_t = 1)]
    pub snapshot_interval: u64,
}

impl Args {
    /// Flag combinations clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.save_to_file && self.max_iteration.is_none() {
            bail!("--max-iteration must be set if --save-to-file is true");
        }
        for (flag, rate) in [
            ("--frame-rate", self.frame_rate),
            ("--collision-frame-rate", self.collision_frame_rate()),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                bail!("{flag} must be a positive number, got {rate}");
            }
        }
        Ok(())
    }

    pub fn collision_frame_rate(&self) -> f64 {
        self.collision_frame_rate.unwrap_or(self.frame_rate)
    }

    /// Whether anything is written under `output_dir`.
    pub fn writes_output(&self) -> bool {
        self.save_to_file || self.csv
    }

    /// The simulator config from `--config` if given, otherwise from flags.
    pub fn sim_config(&self) -> Result<SimulatorConfig> {
        if let Some(path) = &self.config {
            return load_config(path);
        }
        Ok(SimulatorConfig {
            field_size:               FieldSize::new(self.field_size[0], self.field_size[1]),
            hornet_count:             self.hornet_count,
            hornet_collider_radius:   self.hornet_collider_radius,
            hornet_velocity_range:    (self.hornet_velocity_range[0], self.hornet_velocity_range[1]),
            traveler_collider_radius: self.traveler_collider_radius,
        })
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(
            self.field_color,
            self.hornet_color,
            self.traveler_color,
            self.traveler_collision_color,
        )
    }
}

/// Read a [`SimulatorConfig`] from JSON.  Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<SimulatorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|_| {
        let names: Vec<_> = Color::names().collect();
        format!("unknown color '{s}' (choose from {})", names.join(", "))
    })
}
