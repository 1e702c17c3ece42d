//! `hf-output` — everything that turns simulator state into pixels or rows.
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`color`]      | `Color`, named palette, lighten/darken                    |
//! | [`canvas`]     | `Canvas` trait, `PixelCanvas` raster with PNG export      |
//! | [`render`]     | `RenderConfig`, `FrameRenderer`                           |
//! | [`hud`]        | heads-up text lines                                       |
//! | [`frames`]     | `FrameExporter` observer writing one image per tick       |
//! | [`csv`]        | `CsvWriter` (`agent_snapshots.csv`, `tick_summaries.csv`) |
//! | [`observer`]   | `SimOutputObserver` bridging `SimObserver` to a writer    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, 1);
//! sim.run(Some(1_000), &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod canvas;
pub mod color;
pub mod csv;
pub mod error;
pub mod frames;
pub mod hud;
pub mod observer;
pub mod render;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use canvas::{Canvas, PixelCanvas};
pub use color::Color;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frames::FrameExporter;
pub use hud::hud_lines;
pub use observer::SimOutputObserver;
pub use render::{FrameRenderer, RenderConfig};
pub use row::{AgentKind, AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
