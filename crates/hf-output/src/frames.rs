//! Image-sequence export: one PNG frame per tick.

use std::path::{Path, PathBuf};
use std::time::Instant;

use hf_sim::{SimObserver, Simulator};
use log::{debug, trace};

use crate::{Canvas, FrameRenderer, OutputError, PixelCanvas, hud_lines};

/// File name of the frame written after `iteration` ticks.
pub fn frame_file_name(iteration: u64) -> String {
    format!("frame_{iteration:05}.png")
}

/// A [`SimObserver`] that renders every tick into a [`PixelCanvas`] and
/// writes it to `dir` as `frame_NNNNN.png`.
///
/// The HUD clock starts at the first tick of the run, not at construction.
///
/// Like [`SimOutputObserver`][crate::SimOutputObserver], write errors are
/// kept (first one only) and retrieved with [`take_error`][Self::take_error].
pub struct FrameExporter {
    renderer:      FrameRenderer,
    canvas:        PixelCanvas,
    dir:           PathBuf,
    max_iteration: Option<u64>,
    started:       Option<Instant>,
    frames:        u64,
    last_error:    Option<OutputError>,
}

impl FrameExporter {
    /// The canvas matches the field size; `dir` must already exist.
    pub fn new(renderer: FrameRenderer, sim: &Simulator, dir: &Path, max_iteration: Option<u64>) -> Self {
        let field = sim.field_size();
        Self {
            renderer,
            canvas: PixelCanvas::new(field.width.max(0) as u32, field.height.max(0) as u32),
            dir: dir.to_path_buf(),
            max_iteration,
            started: None,
            frames: 0,
            last_error: None,
        }
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recently rendered frame.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }
}

impl SimObserver for FrameExporter {
    fn on_tick_start(&mut self, _iteration: u64) {
        self.started.get_or_insert_with(Instant::now);
    }

    fn on_tick_end(&mut self, sim: &Simulator) {
        self.renderer.draw(sim, &mut self.canvas);
        let elapsed = self.started.map_or(0, |t| t.elapsed().as_millis());
        let hud = hud_lines(sim, elapsed, self.max_iteration);
        trace!("{}", hud.join(" | "));
        self.canvas.overlay_text(&hud);

        let path = self.dir.join(frame_file_name(sim.iteration()));
        match self.canvas.save_png(&path) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }

    fn on_sim_end(&mut self, _sim: &Simulator) {
        debug!("{} frames written to {}", self.frames, self.dir.display());
    }
}
