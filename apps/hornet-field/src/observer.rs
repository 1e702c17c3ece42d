//! The run observer: CSV tables, frame export, pacing, and Ctrl-C.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use hf_output::{CsvWriter, FrameExporter, OutputError, SimOutputObserver};
use hf_sim::{SimObserver, Simulator};

use crate::pacing::FrameClock;

/// Fans each callback out to the optional output observers, then paces the
/// loop.  Stops the run once `quit` is raised.
pub struct RunObserver {
    pub csv:    Option<SimOutputObserver<CsvWriter>>,
    pub frames: Option<FrameExporter>,
    clock:      Option<FrameClock>,
    quit:       Arc<AtomicBool>,
}

impl RunObserver {
    /// `clock` of `None` runs as fast as possible.
    pub fn new(clock: Option<FrameClock>, quit: Arc<AtomicBool>) -> Self {
        Self { csv: None, frames: None, clock, quit }
    }

    /// First stored write error, CSV before frames.
    pub fn take_error(&mut self) -> Option<OutputError> {
        let csv = self.csv.as_mut().and_then(SimOutputObserver::take_error);
        let frames = self.frames.as_mut().and_then(FrameExporter::take_error);
        csv.or(frames)
    }
}

impl SimObserver for RunObserver {
    fn on_tick_start(&mut self, iteration: u64) {
        debug!("Iteration: {iteration}");
    }

    fn on_tick_end(&mut self, sim: &Simulator) {
        if let Some(csv) = &mut self.csv {
            csv.on_tick_end(sim);
        }
        if let Some(frames) = &mut self.frames {
            frames.on_tick_end(sim);
        }
        if let Some(clock) = &mut self.clock {
            clock.wait(!sim.colliding_hornets().is_empty());
        }
    }

    fn should_stop(&mut self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    fn on_sim_end(&mut self, sim: &Simulator) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(sim);
        }
        if let Some(frames) = &mut self.frames {
            frames.on_sim_end(sim);
        }
    }
}
