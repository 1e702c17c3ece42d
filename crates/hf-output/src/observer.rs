//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hf_sim::{SimObserver, Simulator};

use crate::row::{AgentKind, AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    ///
    /// A tick summary is written every tick; agent snapshots every
    /// `snapshot_interval` iterations (0 disables snapshots).
    pub fn new(writer: W, snapshot_interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer now.  Needed after `run_ticks`, which never calls
    /// `on_sim_end`.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn snapshot_rows(sim: &Simulator) -> Vec<AgentSnapshotRow> {
        let iteration = sim.iteration();
        let colliding = sim.colliding_hornets();

        let traveler = AgentSnapshotRow::new(
            iteration,
            0,
            AgentKind::Traveler,
            sim.traveler(),
            !colliding.is_empty(),
        );
        let hornets = sim.hornets().iter().enumerate().map(|(i, h)| {
            AgentSnapshotRow::new(
                iteration,
                i as u32 + 1,
                AgentKind::Hornet,
                h,
                colliding.binary_search(&i).is_ok(),
            )
        });
        std::iter::once(traveler).chain(hornets).collect()
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, sim: &Simulator) {
        let row = TickSummaryRow {
            iteration:          sim.iteration(),
            traveler_run_count: sim.traveler_run_count(),
            collision_count:    sim.collision_count(),
            colliding_hornets:  sim.colliding_hornets().len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        if self.snapshot_interval > 0 && sim.iteration().is_multiple_of(self.snapshot_interval) {
            let rows = Self::snapshot_rows(sim);
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _sim: &Simulator) {
        self.finish();
    }
}
