//! The `Simulator` struct and its tick transition.

use hf_agent::{Agent, Collider, colliding_indices, random_position, random_velocity};
use hf_core::{FieldSize, HfResult, SimRng};
use log::{debug, trace};

use crate::config::TRAVELER_VELOCITY;
use crate::{SimObserver, SimulatorConfig};

/// Upper bound on the hornet vector reserved before sampling starts, so an
/// oversized `hornet_count` fails on its first bad sample, not on allocation.
const MAX_PREALLOC_HORNETS: usize = 1 << 16;

/// The traveler/hornet field and its accumulated counters.
///
/// `Simulator` has no modes and no terminal state: [`tick`](Self::tick) is
/// the only transition and the caller decides when to stop applying it.
///
/// # Collision cache
///
/// The simulator keeps the ascending list of hornet indices that overlapped
/// the traveler when it was last checked.  [`tick`](Self::tick) uses the list
/// left by the previous tick as the "former" set when counting newly begun
/// collisions, then replaces it.  [`collision`](Self::collision) also
/// replaces it, so calling `collision()` after moving agents by hand changes
/// what the next tick treats as already colliding.
pub struct Simulator {
    traveler:           Agent,
    hornets:            Vec<Agent>,
    field_size:         FieldSize,
    /// Hornet indices overlapping the traveler at the last check, ascending.
    colliding:          Vec<usize>,
    iteration:          u64,
    traveler_run_count: u64,
    collision_count:    u64,
}

impl Simulator {
    /// Wrap explicitly constructed agents.  All counters start at zero and
    /// the collision cache starts empty.
    pub fn new(traveler: Agent, hornets: Vec<Agent>, field_size: FieldSize) -> Self {
        Self {
            traveler,
            hornets,
            field_size,
            colliding: Vec::new(),
            iteration: 0,
            traveler_run_count: 0,
            collision_count: 0,
        }
    }

    /// Populate a field from `config`, drawing hornet placement from `rng`.
    ///
    /// The traveler starts at the left edge, vertically centred, moving right
    /// at [`TRAVELER_VELOCITY`].  Each hornet gets an independent random
    /// position over the whole field and an independent random velocity from
    /// the configured range.
    ///
    /// Fails with `InvalidArgument` if either radius is negative, the field
    /// is empty, or the velocity range is inverted.  Nothing is returned on
    /// failure.
    pub fn from_config(config: &SimulatorConfig, rng: &mut SimRng) -> HfResult<Self> {
        let field_size = config.field_size.validate()?;

        let traveler = Agent::new(
            config.traveler_start(),
            TRAVELER_VELOCITY,
            Collider::new(config.traveler_collider_radius)?,
        );

        let hornet_collider = Collider::new(config.hornet_collider_radius)?;
        let mut hornets = Vec::with_capacity(config.hornet_count.min(MAX_PREALLOC_HORNETS));
        for _ in 0..config.hornet_count {
            let position = random_position(field_size, rng)?;
            let velocity = random_velocity(config.hornet_velocity_range, rng)?;
            hornets.push(Agent::new(position, velocity, hornet_collider));
        }

        debug!(
            "simulator ready: field {field_size}, {} hornets, traveler at {}",
            hornets.len(),
            traveler.position,
        );

        Ok(Self::new(traveler, hornets, field_size))
    }

    // ── Transition ────────────────────────────────────────────────────────

    /// Advance the whole field by one step.
    ///
    /// 1. Move the traveler; if its velocity changed (a bounce on either or
    ///    both axes) count one run.
    /// 2. Take the colliding set left by the previous check as "former".
    /// 3. Move every hornet.
    /// 4. Recompute the colliding set and count each index not in "former"
    ///    as a newly begun collision.
    /// 5. Bump the iteration counter.
    pub fn tick(&mut self) {
        let before = self.traveler.velocity;
        self.traveler.update(self.field_size);
        if !self.traveler.velocity.approx_eq(before) {
            self.traveler_run_count += 1;
        }

        let former = std::mem::take(&mut self.colliding);

        for hornet in &mut self.hornets {
            hornet.update(self.field_size);
        }

        self.colliding = colliding_indices(&self.traveler, &self.hornets);
        if !self.colliding.is_empty() {
            // Both lists are ascending, so membership is a binary search.
            let begun = self
                .colliding
                .iter()
                .filter(|&&i| former.binary_search(&i).is_err())
                .count();
            self.collision_count += begun as u64;
        }

        self.iteration += 1;
        trace!(
            "iteration {}: runs {}, collisions {}, overlapping {}",
            self.iteration,
            self.traveler_run_count,
            self.collision_count,
            self.colliding.len(),
        );
    }

    /// Refresh the collision cache from current positions and report whether
    /// the traveler overlaps any hornet.
    ///
    /// Repeated calls without moving anything return the same answer.
    pub fn collision(&mut self) -> bool {
        self.colliding = colliding_indices(&self.traveler, &self.hornets);
        !self.colliding.is_empty()
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Tick until `observer` asks to stop or `iteration` reaches
    /// `max_iteration`, whichever comes first.
    ///
    /// Stop conditions are only checked between ticks.  With `None` and an
    /// observer that never stops, this never returns.  Returns the number of
    /// ticks executed.
    pub fn run<O: SimObserver>(&mut self, max_iteration: Option<u64>, observer: &mut O) -> u64 {
        let start = self.iteration;
        loop {
            if max_iteration.is_some_and(|max| self.iteration >= max) {
                break;
            }
            observer.on_tick_start(self.iteration);
            self.tick();
            observer.on_tick_end(self);
            if observer.should_stop() {
                break;
            }
        }
        observer.on_sim_end(self);
        self.iteration - start
    }

    /// Run exactly `n` ticks, ignoring `should_stop`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.iteration);
            self.tick();
            observer.on_tick_end(self);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn traveler(&self) -> &Agent {
        &self.traveler
    }

    /// Mutable traveler, for scripted scenarios that place it by hand.
    pub fn traveler_mut(&mut self) -> &mut Agent {
        &mut self.traveler
    }

    /// Hornets in insertion order.  Indices are stable for the whole run.
    pub fn hornets(&self) -> &[Agent] {
        &self.hornets
    }

    /// Mutable hornets.  A slice, so hornets can be moved but not added or
    /// removed, which would invalidate the collision cache.
    pub fn hornets_mut(&mut self) -> &mut [Agent] {
        &mut self.hornets
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    /// The cached colliding hornet indices from the last `tick` or
    /// `collision` call, ascending.
    pub fn colliding_hornets(&self) -> &[usize] {
        &self.colliding
    }

    /// Ticks applied so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Ticks in which the traveler bounced off at least one edge.
    pub fn traveler_run_count(&self) -> u64 {
        self.traveler_run_count
    }

    /// Cumulative number of newly begun traveler–hornet collisions.
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }
}
