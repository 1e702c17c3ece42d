//! Plain data row types written by output backends.

use hf_agent::Agent;

/// Which role an agent plays in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Traveler,
    Hornet,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Traveler => "traveler",
            AgentKind::Hornet => "hornet",
        }
    }
}

/// One agent's state at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub iteration: u64,
    /// 0 for the traveler, `hornet index + 1` for hornets.
    pub agent:     u32,
    pub kind:      AgentKind,
    pub x:         f64,
    pub y:         f64,
    pub vx:        f64,
    pub vy:        f64,
    pub radius:    f64,
    /// For hornets: overlapping the traveler.  For the traveler: overlapping
    /// any hornet.
    pub colliding: bool,
}

impl AgentSnapshotRow {
    pub fn new(iteration: u64, agent: u32, kind: AgentKind, state: &Agent, colliding: bool) -> Self {
        Self {
            iteration,
            agent,
            kind,
            x: state.position.x,
            y: state.position.y,
            vx: state.velocity.x,
            vy: state.velocity.y,
            radius: state.radius(),
            colliding,
        }
    }
}

/// Counters after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub iteration:          u64,
    pub traveler_run_count: u64,
    pub collision_count:    u64,
    /// Hornets overlapping the traveler right now.
    pub colliding_hornets:  u64,
}
