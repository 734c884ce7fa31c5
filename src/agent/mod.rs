//! Decision-making agent
//!
//! Architecture: trait + data
//! - `Brain` is the seam the game link drives, one call per tick
//! - `Agent` owns the persistent `AgentState`, the tuning and a seedable RNG
//! - `arbiter::decide` is the pure per-tick function underneath

pub mod arbiter;
pub mod scan;
pub mod state;
pub mod threat;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::AgentConfig;
use crate::core::types::Timestamp;
use crate::decision::Decision;
use crate::snapshot::Snapshot;

pub use arbiter::decide;
pub use state::AgentState;

/// Anything that turns one snapshot into one decision
pub trait Brain {
    fn tick(&mut self, snapshot: &Snapshot, now: Timestamp) -> Decision;
}

pub struct Agent {
    config: AgentConfig,
    state: AgentState,
    rng: ChaCha8Rng,
}

impl Agent {
    /// Create an agent with the default seed
    pub fn new(config: AgentConfig, now: Timestamp) -> Self {
        Self::with_seed(config, 42, now)
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(config: AgentConfig, seed: u64, now: Timestamp) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = AgentState::new(&config, now, &mut rng);
        Self { config, state, rng }
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }
}

impl Brain for Agent {
    fn tick(&mut self, snapshot: &Snapshot, now: Timestamp) -> Decision {
        let (decision, next) = decide(snapshot, &self.state, now, &self.config, &mut self.rng);
        self.state = next;
        decision
    }
}
