//! Hysteresis state carried from one tick to the next
//!
//! Three independent timers: the wander waypoint refresh, the fleeing latch,
//! and the toxin-throw cooldown.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{AgentConfig, TimingConfig};
use crate::core::types::{Point, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub wander_target: Point,
    pub wander_deadline: Timestamp,
    pub fleeing: bool,
    pub fleeing_until: Timestamp,
    pub last_throw_at: Timestamp,
    /// Target emitted on the previous tick
    pub last_target: Point,
}

impl AgentState {
    /// Fresh state with all timers backdated so nothing is gated on tick one
    pub fn new<R: Rng + ?Sized>(config: &AgentConfig, now: Timestamp, rng: &mut R) -> Self {
        let wander_target = config.arena.random_point(rng);
        let past = now - config.timing.startup_backdate;
        Self {
            wander_target,
            wander_deadline: past,
            fleeing: false,
            fleeing_until: past,
            last_throw_at: past,
            last_target: wander_target,
        }
    }

    /// Pick a new waypoint when the old one expired or has been reached.
    ///
    /// Returns true when the waypoint changed.
    pub fn refresh_wander<R: Rng + ?Sized>(
        &mut self,
        my_pos: Point,
        now: Timestamp,
        config: &AgentConfig,
        rng: &mut R,
    ) -> bool {
        let expired = now - config.timing.wander_refresh >= self.wander_deadline;
        let reached = self.wander_target.distance(&my_pos) < config.wander_reach;
        if expired || reached {
            self.wander_target = config.arena.random_point(rng);
            self.wander_deadline = now;
            true
        } else {
            false
        }
    }

    /// Latch fleeing on every threatened tick; release after the grace window.
    pub fn update_fleeing(&mut self, threatened: bool, now: Timestamp, timing: &TimingConfig) {
        if threatened {
            self.fleeing = true;
            self.fleeing_until = now;
        } else if now - timing.flee_grace > self.fleeing_until {
            self.fleeing = false;
        }
    }

    pub fn throw_ready(&self, now: Timestamp, timing: &TimingConfig) -> bool {
        now - timing.throw_cooldown > self.last_throw_at
    }

    pub fn record_throw(&mut self, now: Timestamp) {
        self.last_throw_at = now;
    }
}
