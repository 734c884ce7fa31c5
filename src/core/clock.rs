//! Time sources for the tick loop
//!
//! The arbiter only ever sees a `Timestamp`; the loop asks a `Clock` for one
//! per tick so recorded games can be replayed with a synthetic clock.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::types::Timestamp;

pub trait Clock {
    /// Current time in whole seconds
    fn now(&self) -> Timestamp;
}

/// Unix wall clock truncated to whole seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as Timestamp,
            // Clock set before 1970; report negative seconds rather than fail.
            Err(e) => -(e.duration().as_secs() as Timestamp),
        }
    }
}

/// Synthetic clock advancing one second every `ticks_per_second` readings
#[derive(Debug)]
pub struct SteppedClock {
    start: Timestamp,
    ticks_per_second: u32,
    readings: Cell<u64>,
}

impl SteppedClock {
    pub fn new(start: Timestamp, ticks_per_second: u32) -> Self {
        Self {
            start,
            ticks_per_second: ticks_per_second.max(1),
            readings: Cell::new(0),
        }
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> Timestamp {
        let n = self.readings.get();
        self.readings.set(n + 1);
        self.start + (n / self.ticks_per_second as u64) as Timestamp
    }
}
