//! Game link - line-oriented transport between the arena and a `Brain`
//!
//! One snapshot line in, one decision line out, flushed immediately. Lines
//! that fail to decode are skipped with a warning; I/O failures end the run.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::agent::Brain;
use crate::core::clock::Clock;
use crate::core::error::Result;
use crate::snapshot::decode_snapshot;

/// Counters reported when the input channel closes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    /// Non-blank lines received
    pub ticks: u64,
    /// Decisions written
    pub decisions: u64,
    /// Lines rejected by the decoder
    pub skipped: u64,
    /// Blank lines ignored
    pub blank: u64,
}

pub struct GameLink<R, W, C> {
    input: R,
    output: W,
    clock: C,
    stats: LinkStats,
}

impl<R: BufRead, W: Write, C: Clock> GameLink<R, W, C> {
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            input,
            output,
            clock,
            stats: LinkStats::default(),
        }
    }

    /// Handle one line. Returns false once the input is exhausted.
    pub fn step<B: Brain + ?Sized>(&mut self, brain: &mut B, line: &mut String) -> Result<bool> {
        line.clear();
        if self.input.read_line(line)? == 0 {
            return Ok(false);
        }

        if line.trim().is_empty() {
            self.stats.blank += 1;
            return Ok(true);
        }
        self.stats.ticks += 1;

        let snapshot = match decode_snapshot(line) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.stats.skipped += 1;
                tracing::warn!("Skipping tick {}: {}", self.stats.ticks, e);
                return Ok(true);
            }
        };

        let now = self.clock.now();
        let decision = brain.tick(&snapshot, now);
        writeln!(self.output, "{}", decision)?;
        self.output.flush()?;
        self.stats.decisions += 1;
        Ok(true)
    }

    /// Drive `brain` until the input closes
    pub fn run<B: Brain + ?Sized>(&mut self, brain: &mut B) -> Result<LinkStats> {
        tracing::info!("Game link running");
        let mut line = String::new();
        while self.step(brain, &mut line)? {}
        tracing::info!(
            ticks = self.stats.ticks,
            decisions = self.stats.decisions,
            skipped = self.stats.skipped,
            blank = self.stats.blank,
            "Input closed, game link stopping"
        );
        Ok(self.stats)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
