//! Headless Replay
//!
//! Feeds a recorded file of snapshot lines through the agent with a synthetic
//! clock. Prints the decision stream exactly as the bot would emit it, or a
//! JSON summary of how each tick was resolved.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use arena_arbiter::agent::{Agent, Brain};
use arena_arbiter::core::clock::SteppedClock;
use arena_arbiter::core::config::{load_config, AgentConfig};
use arena_arbiter::core::error::Result;
use arena_arbiter::core::types::Timestamp;
use arena_arbiter::decision::{Action, Branch, Decision};
use arena_arbiter::link::{GameLink, LinkStats};
use arena_arbiter::snapshot::Snapshot;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Replay recorded snapshots through the agent
#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Run recorded snapshot lines through the agent and summarise its choices")]
struct Args {
    /// File with one snapshot per line
    input: PathBuf,

    /// Agent tuning file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Snapshots per simulated second
    #[arg(long, default_value_t = 10)]
    ticks_per_second: u32,

    /// Timestamp of the first snapshot
    #[arg(long, default_value_t = 0)]
    start: i64,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// Tallies what the wrapped brain decided, tick by tick
struct Recorder<B> {
    brain: B,
    actions: BTreeMap<Action, u64>,
    branches: BTreeMap<Branch, u64>,
}

impl<B: Brain> Recorder<B> {
    fn new(brain: B) -> Self {
        Self {
            brain,
            actions: BTreeMap::new(),
            branches: BTreeMap::new(),
        }
    }
}

impl<B: Brain> Brain for Recorder<B> {
    fn tick(&mut self, snapshot: &Snapshot, now: Timestamp) -> Decision {
        let decision = self.brain.tick(snapshot, now);
        *self.actions.entry(decision.action).or_default() += 1;
        *self.branches.entry(decision.branch).or_default() += 1;
        decision
    }
}

#[derive(Serialize)]
struct ReplaySummary {
    seed: u64,
    #[serde(flatten)]
    link: LinkStats,
    actions: BTreeMap<Action, u64>,
    branches: BTreeMap<Branch, u64>,
}

fn replay<R: BufRead, W: Write>(input: R, output: W, args: &Args, config: AgentConfig) -> Result<ReplaySummary> {
    let clock = SteppedClock::new(args.start, args.ticks_per_second);
    let mut recorder = Recorder::new(Agent::with_seed(config, args.seed, args.start));
    let link = GameLink::new(input, output, clock).run(&mut recorder)?;
    Ok(ReplaySummary {
        seed: args.seed,
        link,
        actions: recorder.actions,
        branches: recorder.branches,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AgentConfig::default(),
    };

    let input = BufReader::new(fs::File::open(&args.input)?);
    let json = args.format == "json";
    let output: Box<dyn Write> = if json {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout().lock())
    };

    let summary = replay(input, output, &args, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        eprintln!(
            "{} ticks replayed, {} skipped (seed {}), branches {}",
            summary.link.decisions,
            summary.link.skipped,
            summary.seed,
            serde_json::to_string(&summary.branches)?
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args() -> Args {
        Args::parse_from(["replay", "recorded.txt"])
    }

    #[test]
    fn test_replay_counts_branches_and_skips() {
        let input = "([(1,1,0,(100,100),50)],[(2,2,0,(110,100),500)],[],[])\n\
                     garbage\n\
                     \n\
                     ([(1,1,0,(100,100),300)],[(2,2,0,(140,100),50)],[],[])\n";
        let mut out = Vec::new();
        let summary = replay(Cursor::new(input), &mut out, &args(), AgentConfig::default()).unwrap();

        assert_eq!(summary.link.decisions, 2);
        assert_eq!(summary.link.skipped, 1);
        assert_eq!(summary.link.blank, 1);
        assert_eq!(summary.branches.get(&Branch::Flee), Some(&1));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_summary_keys_use_wire_names() {
        let input = "([(1,1,0,(100,100),50)],[(2,2,0,(110,100),500)],[],[])\n";
        let summary = replay(Cursor::new(input), io::sink(), &args(), AgentConfig::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["branches"]["flee"], 1);
        assert_eq!(json["ticks"], 1);
        assert_eq!(json["seed"], 42);
    }
}
