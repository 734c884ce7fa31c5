//! Arena Arbiter - Entry Point
//!
//! Reads one snapshot per line from stdin and answers with one decision per
//! line on stdout. Logging goes to stderr so it never mixes with the wire.

use std::io;
use std::path::PathBuf;

use arena_arbiter::agent::Agent;
use arena_arbiter::core::clock::{Clock, SystemClock};
use arena_arbiter::core::config::{load_config, AgentConfig};
use arena_arbiter::core::error::Result;
use arena_arbiter::link::GameLink;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Arena bot - flee, hunt, throw, eat, wander
#[derive(Parser, Debug)]
#[command(name = "arena-arbiter")]
#[command(about = "Decision engine for the blob arena, speaking the line protocol on stdin/stdout")]
struct Args {
    /// Agent tuning file (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "arena_arbiter=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AgentConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Arena Arbiter starting (seed {})", seed);

    let clock = SystemClock;
    let mut agent = Agent::with_seed(config, seed, clock.now());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut link = GameLink::new(stdin.lock(), stdout.lock(), clock);
    let stats = link.run(&mut agent)?;

    tracing::info!(
        "Finished after {} ticks ({} skipped)",
        stats.ticks,
        stats.skipped
    );
    Ok(())
}
