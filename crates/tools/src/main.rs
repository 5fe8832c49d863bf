use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tools::{Simulation, resolve_config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML chase config; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, default_value_t = 1800)]
    ticks: u64,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.seed)?;
    info!(seed = config.seed, difficulty = config.difficulty.label(), ticks = args.ticks, "running");
    let mut sim = Simulation::new(config)?;
    sim.run(args.ticks);
    let summary = sim.summary();

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{json}");
    } else {
        println!("Run complete.");
        println!("Difficulty: {}", summary.difficulty);
        println!("Final Tick: {}", summary.final_tick);
        println!("Snapshot Hash: 0x{:016x}", summary.snapshot_hash);
        println!(
            "Events: {} sightings, {} group alerts, {} mode changes",
            summary.events.sightings, summary.events.group_alerts, summary.events.mode_changes
        );
    }

    Ok(())
}
