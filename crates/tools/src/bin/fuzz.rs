use anyhow::{Context, Result};
use chase_core::{ChaseConfig, Difficulty, GhostKind};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{FuzzSignal, Simulation, choose};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let difficulty = choose(&mut rng, &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]);
    let config = ChaseConfig { seed: args.seed, ..ChaseConfig::with_difficulty(difficulty) };
    let mut sim = Simulation::new(config)?;
    let spawn = choose(&mut rng, sim.nodes());
    sim.set_spawn_node(spawn);

    let mut issued = 0u64;
    for _ in 0..args.ticks {
        if rng.next_u64() % 40 == 0 {
            let kind = choose(&mut rng, &GhostKind::ALL);
            let level = choose(&mut rng, &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]);
            let signals = [
                FuzzSignal::Freight,
                FuzzSignal::Spawn(kind),
                FuzzSignal::EatGhost,
                FuzzSignal::Difficulty(level),
                FuzzSignal::Reset,
            ];
            let signal = choose(&mut rng, &signals);
            signal.apply(&mut sim);
            issued += 1;
        }
        sim.step();
        sim.check_invariants().with_context(|| format!("seed {} broke an invariant", args.seed))?;
    }

    let summary = sim.summary();
    println!(
        "Fuzz run finished at tick {} after {} signals. Hash 0x{:016x}",
        summary.final_tick, issued, summary.snapshot_hash
    );
    Ok(())
}
