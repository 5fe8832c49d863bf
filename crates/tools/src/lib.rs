//! Headless simulation shared by the `tools` and `fuzz` binaries.
//! This module exists to run the ghost group against a random-walking stand-in player
//! without a window. It does not parse arguments or print anything.

use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use chase_core::kinematics::pixels_per_second;
use chase_core::maze::DEFAULT_LAYOUT;
use chase_core::{
    ChaseConfig, Difficulty, GhostEvent, GhostGroup, GhostKind, MazeGraph, Mode, Mover, NodeId,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use tracing::debug;

pub const FIXED_DT: f32 = 1.0 / 60.0;
const PLAYER_SPEED: f32 = 80.0;
// Keeps the player's walk independent of the ghosts' stream for the same seed.
const PLAYER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Config from `path` when given, otherwise defaults; `seed` overrides the file.
pub fn resolve_config(path: Option<&Path>, seed: Option<u64>) -> Result<ChaseConfig> {
    let mut config = match path {
        Some(path) => ChaseConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => ChaseConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct EventCounts {
    pub sightings: u64,
    pub group_alerts: u64,
    pub mode_changes: u64,
}

impl EventCounts {
    fn record(&mut self, events: &[GhostEvent]) {
        for event in events {
            match event {
                GhostEvent::SpottedPlayer { .. } => self.sightings += 1,
                GhostEvent::GroupAlerted { .. } => self.group_alerts += 1,
                GhostEvent::ModeChanged { .. } => self.mode_changes += 1,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub difficulty: String,
    pub final_tick: u64,
    pub snapshot_hash: u64,
    pub events: EventCounts,
}

pub struct Simulation {
    config: ChaseConfig,
    maze: MazeGraph,
    nodes: Vec<NodeId>,
    group: GhostGroup,
    player: Mover,
    player_rng: ChaCha8Rng,
    events: EventCounts,
}

impl Simulation {
    pub fn new(config: ChaseConfig) -> Result<Self> {
        let mut config = config;
        config.metrics.fit_layout(DEFAULT_LAYOUT);
        let metrics = config.metrics;
        let maze = MazeGraph::from_layout(DEFAULT_LAYOUT, metrics.tile_width, metrics.tile_height)
            .context("Default maze layout is malformed")?;
        let nodes: Vec<NodeId> = maze.nodes().map(|node| node.id).collect();
        let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) else {
            return Err(anyhow!("Default maze layout has no nodes"));
        };
        let mut group = GhostGroup::new(&maze, first, &config).context("Invalid chase config")?;
        group.set_spawn_node(&maze, first);
        let player = Mover::new(&maze, last);
        let player_rng = ChaCha8Rng::seed_from_u64(config.seed ^ PLAYER_STREAM);
        Ok(Self { config, maze, nodes, group, player, player_rng, events: EventCounts::default() })
    }

    pub fn step(&mut self) {
        let speed = pixels_per_second(PLAYER_SPEED, self.config.metrics.tile_width);
        if self.player.advance(&self.maze, speed, FIXED_DT) {
            self.player.arrive(&self.maze);
            let legal = self.player.legal_directions(&self.maze);
            if !legal.is_empty() {
                let dir = choose(&mut self.player_rng, &legal);
                self.player.turn(&self.maze, dir);
            }
        }
        self.group.set_player(Some(self.player.player_view()));
        self.group.update(&self.maze, FIXED_DT);

        let events = self.group.take_log();
        if !events.is_empty() {
            debug!(tick = self.group.tick(), count = events.len(), "ghost events");
        }
        self.events.record(&events);
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.config.seed,
            difficulty: self.group.difficulty().label().to_string(),
            final_tick: self.group.tick(),
            snapshot_hash: self.group.snapshot_hash(),
            events: self.events.clone(),
        }
    }

    pub fn set_spawn_node(&mut self, node: NodeId) {
        self.group.set_spawn_node(&self.maze, node);
    }

    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn group(&self) -> &GhostGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut GhostGroup {
        &mut self.group
    }

    /// Check the invariants every tick must preserve.
    pub fn check_invariants(&self) -> Result<()> {
        let tick = self.group.tick();
        for ghost in self.group.ghosts() {
            let kind = ghost.kind();
            ensure!(ghost.mover().is_on_edge(&self.maze), "tick {tick}: {kind:?} left the maze graph");
            ensure!(
                (200..=1600).contains(&ghost.points()),
                "tick {tick}: {kind:?} has {} points",
                ghost.points()
            );
            let expected = match ghost.mode() {
                Mode::Scatter | Mode::Chase => 1.0,
                Mode::Freight => 0.5,
                Mode::Spawn => 1.5,
            };
            ensure!(
                ghost.speed() == ghost.base_speed() * expected,
                "tick {tick}: {kind:?} speed {} does not match {:?}",
                ghost.speed(),
                ghost.mode()
            );
            ensure!(
                !ghost.forced_chase()
                    || (self.group.difficulty() == Difficulty::Hard && ghost.mode() != Mode::Spawn),
                "tick {tick}: {kind:?} forced outside hard mode"
            );
        }
        Ok(())
    }
}

/// One random command a fuzz run may issue between ticks.
#[derive(Clone, Copy, Debug)]
pub enum FuzzSignal {
    Freight,
    Spawn(GhostKind),
    EatGhost,
    Difficulty(Difficulty),
    Reset,
}

impl FuzzSignal {
    pub fn apply(self, sim: &mut Simulation) {
        match self {
            FuzzSignal::Freight => sim.group.start_freight(),
            FuzzSignal::Spawn(kind) => {
                sim.group.start_spawn(kind);
            }
            FuzzSignal::EatGhost => sim.group.update_points(),
            FuzzSignal::Difficulty(difficulty) => sim.group.set_difficulty(difficulty),
            FuzzSignal::Reset => sim.group.reset(&sim.maze),
        }
    }
}
