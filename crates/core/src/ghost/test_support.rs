//! Shared fixtures for the `ghost` submodule test suites.
//! This module exists to avoid repeating maze, ghost and context setup across tests.
//! It does not own production ghost logic.

use rand_chacha::rand_core::SeedableRng;

use super::*;

/// `n` nodes on the x axis, `spacing` apart, linked left to right.
pub(crate) fn corridor(n: usize, spacing: f32) -> (MazeGraph, Vec<NodeId>) {
    let mut maze = MazeGraph::new();
    let nodes: Vec<NodeId> =
        (0..n).map(|i| maze.add_node(Vec2::new(i as f32 * spacing, 0.0))).collect();
    for pair in nodes.windows(2) {
        maze.connect(pair[0], Direction::Right, pair[1]);
    }
    (maze, nodes)
}

pub(crate) struct PlusIds {
    pub center: NodeId,
    pub top: NodeId,
    pub bottom: NodeId,
    pub left: NodeId,
    pub right: NodeId,
}

/// A four-way junction centered at `(spacing, spacing)`.
pub(crate) fn plus_junction(spacing: f32) -> (MazeGraph, PlusIds) {
    let mut maze = MazeGraph::new();
    let center = maze.add_node(Vec2::new(spacing, spacing));
    let top = maze.add_node(Vec2::new(spacing, 0.0));
    let bottom = maze.add_node(Vec2::new(spacing, 2.0 * spacing));
    let left = maze.add_node(Vec2::new(0.0, spacing));
    let right = maze.add_node(Vec2::new(2.0 * spacing, spacing));
    maze.connect(center, Direction::Up, top);
    maze.connect(center, Direction::Down, bottom);
    maze.connect(center, Direction::Left, left);
    maze.connect(center, Direction::Right, right);
    (maze, PlusIds { center, top, bottom, left, right })
}

pub(crate) struct TeeIds {
    pub left: NodeId,
    pub center: NodeId,
    pub right: NodeId,
    pub stem: NodeId,
}

/// A bar from `(0, spacing)` to `(2 * spacing, spacing)` with a stem dropping from its middle.
pub(crate) fn t_junction(spacing: f32) -> (MazeGraph, TeeIds) {
    let mut maze = MazeGraph::new();
    let left = maze.add_node(Vec2::new(0.0, spacing));
    let center = maze.add_node(Vec2::new(spacing, spacing));
    let right = maze.add_node(Vec2::new(2.0 * spacing, spacing));
    let stem = maze.add_node(Vec2::new(spacing, 2.0 * spacing));
    maze.connect(left, Direction::Right, center);
    maze.connect(center, Direction::Right, right);
    maze.connect(center, Direction::Down, stem);
    (maze, TeeIds { left, center, right, stem })
}

pub(crate) fn config(difficulty: Difficulty, tile_width: f32) -> ChaseConfig {
    let mut config = ChaseConfig::with_difficulty(difficulty);
    config.metrics.tile_width = tile_width;
    config.metrics.tile_height = tile_width;
    config
}

pub(crate) fn ghost_at(
    kind: GhostKind,
    maze: &MazeGraph,
    node: NodeId,
    difficulty: Difficulty,
    tile_width: f32,
) -> Ghost {
    Ghost::new(kind, maze, node, &config(difficulty, tile_width))
}

pub(crate) fn player_at(maze: &MazeGraph, node: NodeId, facing: Option<Direction>) -> PlayerView {
    PlayerView { position: maze.position(node).unwrap_or_default(), node: Some(node), facing }
}

/// Owns the mutable state a [`TickContext`] borrows.
pub(crate) struct Harness {
    pub rng: ChaCha8Rng,
    pub log: Vec<GhostEvent>,
    pub tick: u64,
}

impl Harness {
    pub(crate) fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), log: Vec::new(), tick: 0 }
    }

    pub(crate) fn tick(
        &mut self,
        ghost: &mut Ghost,
        maze: &MazeGraph,
        player: Option<&PlayerView>,
        dt: f32,
    ) {
        let mut ctx = TickContext {
            maze,
            player,
            leader_position: Vec2::ZERO,
            forced_chase: false,
            tick: self.tick,
            rng: &mut self.rng,
            log: &mut self.log,
        };
        ghost.update(dt, &mut ctx);
        self.tick += 1;
    }

    pub(crate) fn choose(
        &mut self,
        ghost: &mut Ghost,
        maze: &MazeGraph,
        player: Option<&PlayerView>,
        forced: bool,
        legal: &[Direction],
    ) -> Direction {
        let mut ctx = TickContext {
            maze,
            player,
            leader_position: Vec2::ZERO,
            forced_chase: forced,
            tick: 0,
            rng: &mut self.rng,
            log: &mut self.log,
        };
        ghost.choose_direction(legal, &mut ctx)
    }
}
