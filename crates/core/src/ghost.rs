//! A single ghost: movement, mode, and the per-tick decision at each node.
//! Perception, targeting, steering and mode transitions live in submodules.
//! The ghost never reads its siblings; shared state arrives through [`TickContext`].

use glam::Vec2;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::config::{ChaseConfig, MazeMetrics};
use crate::kinematics::{Mover, pixels_per_second};
use crate::maze::{MazeGraph, NodeId};
use crate::modes::ModeController;
use crate::types::*;

mod perception;
mod steering;
mod targeting;
#[cfg(test)]
pub(crate) mod test_support;
mod transitions;

pub use perception::has_line_of_sight;
pub use targeting::scatter_target;

pub const DEFAULT_POINTS: u32 = 200;
pub const MAX_POINTS: u32 = 1600;

/// Everything a ghost reads or writes outside itself during one tick.
pub struct TickContext<'a> {
    pub maze: &'a MazeGraph,
    pub player: Option<&'a PlayerView>,
    pub leader_position: Vec2,
    /// Set by the ensemble when any sibling saw the player this tick.
    pub forced_chase: bool,
    pub tick: u64,
    pub rng: &'a mut ChaCha8Rng,
    pub log: &'a mut Vec<GhostEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SpawnPoint {
    node: NodeId,
    position: Vec2,
}

#[derive(Clone, Debug)]
pub struct Ghost {
    kind: GhostKind,
    mover: Mover,
    target: Vec2,
    modes: ModeController,
    base_speed: f32,
    speed: f32,
    visible: bool,
    points: u32,
    difficulty: Difficulty,
    vision_radius_tiles: u32,
    forced_chase: bool,
    policy: SteeringPolicy,
    spawn: Option<SpawnPoint>,
    metrics: MazeMetrics,
    flanker_reflection: bool,
}

impl Ghost {
    pub fn new(kind: GhostKind, maze: &MazeGraph, start: NodeId, config: &ChaseConfig) -> Self {
        Self {
            kind,
            mover: Mover::new(maze, start),
            target: Vec2::ZERO,
            modes: ModeController::new(config.timers),
            base_speed: config.base_speed,
            speed: config.base_speed,
            visible: true,
            points: DEFAULT_POINTS,
            difficulty: config.difficulty,
            vision_radius_tiles: config.difficulty.vision_radius_tiles(),
            forced_chase: false,
            policy: SteeringPolicy::Tiered,
            spawn: None,
            metrics: config.metrics,
            flanker_reflection: config.flanker_reflection,
        }
    }

    /// One simulation step: mode timers, then movement, then a direction choice
    /// whenever a node is reached.
    pub fn update(&mut self, dt: f32, ctx: &mut TickContext<'_>) {
        self.forced_chase = ctx.forced_chase && self.mode() != Mode::Spawn;

        let at_spawn = self.spawn.is_some_and(|spawn| spawn.node == self.mover.node);
        if let Some(signal) = self.modes.update(dt, at_spawn) {
            self.apply_signal(signal);
            trace!(ghost = ?self.kind, mode = ?self.mode(), "mode timer fired");
            ctx.log.push(GhostEvent::ModeChanged { ghost: self.kind, mode: self.mode() });
        }

        let step = pixels_per_second(self.speed, self.metrics.tile_width);
        if self.mover.advance(ctx.maze, step, dt) {
            self.mover.arrive(ctx.maze);
            let legal = self.mover.legal_directions(ctx.maze);
            let dir = self.choose_direction(&legal, ctx);
            self.mover.turn(ctx.maze, dir);
        }
    }

    /// Move this ghost's home to `node` and put it there.
    pub fn set_start_node(&mut self, maze: &MazeGraph, node: NodeId) {
        self.mover.set_start(maze, node);
    }

    pub fn set_spawn_node(&mut self, maze: &MazeGraph, node: NodeId) {
        self.spawn = maze.position(node).map(|position| SpawnPoint { node, position });
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.vision_radius_tiles = difficulty.vision_radius_tiles();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_points(&mut self, points: u32) {
        self.points = points;
    }

    pub(crate) fn retarget(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn kind(&self) -> GhostKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.mover.position
    }

    pub fn node(&self) -> NodeId {
        self.mover.node
    }

    pub fn heading(&self) -> Option<Direction> {
        self.mover.heading
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn vision_radius_tiles(&self) -> u32 {
        self.vision_radius_tiles
    }

    pub fn vision_radius_px(&self) -> f32 {
        self.vision_radius_tiles as f32 * self.metrics.tile_width
    }

    pub fn forced_chase(&self) -> bool {
        self.forced_chase
    }

    pub fn policy(&self) -> SteeringPolicy {
        self.policy
    }

    pub fn metrics(&self) -> &MazeMetrics {
        &self.metrics
    }
}
