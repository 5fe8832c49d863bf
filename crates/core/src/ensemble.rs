//! The four ghosts as one unit.
//! This module exists to fan commands out to every ghost and to run the hard-mode
//! group alert before any ghost moves. It does not own per-ghost decisions.

use std::mem;

use glam::Vec2;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::debug;

use crate::config::ChaseConfig;
use crate::ghost::{DEFAULT_POINTS, Ghost, MAX_POINTS, TickContext};
use crate::maze::{MazeGraph, NodeId};
use crate::types::*;

mod hash;
mod overlay;

pub use overlay::GoalLine;

#[derive(Clone, Debug)]
pub struct GhostGroup {
    ghosts: [Ghost; 4],
    difficulty: Difficulty,
    rng: ChaCha8Rng,
    player: Option<PlayerView>,
    any_seen: bool,
    show_goals: bool,
    tick: u64,
    log: Vec<GhostEvent>,
}

impl GhostGroup {
    /// All four ghosts on `start`. Fails when the config carries unusable metrics.
    pub fn new(maze: &MazeGraph, start: NodeId, config: &ChaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ghosts: GhostKind::ALL.map(|kind| Ghost::new(kind, maze, start, config)),
            difficulty: config.difficulty,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: None,
            any_seen: false,
            show_goals: false,
            tick: 0,
            log: Vec::new(),
        })
    }

    pub fn update(&mut self, maze: &MazeGraph, dt: f32) {
        let player = self.player;
        let forced = self.difficulty == Difficulty::Hard && self.raise_alert(maze);

        for index in 0..self.ghosts.len() {
            let leader_position = self.ghosts[GhostKind::Leader.index()].position();
            let mut ctx = TickContext {
                maze,
                player: player.as_ref(),
                leader_position,
                forced_chase: forced,
                tick: self.tick,
                rng: &mut self.rng,
                log: &mut self.log,
            };
            self.ghosts[index].update(dt, &mut ctx);
        }
        self.tick += 1;
    }

    /// Read pass over every ghost, then force and retarget the ones not heading home.
    fn raise_alert(&mut self, maze: &MazeGraph) -> bool {
        let player = self.player.as_ref();
        let seen = self.ghosts.iter().any(|ghost| ghost.can_perceive_player(maze, player));
        if seen && !self.any_seen {
            debug!(tick = self.tick, "group alerted");
            self.log.push(GhostEvent::GroupAlerted { tick: self.tick });
        }
        self.any_seen = seen;

        if seen && let Some(player) = player {
            let leader_position = self.ghosts[GhostKind::Leader.index()].position();
            for ghost in self.ghosts.iter_mut().filter(|ghost| ghost.mode() != Mode::Spawn) {
                let target = ghost.chase_target(Some(player), leader_position);
                ghost.retarget(target);
            }
        }
        seen
    }

    pub fn reset(&mut self, maze: &MazeGraph) {
        for ghost in &mut self.ghosts {
            ghost.reset(maze);
        }
        self.any_seen = false;
    }

    pub fn show(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.set_visible(true);
        }
    }

    pub fn hide(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.set_visible(false);
        }
    }

    /// Frighten every ghost that accepts it and restart the point ladder.
    pub fn start_freight(&mut self) {
        for ghost in &mut self.ghosts {
            if ghost.start_freight() {
                self.log.push(GhostEvent::ModeChanged { ghost: ghost.kind(), mode: ghost.mode() });
            }
        }
        self.reset_points();
    }

    /// Send one frightened ghost home. Returns false when it was not frightened.
    pub fn start_spawn(&mut self, kind: GhostKind) -> bool {
        let ghost = &mut self.ghosts[kind.index()];
        let accepted = ghost.start_spawn();
        if accepted {
            self.log.push(GhostEvent::ModeChanged { ghost: kind, mode: ghost.mode() });
        }
        accepted
    }

    pub fn set_spawn_node(&mut self, maze: &MazeGraph, node: NodeId) {
        for ghost in &mut self.ghosts {
            ghost.set_spawn_node(maze, node);
        }
    }

    pub fn set_start_node(&mut self, kind: GhostKind, maze: &MazeGraph, node: NodeId) {
        self.ghosts[kind.index()].set_start_node(maze, node);
    }

    /// Double every ghost's points, up to [`MAX_POINTS`].
    pub fn update_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.set_points((ghost.points() * 2).min(MAX_POINTS));
        }
    }

    pub fn reset_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.set_points(DEFAULT_POINTS);
        }
    }

    pub fn set_player(&mut self, player: Option<PlayerView>) {
        self.player = player;
    }

    pub fn player(&self) -> Option<&PlayerView> {
        self.player.as_ref()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        for ghost in &mut self.ghosts {
            ghost.set_difficulty(difficulty);
        }
        if difficulty != Difficulty::Hard {
            self.any_seen = false;
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn toggle_goals(&mut self) {
        self.show_goals = !self.show_goals;
    }

    pub fn set_show_goals(&mut self, show: bool) {
        self.show_goals = show;
    }

    pub fn shows_goals(&self) -> bool {
        self.show_goals
    }

    pub fn ghost(&self, kind: GhostKind) -> &Ghost {
        &self.ghosts[kind.index()]
    }

    pub fn ghost_mut(&mut self, kind: GhostKind) -> &mut Ghost {
        &mut self.ghosts[kind.index()]
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// Whether any ghost perceived the player on the last hard-mode tick.
    pub fn group_alerted(&self) -> bool {
        self.any_seen
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn log(&self) -> &[GhostEvent] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<GhostEvent> {
        mem::take(&mut self.log)
    }

    pub fn leader_position(&self) -> Vec2 {
        self.ghosts[GhostKind::Leader.index()].position()
    }
}
