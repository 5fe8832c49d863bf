//! One viewer episode: the maze, the ghost group and the keyboard-driven stand-in player.
//! This module exists so the frame loop can be tested without a window.
//! It does not read the keyboard or draw anything.

use chase_core::kinematics::pixels_per_second;
use chase_core::maze::DEFAULT_LAYOUT;
use chase_core::{ChaseConfig, Direction, GhostGroup, GhostKind, MazeGraph, Mode, Mover, NodeId};
use glam::Vec2;
use tracing::info;

pub const FIXED_DT: f32 = 1.0 / 60.0;
pub const PLAYER_SPEED: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// A frightened ghost was caught and is heading home.
    GhostEaten(GhostKind),
    /// A hunting ghost caught the player; the episode restarted.
    PlayerCaught(GhostKind),
}

pub struct Session {
    config: ChaseConfig,
    maze: MazeGraph,
    group: GhostGroup,
    player: Mover,
    desired: Option<Direction>,
}

impl Session {
    pub fn new(config: ChaseConfig) -> Result<Self, String> {
        let mut config = config;
        config.metrics.fit_layout(DEFAULT_LAYOUT);
        let metrics = config.metrics;
        let maze = MazeGraph::from_layout(DEFAULT_LAYOUT, metrics.tile_width, metrics.tile_height)
            .map_err(|err| err.to_string())?;
        let cell = |col: f32, row: f32| -> Result<NodeId, String> {
            let position = Vec2::new(col * metrics.tile_width, row * metrics.tile_height);
            maze.node_at(position).ok_or_else(|| format!("layout has no node at column {col}, row {row}"))
        };

        let spawn = cell(8.0, 5.0)?;
        let mut group = GhostGroup::new(&maze, spawn, &config).map_err(|err| err.to_string())?;
        group.set_spawn_node(&maze, spawn);
        group.set_start_node(GhostKind::Ambusher, &maze, cell(5.0, 5.0)?);
        group.set_start_node(GhostKind::Flanker, &maze, cell(13.0, 5.0)?);
        group.set_start_node(GhostKind::Whimsical, &maze, cell(0.0, 5.0)?);

        let player = Mover::new(&maze, cell(5.0, 9.0)?);
        group.set_player(Some(player.player_view()));
        Ok(Self { config, maze, group, player, desired: None })
    }

    /// Queue the direction the player should take; a reversal applies immediately.
    pub fn steer(&mut self, dir: Direction) {
        self.desired = Some(dir);
        if self.player.heading == Some(dir.opposite()) {
            self.player.reverse();
        }
    }

    /// Advance the player, hand the ghosts a fresh snapshot, run one ghost tick and
    /// resolve any contact between the player and a visible ghost.
    pub fn step(&mut self) -> Option<Contact> {
        let speed = pixels_per_second(PLAYER_SPEED, self.config.metrics.tile_width);
        if self.player.advance(&self.maze, speed, FIXED_DT) {
            self.player.arrive(&self.maze);
            let dir = self.desired.or(self.player.heading);
            if let Some(dir) = dir {
                self.player.turn(&self.maze, dir);
            }
        }
        self.group.set_player(Some(self.player.player_view()));
        self.group.update(&self.maze, FIXED_DT);
        self.resolve_contact()
    }

    fn resolve_contact(&mut self) -> Option<Contact> {
        let reach = self.config.metrics.tile_width * 0.5;
        let touching = self.group.ghosts().iter().find(|ghost| {
            ghost.is_visible()
                && ghost.mode() != Mode::Spawn
                && ghost.position().distance(self.player.position) < reach
        })?;
        let kind = touching.kind();
        if touching.mode() == Mode::Freight {
            let points = touching.points();
            self.group.start_spawn(kind);
            self.group.update_points();
            info!(ghost = ?kind, points, "ghost eaten");
            Some(Contact::GhostEaten(kind))
        } else {
            info!(ghost = ?kind, tick = self.group.tick(), "player caught");
            self.reset();
            Some(Contact::PlayerCaught(kind))
        }
    }

    pub fn reset(&mut self) {
        self.group.reset(&self.maze);
        self.player.reset(&self.maze);
        self.desired = None;
        self.group.set_player(Some(self.player.player_view()));
    }

    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    pub fn group(&self) -> &GhostGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut GhostGroup {
        &mut self.group
    }

    pub fn player(&self) -> &Mover {
        &self.player
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }
}
