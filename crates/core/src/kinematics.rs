//! Node-to-node movement along maze edges.
//! This module exists so ghosts and the stand-in player share one movement rule.
//! It does not decide where to go; callers pick the direction at each node.

use std::mem;

use glam::Vec2;

use crate::maze::{MazeGraph, NodeId};
use crate::types::{Direction, PlayerView};

/// Speeds are given in percent units where 100 covers 100/16 tiles per second.
pub fn pixels_per_second(speed: f32, tile_width: f32) -> f32 {
    speed * tile_width / 16.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mover {
    pub node: NodeId,
    pub target: NodeId,
    pub heading: Option<Direction>,
    pub position: Vec2,
    start: NodeId,
}

impl Mover {
    pub fn new(maze: &MazeGraph, start: NodeId) -> Self {
        Self {
            node: start,
            target: start,
            heading: None,
            position: maze.position(start).unwrap_or_default(),
            start,
        }
    }

    pub fn start_node(&self) -> NodeId {
        self.start
    }

    pub fn reset(&mut self, maze: &MazeGraph) {
        *self = Mover::new(maze, self.start);
    }

    /// Move the start node and place the mover on it.
    pub fn set_start(&mut self, maze: &MazeGraph, start: NodeId) {
        *self = Mover::new(maze, start);
    }

    /// Move along the current heading. Returns true once the travel target is reached
    /// or passed; the caller then settles with [`Mover::arrive`] and picks a way out.
    pub fn advance(&mut self, maze: &MazeGraph, pixels_per_second: f32, dt: f32) -> bool {
        if let Some(dir) = self.heading {
            self.position += dir.vector() * pixels_per_second * dt;
        }
        self.overshot_target(maze)
    }

    fn overshot_target(&self, maze: &MazeGraph) -> bool {
        let (Some(node_pos), Some(target_pos)) =
            (maze.position(self.node), maze.position(self.target))
        else {
            return false;
        };
        (self.position - node_pos).length_squared() >= (target_pos - node_pos).length_squared()
    }

    /// Settle on the travel target, snapping to its position.
    pub fn arrive(&mut self, maze: &MazeGraph) {
        self.node = self.target;
        self.position = maze.position(self.node).unwrap_or(self.position);
    }

    /// Directions open at the current node, excluding the reverse of the heading
    /// unless it is the only way out.
    pub fn legal_directions(&self, maze: &MazeGraph) -> Vec<Direction> {
        let Some(node) = maze.node(self.node) else {
            return Vec::new();
        };
        let reverse = self.heading.map(Direction::opposite);
        let mut directions: Vec<Direction> =
            node.open_directions().filter(|dir| Some(*dir) != reverse).collect();
        if directions.is_empty()
            && let Some(back) = reverse
            && node.neighbor(back).is_some()
        {
            directions.push(back);
        }
        directions
    }

    /// Head out of the current node in `dir`. A blocked `dir` keeps the old heading
    /// when that is still open, otherwise the mover stops on the node.
    pub fn turn(&mut self, maze: &MazeGraph, dir: Direction) {
        if let Some(next) = maze.neighbor(self.node, dir) {
            self.target = next;
            self.heading = Some(dir);
        } else if let Some(next) = self.heading.and_then(|h| maze.neighbor(self.node, h)) {
            self.target = next;
        } else {
            self.target = self.node;
            self.heading = None;
        }
    }

    /// Turn around mid-edge.
    pub fn reverse(&mut self) {
        if let Some(dir) = self.heading {
            mem::swap(&mut self.node, &mut self.target);
            self.heading = Some(dir.opposite());
        }
    }

    /// Snapshot handed to the ghosts when this mover stands in for the player.
    pub fn player_view(&self) -> PlayerView {
        PlayerView { position: self.position, node: Some(self.node), facing: self.heading }
    }

    /// True when the position lies on the segment between `node` and `target`.
    pub fn is_on_edge(&self, maze: &MazeGraph) -> bool {
        let (Some(a), Some(b)) = (maze.position(self.node), maze.position(self.target)) else {
            return false;
        };
        let span = b - a;
        let offset = self.position - a;
        if span == Vec2::ZERO {
            return offset.length() < 1e-3;
        }
        let t = offset.dot(span) / span.length_squared();
        let off_axis = (offset - span * t).length();
        (-1e-3..=1.0 + 1e-3).contains(&t) && off_axis < 1e-3
    }
}
