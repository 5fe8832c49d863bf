//! Read-only intersection graph the ghosts navigate.
//! This module owns node storage, neighbor links and the text-layout builder.
//! It does not own movement, perception or any per-tick decision.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use glam::Vec2;
use slotmap::{SlotMap, new_key_type};

use crate::types::Direction;

new_key_type! {
    pub struct NodeId;
}

/// Small symmetric maze used by the viewer and the headless runner.
pub const DEFAULT_LAYOUT: &str = "
    + . . . . + . . + . . . . +
    . X X X X . X X . X X X X .
    . X X X X . X X . X X X X .
    + . . . . + . . + . . . . +
    . X X X X . X X . X X X X .
    + . . . . + X X + . . . . +
    X X X X X . X X . X X X X X
    + . . . . + . . + . . . . +
    . X X X X . X X . X X X X .
    + . . . . + . . + . . . . +
";

const NODE_SYMBOLS: [char; 3] = ['+', 'P', 'n'];
const PATH_SYMBOLS: [char; 4] = ['.', '-', '|', 'p'];

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    neighbors: [Option<NodeId>; 4],
}

impl Node {
    pub fn neighbor(&self, dir: Direction) -> Option<NodeId> {
        self.neighbors[dir.index()]
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.neighbor(*dir).is_some())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MazeGraph {
    nodes: SlotMap<NodeId, Node>,
    by_position: BTreeMap<(i32, i32), NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "maze layout has no rows"),
            LayoutError::RaggedRow { row, expected, found } => {
                write!(f, "maze layout row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl Error for LayoutError {}

fn layout_grid(layout: &str) -> Vec<Vec<char>> {
    layout
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect()
}

/// Columns and rows of a cell layout, measured on its first row.
pub fn layout_dimensions(layout: &str) -> (u32, u32) {
    let grid = layout_grid(layout);
    let cols = grid.first().map_or(0, Vec::len);
    (cols as u32, grid.len() as u32)
}

impl MazeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a cell layout: `+ P n` are nodes, `. - | p` are
    /// corridor cells, anything else blocks. Whitespace between cells is ignored.
    pub fn from_layout(layout: &str, tile_width: f32, tile_height: f32) -> Result<Self, LayoutError> {
        let grid = layout_grid(layout);
        let Some(width) = grid.first().map(Vec::len) else {
            return Err(LayoutError::Empty);
        };
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(LayoutError::RaggedRow { row, expected: width, found: cells.len() });
            }
        }

        let mut maze = MazeGraph::new();
        let mut cell_nodes: BTreeMap<(usize, usize), NodeId> = BTreeMap::new();
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if NODE_SYMBOLS.contains(cell) {
                    let pos = Vec2::new(col as f32 * tile_width, row as f32 * tile_height);
                    cell_nodes.insert((row, col), maze.add_node(pos));
                }
            }
        }

        for (row, cells) in grid.iter().enumerate() {
            let mut open: Option<NodeId> = None;
            for (col, cell) in cells.iter().enumerate() {
                if let Some(&node) = cell_nodes.get(&(row, col)) {
                    if let Some(prev) = open {
                        maze.connect(prev, Direction::Right, node);
                    }
                    open = Some(node);
                } else if !PATH_SYMBOLS.contains(cell) {
                    open = None;
                }
            }
        }

        for col in 0..width {
            let mut open: Option<NodeId> = None;
            for (row, cells) in grid.iter().enumerate() {
                if let Some(&node) = cell_nodes.get(&(row, col)) {
                    if let Some(prev) = open {
                        maze.connect(prev, Direction::Down, node);
                    }
                    open = Some(node);
                } else if !PATH_SYMBOLS.contains(&cells[col]) {
                    open = None;
                }
            }
        }

        Ok(maze)
    }

    /// Insert a node, or return the one already sitting at `position`.
    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        let key = position_key(position);
        if let Some(&existing) = self.by_position.get(&key) {
            return existing;
        }
        let id = self.nodes.insert_with_key(|id| Node { id, position, neighbors: [None; 4] });
        self.by_position.insert(key, id);
        id
    }

    /// Link `from` to `to` in `dir` and `to` back to `from` in the opposite direction.
    pub fn connect(&mut self, from: NodeId, dir: Direction, to: NodeId) {
        if !self.nodes.contains_key(from) || !self.nodes.contains_key(to) {
            return;
        }
        self.nodes[from].neighbors[dir.index()] = Some(to);
        self.nodes[to].neighbors[dir.opposite().index()] = Some(from);
    }

    /// Remove the link leaving `from` in `dir`, and its reverse link.
    pub fn disconnect(&mut self, from: NodeId, dir: Direction) {
        let Some(to) = self.neighbor(from, dir) else {
            return;
        };
        self.nodes[from].neighbors[dir.index()] = None;
        if self.nodes[to].neighbors[dir.opposite().index()] == Some(from) {
            self.nodes[to].neighbors[dir.opposite().index()] = None;
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.nodes.get(id).map(|node| node.position)
    }

    pub fn neighbor(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.neighbor(dir))
    }

    pub fn node_at(&self, position: Vec2) -> Option<NodeId> {
        self.by_position.get(&position_key(position)).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in position order (row-major), stable across runs.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.by_position.values().map(|id| &self.nodes[*id])
    }
}

fn position_key(position: Vec2) -> (i32, i32) {
    (position.y.round() as i32, position.x.round() as i32)
}
