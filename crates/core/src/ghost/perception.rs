//! Whether a ghost can perceive the player.
//! Distance is checked first; line of sight then walks neighbor links along one axis.

use super::*;

impl Ghost {
    /// Distance gate only, without consulting the maze.
    pub fn is_player_within_radius(&self, player: Option<&PlayerView>) -> bool {
        let Some(player) = player else {
            return false;
        };
        player.position.distance(self.mover.position) <= self.vision_radius_px()
    }

    /// Distance gate followed by a straight, unbroken corridor from the ghost's node
    /// to the player's node.
    pub fn can_perceive_player(&self, maze: &MazeGraph, player: Option<&PlayerView>) -> bool {
        if !self.is_player_within_radius(player) {
            return false;
        }
        let Some(player_node) = player.and_then(|player| player.node) else {
            return false;
        };
        has_line_of_sight(maze, self.mover.node, player_node)
    }
}

/// True when `to` is reachable from `from` by repeatedly stepping in the one cardinal
/// direction implied by their shared row or column.
pub fn has_line_of_sight(maze: &MazeGraph, from: NodeId, to: NodeId) -> bool {
    let (Some(a), Some(b)) = (maze.position(from), maze.position(to)) else {
        return false;
    };
    let dir = if a.y == b.y {
        if b.x > a.x { Direction::Right } else { Direction::Left }
    } else if a.x == b.x {
        if b.y > a.y { Direction::Down } else { Direction::Up }
    } else {
        return false;
    };

    let mut current = from;
    // A straight walk never visits more nodes than the graph holds.
    for _ in 0..=maze.len() {
        if current == to {
            return true;
        }
        match maze.neighbor(current, dir) {
            Some(next) => current = next,
            None => return false,
        }
    }
    false
}
