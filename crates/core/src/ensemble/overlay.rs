//! Goal-line overlay for the viewer.

use super::*;

/// A line from a ghost to the point it is currently steering toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalLine {
    pub ghost: GhostKind,
    pub from: Vec2,
    pub to: Vec2,
}

impl GhostGroup {
    /// Goal lines for the visible ghosts, or nothing while the overlay is off.
    pub fn debug_overlay(&self) -> Vec<GoalLine> {
        if !self.show_goals {
            return Vec::new();
        }
        self.ghosts
            .iter()
            .filter(|ghost| ghost.is_visible())
            .map(|ghost| GoalLine { ghost: ghost.kind(), from: ghost.position(), to: ghost.target() })
            .collect()
    }
}
