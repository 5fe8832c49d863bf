//! Per-variant target points for scatter and chase.

use super::*;

const LOOK_AHEAD_TILES: f32 = 4.0;
const FLANK_PIVOT_TILES: f32 = 2.0;

/// Fixed maze corner each variant retreats to.
pub fn scatter_target(kind: GhostKind, metrics: &MazeMetrics) -> Vec2 {
    match kind {
        GhostKind::Leader => Vec2::ZERO,
        GhostKind::Ambusher => Vec2::new(metrics.width(), 0.0),
        GhostKind::Flanker => Vec2::new(metrics.width(), metrics.height()),
        GhostKind::Whimsical => Vec2::new(0.0, metrics.height()),
    }
}

impl Ghost {
    pub fn scatter_target(&self) -> Vec2 {
        scatter_target(self.kind, &self.metrics)
    }

    /// Where this variant aims while chasing. Without a player the current target is kept.
    pub fn chase_target(&self, player: Option<&PlayerView>, leader_position: Vec2) -> Vec2 {
        let Some(player) = player else {
            return self.target;
        };
        let tile = self.metrics.tile_width;
        match self.kind {
            GhostKind::Leader | GhostKind::Whimsical => ahead_of(player, LOOK_AHEAD_TILES * tile),
            GhostKind::Ambusher => player.position,
            GhostKind::Flanker if self.flanker_reflection => {
                let pivot = ahead_of(player, FLANK_PIVOT_TILES * tile);
                leader_position + (pivot - leader_position) * 2.0
            }
            GhostKind::Flanker => player.position,
        }
    }
}

fn ahead_of(player: &PlayerView, distance: f32) -> Vec2 {
    player.facing.map_or(player.position, |dir| player.position + dir.vector() * distance)
}
