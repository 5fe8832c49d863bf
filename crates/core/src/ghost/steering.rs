//! Direction choice at a node, by steering policy and difficulty tier.

use rand_chacha::rand_core::Rng;
use tracing::debug;

use super::*;

impl Ghost {
    /// Pick one of `legal` for the node the ghost is standing on.
    ///
    /// # Panics
    /// When `legal` is empty: every maze node must have at least one exit.
    pub fn choose_direction(&mut self, legal: &[Direction], ctx: &mut TickContext<'_>) -> Direction {
        assert!(!legal.is_empty(), "ghost {:?} reached a node with no exits", self.kind);
        match self.policy {
            SteeringPolicy::GoalSeeking => {
                goal_direction(ctx.maze, self.mover.node, legal, self.target)
            }
            SteeringPolicy::RandomWalk => random_direction(legal, ctx.rng),
            SteeringPolicy::Tiered => self.tiered_direction(legal, ctx),
        }
    }

    fn tiered_direction(&mut self, legal: &[Direction], ctx: &mut TickContext<'_>) -> Direction {
        let maze = ctx.maze;
        let player = ctx.player;
        // (target, whether this ghost perceived the player itself)
        let chase = match self.difficulty {
            Difficulty::Easy => self
                .can_perceive_player(maze, player)
                .then(|| (self.chase_target(player, ctx.leader_position), true)),
            Difficulty::Medium => player
                .filter(|_| self.is_player_within_radius(player))
                .map(|p| (p.position, true)),
            Difficulty::Hard => {
                let seen = self.can_perceive_player(maze, player);
                if seen || (self.forced_chase && player.is_some()) {
                    Some((self.chase_target(player, ctx.leader_position), seen))
                } else {
                    None
                }
            }
        };

        if let Some((target, seen)) = chase {
            debug!(ghost = ?self.kind, x = target.x, y = target.y, seen, "chasing player");
            if seen {
                ctx.log.push(GhostEvent::SpottedPlayer { ghost: self.kind, tick: ctx.tick });
            }
            self.target = target;
            return goal_direction(maze, self.mover.node, legal, self.target);
        }

        let dir = random_direction(legal, ctx.rng);
        if let Some(next) = maze.neighbor(self.mover.node, dir).and_then(|id| maze.position(id)) {
            self.target = next;
        }
        dir
    }
}

/// The legal direction whose neighbor lies closest to `goal`; ties go to the
/// earlier entry of [`Direction::PRIORITY`].
pub(crate) fn goal_direction(
    maze: &MazeGraph,
    at: NodeId,
    legal: &[Direction],
    goal: Vec2,
) -> Direction {
    let mut best: Option<(Direction, f32)> = None;
    for dir in Direction::PRIORITY {
        if !legal.contains(&dir) {
            continue;
        }
        let distance = maze
            .neighbor(at, dir)
            .and_then(|id| maze.position(id))
            .map_or(f32::INFINITY, |pos| pos.distance(goal));
        let better = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if better {
            best = Some((dir, distance));
        }
    }
    best.map_or(legal[0], |(dir, _)| dir)
}

pub(crate) fn random_direction(legal: &[Direction], rng: &mut ChaCha8Rng) -> Direction {
    let pick = rng.next_u64() as usize % legal.len();
    legal[pick]
}
