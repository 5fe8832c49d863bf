//! Mode transitions and episode reset.
//! Effects are applied only in response to a [`ModeSignal`] from the mode controller.

use crate::modes::ModeSignal;

use super::*;

const SPAWN_SPEED_FACTOR: f32 = 1.5;
const FREIGHT_SPEED_FACTOR: f32 = 0.5;

impl Ghost {
    /// Eaten: hurry back to the spawn node.
    pub fn enter_spawn(&mut self) {
        self.speed = self.base_speed * SPAWN_SPEED_FACTOR;
        self.target = self.spawn.map_or(Vec2::ZERO, |spawn| spawn.position);
        self.policy = SteeringPolicy::GoalSeeking;
        self.forced_chase = false;
    }

    /// Frightened: slow down and wander, ignoring the player.
    pub fn enter_freight(&mut self) {
        self.speed = self.base_speed * FREIGHT_SPEED_FACTOR;
        self.target = Vec2::ZERO;
        self.policy = SteeringPolicy::RandomWalk;
    }

    pub fn enter_normal(&mut self) {
        self.speed = self.base_speed;
        self.policy = SteeringPolicy::Tiered;
        self.forced_chase = false;
        self.target = Vec2::ZERO;
    }

    pub(super) fn apply_signal(&mut self, signal: ModeSignal) {
        match signal {
            ModeSignal::EnterFreight => self.enter_freight(),
            ModeSignal::EnterSpawn => self.enter_spawn(),
            ModeSignal::EnterNormal => self.enter_normal(),
        }
    }

    /// Ask the mode controller to frighten this ghost. Returns whether it accepted.
    pub fn start_freight(&mut self) -> bool {
        let Some(signal) = self.modes.request_freight() else {
            return false;
        };
        self.apply_signal(signal);
        true
    }

    /// Ask the mode controller to send this (frightened) ghost home.
    pub fn start_spawn(&mut self) -> bool {
        let Some(signal) = self.modes.request_spawn() else {
            return false;
        };
        self.apply_signal(signal);
        true
    }

    /// Back to the start node with default speed, points, policy and mode.
    pub fn reset(&mut self, maze: &MazeGraph) {
        self.mover.reset(maze);
        self.modes.reset();
        self.speed = self.base_speed;
        self.visible = true;
        self.points = DEFAULT_POINTS;
        self.policy = SteeringPolicy::Tiered;
        self.forced_chase = false;
        self.target = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn freight_halves_speed_and_switches_to_random_walk() {
        let (maze, nodes) = corridor(4, 16.0);
        let mut ghost = ghost_at(GhostKind::Leader, &maze, nodes[0], Difficulty::Easy, 16.0);
        assert!(ghost.start_freight());
        assert_eq!(ghost.mode(), Mode::Freight);
        assert_eq!(ghost.speed(), ghost.base_speed() * 0.5);
        assert_eq!(ghost.policy(), SteeringPolicy::RandomWalk);
        assert_eq!(ghost.target(), Vec2::ZERO);
    }

    #[test]
    fn freight_ignores_a_visible_player_until_normal() {
        let (maze, ids) = plus_junction(32.0);
        let mut ghost = ghost_at(GhostKind::Ambusher, &maze, ids.center, Difficulty::Easy, 32.0);
        let player = player_at(&maze, ids.right, None);
        let mut harness = Harness::new(9);
        ghost.start_freight();
        for _ in 0..16 {
            harness.choose(&mut ghost, &maze, Some(&player), false, &Direction::ALL);
        }
        assert!(harness.log.is_empty());
        assert_eq!(ghost.target(), Vec2::ZERO);

        ghost.enter_normal();
        let dir = harness.choose(&mut ghost, &maze, Some(&player), false, &Direction::ALL);
        assert_eq!(dir, Direction::Right);
        assert_eq!(harness.log.len(), 1);
    }

    #[test]
    fn spawn_targets_spawn_node_at_boosted_speed() {
        let (maze, nodes) = corridor(4, 16.0);
        let mut ghost = ghost_at(GhostKind::Flanker, &maze, nodes[0], Difficulty::Hard, 16.0);
        ghost.set_spawn_node(&maze, nodes[3]);
        ghost.forced_chase = true;

        assert!(!ghost.start_spawn(), "spawn requires freight first");
        ghost.start_freight();
        assert!(ghost.start_spawn());
        assert_eq!(ghost.mode(), Mode::Spawn);
        assert_eq!(ghost.speed(), 150.0);
        assert_eq!(ghost.target(), Vec2::new(48.0, 0.0));
        assert_eq!(ghost.policy(), SteeringPolicy::GoalSeeking);
        assert!(!ghost.forced_chase());
    }

    #[test]
    fn spawn_without_spawn_node_targets_origin() {
        let (maze, nodes) = corridor(4, 16.0);
        let mut ghost = ghost_at(GhostKind::Flanker, &maze, nodes[2], Difficulty::Hard, 16.0);
        ghost.enter_spawn();
        assert_eq!(ghost.target(), Vec2::ZERO);
    }

    #[test]
    fn returning_ghost_goes_normal_on_reaching_spawn() {
        let (maze, nodes) = corridor(4, 16.0);
        let mut ghost = ghost_at(GhostKind::Leader, &maze, nodes[0], Difficulty::Easy, 16.0);
        ghost.set_spawn_node(&maze, nodes[3]);
        ghost.start_freight();
        ghost.start_spawn();

        let mut harness = Harness::new(2);
        for _ in 0..120 {
            harness.tick(&mut ghost, &maze, None, 0.016);
            if ghost.mode() != Mode::Spawn {
                break;
            }
        }
        assert_ne!(ghost.mode(), Mode::Spawn);
        assert_eq!(ghost.policy(), SteeringPolicy::Tiered);
        assert_eq!(ghost.speed(), ghost.base_speed());
        assert!(
            harness
                .log
                .iter()
                .any(|event| matches!(event, GhostEvent::ModeChanged { mode: Mode::Scatter, .. }))
        );
    }

    #[test]
    fn reset_is_idempotent() {
        let (maze, nodes) = corridor(6, 16.0);
        let mut ghost = ghost_at(GhostKind::Whimsical, &maze, nodes[0], Difficulty::Hard, 16.0);
        let mut harness = Harness::new(4);
        ghost.start_freight();
        ghost.set_points(800);
        ghost.set_visible(false);
        for _ in 0..30 {
            harness.tick(&mut ghost, &maze, None, 0.016);
        }

        ghost.reset(&maze);
        let once = format!("{ghost:?}");
        ghost.reset(&maze);
        assert_eq!(format!("{ghost:?}"), once);
        assert_eq!(ghost.points(), DEFAULT_POINTS);
        assert_eq!(ghost.mode(), Mode::Scatter);
        assert_eq!(ghost.position(), Vec2::ZERO);
        assert!(ghost.is_visible());
    }
}
