use std::error::Error;
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::maze::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Tie-break order used when two candidate moves are equally good.
    pub const PRIORITY: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in screen coordinates (y grows downward).
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Scatter,
    Chase,
    Freight,
    Spawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GhostKind {
    Leader,
    Ambusher,
    Flanker,
    Whimsical,
}

impl GhostKind {
    pub const ALL: [GhostKind; 4] =
        [GhostKind::Leader, GhostKind::Ambusher, GhostKind::Flanker, GhostKind::Whimsical];

    pub(crate) fn index(self) -> usize {
        match self {
            GhostKind::Leader => 0,
            GhostKind::Ambusher => 1,
            GhostKind::Flanker => 2,
            GhostKind::Whimsical => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn vision_radius_tiles(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium | Difficulty::Hard => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(raw.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_string()
    }
}

/// How a ghost picks its next direction at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SteeringPolicy {
    /// Difficulty-dependent perceive-then-chase, otherwise wander.
    Tiered,
    RandomWalk,
    GoalSeeking,
}

/// Read-only snapshot of the player handed to the ghosts every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub node: Option<NodeId>,
    pub facing: Option<Direction>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GhostEvent {
    SpottedPlayer { ghost: GhostKind, tick: u64 },
    GroupAlerted { tick: u64 },
    ModeChanged { ghost: GhostKind, mode: Mode },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    UnknownDifficulty(String),
    Parse(String),
    InvalidMetrics { tile_width: f32, tile_height: f32 },
    InvalidSpeed(f32),
    InvalidTimer { name: &'static str, seconds: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownDifficulty(raw) => {
                write!(f, "unknown difficulty '{raw}' (expected EASY, MEDIUM or HARD)")
            }
            ConfigError::Parse(message) => write!(f, "config parse error: {message}"),
            ConfigError::InvalidMetrics { tile_width, tile_height } => {
                write!(f, "tile size must be positive, got {tile_width}x{tile_height}")
            }
            ConfigError::InvalidSpeed(speed) => {
                write!(f, "base_speed must be positive and finite, got {speed}")
            }
            ConfigError::InvalidTimer { name, seconds } => {
                write!(f, "timers.{name} must be finite and non-negative, got {seconds}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn unknown_difficulty_is_a_config_error() {
        let err = "NIGHTMARE".parse::<Difficulty>().expect_err("should reject");
        assert_eq!(err, ConfigError::UnknownDifficulty("NIGHTMARE".to_string()));
        assert!(err.to_string().contains("NIGHTMARE"));
    }

    #[test]
    fn vision_radius_follows_difficulty() {
        assert_eq!(Difficulty::Easy.vision_radius_tiles(), 10);
        assert_eq!(Difficulty::Medium.vision_radius_tiles(), 7);
        assert_eq!(Difficulty::Hard.vision_radius_tiles(), 7);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.vector() + dir.opposite().vector(), Vec2::ZERO);
        }
    }
}
