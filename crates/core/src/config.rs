//! Episode configuration: difficulty, seed, maze metrics and phase timers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::maze::layout_dimensions;
use crate::types::{ConfigError, Difficulty};

pub const DEFAULT_TILE_SIZE: f32 = 16.0;
// Arcade board size. Callers building from a layout should use `MazeMetrics::fit_layout`.
pub const DEFAULT_COLS: u32 = 28;
pub const DEFAULT_ROWS: u32 = 36;
pub const DEFAULT_BASE_SPEED: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeMetrics {
    pub tile_width: f32,
    pub tile_height: f32,
    pub cols: u32,
    pub rows: u32,
}

impl Default for MazeMetrics {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl MazeMetrics {
    /// Take `cols` and `rows` from `layout` so scatter corners land on its border.
    pub fn fit_layout(&mut self, layout: &str) {
        let (cols, rows) = layout_dimensions(layout);
        self.cols = cols;
        self.rows = rows;
    }

    pub fn width(&self) -> f32 {
        self.tile_width * self.cols as f32
    }

    pub fn height(&self) -> f32 {
        self.tile_height * self.rows as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTimers {
    pub scatter_seconds: f32,
    pub chase_seconds: f32,
    pub freight_seconds: f32,
}

impl Default for PhaseTimers {
    fn default() -> Self {
        Self { scatter_seconds: 7.0, chase_seconds: 20.0, freight_seconds: 7.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    pub difficulty: Difficulty,
    pub seed: u64,
    pub base_speed: f32,
    /// Flanker aims at the reflection of the leader through a point ahead of the player.
    pub flanker_reflection: bool,
    pub metrics: MazeMetrics,
    pub timers: PhaseTimers,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: 0,
            base_speed: DEFAULT_BASE_SPEED,
            flanker_reflection: false,
            metrics: MazeMetrics::default(),
            timers: PhaseTimers::default(),
        }
    }
}

impl ChaseConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self { difficulty, ..Self::default() }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ChaseConfig =
            toml::from_str(raw).map_err(|err| classify_parse_error(raw, err))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let MazeMetrics { tile_width, tile_height, .. } = self.metrics;
        if !(tile_width.is_finite() && tile_height.is_finite() && tile_width > 0.0 && tile_height > 0.0)
        {
            return Err(ConfigError::InvalidMetrics { tile_width, tile_height });
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.base_speed));
        }
        let PhaseTimers { scatter_seconds, chase_seconds, freight_seconds } = self.timers;
        for (name, seconds) in [
            ("scatter_seconds", scatter_seconds),
            ("chase_seconds", chase_seconds),
            ("freight_seconds", freight_seconds),
        ] {
            if !(seconds.is_finite() && seconds >= 0.0) {
                return Err(ConfigError::InvalidTimer { name, seconds });
            }
        }
        Ok(())
    }
}

// toml folds the try_from error into its own message; recover the typed variant.
fn classify_parse_error(raw: &str, err: toml::de::Error) -> ConfigError {
    #[derive(Deserialize)]
    struct DifficultyOnly {
        difficulty: Option<String>,
    }

    if let Ok(DifficultyOnly { difficulty: Some(value) }) = toml::from_str::<DifficultyOnly>(raw)
        && let Err(unknown) = value.parse::<Difficulty>()
    {
        return unknown;
    }
    ConfigError::Parse(err.message().to_string())
}
