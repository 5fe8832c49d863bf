pub mod config;
pub mod ensemble;
pub mod ghost;
pub mod kinematics;
pub mod maze;
pub mod modes;
pub mod types;

pub use config::{ChaseConfig, MazeMetrics, PhaseTimers};
pub use ensemble::{GhostGroup, GoalLine};
pub use ghost::{Ghost, TickContext, has_line_of_sight, scatter_target};
pub use kinematics::Mover;
pub use maze::{LayoutError, MazeGraph, NodeId};
pub use types::*;
