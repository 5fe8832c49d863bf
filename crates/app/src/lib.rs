use chase_core::{Difficulty, Mode};

pub mod app_loop;
pub mod seed;
pub mod session;

pub const APP_NAME: &str = "Maze Chase Viewer";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Short label used in the status line for a ghost's mode.
pub fn mode_code(mode: Mode) -> &'static str {
    match mode {
        Mode::Scatter => "SCT",
        Mode::Chase => "CHS",
        Mode::Freight => "FRT",
        Mode::Spawn => "SPN",
    }
}

pub fn status_line(tick: u64, difficulty: Difficulty, alerted: bool, hash: u64) -> String {
    let alert = if alerted { " ALERT" } else { "" };
    format!("tick {tick} {}{alert} hash {}", difficulty.label(), format_snapshot_hash(hash))
}
