//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from the tick loop.

use std::hash::Hasher;

use slotmap::Key;
use xxhash_rust::xxh3::Xxh3;

use super::*;

impl GhostGroup {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.tick);
        hasher.write_u8(match self.difficulty {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        });
        hasher.write_u8(u8::from(self.any_seen));
        for ghost in &self.ghosts {
            hasher.write_u64(ghost.node().data().as_ffi());
            hasher.write_u32(ghost.position().x.to_bits());
            hasher.write_u32(ghost.position().y.to_bits());
            hasher.write_u8(match ghost.heading() {
                None => 0,
                Some(Direction::Up) => 1,
                Some(Direction::Down) => 2,
                Some(Direction::Left) => 3,
                Some(Direction::Right) => 4,
            });
            hasher.write_u8(match ghost.mode() {
                Mode::Scatter => 0,
                Mode::Chase => 1,
                Mode::Freight => 2,
                Mode::Spawn => 3,
            });
            hasher.write_u32(ghost.target().x.to_bits());
            hasher.write_u32(ghost.target().y.to_bits());
            hasher.write_u8(u8::from(ghost.forced_chase()));
            hasher.write_u32(ghost.points());
            hasher.write_u8(u8::from(ghost.is_visible()));
        }
        hasher.finish()
    }
}
