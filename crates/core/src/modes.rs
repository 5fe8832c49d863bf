//! Per-ghost phase timer.
//! This module decides *when* a ghost changes mode and reports it as a signal.
//! It does not apply speed, target or policy changes; the ghost does that.

use crate::config::PhaseTimers;
use crate::types::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSignal {
    EnterFreight,
    EnterSpawn,
    EnterNormal,
}

/// Scatter/chase alternation running underneath the freight and spawn overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MainPhase {
    mode: Mode,
    elapsed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeController {
    timers: PhaseTimers,
    main: MainPhase,
    current: Mode,
    freight_elapsed: f32,
}

impl ModeController {
    pub fn new(timers: PhaseTimers) -> Self {
        Self {
            timers,
            main: MainPhase { mode: Mode::Scatter, elapsed: 0.0 },
            current: Mode::Scatter,
            freight_elapsed: 0.0,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn main_mode(&self) -> Mode {
        self.main.mode
    }

    pub fn reset(&mut self) {
        *self = ModeController::new(self.timers);
    }

    /// Advance the timers. `at_spawn_node` reports whether a returning ghost is home.
    pub fn update(&mut self, dt: f32, at_spawn_node: bool) -> Option<ModeSignal> {
        self.tick_main(dt);
        match self.current {
            Mode::Scatter | Mode::Chase => {
                self.current = self.main.mode;
                None
            }
            Mode::Freight => {
                self.freight_elapsed += dt;
                if self.freight_elapsed >= self.timers.freight_seconds {
                    self.current = self.main.mode;
                    Some(ModeSignal::EnterNormal)
                } else {
                    None
                }
            }
            Mode::Spawn => {
                if at_spawn_node {
                    self.current = self.main.mode;
                    Some(ModeSignal::EnterNormal)
                } else {
                    None
                }
            }
        }
    }

    fn tick_main(&mut self, dt: f32) {
        self.main.elapsed += dt;
        let limit = match self.main.mode {
            Mode::Chase => self.timers.chase_seconds,
            _ => self.timers.scatter_seconds,
        };
        if self.main.elapsed >= limit {
            let next = if self.main.mode == Mode::Scatter { Mode::Chase } else { Mode::Scatter };
            self.main = MainPhase { mode: next, elapsed: 0.0 };
        }
    }

    /// Frighten the ghost. A ghost already frightened has its countdown restarted;
    /// a ghost returning to spawn ignores the request.
    pub fn request_freight(&mut self) -> Option<ModeSignal> {
        match self.current {
            Mode::Scatter | Mode::Chase | Mode::Freight => {
                self.current = Mode::Freight;
                self.freight_elapsed = 0.0;
                Some(ModeSignal::EnterFreight)
            }
            Mode::Spawn => None,
        }
    }

    /// Only a frightened ghost can be sent back to spawn.
    pub fn request_spawn(&mut self) -> Option<ModeSignal> {
        if self.current == Mode::Freight {
            self.current = Mode::Spawn;
            Some(ModeSignal::EnterSpawn)
        } else {
            None
        }
    }
}
