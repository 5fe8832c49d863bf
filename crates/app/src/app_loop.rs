use chase_core::{Difficulty, Direction, GhostEvent};
use macroquad::prelude::KeyCode;

use crate::session::{Contact, Session};

#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum AppMode {
    #[default]
    Paused,
    Running,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Ghost events emitted during the current frame's `tick()` call.
    pub frame_events: Vec<GhostEvent>,
    /// Most recent player/ghost contact, kept for the status line.
    pub last_contact: Option<Contact>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this frame's key presses, then step the session once when running.
    /// `keys_down` carries held arrow keys; `keys_pressed` carries one-shot commands.
    pub fn tick(&mut self, session: &mut Session, keys_down: &[KeyCode], keys_pressed: &[KeyCode]) {
        self.frame_events.clear();

        if let Some(dir) = keys_down.iter().find_map(|key| arrow_direction(*key)) {
            session.steer(dir);
        }

        if keys_pressed.contains(&KeyCode::Space) {
            self.mode = match self.mode {
                AppMode::Paused => AppMode::Running,
                AppMode::Running => AppMode::Paused,
            };
        }
        self.handle_command_keys(session, keys_pressed);

        let single_step = self.mode == AppMode::Paused && keys_pressed.contains(&KeyCode::Right);
        if self.mode == AppMode::Running || single_step {
            if let Some(contact) = session.step() {
                self.last_contact = Some(contact);
            }
        }
        self.frame_events.extend(session.group_mut().take_log());
    }

    fn handle_command_keys(&mut self, session: &mut Session, keys_pressed: &[KeyCode]) {
        if keys_pressed.contains(&KeyCode::G) {
            session.group_mut().toggle_goals();
        }
        if keys_pressed.contains(&KeyCode::F) {
            session.group_mut().start_freight();
        }
        let difficulty = if keys_pressed.contains(&KeyCode::Key1) {
            Some(Difficulty::Easy)
        } else if keys_pressed.contains(&KeyCode::Key2) {
            Some(Difficulty::Medium)
        } else if keys_pressed.contains(&KeyCode::Key3) {
            Some(Difficulty::Hard)
        } else {
            None
        };
        if let Some(difficulty) = difficulty {
            session.group_mut().set_difficulty(difficulty);
        }
        if keys_pressed.contains(&KeyCode::R) {
            session.reset();
            self.last_contact = None;
        }
    }
}

fn arrow_direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
