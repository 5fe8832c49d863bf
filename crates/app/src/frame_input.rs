//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const ARROW_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

const COMMAND_KEYS: [KeyCode; 8] = [
    KeyCode::Space,
    KeyCode::Right,
    KeyCode::G,
    KeyCode::F,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::R,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_down: Vec<KeyCode>,
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = ARROW_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    let keys_pressed = COMMAND_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    FrameInput { keys_down, keys_pressed }
}
