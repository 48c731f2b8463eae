use std::collections::HashSet;

use super::types::Key;

/// Key transitions seen since the last frame.
///
/// `InputState` answers "held right now"; this answers "pressed at some point
/// this frame", which survives a press and release arriving in one event batch.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
