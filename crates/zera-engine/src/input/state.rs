use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{Key, KeyState};

/// Current keyboard state for the window.
///
/// Answers "is this key held right now", the query the loop polls once per
/// iteration.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Records a key transition into the held set and into `frame`.
    ///
    /// Returns `true` when the transition changed the held set (auto-repeat
    /// presses of an already-held key return `false`).
    pub fn apply(&mut self, frame: &mut InputFrame, key: Key, state: KeyState) -> bool {
        let changed = match state {
            KeyState::Pressed => self.keys_down.insert(key),
            KeyState::Released => self.keys_down.remove(&key),
        };
        if changed {
            match state {
                KeyState::Pressed => frame.keys_pressed.insert(key),
                KeyState::Released => frame.keys_released.insert(key),
            };
        }
        changed
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Releases never arrive for keys let go while unfocused.
            self.keys_down.clear();
        }
    }

    pub fn key_state(&self, key: Key) -> KeyState {
        if self.keys_down.contains(&key) {
            KeyState::Pressed
        } else {
            KeyState::Released
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.key_state(key) == KeyState::Pressed
    }
}
