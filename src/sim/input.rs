//! Control state fed by host keyboard events

use serde::{Deserialize, Serialize};

use crate::consts::{KEY_A, KEY_D, KEY_W};

/// The three logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Jump,
    Left,
    Right,
}

/// Key code assigned to each control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: KEY_W,
            left: KEY_A,
            right: KEY_D,
        }
    }
}

impl KeyBindings {
    pub fn control_for(&self, key_code: u32) -> Option<Control> {
        if key_code == self.jump {
            Some(Control::Jump)
        } else if key_code == self.left {
            Some(Control::Left)
        } else if key_code == self.right {
            Some(Control::Right)
        } else {
            None
        }
    }
}

/// Pressed/released status of each control
///
/// Written by key events between frames, read once per frame step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Jump => self.up = pressed,
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
        }
    }

    /// Apply a key-down (`pressed`) or key-up event.
    /// Returns false for key codes that map to no control.
    pub fn key_event(&mut self, bindings: &KeyBindings, key_code: u32, pressed: bool) -> bool {
        match bindings.control_for(key_code) {
            Some(control) => {
                self.set(control, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wad_mapping() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.control_for(87), Some(Control::Jump));
        assert_eq!(bindings.control_for(65), Some(Control::Left));
        assert_eq!(bindings.control_for(68), Some(Control::Right));
        assert_eq!(bindings.control_for(83), None); // S
    }

    #[test]
    fn test_key_down_then_up() {
        let bindings = KeyBindings::default();
        let mut input = InputState::default();

        assert!(input.key_event(&bindings, KEY_D, true));
        assert!(input.right);
        assert!(!input.left && !input.up);

        assert!(input.key_event(&bindings, KEY_D, false));
        assert!(!input.right);
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let bindings = KeyBindings::default();
        let mut input = InputState::default();
        assert!(!input.key_event(&bindings, 32, true));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_rebound_keys() {
        // Arrow keys
        let bindings = KeyBindings { jump: 38, left: 37, right: 39 };
        let mut input = InputState::default();
        assert!(input.key_event(&bindings, 38, true));
        assert!(input.up);
        assert!(!input.key_event(&bindings, KEY_W, true));
    }
}
