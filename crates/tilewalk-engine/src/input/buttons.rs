//! Logical buttons with level-triggered ("is it held right now?") queries.

use std::collections::{HashMap, HashSet};

use crate::input::queue::InputEvent;

/// The fixed set of logical buttons a game can poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Run = 4,
    Action = 5,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Run,
        Button::Action,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Read side of the input provider, as seen by actors.
pub trait InputProvider {
    /// Whether the button is currently held down.
    fn is_held(&self, button: Button) -> bool;

    /// Whether the button went down during the current frame.
    fn just_pressed(&self, button: Button) -> bool;
}

/// Host key code → logical button table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<u32, Button>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self { keys: HashMap::new() }
    }

    pub fn bind(mut self, key_code: u32, button: Button) -> Self {
        self.keys.insert(key_code, button);
        self
    }

    pub fn button_for(&self, key_code: u32) -> Option<Button> {
        self.keys.get(&key_code).copied()
    }
}

impl Default for KeyBindings {
    /// Arrow keys and WASD to walk, Shift to run, Space or J to act.
    fn default() -> Self {
        Self::empty()
            .bind(38, Button::Up)
            .bind(87, Button::Up)
            .bind(40, Button::Down)
            .bind(83, Button::Down)
            .bind(37, Button::Left)
            .bind(65, Button::Left)
            .bind(39, Button::Right)
            .bind(68, Button::Right)
            .bind(16, Button::Run)
            .bind(32, Button::Action)
            .bind(74, Button::Action)
    }
}

/// Held/pressed state of every logical button, folded from raw key events.
#[derive(Debug, Default)]
pub struct ButtonState {
    keys_down: HashSet<u32>,
    held: u8,
    pressed: u8,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's worth of events into the button state.
    pub fn begin_frame<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
        bindings: &KeyBindings,
    ) {
        let held_before = self.held;
        self.pressed = 0;
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if let Some(button) = bindings.button_for(key_code) {
                        self.keys_down.insert(key_code);
                        if held_before & button.bit() == 0 {
                            self.pressed |= button.bit();
                        }
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.keys_down.remove(&key_code);
                }
                InputEvent::FocusLost => self.keys_down.clear(),
            }
        }
        self.held = self
            .keys_down
            .iter()
            .filter_map(|key| bindings.button_for(*key))
            .fold(0, |acc, button| acc | button.bit());
    }

    pub fn clear(&mut self) {
        self.keys_down.clear();
        self.held = 0;
        self.pressed = 0;
    }
}

impl InputProvider for ButtonState {
    fn is_held(&self, button: Button) -> bool {
        self.held & button.bit() != 0
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.pressed & button.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(state: &mut ButtonState, events: &[InputEvent]) {
        state.begin_frame(events, &KeyBindings::default());
    }

    #[test]
    fn held_until_released() {
        let mut state = ButtonState::new();
        frame(&mut state, &[InputEvent::KeyDown { key_code: 39 }]);
        assert!(state.is_held(Button::Right));
        frame(&mut state, &[]);
        assert!(state.is_held(Button::Right));
        frame(&mut state, &[InputEvent::KeyUp { key_code: 39 }]);
        assert!(!state.is_held(Button::Right));
    }

    #[test]
    fn pressed_only_on_first_frame() {
        let mut state = ButtonState::new();
        frame(&mut state, &[InputEvent::KeyDown { key_code: 32 }]);
        assert!(state.just_pressed(Button::Action));
        // Key repeat sends more KeyDown events while held.
        frame(&mut state, &[InputEvent::KeyDown { key_code: 32 }]);
        assert!(state.is_held(Button::Action));
        assert!(!state.just_pressed(Button::Action));
    }

    #[test]
    fn two_keys_for_one_button() {
        let mut state = ButtonState::new();
        frame(
            &mut state,
            &[InputEvent::KeyDown { key_code: 38 }, InputEvent::KeyDown { key_code: 87 }],
        );
        frame(&mut state, &[InputEvent::KeyUp { key_code: 38 }]);
        assert!(state.is_held(Button::Up));
        frame(&mut state, &[InputEvent::KeyUp { key_code: 87 }]);
        assert!(!state.is_held(Button::Up));
    }

    #[test]
    fn focus_lost_releases_everything() {
        let mut state = ButtonState::new();
        frame(
            &mut state,
            &[InputEvent::KeyDown { key_code: 16 }, InputEvent::KeyDown { key_code: 37 }],
        );
        frame(&mut state, &[InputEvent::FocusLost]);
        assert!(Button::ALL.iter().all(|b| !state.is_held(*b)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut state = ButtonState::new();
        frame(&mut state, &[InputEvent::KeyDown { key_code: 999 }]);
        assert!(Button::ALL.iter().all(|b| !state.is_held(*b)));
    }
}
