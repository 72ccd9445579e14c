// Held-action state sampled once per frame

use super::action::Action;
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Which actions are held
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent, config: &InputConfig) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed if !event.repeat => self.press_key(key_code, config),
                ElementState::Pressed => {}
                ElementState::Released => self.release_key(key_code, config),
            }
        }
    }

    /// Register a key press through the bindings
    pub fn press_key(&mut self, key: KeyCode, config: &InputConfig) {
        if let Some(action) = config.action_for(key) {
            self.press(action);
        }
    }

    /// Register a key release through the bindings
    pub fn release_key(&mut self, key: KeyCode, config: &InputConfig) {
        if let Some(action) = config.action_for(key) {
            self.release(action);
        }
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Release everything
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
