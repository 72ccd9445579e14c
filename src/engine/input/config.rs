// Input configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove the binding for a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.action_to_keys
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.action_for(KeyCode::ArrowUp), Some(Action::Jump));
        assert_eq!(config.action_for(KeyCode::KeyZ), Some(Action::Attack));
        assert_eq!(config.action_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_rebind_key() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::ArrowUp, Action::Attack);

        assert_eq!(config.action_for(KeyCode::ArrowUp), Some(Action::Attack));
        assert!(config.keys_for(Action::Jump).is_empty());
        assert_eq!(config.keys_for(Action::Attack).len(), 2);
    }

    #[test]
    fn test_unbind_key() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyA, Action::MoveLeft);
        config.unbind_key(KeyCode::ArrowLeft);

        assert_eq!(config.action_for(KeyCode::ArrowLeft), None);
        assert_eq!(config.keys_for(Action::MoveLeft), vec![KeyCode::KeyA]);

        config.unbind_key(KeyCode::KeyA);
        assert!(config.keys_for(Action::MoveLeft).is_empty());
    }
}
