// Input handling
//
// - `action`: game actions and default key bindings
// - `config`: key remapping
// - `state`: held actions sampled by the simulation once per frame
//
// ## Usage Example
//
// ```rust
// use ledge_runner::engine::input::{Action, InputConfig, InputState};
//
// let config = InputConfig::default();
// let mut input = InputState::new();
//
// // In your event loop, feed keyboard events
// // input.process_keyboard_event(&key_event, &config);
//
// if input.is_pressed(Action::MoveRight) {
//     // Run right
// }
// ```

pub mod action;
pub mod config;
pub mod state;

// Re-export commonly used types
pub use action::{default_bindings, Action};
pub use config::InputConfig;
pub use state::InputState;
