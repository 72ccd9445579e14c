// Game configuration: window, gravity, controls and tuning values

use glam::DVec2;

use crate::engine::input::{Action, InputConfig};

use super::characters::PLAYER_SPEED;
use super::GameError;

/// Logical screen size in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        DEFAULT_WINDOW
    }
}

pub const DEFAULT_WINDOW: WindowSize = WindowSize::new(800.0, 600.0);

/// Per-frame displacement applied while an action is held
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub action: Action,
    pub delta: DVec2,
}

impl Control {
    pub fn new(action: Action, dx: f64, dy: f64) -> Self {
        Self {
            action,
            delta: DVec2::new(dx, dy),
        }
    }
}

/// Movement controls for a runner moving `speed` units per step
pub fn default_controls(speed: f64) -> Vec<Control> {
    vec![
        Control::new(Action::Jump, 0.0, -10.0),
        Control::new(Action::MoveLeft, -3.0 * speed, 0.0),
        Control::new(Action::MoveRight, 3.0 * speed, 0.0),
    ]
}

/// Everything the world needs besides the level layout
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window: WindowSize,
    /// Gravity step applied to falling entities each frame
    pub gravity: DVec2,
    pub controls: Vec<Control>,
    pub input: InputConfig,
    /// Health restored by a coin
    pub coin_heal: f64,
    /// Let coin healing go above max health
    pub heal_past_max: bool,
    pub crit_banner_seconds: f64,
    pub crit_banner_text: String,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            gravity: DVec2::new(0.0, 5.0),
            controls: default_controls(PLAYER_SPEED),
            input: InputConfig::default(),
            coin_heal: 10.0,
            heal_past_max: false,
            crit_banner_seconds: 1.0,
            crit_banner_text: "Critical!".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_window(mut self, width: f64, height: f64) -> Self {
        self.window = WindowSize::new(width, height);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let WindowSize { width, height } = self.window;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GameError::InvalidWindow { width, height });
        }
        if self.controls.is_empty() {
            return Err(GameError::EmptyControls);
        }
        Ok(())
    }
}
