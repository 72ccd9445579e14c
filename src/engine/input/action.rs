// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Combat
    Attack,
    StrongAttack,

    // Meta actions
    ToggleDebug,
    Quit,
}

impl Action {
    /// Meta actions are routed through a debouncer instead of the simulation
    pub fn is_meta(&self) -> bool {
        matches!(self, Self::ToggleDebug | Self::Quit)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (arrow keys)
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        // Combat
        (KeyCode::KeyZ, Action::Attack),
        (KeyCode::KeyX, Action::StrongAttack),
        // Meta
        (KeyCode::KeyD, Action::ToggleDebug),
        (KeyCode::Escape, Action::Quit),
    ]
}
