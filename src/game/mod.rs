// Gameplay: entities, combat, level layout and the per-frame world update

pub mod characters;
pub mod combat;
pub mod config;
pub mod level;
pub mod world;

pub use config::{Control, GameConfig, WindowSize};
pub use level::Level;
pub use world::{FrameReport, World};

use characters::EntityId;

/// Errors raised while building entities or the world from configuration
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Entity {id} has no sprite frames")]
    MissingSprite { id: EntityId },

    #[error("Entity {id} has invalid {what}: {value}")]
    InvalidDimensions {
        id: EntityId,
        what: &'static str,
        value: f64,
    },

    #[error("Entity {id} has crit chance {value}, expected 0-100")]
    InvalidCritChance { id: EntityId, value: f64 },

    #[error("Window size must be positive, got {width}x{height}")]
    InvalidWindow { width: f64, height: f64 },

    #[error("No movement controls configured")]
    EmptyControls,
}
