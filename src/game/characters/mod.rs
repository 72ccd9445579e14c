// Character system
//
// This module contains everything related to on-screen entities:
// - Entity data, placement and construction
// - Player flags and movement helpers
// - Combat stats presets
// - Animation clips and the frame cursor

pub mod animation;
pub mod entity;
pub mod player;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationState, Clip, ClipSpec, TickOutcome};
pub use entity::{Entity, EntityDesc, EntityId, NON_COMBATANT_ID, PLAYER_ID};
pub use player::{Player, PLAYER_SPEED};
pub use stats::{CombatStats, BAT_STATS, INERT_STATS, PLAYER_STATS};
