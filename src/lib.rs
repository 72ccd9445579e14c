// Side-scrolling platformer simulation: geometry, collision, animation,
// jump physics, melee combat and the per-frame world update.

pub mod core;
pub mod engine;
pub mod game;
