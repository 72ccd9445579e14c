// Engine modules: frame timing, input, physics, render boundary

pub mod debounce;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
