// Engine modules: renderer, physics, input, timing

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
