// Engine modules: input, pacing, rendering

pub mod game_loop;
pub mod input;
pub mod renderer;
