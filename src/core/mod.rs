// Core types shared by the engine and the game: grid math, directions, motilities

pub mod direction;
pub mod math;
pub mod motility;

pub use direction::Direction;
pub use motility::{Motility, MotilitySet};
