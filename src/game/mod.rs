// Game rules: the hero, monsters, actions and the turn loop

pub mod action;
pub mod arena;
pub mod combat;
pub mod entity;
pub mod hero;
pub mod monster;
pub mod turn;

pub use arena::GameArena;
pub use turn::{Game, TurnOutcome};
