// Combat data: attacks, hits, weapons and strength scaling

pub mod attack;
pub mod equipment;
pub mod strength;

pub use attack::{AttackInfo, AttackKind, Hit};
pub use equipment::{Equipment, Weapon};
pub use strength::Strength;
