// Weapons and the hero's equipment

use super::attack::{AttackInfo, AttackKind};

/// How many weapons can be wielded at once
pub const MAX_WIELDED_WEAPONS: usize = 2;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EquipmentError {
    #[error("Cannot wield {0}: both hands are full")]
    HandsFull(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    name: String,
    /// Strength needed to wield it without penalty
    heft: i32,
    attack: AttackInfo,
}

impl Weapon {
    pub fn new(name: &str, heft: i32, attack: AttackInfo) -> Self {
        Self {
            name: name.to_string(),
            heft,
            attack,
        }
    }

    /// A melee weapon whose attack shares its name
    pub fn melee(name: &str, heft: i32, damage: i32) -> Self {
        Self::new(name, heft, AttackInfo::new(name, damage))
    }

    #[allow(dead_code)]
    pub fn ranged(name: &str, heft: i32, damage: i32) -> Self {
        Self::new(
            name,
            heft,
            AttackInfo::with_kind(name, AttackKind::Ranged, damage),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heft(&self) -> i32 {
        self.heft
    }

    pub fn attack_info(&self) -> &AttackInfo {
        &self.attack
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    weapons: Vec<Weapon>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wield a weapon in a free hand
    pub fn wield(&mut self, weapon: Weapon) -> Result<(), EquipmentError> {
        if self.weapons.len() >= MAX_WIELDED_WEAPONS {
            return Err(EquipmentError::HandsFull(weapon.name));
        }
        log::debug!("Wielding {}", weapon.name);
        self.weapons.push(weapon);
        Ok(())
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }
}
