// Attacks and the hits they produce

use std::ops::MulAssign;

/// How an attack reaches its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackKind {
    #[default]
    Melee,
    Ranged,
}

/// Static description of an attack (a weapon's swing, a monster's bite)
#[derive(Debug, Clone, PartialEq)]
pub struct AttackInfo {
    name: String,
    kind: AttackKind,
    damage: i32,
}

impl AttackInfo {
    /// Create a melee attack
    pub fn new(name: &str, damage: i32) -> Self {
        Self::with_kind(name, AttackKind::Melee, damage)
    }

    pub fn with_kind(name: &str, kind: AttackKind, damage: i32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }
}

/// One attack in flight, with its damage scaling applied
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    attack: AttackInfo,
    scale: f32,
}

impl Hit {
    pub fn new(attack: AttackInfo) -> Self {
        Self { attack, scale: 1.0 }
    }

    pub fn attack(&self) -> &AttackInfo {
        &self.attack
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Damage dealt by this hit, rounded and never negative
    pub fn damage(&self) -> i32 {
        ((self.attack.damage as f32 * self.scale).round() as i32).max(0)
    }
}

impl From<AttackInfo> for Hit {
    fn from(attack: AttackInfo) -> Self {
        Self::new(attack)
    }
}

impl MulAssign<f32> for Hit {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale *= rhs;
    }
}
