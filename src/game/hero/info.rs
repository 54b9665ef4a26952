// Hero data and starting values

use glam::Vec4;

use crate::core::MotilitySet;
use crate::engine::renderer::Tileset;
use crate::game::combat::{Equipment, Strength, Weapon};
use crate::game::entity::GraphicsData;

/// Starting max health
pub const HERO_MAX_HEALTH: i32 = 20;

/// Starting strength
pub const HERO_STRENGTH: i32 = 10;

/// Hero draws above monsters
pub const HERO_Z_ORDER: f32 = 10.0;

/// Tileset tile name of the hero sprite
pub const HERO_TILE: &str = "hero";

/// Weapon a hero entering the arena carries
pub const STARTING_WEAPON: &str = "Short Sword";

/// Heft matches `HERO_STRENGTH`, so the sword hits unscaled
pub const STARTING_WEAPON_HEFT: i32 = 10;

pub const STARTING_WEAPON_DAMAGE: i32 = 4;

const HERO_COLOR: Vec4 = Vec4::new(0.95, 0.85, 0.3, 1.0);

/// Everything that defines a hero apart from where it stands
#[derive(Debug, Clone)]
pub struct HeroInfo {
    pub name: String,
    pub max_health: i32,
    pub strength: Strength,
    pub equipment: Equipment,
    pub motilities: MotilitySet,
    pub graphics: GraphicsData,
}

impl HeroInfo {
    /// A fresh unarmed hero
    pub fn new(name: &str, graphics: GraphicsData) -> Self {
        Self {
            name: name.to_string(),
            max_health: HERO_MAX_HEALTH,
            strength: Strength::new(HERO_STRENGTH),
            equipment: Equipment::new(),
            motilities: MotilitySet::walking(),
            graphics,
        }
    }

    /// A hero ready for the arena: drawn with the tileset's hero tile and
    /// wielding the starting weapon
    pub fn from_tileset(name: &str, tileset: &Tileset) -> Self {
        let graphics =
            GraphicsData::from_tileset(tileset, HERO_TILE, HERO_COLOR).with_z_order(HERO_Z_ORDER);
        let mut info = Self::new(name, graphics);

        let weapon = Weapon::melee(STARTING_WEAPON, STARTING_WEAPON_HEFT, STARTING_WEAPON_DAMAGE);
        if let Err(err) = info.equipment.wield(weapon) {
            log::warn!("{} starts unarmed: {}", info.name, err);
        }
        info
    }
}

impl Default for HeroInfo {
    fn default() -> Self {
        Self::new("Hero", GraphicsData::default().with_z_order(HERO_Z_ORDER))
    }
}
