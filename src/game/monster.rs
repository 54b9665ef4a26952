// Monsters: simple opponents that close in and attack the hero

use std::fmt;

use glam::{IVec2, Vec4};

use crate::core::math::grid_distance;
use crate::core::{Direction, Motility, MotilitySet};
use crate::engine::renderer::{RenderTarget, Tileset};

use super::action::ActionKind;
use super::combat::{AttackInfo, Hit};
use super::entity::{Entity, EntityCore, EntityId, GraphicsData};

/// Monsters draw above tiles and below the hero
pub const MONSTER_Z_ORDER: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    Rat,
    Goblin,
    Bat,
}

impl MonsterKind {
    /// Glyph used in ASCII arena layouts
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'r' => Some(Self::Rat),
            'g' => Some(Self::Goblin),
            'b' => Some(Self::Bat),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Goblin => "Goblin",
            Self::Bat => "Bat",
        }
    }

    pub fn max_health(self) -> i32 {
        match self {
            Self::Rat => 3,
            Self::Goblin => 8,
            Self::Bat => 4,
        }
    }

    pub fn attack(self) -> AttackInfo {
        match self {
            Self::Rat => AttackInfo::new("Bite", 1),
            Self::Goblin => AttackInfo::new("Rusty Knife", 3),
            Self::Bat => AttackInfo::new("Claws", 2),
        }
    }

    /// How far the monster notices the hero from
    pub fn sight_radius(self) -> i32 {
        match self {
            Self::Rat => 4,
            Self::Goblin => 6,
            Self::Bat => 8,
        }
    }

    pub fn motilities(self) -> MotilitySet {
        match self {
            Self::Rat => MotilitySet::walking().with(Motility::Swim),
            Self::Goblin => MotilitySet::walking(),
            Self::Bat => MotilitySet::EMPTY.with(Motility::Fly),
        }
    }

    /// Tileset tile name
    pub fn tile_name(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Goblin => "goblin",
            Self::Bat => "bat",
        }
    }

    /// Flat color used when the tileset lacks the tile
    pub fn color(self) -> Vec4 {
        match self {
            Self::Rat => Vec4::new(0.6, 0.5, 0.4, 1.0),
            Self::Goblin => Vec4::new(0.3, 0.8, 0.3, 1.0),
            Self::Bat => Vec4::new(0.5, 0.3, 0.6, 1.0),
        }
    }

    pub fn graphics(self, tileset: &Tileset) -> GraphicsData {
        GraphicsData::from_tileset(tileset, self.tile_name(), self.color())
            .with_z_order(MONSTER_Z_ORDER)
    }
}

#[derive(Debug, Clone)]
pub struct Monster {
    core: EntityCore,
    kind: MonsterKind,
    graphics: GraphicsData,
}

impl Monster {
    /// Create a monster at full health
    pub fn new(id: EntityId, kind: MonsterKind, position: IVec2, graphics: GraphicsData) -> Self {
        let mut monster = Self {
            core: EntityCore::new(id, kind.name(), position, kind.max_health()),
            kind,
            graphics,
        };
        monster.core.increase_health(kind.max_health());
        monster.graphics.set_grid_position(position);
        monster
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn graphics(&self) -> &GraphicsData {
        &self.graphics
    }

    /// Step toward a hero it can see, otherwise stay put.
    /// Stepping into the hero turns into an attack.
    pub fn choose_action(&self, hero_position: IVec2) -> ActionKind {
        if grid_distance(self.position(), hero_position) <= self.kind.sight_radius() {
            ActionKind::Walk(Direction::toward(self.position(), hero_position))
        } else {
            ActionKind::Rest
        }
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core)
    }
}

impl Entity for Monster {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn motilities(&self) -> MotilitySet {
        self.kind.motilities()
    }

    fn on_move(&mut self, _old_position: IVec2, new_position: IVec2) {
        self.graphics.set_grid_position(new_position);
    }

    fn generate_melee_hits(&self, _opponent: &dyn Entity) -> Vec<Hit> {
        vec![Hit::new(self.kind.attack())]
    }

    fn on_killed(&mut self, opponent: Option<&dyn Entity>) {
        if let Some(opponent) = opponent {
            log::debug!("{} slain by {}", self, opponent);
        }
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw(&self.graphics.sprite);
    }
}
