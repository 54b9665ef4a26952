// Entities: anything with a position, health and a turn in the arena

use std::fmt;

use glam::{IVec2, Vec2};

use crate::core::MotilitySet;
use crate::engine::renderer::{RenderTarget, Sprite, Tileset};

use super::action::Action;
use super::combat::Hit;

/// Unique identifier for an entity
pub type EntityId = u32;

/// The hero always carries this id; monsters are numbered from 1
pub const HERO_ID: EntityId = 0;

/// Data every entity carries
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCore {
    pub id: EntityId,
    pub name: String,
    pub position: IVec2,
    health: i32,
    max_health: i32,
}

impl EntityCore {
    /// New entity data. Health starts at zero and must be raised by the owner.
    pub fn new(id: EntityId, name: &str, position: IVec2, max_health: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            position,
            health: 0,
            max_health,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Heal up to max health, returning the amount actually gained
    pub fn increase_health(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health.max(0));
        self.health - before
    }

    /// Lose health down to zero, returning the amount actually lost
    pub fn decrease_health(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        before - self.health
    }
}

impl fmt::Display for EntityCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} [{}/{}]",
            self.name, self.id, self.health, self.max_health
        )
    }
}

/// Sprite plus the grid scale used to place it
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsData {
    pub sprite: Sprite,
    pub tile_size: f32,
}

impl GraphicsData {
    pub fn new(sprite: Sprite, tile_size: f32) -> Self {
        Self { sprite, tile_size }
    }

    /// Graphics for a named tile tinted with `color`, or a flat quad of that
    /// color if the tileset lacks it
    pub fn from_tileset(tileset: &Tileset, name: &str, color: glam::Vec4) -> Self {
        let tile_size = tileset.tile_size() as f32;
        let sprite = match tileset.region(name) {
            Some(region) => Sprite::from_region(region),
            None => {
                log::warn!("Tileset has no '{}' tile, using a flat sprite", name);
                Sprite::new(Vec2::ZERO, Vec2::splat(tile_size))
            }
        };
        Self::new(sprite.with_color(color), tile_size)
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.sprite.z_order = z_order;
        self
    }

    /// Move the sprite onto a grid cell
    pub fn set_grid_position(&mut self, position: IVec2) {
        self.sprite.set_position(world_position(position, self.tile_size));
    }
}

impl Default for GraphicsData {
    fn default() -> Self {
        Self::new(Sprite::new(Vec2::ZERO, Vec2::splat(16.0)), 16.0)
    }
}

/// Pixel position of the top-left corner of a grid cell
pub fn world_position(grid: IVec2, tile_size: f32) -> Vec2 {
    grid.as_vec2() * tile_size
}

/// Behaviour shared by the hero and monsters.
///
/// The hooks default to doing nothing; implementors override the ones they
/// care about.
pub trait Entity: fmt::Display {
    fn core(&self) -> &EntityCore;

    fn core_mut(&mut self) -> &mut EntityCore;

    fn id(&self) -> EntityId {
        self.core().id
    }

    fn position(&self) -> IVec2 {
        self.core().position
    }

    fn health(&self) -> i32 {
        self.core().health()
    }

    fn max_health(&self) -> i32 {
        self.core().max_health()
    }

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// How this entity can cross terrain
    fn motilities(&self) -> MotilitySet {
        MotilitySet::walking()
    }

    /// Change position and notify `on_move`
    fn move_to(&mut self, new_position: IVec2) {
        let old_position = self.position();
        self.core_mut().position = new_position;
        self.on_move(old_position, new_position);
    }

    fn on_move(&mut self, _old_position: IVec2, _new_position: IVec2) {}

    /// Hits this entity lands on `opponent` in one melee attack
    fn generate_melee_hits(&self, opponent: &dyn Entity) -> Vec<Hit>;

    fn on_give_damage(&mut self, _action: &Action, _damage: i32, _defender: Option<&dyn Entity>) {}

    fn on_receive_damage(
        &mut self,
        _action: &Action,
        _damage: i32,
        _opponent: Option<&dyn Entity>,
    ) {
    }

    fn on_killed(&mut self, _opponent: Option<&dyn Entity>) {}

    fn draw(&self, target: &mut dyn RenderTarget);
}
