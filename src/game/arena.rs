// The arena: a tile grid and the monsters standing on it

use glam::{IVec2, Vec4};

use crate::core::{Motility, MotilitySet};
use crate::engine::renderer::{RenderTarget, Sprite, Tileset};

use super::entity::{world_position, Entity, EntityId, GraphicsData};
use super::monster::{Monster, MonsterKind};

/// Tiles draw at the back
const TILE_Z_ORDER: f32 = 0.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Arena layout is empty")]
    Empty,

    #[error("Row {row} is {actual} tiles wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown glyph '{glyph}' at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("Arena layout has no hero spawn '@'")]
    MissingHeroSpawn,

    #[error("Arena layout has more than one hero spawn '@'")]
    DuplicateHeroSpawn,

    #[error("Position {0} is outside the arena")]
    OutOfBounds(IVec2),

    #[error("Position {0} cannot be entered")]
    Blocked(IVec2),

    #[error("Position {0} is already occupied")]
    Occupied(IVec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Water,
    Chasm,
}

impl Tile {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '~' => Some(Self::Water),
            ':' => Some(Self::Chasm),
            _ => None,
        }
    }

    /// Motilities that can cross this tile (any one is enough)
    pub fn traversal(self) -> MotilitySet {
        match self {
            Self::Floor => MotilitySet::EMPTY.with(Motility::Walk).with(Motility::Fly),
            Self::Water => MotilitySet::EMPTY.with(Motility::Swim).with(Motility::Fly),
            Self::Chasm => MotilitySet::EMPTY.with(Motility::Fly),
            Self::Wall => MotilitySet::EMPTY,
        }
    }

    pub fn tile_name(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Water => "water",
            Self::Chasm => "chasm",
        }
    }

    pub fn color(self) -> Vec4 {
        match self {
            Self::Floor => Vec4::new(0.25, 0.22, 0.2, 1.0),
            Self::Wall => Vec4::new(0.5, 0.5, 0.55, 1.0),
            Self::Water => Vec4::new(0.15, 0.3, 0.7, 1.0),
            Self::Chasm => Vec4::new(0.02, 0.02, 0.05, 1.0),
        }
    }
}

/// A parsed ASCII layout: the arena plus where everything starts
#[derive(Debug)]
pub struct ArenaLayout {
    pub arena: GameArena,
    pub hero_spawn: IVec2,
    pub monster_spawns: Vec<(MonsterKind, IVec2)>,
}

#[derive(Debug, Clone)]
pub struct GameArena {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    monsters: Vec<Monster>,
    next_monster_id: EntityId,
}

impl GameArena {
    /// An arena filled with one tile
    pub fn new(width: i32, height: i32, fill: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![fill; (width * height) as usize],
            monsters: Vec::new(),
            next_monster_id: 1,
        }
    }

    /// Parse an ASCII layout.
    ///
    /// `#` wall, `.` floor, `~` water, `:` chasm, `@` hero spawn, and a
    /// monster glyph (`r`, `g`, `b`) spawns that monster on floor. Blank
    /// lines and trailing whitespace are ignored.
    pub fn from_ascii(layout: &str) -> Result<ArenaLayout, ArenaError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().ok_or(ArenaError::Empty)?.chars().count();
        let mut arena = Self::new(width as i32, rows.len() as i32, Tile::Floor);
        let mut hero_spawn = None;
        let mut monster_spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(ArenaError::Ragged {
                    row: y,
                    expected: width,
                    actual,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let position = IVec2::new(x as i32, y as i32);
                let tile = if let Some(tile) = Tile::from_glyph(glyph) {
                    tile
                } else if glyph == '@' {
                    if hero_spawn.replace(position).is_some() {
                        return Err(ArenaError::DuplicateHeroSpawn);
                    }
                    Tile::Floor
                } else if let Some(kind) = MonsterKind::from_glyph(glyph) {
                    monster_spawns.push((kind, position));
                    Tile::Floor
                } else {
                    return Err(ArenaError::UnknownGlyph { glyph, x, y });
                };
                arena.set_tile(position, tile)?;
            }
        }

        let hero_spawn = hero_spawn.ok_or(ArenaError::MissingHeroSpawn)?;
        log::info!(
            "Parsed {}x{} arena with {} monster spawns",
            arena.width,
            arena.height,
            monster_spawns.len()
        );

        Ok(ArenaLayout {
            arena,
            hero_spawn,
            monster_spawns,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn index(&self, position: IVec2) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y * self.width + position.x) as usize)
    }

    pub fn tile(&self, position: IVec2) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    pub fn set_tile(&mut self, position: IVec2, tile: Tile) -> Result<(), ArenaError> {
        let index = self
            .index(position)
            .ok_or(ArenaError::OutOfBounds(position))?;
        self.tiles[index] = tile;
        Ok(())
    }

    /// Whether something with these motilities can stand on `position`
    pub fn can_enter(&self, position: IVec2, motilities: MotilitySet) -> bool {
        self.tile(position)
            .is_some_and(|tile| tile.traversal().intersects(motilities))
    }

    /// Every tile with its grid position, row by row
    pub fn tiles(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let index = index as i32;
            (IVec2::new(index % self.width, index / self.width), *tile)
        })
    }

    /// Place a monster, returning its id
    pub fn spawn_monster(
        &mut self,
        kind: MonsterKind,
        position: IVec2,
        graphics: GraphicsData,
    ) -> Result<EntityId, ArenaError> {
        if !self.in_bounds(position) {
            return Err(ArenaError::OutOfBounds(position));
        }
        if !self.can_enter(position, kind.motilities()) {
            return Err(ArenaError::Blocked(position));
        }
        if self.monster_at(position).is_some() {
            return Err(ArenaError::Occupied(position));
        }

        let id = self.next_monster_id;
        self.next_monster_id += 1;
        self.monsters
            .push(Monster::new(id, kind, position, graphics));
        log::debug!("Spawned {} #{} at {}", kind.name(), id, position);

        Ok(id)
    }

    /// Id of the living monster standing on `position`
    pub fn monster_at(&self, position: IVec2) -> Option<EntityId> {
        self.monsters
            .iter()
            .find(|m| m.is_alive() && m.position() == position)
            .map(|m| m.id())
    }

    pub fn monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    pub fn monster_mut(&mut self, id: EntityId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id() == id)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Ids of all monsters, in turn order
    pub fn monster_ids(&self) -> Vec<EntityId> {
        self.monsters.iter().map(|m| m.id()).collect()
    }

    /// Remove and return the dead monsters
    pub fn remove_dead(&mut self) -> Vec<Monster> {
        let (alive, dead): (Vec<Monster>, Vec<Monster>) =
            self.monsters.drain(..).partition(|m| m.is_alive());
        self.monsters = alive;
        dead
    }

    /// Draw the tile grid
    pub fn draw_tiles(&self, target: &mut dyn RenderTarget, tileset: &Tileset) {
        let tile_size = tileset.tile_size() as f32;
        for (position, tile) in self.tiles() {
            let mut sprite = match tileset.region(tile.tile_name()) {
                Some(region) => Sprite::from_region(region),
                None => Sprite::new(glam::Vec2::ZERO, glam::Vec2::splat(tile_size)),
            }
            .with_color(tile.color())
            .with_z_order(TILE_Z_ORDER);
            sprite.set_position(world_position(position, tile_size));
            target.draw(&sprite);
        }
    }

    /// Draw the living monsters
    pub fn draw_monsters(&self, target: &mut dyn RenderTarget) {
        for monster in self.monsters.iter().filter(|m| m.is_alive()) {
            monster.draw(target);
        }
    }
}
