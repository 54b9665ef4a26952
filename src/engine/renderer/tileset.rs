// Tileset: named regions on a uniform sprite sheet

use glam::Vec2;
use std::collections::HashMap;

/// A single tile within a tileset sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRegion {
    /// Edge length of the tile (pixels)
    pub tile_size: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl TileRegion {
    /// Region for the tile at `column`/`row` of a `sheet_width` x `sheet_height` pixel sheet
    pub fn new(column: u32, row: u32, tile_size: u32, sheet_width: u32, sheet_height: u32) -> Self {
        let x = column * tile_size;
        let y = row * tile_size;
        let uv_min = Vec2::new(x as f32 / sheet_width as f32, y as f32 / sheet_height as f32);
        let uv_max = Vec2::new(
            (x + tile_size) as f32 / sheet_width as f32,
            (y + tile_size) as f32 / sheet_height as f32,
        );

        Self {
            tile_size,
            uv_min,
            uv_max,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.tile_size as f32)
    }
}

/// A sprite sheet cut into equally sized tiles
#[derive(Debug, Clone)]
pub struct Tileset {
    columns: u32,
    rows: u32,
    tile_size: u32,
    named: HashMap<String, (u32, u32)>,
}

impl Tileset {
    pub fn new(columns: u32, rows: u32, tile_size: u32) -> Self {
        Self {
            columns,
            rows,
            tile_size,
            named: HashMap::new(),
        }
    }

    /// Name the tile at `column`/`row`. Out-of-sheet cells are ignored.
    pub fn with_tile(mut self, name: &str, column: u32, row: u32) -> Self {
        if column < self.columns && row < self.rows {
            self.named.insert(name.to_string(), (column, row));
        } else {
            log::warn!(
                "Tile '{}' at ({}, {}) lies outside a {}x{} tileset",
                name,
                column,
                row,
                self.columns,
                self.rows
            );
        }
        self
    }

    /// Look up a named tile
    pub fn region(&self, name: &str) -> Option<TileRegion> {
        self.named.get(name).map(|&(column, row)| {
            TileRegion::new(
                column,
                row,
                self.tile_size,
                self.columns * self.tile_size,
                self.rows * self.tile_size,
            )
        })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}
