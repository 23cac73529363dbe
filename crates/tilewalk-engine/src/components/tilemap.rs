//! Tilemap component for tile-floor rendering.
//!
//! A tilemap stores a grid of sheet cells. Only tiles inside the camera view
//! are turned into render instances.

use glam::Vec2;

use crate::assets::sheet::Region;
use crate::components::layer::RenderLayer;
use crate::components::sprite::AtlasId;
use crate::core::geometry::Rect;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderInstance;

/// A single tile: one cell of the tilemap's sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub col: u32,
    pub row: u32,
}

impl Tile {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl From<Region> for Tile {
    fn from(region: Region) -> Self {
        Self::new(region.col, region.row)
    }
}

/// Grid of tiles drawn from one sheet.
///
/// Tiles are stored in row-major order with row 0 at the bottom:
/// index = y * width + x
#[derive(Debug, Clone)]
pub struct TilemapComponent {
    /// Width of the tilemap in tiles.
    pub width: u32,
    /// Height of the tilemap in tiles.
    pub height: u32,
    /// Size of each tile in world units.
    pub tile_size: f32,
    pub atlas: AtlasId,
    pub layer: RenderLayer,
    /// Bottom-left corner of the tilemap in world space.
    pub origin: Vec2,
    /// None = empty tile.
    tiles: Vec<Option<Tile>>,
}

impl TilemapComponent {
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            atlas: AtlasId(0),
            layer: RenderLayer::Terrain,
            origin: Vec2::ZERO,
            tiles: vec![None; (width * height) as usize],
        }
    }

    /// Tilemap large enough to cover `area` with tiles of `tile_size`.
    pub fn covering(area: Rect, tile_size: f32) -> Self {
        let width = (area.width / tile_size).ceil().max(0.0) as u32;
        let height = (area.height / tile_size).ceil().max(0.0) as u32;
        Self::new(width, height, tile_size).with_origin(area.min())
    }

    pub fn with_atlas(mut self, atlas: AtlasId) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles[(y * self.width + x) as usize].as_ref()
    }

    /// Out-of-range positions are ignored.
    pub fn set(&mut self, x: u32, y: u32, tile: Option<Tile>) {
        if x < self.width && y < self.height {
            self.tiles[(y * self.width + x) as usize] = tile;
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, tile: Option<Tile>) {
        for ty in y..(y + h).min(self.height) {
            for tx in x..(x + w).min(self.width) {
                self.set(tx, ty, tile);
            }
        }
    }

    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(Some(tile));
    }

    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// World-space area covered by the grid.
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(
            self.origin,
            Vec2::new(self.width as f32, self.height as f32) * self.tile_size,
        )
    }

    pub fn world_to_tile(&self, world_pos: Vec2) -> Option<(u32, u32)> {
        let local = world_pos - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let tx = (local.x / self.tile_size) as u32;
        let ty = (local.y / self.tile_size) as u32;
        if tx >= self.width || ty >= self.height {
            return None;
        }
        Some((tx, ty))
    }

    /// Bottom-left corner of tile (x, y) in world space.
    pub fn tile_to_world(&self, x: u32, y: u32) -> Vec2 {
        self.origin + Vec2::new(x as f32, y as f32) * self.tile_size
    }

    fn instance(&self, x: u32, y: u32, tile: &Tile) -> RenderInstance {
        let pos = self.tile_to_world(x, y);
        RenderInstance {
            x: pos.x,
            y: pos.y,
            width: self.tile_size,
            height: self.tile_size,
            col: tile.col as f32,
            row: tile.row as f32,
            atlas: self.atlas.0 as f32,
            alpha: 1.0,
        }
    }

    /// Instances for the tiles inside the camera view.
    pub fn build_visible_instances(&self, camera: &Camera2D) -> Vec<RenderInstance> {
        let view = camera.visible_rect();
        let local_min = view.min() - self.origin;
        let local_max = view.max() - self.origin;

        let min_tx = ((local_min.x / self.tile_size).floor() as i32).max(0) as u32;
        let min_ty = ((local_min.y / self.tile_size).floor() as i32).max(0) as u32;
        let max_tx = (((local_max.x / self.tile_size).ceil() as i32).max(0) as u32).min(self.width);
        let max_ty = (((local_max.y / self.tile_size).ceil() as i32).max(0) as u32).min(self.height);

        let mut instances = Vec::new();
        for ty in min_ty..max_ty {
            for tx in min_tx..max_tx {
                if let Some(tile) = self.get(tx, ty) {
                    instances.push(self.instance(tx, ty, tile));
                }
            }
        }
        instances
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    pub fn capacity(&self) -> usize {
        (self.width * self.height) as usize
    }
}
