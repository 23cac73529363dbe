use glam::Vec2;

use crate::assets::sheet::Region;

/// Identifies which sprite-sheet image a sprite belongs to.
/// Index into the AssetManifest's image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Sprite component: defines how an entity appears visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// Sheet cell to draw.
    pub region: Region,
    /// Drawn size in world units (defaults to the cell's pixel size).
    pub size: Vec2,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn from_region(region: Region) -> Self {
        Self {
            region,
            size: Vec2::new(region.width, region.height),
            alpha: 1.0,
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Swap the drawn cell, keeping size and opacity.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }
}
