//! Sprite sheets sliced into a uniform grid of regions.

use thiserror::Error;

use crate::components::sprite::AtlasId;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("sprite sheet `{0}` is not listed in the manifest")]
    MissingSheet(String),
    #[error("sprite sheet `{sheet}` cannot be split into a {cols}x{rows} grid")]
    EmptyGrid { sheet: String, cols: u32, rows: u32 },
    #[error("sprite sheet `{sheet}` ({width}x{height}px) is not divisible into {cols}x{rows} cells")]
    UnevenGrid {
        sheet: String,
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    },
    #[error("cell ({col}, {row}) is outside sprite sheet `{sheet}`")]
    RegionOutOfBounds { sheet: String, col: u32, row: u32 },
    #[error("animation has no frames")]
    EmptyAnimation,
    #[error("animation frame duration must be positive and finite, got {0}")]
    InvalidFrameDuration(f32),
}

/// One cell of a sprite sheet. Row 0 is the top row of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub atlas: AtlasId,
    pub col: u32,
    pub row: u32,
    /// Cell width in pixels (drawn 1:1 in world units unless resized).
    pub width: f32,
    /// Cell height in pixels.
    pub height: f32,
}

/// A sprite-sheet image split into `cols` x `rows` equal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub name: String,
    pub atlas: AtlasId,
    pub cols: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl SpriteSheet {
    /// Slice an image of `width` x `height` pixels into a `cols` x `rows` grid.
    pub fn split(
        name: impl Into<String>,
        atlas: AtlasId,
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    ) -> Result<Self, AssetError> {
        let name = name.into();
        if cols == 0 || rows == 0 {
            return Err(AssetError::EmptyGrid { sheet: name, cols, rows });
        }
        if width % cols != 0 || height % rows != 0 {
            return Err(AssetError::UnevenGrid { sheet: name, width, height, cols, rows });
        }
        Ok(Self {
            name,
            atlas,
            cols,
            rows,
            cell_width: (width / cols) as f32,
            cell_height: (height / rows) as f32,
        })
    }

    /// The cell at `(col, row)`, indexed like `regions[row][col]`.
    pub fn region(&self, col: u32, row: u32) -> Result<Region, AssetError> {
        if col >= self.cols || row >= self.rows {
            return Err(AssetError::RegionOutOfBounds {
                sheet: self.name.clone(),
                col,
                row,
            });
        }
        Ok(Region {
            atlas: self.atlas,
            col,
            row,
            width: self.cell_width,
            height: self.cell_height,
        })
    }

    /// `count` consecutive cells of one row, starting at `start_col`.
    pub fn row_strip(&self, row: u32, start_col: u32, count: u32) -> Result<Vec<Region>, AssetError> {
        let end = start_col
            .checked_add(count)
            .ok_or_else(|| AssetError::RegionOutOfBounds {
                sheet: self.name.clone(),
                col: start_col,
                row,
            })?;
        (start_col..end).map(|col| self.region(col, row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_computes_cell_size() {
        let sheet = SpriteSheet::split("characters", AtlasId(0), 384, 256, 12, 8).unwrap();
        assert_eq!(sheet.cell_width, 32.0);
        assert_eq!(sheet.cell_height, 32.0);
    }

    #[test]
    fn uneven_grid_is_rejected() {
        let err = SpriteSheet::split("chest", AtlasId(1), 100, 100, 46, 20).unwrap_err();
        assert!(matches!(err, AssetError::UnevenGrid { cols: 46, rows: 20, .. }));
    }

    #[test]
    fn zero_grid_is_rejected() {
        let err = SpriteSheet::split("chest", AtlasId(1), 100, 100, 0, 1).unwrap_err();
        assert!(matches!(err, AssetError::EmptyGrid { .. }));
    }

    #[test]
    fn region_bounds_are_checked() {
        let sheet = SpriteSheet::split("characters", AtlasId(0), 384, 256, 12, 8).unwrap();
        let npc = sheet.region(10, 0).unwrap();
        assert_eq!((npc.col, npc.row), (10, 0));
        assert!(sheet.region(12, 0).is_err());
        assert!(sheet.region(0, 8).is_err());
    }

    #[test]
    fn row_strip_collects_consecutive_cells() {
        let sheet = SpriteSheet::split("characters", AtlasId(0), 384, 256, 12, 8).unwrap();
        let walk = sheet.row_strip(2, 6, 3).unwrap();
        let cols: Vec<u32> = walk.iter().map(|r| r.col).collect();
        assert_eq!(cols, vec![6, 7, 8]);
        assert!(walk.iter().all(|r| r.row == 2));
        assert!(sheet.row_strip(0, 10, 3).is_err());
    }

    #[test]
    fn row_strip_past_u32_range_is_out_of_bounds() {
        let sheet = SpriteSheet::split("characters", AtlasId(0), 384, 256, 12, 8).unwrap();
        let err = sheet.row_strip(0, u32::MAX, 2).unwrap_err();
        assert!(matches!(err, AssetError::RegionOutOfBounds { col: u32::MAX, row: 0, .. }));
    }
}
