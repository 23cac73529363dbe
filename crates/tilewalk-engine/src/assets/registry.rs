use std::collections::HashMap;
use crate::assets::manifest::{AssetManifest, ImageDescriptor};
use crate::assets::sheet::{AssetError, SpriteSheet};
use crate::components::sprite::AtlasId;

/// Registry of sprite-sheet images, built from an AssetManifest.
/// Game code slices sheets by name at init time.
#[derive(Debug, Default)]
pub struct SheetRegistry {
    images: HashMap<String, (AtlasId, ImageDescriptor)>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. Atlas ids follow manifest order.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let images = manifest
            .images
            .iter()
            .enumerate()
            .map(|(idx, desc)| (desc.name.clone(), (AtlasId(idx as u32), desc.clone())))
            .collect();
        Self { images }
    }

    /// Parse manifest JSON and build the registry in one step.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// Split the named image into a `cols` x `rows` grid.
    pub fn load_sprite_sheet(&self, name: &str, cols: u32, rows: u32) -> Result<SpriteSheet, AssetError> {
        let (atlas, desc) = self
            .images
            .get(name)
            .ok_or_else(|| AssetError::MissingSheet(name.to_string()))?;
        SpriteSheet::split(name, *atlas, desc.width, desc.height, cols, rows)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "images": [
            { "name": "characters", "path": "sprites.png", "width": 384, "height": 256 },
            { "name": "chest", "path": "chest.png", "width": 736, "height": 320 }
        ]
    }"#;

    #[test]
    fn atlas_ids_follow_manifest_order() {
        let reg = SheetRegistry::from_json(JSON).unwrap();
        let chest = reg.load_sprite_sheet("chest", 46, 20).unwrap();
        assert_eq!(chest.atlas, AtlasId(1));
        assert_eq!(chest.cell_width, 16.0);
        assert_eq!(chest.cell_height, 16.0);
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        let reg = SheetRegistry::from_json(JSON).unwrap();
        let err = reg.load_sprite_sheet("slash", 5, 1).unwrap_err();
        assert!(matches!(err, AssetError::MissingSheet(ref name) if name == "slash"));
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let err = SheetRegistry::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AssetError::Manifest(_)));
    }
}
