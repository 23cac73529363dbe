use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing every sprite-sheet image and sound of a game.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sprite-sheet images, in atlas order (index = `AtlasId`).
    pub images: Vec<ImageDescriptor>,
    /// Optional audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single sprite-sheet image.
/// Pixel size is recorded here so the grid can be sliced without decoding the PNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Lookup name (e.g., "characters").
    pub name: String,
    /// Relative path to the PNG file (e.g., "sprites.png").
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    #[serde(default)]
    pub event_id: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
