use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;

/// Fat Entity: a single struct with optional components.
/// Gameplay state (collision, actor logic) lives with the game; the entity is
/// what gets drawn.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Bottom-left draw position in world space.
    pub pos: Vec2,
    /// Draw layer.
    pub layer: RenderLayer,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            active: true,
            pos: Vec2::ZERO,
            layer: RenderLayer::default(),
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
