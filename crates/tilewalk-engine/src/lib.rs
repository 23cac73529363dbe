pub mod actor;
pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use actor::{
    Actor, ActorAnimations, ActorConfig, ActorFrame, ActorListener, ActionOutcome,
    ActionTrigger, Direction, Hitbox, MoveOutcome, TickReport, WalkLayout,
};
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SheetRegistry;
pub use assets::sheet::{AssetError, Region, SpriteSheet};
pub use bridge::protocol::{FrameData, ProtocolLayout};
pub use components::animation::{AnimationDef, PlayMode};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, AtlasId};
pub use components::tilemap::{TilemapComponent, Tile};
pub use core::collision::{CollisionError, CollisionRegistry};
pub use core::geometry::Rect;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::buttons::{Button, ButtonState, InputProvider, KeyBindings};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::Camera2D;
pub use renderer::instance::{DebugRect, RenderInstance, RenderBuffer};
pub use systems::debug::debug_draw_collisions;
pub use systems::render::build_render_buffer;
