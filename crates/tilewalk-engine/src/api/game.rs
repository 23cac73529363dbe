use crate::api::types::{SoundEvent, GameEvent};
use crate::assets::registry::SheetRegistry;
use crate::assets::sheet::AssetError;
use crate::core::scene::Scene;
use crate::core::time::{FrameClock, DEFAULT_MAX_FRAME_DT};
use crate::input::buttons::ButtonState;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Visible width in world units; the height follows the screen aspect ratio.
    pub viewport_width: f32,
    /// Longest frame delta the simulation accepts, in seconds (default: 0.1).
    pub max_frame_dt: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of debug rectangles (default: 64).
    pub max_debug_rects: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Draw every collision rectangle on top of the scene.
    pub debug_shapes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 640.0,
            world_height: 480.0,
            viewport_width: 400.0,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            max_instances: 512,
            max_debug_rects: 64,
            max_sounds: 32,
            max_events: 32,
            debug_shapes: false,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Slice sprite sheets, spawn entities, fill the collision registry.
    /// Asset errors are fatal: the runner refuses to start.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError>;

    /// One simulation tick per host frame. `ctx.clock.delta()` is the elapsed time.
    fn update(&mut self, ctx: &mut EngineContext, input: &ButtonState);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub assets: SheetRegistry,
    pub clock: FrameClock,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new(assets: SheetRegistry, config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            assets,
            clock: FrameClock::new(config.max_frame_dt),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub camera: &'a Camera2D,
    pub config: &'a GameConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_data_is_transient() {
        let mut ctx = EngineContext::new(SheetRegistry::new(), &GameConfig::default());
        ctx.emit_sound(SoundEvent(1));
        ctx.emit_event(GameEvent::new(1.0, 1.0));
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn clock_uses_configured_cap() {
        let config = GameConfig {
            max_frame_dt: 0.05,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::new(SheetRegistry::new(), &config);
        assert_eq!(ctx.clock.advance(1.0), 0.05);
    }
}
