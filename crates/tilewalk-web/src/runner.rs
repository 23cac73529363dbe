use tilewalk_engine::bridge::protocol::FrameData;
use tilewalk_engine::{
    build_render_buffer, AssetError, ButtonState, Camera2D, EngineContext, Game, GameConfig,
    InputEvent, InputQueue, KeyBindings, ProtocolLayout, Rect, RenderBuffer, RenderContext,
    SheetRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    buttons: ButtonState,
    bindings: KeyBindings,
    render_buffer: RenderBuffer,
    camera: Camera2D,
    config: GameConfig,
    layout: ProtocolLayout,
    /// Packed frame read by the host after each tick.
    frame: Vec<f32>,
    frame_counter: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::new(SheetRegistry::new(), &config),
            input: InputQueue::new(),
            buttons: ButtonState::new(),
            bindings: KeyBindings::default(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            camera: Camera2D::fit_width(config.viewport_width, config.world_width, config.world_height),
            frame: layout.allocate(),
            frame_counter: 0,
            layout,
            config,
            game,
            initialized: false,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Load the asset manifest and initialize the game. Call once after construction.
    pub fn init(&mut self, manifest_json: &str) -> Result<(), AssetError> {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.frame = self.layout.allocate();
        self.camera.set_bounds(Rect::new(0.0, 0.0, self.config.world_width, self.config.world_height));

        self.ctx = EngineContext::new(SheetRegistry::from_json(manifest_json)?, &self.config);
        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue. Dropped until `init` succeeds.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.initialized {
            return;
        }
        self.input.push(event);
    }

    /// Screen size changed; the view keeps its width in world units.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Run one frame: fold input, update the game once, build and pack the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt);

        self.buttons.begin_frame(self.input.iter(), &self.bindings);
        self.input.drain();

        self.game.update(&mut self.ctx, &self.buttons);

        self.render_buffer.clear();
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
                camera: &self.camera,
                config: &self.config,
            };
            self.game.render(&mut render_ctx);
        }
        self.render_buffer.finish();

        self.frame_counter = self.frame_counter.wrapping_add(1);
        let frame = FrameData {
            frame_counter: self.frame_counter,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            camera: &self.camera,
            instances: &self.render_buffer.instances,
            debug_rects: &self.render_buffer.debug_rects,
            sounds: &self.ctx.sounds,
            events: &self.ctx.events,
        };
        self.layout.write_frame(&mut self.frame, &frame);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    // ---- Accessors for shared-memory reads ----

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewalk_engine::bridge::protocol::{
        HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_SOUND_COUNT,
    };
    use tilewalk_engine::{Button, Entity, GameEvent, InputProvider, SoundEvent, SpriteComponent};

    const MANIFEST: &str = r#"{
        "images": [{ "name": "characters", "path": "characters.png", "width": 384, "height": 256 }]
    }"#;

    /// Counts updates and records what the input looked like.
    #[derive(Default)]
    struct Probe {
        updates: u32,
        right_held: Vec<bool>,
        deltas: Vec<f32>,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError> {
            let sheet = ctx.assets.load_sprite_sheet("characters", 12, 8)?;
            ctx.scene.spawn(Entity::new("npc").with_sprite(SpriteComponent::from_region(sheet.region(10, 0)?)));
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &ButtonState) {
            self.updates += 1;
            self.right_held.push(input.is_held(Button::Right));
            self.deltas.push(ctx.clock.delta());
            ctx.emit_sound(SoundEvent(3));
            ctx.emit_event(GameEvent::new(1.0, 0.0));
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut runner = GameRunner::new(Probe::default());
        runner.init(MANIFEST).unwrap();
        runner
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(0.016);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn missing_sheet_fails_init() {
        let mut runner = GameRunner::new(Probe::default());
        let err = runner.init(r#"{ "images": [] }"#).unwrap_err();
        assert!(matches!(err, AssetError::MissingSheet(name) if name == "characters"));
        assert!(!runner.is_initialized());
    }

    #[test]
    fn failed_init_leaves_a_harmless_runner() {
        let mut runner = GameRunner::new(Probe::default());
        assert!(runner.init(r#"{ "images": [] }"#).is_err());
        runner.push_input(InputEvent::KeyDown { key_code: 39 });
        runner.tick(0.016);
        runner.resize(800.0, 600.0);
        assert_eq!(runner.game().updates, 0);
        assert_eq!(runner.instance_count(), 0);
        assert!(!runner.frame_ptr().is_null());
        assert_eq!(runner.frame()[HEADER_FRAME_COUNTER], 0.0);
    }

    #[test]
    fn one_update_per_tick_with_clamped_delta() {
        let mut runner = runner();
        runner.tick(0.016);
        runner.tick(5.0);
        assert_eq!(runner.game().updates, 2);
        assert_eq!(runner.game().deltas, vec![0.016, 0.1]);
    }

    #[test]
    fn key_events_reach_the_game_as_buttons() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key_code: 39 });
        runner.tick(0.016);
        runner.tick(0.016);
        runner.push_input(InputEvent::KeyUp { key_code: 39 });
        runner.tick(0.016);
        assert_eq!(runner.game().right_held, vec![true, true, false]);
    }

    #[test]
    fn frame_is_packed_after_each_tick() {
        let mut runner = runner();
        runner.tick(0.016);
        runner.tick(0.016);
        let frame = runner.frame();
        assert_eq!(frame[HEADER_FRAME_COUNTER], 2.0);
        assert_eq!(frame[HEADER_INSTANCE_COUNT], 1.0);
        // Transient data is per frame, not accumulated.
        assert_eq!(frame[HEADER_SOUND_COUNT], 1.0);
        assert_eq!(frame[HEADER_EVENT_COUNT], 1.0);
    }

    #[test]
    fn camera_starts_at_world_origin() {
        let runner = runner();
        let view = runner.camera().visible_rect();
        assert_eq!((view.x, view.y, view.width), (0.0, 0.0, 400.0));
    }
}
