use glam::Vec2;
use tilewalk_engine::*;

use crate::world::{World, CHEST, NPC, PLAYER};

const SLASH: EntityId = EntityId::from_static("slash");

/// Host event: the chest changed state. `a` is 1.0 when it opened.
pub const CHEST_TOGGLED: f32 = 1.0;

pub const SOUND_CHEST_OPEN: SoundEvent = SoundEvent(1);
pub const SOUND_CHEST_CLOSE: SoundEvent = SoundEvent(2);
pub const SOUND_SLASH: SoundEvent = SoundEvent(3);

const NPC_POS: Vec2 = Vec2::new(100.0, 100.0);
const CHEST_RECT: Rect = Rect::new(200.0, 200.0, 32.0, 32.0);
const FLOOR_TILE: f32 = 32.0;
const HITBOX_INSET: f32 = 8.0;
const HITBOX_HEIGHT: f32 = 16.0;
const SLASH_FPS: f32 = 20.0;

const WALK_LAYOUT: WalkLayout = WalkLayout {
    first_col: 6,
    frames: 3,
    down_row: 0,
    left_row: 1,
    right_row: 2,
    up_row: 3,
};

#[derive(Debug, Clone, Copy)]
struct ChestSprites {
    closed: Region,
    open: Region,
}

/// Everything built from the sprite sheets at init.
struct Room {
    player: Actor,
    chest: ChestSprites,
    floor: TilemapComponent,
}

/// A single room: the player walks around an NPC and a chest that opens
/// when slashed at from below.
pub struct ChestRoom {
    world: World,
    room: Option<Room>,
    debug_shapes: bool,
}

impl ChestRoom {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            room: None,
            debug_shapes: false,
        }
    }

    pub fn with_debug_shapes(mut self) -> Self {
        self.debug_shapes = true;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> Option<&Actor> {
        self.room.as_ref().map(|room| &room.player)
    }
}

impl Default for ChestRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ChestRoom {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: 640.0,
            world_height: 480.0,
            viewport_width: 400.0,
            debug_shapes: self.debug_shapes,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError> {
        let characters = ctx.assets.load_sprite_sheet("characters", 12, 8)?;
        let chest_sheet = ctx.assets.load_sprite_sheet("chest", 46, 20)?;
        let slash_sheet = ctx.assets.load_sprite_sheet("slash", 5, 1)?;
        let floor_sheet = ctx.assets.load_sprite_sheet("floor", 4, 4)?;

        let hitbox = Hitbox::inset_from_cell(characters.cell_width, HITBOX_INSET, HITBOX_HEIGHT);
        let config = ActorConfig {
            hitbox,
            ..ActorConfig::default()
        };
        let slash = AnimationDef::from_fps(slash_sheet.row_strip(0, 0, 5)?, SLASH_FPS, PlayMode::Normal)?;
        let slash_first = slash.frames()[0];
        let animations = ActorAnimations::from_sheet(&characters, WALK_LAYOUT, config.walk_frame_duration, slash)?;
        let mut player = Actor::new(PLAYER, config, animations, Vec2::ZERO);

        let chest = ChestSprites {
            closed: chest_sheet.region(2, 2)?,
            open: chest_sheet.region(20, 2)?,
        };

        let mut floor = TilemapComponent::covering(
            Rect::new(0.0, 0.0, self.config().world_width, self.config().world_height),
            FLOOR_TILE,
        )
        .with_atlas(floor_sheet.atlas);
        let (light, dark) = (Tile::from(floor_sheet.region(0, 0)?), Tile::from(floor_sheet.region(1, 0)?));
        for y in 0..floor.height {
            for x in 0..floor.width {
                floor.set(x, y, Some(if (x + y) % 2 == 0 { light } else { dark }));
            }
        }

        self.world.place(PLAYER, player.rect());
        self.world.place(NPC, hitbox.rect_at(NPC_POS));
        self.world.place(CHEST, CHEST_RECT);

        let body = player.animate(0.0, 0.0).body;
        ctx.scene.spawn(
            Entity::new(CHEST)
                .with_pos(CHEST_RECT.min())
                .with_sprite(SpriteComponent::from_region(chest.closed).with_size(CHEST_RECT.size())),
        );
        ctx.scene.spawn(Entity::new(PLAYER).with_sprite(SpriteComponent::from_region(body)));
        ctx.scene.spawn(
            Entity::new(NPC)
                .with_pos(NPC_POS)
                .with_sprite(SpriteComponent::from_region(characters.region(10, 0)?)),
        );
        ctx.scene.spawn(
            Entity::new(SLASH)
                .with_layer(RenderLayer::Effects)
                .with_sprite(SpriteComponent::from_region(slash_first))
                .inactive(),
        );

        log::info!(
            "chest-room: {} collision rects, {} floor tiles",
            self.world.registry().len(),
            floor.tile_count()
        );
        self.room = Some(Room { player, chest, floor });
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &ButtonState) {
        let Some(room) = self.room.as_mut() else {
            return;
        };
        let dt = ctx.clock.delta();

        let report = room.player.update(input, dt, &mut self.world);

        for opened in self.world.take_toggles() {
            ctx.emit_event(GameEvent::new(CHEST_TOGGLED, if opened { 1.0 } else { 0.0 }));
            ctx.emit_sound(if opened { SOUND_CHEST_OPEN } else { SOUND_CHEST_CLOSE });
        }
        if report.action == ActionOutcome::Started {
            ctx.emit_sound(SOUND_SLASH);
        }

        let frame = room.player.animate(dt, ctx.clock.state_time());
        room.sync(&mut ctx.scene, frame, self.world.is_chest_opened());
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(room) = &self.room {
            for tile in room.floor.build_visible_instances(ctx.camera) {
                ctx.render_buffer.push(room.floor.layer, tile);
            }
        }
        if ctx.config.debug_shapes {
            debug_draw_collisions(self.world.registry(), ctx.render_buffer, ctx.config.max_debug_rects);
        }
    }
}

impl Room {
    /// Copy this tick's actor frame and chest state onto the scene sprites.
    fn sync(&self, scene: &mut Scene, frame: ActorFrame, chest_opened: bool) {
        let pos = self.player.position();
        if let Some(entity) = scene.get_mut(&PLAYER) {
            entity.pos = pos;
            set_region(entity, frame.body);
        }
        if let Some(entity) = scene.get_mut(&SLASH) {
            entity.pos = pos;
            entity.active = frame.overlay.is_some();
            if let Some(region) = frame.overlay {
                set_region(entity, region);
            }
        }
        if let Some(entity) = scene.get_mut(&CHEST) {
            set_region(entity, if chest_opened { self.chest.open } else { self.chest.closed });
        }
    }
}

fn set_region(entity: &mut Entity, region: Region) {
    if let Some(sprite) = entity.sprite.as_mut() {
        sprite.set_region(region);
    }
}
