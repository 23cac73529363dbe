/// Shared frame buffer layout.
/// Must stay in sync with the host renderer's protocol reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Debug rects: max_debug_rects × 4 floats]
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets.

use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, SoundEvent};
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::{DebugRect, RenderInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_DEBUG_RECTS: usize = 4;
pub const HEADER_DEBUG_RECT_COUNT: usize = 5;
pub const HEADER_WORLD_WIDTH: usize = 6;
pub const HEADER_WORLD_HEIGHT: usize = 7;
pub const HEADER_MAX_SOUNDS: usize = 8;
pub const HEADER_SOUND_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_EVENT_COUNT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;
pub const HEADER_VIEW_CENTER_X: usize = 13;
pub const HEADER_VIEW_CENTER_Y: usize = 14;
pub const HEADER_VIEW_WIDTH: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance: x, y, w, h, col, row, atlas, alpha.
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Floats per debug rect: x, y, w, h.
pub const DEBUG_RECT_FLOATS: usize = DebugRect::FLOATS;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// One frame's output, borrowed from the runner.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub frame_counter: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub camera: &'a Camera2D,
    pub instances: &'a [RenderInstance],
    pub debug_rects: &'a [DebugRect],
    pub sounds: &'a [SoundEvent],
    pub events: &'a [GameEvent],
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_debug_rects: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    pub debug_data_offset: usize,
    pub sound_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_debug_rects: usize, max_sounds: usize, max_events: usize) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let debug_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let sound_data_offset = debug_data_offset + max_debug_rects * DEBUG_RECT_FLOATS;
        let event_data_offset = sound_data_offset + max_sounds;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_debug_rects,
            max_sounds,
            max_events,
            instance_data_offset,
            debug_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_debug_rects,
            config.max_sounds,
            config.max_events,
        )
    }

    /// A zeroed buffer of the right size.
    pub fn allocate(&self) -> Vec<f32> {
        vec![0.0; self.buffer_total_floats]
    }

    /// Pack one frame into `buffer`. Sections are truncated to capacity.
    ///
    /// `buffer` must be at least `buffer_total_floats` long; a shorter buffer
    /// is left untouched and `false` is returned.
    pub fn write_frame(&self, buffer: &mut [f32], frame: &FrameData<'_>) -> bool {
        if buffer.len() < self.buffer_total_floats {
            log::warn!(
                "frame buffer too small: {} floats, need {}",
                buffer.len(),
                self.buffer_total_floats
            );
            return false;
        }
        buffer[HEADER_LOCK] = 1.0;

        let instances = &frame.instances[..frame.instances.len().min(self.max_instances)];
        let floats: &[f32] = bytemuck::cast_slice(instances);
        buffer[self.instance_data_offset..self.instance_data_offset + floats.len()].copy_from_slice(floats);

        let debug_rects = &frame.debug_rects[..frame.debug_rects.len().min(self.max_debug_rects)];
        let floats: &[f32] = bytemuck::cast_slice(debug_rects);
        buffer[self.debug_data_offset..self.debug_data_offset + floats.len()].copy_from_slice(floats);

        let sounds = &frame.sounds[..frame.sounds.len().min(self.max_sounds)];
        for (slot, sound) in buffer[self.sound_data_offset..].iter_mut().zip(sounds) {
            *slot = sound.0 as f32;
        }

        let events = &frame.events[..frame.events.len().min(self.max_events)];
        let floats: &[f32] = bytemuck::cast_slice(events);
        buffer[self.event_data_offset..self.event_data_offset + floats.len()].copy_from_slice(floats);

        buffer[HEADER_FRAME_COUNTER] = frame.frame_counter as f32;
        buffer[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        buffer[HEADER_INSTANCE_COUNT] = instances.len() as f32;
        buffer[HEADER_MAX_DEBUG_RECTS] = self.max_debug_rects as f32;
        buffer[HEADER_DEBUG_RECT_COUNT] = debug_rects.len() as f32;
        buffer[HEADER_WORLD_WIDTH] = frame.world_width;
        buffer[HEADER_WORLD_HEIGHT] = frame.world_height;
        buffer[HEADER_MAX_SOUNDS] = self.max_sounds as f32;
        buffer[HEADER_SOUND_COUNT] = sounds.len() as f32;
        buffer[HEADER_MAX_EVENTS] = self.max_events as f32;
        buffer[HEADER_EVENT_COUNT] = events.len() as f32;
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_VIEW_CENTER_X] = frame.camera.center.x;
        buffer[HEADER_VIEW_CENTER_Y] = frame.camera.center.y;
        buffer[HEADER_VIEW_WIDTH] = frame.camera.width;

        buffer[HEADER_LOCK] = 0.0;
        true
    }
}
