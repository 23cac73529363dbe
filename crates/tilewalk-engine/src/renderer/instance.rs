use bytemuck::{Pod, Zeroable};

use crate::assets::sheet::Region;
use crate::components::layer::RenderLayer;
use crate::core::geometry::Rect;

/// Per-instance render data read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// `(x, y)` is the bottom-left corner; `width`/`height` are the drawn size in
/// world units (a sheet cell is drawn 1:1 unless resized).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Sheet column.
    pub col: f32,
    /// Sheet row (0 = top row of the image).
    pub row: f32,
    /// Sheet index (`AtlasId`).
    pub atlas: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Draw `region` at `(x, y)` with size `(width, height)`.
    pub fn draw_region(region: &Region, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            col: region.col as f32,
            row: region.row as f32,
            atlas: region.atlas.0 as f32,
            alpha: 1.0,
        }
    }
}

/// Debug outline in world units: x, y, width, height.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DebugRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DebugRect {
    pub const FLOATS: usize = 4;
}

impl From<Rect> for DebugRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Render buffer containing all sprite instances for one frame.
///
/// Instances are pushed per layer in any order; `finish` orders them back to
/// front, keeping push order within a layer.
pub struct RenderBuffer {
    pending: Vec<(RenderLayer, RenderInstance)>,
    /// Finished, layer-ordered instances.
    pub instances: Vec<RenderInstance>,
    pub debug_rects: Vec<DebugRect>,
    max_instances: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            pending: Vec::with_capacity(max_instances),
            instances: Vec::with_capacity(max_instances),
            debug_rects: Vec::new(),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.instances.clear();
        self.debug_rects.clear();
    }

    pub fn push(&mut self, layer: RenderLayer, instance: RenderInstance) {
        self.pending.push((layer, instance));
    }

    pub fn push_debug(&mut self, rect: impl Into<DebugRect>) {
        self.debug_rects.push(rect.into());
    }

    /// Order pending instances by layer and publish them, dropping any past capacity.
    pub fn finish(&mut self) {
        self.pending.sort_by_key(|(layer, _)| *layer);
        if self.pending.len() > self.max_instances {
            log::warn!(
                "render buffer full: dropping {} instances",
                self.pending.len() - self.max_instances
            );
        }
        self.instances.clear();
        self.instances.extend(
            self.pending
                .drain(..)
                .take(self.max_instances)
                .map(|(_, instance)| instance),
        );
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> RenderInstance {
        RenderInstance { x, ..Default::default() }
    }

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<DebugRect>(), DebugRect::FLOATS * 4);
    }

    #[test]
    fn finish_orders_layers_and_keeps_push_order() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderLayer::Objects, at(1.0));
        buf.push(RenderLayer::Terrain, at(2.0));
        buf.push(RenderLayer::Objects, at(3.0));
        buf.push(RenderLayer::Effects, at(4.0));
        buf.finish();
        let xs: Vec<f32> = buf.instances.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn finish_respects_capacity() {
        let mut buf = RenderBuffer::with_capacity(2);
        for x in 0..5 {
            buf.push(RenderLayer::Objects, at(x as f32));
        }
        buf.finish();
        assert_eq!(buf.instance_count(), 2);
    }
}
