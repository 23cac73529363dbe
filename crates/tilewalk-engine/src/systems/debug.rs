//! Debug rendering: opt-in collision rectangle outlines.
//!
//! The runner calls `debug_draw_collisions()` when `GameConfig::debug_shapes`
//! is set; the host draws each rect as an outline over the scene.

use crate::core::collision::CollisionRegistry;
use crate::renderer::instance::RenderBuffer;

/// Push every registered collision rectangle into the buffer, up to `max`.
pub fn debug_draw_collisions(registry: &CollisionRegistry, buffer: &mut RenderBuffer, max: usize) {
    let mut rects: Vec<_> = registry.iter().collect();
    // HashMap order is arbitrary; sort so the host sees a stable list.
    rects.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (_, rect) in rects.into_iter().take(max) {
        buffer.push_debug(*rect);
    }
}
