use std::cmp::Ordering;

use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Push one instance per visible sprite entity into the buffer.
///
/// Within a depth-sorted layer, entities further up the screen (higher y)
/// are pushed first so that lower ones are drawn over them. Other layers
/// keep scene order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    let mut visible: Vec<&Entity> = entities
        .filter(|entity| entity.active && entity.sprite.is_some())
        .collect();

    visible.sort_by(|a, b| {
        a.layer.cmp(&b.layer).then_with(|| {
            if a.layer.is_depth_sorted() {
                b.pos.y.partial_cmp(&a.pos.y).unwrap_or(Ordering::Equal)
            } else {
                Ordering::Equal
            }
        })
    });

    for entity in visible {
        let Some(sprite) = &entity.sprite else {
            continue;
        };
        let mut instance = RenderInstance::draw_region(
            &sprite.region,
            entity.pos.x,
            entity.pos.y,
            sprite.size.x,
            sprite.size.y,
        );
        instance.alpha = sprite.alpha;
        buffer.push(entity.layer, instance);
    }
}
