use std::collections::HashMap;

use thiserror::Error;

use crate::api::types::EntityId;
use crate::core::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    #[error("no collision rectangle registered for `{0}`")]
    NotFound(EntityId),
}

/// Current bounding rectangle of every collidable entity, keyed by id.
///
/// Holds at most one rectangle per id. Queries exclude the mover's own entry,
/// so an entity never collides with itself.
#[derive(Debug, Clone, Default)]
pub struct CollisionRegistry {
    rects: HashMap<EntityId, Rect>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rectangle for `id`.
    pub fn set(&mut self, id: EntityId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &EntityId) -> Result<Rect, CollisionError> {
        self.rects
            .get(id)
            .copied()
            .ok_or_else(|| CollisionError::NotFound(id.clone()))
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<Rect> {
        self.rects.remove(id)
    }

    /// True iff `candidate` overlaps no registered rectangle other than `excluding`'s.
    pub fn can_move(&self, candidate: &Rect, excluding: &EntityId) -> bool {
        self.overlapping(candidate, excluding).next().is_none()
    }

    /// Ids whose rectangles overlap `probe`, skipping `excluding`.
    pub fn overlapping<'a>(
        &'a self,
        probe: &Rect,
        excluding: &EntityId,
    ) -> impl Iterator<Item = &'a EntityId> + 'a {
        let probe = *probe;
        let excluding = excluding.clone();
        self.rects
            .iter()
            .filter(move |(id, rect)| **id != excluding && rect.overlaps(&probe))
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Rect)> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: EntityId = EntityId::from_static("player");
    const CHEST: EntityId = EntityId::from_static("chest");
    const NPC: EntityId = EntityId::from_static("npc");

    fn registry() -> CollisionRegistry {
        let mut reg = CollisionRegistry::new();
        reg.set(PLAYER, Rect::new(158.0, 200.0, 16.0, 16.0));
        reg.set(CHEST, Rect::new(200.0, 200.0, 32.0, 32.0));
        reg.set(NPC, Rect::new(108.0, 100.0, 16.0, 16.0));
        reg
    }

    #[test]
    fn own_rect_is_never_a_collision() {
        let reg = registry();
        let own = reg.get(&PLAYER).unwrap();
        assert!(reg.can_move(&own, &PLAYER));
    }

    #[test]
    fn blocked_by_other_entity() {
        let reg = registry();
        let into_chest = Rect::new(190.0, 200.0, 16.0, 16.0);
        assert!(!reg.can_move(&into_chest, &PLAYER));
        // The chest itself may occupy its own rectangle.
        assert!(reg.can_move(&reg.get(&CHEST).unwrap(), &CHEST));
    }

    #[test]
    fn free_space_is_allowed() {
        let reg = registry();
        assert!(reg.can_move(&Rect::new(300.0, 300.0, 16.0, 16.0), &PLAYER));
    }

    #[test]
    fn touching_edge_is_allowed_one_unit_is_not() {
        let reg = registry();
        let touching = Rect::new(184.0, 200.0, 16.0, 16.0);
        let one_unit = Rect::new(185.0, 200.0, 16.0, 16.0);
        assert!(reg.can_move(&touching, &PLAYER));
        assert!(!reg.can_move(&one_unit, &PLAYER));
    }

    #[test]
    fn set_replaces_existing_entry() {
        let mut reg = registry();
        reg.set(PLAYER, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get(&PLAYER).unwrap(), Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn unknown_id_fails_fast() {
        let reg = registry();
        let ghost = EntityId::new("ghost");
        assert_eq!(reg.get(&ghost), Err(CollisionError::NotFound(ghost.clone())));
    }

    #[test]
    fn overlapping_lists_hit_ids() {
        let reg = registry();
        let probe = Rect::new(190.0, 210.0, 16.0, 16.0);
        let hits: Vec<_> = reg.overlapping(&probe, &PLAYER).collect();
        assert_eq!(hits, vec![&CHEST]);
    }

    #[test]
    fn overlapping_outlives_its_arguments() {
        let reg = registry();
        let hits: Vec<EntityId> = {
            let probe = Rect::new(105.0, 95.0, 16.0, 16.0);
            let mover = EntityId::new("player");
            let iter = reg.overlapping(&probe, &mover);
            drop(mover);
            iter.cloned().collect()
        };
        assert_eq!(hits, vec![NPC]);
    }
}
