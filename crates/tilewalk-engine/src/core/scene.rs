use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec.
/// Designed for a handful of drawable entities; ids are unique.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Add an entity to the scene, replacing any entity with the same id.
    pub fn spawn(&mut self, entity: Entity) {
        if let Some(existing) = self.get_mut(&entity.id) {
            log::warn!("scene: replacing entity `{}`", entity.id);
            *existing = entity;
        } else {
            self.entities.push(entity);
        }
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: &EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| &e.id == id)?;
        Some(self.entities.swap_remove(idx))
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| &e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
