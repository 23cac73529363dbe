use crate::actor::state::Direction;
use crate::api::types::EntityId;
use crate::core::collision::CollisionRegistry;
use crate::core::geometry::Rect;

/// Narrow capability interface an actor uses to talk to its scene.
///
/// The scene owns the collision registry and any world state (open chests,
/// ...). Actors never touch either directly; they ask and notify through this
/// trait, which keeps the actor free of any reference back to the scene.
pub trait ActorListener {
    /// May `id` occupy `candidate`? The actor's own registered rect must not count.
    fn can_move(&self, id: &EntityId, candidate: &Rect) -> bool;

    /// The actor moved, or turned while blocked. Called at most once per tick,
    /// after position and facing are final for the tick.
    fn moved(&mut self, id: &EntityId, rect: Rect, facing: Direction);

    /// Offered every action firing before the actor acts on its own.
    /// Return true to consume it.
    fn intercept_action(&mut self, id: &EntityId) -> bool;
}

/// A bare registry is a complete listener for scenes with nothing to interact with:
/// moves are checked against it, committed moves are written back, and actions
/// are never intercepted.
impl ActorListener for CollisionRegistry {
    fn can_move(&self, id: &EntityId, candidate: &Rect) -> bool {
        CollisionRegistry::can_move(self, candidate, id)
    }

    fn moved(&mut self, id: &EntityId, rect: Rect, _facing: Direction) {
        self.set(id.clone(), rect);
    }

    fn intercept_action(&mut self, _id: &EntityId) -> bool {
        false
    }
}
