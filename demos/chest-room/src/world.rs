use tilewalk_engine::*;

pub const PLAYER: EntityId = EntityId::from_static("player");
pub const NPC: EntityId = EntityId::from_static("npc");
pub const CHEST: EntityId = EntityId::from_static("chest");

/// How far in front of the player the chest must be to count as faced.
const REACH: f32 = 16.0;

/// The chest can only be opened from below.
const CHEST_APPROACH: Direction = Direction::Up;

/// Collision and interaction state of the room.
///
/// The player talks to the room only through [`ActorListener`]; toggles are
/// queued so the game can turn them into sounds and host events afterwards.
#[derive(Debug, Default)]
pub struct World {
    registry: CollisionRegistry,
    facing_chest: bool,
    chest_opened: bool,
    toggles: Vec<bool>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &CollisionRegistry {
        &self.registry
    }

    pub fn place(&mut self, id: EntityId, rect: Rect) {
        self.registry.set(id, rect);
    }

    pub fn is_facing_chest(&self) -> bool {
        self.facing_chest
    }

    pub fn is_chest_opened(&self) -> bool {
        self.chest_opened
    }

    /// Chest states produced since the last call, oldest first.
    pub fn take_toggles(&mut self) -> Vec<bool> {
        std::mem::take(&mut self.toggles)
    }

    fn faces_chest(&self, id: &EntityId, rect: Rect, facing: Direction) -> bool {
        if facing != CHEST_APPROACH {
            return false;
        }
        // Probe a copy; the registered rect stays where the actor is.
        let probe = rect.translate(facing.unit() * REACH);
        self.registry.overlapping(&probe, id).any(|hit| *hit == CHEST)
    }
}

impl ActorListener for World {
    fn can_move(&self, id: &EntityId, candidate: &Rect) -> bool {
        self.registry.can_move(candidate, id)
    }

    fn moved(&mut self, id: &EntityId, rect: Rect, facing: Direction) {
        self.registry.set(id.clone(), rect);
        self.facing_chest = self.faces_chest(id, rect, facing);
    }

    fn intercept_action(&mut self, _id: &EntityId) -> bool {
        if !self.facing_chest {
            return false;
        }
        self.chest_opened = !self.chest_opened;
        self.toggles.push(self.chest_opened);
        log::info!("chest {}", if self.chest_opened { "opened" } else { "closed" });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> World {
        let mut world = World::new();
        world.place(CHEST, Rect::new(200.0, 200.0, 32.0, 32.0));
        world.place(NPC, Rect::new(108.0, 100.0, 16.0, 16.0));
        world
    }

    #[test]
    fn facing_up_just_below_the_chest() {
        let mut world = room();
        let below = Rect::new(208.0, 182.0, 16.0, 16.0);
        world.moved(&PLAYER, below, Direction::Up);
        assert!(world.is_facing_chest());
        // The stored rect is not shifted by the probe.
        assert_eq!(world.registry().get(&PLAYER).unwrap(), below);
    }

    #[test]
    fn other_facings_never_face_the_chest() {
        let mut world = room();
        let beside = Rect::new(180.0, 205.0, 16.0, 16.0);
        world.moved(&PLAYER, beside, Direction::Right);
        assert!(!world.is_facing_chest());
        world.moved(&PLAYER, Rect::new(208.0, 240.0, 16.0, 16.0), Direction::Down);
        assert!(!world.is_facing_chest());
    }

    #[test]
    fn facing_up_out_of_reach() {
        let mut world = room();
        // Probe tops out at 200: touching only.
        world.moved(&PLAYER, Rect::new(208.0, 168.0, 16.0, 16.0), Direction::Up);
        assert!(!world.is_facing_chest());
    }

    #[test]
    fn facing_the_npc_is_not_facing_the_chest() {
        let mut world = room();
        world.moved(&PLAYER, Rect::new(108.0, 80.0, 16.0, 16.0), Direction::Up);
        assert!(!world.is_facing_chest());
    }

    #[test]
    fn intercept_toggles_only_when_facing() {
        let mut world = room();
        assert!(!world.intercept_action(&PLAYER));
        assert!(world.take_toggles().is_empty());

        world.moved(&PLAYER, Rect::new(208.0, 182.0, 16.0, 16.0), Direction::Up);
        assert!(world.intercept_action(&PLAYER));
        assert!(world.is_chest_opened());
        assert!(world.intercept_action(&PLAYER));
        assert!(!world.is_chest_opened());
        assert_eq!(world.take_toggles(), vec![true, false]);
    }
}
