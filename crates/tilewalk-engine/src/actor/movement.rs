//! Movement resolver: held-direction intent → collision veto → commit.

use crate::actor::listener::ActorListener;
use crate::actor::state::{Direction, MotionState};
use crate::actor::ActorConfig;
use crate::api::types::EntityId;
use crate::input::buttons::{Button, InputProvider};

/// What happened to an actor's motion during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The collision check passed and the position was committed.
    pub moved: bool,
    /// A direction was held but the candidate rect was vetoed.
    pub blocked: bool,
    /// Facing changed this tick.
    pub turned: bool,
    /// `ActorListener::moved` was called.
    pub notified: bool,
}

/// Run one tick of movement for `id`.
///
/// Position changes only when the listener approves the candidate rect.
/// Direction, walking and speed are updated every tick regardless. The speed
/// read from the Run button applies from the next tick's displacement.
pub fn resolve_movement<I, L>(
    id: &EntityId,
    motion: &mut MotionState,
    config: &ActorConfig,
    input: &I,
    dt: f32,
    listener: &mut L,
) -> MoveOutcome
where
    I: InputProvider + ?Sized,
    L: ActorListener + ?Sized,
{
    let mut outcome = MoveOutcome::default();
    let intent = Direction::from_input(input);

    if let Some(direction) = intent {
        let step = direction.unit() * (config.base_speed * motion.speed * dt);
        let candidate = config.hitbox.rect_at(motion.position + step);
        outcome.turned = direction != motion.direction;

        if listener.can_move(id, &candidate) {
            motion.position += step;
            outcome.moved = true;
        } else {
            outcome.blocked = true;
            if outcome.turned {
                log::debug!("{id}: blocked, now facing {direction:?}");
            }
        }
        motion.direction = direction;
    }

    motion.walking = intent.is_some();
    motion.speed = if input.is_held(Button::Run) {
        config.run_multiplier
    } else {
        1.0
    };

    if outcome.moved || (outcome.blocked && outcome.turned) {
        listener.moved(id, config.hitbox.rect_at(motion.position), motion.direction);
        outcome.notified = true;
    }

    outcome
}
