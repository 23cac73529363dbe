//! Action interceptor: the scene gets first refusal on every action firing.

use crate::actor::listener::ActorListener;
use crate::actor::state::ActionState;
use crate::api::types::EntityId;
use crate::components::animation::AnimationDef;
use crate::input::buttons::{Button, InputProvider};

/// When the Action button counts as firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionTrigger {
    /// Every tick the button is held (leveled input).
    #[default]
    Held,
    /// Only on the tick the button goes down.
    Pressed,
}

impl ActionTrigger {
    pub fn fired<I: InputProvider + ?Sized>(self, input: &I) -> bool {
        match self {
            ActionTrigger::Held => input.is_held(Button::Action),
            ActionTrigger::Pressed => input.just_pressed(Button::Action),
        }
    }
}

/// Result of offering the action input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionOutcome {
    /// The action input did not fire.
    #[default]
    Idle,
    /// The listener consumed the action.
    Intercepted,
    /// The actor started its own action animation.
    Started,
    /// Not intercepted, but an action animation is already running.
    Busy,
}

/// Offer a fired action to the listener, falling back to the actor's own action.
pub fn handle_action<I, L>(
    id: &EntityId,
    state: &mut ActionState,
    trigger: ActionTrigger,
    input: &I,
    listener: &mut L,
) -> ActionOutcome
where
    I: InputProvider + ?Sized,
    L: ActorListener + ?Sized,
{
    if !trigger.fired(input) {
        return ActionOutcome::Idle;
    }
    if listener.intercept_action(id) {
        log::debug!("{id}: action intercepted");
        return ActionOutcome::Intercepted;
    }
    if state.attacking {
        return ActionOutcome::Busy;
    }
    state.attacking = true;
    state.clock = 0.0;
    log::debug!("{id}: action started");
    ActionOutcome::Started
}

impl ActionState {
    /// Advance a running action by `dt` and return the frame index to draw.
    ///
    /// The tick that selects the last frame still draws it, then the action
    /// ends and the clock resets.
    pub fn advance(&mut self, dt: f32, animation: &AnimationDef) -> Option<usize> {
        if !self.attacking {
            return None;
        }
        self.clock += dt;
        let index = animation.key_frame_index(self.clock);
        if index == animation.last_index() {
            self.attacking = false;
            self.clock = 0.0;
        }
        Some(index)
    }
}
