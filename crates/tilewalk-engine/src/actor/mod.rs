//! Input-driven actors: movement gated by collision, an interceptable action,
//! and state-driven animation frames.
//!
//! One tick of an [`Actor`] runs in this order:
//!
//! 1. [`resolve_movement`]: pick the held direction, ask the listener whether the
//!    moved hitbox is free, commit or keep the position, update facing, walking
//!    and speed, then notify the listener once if anything observable changed.
//! 2. [`handle_action`]: if the action input fired, offer it to the listener;
//!    otherwise start the actor's own action animation.
//! 3. [`Actor::animate`]: advance the action clock and pick the frames to draw.

pub mod action;
pub mod frames;
pub mod listener;
pub mod movement;
pub mod state;

use glam::Vec2;

pub use action::{handle_action, ActionOutcome, ActionTrigger};
pub use frames::{ActorAnimations, ActorFrame, WalkLayout};
pub use listener::ActorListener;
pub use movement::{resolve_movement, MoveOutcome};
pub use state::{ActionState, Direction, Hitbox, MotionState};

use crate::api::types::EntityId;
use crate::core::geometry::Rect;
use crate::input::buttons::InputProvider;

/// Tuning for an actor's movement and action handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorConfig {
    /// World units per second at walking pace.
    pub base_speed: f32,
    /// Speed factor while Run is held.
    pub run_multiplier: f32,
    /// Seconds per walk-cycle frame at walking pace.
    pub walk_frame_duration: f32,
    pub hitbox: Hitbox,
    pub action_trigger: ActionTrigger,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            base_speed: 64.0,
            run_multiplier: 2.0,
            walk_frame_duration: 1.0 / 6.0,
            hitbox: Hitbox::inset_from_cell(32.0, 8.0, 16.0),
            action_trigger: ActionTrigger::Held,
        }
    }
}

/// Everything an actor did during one [`Actor::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub movement: MoveOutcome,
    pub action: ActionOutcome,
}

/// A player-controlled character.
#[derive(Debug, Clone)]
pub struct Actor {
    id: EntityId,
    config: ActorConfig,
    animations: ActorAnimations,
    motion: MotionState,
    action: ActionState,
}

impl Actor {
    pub fn new(id: EntityId, config: ActorConfig, animations: ActorAnimations, position: Vec2) -> Self {
        Self {
            id,
            config,
            animations,
            motion: MotionState::at(position),
            action: ActionState::default(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn action(&self) -> &ActionState {
        &self.action
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    pub fn is_walking(&self) -> bool {
        self.motion.walking
    }

    pub fn is_attacking(&self) -> bool {
        self.action.attacking
    }

    /// Current collision rectangle.
    pub fn rect(&self) -> Rect {
        self.config.hitbox.rect_at(self.motion.position)
    }

    /// Simulation step: movement, then the action input.
    pub fn update<I, L>(&mut self, input: &I, dt: f32, listener: &mut L) -> TickReport
    where
        I: InputProvider + ?Sized,
        L: ActorListener + ?Sized,
    {
        let movement = resolve_movement(&self.id, &mut self.motion, &self.config, input, dt, listener);
        let action = handle_action(
            &self.id,
            &mut self.action,
            self.config.action_trigger,
            input,
            listener,
        );
        TickReport { movement, action }
    }

    /// Frame selection for this tick. Advances the action clock by `dt`; the
    /// walk cycle follows the scene-wide `state_time`.
    pub fn animate(&mut self, dt: f32, state_time: f32) -> ActorFrame {
        let overlay = self
            .action
            .advance(dt, &self.animations.action)
            .map(|index| self.animations.action.frames()[index]);
        if overlay.is_some() && !self.action.attacking {
            log::debug!("{}: action finished", self.id);
        }
        let body = self.animations.body_frame(
            self.motion.walking,
            self.motion.direction,
            state_time,
            self.motion.speed,
        );
        ActorFrame { body, overlay }
    }
}
