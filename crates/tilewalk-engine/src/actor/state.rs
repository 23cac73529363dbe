use glam::Vec2;

use crate::core::geometry::Rect;
use crate::input::buttons::{Button, InputProvider};

/// Facing of an actor. Drives both walk-cycle selection and the movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Resolution order when several directions are held at once.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step along this direction (Y up).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    pub fn button(self) -> Button {
        match self {
            Direction::Up => Button::Up,
            Direction::Down => Button::Down,
            Direction::Left => Button::Left,
            Direction::Right => Button::Right,
        }
    }

    /// Highest-priority held direction, if any. No diagonals.
    pub fn from_input<I: InputProvider + ?Sized>(input: &I) -> Option<Direction> {
        Self::PRIORITY
            .into_iter()
            .find(|dir| input.is_held(dir.button()))
    }
}

/// Collision box of an actor relative to its draw position.
/// Usually narrower than the sprite and only covers the feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub inset_x: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    /// A box `inset_x` in from both sides of a `cell_width`-wide sprite.
    pub fn inset_from_cell(cell_width: f32, inset_x: f32, height: f32) -> Self {
        Self {
            inset_x,
            width: cell_width - 2.0 * inset_x,
            height,
        }
    }

    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::new(pos.x + self.inset_x, pos.y, self.width, self.height)
    }
}

/// Where the actor is and how it is moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Bottom-left draw position.
    pub position: Vec2,
    pub direction: Direction,
    pub walking: bool,
    /// 1.0 when walking, the run multiplier while Run is held.
    pub speed: f32,
}

impl MotionState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            direction: Direction::default(),
            walking: false,
            speed: 1.0,
        }
    }
}

/// Progress of the actor's own action animation (the slash).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    pub attacking: bool,
    /// Seconds since the action started.
    pub clock: f32,
}
