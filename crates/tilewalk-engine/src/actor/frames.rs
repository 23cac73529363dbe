//! Render-time frame selection for a walking actor.

use crate::actor::state::Direction;
use crate::assets::sheet::{AssetError, Region, SpriteSheet};
use crate::components::animation::{AnimationDef, PlayMode};

/// What to draw for an actor this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorFrame {
    /// Walk-cycle or idle frame.
    pub body: Region,
    /// Action animation frame drawn on top, while an action runs.
    pub overlay: Option<Region>,
}

/// Walk cycles for the four facings plus the one-shot action animation.
#[derive(Debug, Clone)]
pub struct ActorAnimations {
    pub walk_up: AnimationDef,
    pub walk_down: AnimationDef,
    pub walk_left: AnimationDef,
    pub walk_right: AnimationDef,
    pub action: AnimationDef,
}

/// Where each facing's walk cycle sits on a character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkLayout {
    pub first_col: u32,
    pub frames: u32,
    pub down_row: u32,
    pub left_row: u32,
    pub right_row: u32,
    pub up_row: u32,
}

impl ActorAnimations {
    /// Ping-pong walk cycles cut from `sheet` and an action animation played once.
    pub fn from_sheet(
        sheet: &SpriteSheet,
        layout: WalkLayout,
        walk_frame_duration: f32,
        action: AnimationDef,
    ) -> Result<Self, AssetError> {
        let walk = |row: u32| -> Result<AnimationDef, AssetError> {
            let frames = sheet.row_strip(row, layout.first_col, layout.frames)?;
            AnimationDef::new(frames, walk_frame_duration, PlayMode::LoopPingPong)
        };
        Ok(Self {
            walk_up: walk(layout.up_row)?,
            walk_down: walk(layout.down_row)?,
            walk_left: walk(layout.left_row)?,
            walk_right: walk(layout.right_row)?,
            action,
        })
    }

    pub fn walk(&self, direction: Direction) -> &AnimationDef {
        match direction {
            Direction::Up => &self.walk_up,
            Direction::Down => &self.walk_down,
            Direction::Left => &self.walk_left,
            Direction::Right => &self.walk_right,
        }
    }

    /// Body frame for the actor's state. Pure in its inputs.
    ///
    /// Walking plays the facing's cycle from the shared `state_time`, faster by
    /// `speed` (running doubles the playback rate). Standing shows the cycle's
    /// neutral middle frame.
    pub fn body_frame(&self, walking: bool, direction: Direction, state_time: f32, speed: f32) -> Region {
        let cycle = self.walk(direction);
        if walking {
            cycle.key_frame(state_time * speed)
        } else {
            cycle.middle_frame()
        }
    }
}
