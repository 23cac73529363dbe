//! Time-driven sprite animations.
//!
//! An `AnimationDef` is stateless: callers keep their own clock and ask for the
//! key frame at a given time. Frame selection follows the classic play modes
//! (`Normal` clamps on the last frame, `Loop` wraps, `LoopPingPong` plays
//! forward then backward without repeating the end frames).

use crate::assets::sheet::{AssetError, Region};

/// How frame numbers past the end of the sequence are mapped back onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Play once and hold the last frame.
    #[default]
    Normal,
    /// Wrap around to the first frame.
    Loop,
    /// 0, 1, .., n-1, n-2, .., 1, 0, 1, ..
    LoopPingPong,
}

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    frames: Vec<Region>,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub mode: PlayMode,
}

impl AnimationDef {
    pub fn new(frames: Vec<Region>, frame_duration: f32, mode: PlayMode) -> Result<Self, AssetError> {
        if frames.is_empty() {
            return Err(AssetError::EmptyAnimation);
        }
        if !(frame_duration > 0.0 && frame_duration.is_finite()) {
            return Err(AssetError::InvalidFrameDuration(frame_duration));
        }
        Ok(Self {
            frames,
            frame_duration,
            mode,
        })
    }

    /// Build from a frame rate instead of a per-frame duration.
    pub fn from_fps(frames: Vec<Region>, fps: f32, mode: PlayMode) -> Result<Self, AssetError> {
        Self::new(frames, 1.0 / fps, mode)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn frames(&self) -> &[Region] {
        &self.frames
    }

    /// Index of the frame shown `time` seconds into the animation.
    pub fn key_frame_index(&self, time: f32) -> usize {
        let len = self.frames.len();
        if len == 1 {
            return 0;
        }
        let number = (time.max(0.0) / self.frame_duration) as usize;
        match self.mode {
            PlayMode::Normal => number.min(len - 1),
            PlayMode::Loop => number % len,
            PlayMode::LoopPingPong => {
                let n = number % (len * 2 - 2);
                if n >= len {
                    len - 2 - (n - len)
                } else {
                    n
                }
            }
        }
    }

    /// Frame shown `time` seconds into the animation.
    pub fn key_frame(&self, time: f32) -> Region {
        self.frames[self.key_frame_index(time)]
    }

    /// The middle frame of the sequence (the neutral pose of a walk cycle).
    pub fn middle_frame(&self) -> Region {
        self.frames[self.frames.len() / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::AtlasId;

    fn strip(count: u32) -> Vec<Region> {
        (0..count)
            .map(|col| Region {
                atlas: AtlasId(0),
                col,
                row: 0,
                width: 32.0,
                height: 32.0,
            })
            .collect()
    }

    fn indices(def: &AnimationDef, steps: usize) -> Vec<usize> {
        // Sample the middle of each frame slot to stay clear of float boundaries.
        (0..steps)
            .map(|i| def.key_frame_index((i as f32 + 0.5) * def.frame_duration))
            .collect()
    }

    #[test]
    fn normal_mode_holds_last_frame() {
        let def = AnimationDef::from_fps(strip(5), 20.0, PlayMode::Normal).unwrap();
        assert_eq!(indices(&def, 7), vec![0, 1, 2, 3, 4, 4, 4]);
        assert_eq!(def.key_frame_index(0.13), 2);
        assert_eq!(def.key_frame_index(0.26), def.last_index());
    }

    #[test]
    fn loop_mode_wraps() {
        let def = AnimationDef::new(strip(3), 0.1, PlayMode::Loop).unwrap();
        assert_eq!(indices(&def, 7), vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn ping_pong_plays_forward_then_backward() {
        let def = AnimationDef::new(strip(3), 1.0 / 6.0, PlayMode::LoopPingPong).unwrap();
        assert_eq!(indices(&def, 8), vec![0, 1, 2, 1, 0, 1, 2, 1]);
    }

    #[test]
    fn single_frame_is_always_index_zero() {
        let def = AnimationDef::new(strip(1), 0.1, PlayMode::LoopPingPong).unwrap();
        assert_eq!(def.key_frame_index(123.0), 0);
    }

    #[test]
    fn middle_frame_of_walk_cycle() {
        let def = AnimationDef::new(strip(3), 0.1, PlayMode::LoopPingPong).unwrap();
        assert_eq!(def.middle_frame().col, 1);
    }

    #[test]
    fn empty_animation_is_rejected() {
        assert!(matches!(
            AnimationDef::new(Vec::new(), 0.1, PlayMode::Loop),
            Err(AssetError::EmptyAnimation)
        ));
    }

    #[test]
    fn non_positive_or_non_finite_rate_is_rejected() {
        for fps in [0.0, -20.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                AnimationDef::from_fps(strip(5), fps, PlayMode::Normal),
                Err(AssetError::InvalidFrameDuration(_))
            ));
        }
        assert!(matches!(
            AnimationDef::new(strip(3), 0.0, PlayMode::Loop),
            Err(AssetError::InvalidFrameDuration(_))
        ));
    }
}
