/// Frame delta cap used when the configured one is unusable.
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;

/// Variable-step frame clock.
/// One simulation tick runs per host frame; the clock tracks the elapsed time
/// of the current frame and the total running time used by looping animations.
pub struct FrameClock {
    /// Elapsed seconds of the current frame (after clamping).
    delta: f32,
    /// Seconds since the scene started.
    state_time: f32,
    /// Largest delta accepted for a single frame.
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        let max_delta = if max_delta > 0.0 && max_delta.is_finite() {
            max_delta
        } else {
            log::warn!("invalid max frame delta {max_delta}, using {DEFAULT_MAX_FRAME_DT}");
            DEFAULT_MAX_FRAME_DT
        };
        Self {
            delta: 0.0,
            state_time: 0.0,
            max_delta,
        }
    }

    /// Start a new frame. Returns the delta the simulation should use.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        // Negative or non-finite deltas count as a paused frame; long frames
        // (backgrounded tab) are capped.
        self.delta = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_delta)
        } else {
            0.0
        };
        self.state_time += self.delta;
        self.delta
    }

    /// Elapsed seconds of the current frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total seconds since the scene started.
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn reset(&mut self) {
        self.delta = 0.0;
        self.state_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_state_time() {
        let mut clock = FrameClock::new(0.25);
        clock.advance(0.1);
        clock.advance(0.1);
        assert!((clock.state_time() - 0.2).abs() < 1e-6);
        assert!((clock.delta() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = FrameClock::new(0.25);
        let dt = clock.advance(3.0);
        assert_eq!(dt, 0.25);
        assert_eq!(clock.state_time(), 0.25);
    }

    #[test]
    fn negative_delta_is_a_paused_frame() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.advance(-0.5), 0.0);
        assert_eq!(clock.state_time(), 0.0);
    }

    #[test]
    fn non_finite_delta_is_a_paused_frame() {
        let mut clock = FrameClock::new(0.25);
        clock.advance(0.1);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.advance(f32::INFINITY), 0.0);
        assert!((clock.state_time() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn unusable_cap_falls_back_to_default() {
        for cap in [-1.0, 0.0, f32::NAN, f32::INFINITY] {
            let mut clock = FrameClock::new(cap);
            assert_eq!(clock.advance(3.0), DEFAULT_MAX_FRAME_DT);
        }
    }
}
