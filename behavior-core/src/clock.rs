//! Delta-accumulated timers.
//!
//! Every duration in the core advances by the `delta` handed in by the frame
//! driver, never by reading a wall clock, so a recorded sequence of deltas
//! replays to the same state.

use serde::{Deserialize, Serialize};

/// Milliseconds accumulated since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Elapsed {
    ms: f32,
}

impl Elapsed {
    pub fn advance(&mut self, delta: f32) {
        self.ms += delta;
    }

    pub fn reset(&mut self) {
        self.ms = 0.0;
    }

    pub fn ms(&self) -> f32 {
        self.ms
    }
}

/// Counts down toward zero and stays there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Animation frame cadence.
///
/// The period is passed on every advance because some variants speed their
/// animation up with aggression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    timer: f32,
    frame: u8,
    frames: u8,
}

impl FrameClock {
    pub fn new(frames: u8) -> Self {
        Self {
            timer: 0.0,
            frame: 0,
            frames: frames.max(1),
        }
    }

    /// Returns true when the frame advanced on this call.
    pub fn advance(&mut self, delta: f32, period: f32) -> bool {
        self.timer += delta;
        if self.timer >= period {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % self.frames;
            true
        } else {
            false
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_accumulates_and_resets() {
        let mut elapsed = Elapsed::default();
        elapsed.advance(16.0);
        elapsed.advance(16.0);
        assert!((elapsed.ms() - 32.0).abs() < f32::EPSILON);
        elapsed.reset();
        assert_eq!(elapsed.ms(), 0.0);
    }

    #[test]
    fn test_cooldown_clamps_at_zero() {
        let mut cooldown = Cooldown::default();
        assert!(cooldown.is_ready());
        cooldown.start(100.0);
        assert!(!cooldown.is_ready());
        cooldown.tick(60.0);
        cooldown.tick(60.0);
        assert!(cooldown.is_ready());
        assert_eq!(cooldown.remaining(), 0.0);
    }

    #[test]
    fn test_frame_clock_wraps() {
        let mut clock = FrameClock::new(3);
        let mut advanced = 0;
        for _ in 0..10 {
            if clock.advance(400.0, 800.0) {
                advanced += 1;
            }
        }
        assert_eq!(advanced, 5);
        assert_eq!(clock.frame(), 5 % 3);
    }

    #[test]
    fn test_frame_clock_zero_frames_is_safe() {
        let mut clock = FrameClock::new(0);
        assert!(clock.advance(10.0, 5.0));
        assert_eq!(clock.frame(), 0);
    }
}
