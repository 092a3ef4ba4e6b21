//! Fixed-step frame clock
//!
//! Converts variable frame time into a whole number of simulation ticks.

use crate::consts::MAX_SUBSTEPS;

/// Largest frame delta accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator that yields fixed ticks from frame deltas
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed time; returns how many ticks to run.
    ///
    /// At most `max_substeps` ticks per frame; any backlog beyond that is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Leftover fraction of a tick, for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_rate() {
        let mut clock = FixedStep::new(60);
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(1.0 / 60.0 + 1e-6);
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_step_from_rate() {
        assert_eq!(FixedStep::new(60).step(), 1.0 / 60.0);
        assert_eq!(FixedStep::new(0).step(), 1.0);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(1.0 / 240.0), 0);
        assert!(clock.alpha() > 0.2 && clock.alpha() < 0.3);
        assert_eq!(clock.advance(1.0 / 240.0), 0);
        assert_eq!(clock.advance(1.0 / 120.0 + 1e-4), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedStep::new(120);
        // 10 seconds clamps to 0.1s, i.e. 12 ticks, capped to 8
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
