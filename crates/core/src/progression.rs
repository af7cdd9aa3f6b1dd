//! Score and difficulty progression.
//!
//! Score is survival time: one point per `score_divisor_ms` of running time.
//! Sub-point time is carried to the next frame rather than dropped, so the
//! score depends only on total elapsed time, not on frame pacing.
//!
//! Difficulty rises by a fixed increment every `score_threshold` points, up to
//! a cap. Crossings are tracked with an explicit next-threshold counter: a
//! frame that jumps over several thresholds applies each of them, and
//! repeated frames at the same score apply none.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionRules {
    pub base_speed: f32,
    pub max_speed: f32,
    pub increment: f32,
    pub threshold: u32,
    pub score_divisor_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    rules: ProgressionRules,
    score: u32,
    speed: f32,
    remainder_ms: u32,
    next_threshold: u32,
}

impl Progression {
    pub fn new(rules: ProgressionRules) -> Self {
        Self {
            rules,
            score: 0,
            speed: rules.base_speed,
            remainder_ms: 0,
            next_threshold: rules.threshold,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current difficulty speed (pixels per frame).
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn next_threshold(&self) -> u32 {
        self.next_threshold
    }

    /// Back to zero score and baseline speed.
    pub fn reset(&mut self) {
        *self = Self::new(self.rules);
    }

    /// Accrue score for `elapsed_ms` and apply any threshold crossings.
    ///
    /// Returns the number of difficulty steps applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.remainder_ms as u64 + elapsed_ms as u64;
        let divisor = self.rules.score_divisor_ms.max(1) as u64;
        let points = (total / divisor).min(u32::MAX as u64) as u32;
        self.remainder_ms = (total % divisor) as u32;
        self.score = self.score.saturating_add(points);

        let mut steps = 0;
        while self.score >= self.next_threshold {
            if self.speed < self.rules.max_speed {
                self.speed = (self.speed + self.rules.increment).min(self.rules.max_speed);
                steps += 1;
                debug!(
                    "difficulty: score={} speed={:.1}",
                    self.next_threshold, self.speed
                );
            }
            match self.next_threshold.checked_add(self.rules.threshold.max(1)) {
                Some(next) => self.next_threshold = next,
                None => {
                    self.next_threshold = u32::MAX;
                    break;
                }
            }
        }
        steps
    }
}
