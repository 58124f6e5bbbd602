//! Fixed frame-rate pacing
//!
//! Each frame gets a whole-millisecond budget. Whatever the frame did not use
//! is slept away at the end; a frame that overruns simply starts the next one
//! late. There is no catch-up.

use std::time::{Duration, Instant};

use crate::config::FrameConfig;

/// Sleeps out the unused part of each frame budget
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    frame_start: Option<Instant>,
}

impl FramePacer {
    /// Pacer using the budget of `config`
    pub fn from_config(config: &FrameConfig) -> Self {
        Self::with_budget(config.frame_budget())
    }

    pub fn with_budget(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: None,
        }
    }

    /// Time available per frame
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Budget left after `elapsed`, zero once the frame has overrun
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleep until the frame budget is used up; returns the time slept
    ///
    /// Without a matching [`begin`](Self::begin) the whole budget is slept.
    pub fn end(&mut self) -> Duration {
        let elapsed = self
            .frame_start
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();
        let delay = self.remaining(elapsed);
        if delay.is_zero() {
            log::trace!("Frame overran budget by {:?}", elapsed - self.budget);
        } else {
            std::thread::sleep(delay);
        }
        delay
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_config(&FrameConfig::default())
    }
}
