//! Cosmetic upload progress.
//!
//! The extraction service reports no progress, so the bar creeps forward on
//! a timer and only reaches 100 once the response is in.

use rand::Rng;

use crate::config::{PROGRESS_CAP, PROGRESS_STEP_MAX, PROGRESS_STEP_MIN};

/// Percentage shown on the progress bar (0..=100).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress(u8);

impl Progress {
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Move forward by `step`, never past [`PROGRESS_CAP`].
    pub fn advance(&mut self, step: u8) {
        self.0 = self.0.saturating_add(step).min(PROGRESS_CAP).max(self.0);
    }

    pub fn complete(&mut self) {
        self.0 = 100;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Draw the next tick's increment.
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(PROGRESS_STEP_MIN..=PROGRESS_STEP_MAX)
}
