/// Weapon mode and charge gating.

use crate::entities::{ChargeState, FireMode, ShotKind};

impl ChargeState {
    pub fn new(threshold: u32) -> Self {
        ChargeState {
            mode: FireMode::Instant,
            counter: 0,
            threshold: threshold.max(1),
        }
    }

    /// Instant ⇄ Charged.  Accumulated charge is kept across toggles.
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            FireMode::Instant => FireMode::Charged,
            FireMode::Charged => FireMode::Instant,
        };
    }

    /// One frame of charging.  Only counts in Charged mode and stops at the
    /// threshold.
    pub fn advance(&mut self) {
        if self.mode == FireMode::Charged && self.counter < self.threshold {
            self.counter += 1;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.mode == FireMode::Charged && self.counter >= self.threshold
    }

    /// The shot a fire press produces, if any.  A charged shot consumes the
    /// charge.
    pub fn try_fire(&mut self) -> Option<ShotKind> {
        match self.mode {
            FireMode::Instant => Some(ShotKind::Instant),
            FireMode::Charged if self.counter >= self.threshold => {
                self.counter = 0;
                Some(ShotKind::Charged)
            }
            FireMode::Charged => None,
        }
    }
}
