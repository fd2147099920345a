/// Round controller: owns one round's state and drives it frame by frame,
/// including the wind-down after the actor is defeated.
///
/// The game-over hold is a phase, not a sleep.  The host keeps calling
/// [`RoundController::advance_hold`] with the real time that passed, keeps
/// drawing the overlay, and can end the hold early with
/// [`RoundController::cancel_hold`] (for example when the window is closed).

use std::time::Duration;

use rand::Rng;

use crate::compute::{init_state, tick};
use crate::config::SimConfig;
use crate::entities::{GameStatus, RoundState};
use crate::input::FrameInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The round is over; the overlay stays up for `remaining`.
    Ending { remaining: Duration },
    Finished { final_score: u32 },
}

pub struct RoundController<R: Rng> {
    config: SimConfig,
    state: RoundState,
    phase: Phase,
    rng: R,
}

impl<R: Rng> RoundController<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        let state = init_state(&config);
        tracing::info!(
            width = config.width,
            height = config.height,
            health = state.actor.health,
            "round started"
        );
        RoundController {
            config,
            state,
            phase: Phase::Running,
            rng,
        }
    }

    /// Start from a prepared state instead of a fresh one.
    pub fn with_state(config: SimConfig, state: RoundState, rng: R) -> Self {
        let phase = match state.status {
            GameStatus::Playing => Phase::Running,
            GameStatus::GameOver => Phase::Ending {
                remaining: config.game_over_hold(),
            },
        };
        RoundController {
            config,
            state,
            phase,
            rng,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::Finished { final_score } => Some(final_score),
            _ => None,
        }
    }

    /// Run one simulation frame.  Outside `Running` the state is frozen and
    /// the input is ignored.
    pub fn step(&mut self, input: &FrameInput) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }
        self.state = tick(&self.state, input, &self.config, &mut self.rng);
        if self.state.status == GameStatus::GameOver {
            let remaining = self.config.game_over_hold();
            tracing::info!(
                score = self.state.score,
                hold_ms = remaining.as_millis() as u64,
                "holding game-over screen"
            );
            self.phase = Phase::Ending { remaining };
            if remaining.is_zero() {
                self.finish();
            }
        }
        self.phase
    }

    /// Count down the game-over hold by `elapsed` real time.
    pub fn advance_hold(&mut self, elapsed: Duration) -> Phase {
        if let Phase::Ending { remaining } = self.phase {
            let remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                self.finish();
            } else {
                self.phase = Phase::Ending { remaining };
            }
        }
        self.phase
    }

    /// End the round now.  A running round is abandoned with its current
    /// score; an ending round skips the rest of its hold.
    pub fn cancel_hold(&mut self) -> Phase {
        if !matches!(self.phase, Phase::Finished { .. }) {
            tracing::info!("round cancelled by host");
            self.finish();
        }
        self.phase
    }

    fn finish(&mut self) {
        let final_score = self.state.score;
        tracing::info!(final_score, "round finished");
        self.phase = Phase::Finished { final_score };
    }
}
