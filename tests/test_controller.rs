use std::time::Duration;

use beam_shooter::compute::init_state;
use beam_shooter::config::SimConfig;
use beam_shooter::controller::{Phase, RoundController};
use beam_shooter::entities::*;
use beam_shooter::geometry::Rect;
use beam_shooter::input::{Action, FrameInput};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_config() -> SimConfig {
    SimConfig {
        enemy_spawn_interval: 1_000_000,
        ..SimConfig::default()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A state one threat away from defeat, with that threat already on the actor.
fn doomed_state(config: &SimConfig) -> RoundState {
    let mut s = init_state(config);
    s.actor.health = 0;
    s.score = 37;
    s.threats.push(Threat {
        rect: Rect::from_center(900.0, 400.0, 20.0, 20.0),
        velocity: (0.0, 1.0),
        speed: 6.0,
        color: 0,
    });
    s
}

#[test]
fn new_round_is_running() {
    let c = RoundController::new(quiet_config(), seeded_rng());
    assert_eq!(c.phase(), Phase::Running);
    assert_eq!(c.state().frame, 0);
    assert_eq!(c.final_score(), None);
}

#[test]
fn step_advances_state() {
    let mut c = RoundController::new(quiet_config(), seeded_rng());
    let phase = c.step(&FrameInput::pressing(&[Action::Fire]));
    assert_eq!(phase, Phase::Running);
    assert_eq!(c.state().frame, 1);
    assert_eq!(c.state().shots.len(), 1);
}

#[test]
fn defeat_enters_hold_with_full_delay() {
    let config = quiet_config();
    let mut c = RoundController::with_state(config.clone(), doomed_state(&config), seeded_rng());
    let phase = c.step(&FrameInput::idle());
    assert_eq!(
        phase,
        Phase::Ending {
            remaining: Duration::from_secs(5)
        }
    );
    assert_eq!(c.state().status, GameStatus::GameOver);
    assert_eq!(c.final_score(), None);
}

#[test]
fn hold_freezes_simulation() {
    let config = quiet_config();
    let mut c = RoundController::with_state(config.clone(), doomed_state(&config), seeded_rng());
    c.step(&FrameInput::idle());
    let frame = c.state().frame;
    c.step(&FrameInput::pressing(&[Action::Fire]));
    assert_eq!(c.state().frame, frame);
    assert!(c.state().shots.is_empty());
}

#[test]
fn hold_counts_down_then_finishes() {
    let config = quiet_config();
    let mut c = RoundController::with_state(config.clone(), doomed_state(&config), seeded_rng());
    c.step(&FrameInput::idle());

    let phase = c.advance_hold(Duration::from_secs(2));
    assert_eq!(
        phase,
        Phase::Ending {
            remaining: Duration::from_secs(3)
        }
    );

    let phase = c.advance_hold(Duration::from_secs(4));
    assert_eq!(phase, Phase::Finished { final_score: 37 });
    assert_eq!(c.final_score(), Some(37));
}

#[test]
fn cancel_cuts_the_hold_short() {
    let config = quiet_config();
    let mut c = RoundController::with_state(config.clone(), doomed_state(&config), seeded_rng());
    c.step(&FrameInput::idle());
    c.advance_hold(Duration::from_millis(100));
    assert_eq!(c.cancel_hold(), Phase::Finished { final_score: 37 });
}

#[test]
fn cancel_while_running_abandons_round() {
    let mut c = RoundController::new(quiet_config(), seeded_rng());
    c.step(&FrameInput::idle());
    assert_eq!(c.cancel_hold(), Phase::Finished { final_score: 0 });
    // Finished is terminal
    assert_eq!(c.step(&FrameInput::idle()), Phase::Finished { final_score: 0 });
    assert_eq!(c.advance_hold(Duration::from_secs(1)), Phase::Finished { final_score: 0 });
}

#[test]
fn hold_time_ignored_while_running() {
    let mut c = RoundController::new(quiet_config(), seeded_rng());
    assert_eq!(c.advance_hold(Duration::from_secs(60)), Phase::Running);
}

#[test]
fn zero_hold_finishes_on_defeat() {
    let config = SimConfig {
        game_over_hold_secs: 0.0,
        ..quiet_config()
    };
    let mut c = RoundController::with_state(config.clone(), doomed_state(&config), seeded_rng());
    assert_eq!(c.step(&FrameInput::idle()), Phase::Finished { final_score: 37 });
}

#[test]
fn prepared_game_over_state_starts_in_hold() {
    let config = quiet_config();
    let mut s = init_state(&config);
    s.status = GameStatus::GameOver;
    let c = RoundController::with_state(config, s, seeded_rng());
    assert!(matches!(c.phase(), Phase::Ending { .. }));
}
