mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        ModifierKeyCode, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use beam_shooter::config::SimConfig;
use beam_shooter::controller::{Phase, RoundController};
use beam_shooter::input::{Action, FrameInput, HeldKeys};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 6 frames (120 ms at
/// 50 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 6;

#[derive(Parser, Debug)]
#[command(name = "beam_shooter", about = "Side-scrolling beam shooter in the terminal")]
struct Cli {
    /// TOML file overriding the compiled defaults (missing file = defaults)
    #[arg(long, value_name = "FILE", default_value = "beam_shooter.toml")]
    config: PathBuf,

    /// Seed for a reproducible round
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes; the terminal is owned by the game
    #[arg(long, value_name = "FILE", default_value = "beam_shooter.log")]
    log_file: PathBuf,
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Collapse the raw key map into the simulation's held-key snapshot.
fn held_keys(key_frame: &HashMap<KeyCode, u64>, boost_frame: Option<u64>, frame: u64) -> HeldKeys {
    let boost_by_shift = boost_frame
        .map(|last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false);
    HeldKeys {
        up: any_held(key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
        down: any_held(key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
        left: any_held(key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
        right: any_held(key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
        boost: boost_by_shift || any_held(key_frame, &[KeyCode::Char('b')], frame),
    }
}

// ── Round loop ────────────────────────────────────────────────────────────────

/// Play one round to completion.  Returns the final score.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key, so movement keys can be held together
/// with Space.  Fire and beam-mode toggles are edge-triggered from press
/// events only.  During the game-over hold the loop keeps draining events so
/// Q / Esc / Ctrl-C still end the round immediately.
fn round_loop<W: Write>(
    out: &mut W,
    controller: &mut RoundController<StdRng>,
    rx: &mpsc::Receiver<Event>,
) -> Result<u32> {
    let frame_time = controller.config().frame_duration();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut boost_frame: Option<u64> = None;
    let mut frame: u64 = 0;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut pressed = Vec::new();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if modifiers.contains(KeyModifiers::SHIFT)
                || matches!(
                    code,
                    KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
                )
            {
                boost_frame = match kind {
                    KeyEventKind::Release => None,
                    _ => Some(frame),
                };
            }
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            controller.cancel_hold();
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            controller.cancel_hold();
                        }
                        KeyCode::Char(' ') => pressed.push(Action::Fire),
                        KeyCode::Char('c') | KeyCode::Char('C') => pressed.push(Action::ToggleMode),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Advance ───────────────────────────────────────────────────────────
        let now = Instant::now();
        let phase = match controller.phase() {
            Phase::Running => {
                let input = FrameInput {
                    held: held_keys(&key_frame, boost_frame, frame),
                    pressed,
                };
                controller.step(&input)
            }
            Phase::Ending { .. } => controller.advance_hold(now - last_frame),
            finished @ Phase::Finished { .. } => finished,
        };
        last_frame = now;

        if let Phase::Finished { final_score } = phase {
            return Ok(final_score);
        }

        display::render(out, controller.state(), controller.config(), phase)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file (RUST_LOG controls the level); the TUI owns stdout.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config = SimConfig::load(&cli.config)?;
    let rng = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "seeded round");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut controller = RoundController::new(config, rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the round loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = round_loop(&mut out, &mut controller, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let final_score = result?;
    println!("Final score: {final_score}");
    Ok(())
}
