/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// round.  No game logic is performed; this module only translates state
/// into terminal commands.  The logical playfield is scaled onto whatever
/// terminal size is current.

use std::io::Write;

use beam_shooter::config::SimConfig;
use beam_shooter::controller::Phase;
use beam_shooter::entities::{
    ActorPose, Enemy, EnemyState, Explosion, Facing, FireMode, RoundState, Shot, ShotKind, Threat,
};
use beam_shooter::geometry::Rect;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Blue;
const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_MODE: Color = Color::White;
const C_HUD_READY: Color = Color::Yellow;
const C_ACTOR: Color = Color::White;
const C_ACTOR_JOY: Color = Color::Green;
const C_ACTOR_DEFEAT: Color = Color::DarkRed;
const C_ENEMIES: [Color; 3] = [Color::Green, Color::Magenta, Color::Cyan];
const C_SHOT_INSTANT: Color = Color::Cyan;
const C_SHOT_CHARGED: Color = Color::Yellow;
const C_EXPLOSION: [Color; 2] = [Color::Red, Color::Yellow];
const C_THREATS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];
const C_FROZEN: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Maps playfield units onto terminal cells inside the border.
struct Viewport {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(config: &SimConfig, cols: u16, rows: u16) -> Self {
        let inner_w = cols.saturating_sub(2).max(1);
        let inner_h = rows.saturating_sub(4).max(1);
        Viewport {
            cols,
            rows,
            scale_x: f32::from(inner_w) / config.width,
            scale_y: f32::from(inner_h) / config.height,
        }
    }

    /// Terminal cell for a playfield point, or `None` outside the border.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = 1.0 + (x * self.scale_x).floor();
        let row = 2.0 + (y * self.scale_y).floor();
        let max_col = f32::from(self.cols.saturating_sub(2));
        let max_row = f32::from(self.rows.saturating_sub(3));
        if col < 1.0 || row < 2.0 || col > max_col || row > max_row {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn center(&self, rect: &Rect) -> Option<(u16, u16)> {
        let (cx, cy) = rect.center();
        self.cell(cx, cy)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &RoundState,
    config: &SimConfig,
    phase: Phase,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(config, cols, rows);
    let frozen = phase != Phase::Running;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, state, &view)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, &view, frozen)?;
    }
    for threat in &state.threats {
        draw_threat(out, threat, &view, frozen)?;
    }
    for shot in state.shots.iter().chain(&state.charged_shots) {
        draw_shot(out, shot, &view, frozen)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, explosion, &view, frozen)?;
    }

    draw_actor(out, state, &view)?;
    draw_controls_hint(out, &view)?;

    if let Phase::Ending { remaining } = phase {
        draw_game_over(out, state, &view, remaining.as_secs() + 1)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &RoundState, view: &Viewport) -> std::io::Result<()> {
    // Health — left, one heart per remaining point plus empty frames
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    let full = (state.actor.health + 1).max(0) as usize;
    let empty = 3usize.saturating_sub(full);
    out.queue(Print(format!("{}{}", "♥".repeat(full), "♡".repeat(empty))))?;

    // Score — centre
    let score_str = format!("Score: {}", state.score);
    let sx = (view.cols / 2).saturating_sub(score_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    // Beam mode and charge readiness — right
    let mode_str = match state.charge.mode {
        FireMode::Instant => "Beam : Normal".to_string(),
        FireMode::Charged => format!(
            "Beam : Charge {:>3}%",
            state.charge.counter * 100 / state.charge.threshold.max(1)
        ),
    };
    let ready_str = if state.charge.is_ready() { "Charge OK! " } else { "" };
    let right_len = (mode_str.chars().count() + ready_str.chars().count()) as u16;
    out.queue(cursor::MoveTo(view.cols.saturating_sub(right_len + 1), 0))?;
    if !ready_str.is_empty() {
        out.queue(style::SetForegroundColor(C_HUD_READY))?;
        out.queue(Print(ready_str))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_MODE))?;
    out.queue(Print(&mode_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn facing_arrow(facing: Facing) -> &'static str {
    match facing {
        Facing::Right => "→",
        Facing::UpRight => "↗",
        Facing::Up => "↑",
        Facing::UpLeft => "↖",
        Facing::Left => "←",
        Facing::DownLeft => "↙",
        Facing::Down => "↓",
        Facing::DownRight => "↘",
    }
}

fn draw_actor<W: Write>(out: &mut W, state: &RoundState, view: &Viewport) -> std::io::Result<()> {
    let actor = &state.actor;
    let Some((col, row)) = view.center(&actor.rect) else {
        return Ok(());
    };
    let (body, color) = match actor.pose {
        ActorPose::Normal => ("(◕‿◕)", C_ACTOR),
        ActorPose::Joy => ("(^▽^)", C_ACTOR_JOY),
        ActorPose::Defeat => ("(×_×)", C_ACTOR_DEFEAT),
    };
    out.queue(cursor::MoveTo(col.saturating_sub(2).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(body))?;
    out.queue(Print(facing_arrow(actor.facing)))?;
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    enemy: &Enemy,
    view: &Viewport,
    frozen: bool,
) -> std::io::Result<()> {
    let Some((col, row)) = view.center(&enemy.rect) else {
        return Ok(());
    };
    let color = if frozen {
        C_FROZEN
    } else {
        C_ENEMIES[enemy.variant as usize % C_ENEMIES.len()]
    };
    let sprite = match enemy.state {
        EnemyState::Descending => "<◎",
        EnemyState::Stopped => "[◎]",
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_threat<W: Write>(
    out: &mut W,
    threat: &Threat,
    view: &Viewport,
    frozen: bool,
) -> std::io::Result<()> {
    let Some((col, row)) = view.center(&threat.rect) else {
        return Ok(());
    };
    let color = if frozen {
        C_FROZEN
    } else {
        C_THREATS[threat.color % C_THREATS.len()]
    };
    let glyph = if threat.rect.width >= 60.0 { "●" } else { "•" };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_shot<W: Write>(
    out: &mut W,
    shot: &Shot,
    view: &Viewport,
    frozen: bool,
) -> std::io::Result<()> {
    let Some((col, row)) = view.center(&shot.rect) else {
        return Ok(());
    };
    let (glyph, color) = match shot.kind {
        ShotKind::Instant => ("══", C_SHOT_INSTANT),
        ShotKind::Charged => ("◉", C_SHOT_CHARGED),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(if frozen { C_FROZEN } else { color }))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &Explosion,
    view: &Viewport,
    frozen: bool,
) -> std::io::Result<()> {
    let Some((col, row)) = view.center(&explosion.rect) else {
        return Ok(());
    };
    let frame = explosion.frame_index();
    let glyph = if frame == 0 { "✶" } else { "✷" };
    let color = if frozen { C_FROZEN } else { C_EXPLOSION[frame] };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   SHIFT/B : Boost   SPACE : Fire   C : Beam mode   Q : Quit",
    ))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &RoundState,
    view: &Viewport,
    seconds_left: u64,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let hint = format!("Closing in {}s  —  Q to quit now", seconds_left);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::White),
        ("║     GAME  OVER     ║", Color::White),
        ("╚════════════════════╝", Color::White),
    ];

    let cx = view.cols / 2;
    let total_rows = lines.len() + 2;
    let start_row = (view.rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(&hint))?;

    Ok(())
}
