/// Compiled-in defaults.  `SimConfig::default()` reads every value from here;
/// a TOML file can override any subset at startup.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 1600.0;
pub const FIELD_HEIGHT: f32 = 900.0;

// ── Actor ─────────────────────────────────────────────────────────────────────

pub const ACTOR_START: (f32, f32) = (900.0, 400.0);
pub const ACTOR_SIZE: (f32, f32) = (100.0, 100.0);
pub const ACTOR_SPEED: f32 = 10.0;
pub const ACTOR_BOOST_SPEED: f32 = 20.0;
pub const ACTOR_HEALTH: i32 = 2;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: (f32, f32) = (70.0, 70.0);
pub const ENEMY_SPEED: f32 = 13.0;
/// One enemy every this many frames.
pub const ENEMY_SPAWN_INTERVAL: u64 = 200;
pub const ENEMY_STOP_MIN: f32 = 250.0;
/// Distance kept between the rightmost stop line and the right edge.
pub const ENEMY_STOP_RIGHT_MARGIN: f32 = 100.0;
pub const ENEMY_DROP_INTERVAL: (u64, u64) = (50, 300);
pub const ENEMY_VARIANTS: u8 = 3;

// ── Threats (bombs) ───────────────────────────────────────────────────────────

pub const THREAT_SPEED: f32 = 6.0;
pub const THREAT_RADIUS: (f32, f32) = (10.0, 50.0);
pub const THREAT_COLORS: usize = 6;

// ── Weapon shots ──────────────────────────────────────────────────────────────

pub const INSTANT_SHOT_SIZE: (f32, f32) = (100.0, 20.0);
pub const INSTANT_SHOT_SPEED: f32 = 10.0;
pub const CHARGED_SHOT_SIZE: (f32, f32) = (120.0, 120.0);
pub const CHARGED_SHOT_SPEED: f32 = 5.0;
/// A charged shot survives until its centre is this far past the right edge.
pub const CHARGED_SHOT_MARGIN: f32 = 100.0;
pub const CHARGE_THRESHOLD: u32 = 150;

// ── Scoring & effects ─────────────────────────────────────────────────────────

pub const ENEMY_SCORE: u32 = 10;
pub const THREAT_SCORE: u32 = 1;
pub const ENEMY_EXPLOSION_LIFE: i32 = 100;
pub const THREAT_EXPLOSION_LIFE: i32 = 50;
pub const EXPLOSION_SIZE: (f32, f32) = (100.0, 100.0);

// ── Round timing ──────────────────────────────────────────────────────────────

pub const TARGET_FPS: u32 = 50;
pub const GAME_OVER_HOLD_SECS: f32 = 5.0;
