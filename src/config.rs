/// Runtime configuration loaded from a TOML file.
///
/// [`SimConfig`] mirrors every value in [`crate::constants`].  Missing keys
/// fall back to the compiled defaults, so a file only needs the values it
/// wants to change:
///
/// ```toml
/// enemy_spawn_interval = 120
/// charge_threshold = 100
/// ```
///
/// A missing file is not an error; [`SimConfig::load`] returns the defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Playfield ─────────────────────────────────────────────────────────────
    pub width: f32,
    pub height: f32,

    // ── Actor ─────────────────────────────────────────────────────────────────
    pub actor_start: (f32, f32),
    pub actor_size: (f32, f32),
    pub actor_speed: f32,
    pub actor_boost_speed: f32,
    pub actor_health: i32,

    // ── Enemies ───────────────────────────────────────────────────────────────
    pub enemy_size: (f32, f32),
    pub enemy_speed: f32,
    pub enemy_spawn_interval: u64,
    pub enemy_stop_min: f32,
    pub enemy_stop_right_margin: f32,
    /// Inclusive range for each enemy's threat-drop interval.
    pub enemy_drop_interval: (u64, u64),

    // ── Threats ───────────────────────────────────────────────────────────────
    pub threat_speed: f32,
    /// Inclusive range for the cosmetic bomb radius.
    pub threat_radius: (f32, f32),

    // ── Weapon ────────────────────────────────────────────────────────────────
    pub instant_shot_size: (f32, f32),
    pub instant_shot_speed: f32,
    pub charged_shot_size: (f32, f32),
    pub charged_shot_speed: f32,
    pub charged_shot_margin: f32,
    pub charge_threshold: u32,
    /// Spawn a small explosion when a charged shot destroys a threat.
    /// Off by default: only instant shots and shields leave one.
    pub charged_threat_explosion: bool,

    // ── Scoring & effects ─────────────────────────────────────────────────────
    pub enemy_score: u32,
    pub threat_score: u32,
    pub enemy_explosion_life: i32,
    pub threat_explosion_life: i32,
    pub explosion_size: (f32, f32),

    // ── Round timing ──────────────────────────────────────────────────────────
    pub target_fps: u32,
    pub game_over_hold_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            actor_start: ACTOR_START,
            actor_size: ACTOR_SIZE,
            actor_speed: ACTOR_SPEED,
            actor_boost_speed: ACTOR_BOOST_SPEED,
            actor_health: ACTOR_HEALTH,
            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            enemy_stop_min: ENEMY_STOP_MIN,
            enemy_stop_right_margin: ENEMY_STOP_RIGHT_MARGIN,
            enemy_drop_interval: ENEMY_DROP_INTERVAL,
            threat_speed: THREAT_SPEED,
            threat_radius: THREAT_RADIUS,
            instant_shot_size: INSTANT_SHOT_SIZE,
            instant_shot_speed: INSTANT_SHOT_SPEED,
            charged_shot_size: CHARGED_SHOT_SIZE,
            charged_shot_speed: CHARGED_SHOT_SPEED,
            charged_shot_margin: CHARGED_SHOT_MARGIN,
            charge_threshold: CHARGE_THRESHOLD,
            charged_threat_explosion: false,
            enemy_score: ENEMY_SCORE,
            threat_score: THREAT_SCORE,
            enemy_explosion_life: ENEMY_EXPLOSION_LIFE,
            threat_explosion_life: THREAT_EXPLOSION_LIFE,
            explosion_size: EXPLOSION_SIZE,
            target_fps: TARGET_FPS,
            game_over_hold_secs: GAME_OVER_HOLD_SECS,
        }
    }
}

impl SimConfig {
    /// Read `path` and overlay it on the defaults, then validate.
    pub fn load(path: &Path) -> ConfigResult<SimConfig> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {}; using compiled defaults", path.display());
                return Ok(SimConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = toml::from_str::<SimConfig>(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("actor_speed", self.actor_speed)?;
        positive("actor_boost_speed", self.actor_boost_speed)?;
        positive_pair("actor_size", self.actor_size)?;
        positive_pair("enemy_size", self.enemy_size)?;
        positive_pair("instant_shot_size", self.instant_shot_size)?;
        positive_pair("charged_shot_size", self.charged_shot_size)?;
        positive_pair("explosion_size", self.explosion_size)?;
        positive("enemy_speed", self.enemy_speed)?;
        positive("threat_speed", self.threat_speed)?;
        positive("instant_shot_speed", self.instant_shot_speed)?;
        positive("charged_shot_speed", self.charged_shot_speed)?;

        if self.actor_health < 0 {
            return Err(invalid("actor_health", self.actor_health, "must not be negative"));
        }
        if self.enemy_spawn_interval == 0 {
            return Err(invalid("enemy_spawn_interval", 0, "must be at least 1"));
        }
        if self.charge_threshold == 0 {
            return Err(invalid("charge_threshold", 0, "must be at least 1"));
        }
        if self.target_fps == 0 {
            return Err(invalid("target_fps", 0, "must be at least 1"));
        }
        if self.game_over_hold_secs < 0.0 || !self.game_over_hold_secs.is_finite() {
            return Err(invalid(
                "game_over_hold_secs",
                self.game_over_hold_secs,
                "must be a finite, non-negative number of seconds",
            ));
        }

        let (lo, hi) = self.enemy_drop_interval;
        if lo > hi {
            return Err(invalid(
                "enemy_drop_interval",
                format!("({lo}, {hi})"),
                "minimum exceeds maximum",
            ));
        }
        let (lo, hi) = self.threat_radius;
        if lo <= 0.0 || lo > hi {
            return Err(invalid(
                "threat_radius",
                format!("({lo}, {hi})"),
                "must be a positive, non-inverted range",
            ));
        }
        if self.enemy_stop_min > self.width - self.enemy_stop_right_margin {
            return Err(invalid(
                "enemy_stop_min",
                self.enemy_stop_min,
                "leaves no room for a stop line before the right margin",
            ));
        }
        Ok(())
    }

    pub fn game_over_hold(&self) -> Duration {
        if self.game_over_hold_secs.is_finite() && self.game_over_hold_secs > 0.0 {
            Duration::from_secs_f32(self.game_over_hold_secs)
        } else {
            Duration::ZERO
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason,
    }
}

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "must be a positive number"))
    }
}

fn positive_pair(name: &'static str, (a, b): (f32, f32)) -> ConfigResult<()> {
    if a > 0.0 && b > 0.0 && a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, format!("({a}, {b})"), "both dimensions must be positive"))
    }
}
