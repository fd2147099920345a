/// All game entity types — pure data, no per-frame logic.

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// The eight directions the actor can face.  Every direction shares the same
/// sprite; the facing only matters for the HUD arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    /// Map a movement delta (each axis in -1..=1, y grows downward) to a
    /// facing.  `(0, 0)` has no facing.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Facing> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Facing::Right),
            (1, -1) => Some(Facing::UpRight),
            (0, -1) => Some(Facing::Up),
            (-1, -1) => Some(Facing::UpLeft),
            (-1, 0) => Some(Facing::Left),
            (-1, 1) => Some(Facing::DownLeft),
            (0, 1) => Some(Facing::Down),
            (1, 1) => Some(Facing::DownRight),
            _ => None,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::Right => (1, 0),
            Facing::UpRight => (1, -1),
            Facing::Up => (0, -1),
            Facing::UpLeft => (-1, -1),
            Facing::Left => (-1, 0),
            Facing::DownLeft => (-1, 1),
            Facing::Down => (0, 1),
            Facing::DownRight => (1, 1),
        }
    }
}

/// Which actor sprite is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorPose {
    Normal,
    /// Shown after an enemy kill, until the actor next moves.
    Joy,
    Defeat,
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub rect: Rect,
    pub facing: Facing,
    pub pose: ActorPose,
    pub speed: f32,
    pub boost_speed: f32,
    /// Goes to -1 exactly once, on defeat.
    pub health: i32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Descending,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    /// Horizontal velocity; negative while descending, zero once stopped.
    pub vx: f32,
    /// Centre-x at which the enemy halts.
    pub stop_x: f32,
    pub state: EnemyState,
    /// Threats are dropped on frames divisible by this (always >= 1).
    pub drop_interval: u64,
    /// Cosmetic sprite choice.
    pub variant: u8,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// An enemy-dropped bomb.  Velocity is fixed when it is dropped.
#[derive(Clone, Debug)]
pub struct Threat {
    pub rect: Rect,
    pub velocity: (f32, f32),
    pub speed: f32,
    /// Cosmetic palette index.
    pub color: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotKind {
    /// Destroyed on its first hit.
    Instant,
    /// Pierces: survives every hit.
    Charged,
}

#[derive(Clone, Debug)]
pub struct Shot {
    pub rect: Rect,
    pub kind: ShotKind,
    pub velocity: (f32, f32),
    pub speed: f32,
}

// ── Effects & defence ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Explosion {
    pub rect: Rect,
    /// Frames remaining; removed once this drops below zero.
    pub life: i32,
}

impl Explosion {
    /// Which of the two alternating explosion frames to draw.
    pub fn frame_index(&self) -> usize {
        (self.life.max(0) / 10 % 2) as usize
    }
}

/// Defensive barrier that destroys threats.  Nothing in a round creates one
/// yet; the collision pass already handles the group.
#[derive(Clone, Debug)]
pub struct Shield {
    pub rect: Rect,
}

// ── Weapon ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireMode {
    Instant,
    Charged,
}

#[derive(Clone, Debug)]
pub struct ChargeState {
    pub mode: FireMode,
    /// Frames spent charging, capped at `threshold`.
    pub counter: u32,
    pub threshold: u32,
}

// ── Master round state ────────────────────────────────────────────────────────

/// The entire round state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub actor: Actor,
    pub enemies: Vec<Enemy>,
    pub threats: Vec<Threat>,
    /// Instant shots.
    pub shots: Vec<Shot>,
    pub charged_shots: Vec<Shot>,
    pub explosions: Vec<Explosion>,
    pub shields: Vec<Shield>,
    pub charge: ChargeState,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
}
