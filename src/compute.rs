/// Pure game-logic functions.
///
/// Every public function takes an immutable view of the current state (and,
/// where needed, the config and an RNG handle) and returns a brand-new value.
/// Side effects are limited to the injected RNG and log output.

use rand::Rng;

use crate::collision::resolve_round;
use crate::config::SimConfig;
use crate::constants::{ENEMY_VARIANTS, THREAT_COLORS};
use crate::entities::{
    Actor, ActorPose, ChargeState, Enemy, EnemyState, Explosion, Facing, GameStatus, RoundState,
    Shot, ShotKind, Threat,
};
use crate::geometry::{in_bounds, orientation, Rect};
use crate::input::{Action, FrameInput, HeldKeys};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state a round starts from.
pub fn init_state(config: &SimConfig) -> RoundState {
    let (cx, cy) = config.actor_start;
    let (w, h) = config.actor_size;
    RoundState {
        actor: Actor {
            rect: Rect::from_center(cx, cy, w, h),
            facing: Facing::Right,
            pose: ActorPose::Normal,
            speed: config.actor_speed,
            boost_speed: config.actor_boost_speed,
            health: config.actor_health,
        },
        enemies: Vec::new(),
        threats: Vec::new(),
        shots: Vec::new(),
        charged_shots: Vec::new(),
        explosions: Vec::new(),
        shields: Vec::new(),
        charge: ChargeState::new(config.charge_threshold),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// A new enemy entering at the right edge, with its stop line and drop
/// interval rolled from the config ranges.
pub fn spawn_enemy(config: &SimConfig, rng: &mut impl Rng) -> Enemy {
    let (w, h) = config.enemy_size;
    let cy = rng.gen_range(0.0..=config.height);

    let stop_max = (config.width - config.enemy_stop_right_margin).max(config.enemy_stop_min);
    let stop_x = rng.gen_range(config.enemy_stop_min..=stop_max);

    let (lo, hi) = config.enemy_drop_interval;
    let lo = lo.max(1);
    let drop_interval = rng.gen_range(lo..=hi.max(lo));

    Enemy {
        rect: Rect::from_center(config.width, cy, w, h),
        vx: -config.enemy_speed,
        stop_x,
        state: EnemyState::Descending,
        drop_interval,
        variant: rng.gen_range(0..ENEMY_VARIANTS),
    }
}

/// A threat dropped from under `enemy`, aimed at where `target` is now.
pub fn spawn_threat(enemy: &Enemy, target: &Rect, config: &SimConfig, rng: &mut impl Rng) -> Threat {
    let (lo, hi) = config.threat_radius;
    let radius = rng.gen_range(lo..=hi.max(lo));
    let (cx, cy) = enemy.rect.center();
    Threat {
        rect: Rect::from_center(cx, cy + enemy.rect.height / 2.0, 2.0 * radius, 2.0 * radius),
        velocity: orientation(&enemy.rect, target),
        speed: config.threat_speed,
        color: rng.gen_range(0..THREAT_COLORS),
    }
}

/// A shot leaving the actor's front.  Shots always travel rightward and keep
/// the velocity they were created with.
pub fn spawn_shot(actor: &Actor, kind: ShotKind, config: &SimConfig) -> Shot {
    let (vx, vy) = (1.0_f32, 0.0_f32);
    let ((w, h), speed) = match kind {
        ShotKind::Instant => (config.instant_shot_size, config.instant_shot_speed),
        ShotKind::Charged => (config.charged_shot_size, config.charged_shot_speed),
    };
    let (cx, cy) = actor.rect.center();
    Shot {
        rect: Rect::from_center(
            cx + actor.rect.width * vx,
            cy + actor.rect.height * vy,
            w,
            h,
        ),
        kind,
        velocity: (vx, vy),
        speed,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one edge-triggered action.
pub fn apply_action(state: &RoundState, action: Action, config: &SimConfig) -> RoundState {
    let mut next = state.clone();
    match action {
        Action::ToggleMode => {
            next.charge.toggle();
            tracing::debug!(mode = ?next.charge.mode, "fire mode toggled");
        }
        Action::Fire => match next.charge.try_fire() {
            Some(kind) => {
                let shot = spawn_shot(&next.actor, kind, config);
                match kind {
                    ShotKind::Instant => next.shots.push(shot),
                    ShotKind::Charged => {
                        tracing::debug!(frame = next.frame, "charged shot released");
                        next.charged_shots.push(shot);
                    }
                }
            }
            None => {
                tracing::trace!(counter = next.charge.counter, "fire ignored while charging");
            }
        },
    }
    next
}

/// Move the actor by the held keys.  A move that would leave the playfield
/// on either axis is dropped entirely, never clamped.
pub fn move_actor(actor: &Actor, held: &HeldKeys, config: &SimConfig) -> Actor {
    let (dx, dy) = held.delta();
    let facing = match Facing::from_delta(dx, dy) {
        Some(facing) => facing,
        None => return actor.clone(),
    };

    let speed = if held.boost { actor.boost_speed } else { actor.speed };
    let moved = actor.rect.translate(speed * dx as f32, speed * dy as f32);
    let rect = if in_bounds(&moved, config.width, config.height) == (true, true) {
        moved
    } else {
        actor.rect
    };

    let pose = match actor.pose {
        ActorPose::Joy => ActorPose::Normal,
        pose => pose,
    };

    Actor {
        rect,
        facing,
        pose,
        ..actor.clone()
    }
}

// ── Per-entity updates ───────────────────────────────────────────────────────

/// Advance an enemy one frame.  A descending enemy never moves past its stop
/// line; reaching it stops the enemy for good.
pub fn update_enemy(enemy: &Enemy) -> Enemy {
    let mut next = enemy.clone();
    if next.state == EnemyState::Stopped {
        return next;
    }

    let cx = next.rect.center_x();
    if cx < next.stop_x {
        next.vx = 0.0;
        next.state = EnemyState::Stopped;
        return next;
    }

    let new_cx = (cx + next.vx).max(next.stop_x);
    next.rect.set_center_x(new_cx);
    if new_cx <= next.stop_x {
        next.vx = 0.0;
        next.state = EnemyState::Stopped;
    }
    next
}

/// Move a threat; `None` once any part of it leaves the playfield.
pub fn update_threat(threat: &Threat, config: &SimConfig) -> Option<Threat> {
    let (vx, vy) = threat.velocity;
    let rect = threat.rect.translate(threat.speed * vx, threat.speed * vy);
    if in_bounds(&rect, config.width, config.height) != (true, true) {
        return None;
    }
    Some(Threat {
        rect,
        ..threat.clone()
    })
}

/// Move a shot; `None` once it is gone.
///
/// Instant shots are dropped as soon as any part leaves the playfield.
/// Charged shots are large and may clip the top or bottom edge, so they are
/// only dropped once their centre is `charged_shot_margin` past the right
/// edge.
pub fn update_shot(shot: &Shot, config: &SimConfig) -> Option<Shot> {
    let (vx, vy) = shot.velocity;
    let rect = shot.rect.translate(shot.speed * vx, shot.speed * vy);
    let gone = match shot.kind {
        ShotKind::Instant => in_bounds(&rect, config.width, config.height) != (true, true),
        ShotKind::Charged => rect.center_x() > config.width + config.charged_shot_margin,
    };
    if gone {
        return None;
    }
    Some(Shot {
        rect,
        ..shot.clone()
    })
}

/// Age an explosion by one frame; `None` once its life drops below zero.
pub fn update_explosion(explosion: &Explosion) -> Option<Explosion> {
    let life = explosion.life - 1;
    if life < 0 {
        return None;
    }
    Some(Explosion {
        life,
        ..explosion.clone()
    })
}

/// Threats dropped this frame by stopped enemies whose interval divides the
/// frame counter.
pub fn drop_threats(state: &RoundState, config: &SimConfig, rng: &mut impl Rng) -> Vec<Threat> {
    let mut dropped = Vec::new();
    for enemy in &state.enemies {
        if enemy.state == EnemyState::Stopped && state.frame % enemy.drop_interval.max(1) == 0 {
            dropped.push(spawn_threat(enemy, &state.actor.rect, config, rng));
        }
    }
    dropped
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the round by one frame.  All randomness comes through `rng` so
/// callers control determinism (tests use a seeded RNG).
///
/// A round that is already over is returned unchanged.
pub fn tick(
    state: &RoundState,
    input: &FrameInput,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> RoundState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Edge-triggered input ──────────────────────────────────────────────
    let mut next = state.clone();
    for &action in &input.pressed {
        next = apply_action(&next, action, config);
    }

    // ── 2. Charge ────────────────────────────────────────────────────────────
    next.charge.advance();

    // ── 3. Frame counter & enemy spawn ───────────────────────────────────────
    next.frame += 1;
    if next.frame % config.enemy_spawn_interval.max(1) == 0 {
        let enemy = spawn_enemy(config, rng);
        tracing::debug!(
            frame = next.frame,
            stop_x = enemy.stop_x,
            drop_interval = enemy.drop_interval,
            "enemy spawned"
        );
        next.enemies.push(enemy);
    }

    // ── 4. Threat drops ──────────────────────────────────────────────────────
    let dropped = drop_threats(&next, config, rng);
    next.threats.extend(dropped);

    // ── 5. Collisions ────────────────────────────────────────────────────────
    let outcome = resolve_round(&mut next, config);
    if outcome.enemies_destroyed > 0 || outcome.threats_destroyed > 0 {
        tracing::debug!(
            frame = next.frame,
            enemies = outcome.enemies_destroyed,
            threats = outcome.threats_destroyed,
            "targets destroyed"
        );
    }
    next.score = next.score.saturating_add(outcome.score_gain);
    if outcome.joy {
        next.actor.pose = ActorPose::Joy;
    }
    if outcome.actor_hits > 0 {
        // -1 is the defeat sentinel; it is never driven further down.
        next.actor.health = (next.actor.health - outcome.actor_hits as i32).max(-1);
        tracing::debug!(frame = next.frame, health = next.actor.health, "actor hit");
    }

    // ── 6. Terminal check ────────────────────────────────────────────────────
    if next.actor.health < 0 {
        next.status = GameStatus::GameOver;
        next.actor.pose = ActorPose::Defeat;
        next.explosions.extend(outcome.explosions);
        tracing::info!(frame = next.frame, score = next.score, "game over");
        return next;
    }

    // ── 7. Entity updates ────────────────────────────────────────────────────
    next.actor = move_actor(&next.actor, &input.held, config);
    next.shots = next.shots.iter().filter_map(|s| update_shot(s, config)).collect();
    next.charged_shots = next
        .charged_shots
        .iter()
        .filter_map(|s| update_shot(s, config))
        .collect();
    next.enemies = next.enemies.iter().map(update_enemy).collect();
    next.threats = next
        .threats
        .iter()
        .filter_map(|t| update_threat(t, config))
        .collect();

    // Explosions created this frame start aging on the next one.
    let mut explosions: Vec<Explosion> =
        next.explosions.iter().filter_map(update_explosion).collect();
    explosions.extend(outcome.explosions);
    next.explosions = explosions;

    next
}
