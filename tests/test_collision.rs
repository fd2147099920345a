use beam_shooter::collision::*;
use beam_shooter::compute::init_state;
use beam_shooter::config::SimConfig;
use beam_shooter::entities::*;
use beam_shooter::geometry::Rect;

fn quiet_config() -> SimConfig {
    SimConfig {
        enemy_spawn_interval: 1_000_000,
        ..SimConfig::default()
    }
}

/// Actor sits at (900, 400); everything below is placed well away from it
/// unless a test wants a hit.
fn make_state() -> RoundState {
    init_state(&quiet_config())
}

fn enemy_at(cx: f32, cy: f32) -> Enemy {
    Enemy {
        rect: Rect::from_center(cx, cy, 70.0, 70.0),
        vx: 0.0,
        stop_x: cx,
        state: EnemyState::Stopped,
        drop_interval: 1_000_000,
        variant: 0,
    }
}

fn threat_at(cx: f32, cy: f32) -> Threat {
    Threat {
        rect: Rect::from_center(cx, cy, 20.0, 20.0),
        velocity: (0.0, 1.0),
        speed: 6.0,
        color: 0,
    }
}

fn shot_at(cx: f32, cy: f32, kind: ShotKind) -> Shot {
    let (w, h) = match kind {
        ShotKind::Instant => (100.0, 20.0),
        ShotKind::Charged => (120.0, 120.0),
    };
    Shot {
        rect: Rect::from_center(cx, cy, w, h),
        kind,
        velocity: (1.0, 0.0),
        speed: 10.0,
    }
}

// ── 1. Enemies × instant shots ────────────────────────────────────────────────

#[test]
fn instant_shot_and_enemy_both_removed() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 150.0));
    s.shots.push(shot_at(1280.0, 150.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.enemies.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(out.enemies_destroyed, 1);
    assert_eq!(out.score_gain, 10);
    assert!(out.joy);
    assert_eq!(out.explosions.len(), 1);
    assert_eq!(out.explosions[0].life, 100);
    assert_eq!(out.explosions[0].rect.center(), (1300.0, 150.0));
}

#[test]
fn instant_shot_is_spent_on_first_of_two_overlapping_enemies() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 130.0));
    s.enemies.push(enemy_at(1300.0, 170.0));
    s.shots.push(shot_at(1300.0, 150.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].rect.center_y(), 170.0);
    assert!(s.shots.is_empty());
    assert_eq!(out.enemies_destroyed, 1);
    assert_eq!(out.score_gain, 10);
    assert_eq!(out.explosions.len(), 1);
}

#[test]
fn enemy_takes_every_instant_shot_touching_it() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 150.0));
    s.shots.push(shot_at(1280.0, 140.0, ShotKind::Instant));
    s.shots.push(shot_at(1280.0, 160.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.enemies.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(out.score_gain, 10);
}

#[test]
fn missed_shot_leaves_everything() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 150.0));
    s.shots.push(shot_at(1300.0, 600.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.shots.len(), 1);
    assert_eq!(out.score_gain, 0);
    assert!(!out.joy);
}

// ── 2. Threats × instant shots ────────────────────────────────────────────────

#[test]
fn instant_shot_and_threat_both_removed() {
    let mut s = make_state();
    s.threats.push(threat_at(1300.0, 150.0));
    s.shots.push(shot_at(1300.0, 150.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.threats.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(out.threats_destroyed, 1);
    assert_eq!(out.score_gain, 1);
    assert_eq!(out.explosions.len(), 1);
    assert_eq!(out.explosions[0].life, 50);
    assert!(!out.joy);
}

#[test]
fn instant_shot_is_spent_on_first_of_two_overlapping_threats() {
    let mut s = make_state();
    s.threats.push(threat_at(1290.0, 150.0));
    s.threats.push(threat_at(1310.0, 150.0));
    s.shots.push(shot_at(1300.0, 150.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert_eq!(s.threats.len(), 1);
    assert_eq!(s.threats[0].rect.center_x(), 1310.0);
    assert!(s.shots.is_empty());
    assert_eq!(out.threats_destroyed, 1);
    assert_eq!(out.score_gain, 1);
    assert_eq!(out.explosions.len(), 1);
}

#[test]
fn shot_spent_on_enemy_cannot_also_hit_threat() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 150.0));
    s.threats.push(threat_at(1300.0, 150.0));
    s.shots.push(shot_at(1300.0, 150.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.enemies.is_empty());
    assert_eq!(s.threats.len(), 1);
    assert_eq!(out.score_gain, 10);
}

// ── 3. Enemies × charged shots ────────────────────────────────────────────────

#[test]
fn charged_shot_pierces_enemies() {
    let mut s = make_state();
    s.enemies.push(enemy_at(1300.0, 120.0));
    s.enemies.push(enemy_at(1300.0, 180.0));
    s.charged_shots.push(shot_at(1300.0, 150.0, ShotKind::Charged));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.enemies.is_empty());
    assert_eq!(s.charged_shots.len(), 1);
    assert_eq!(out.enemies_destroyed, 2);
    assert_eq!(out.score_gain, 20);
    assert!(out.joy);
    assert!(out.explosions.iter().all(|e| e.life == 100));
}

// ── 4. Threats × charged shots ────────────────────────────────────────────────

#[test]
fn charged_shot_clears_threat_without_explosion() {
    let mut s = make_state();
    s.threats.push(threat_at(1300.0, 150.0));
    s.charged_shots.push(shot_at(1300.0, 150.0, ShotKind::Charged));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.threats.is_empty());
    assert_eq!(s.charged_shots.len(), 1);
    assert_eq!(out.score_gain, 1);
    assert!(out.explosions.is_empty());
}

#[test]
fn charged_threat_explosion_can_be_enabled() {
    let config = SimConfig {
        charged_threat_explosion: true,
        ..quiet_config()
    };
    let mut s = make_state();
    s.threats.push(threat_at(1300.0, 150.0));
    s.charged_shots.push(shot_at(1300.0, 150.0, ShotKind::Charged));
    let out = resolve_round(&mut s, &config);
    assert_eq!(out.explosions.len(), 1);
    assert_eq!(out.explosions[0].life, 50);
}

// ── 5. Threats × shields ──────────────────────────────────────────────────────

#[test]
fn shield_absorbs_threat_and_survives() {
    let mut s = make_state();
    s.shields.push(Shield {
        rect: Rect::from_center(600.0, 400.0, 40.0, 300.0),
    });
    s.threats.push(threat_at(600.0, 350.0));
    s.threats.push(threat_at(600.0, 450.0));
    let out = resolve_round(&mut s, &quiet_config());
    assert!(s.threats.is_empty());
    assert_eq!(s.shields.len(), 1);
    assert_eq!(out.threats_destroyed, 2);
    assert_eq!(out.score_gain, 2);
    assert_eq!(out.explosions.len(), 2);
}

// ── 6. Actor × threats ────────────────────────────────────────────────────────

#[test]
fn every_threat_touching_actor_is_a_hit() {
    let mut s = make_state();
    s.threats.push(threat_at(870.0, 380.0));
    s.threats.push(threat_at(930.0, 420.0));
    s.threats.push(threat_at(100.0, 100.0));
    let out = resolve_round(&mut s, &quiet_config());
    assert_eq!(out.actor_hits, 2);
    assert_eq!(s.threats.len(), 1);
    assert_eq!(out.score_gain, 0);
    // health is applied by the caller
    assert_eq!(s.actor.health, 2);
}

#[test]
fn threat_shot_down_before_reaching_actor() {
    let mut s = make_state();
    s.threats.push(threat_at(900.0, 400.0));
    s.shots.push(shot_at(900.0, 400.0, ShotKind::Instant));
    let out = resolve_round(&mut s, &quiet_config());
    assert_eq!(out.actor_hits, 0);
    assert_eq!(out.score_gain, 1);
}
