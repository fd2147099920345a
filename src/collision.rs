/// Group-vs-group collision detection and the per-pair removal policies.
///
/// Detection ([`resolve`]) is pure and only reports overlapping index pairs.
/// [`resolve_round`] removes the hit entities from the round and returns a
/// [`CollisionOutcome`]; score, health, explosions and the actor pose are
/// applied by the caller from that outcome.

use std::collections::BTreeSet;

use crate::config::SimConfig;
use crate::entities::{Explosion, RoundState};
use crate::geometry::Rect;

/// Every `(a, b)` index pair whose rects overlap.  O(|a|·|b|).
pub fn resolve(a: &[Rect], b: &[Rect]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (ai, ra) in a.iter().enumerate() {
        for (bi, rb) in b.iter().enumerate() {
            if ra.overlaps(rb) {
                pairs.push((ai, bi));
            }
        }
    }
    pairs
}

/// What one frame's collision pass did.
#[derive(Clone, Debug, Default)]
pub struct CollisionOutcome {
    pub enemies_destroyed: u32,
    pub threats_destroyed: u32,
    /// Threats that reached the actor; each one costs a point of health.
    pub actor_hits: u32,
    pub score_gain: u32,
    pub explosions: Vec<Explosion>,
    /// An enemy died this frame; the actor shows its joy pose.
    pub joy: bool,
}

/// Distinct indices hit on each side of a group pair.
struct Hits {
    a: BTreeSet<usize>,
    b: BTreeSet<usize>,
}

fn hits(a: &[Rect], b: &[Rect]) -> Hits {
    let pairs = resolve(a, b);
    Hits {
        a: pairs.iter().map(|&(ai, _)| ai).collect(),
        b: pairs.iter().map(|&(_, bi)| bi).collect(),
    }
}

/// Like [`hits`], but each member of `b` is spent on the first member of `a`
/// it touches.  Members of `a` are visited in order; one of them takes every
/// unspent `b` overlapping it.
fn single_use_hits(a: &[Rect], b: &[Rect]) -> Hits {
    let mut spent = Hits {
        a: BTreeSet::new(),
        b: BTreeSet::new(),
    };
    for (ai, ra) in a.iter().enumerate() {
        let touching: Vec<usize> = b
            .iter()
            .enumerate()
            .filter(|(bi, rb)| !spent.b.contains(bi) && ra.overlaps(rb))
            .map(|(bi, _)| bi)
            .collect();
        if !touching.is_empty() {
            spent.a.insert(ai);
            spent.b.extend(touching);
        }
    }
    spent
}

/// Remove the members at `indices`, returning them in their original order.
fn take_indices<T>(items: &mut Vec<T>, indices: &BTreeSet<usize>) -> Vec<T> {
    if indices.is_empty() {
        return Vec::new();
    }
    let mut removed = Vec::with_capacity(indices.len());
    let mut kept = Vec::with_capacity(items.len() - indices.len().min(items.len()));
    for (i, item) in items.drain(..).enumerate() {
        if indices.contains(&i) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

fn rects<T>(items: &[T], rect: impl Fn(&T) -> Rect) -> Vec<Rect> {
    items.iter().map(rect).collect()
}

fn explosion_at(target: &Rect, life: i32, config: &SimConfig) -> Explosion {
    let (w, h) = config.explosion_size;
    let (cx, cy) = target.center();
    Explosion {
        rect: Rect::from_center(cx, cy, w, h),
        life,
    }
}

/// Run every pair check in its fixed order, removing hit entities from
/// `state`.  Entities removed by an earlier check take no part in later ones.
pub fn resolve_round(state: &mut RoundState, config: &SimConfig) -> CollisionOutcome {
    let mut out = CollisionOutcome::default();

    // ── 1. Enemies × instant shots: both removed ──────────────────────────────
    let h = single_use_hits(
        &rects(&state.enemies, |e| e.rect),
        &rects(&state.shots, |s| s.rect),
    );
    take_indices(&mut state.shots, &h.b);
    for enemy in take_indices(&mut state.enemies, &h.a) {
        out.enemies_destroyed += 1;
        out.score_gain += config.enemy_score;
        out.explosions
            .push(explosion_at(&enemy.rect, config.enemy_explosion_life, config));
        out.joy = true;
    }

    // ── 2. Threats × instant shots: both removed ──────────────────────────────
    let h = single_use_hits(
        &rects(&state.threats, |t| t.rect),
        &rects(&state.shots, |s| s.rect),
    );
    take_indices(&mut state.shots, &h.b);
    for threat in take_indices(&mut state.threats, &h.a) {
        out.threats_destroyed += 1;
        out.score_gain += config.threat_score;
        out.explosions
            .push(explosion_at(&threat.rect, config.threat_explosion_life, config));
    }

    // ── 3. Enemies × charged shots: shot pierces ──────────────────────────────
    let h = hits(
        &rects(&state.enemies, |e| e.rect),
        &rects(&state.charged_shots, |s| s.rect),
    );
    for enemy in take_indices(&mut state.enemies, &h.a) {
        out.enemies_destroyed += 1;
        out.score_gain += config.enemy_score;
        out.explosions
            .push(explosion_at(&enemy.rect, config.enemy_explosion_life, config));
        out.joy = true;
    }

    // ── 4. Threats × charged shots: shot pierces ──────────────────────────────
    let h = hits(
        &rects(&state.threats, |t| t.rect),
        &rects(&state.charged_shots, |s| s.rect),
    );
    for threat in take_indices(&mut state.threats, &h.a) {
        out.threats_destroyed += 1;
        out.score_gain += config.threat_score;
        if config.charged_threat_explosion {
            out.explosions
                .push(explosion_at(&threat.rect, config.threat_explosion_life, config));
        }
    }

    // ── 5. Threats × shields: shield survives ─────────────────────────────────
    let h = hits(&rects(&state.threats, |t| t.rect), &rects(&state.shields, |s| s.rect));
    for threat in take_indices(&mut state.threats, &h.a) {
        out.threats_destroyed += 1;
        out.score_gain += config.threat_score;
        out.explosions
            .push(explosion_at(&threat.rect, config.threat_explosion_life, config));
    }

    // ── 6. Actor × threats: one health point per threat ───────────────────────
    let h = hits(&[state.actor.rect], &rects(&state.threats, |t| t.rect));
    out.actor_hits = take_indices(&mut state.threats, &h.b).len() as u32;

    out
}
