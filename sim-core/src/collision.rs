//! Pure pair-collision resolution.
//!
//! A colliding pair goes through three steps, in order:
//! 1. [`resolve_dominance`] — the losing kind is converted to the winner's.
//! 2. [`elastic_response`] — equal-mass elastic collision: the velocity
//!    components along the center-to-center normal are swapped, the
//!    tangential components are kept.
//! 3. [`separate`] — both disks are pushed apart along the normal by half
//!    the penetration depth each, so one pass leaves them just touching.
//!
//! All functions are stateless; the engine decides which pairs to feed in
//! and in what order.

use crate::particle::Particle;
use crate::types::Outcome;

/// Below this center distance the normal direction is undefined and the
/// physics response is skipped for the pair.
const MIN_DISTANCE: f32 = 1e-6;

/// Whether two disks of the shared `radius` overlap (strict inequality).
pub fn overlapping(a: &Particle, b: &Particle, radius: f32) -> bool {
    let diameter = 2.0 * radius;
    a.pos.distance_squared(b.pos) < diameter * diameter
}

/// Applies the dominance relation: the loser takes the winner's kind.
pub fn resolve_dominance(a: &mut Particle, b: &mut Particle) {
    match a.kind.fight(b.kind) {
        Outcome::Tie => {}
        Outcome::FirstWins => b.kind = a.kind,
        Outcome::SecondWins => a.kind = b.kind,
    }
}

/// Equal-mass elastic collision response.
///
/// Decomposes both velocities along the unit normal `n` (center of `a`
/// toward center of `b`) and the unit tangent `t`, swaps the normal
/// components, and rebuilds each velocity from its own tangential
/// component plus the other's normal component. Kinetic energy of the
/// pair is conserved.
///
/// Coincident centers leave the normal undefined; the response is
/// skipped for such a pair so no `NaN` can reach a velocity.
pub fn elastic_response(a: &mut Particle, b: &mut Particle) {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist < MIN_DISTANCE {
        return;
    }

    let n = delta / dist;
    let t = n.perp();

    let a_tan = a.vel.dot(t);
    let b_tan = b.vel.dot(t);
    let a_norm = a.vel.dot(n);
    let b_norm = b.vel.dot(n);

    a.vel = t * a_tan + n * b_norm;
    b.vel = t * b_tan + n * a_norm;
}

/// Pushes two overlapping disks apart along the center line by half the
/// penetration depth each, leaving them exactly in contact.
///
/// No-op when the disks are not penetrating or their centers coincide.
pub fn separate(a: &mut Particle, b: &mut Particle, radius: f32) {
    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist < MIN_DISTANCE {
        return;
    }

    let penetration = 2.0 * radius - dist;
    if penetration <= 0.0 {
        return;
    }

    let push = delta / dist * (penetration * 0.5);
    a.pos += push;
    b.pos -= push;
}

/// Full resolution for one pair: overlap gate, dominance, elastic
/// response, overlap separation.
///
/// Returns `true` if the pair was overlapping and got resolved.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, radius: f32) -> bool {
    if !overlapping(a, b, radius) {
        return false;
    }

    resolve_dominance(a, b);
    elastic_response(a, b);
    separate(a, b, radius);
    true
}
