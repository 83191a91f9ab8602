//! Simulation engine: owns the particle collection and advances it.
//!
//! A tick does, in order:
//! 1. An ascending `(i, j)` pairwise scan applying
//!    [`collision::resolve_pair`] to every overlapping pair. Later pairs
//!    in the same tick observe kind changes made by earlier pairs; this
//!    same-tick propagation is part of the observable behavior.
//! 2. Movement plus boundary reflection for every particle.
//!
//! The scan is O(n²) per tick, which is fine for the target scale of
//! tens to low hundreds of particles.

use crate::collision;
use crate::config::Config;
use crate::error::Result;
use crate::particle::Particle;
use crate::types::ParticleKind;
use glam::Vec2;
use rand::Rng;

/// Per-kind population counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl Counts {
    pub fn get(&self, kind: ParticleKind) -> usize {
        match kind {
            ParticleKind::Rock => self.rock,
            ParticleKind::Paper => self.paper,
            ParticleKind::Scissors => self.scissors,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }
}

/// Owns the particle collection for the lifetime of one run.
///
/// The canvas bounds are fixed at construction; the shared radius is
/// latched from the [`Config`] at [`Engine::initialize`]. `speed` is
/// passed into every [`Engine::tick`] so the control surface can change
/// it live without a restart.
#[derive(Debug)]
pub struct Engine {
    pub particles: Vec<Particle>,
    radius: f32,
    bounds: Vec2,
}

impl Engine {
    /// Creates an engine with an empty particle collection.
    pub fn new(bounds: Vec2) -> Self {
        Self {
            particles: Vec::new(),
            radius: 0.0,
            bounds,
        }
    }

    /// Shared disk radius of the current run.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Canvas bounds the particles bounce within.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Validates `cfg` and repopulates the collection with randomly
    /// placed, typed, and propelled particles.
    ///
    /// On a validation error nothing is touched: the prior collection
    /// and radius stay as they were. Spawn-time overlap is allowed and
    /// resolves naturally over the first few ticks. Deterministic for a
    /// seeded `rng`.
    pub fn initialize(&mut self, cfg: &Config, rng: &mut impl Rng) -> Result<()> {
        cfg.validate(self.bounds)?;

        self.radius = cfg.radius;
        self.particles.clear();
        self.particles
            .extend((0..cfg.particle_count).map(|_| Particle::spawn(self.bounds, cfg.radius, rng)));
        Ok(())
    }

    /// Advances the simulation by one step.
    ///
    /// Resolves every overlapping pair in ascending index-pair order,
    /// then moves every particle by `vel * speed` with wall reflection.
    /// A no-op on an empty collection.
    pub fn tick(&mut self, speed: f32) {
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.particles.split_at_mut(j);
                collision::resolve_pair(&mut head[i], &mut tail[0], self.radius);
            }
        }

        for p in &mut self.particles {
            p.advance(speed, self.bounds, self.radius);
        }
    }

    /// Current population per kind; the totals always sum to the
    /// number of particles.
    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for p in &self.particles {
            match p.kind {
                ParticleKind::Rock => counts.rock += 1,
                ParticleKind::Paper => counts.paper += 1,
                ParticleKind::Scissors => counts.scissors += 1,
            }
        }
        counts
    }

    /// Empties the particle collection. Idempotent.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Number of particles currently in the collection.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the collection is empty (a valid steady state).
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
