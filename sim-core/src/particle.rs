use crate::types::ParticleKind;
use glam::Vec2;
use rand::Rng;

/// A mobile circular agent. All particles share a single radius held
/// by the engine, so only position, velocity, and kind live here.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, kind: ParticleKind) -> Self {
        Self { pos, vel, kind }
    }

    /// Spawns a particle with a random position inside the bounds
    /// (keeping the whole disk in view), random velocity components in
    /// `[-1, 1)`, and a uniformly random kind.
    pub fn spawn(bounds: Vec2, radius: f32, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random_range(radius..bounds.x - radius),
            rng.random_range(radius..bounds.y - radius),
        );
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        Self::new(pos, vel, ParticleKind::sample(rng))
    }

    /// Advances the particle by `vel * speed` and reflects off the
    /// walls of `bounds`.
    ///
    /// Reflection flips the velocity sign on the crossed axis instead
    /// of clamping the position, so a particle may overshoot the wall
    /// for one tick before the reversed velocity walks it back in.
    pub fn advance(&mut self, speed: f32, bounds: Vec2, radius: f32) {
        self.pos += self.vel * speed;

        if self.pos.x < radius || self.pos.x > bounds.x - radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < radius || self.pos.y > bounds.y - radius {
            self.vel.y = -self.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn advance_moves_by_velocity_times_speed() {
        let mut p = Particle::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(0.5, -0.25),
            ParticleKind::Rock,
        );

        p.advance(2.0, BOUNDS, 10.0);

        assert_eq!(p.pos, Vec2::new(101.0, 99.5));
        // Far from any wall: velocity unchanged.
        assert_eq!(p.vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn advance_reflects_at_the_right_wall() {
        let mut p = Particle::new(
            Vec2::new(789.5, 300.0),
            Vec2::new(1.0, 0.0),
            ParticleKind::Paper,
        );

        p.advance(1.0, BOUNDS, 10.0);

        // Crossed x = 790: x velocity flips, position is not clamped.
        assert_eq!(p.pos, Vec2::new(790.5, 300.0));
        assert_eq!(p.vel, Vec2::new(-1.0, 0.0));

        // Next tick walks it back inward.
        p.advance(1.0, BOUNDS, 10.0);
        assert_eq!(p.pos, Vec2::new(789.5, 300.0));
    }

    #[test]
    fn advance_reflects_at_the_top_wall() {
        let mut p = Particle::new(
            Vec2::new(400.0, 10.2),
            Vec2::new(0.0, -0.5),
            ParticleKind::Scissors,
        );

        p.advance(1.0, BOUNDS, 10.0);

        assert_eq!(p.pos, Vec2::new(400.0, 9.7));
        assert_eq!(p.vel, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn zero_speed_freezes_position() {
        let mut p = Particle::new(
            Vec2::new(50.0, 50.0),
            Vec2::new(1.0, 1.0),
            ParticleKind::Rock,
        );

        p.advance(0.0, BOUNDS, 10.0);

        assert_eq!(p.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn spawn_stays_inside_bounds_with_velocity_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 10.0;

        for _ in 0..200 {
            let p = Particle::spawn(BOUNDS, radius, &mut rng);
            assert!(p.pos.x >= radius && p.pos.x <= BOUNDS.x - radius);
            assert!(p.pos.y >= radius && p.pos.y <= BOUNDS.y - radius);
            assert!(p.vel.x >= -1.0 && p.vel.x < 1.0);
            assert!(p.vel.y >= -1.0 && p.vel.y < 1.0);
        }
    }
}
