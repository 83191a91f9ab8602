use crate::error::{Error, Result};
use glam::Vec2;

/// Simulation parameters supplied by the control surface.
///
/// `particle_count` and `radius` take effect at start; `speed` and
/// `show_grid` can change live while the simulation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of particles spawned at start.
    pub particle_count: usize,
    /// Shared disk radius for every particle.
    pub radius: f32,
    /// Per-tick multiplier applied to velocities when moving.
    pub speed: f32,
    /// Draw the cosmetic grid overlay (render-only).
    pub show_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 100,
            radius: 10.0,
            speed: 1.0,
            show_grid: false,
        }
    }
}

impl Config {
    /// Validates the configuration against the canvas `bounds`.
    ///
    /// Rejects a zero particle count, a non-positive or non-finite
    /// radius, a negative or non-finite speed, and a canvas too small
    /// to hold even one disk per axis. `show_grid` is render-only and
    /// never invalid.
    pub fn validate(&self, bounds: Vec2) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::InvalidConfig("particle count must be > 0".into()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "radius must be finite and > 0".into(),
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(Error::InvalidConfig(
                "speed must be finite and >= 0".into(),
            ));
        }
        // An exact-diameter canvas leaves an empty spawn interval
        // `[radius, bounds - radius)`, so it must be rejected too.
        if bounds.x <= 2.0 * self.radius || bounds.y <= 2.0 * self.radius {
            return Err(Error::InvalidConfig(
                "canvas must be larger than one particle diameter per axis".into(),
            ));
        }
        Ok(())
    }
}
