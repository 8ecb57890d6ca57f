//! Explosion and spark particle bursts
//!
//! Particles are cosmetic: the burst count is clipped to the particle budget
//! and dropped entirely when particles are disabled.

use glam::Vec2;
use rand::Rng;

use super::event::GameEvent;
use super::state::{GameState, Particle};

/// Particles in a regular explosion
pub const EXPLOSION_PARTICLES: usize = 15;
/// Particles when the boss goes down
pub const BOSS_EXPLOSION_PARTICLES: usize = 60;
/// Particles in an impact spark
pub const SPARK_PARTICLES: usize = 5;
/// Particles when the player takes damage
pub const DAMAGE_SPARK_PARTICLES: usize = 20;

const EXPLOSION_SPEED: f32 = 8.0;
const EXPLOSION_MIN_LIFE: f32 = 30.0;
const EXPLOSION_LIFE_JITTER: f32 = 20.0;
const EXPLOSION_MAX_SIZE: f32 = 4.0;

const SPARK_SPEED: f32 = 5.0;
const SPARK_LIFE: f32 = 10.0;
const SPARK_SIZE: f32 = 1.5;

impl GameState {
    /// How many of `wanted` particles fit in the budget
    fn particle_budget(&self, wanted: usize) -> usize {
        if !self.effects.particles {
            return 0;
        }
        wanted.min(
            self.effects
                .max_particles
                .saturating_sub(self.particles.len()),
        )
    }

    /// Emit an explosion burst (always reported as an event)
    pub fn explode(&mut self, at: Vec2, color: u32, count: usize) {
        self.events.push(GameEvent::Explosion { at, color });
        for _ in 0..self.particle_budget(count) {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * EXPLOSION_SPEED,
                (self.rng.random::<f32>() - 0.5) * EXPLOSION_SPEED,
            );
            let life = EXPLOSION_MIN_LIFE + self.rng.random::<f32>() * EXPLOSION_LIFE_JITTER;
            let size = self.rng.random::<f32>() * EXPLOSION_MAX_SIZE;
            self.particles.push(Particle {
                pos: at,
                vel,
                life,
                color,
                size,
            });
        }
    }

    /// Emit a short-lived spark burst (silent)
    pub fn sparks(&mut self, at: Vec2, color: u32, count: usize) {
        for _ in 0..self.particle_budget(count) {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * SPARK_SPEED,
                (self.rng.random::<f32>() - 0.5) * SPARK_SPEED,
            );
            self.particles.push(Particle {
                pos: at,
                vel,
                life: SPARK_LIFE,
                color,
                size: SPARK_SIZE,
            });
        }
    }
}
