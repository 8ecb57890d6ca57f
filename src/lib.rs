//! Starfall - A vertical-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, combat, game state)
//! - `audio`: Audio cue sink consumed by the host
//! - `hud`: Read-only snapshots and notifications for presentation
//! - `session`: Wires the simulation to audio and presentation collaborators
//! - `settings`: JSON-backed runtime settings

pub mod audio;
pub mod hud;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per presentation frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default play-field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_MAX_HP: i32 = 100;
    /// Spawn offset from the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 100.0;
    /// Horizontal margin the ship can never cross
    pub const PLAYER_MARGIN_X: f32 = 30.0;
    /// Vertical margin the ship can never cross
    pub const PLAYER_MARGIN_Y: f32 = 50.0;
    /// Velocity impulse per held direction per tick
    pub const PLAYER_THRUST: f32 = 1.0;
    /// Velocity multiplier per tick (gives the ship inertia)
    pub const PLAYER_DAMPING: f32 = 0.92;

    /// Player weapon
    pub const FIRE_COOLDOWN: u32 = 7;
    pub const RAPID_FIRE_COOLDOWN: u32 = 3;
    pub const BULLET_SPEED: f32 = 15.0;
    pub const SIDE_BULLET_SPEED: f32 = 14.0;
    /// Bullets are pruned once above this line
    pub const BULLET_DESPAWN_Y: f32 = -50.0;
    /// Margin below the field after which enemy bullets and powerups are pruned
    pub const BOTTOM_DESPAWN_MARGIN: f32 = 50.0;

    /// Small enemies
    pub const SMALL_SPAWN_INTERVAL: u64 = 45;
    pub const SMALL_SIZE: f32 = 40.0;
    pub const SMALL_HP: i32 = 3;
    pub const SMALL_SPEED: f32 = 5.0;
    pub const SMALL_DRIFT: f32 = 4.0;
    pub const SMALL_REWARD: u32 = 20;
    pub const SMALL_DROP_CHANCE: f64 = 0.15;

    /// Medium enemies
    pub const MEDIUM_SPAWN_INTERVAL: u64 = 80;
    pub const MEDIUM_CAP: usize = 2;
    pub const MEDIUM_SIZE: f32 = 70.0;
    pub const MEDIUM_HP: i32 = 12;
    pub const MEDIUM_SPEED: f32 = 2.0;
    pub const MEDIUM_DRIFT: f32 = 1.0;
    pub const MEDIUM_REWARD: u32 = 50;
    pub const MEDIUM_DROP_CHANCE: f64 = 0.40;
    /// Medium fires once its timer exceeds this many ticks
    pub const MEDIUM_FIRE_INTERVAL: u32 = 100;
    pub const MEDIUM_BULLET_SPEED: f32 = 5.0;
    pub const MEDIUM_BULLET_RADIUS: f32 = 6.0;
    /// Horizontal margin at which enemies bounce
    pub const ENEMY_BOUNCE_MARGIN: f32 = 30.0;
    /// Enemies are pruned once this far below the field
    pub const ENEMY_DESPAWN_MARGIN: f32 = 100.0;

    /// Boss ("dreadnought")
    pub const FIRST_BOSS_SCORE: u32 = 500;
    pub const BOSS_SCORE_INTERVAL: u32 = 500;
    pub const BOSS_BASE_HP: i32 = 1500;
    pub const BOSS_WIDTH: f32 = 260.0;
    pub const BOSS_HEIGHT: f32 = 220.0;
    pub const BOSS_SPAWN_Y: f32 = -200.0;
    pub const BOSS_ENTER_SPEED: f32 = 1.5;
    /// Depth at which the boss stops descending and starts fighting
    pub const BOSS_FIGHT_DEPTH: f32 = 150.0;
    pub const BOSS_STRAFE_SPEED: f32 = 2.0;
    pub const BOSS_BOUNCE_MARGIN: f32 = 150.0;
    pub const BOSS_FIRE_INTERVAL: u32 = 45;
    pub const BOSS_BULLET_SPREAD: f32 = 60.0;
    pub const BOSS_BULLET_DRIFT: f32 = 1.5;
    pub const BOSS_BULLET_SPEED: f32 = 7.0;
    pub const BOSS_BULLET_RADIUS: f32 = 8.0;
    pub const BOSS_KILL_BONUS: u32 = 100;
    pub const BOSS_KILL_HEAL: i32 = 50;

    /// Combat
    pub const BULLET_DAMAGE: i32 = 1;
    pub const BOSS_BULLET_DAMAGE: i32 = 10;
    pub const RAM_DAMAGE: i32 = 20;
    pub const ENEMY_BULLET_DAMAGE: i32 = 15;
    pub const HIT_FLASH_TICKS: u32 = 2;
    pub const INVULNERABLE_TICKS: u32 = 40;
    pub const DAMAGE_SHAKE_TICKS: u32 = 20;

    /// Powerups
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    pub const PICKUP_RADIUS: f32 = 35.0;
    pub const HEAL_AMOUNT: i32 = 30;
    pub const SHIELD_TICKS: u32 = 600;
    pub const RAPID_FIRE_TICKS: u32 = 300;

    /// Starfield
    pub const STAR_COUNT: usize = 100;
    /// Star speed multiplier while a boss is present
    pub const BOSS_STAR_TEMPO: f32 = 4.0;

    /// Notifications stay on screen for 1.2 seconds
    pub const NOTIFICATION_TICKS: u32 = TICKS_PER_SECOND * 6 / 5;
}

/// Velocity of length `speed` from `from` toward `to`
///
/// Falls back to straight down when both points coincide.
#[inline]
pub fn aim_direction(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist > f32::EPSILON {
        delta / dist * speed
    } else {
        Vec2::new(0.0, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_direction_normalized() {
        let v = aim_direction(Vec2::ZERO, Vec2::new(30.0, 40.0), 5.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_aim_direction_coincident_points() {
        let p = Vec2::new(120.0, 80.0);
        let v = aim_direction(p, p, 5.0);
        assert_eq!(v, Vec2::new(0.0, 5.0));
        assert!(v.is_finite());
    }
}
