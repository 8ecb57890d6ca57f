//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Side effects are queued as events, never performed
//! - No rendering or audio dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod effects;
pub mod event;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{Aabb, rects_overlap, within_radius};
pub use event::{GameEvent, Notification};
pub use state::{
    Boss, BossPhase, Bullet, EffectSettings, Enemy, EnemyBullet, EnemyKind, Field, GamePhase,
    GameState, Lifecycle, MAX_PARTICLES, Particle, Player, Powerup, PowerupKind, Star, palette,
};
pub use tick::{TickInput, tick};
