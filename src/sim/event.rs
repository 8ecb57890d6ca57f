//! Domain events emitted by the simulation
//!
//! The simulation never talks to audio or presentation directly; it queues
//! events on [`super::GameState`] and the host drains them after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EnemyKind, PowerupKind};
use crate::audio::AudioCue;
use crate::consts::NOTIFICATION_TICKS;

/// Transient on-screen text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub color: u32,
    /// Ticks until the message disappears
    pub ttl: u32,
}

impl Notification {
    pub fn new(text: &str, color: u32) -> Self {
        Self {
            text: text.to_owned(),
            color,
            ttl: NOTIFICATION_TICKS,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    /// Player gun fired (`spread` when rapid fire added side bullets)
    PlayerFired { spread: bool },
    /// A medium enemy fired an aimed shot
    EnemyFired { at: Vec2 },
    /// The boss fired a spread
    BossFired { at: Vec2 },
    /// Explosion burst emitted
    Explosion { at: Vec2, color: u32 },
    /// Enemy destroyed by player bullets
    EnemyKilled { kind: EnemyKind, at: Vec2, reward: u32 },
    /// Enemy destroyed by ramming the player (no reward)
    EnemyRammed { kind: EnemyKind, at: Vec2 },
    PowerupDropped { kind: PowerupKind, at: Vec2 },
    PowerupCollected { kind: PowerupKind },
    PlayerDamaged { amount: i32, hp: i32 },
    BossSpawned { max_hp: i32 },
    BossDefeated { at: Vec2, bonus: u32 },
    GameOver { score: u32 },
    /// Text message for the overlay
    Notice(Notification),
}

impl GameEvent {
    /// Sound cue this event should trigger, if any
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::PlayerFired { .. } => Some(AudioCue::Shoot),
            GameEvent::EnemyFired { .. } | GameEvent::BossFired { .. } => {
                Some(AudioCue::EnemyShoot)
            }
            GameEvent::Explosion { .. } | GameEvent::PlayerDamaged { .. } => {
                Some(AudioCue::Explode)
            }
            GameEvent::PowerupCollected { .. } => Some(AudioCue::Powerup),
            GameEvent::SessionStarted
            | GameEvent::EnemyKilled { .. }
            | GameEvent::EnemyRammed { .. }
            | GameEvent::PowerupDropped { .. }
            | GameEvent::BossSpawned { .. }
            | GameEvent::BossDefeated { .. }
            | GameEvent::GameOver { .. }
            | GameEvent::Notice(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_cues() {
        assert_eq!(
            GameEvent::PlayerFired { spread: false }.audio_cue(),
            Some(AudioCue::Shoot)
        );
        assert_eq!(
            GameEvent::BossFired { at: Vec2::ZERO }.audio_cue(),
            Some(AudioCue::EnemyShoot)
        );
        assert_eq!(
            GameEvent::PlayerDamaged { amount: 15, hp: 85 }.audio_cue(),
            Some(AudioCue::Explode)
        );
        assert_eq!(
            GameEvent::PowerupCollected {
                kind: PowerupKind::Heal
            }
            .audio_cue(),
            Some(AudioCue::Powerup)
        );
        assert_eq!(GameEvent::GameOver { score: 10 }.audio_cue(), None);
    }

    #[test]
    fn test_notification_lifetime() {
        let n = Notification::new("SHIELDED", 0x3b82f6);
        assert_eq!(n.ttl, NOTIFICATION_TICKS);
        assert_eq!(n.text, "SHIELDED");
    }
}
