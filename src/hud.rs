//! Presentation interface
//!
//! Drawing and overlay text live in the host. After every tick it receives a
//! [`HudSnapshot`] with the counters shown on screen, read access to the
//! entity collections, and any new [`Notification`]s.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Notification};

/// Counters for the heads-up display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub frame: u64,
    pub score: u32,
    pub next_boss: u32,
    pub hp: i32,
    pub max_hp: i32,
    /// `Some((hp, max_hp))` while a boss is on the field
    pub boss_hp: Option<(i32, i32)>,
    /// Screen shake ticks remaining (camera jitter amplitude)
    pub shake: u32,
    pub shielded: bool,
    pub rapid_fire: bool,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            frame: state.frames,
            score: state.score,
            next_boss: state.next_boss,
            hp: state.player.hp,
            max_hp: state.player.max_hp,
            boss_hp: state.boss.as_ref().map(|b| (b.hp.max(0), b.max_hp)),
            shake: state.shake,
            shielded: state.player.shield > 0,
            rapid_fire: state.player.rapid_fire > 0,
        }
    }

    /// Player health bar fill (0-1)
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            0.0
        } else {
            self.hp as f32 / self.max_hp as f32
        }
    }

    /// Boss health bar fill (0-1), if a boss is present
    pub fn boss_fraction(&self) -> Option<f32> {
        self.boss_hp.map(|(hp, max)| {
            if max <= 0 {
                0.0
            } else {
                (hp as f32 / max as f32).min(1.0)
            }
        })
    }
}

/// Host-side drawing and overlay text
pub trait Presenter {
    /// Draw the current frame
    fn present(&mut self, hud: &HudSnapshot, state: &GameState);
    /// Show a transient message
    fn notify(&mut self, notification: &Notification);
}

/// Presenter for headless runs: logs HUD lines and messages
#[derive(Debug)]
pub struct LogPresenter {
    /// Log a HUD line every this many frames (0 disables)
    pub every: u64,
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self {
            every: u64::from(crate::consts::TICKS_PER_SECOND),
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, hud: &HudSnapshot, state: &GameState) {
        if self.every == 0 || hud.frame % self.every != 0 {
            return;
        }
        log::info!(
            "frame {:>6} | score {:>6} | hp {:>3}/{} | next boss {} | enemies {} | bullets {}/{} | boss {:?}",
            hud.frame,
            hud.score,
            hud.hp,
            hud.max_hp,
            hud.next_boss,
            state.enemies.len(),
            state.bullets.len(),
            state.enemy_bullets.len(),
            hud.boss_hp,
        );
    }

    fn notify(&mut self, notification: &Notification) {
        log::info!(">> {} (#{:06x})", notification.text, notification.color);
    }
}
