//! Fixed-step simulation tick
//!
//! Core game loop that advances the session deterministically.

use super::state::GameState;
use super::{combat, motion, spawn};

/// Input snapshot for a single tick (which keys are held)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the session by one tick
///
/// Does nothing unless the session is running. Order: player control,
/// spawning, motion, collisions, then cosmetic decay.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    state.frames += 1;

    motion::steer_player(state, input);
    spawn::spawn(state);
    motion::advance(state);
    combat::resolve(state);
    motion::decay_effects(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::event::GameEvent;
    use crate::sim::state::{EnemyKind, GamePhase, Lifecycle, Powerup, PowerupKind};
    use glam::Vec2;

    #[test]
    fn test_idle_session_does_not_tick() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frames, 0);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_small_enemy_schedule() {
        let mut state = GameState::new(2);
        state.start();
        let mut spawned_at = Vec::new();
        let mut seen = 0;
        for _ in 0..200 {
            // Keep the ship out of harm's way
            state.player.shield = SHIELD_TICKS;
            tick(&mut state, &TickInput::default());
            let smalls = state
                .enemies
                .iter()
                .filter(|e| e.kind == EnemyKind::Small && e.pos.y == -50.0 + SMALL_SPEED)
                .count();
            if smalls > 0 {
                spawned_at.push(state.frames);
            }
            seen += smalls;
        }
        assert_eq!(spawned_at, vec![45, 90, 135, 180]);
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_no_boss_without_score() {
        let mut state = GameState::new(3);
        state.start();
        for _ in 0..500 {
            state.player.shield = SHIELD_TICKS;
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 0);
        assert!(state.boss.is_none());
        assert_eq!(state.frames, 500);
    }

    #[test]
    fn test_boss_spawns_at_threshold() {
        let mut state = GameState::new(4);
        state.start();
        state.score = FIRST_BOSS_SCORE - 1;
        tick(&mut state, &TickInput::default());
        assert!(state.boss.is_none());

        state.score = FIRST_BOSS_SCORE;
        tick(&mut state, &TickInput::default());
        assert!(state.boss.is_some());
        // Threshold only moves when the boss dies
        assert_eq!(state.next_boss, FIRST_BOSS_SCORE);
    }

    #[test]
    fn test_shield_window() {
        let mut state = GameState::new(5);
        state.start();
        state.player.vel = Vec2::ZERO;
        state.powerups.push(Powerup {
            pos: state.player.pos,
            kind: PowerupKind::Shield,
            life: Lifecycle::Active,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.shield, SHIELD_TICKS);

        let mut damage_tick = None;
        for n in 1..=SHIELD_TICKS + 1 {
            state.enemy_bullets.clear();
            state.enemies.clear();
            let pos = state.player.pos;
            state.enemy_bullets.push(crate::sim::state::EnemyBullet {
                pos: pos - Vec2::new(0.0, 5.0),
                vel: Vec2::new(0.0, 5.0),
                radius: 6.0,
                color: 0,
                life: Lifecycle::Active,
            });
            tick(&mut state, &TickInput::default());
            if state.player.hp < PLAYER_MAX_HP {
                damage_tick = Some(n);
                break;
            }
        }
        assert_eq!(damage_tick, Some(SHIELD_TICKS + 1));
        assert_eq!(state.player.hp, PLAYER_MAX_HP - ENEMY_BULLET_DAMAGE);
    }

    #[test]
    fn test_game_over_stops_ticking() {
        let mut state = GameState::new(6);
        state.start();
        state.player.hp = 1;
        state.enemy_bullets.push(crate::sim::state::EnemyBullet {
            pos: state.player.pos,
            vel: Vec2::ZERO,
            radius: 6.0,
            color: 0,
            life: Lifecycle::Active,
        });
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());
        let frames = state.frames;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frames, frames);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );

        state.start();
        assert!(state.is_running());
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert!(state.enemy_bullets.is_empty());
    }
}
