//! Time- and score-driven spawning of enemies, the boss, and loot

use glam::Vec2;
use rand::Rng;

use super::effects::EXPLOSION_PARTICLES;
use super::event::GameEvent;
use super::state::{
    Boss, BossPhase, Enemy, EnemyKind, GameState, Lifecycle, Powerup, PowerupKind, palette,
};
use crate::consts::*;

/// Run the spawn pass for the current frame
pub fn spawn(state: &mut GameState) {
    if state.boss.is_none() && state.score >= state.next_boss {
        spawn_boss(state);
        return;
    }
    if state.boss.is_some() {
        return;
    }

    if state.frames % SMALL_SPAWN_INTERVAL == 0 {
        spawn_enemy(state, EnemyKind::Small);
    }
    if state.frames % MEDIUM_SPAWN_INTERVAL == 0 && state.medium_count() < MEDIUM_CAP {
        spawn_enemy(state, EnemyKind::Medium);
    }
}

/// Append one enemy above the top edge
pub fn spawn_enemy(state: &mut GameState, kind: EnemyKind) {
    let w = state.field.width;
    let rng = &mut state.rng;
    let enemy = match kind {
        EnemyKind::Small => Enemy {
            kind,
            pos: Vec2::new(rng.random::<f32>() * (w - 60.0) + 30.0, -50.0),
            vel: Vec2::new((rng.random::<f32>() - 0.5) * SMALL_DRIFT, SMALL_SPEED),
            size: Vec2::splat(SMALL_SIZE),
            hp: SMALL_HP,
            flash: 0,
            fire_timer: None,
            life: Lifecycle::Active,
        },
        EnemyKind::Medium => Enemy {
            kind,
            pos: Vec2::new(rng.random::<f32>() * (w - 100.0) + 50.0, -80.0),
            vel: Vec2::new((rng.random::<f32>() - 0.5) * MEDIUM_DRIFT, MEDIUM_SPEED),
            size: Vec2::splat(MEDIUM_SIZE),
            hp: MEDIUM_HP,
            flash: 0,
            fire_timer: Some(0),
            life: Lifecycle::Active,
        },
    };
    state.enemies.push(enemy);
}

/// Clear the field and bring in the dreadnought
pub fn spawn_boss(state: &mut GameState) {
    let cleared = std::mem::take(&mut state.enemies);
    for enemy in &cleared {
        state.explode(enemy.pos, palette::RED, EXPLOSION_PARTICLES);
    }

    let max_hp = i32::try_from(state.score)
        .map_or(i32::MAX, |score| score.saturating_add(BOSS_BASE_HP));
    state.boss = Some(Boss {
        pos: Vec2::new(state.field.width / 2.0, BOSS_SPAWN_Y),
        size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
        hp: max_hp,
        max_hp,
        phase: BossPhase::Enter,
        vx: BOSS_STRAFE_SPEED,
        fire_timer: 0,
        flash: 0,
    });
    state.events.push(GameEvent::BossSpawned { max_hp });
    state.notify("DREADNOUGHT DETECTED", palette::RED);
    log::info!(
        "Boss spawned at score {} (hp {}, cleared {} enemies)",
        state.score,
        max_hp,
        cleared.len()
    );
}

/// Roll the loot table for a destroyed enemy
pub fn roll_drop(state: &mut GameState, kind: EnemyKind, at: Vec2) {
    if !state.rng.random_bool(kind.drop_chance()) {
        return;
    }
    let idx = state.rng.random_range(0..PowerupKind::ALL.len());
    let kind = PowerupKind::ALL[idx];
    state.powerups.push(Powerup {
        pos: at,
        kind,
        life: Lifecycle::Active,
    });
    state.events.push(GameEvent::PowerupDropped { kind, at });
}
