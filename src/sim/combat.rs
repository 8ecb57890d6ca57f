//! Collision and combat resolution
//!
//! Runs after motion on a settled snapshot. Hits mark entities `Spent`
//! (or drop enemy hp) and [`compact`] removes them once every pass is done,
//! so nothing is removed while it is being iterated.

use super::collision::{rects_overlap, within_radius};
use super::effects::{
    BOSS_EXPLOSION_PARTICLES, DAMAGE_SPARK_PARTICLES, EXPLOSION_PARTICLES, SPARK_PARTICLES,
};
use super::event::GameEvent;
use super::spawn::roll_drop;
use super::state::{GamePhase, GameState, Lifecycle, PowerupKind, palette};
use crate::consts::*;

/// Resolve all collisions for the current tick, in fixed order
pub fn resolve(state: &mut GameState) {
    bullets_vs_targets(state);
    resolve_boss_death(state);

    // Protection is checked before it counts down, so a window of N ticks
    // covers exactly the next N resolutions
    let exposed = state.player.is_vulnerable();
    let p = &mut state.player;
    p.invulnerable = p.invulnerable.saturating_sub(1);
    p.shield = p.shield.saturating_sub(1);
    if exposed {
        player_vs_hazards(state);
    }
    collect_powerups(state);
    compact(state);
}

/// Player bullets against enemies, then the boss; one hit per bullet
fn bullets_vs_targets(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        if !state.bullets[bi].life.is_active() {
            continue;
        }
        let (b_pos, b_size) = (state.bullets[bi].pos, state.bullets[bi].size);

        let hit = state
            .enemies
            .iter()
            .position(|e| e.is_live() && rects_overlap(b_pos, b_size, e.pos, e.size));
        if let Some(ei) = hit {
            state.bullets[bi].life = Lifecycle::Spent;
            let enemy = &mut state.enemies[ei];
            enemy.hp -= BULLET_DAMAGE;
            enemy.flash = HIT_FLASH_TICKS;
            let dead = enemy.hp <= 0;
            state.sparks(b_pos, palette::WHITE, SPARK_PARTICLES);
            if dead {
                kill_enemy(state, ei);
            }
            continue;
        }

        if let Some(boss) = state.boss.as_mut() {
            if rects_overlap(b_pos, b_size, boss.pos, boss.size) {
                boss.hp -= BOSS_BULLET_DAMAGE;
                boss.flash = HIT_FLASH_TICKS;
                state.bullets[bi].life = Lifecycle::Spent;
                state.sparks(b_pos, palette::RED, SPARK_PARTICLES);
            }
        }
    }
}

/// Reward, explode, and roll loot for an enemy shot down by the player
fn kill_enemy(state: &mut GameState, idx: usize) {
    let enemy = &mut state.enemies[idx];
    enemy.life = Lifecycle::Spent;
    let (kind, at, reward) = (enemy.kind, enemy.pos, enemy.kind.reward());

    state.score += reward;
    state.explode(at, kind.explosion_color(), EXPLOSION_PARTICLES);
    state.events.push(GameEvent::EnemyKilled { kind, at, reward });
    roll_drop(state, kind, at);
    log::debug!("{:?} enemy killed (+{}), score {}", kind, reward, state.score);
}

fn resolve_boss_death(state: &mut GameState) {
    let Some(boss) = state.boss.take_if(|b| b.hp <= 0) else {
        return;
    };
    state.explode(boss.pos, palette::RED, BOSS_EXPLOSION_PARTICLES);
    state.score += BOSS_KILL_BONUS;
    state.next_boss = state.score + BOSS_SCORE_INTERVAL;
    state.player.heal(BOSS_KILL_HEAL);
    state.events.push(GameEvent::BossDefeated {
        at: boss.pos,
        bonus: BOSS_KILL_BONUS,
    });
    state.notify("DREADNOUGHT DESTROYED", palette::GREEN);
    log::info!(
        "Boss destroyed, score {}, next boss at {}",
        state.score,
        state.next_boss
    );
}

/// Ramming enemies and enemy bullets; caller checks vulnerability first
fn player_vs_hazards(state: &mut GameState) {
    let (p_pos, p_size) = (state.player.pos, state.player.size);

    for ei in 0..state.enemies.len() {
        let enemy = &mut state.enemies[ei];
        if !enemy.is_live() || !rects_overlap(p_pos, p_size, enemy.pos, enemy.size) {
            continue;
        }
        enemy.life = Lifecycle::Spent;
        let (kind, at) = (enemy.kind, enemy.pos);
        damage_player(state, RAM_DAMAGE);
        state.explode(at, palette::AMBER, EXPLOSION_PARTICLES);
        state.events.push(GameEvent::EnemyRammed { kind, at });
    }

    let reach = state.player.half_width();
    for bi in 0..state.enemy_bullets.len() {
        let bullet = &mut state.enemy_bullets[bi];
        if !bullet.life.is_active() || !within_radius(p_pos, bullet.pos, reach) {
            continue;
        }
        bullet.life = Lifecycle::Spent;
        damage_player(state, ENEMY_BULLET_DAMAGE);
    }
}

/// Apply damage with iframes, shake, and sparks; ends the run at zero hp
pub fn damage_player(state: &mut GameState, amount: i32) {
    let destroyed = state.player.take_damage(amount);
    state.player.invulnerable = INVULNERABLE_TICKS;
    if state.effects.screen_shake {
        state.shake = DAMAGE_SHAKE_TICKS;
    }
    state.events.push(GameEvent::PlayerDamaged {
        amount,
        hp: state.player.hp,
    });
    state.sparks(state.player.pos, palette::RED, DAMAGE_SPARK_PARTICLES);

    if destroyed && state.phase == GamePhase::Running {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over, final score {}", state.score);
    }
}

fn collect_powerups(state: &mut GameState) {
    let p_pos = state.player.pos;
    for i in 0..state.powerups.len() {
        let powerup = &mut state.powerups[i];
        if !powerup.life.is_active() || !within_radius(p_pos, powerup.pos, PICKUP_RADIUS) {
            continue;
        }
        powerup.life = Lifecycle::Spent;
        let kind = powerup.kind;
        apply_powerup(state, kind);
    }
}

fn apply_powerup(state: &mut GameState, kind: PowerupKind) {
    let p = &mut state.player;
    match kind {
        PowerupKind::Heal => p.heal(HEAL_AMOUNT),
        PowerupKind::Shield => p.shield = SHIELD_TICKS,
        PowerupKind::Speed => p.rapid_fire = RAPID_FIRE_TICKS,
    }
    state.events.push(GameEvent::PowerupCollected { kind });
    state.notify(kind.label(), kind.color());
    log::debug!("Picked up {:?}", kind);
}

/// Drop everything the passes above consumed
pub fn compact(state: &mut GameState) {
    state.bullets.retain(|b| b.life.is_active());
    state.enemy_bullets.retain(|b| b.life.is_active());
    state.enemies.retain(|e| e.is_live());
    state.powerups.retain(|p| p.life.is_active());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::spawn_enemy;
    use crate::sim::state::{
        Boss, BossPhase, Bullet, EnemyBullet, EnemyKind, Powerup,
    };
    use glam::Vec2;

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state.events.clear();
        state
    }

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::new(0.0, -15.0),
            size: Vec2::new(4.0, 20.0),
            color: palette::SKY,
            life: Lifecycle::Active,
        }
    }

    fn enemy_bullet_at(pos: Vec2) -> EnemyBullet {
        EnemyBullet {
            pos,
            vel: Vec2::new(0.0, 5.0),
            radius: 6.0,
            color: palette::AMBER,
            life: Lifecycle::Active,
        }
    }

    fn boss_with_hp(hp: i32) -> Boss {
        Boss {
            pos: Vec2::new(300.0, 150.0),
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            hp,
            max_hp: 2000,
            phase: BossPhase::Fight,
            vx: BOSS_STRAFE_SPEED,
            fire_timer: 0,
            flash: 0,
        }
    }

    fn count(state: &GameState, pred: impl Fn(&GameEvent) -> bool) -> usize {
        state.events.iter().filter(|e| pred(*e)).count()
    }

    #[test]
    fn test_bullet_damages_enemy_once() {
        let mut state = running(1);
        spawn_enemy(&mut state, EnemyKind::Small);
        spawn_enemy(&mut state, EnemyKind::Small);
        state.enemies[0].pos = Vec2::new(200.0, 200.0);
        state.enemies[1].pos = Vec2::new(205.0, 205.0);
        state.bullets.push(bullet_at(Vec2::new(202.0, 202.0)));

        resolve(&mut state);

        assert!(state.bullets.is_empty());
        let total_hp: i32 = state.enemies.iter().map(|e| e.hp).sum();
        assert_eq!(total_hp, 2 * SMALL_HP - 1);
        assert_eq!(state.enemies[0].flash, HIT_FLASH_TICKS);
        assert_eq!(state.particles.len(), SPARK_PARTICLES);
    }

    #[test]
    fn test_bullet_kill_awards_score() {
        let mut state = running(2);
        spawn_enemy(&mut state, EnemyKind::Medium);
        state.enemies[0].pos = Vec2::new(200.0, 200.0);
        state.enemies[0].hp = 1;
        state.bullets.push(bullet_at(Vec2::new(200.0, 200.0)));
        state.bullets.push(bullet_at(Vec2::new(200.0, 210.0)));

        resolve(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, MEDIUM_REWARD);
        // The second bullet found nothing left to hit
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::EnemyKilled { .. })),
            1
        );
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::Explosion { .. })),
            1
        );
    }

    #[test]
    fn test_boss_takes_bullet_damage() {
        let mut state = running(3);
        state.boss = Some(boss_with_hp(500));
        state.bullets.push(bullet_at(Vec2::new(300.0, 200.0)));
        resolve(&mut state);
        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.hp, 500 - BOSS_BULLET_DAMAGE);
        assert_eq!(boss.flash, HIT_FLASH_TICKS);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_boss_death() {
        let mut state = running(4);
        state.score = 740;
        state.player.hp = 70;
        state.boss = Some(boss_with_hp(5));
        state.bullets.push(bullet_at(Vec2::new(300.0, 200.0)));

        resolve(&mut state);

        assert!(state.boss.is_none());
        assert_eq!(state.score, 840);
        assert_eq!(state.next_boss, 840 + BOSS_SCORE_INTERVAL);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::BossDefeated { .. })),
            1
        );
        assert_eq!(state.notifications[0].text, "DREADNOUGHT DESTROYED");
    }

    #[test]
    fn test_ram_small_enemy() {
        let mut state = running(5);
        spawn_enemy(&mut state, EnemyKind::Small);
        state.enemies[0].pos = state.player.pos + Vec2::new(10.0, -20.0);

        resolve(&mut state);

        assert_eq!(state.player.hp, 80);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.invulnerable, INVULNERABLE_TICKS);
        assert_eq!(state.shake, DAMAGE_SHAKE_TICKS);
        assert_eq!(state.score, 0);
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::Explosion { .. })),
            1
        );
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::EnemyRammed { .. })),
            1
        );
    }

    #[test]
    fn test_enemy_bullet_hit() {
        let mut state = running(6);
        let pos = state.player.pos + Vec2::new(20.0, 0.0);
        state.enemy_bullets.push(enemy_bullet_at(pos));
        resolve(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP - ENEMY_BULLET_DAMAGE);
        assert!(state.enemy_bullets.is_empty());
    }

    #[test]
    fn test_enemy_bullet_outside_reach_misses() {
        let mut state = running(6);
        let pos = state.player.pos + Vec2::new(25.0, 0.0);
        state.enemy_bullets.push(enemy_bullet_at(pos));
        resolve(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.enemy_bullets.len(), 1);
    }

    #[test]
    fn test_iframes_and_shield_block_damage() {
        let mut state = running(7);
        state.player.invulnerable = 5;
        state.enemy_bullets.push(enemy_bullet_at(state.player.pos));
        resolve(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.player.invulnerable, 4);

        state.player.invulnerable = 0;
        state.player.shield = 5;
        resolve(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.enemy_bullets.len(), 1);
    }

    #[test]
    fn test_simultaneous_hits_all_land() {
        let mut state = running(8);
        for _ in 0..3 {
            state.enemy_bullets.push(enemy_bullet_at(state.player.pos));
        }
        resolve(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP - 3 * ENEMY_BULLET_DAMAGE);
    }

    #[test]
    fn test_lethal_damage_ends_run() {
        let mut state = running(9);
        state.player.hp = 10;
        state.enemy_bullets.push(enemy_bullet_at(state.player.pos));
        resolve(&mut state);
        assert_eq!(state.player.hp, 0);
        assert!(state.is_game_over());
        assert_eq!(
            count(&state, |e| matches!(e, GameEvent::GameOver { .. })),
            1
        );
    }

    #[test]
    fn test_no_shake_when_disabled() {
        let mut state = running(9);
        state.effects.screen_shake = false;
        damage_player(&mut state, 15);
        assert_eq!(state.shake, 0);
        assert_eq!(state.player.invulnerable, INVULNERABLE_TICKS);
    }

    #[test]
    fn test_powerup_effects() {
        let mut state = running(10);
        state.player.hp = 90;
        for kind in PowerupKind::ALL {
            state.powerups.push(Powerup {
                pos: state.player.pos + Vec2::new(0.0, 30.0),
                kind,
                life: Lifecycle::Active,
            });
        }
        resolve(&mut state);
        assert!(state.powerups.is_empty());
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.player.shield, SHIELD_TICKS);
        assert_eq!(state.player.rapid_fire, RAPID_FIRE_TICKS);
        let texts: Vec<_> = state.notifications.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["REPAIRED", "SHIELDED", "RAPID FIRE"]);
    }

    #[test]
    fn test_powerup_out_of_reach() {
        let mut state = running(11);
        state.powerups.push(Powerup {
            pos: state.player.pos + Vec2::new(0.0, 35.0),
            kind: PowerupKind::Heal,
            life: Lifecycle::Active,
        });
        resolve(&mut state);
        assert_eq!(state.powerups.len(), 1);
    }
}
