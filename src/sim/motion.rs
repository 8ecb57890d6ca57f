//! Per-tick motion, firing, and pruning of every entity kind

use glam::Vec2;
use rand::Rng;

use super::event::GameEvent;
use super::state::{BossPhase, Bullet, EnemyBullet, GameState, Lifecycle, palette};
use super::tick::TickInput;
use crate::aim_direction;
use crate::consts::*;

/// Apply held directions, inertia, clamping, and the fire button
pub fn steer_player(state: &mut GameState, input: &TickInput) {
    let field = state.field;
    let p = &mut state.player;
    p.shoot_cooldown = p.shoot_cooldown.saturating_sub(1);
    p.rapid_fire = p.rapid_fire.saturating_sub(1);

    let thrust = Vec2::new(
        axis(input.left, input.right),
        axis(input.up, input.down),
    ) * PLAYER_THRUST;
    p.vel = (p.vel + thrust) * PLAYER_DAMPING;
    p.pos = (p.pos + p.vel).clamp(
        Vec2::new(PLAYER_MARGIN_X, PLAYER_MARGIN_Y),
        Vec2::new(field.width - PLAYER_MARGIN_X, field.height - PLAYER_MARGIN_Y),
    );

    if input.fire && p.shoot_cooldown == 0 {
        fire_player_gun(state);
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}

fn fire_player_gun(state: &mut GameState) {
    let p = &mut state.player;
    let spread = p.rapid_fire > 0;
    p.shoot_cooldown = if spread {
        RAPID_FIRE_COOLDOWN
    } else {
        FIRE_COOLDOWN
    };
    let origin = p.pos;

    state.bullets.push(Bullet {
        pos: origin + Vec2::new(0.0, -30.0),
        vel: Vec2::new(0.0, -BULLET_SPEED),
        size: Vec2::new(4.0, 20.0),
        color: palette::SKY,
        life: Lifecycle::Active,
    });
    if spread {
        for side in [-1.0, 1.0] {
            state.bullets.push(Bullet {
                pos: origin + Vec2::new(side * 15.0, -10.0),
                vel: Vec2::new(side, -SIDE_BULLET_SPEED),
                size: Vec2::new(3.0, 15.0),
                color: palette::SKY,
                life: Lifecycle::Active,
            });
        }
    }
    state.events.push(GameEvent::PlayerFired { spread });
}

/// Move everything except the player, fire enemy guns, prune leftovers
pub fn advance(state: &mut GameState) {
    advance_stars(state);
    advance_bullets(state);
    advance_enemies(state);
    advance_boss(state);

    let bottom = state.field.height + BOTTOM_DESPAWN_MARGIN;
    for powerup in &mut state.powerups {
        powerup.pos.y += POWERUP_FALL_SPEED;
    }
    state.powerups.retain(|p| p.pos.y < bottom);

    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life -= 1.0;
    }
    state.particles.retain(|p| p.life > 0.0);
}

fn advance_stars(state: &mut GameState) {
    let tempo = if state.boss.is_some() {
        BOSS_STAR_TEMPO
    } else {
        1.0
    };
    let (w, h) = (state.field.width, state.field.height);
    for star in &mut state.stars {
        star.pos.y += star.speed * tempo;
        if star.pos.y > h {
            star.pos = Vec2::new(state.rng.random::<f32>() * w, 0.0);
        }
    }
}

fn advance_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }
    state.bullets.retain(|b| b.pos.y > BULLET_DESPAWN_Y);

    let bottom = state.field.height + BOTTOM_DESPAWN_MARGIN;
    for bullet in &mut state.enemy_bullets {
        bullet.pos += bullet.vel;
    }
    state.enemy_bullets.retain(|b| b.pos.y < bottom);
}

fn advance_enemies(state: &mut GameState) {
    let w = state.field.width;
    let target = state.player.pos;
    let mut shots = Vec::new();

    for enemy in &mut state.enemies {
        enemy.pos += enemy.vel;
        enemy.flash = enemy.flash.saturating_sub(1);
        if enemy.pos.x < ENEMY_BOUNCE_MARGIN || enemy.pos.x > w - ENEMY_BOUNCE_MARGIN {
            enemy.vel.x = -enemy.vel.x;
        }

        if let Some(timer) = enemy.fire_timer.as_mut() {
            *timer += 1;
            if *timer > MEDIUM_FIRE_INTERVAL {
                *timer = 0;
                shots.push(enemy.pos);
            }
        }
    }

    for at in shots {
        state.enemy_bullets.push(EnemyBullet {
            pos: at + Vec2::new(0.0, 30.0),
            vel: aim_direction(at, target, MEDIUM_BULLET_SPEED),
            radius: MEDIUM_BULLET_RADIUS,
            color: palette::AMBER,
            life: Lifecycle::Active,
        });
        state.events.push(GameEvent::EnemyFired { at });
    }

    let bottom = state.field.height + ENEMY_DESPAWN_MARGIN;
    state
        .enemies
        .retain(|e| e.pos.y < bottom && e.hp > 0 && e.life.is_active());
}

fn advance_boss(state: &mut GameState) {
    let w = state.field.width;
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    boss.flash = boss.flash.saturating_sub(1);

    match boss.phase {
        BossPhase::Enter => {
            boss.pos.y += BOSS_ENTER_SPEED;
            if boss.pos.y > BOSS_FIGHT_DEPTH {
                boss.phase = BossPhase::Fight;
                log::debug!("Boss entered fight phase");
            }
        }
        BossPhase::Fight => {
            boss.pos.x += boss.vx;
            if boss.pos.x < BOSS_BOUNCE_MARGIN || boss.pos.x > w - BOSS_BOUNCE_MARGIN {
                boss.vx = -boss.vx;
            }
            boss.fire_timer += 1;
            if boss.fire_timer > BOSS_FIRE_INTERVAL {
                boss.fire_timer = 0;
                let at = boss.pos;
                for i in [-1.0, 0.0, 1.0] {
                    state.enemy_bullets.push(EnemyBullet {
                        pos: at + Vec2::new(i * BOSS_BULLET_SPREAD, 80.0),
                        vel: Vec2::new(i * BOSS_BULLET_DRIFT, BOSS_BULLET_SPEED),
                        radius: BOSS_BULLET_RADIUS,
                        color: palette::RED,
                        life: Lifecycle::Active,
                    });
                }
                state.events.push(GameEvent::BossFired { at });
            }
        }
    }
}

/// Decay screen shake and expire notifications; runs last in the tick
pub fn decay_effects(state: &mut GameState) {
    state.shake = state.shake.saturating_sub(1);
    for n in &mut state.notifications {
        n.ttl = n.ttl.saturating_sub(1);
    }
    state.notifications.retain(|n| n.ttl > 0);
}
