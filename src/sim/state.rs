//! Game state and core simulation types
//!
//! Every entity is a plain record owned by [`GameState`]; behavior lives in
//! the spawn/motion/combat passes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::{GameEvent, Notification};
use crate::consts::*;
use crate::settings::Settings;

/// Packed 0xRRGGBB colors used by entities and notifications
pub mod palette {
    pub const RED: u32 = 0xef4444;
    pub const AMBER: u32 = 0xf59e0b;
    pub const WHITE: u32 = 0xffffff;
    pub const SKY: u32 = 0x38bdf8;
    pub const GREEN: u32 = 0x22c55e;
    pub const BLUE: u32 = 0x3b82f6;
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Player destroyed; waits for an explicit restart
    GameOver,
}

/// Whether an entity is still part of the simulation
///
/// Collision marks entities `Spent`; the compaction pass removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Active,
    Spent,
}

impl Lifecycle {
    pub fn is_active(self) -> bool {
        self == Lifecycle::Active
    }
}

/// Play-field dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full width/height of the hitbox
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    /// Ticks until the gun can fire again
    pub shoot_cooldown: u32,
    /// Damage immunity after a hit
    pub invulnerable: u32,
    /// Damage immunity from a shield pickup
    pub shield: u32,
    /// Faster fire rate and side bullets
    pub rapid_fire: u32,
}

impl Player {
    pub fn new(field: Field) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, field.height - PLAYER_SPAWN_OFFSET),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            shoot_cooldown: 0,
            invulnerable: 0,
            shield: 0,
            rapid_fire: 0,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// True while neither iframes nor a shield protect the ship
    pub fn is_vulnerable(&self) -> bool {
        self.invulnerable == 0 && self.shield == 0
    }

    /// Restore hp, capped at max
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Subtract hp, floored at zero. Returns true if the ship is destroyed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).clamp(0, self.max_hp);
        self.hp == 0
    }
}

/// A player projectile (axis-aligned rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub color: u32,
    pub life: Lifecycle,
}

/// An enemy or boss projectile (circle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: u32,
    pub life: Lifecycle,
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast fighter, dies in 3 hits
    Small,
    /// Slow gunship that fires aimed shots
    Medium,
}

impl EnemyKind {
    pub fn reward(self) -> u32 {
        match self {
            EnemyKind::Small => SMALL_REWARD,
            EnemyKind::Medium => MEDIUM_REWARD,
        }
    }

    pub fn drop_chance(self) -> f64 {
        match self {
            EnemyKind::Small => SMALL_DROP_CHANCE,
            EnemyKind::Medium => MEDIUM_DROP_CHANCE,
        }
    }

    pub fn explosion_color(self) -> u32 {
        match self {
            EnemyKind::Small => palette::RED,
            EnemyKind::Medium => palette::AMBER,
        }
    }
}

/// A regular enemy ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub hp: i32,
    /// Hit-flash ticks remaining (cosmetic)
    pub flash: u32,
    /// Counts up toward the next aimed shot; `None` for unarmed ships
    pub fire_timer: Option<u32>,
    pub life: Lifecycle,
}

impl Enemy {
    /// Alive and not yet consumed by a collision this tick
    pub fn is_live(&self) -> bool {
        self.life.is_active() && self.hp > 0
    }
}

/// Boss sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Descending into view, not firing
    Enter,
    /// Strafing and firing spreads
    Fight,
}

/// The dreadnought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub phase: BossPhase,
    /// Horizontal strafe velocity (Fight phase)
    pub vx: f32,
    pub fire_timer: u32,
    pub flash: u32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Restore hp
    Heal,
    /// Timed damage immunity
    Shield,
    /// Timed rapid fire with side bullets
    Speed,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Heal, PowerupKind::Shield, PowerupKind::Speed];

    pub fn color(self) -> u32 {
        match self {
            PowerupKind::Heal => palette::GREEN,
            PowerupKind::Shield => palette::BLUE,
            PowerupKind::Speed => palette::AMBER,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PowerupKind::Heal => "✚",
            PowerupKind::Shield => "🛡️",
            PowerupKind::Speed => "⚡",
        }
    }

    /// Notification text shown on pickup
    pub fn label(self) -> &'static str {
        match self {
            PowerupKind::Heal => "REPAIRED",
            PowerupKind::Shield => "SHIELDED",
            PowerupKind::Speed => "RAPID FIRE",
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub life: Lifecycle,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: f32,
    pub color: u32,
    pub size: f32,
}

/// A background star; wrapped to the top instead of removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub brightness: f32,
}

/// Cosmetic effect switches taken from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    pub particles: bool,
    pub max_particles: usize,
    pub screen_shake: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            particles: true,
            max_particles: MAX_PARTICLES,
            screen_shake: true,
        }
    }
}

/// Default particle budget
pub const MAX_PARTICLES: usize = 1024;

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed; every `start` reseeds from it
    pub seed: u64,
    pub field: Field,
    pub effects: EffectSettings,
    pub phase: GamePhase,
    pub score: u32,
    /// Score at which the next boss appears
    pub next_boss: u32,
    /// Simulation tick counter
    pub frames: u64,
    /// Screen shake ticks remaining
    pub shake: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub powerups: Vec<Powerup>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// On-screen text messages with remaining lifetime
    pub notifications: Vec<Notification>,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle session with default field and effects
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Field::default(), EffectSettings::default())
    }

    /// Create an idle session from runtime settings
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        let field = Field {
            width: settings.field_width,
            height: settings.field_height,
        };
        let effects = EffectSettings {
            particles: settings.particles,
            max_particles: settings.max_particles,
            screen_shake: settings.effective_screen_shake(),
        };
        Self::build(settings.seed, field, effects)
    }

    fn build(seed: u64, field: Field, effects: EffectSettings) -> Self {
        let mut state = Self {
            seed,
            field,
            effects,
            phase: GamePhase::Idle,
            score: 0,
            next_boss: FIRST_BOSS_SCORE,
            frames: 0,
            shake: 0,
            player: Player::new(field),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            boss: None,
            powerups: Vec::new(),
            particles: Vec::new(),
            stars: Vec::new(),
            notifications: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Reset everything and begin running
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::SessionStarted);
        log::info!("Session started (seed {})", self.seed);
    }

    /// Wipe all collections and counters back to a fresh run
    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.next_boss = FIRST_BOSS_SCORE;
        self.frames = 0;
        self.shake = 0;
        self.player = Player::new(self.field);
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.boss = None;
        self.powerups.clear();
        self.particles.clear();
        self.notifications.clear();
        self.events.clear();
        self.init_stars();
    }

    fn init_stars(&mut self) {
        let (w, h) = (self.field.width, self.field.height);
        let rng = &mut self.rng;
        self.stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(rng.random::<f32>() * w, rng.random::<f32>() * h),
                speed: rng.random::<f32>() * 2.0 + 0.5,
                brightness: rng.random::<f32>(),
            })
            .collect();
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue an on-screen message
    pub fn notify(&mut self, text: &str, color: u32) {
        let notification = Notification::new(text, color);
        self.events.push(GameEvent::Notice(notification.clone()));
        self.notifications.push(notification);
    }

    pub fn medium_count(&self) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.kind == EnemyKind::Medium)
            .count()
    }
}
