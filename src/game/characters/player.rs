// The player: input-driven state machine on top of a moving entity

use glam::Vec2;
use log::{debug, info};

use super::animation::AnimationLibrary;
use super::catalog::{Magic, Selection, Weapon};
use super::effects::CombatEffects;
use super::state::{Facing, Status};
use super::stats::{PlayerStats, Stat};
use super::timer::Timer;
use crate::core::math::flicker_alpha;
use crate::core::Rect;
use crate::engine::assets::SpriteFrame;
use crate::engine::clock::Millis;
use crate::engine::input::PlayerIntent;
use crate::engine::physics::ObstacleIndex;
use crate::engine::renderer::Drawable;
use crate::game::entity::Entity;
use crate::game::settings::{
    ANIMATION_SPEED, BASE_ATTACK_COOLDOWN, ENERGY_RECOVERY_RATE, INVULNERABILITY_DURATION, MAGIC,
    PLAYER_HITBOX_OFFSET, SWITCH_COOLDOWN, STARTING_EXP, TILE_SIZE, WEAPONS,
};

#[derive(Debug)]
pub struct Player {
    entity: Entity,
    status: Status,
    animations: AnimationLibrary,
    frame: SpriteFrame,
    alpha: u8,

    // Stats and resources
    stats: PlayerStats,
    health: f32,
    energy: f32,
    exp: u32,

    // Loadout
    weapon: Selection<Weapon>,
    magic: Selection<Magic>,

    // Timers; a running timer means its gate is closed
    attack_timer: Timer,
    weapon_switch_timer: Timer,
    magic_switch_timer: Timer,
    hurt_timer: Timer,

    dead: bool,
}

impl Player {
    /// Spawn with the default stats and catalogs, top-left corner at `topleft`
    pub fn new(topleft: Vec2, animations: AnimationLibrary) -> Self {
        Self::with_loadout(topleft, animations, PlayerStats::default(), WEAPONS, MAGIC)
    }

    pub fn with_loadout(
        topleft: Vec2,
        animations: AnimationLibrary,
        stats: PlayerStats,
        weapons: &'static [Weapon],
        magic: &'static [Magic],
    ) -> Self {
        let status = Status::default();
        let frame = animations.clip(status).frame(0);
        let mut entity = Entity::new(
            Rect::new(topleft.x, topleft.y, TILE_SIZE, TILE_SIZE),
            PLAYER_HITBOX_OFFSET,
            ANIMATION_SPEED,
        );
        entity.fit_frame(frame.size);

        Self {
            entity,
            status,
            animations,
            frame,
            alpha: 255,
            health: stats.health(),
            energy: stats.energy(),
            stats,
            exp: STARTING_EXP,
            weapon: Selection::new(weapons),
            magic: Selection::new(magic),
            attack_timer: Timer::new(),
            weapon_switch_timer: Timer::new(),
            magic_switch_timer: Timer::new(),
            hurt_timer: Timer::new(),
            dead: false,
        }
    }

    /// Run one frame. Stage order matters: each stage reads what the
    /// previous one wrote.
    pub fn update(
        &mut self,
        now: Millis,
        intent: &PlayerIntent,
        obstacles: &ObstacleIndex,
        effects: &mut dyn CombatEffects,
    ) {
        self.capture_intent(now, intent, effects);
        self.derive_status();
        self.resolve_cooldowns(now, effects);
        self.animate(now);
        self.recover_energy();
        self.entity.move_by(self.stats.speed(), obstacles);
        self.check_death();
    }

    fn capture_intent(&mut self, now: Millis, intent: &PlayerIntent, effects: &mut dyn CombatEffects) {
        // Committed to the current action until its cooldown ends
        if self.attacking() {
            return;
        }

        if intent.up {
            self.entity.direction.y = -1.0;
            self.status = Status::face(Facing::Up);
        } else if intent.down {
            self.entity.direction.y = 1.0;
            self.status = Status::face(Facing::Down);
        } else {
            self.entity.direction.y = 0.0;
        }

        if intent.left {
            self.entity.direction.x = -1.0;
            self.status = Status::face(Facing::Left);
        } else if intent.right {
            self.entity.direction.x = 1.0;
            self.status = Status::face(Facing::Right);
        } else {
            self.entity.direction.x = 0.0;
        }

        if intent.attack {
            self.attack_timer.start(now);
            debug!("Attack with {}", self.weapon.current().name);
            effects.spawn_melee_effect();
        }

        if intent.magic {
            self.attack_timer.start(now);
            let magic = *self.magic.current();
            effects.spawn_magic_effect(magic.style, magic.strength + self.stats.magic(), magic.cost);
        }

        if intent.switch_weapon && self.can_switch_weapon() {
            self.weapon_switch_timer.start(now);
            let weapon = self.weapon.advance();
            debug!("Switched weapon to {}", weapon.name);
        }

        if intent.switch_magic && self.can_switch_magic() {
            self.magic_switch_timer.start(now);
            let magic = self.magic.advance();
            debug!("Switched magic to {}", magic.style.name());
        }
    }

    fn derive_status(&mut self) {
        let standing_still = self.entity.direction == Vec2::ZERO;
        if standing_still {
            self.status = self.status.settled();
        }

        if self.attacking() {
            self.entity.direction = Vec2::ZERO;
            self.status = self.status.attacking();
        } else {
            self.status = self.status.attack_finished(standing_still);
        }
    }

    fn resolve_cooldowns(&mut self, now: Millis, effects: &mut dyn CombatEffects) {
        let attack_duration = BASE_ATTACK_COOLDOWN + self.weapon.current().cooldown;
        if self.attack_timer.has_elapsed(now, attack_duration) {
            self.attack_timer.stop();
            effects.destroy_melee_effect();
        }

        if self.weapon_switch_timer.has_elapsed(now, SWITCH_COOLDOWN) {
            self.weapon_switch_timer.stop();
        }

        if self.magic_switch_timer.has_elapsed(now, SWITCH_COOLDOWN) {
            self.magic_switch_timer.stop();
        }

        if self.hurt_timer.has_elapsed(now, INVULNERABILITY_DURATION) {
            self.hurt_timer.stop();
        }
    }

    fn animate(&mut self, now: Millis) {
        let clip = self.animations.clip(self.status);
        let index = self.entity.next_frame(clip.len());
        self.frame = clip.frame(index);
        self.entity.fit_frame(self.frame.size);

        self.alpha = if self.vulnerable() {
            255
        } else {
            flicker_alpha(now)
        };
    }

    fn recover_energy(&mut self) {
        let capacity = self.stats.energy();
        if self.energy < capacity {
            self.energy = (self.energy + ENERGY_RECOVERY_RATE * self.stats.magic()).min(capacity);
        }
    }

    /// Latch `dead` once health is gone
    pub fn check_death(&mut self) {
        if self.health <= 0.0 && !self.dead {
            self.dead = true;
            info!("Player died");
        }
    }

    /// Take a hit. Ignored while invulnerable; returns whether it landed.
    pub fn take_damage(&mut self, amount: f32, now: Millis) -> bool {
        if !self.vulnerable() {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.hurt_timer.start(now);
        debug!("Player took {amount} damage, health {}", self.health);
        true
    }

    /// Restore health, up to the health stat
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.stats.health());
    }

    /// Pay `cost` energy if there is enough
    pub fn try_spend_energy(&mut self, cost: f32) -> bool {
        if self.energy >= cost {
            self.energy -= cost;
            true
        } else {
            false
        }
    }

    pub fn full_weapon_damage(&self) -> f32 {
        self.stats.attack() + self.weapon.current().damage
    }

    pub fn full_magic_damage(&self) -> f32 {
        self.stats.magic() + self.magic.current().strength
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn direction(&self) -> Vec2 {
        self.entity.direction
    }

    pub fn attacking(&self) -> bool {
        self.attack_timer.is_running()
    }

    pub fn can_switch_weapon(&self) -> bool {
        !self.weapon_switch_timer.is_running()
    }

    pub fn can_switch_magic(&self) -> bool {
        !self.magic_switch_timer.is_running()
    }

    pub fn vulnerable(&self) -> bool {
        !self.hurt_timer.is_running()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Stat level by display position, for the upgrade screen
    pub fn stat_value_by_index(&self, index: usize) -> Option<f32> {
        self.stats.value_by_index(index)
    }

    pub fn cost_by_index(&self, index: usize) -> Option<f32> {
        self.stats.cost_by_index(index)
    }

    pub fn max_stat(&self, stat: Stat) -> f32 {
        self.stats.max(stat)
    }

    pub fn weapon(&self) -> &Weapon {
        self.weapon.current()
    }

    pub fn weapon_index(&self) -> usize {
        self.weapon.index()
    }

    pub fn magic(&self) -> &Magic {
        self.magic.current()
    }

    pub fn magic_index(&self) -> usize {
        self.magic.index()
    }
}

impl Drawable for Player {
    fn rect(&self) -> Rect {
        self.entity.rect()
    }

    fn hitbox(&self) -> Rect {
        self.entity.hitbox()
    }

    fn frame(&self) -> SpriteFrame {
        self.frame
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}
