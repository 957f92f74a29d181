// Game tuning
//
// Everything here is fixed at compile time, the same way the character base
// stats are. Runtime knobs are limited to input bindings and `RUST_LOG`.

use glam::Vec2;

use super::characters::{Magic, MagicStyle, Weapon};
use crate::engine::clock::Millis;

/// Window size in pixels
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Edge length of one map cell in pixels
pub const TILE_SIZE: f32 = 64.0;

/// Total width/height change applied to a sprite's rect to get its hitbox
pub const PLAYER_HITBOX_OFFSET: Vec2 = Vec2::new(-6.0, -26.0);
pub const OBSTACLE_HITBOX_OFFSET: Vec2 = Vec2::ZERO;

/// Grid tag for the player spawn
pub const PLAYER_TILE: char = 'p';

/// Texture used for solid tiles
pub const OBSTACLE_TEXTURE: &str = "rock.png";

/// Where per-status player frames live: `<dir>/<status>/<n>.png`
pub const PLAYER_ASSET_DIR: &str = "assets/player";

/// Frame index advance per update
pub const ANIMATION_SPEED: f32 = 0.15;

/// Minimum length of every attack, before the weapon's own cooldown
pub const BASE_ATTACK_COOLDOWN: Millis = 400;
/// Delay between two weapon (or magic) switches
pub const SWITCH_COOLDOWN: Millis = 200;
/// How long the player stays invulnerable after a hit
pub const INVULNERABILITY_DURATION: Millis = 500;

/// Energy regained per update, per point of magic
pub const ENERGY_RECOVERY_RATE: f32 = 0.01;

/// Experience the player starts with
pub const STARTING_EXP: u32 = 500;

/// Weapon catalog, in switch order
pub const WEAPONS: &[Weapon] = &[
    Weapon::new("sword", 100, 15.0),
    Weapon::new("lance", 400, 30.0),
    Weapon::new("axe", 300, 20.0),
    Weapon::new("rapier", 50, 8.0),
    Weapon::new("sai", 80, 10.0),
];

/// Magic catalog, in switch order
pub const MAGIC: &[Magic] = &[
    Magic::new(MagicStyle::Flame, 5.0, 20.0),
    Magic::new(MagicStyle::Heal, 20.0, 10.0),
];

pub const WORLD_MAP: &[&str] = &[
    "xxxxxxxxxxxxxxxxxxxx",
    "x                  x",
    "x p                x",
    "x  x     xxxxx     x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        x      x",
    "x  x        xxx    x",
    "x      x x         x",
    "x     xxxxx        x",
    "x      xxx         x",
    "x       x          x",
    "x                  x",
    "x                  x",
    "x                  x",
    "xxxxxxxxxxxxxxxxxxxx",
];
