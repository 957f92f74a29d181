// Game layer: the level, its tiles and the player

pub mod characters;
pub mod entity;
pub mod level;
pub mod settings;
pub mod tile;
