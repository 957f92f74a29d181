// Level: map loading and the per-frame draw/update cycle

use std::iter;

use glam::Vec2;
use log::{debug, info, warn};
use thiserror::Error;

use super::characters::{AnimationLibrary, EffectCommand, EffectQueue, MagicStyle, Player};
use super::settings::{PLAYER_TILE, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use super::tile::Tile;
use crate::engine::clock::Millis;
use crate::engine::input::PlayerIntent;
use crate::engine::physics::{ObstacleIndex, SOLID_TILE};
use crate::engine::renderer::{CameraGroup, DrawTarget, Drawable};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("map has no player spawn cell")]
    MissingPlayer,
}

pub struct Level {
    obstacles: ObstacleIndex,
    tiles: Vec<Tile>,
    player: Player,
    camera: CameraGroup,
    effects: EffectQueue,
    /// Melee effects spawned and not yet destroyed
    live_effects: usize,
}

impl Level {
    /// Build a level from a row-major character grid
    pub fn new<R: AsRef<str>>(map: &[R], animations: AnimationLibrary) -> Result<Self, LevelError> {
        let mut tiles = Vec::new();
        let mut spawn: Option<Vec2> = None;

        for (row_index, row) in map.iter().enumerate() {
            for (col_index, cell) in row.as_ref().chars().enumerate() {
                let topleft = Vec2::new(col_index as f32, row_index as f32) * TILE_SIZE;
                match cell {
                    SOLID_TILE => tiles.push(Tile::new(topleft)),
                    PLAYER_TILE if spawn.is_none() => spawn = Some(topleft),
                    PLAYER_TILE => warn!(
                        "Extra player cell at ({row_index}, {col_index}) ignored"
                    ),
                    _ => {}
                }
            }
        }

        let spawn = spawn.ok_or(LevelError::MissingPlayer)?;
        let obstacles = ObstacleIndex::from_obstacles(
            tiles.iter().map(Tile::obstacle).collect(),
            TILE_SIZE,
        );

        info!(
            "Level loaded: {} obstacles, player at {:?}",
            obstacles.len(),
            spawn
        );

        Ok(Self {
            obstacles,
            tiles,
            player: Player::new(spawn, animations),
            camera: CameraGroup::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            effects: EffectQueue::new(),
            live_effects: 0,
        })
    }

    /// One frame: draw the current state, then advance it
    pub fn run(&mut self, now: Millis, intent: &PlayerIntent, target: &mut dyn DrawTarget) {
        let members = self
            .tiles
            .iter()
            .map(|tile| tile as &dyn Drawable)
            .chain(iter::once(&self.player as &dyn Drawable));
        self.camera.draw(&self.player, members, target);

        self.player
            .update(now, intent, &self.obstacles, &mut self.effects);
        self.apply_effects();
    }

    fn apply_effects(&mut self) {
        for command in self.effects.drain() {
            match command {
                EffectCommand::SpawnMelee => {
                    self.live_effects += 1;
                }
                EffectCommand::DestroyMelee => {
                    self.live_effects = self.live_effects.saturating_sub(1);
                }
                EffectCommand::SpawnMagic {
                    style,
                    strength,
                    cost,
                } => {
                    if !self.player.try_spend_energy(cost) {
                        debug!("Not enough energy for {}", style.name());
                        continue;
                    }
                    match style {
                        MagicStyle::Heal => self.player.heal(strength),
                        MagicStyle::Flame => debug!("Flame cast with strength {strength}"),
                    }
                }
            }
        }
    }

    /// Resize the camera viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &ObstacleIndex {
        &self.obstacles
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn camera(&self) -> &CameraGroup {
        &self.camera
    }

    pub fn live_effects(&self) -> usize {
        self.live_effects
    }
}
