// Tile collision: static obstacle index and axis-separated movement

mod obstacles;
mod resolver;

pub use obstacles::{Obstacle, ObstacleIndex, SOLID_TILE};
pub use resolver::{resolve_move, Axis};
