// Static obstacle index built from the level grid

use std::collections::HashMap;

use log::debug;

use crate::core::Rect;

/// Grid tag for a solid cell
pub const SOLID_TILE: char = 'x';

/// An immutable solid rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    hitbox: Rect,
}

impl Obstacle {
    pub fn new(hitbox: Rect) -> Self {
        Self { hitbox }
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }
}

/// Read-only set of obstacles, bucketed by tile cell for fast overlap queries
#[derive(Debug, Clone)]
pub struct ObstacleIndex {
    /// Edge length of one bucket cell
    cell_size: f32,
    /// Every obstacle, in grid scan order
    obstacles: Vec<Obstacle>,
    /// Cell coordinate -> indices of obstacles touching that cell
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl ObstacleIndex {
    /// Build the index from a row-major grid. Every `'x'` cell becomes a
    /// `tile_size` square obstacle; other cells are ignored.
    pub fn build<R: AsRef<str>>(grid: &[R], tile_size: f32) -> Self {
        let mut obstacles = Vec::new();
        for (row_index, row) in grid.iter().enumerate() {
            for (col_index, cell) in row.as_ref().chars().enumerate() {
                if cell == SOLID_TILE {
                    obstacles.push(Obstacle::new(Rect::new(
                        col_index as f32 * tile_size,
                        row_index as f32 * tile_size,
                        tile_size,
                        tile_size,
                    )));
                }
            }
        }

        let index = Self::from_obstacles(obstacles, tile_size);
        debug!("Built obstacle index with {} obstacles", index.len());
        index
    }

    /// Index an arbitrary set of obstacles using `cell_size` buckets
    pub fn from_obstacles(obstacles: Vec<Obstacle>, cell_size: f32) -> Self {
        let cell_size = cell_size.max(1.0);
        let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();

        for (index, obstacle) in obstacles.iter().enumerate() {
            for cell in covered_cells(obstacle.hitbox(), cell_size) {
                cells.entry(cell).or_default().push(index);
            }
        }

        Self {
            cell_size,
            obstacles,
            cells,
        }
    }

    /// All obstacles overlapping `candidate`, in insertion order
    pub fn query(&self, candidate: Rect) -> impl Iterator<Item = &Obstacle> + '_ {
        let mut hits: Vec<usize> = covered_cells(candidate, self.cell_size)
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .copied()
            .collect();
        hits.sort_unstable();
        hits.dedup();

        hits.into_iter()
            .map(move |index| &self.obstacles[index])
            .filter(move |obstacle| obstacle.hitbox().overlaps(&candidate))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Default for ObstacleIndex {
    fn default() -> Self {
        Self::from_obstacles(Vec::new(), 1.0)
    }
}

/// Cells touched by the interior of `rect`. A right/bottom edge lying exactly
/// on a cell boundary does not reach into the next cell.
fn covered_cells(rect: Rect, cell_size: f32) -> impl Iterator<Item = (i64, i64)> {
    let min_col = (rect.left() / cell_size).floor() as i64;
    let min_row = (rect.top() / cell_size).floor() as i64;
    let max_col = ((rect.right() / cell_size).ceil() as i64 - 1).max(min_col);
    let max_row = ((rect.bottom() / cell_size).ceil() as i64 - 1).max(min_row);

    (min_row..=max_row).flat_map(move |row| (min_col..=max_col).map(move |col| (col, row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_yields_empty_index() {
        let grid: [&str; 0] = [];
        let index = ObstacleIndex::build(&grid, 64.0);
        assert!(index.is_empty());
        assert_eq!(index.query(Rect::new(0.0, 0.0, 1000.0, 1000.0)).count(), 0);
    }

    #[test]
    fn test_build_places_solid_cells() {
        let grid = ["x x", " p ", "  x"];
        let index = ObstacleIndex::build(&grid, 64.0);
        assert_eq!(index.len(), 3);

        let hitboxes: Vec<Rect> = index.iter().map(Obstacle::hitbox).collect();
        assert_eq!(hitboxes[0], Rect::new(0.0, 0.0, 64.0, 64.0));
        assert_eq!(hitboxes[1], Rect::new(128.0, 0.0, 64.0, 64.0));
        assert_eq!(hitboxes[2], Rect::new(128.0, 128.0, 64.0, 64.0));
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let grid = ["p?~", "abc"];
        let index = ObstacleIndex::build(&grid, 32.0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_query_returns_only_overlapping() {
        let grid = ["xxx", "x x", "xxx"];
        let index = ObstacleIndex::build(&grid, 64.0);

        // Center cell is open
        let inside = Rect::new(64.0, 64.0, 64.0, 64.0);
        assert_eq!(index.query(inside).count(), 0);

        // Nudge into the right wall
        let pushed = Rect::new(70.0, 64.0, 64.0, 64.0);
        let hits: Vec<Rect> = index.query(pushed).map(Obstacle::hitbox).collect();
        assert_eq!(hits, vec![Rect::new(128.0, 64.0, 64.0, 64.0)]);
    }

    #[test]
    fn test_query_unaligned_obstacles_without_duplicates() {
        let wide = Obstacle::new(Rect::new(10.0, 10.0, 100.0, 20.0));
        let index = ObstacleIndex::from_obstacles(vec![wide], 32.0);

        let hits: Vec<&Obstacle> = index.query(Rect::new(0.0, 0.0, 200.0, 200.0)).collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_query_negative_coordinates() {
        let obstacle = Obstacle::new(Rect::new(-40.0, -40.0, 32.0, 32.0));
        let index = ObstacleIndex::from_obstacles(vec![obstacle], 32.0);

        assert_eq!(index.query(Rect::new(-20.0, -20.0, 4.0, 4.0)).count(), 1);
        assert_eq!(index.query(Rect::new(0.0, 0.0, 4.0, 4.0)).count(), 0);
    }
}
