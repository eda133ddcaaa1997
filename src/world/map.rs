//! Grid data structure
//!
//! The 2D array of tiles representing a level, stored column-major so that
//! `grid[x][y]` reads column `x`, row `y`.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::Tile;
use crate::math::{pixels_to_indices, Vec2d};

/// A generated level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    columns: Vec<Vec<Tile>>,
}

/// Unchecked serialized form of a [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    columns: Vec<Vec<Tile>>,
}

/// A serialized grid whose columns disagree with its dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid has {found} columns, expected {expected}")]
    ColumnCount { expected: usize, found: usize },
    #[error("Column {column} has {found} rows, expected {expected}")]
    ColumnHeight {
        column: usize,
        expected: usize,
        found: usize,
    },
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.columns.len() != raw.width {
            return Err(GridError::ColumnCount {
                expected: raw.width,
                found: raw.columns.len(),
            });
        }
        if let Some((column, c)) = raw
            .columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != raw.height)
        {
            return Err(GridError::ColumnHeight {
                column,
                expected: raw.height,
                found: c.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            columns: raw.columns,
        })
    }
}

impl Grid {
    /// Create a new grid filled with `fill`
    pub(crate) fn filled(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            columns: vec![vec![fill; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All columns, each holding `height` tiles
    pub fn columns(&self) -> &[Vec<Tile>] {
        &self.columns
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get tile at position
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.columns[x][y])
        } else {
            None
        }
    }

    /// Set tile at position.
    ///
    /// Panics when the position is outside the grid.
    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.columns[x][y] = tile;
    }

    /// Look up the tile under a pixel-space point
    pub fn tile_at_pixel(&self, point: Vec2d) -> Option<Tile> {
        let index = pixels_to_indices(point);
        // Also rejects NaN, which would otherwise cast to 0
        if !(index.x >= 0.0 && index.y >= 0.0) {
            return None;
        }
        self.get(index.x as usize, index.y as usize)
    }

    /// Iterate over every cell as `(x, y, tile)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, column)| {
            column.iter().enumerate().map(move |(y, tile)| (x, y, *tile))
        })
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.iter().filter(|(_, _, t)| *t == tile).count()
    }
}

impl Index<usize> for Grid {
    type Output = [Tile];

    fn index(&self, x: usize) -> &[Tile] {
        &self.columns[x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for column in &self.columns {
                write!(f, "{}", column[y].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::filled(4, 3, Tile::Wall);
        grid.set(1, 1, Tile::Floor);
        grid.set(2, 1, Tile::Brick);
        grid
    }

    #[test]
    fn test_dimensions() {
        let grid = sample_grid();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.columns().len(), 4);
        assert!(grid.columns().iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_index_is_column_then_row() {
        let grid = sample_grid();
        assert_eq!(grid[1][1], Tile::Floor);
        assert_eq!(grid[2][1], Tile::Brick);
        assert_eq!(grid[1][2], Tile::Wall);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample_grid();
        assert_eq!(grid.get(3, 2), Some(Tile::Wall));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.in_bounds(4, 0));
    }

    #[test]
    fn test_count_and_iter() {
        let grid = sample_grid();
        assert_eq!(grid.iter().count(), 12);
        assert_eq!(grid.count(Tile::Floor), 1);
        assert_eq!(grid.count(Tile::Brick), 1);
        assert_eq!(grid.count(Tile::Wall), 10);
    }

    #[test]
    fn test_display_renders_rows() {
        let grid = sample_grid();
        assert_eq!(grid.to_string(), "####\n#.%#\n####\n");
    }

    #[test]
    fn test_tile_at_pixel() {
        let grid = sample_grid();
        assert_eq!(grid.tile_at_pixel(Vec2d::new(96.0, 96.0)), Some(Tile::Floor));
        assert_eq!(grid.tile_at_pixel(Vec2d::new(128.0, 127.9)), Some(Tile::Brick));
        assert_eq!(grid.tile_at_pixel(Vec2d::new(-1.0, 10.0)), None);
        assert_eq!(grid.tile_at_pixel(Vec2d::new(256.0, 10.0)), None);
        assert_eq!(grid.tile_at_pixel(Vec2d::new(f64::NAN, f64::NAN)), None);
        assert_eq!(grid.tile_at_pixel(Vec2d::new(96.0, f64::NAN)), None);
        assert_eq!(grid.tile_at_pixel(Vec2d::new(f64::INFINITY, 96.0)), None);
    }

    #[test]
    fn test_json_round_trip() {
        let grid = sample_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_deserialize_rejects_wrong_column_count() {
        let result = serde_json::from_str::<Grid>(r#"{"width":2,"height":5,"columns":[[]]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Grid has 1 columns, expected 2"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_short_column() {
        let json = r#"{"width":2,"height":2,"columns":[["wall","wall"],["wall"]]}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err().to_string();
        assert!(err.contains("Column 1 has 1 rows, expected 2"), "{}", err);
    }
}
