//! Tile definitions
//!
//! The three kinds of cell a generated map is made of.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    /// Open ground
    Floor,
    /// Indestructible wall (border and pillars)
    #[default]
    Wall,
    /// Destructible block
    Brick,
}

impl Tile {
    /// Every tile variant, in declaration order
    pub const ALL: [Tile; 3] = [Tile::Floor, Tile::Wall, Tile::Brick];

    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor)
    }

    pub fn is_destructible(&self) -> bool {
        matches!(self, Tile::Brick)
    }

    /// Character used by the text dump of a grid
    pub fn glyph(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Brick => '%',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tile::Floor => "floor",
            Tile::Wall => "wall",
            Tile::Brick => "brick",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
