//! World module
//!
//! Contains the grid data structure, tiles, and map generation.

pub mod map;
pub mod tile;
pub mod generation;

pub use map::{Grid, GridError};
pub use tile::Tile;
pub use generation::{corner_pockets, create_map};
