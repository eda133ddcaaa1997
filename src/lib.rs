//! Bombgrid - arena generation and grid math for a tile-based bomb game
//!
//! Builds the fixed brick-and-pillar arena and converts between grid
//! indices and pixel positions.

pub mod config;
pub mod math;
pub mod world;

// Re-export commonly used types
pub use math::{indices_to_pixels, pixels_to_indices, Factor, Vec2d};
pub use world::{create_map, Grid, Tile};
