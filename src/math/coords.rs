//! Grid/pixel coordinate conversions
//!
//! Every tile is `TILE_SIZE` pixels square.

use super::vec2d::Vec2d;

/// Edge length of a tile in pixels
pub const TILE_SIZE: f64 = 64.0;

/// Offset from a tile's corner to its center
pub const HALF_TILE: f64 = TILE_SIZE / 2.0;

/// Pixel position of the center of the tile at grid index `v`
pub fn indices_to_pixels(v: Vec2d) -> Vec2d {
    v.map(|c| c * TILE_SIZE + HALF_TILE)
}

/// Grid index of the tile containing pixel `v`.
///
/// Floors the raw coordinate, so it is only an inverse of
/// [`indices_to_pixels`] for whole-number indices.
pub fn pixels_to_indices(v: Vec2d) -> Vec2d {
    v.map(|c| (c / TILE_SIZE).floor())
}

/// Pixel center of the tile at column `x`, row `y`
pub fn tile_center(x: usize, y: usize) -> Vec2d {
    indices_to_pixels(Vec2d::new(x as f64, y as f64))
}
