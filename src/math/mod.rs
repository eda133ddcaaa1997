//! Math module
//!
//! 2D vector helpers and conversions between grid and pixel space.

pub mod coords;
pub mod vec2d;

pub use coords::{indices_to_pixels, pixels_to_indices, tile_center, HALF_TILE, TILE_SIZE};
pub use vec2d::{add, div, eq, mul, sub, Factor, Vec2d};
