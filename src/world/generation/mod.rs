//! Procedural map generation
//!
//! Fixed-pattern arenas: a wall border, a lattice of wall pillars, bricks
//! everywhere else and a small open pocket at each playable corner.

pub mod arena;

pub use arena::{corner_pockets, create_map};
