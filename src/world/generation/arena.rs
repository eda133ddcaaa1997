//! Arena generator
//!
//! Builds the classic brick arena. The result only depends on the
//! dimensions, so the same call always yields the same grid.

use crate::world::{Grid, Tile};

/// The twelve cells opened as floor, three per interior corner:
/// the corner itself and its neighbours along both edges.
///
/// Entries repeat when the grid is too small for the pockets to be disjoint.
pub fn corner_pockets(width: usize, height: usize) -> [(usize, usize); 12] {
    let (right, bottom) = (width - 2, height - 2);
    [
        // Top left
        (1, 1),
        (1, 2),
        (2, 1),
        // Top right
        (right, 1),
        (right - 1, 1),
        (right, 2),
        // Bottom right
        (right, bottom),
        (right - 1, bottom),
        (right, bottom - 1),
        // Bottom left
        (1, bottom),
        (2, bottom),
        (1, bottom - 1),
    ]
}

/// Generate an arena of `width` columns by `height` rows.
///
/// Every cell starts as wall. Odd rows and odd columns inside the border
/// are turned into brick, which leaves a wall pillar wherever both
/// coordinates are even. Finally the corner pockets are opened.
///
/// With a width or height of exactly 3 the pockets reach the border and
/// open it.
///
/// # Panics
///
/// Panics if `width` or `height` is less than 3.
pub fn create_map(width: usize, height: usize) -> Grid {
    let mut grid = Grid::filled(width, height, Tile::Wall);

    for x in 1..width - 1 {
        for y in (1..height - 1).step_by(2) {
            grid.set(x, y, Tile::Brick);
        }
    }

    for x in (1..width - 1).step_by(2) {
        for y in 1..height - 1 {
            grid.set(x, y, Tile::Brick);
        }
    }

    for (x, y) in corner_pockets(width, height) {
        grid.set(x, y, Tile::Floor);
    }

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Generated {}x{} arena ({} brick, {} floor)",
            width,
            height,
            grid.count(Tile::Brick),
            grid.count(Tile::Floor)
        );
    }

    grid
}
