use crate::Coords;

pub const ROWS: i32 = 25;
pub const COLS: i32 = 25;
pub const TILE_SIZE: i32 = 25;

pub const BOARD_WIDTH: i32 = TILE_SIZE * COLS;
pub const BOARD_HEIGHT: i32 = TILE_SIZE * ROWS;

/// Where a fresh snake appears, in pixels.
pub const START_POS: Coords = (5 * TILE_SIZE, 5 * TILE_SIZE);

pub fn cell_to_pixel(col: i32, row: i32) -> Coords {
    (col * TILE_SIZE, row * TILE_SIZE)
}

/// Floors towards negative infinity, so `-1` maps to column `-1`, not `0`.
pub fn pixel_to_cell(pos: Coords) -> (i32, i32) {
    (pos.0.div_euclid(TILE_SIZE), pos.1.div_euclid(TILE_SIZE))
}

pub fn in_bounds(pos: Coords) -> bool {
    (0..BOARD_WIDTH).contains(&pos.0) && (0..BOARD_HEIGHT).contains(&pos.1)
}
