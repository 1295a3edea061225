use crate::Coords;
use crate::grid::{cell_to_pixel, COLS, ROWS};

use rand::Rng;

/// Picks food cells uniformly over the whole board. Cells under the snake
/// are not excluded.
pub struct FoodSpawner<R> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        FoodSpawner { rng }
    }

    pub fn spawn(&mut self) -> Coords {
        let col = self.rng.gen_range(0..COLS);
        let row = self.rng.gen_range(0..ROWS);
        cell_to_pixel(col, row)
    }
}
