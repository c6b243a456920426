//! Food placement
//!
//! Food goes on a uniformly random free cell. Placement first samples random
//! cells and retries while the pick lands on the snake; after
//! [`SAMPLE_ATTEMPTS`] misses it enumerates the free cells and picks one of
//! those, so a nearly full grid still terminates quickly.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::snake::Snake;
use crate::types::{GridSize, Position};

/// Rejection-sampling attempts before falling back to enumeration
pub const SAMPLE_ATTEMPTS: usize = 64;

/// Pick a free cell for food, or `None` when the snake covers the grid.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if grid.width <= 0 || grid.height <= 0 || snake.len() >= grid.cell_count() {
        return None;
    }

    for _ in 0..SAMPLE_ATTEMPTS {
        let candidate = Position::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    grid.cells().filter(|&cell| !snake.occupies(cell)).choose(rng)
}
