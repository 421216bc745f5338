use rand::{seq::IteratorRandom, Rng};

use crate::geometry::Grid;
use crate::snake::Snake;
use crate::Coords;

/// Draws rejected before switching to a scan of the free cells.
const MAX_REJECTIONS: usize = 64;

/// Picks a random interior cell not covered by the snake.
///
/// Returns `None` once the snake fills the whole interior.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, grid: Grid, rng: &mut R) -> Option<Coords> {
    if snake.len() >= grid.interior_len() {
        return None;
    }

    for _ in 0..MAX_REJECTIONS {
        let candidate = (rng.gen_range(1..grid.width - 1), rng.gen_range(1..grid.height - 1));
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    grid.interior_cells().filter(|pos| !snake.contains(*pos)).choose(rng)
}
