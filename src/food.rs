use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::grid::Cell;
use crate::worm::Worm;

/// Rejection-sampling attempts before falling back to scanning free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn set_location(&mut self, cell: Cell) {
        self.cell = cell;
    }
}

/// Picks a uniformly random cell of the `num_tiles`² board that no worm
/// segment occupies. Returns `None` only when the worm fills the board.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, num_tiles: i32, worm: &Worm) -> Option<Cell> {
    if num_tiles <= 0 {
        return None;
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = Cell::new(rng.gen_range(0..num_tiles), rng.gen_range(0..num_tiles));
        if !worm.contains(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = (0..num_tiles)
        .flat_map(|row| (0..num_tiles).map(move |col| Cell::new(col, row)))
        .filter(|c| !worm.contains(*c))
        .collect();
    warn!(
        free = free.len(),
        worm_len = worm.len(),
        "food placement fell back to free-cell scan"
    );
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_lands_on_the_worm() {
        let mut rng = StdRng::seed_from_u64(7);
        let worm = Worm::spawn(Cell::new(2, 2), 3, Direction::Right);
        for _ in 0..500 {
            let cell = place_food(&mut rng, 4, &worm).unwrap();
            assert!(cell.in_bounds(4));
            assert!(!worm.contains(cell));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        // Snake the worm through every cell of a 3x3 board except (2,2).
        let worm = Worm::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
        ])
        .unwrap();
        assert_eq!(place_food(&mut rng, 3, &worm), Some(Cell::new(2, 2)));
    }

    #[test]
    fn full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let worm = Worm::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ])
        .unwrap();
        assert_eq!(place_food(&mut rng, 2, &worm), None);
    }
}
