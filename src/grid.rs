/// A square on the board. `-1` and `num_tiles` are representable so an
/// out-of-bounds head can be detected after it moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self { col: self.col + d_col, row: self.row + d_row }
    }

    pub fn in_bounds(self, num_tiles: i32) -> bool {
        self.col >= 0 && self.row >= 0 && self.col < num_tiles && self.row < num_tiles
    }

    /// True when the cell sits exactly on the ring just outside the board.
    pub fn on_boundary_ring(self, num_tiles: i32) -> bool {
        self.col == -1 || self.row == -1 || self.col == num_tiles || self.row == num_tiles
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Polling order for held arrow keys.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(d_row, d_col)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_row_and_col_deltas() {
        let c = Cell::new(4, 4);
        assert_eq!(c.step(Direction::Right), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Left), Cell::new(3, 4));
        assert_eq!(c.step(Direction::Up), Cell::new(4, 3));
        assert_eq!(c.step(Direction::Down), Cell::new(4, 5));
    }

    #[test]
    fn reversal_is_symmetric_and_only_for_opposites() {
        for d in Direction::ALL {
            assert!(d.is_reverse_of(d.opposite()));
            assert!(d.opposite().is_reverse_of(d));
            assert!(!d.is_reverse_of(d));
        }
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
    }

    #[test]
    fn boundary_ring_matches_minus_one_and_num_tiles() {
        assert!(Cell::new(-1, 3).on_boundary_ring(8));
        assert!(Cell::new(3, 8).on_boundary_ring(8));
        assert!(!Cell::new(0, 7).on_boundary_ring(8));
        assert!(Cell::new(7, 7).in_bounds(8));
        assert!(!Cell::new(8, 0).in_bounds(8));
    }
}
