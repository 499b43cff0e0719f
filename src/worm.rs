use crate::grid::{Cell, Direction};

/// One occupied cell of the worm. `prev` is where the block stood before
/// the last tick and is only used to interpolate its draw position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridBlock {
    pub cell: Cell,
    pub prev: Cell,
}

impl GridBlock {
    pub fn new(cell: Cell) -> Self {
        Self { cell, prev: cell }
    }

    pub fn set_location(&mut self, cell: Cell) {
        self.prev = self.cell;
        self.cell = cell;
    }

    /// Position in tile units, `progress` of the way from `prev` to `cell`.
    pub fn draw_position(&self, progress: f32) -> (f32, f32) {
        let t = progress.clamp(0.0, 1.0);
        let x = self.prev.col as f32 + (self.cell.col - self.prev.col) as f32 * t;
        let y = self.prev.row as f32 + (self.cell.row - self.prev.row) as f32 * t;
        (x, y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// Result of shifting the body one cell along its own path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shift {
    pub old_tail: Cell,
    pub self_collision: bool,
}

/// Segments stored head first; index 0 is the head.
#[derive(Clone, Debug)]
pub struct Worm {
    blocks: Vec<GridBlock>,
}

impl Worm {
    /// Lays the worm out straight, head at `head`, body trailing opposite
    /// to `heading`.
    pub fn spawn(head: Cell, length: usize, heading: Direction) -> Self {
        let length = length.max(1);
        let behind = heading.opposite();
        let mut blocks = Vec::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            blocks.push(GridBlock::new(cell));
            cell = cell.step(behind);
        }
        Self { blocks }
    }

    /// Builds a worm from explicit cells, head first. `None` if empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let blocks: Vec<GridBlock> = cells.into_iter().map(GridBlock::new).collect();
        if blocks.is_empty() { None } else { Some(Self { blocks }) }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.blocks[0].cell
    }

    pub fn tail(&self) -> Cell {
        self.blocks[self.blocks.len() - 1].cell
    }

    pub fn blocks(&self) -> &[GridBlock] {
        &self.blocks
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocks.iter().map(|b| b.cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.blocks.iter().any(|b| b.cell == cell)
    }

    /// Alternating body colours; the head shares the light shade.
    pub fn shade(index: usize) -> Shade {
        if index % 2 == 1 { Shade::Dark } else { Shade::Light }
    }

    /// Moves every non-head block onto the cell the block ahead of it held
    /// before this call, walking from the tail toward index 1. Blocks past
    /// index 1 landing on `head_target` flag a self-collision.
    pub fn shift_body(&mut self, head_target: Cell) -> Shift {
        let old_tail = self.tail();
        let mut self_collision = false;
        for i in (1..self.blocks.len()).rev() {
            let ahead = self.blocks[i - 1].cell;
            self.blocks[i].set_location(ahead);
            if i > 1 && self.blocks[i].cell == head_target {
                self_collision = true;
            }
        }
        Shift { old_tail, self_collision }
    }

    /// Appends a tail block that starts and stays at `at` for this tick.
    pub fn grow(&mut self, at: Cell) {
        self.blocks.push(GridBlock::new(at));
    }

    pub fn move_head(&mut self, to: Cell) {
        self.blocks[0].set_location(to);
    }

    /// True when two segments share a cell.
    pub fn overlaps_itself(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.blocks.len());
        !self.blocks.iter().all(|b| seen.insert(b.cell))
    }
}
