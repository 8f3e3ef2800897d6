use super::Cell;
use crate::error::EngineError;
use rand::Rng;

/// Grid manages the 2D cellular automaton state on a torus.
/// Two equally sized buffers are kept at all times: `cells` (current
/// generation) and `next` (the generation being written). A step writes
/// only into `next` and finishes with an O(1) swap, so simultaneous
/// updates always read one consistent snapshot.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            next: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert wrapped 2D coordinates to a 1D index.
    /// Coordinates are taken modulo width/height (euclidean, so negative
    /// inputs wrap too); out-of-range is defined semantics, not an error.
    fn index_of(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        y * self.width + x
    }

    /// Get cell at position (toroidal wrap)
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index_of(x, y)]
    }

    /// Set cell at position on the current buffer (toroidal wrap)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.index_of(x, y);
        self.cells[idx] = cell;
    }

    /// Write a cell into the next-generation buffer
    pub fn set_next(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.index_of(x, y);
        self.next[idx] = cell;
    }

    /// Replace the whole next-generation buffer in one shot.
    /// Length must match the grid; internal callers always hand back a
    /// buffer of the right size.
    pub(crate) fn store_next(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.width * self.height);
        self.next = cells;
    }

    /// Swap current and next buffers in O(1); no element copy
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// On grids only one cell wide or tall, wrapped offsets can land back on
    /// the cell itself; those are skipped, so a cell is never its own
    /// neighbor.
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        let own = self.index_of(x, y);
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| self.index_of(x + dx, y + dy))
            .filter(|&idx| idx != own && self.cells[idx].is_alive())
            .count() as u8
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Randomize the current buffer, roughly one cell in three alive
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_ratio(1, 3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Iterate over all cells of the current buffer with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }

    /// Number of live cells in the current buffer
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
