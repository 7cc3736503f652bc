//! The 4x4 LED/button grid and the Lights-Out neighborhood operator.

use heapless::Vec;

/// Side length of the square button grid.
pub const GRID_DIM: usize = 4;

/// Number of cells in the grid.
pub const GRID_CELLS: usize = GRID_DIM * GRID_DIM;

/// The 16-cell boolean LED grid.
///
/// Cells are addressed by linear index `idx = row * 4 + col` with
/// `row, col < 4`. An out-of-range index is a programming error in the
/// caller and panics; it is never a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridState {
    cells: [bool; GRID_CELLS],
}

impl GridState {
    /// Creates a grid with all cells off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of one cell.
    ///
    /// # Panics
    /// Panics if `idx >= 16`.
    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < GRID_CELLS, "grid index out of range: {idx}");
        self.cells[idx]
    }

    /// Sets one cell.
    ///
    /// # Panics
    /// Panics if `idx >= 16`.
    pub fn set(&mut self, idx: usize, value: bool) {
        assert!(idx < GRID_CELLS, "grid index out of range: {idx}");
        self.cells[idx] = value;
    }

    /// Inverts one cell.
    ///
    /// # Panics
    /// Panics if `idx >= 16`.
    pub fn toggle(&mut self, idx: usize) {
        assert!(idx < GRID_CELLS, "grid index out of range: {idx}");
        self.cells[idx] = !self.cells[idx];
    }

    /// Sets all 16 cells to `value`.
    pub fn fill(&mut self, value: bool) {
        self.cells = [value; GRID_CELLS];
    }

    /// Iterates the indices of active cells in ascending order.
    pub fn active_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(idx, _)| idx)
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }
}

/// Footprint of a Lights-Out move: the cell itself plus its in-bounds
/// up/down/left/right neighbors, in ascending index order.
///
/// Diagonal and out-of-bounds neighbors are excluded, so corners yield 3
/// cells, edges 4, and interior cells 5.
///
/// # Panics
/// Panics if `idx >= 16`.
pub fn neighborhood(idx: usize) -> Vec<usize, 5> {
    assert!(idx < GRID_CELLS, "grid index out of range: {idx}");
    let row = (idx / GRID_DIM) as isize;
    let col = (idx % GRID_DIM) as isize;

    let mut cells = Vec::new();
    // Candidates in ascending index order: up, left, self, right, down.
    let candidates = [
        (row - 1, col),
        (row, col - 1),
        (row, col),
        (row, col + 1),
        (row + 1, col),
    ];
    for (r, c) in candidates {
        if (0..GRID_DIM as isize).contains(&r) && (0..GRID_DIM as isize).contains(&c) {
            // Capacity 5 always suffices for a cell plus 4 neighbors.
            let _ = cells.push((r * GRID_DIM as isize + c) as usize);
        }
    }
    cells
}
