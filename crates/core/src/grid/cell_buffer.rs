//! Row-major storage for one generation of cell states

use crate::core_types::CellState;

/// 8-connected Moore neighborhood, in the order neighbor queries report cells
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One generation of the grid
///
/// Stores cell states as a flat `Vec<CellState>` in row-major order
/// (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    data: Vec<CellState>,
    width: usize,
    height: usize,
}

impl CellBuffer {
    /// Create a buffer of `Ground` cells
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_value(width, height, CellState::Ground)
    }

    /// Create a buffer with every cell set to `state`
    #[must_use]
    pub fn with_value(width: usize, height: usize, state: CellState) -> Self {
        Self {
            data: vec![state; width * height],
            width,
            height,
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get reference to the cell states
    #[must_use]
    pub fn as_slice(&self) -> &[CellState] {
        &self.data
    }

    /// Get mutable reference to the cell states
    pub fn as_mut_slice(&mut self) -> &mut [CellState] {
        &mut self.data
    }

    /// Flat index of `(x, y)`
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether `(x, y)` lies on the grid
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Apply a signed offset to `(x, y)`, `None` when the result leaves the grid
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Get state at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> CellState {
        assert!(self.in_bounds(x, y), "Coordinates out of bounds");
        self.data[self.index_of(x, y)]
    }

    /// Set state at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        assert!(self.in_bounds(x, y), "Coordinates out of bounds");
        let idx = self.index_of(x, y);
        self.data[idx] = state;
    }

    /// Fill the whole buffer with one state
    pub fn fill(&mut self, state: CellState) {
        self.data.fill(state);
    }

    /// In-bounds Moore neighbors of `(x, y)` whose state equals `state`
    ///
    /// Edges are clipped: a corner cell has at most three neighbors, there is no
    /// wraparound.
    pub fn neighbors_of_type(&self, state: CellState, x: usize, y: usize) -> Vec<(usize, usize)> {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(x, y, dx, dy))
            .filter(|&(nx, ny)| self.data[self.index_of(nx, ny)] == state)
            .collect()
    }

    /// Number of in-bounds Moore neighbors of `(x, y)` in `state`
    pub fn count_neighbors_of_type(&self, state: CellState, x: usize, y: usize) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(x, y, dx, dy))
            .filter(|&(nx, ny)| self.data[self.index_of(nx, ny)] == state)
            .count()
    }

    /// Whether any Moore neighbor of `(x, y)` is in `state`
    pub fn has_neighbor_of_type(&self, state: CellState, x: usize, y: usize) -> bool {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(x, y, dx, dy))
            .any(|(nx, ny)| self.data[self.index_of(nx, ny)] == state)
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.data.iter().filter(|&&s| s == state).count()
    }
}
