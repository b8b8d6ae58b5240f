//! Double-buffered forest grid
//!
//! A tick reads the *current* buffer and writes the *next* buffer; `commit` swaps
//! them so the freshly written generation becomes current and the old one is
//! reused as scratch space.

use super::CellBuffer;
use crate::core_types::CellState;
use rand::Rng;
use tracing::debug;

/// Forest grid with current/next ping-pong buffers
#[derive(Debug, Clone)]
pub struct ForestGrid {
    current: CellBuffer,
    next: CellBuffer,
}

impl ForestGrid {
    /// Create a grid of `Ground` cells
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: CellBuffer::new(width, height),
            next: CellBuffer::new(width, height),
        }
    }

    /// Create a randomly planted forest with initial fires
    ///
    /// Each cell is independently a `Tree` with probability `tree_density`
    /// (Bernoulli sampling, the exact fraction is not guaranteed). Then
    /// `fire_count` cells are picked uniformly with replacement and forced to
    /// `Ignition`, so two picks may land on the same cell.
    ///
    /// `tree_density` must lie in `[0, 1]`; `SimulationConfig::validate` checks
    /// this before a grid is built.
    pub fn random_forest<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        tree_density: f64,
        fire_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::new(width, height);
        if width == 0 || height == 0 {
            return grid;
        }

        for cell in grid.current.as_mut_slice() {
            if rng.random_bool(tree_density) {
                *cell = CellState::Tree;
            }
        }

        for _ in 0..fire_count {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            debug!("Initial fire at ({}, {})", x, y);
            grid.current.set(x, y, CellState::Ignition);
        }

        grid
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// `(width, height)` in cells
    pub fn dimensions(&self) -> (usize, usize) {
        (self.current.width(), self.current.height())
    }

    /// State of the current generation at `(x, y)`, `None` off the grid
    pub fn state_at(&self, x: usize, y: usize) -> Option<CellState> {
        self.current
            .in_bounds(x, y)
            .then(|| self.current.get(x, y))
    }

    /// Renderer code at `(x, y)`, `None` off the grid
    pub fn code_at(&self, x: usize, y: usize) -> Option<u8> {
        self.state_at(x, y).map(CellState::code)
    }

    /// Overwrite a cell of the current generation
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        self.current.set(x, y, state);
    }

    /// Moore neighbors of `(x, y)` in `state`, clipped at the grid edge
    pub fn neighbors_of_type(&self, state: CellState, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.current.neighbors_of_type(state, x, y)
    }

    /// Number of Moore neighbors of `(x, y)` in `state`
    pub fn count_neighbors_of_type(&self, state: CellState, x: usize, y: usize) -> usize {
        self.current.count_neighbors_of_type(state, x, y)
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.current.count(state)
    }

    /// Number of cells counted as living vegetation
    pub fn vegetation_count(&self) -> usize {
        self.current
            .as_slice()
            .iter()
            .filter(|s| s.is_vegetation())
            .count()
    }

    /// Current generation in row-major order
    pub fn states(&self) -> &[CellState] {
        self.current.as_slice()
    }

    /// Current generation buffer
    pub fn current(&self) -> &CellBuffer {
        &self.current
    }

    /// Read the current buffer while writing the next one
    pub(crate) fn split_mut(&mut self) -> (&CellBuffer, &mut CellBuffer) {
        (&self.current, &mut self.next)
    }

    /// Make the next generation current
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
