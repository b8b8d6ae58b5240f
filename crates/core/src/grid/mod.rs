//! Grid storage: row-major cell buffers and the double-buffered forest grid

pub mod cell_buffer;
pub mod forest_grid;

// Re-export main types
pub use cell_buffer::{CellBuffer, MOORE_OFFSETS};
pub use forest_grid::ForestGrid;
