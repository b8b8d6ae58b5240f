//! Core types shared by the grid, the transition rules and the agents

pub mod cell_state;

pub use cell_state::{CellState, AGENT_OVERLAY_CODE};
