//! The seam between the simulation loop and the outside world
//!
//! Rendering, event polling and pacing live outside the engine. The loop calls
//! them only between ticks, never during rule evaluation.

use super::SimulationStats;
use crate::core_types::CellState;
use crate::grid::ForestGrid;
use crate::suppression::{Agent, Crew};
use std::time::Duration;

/// Read-only view of one frame, handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub(crate) grid: &'a ForestGrid,
    pub(crate) crew: &'a Crew,
    pub(crate) stats: &'a SimulationStats,
}

impl<'a> FrameView<'a> {
    /// `(width, height)` in cells
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Cell state at `(x, y)`, `None` off the grid
    pub fn state_at(&self, x: usize, y: usize) -> Option<CellState> {
        self.grid.state_at(x, y)
    }

    /// Renderer code at `(x, y)`, `None` off the grid
    pub fn code_at(&self, x: usize, y: usize) -> Option<u8> {
        self.grid.code_at(x, y)
    }

    /// Whole grid in row-major order
    pub fn states(&self) -> &'a [CellState] {
        self.grid.states()
    }

    /// Firefighter positions in list order
    pub fn firefighter_positions(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.crew.firefighters().iter().map(Agent::position)
    }

    /// Truck position
    pub fn truck_position(&self) -> (usize, usize) {
        self.crew.truck().position()
    }

    /// Counters at the time of the frame
    pub fn stats(&self) -> &'a SimulationStats {
        self.stats
    }
}

/// Callbacks invoked by `Simulation::run`
///
/// Every method has a no-op default, so a headless run needs none of them.
pub trait SimulationHooks {
    /// Draw the frame before the tick is applied
    fn render(&mut self, _frame: &FrameView<'_>) {}

    /// Wait after a tick; `interval` comes from the configured tick rate
    fn pace(&mut self, _interval: Duration) {}

    /// Polled after every tick; returning `true` stops the run
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Hooks that do nothing: run flat out until `max_ticks`
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl SimulationHooks for Headless {}
