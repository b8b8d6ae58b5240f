//! Forest Fire Simulation Core Library
//!
//! A cellular-automaton wildfire on a discrete grid, fought by autonomous
//! firefighters and a fire truck.
//!
//! ## Engine layout
//!
//! - `core_types`: the closed set of cell states
//! - `grid`: double-buffered cell storage and neighbor queries
//! - `solver`: the ordered per-tick transition rules
//! - `suppression`: agents, water suppression and the movement heuristic
//! - `simulation`: configuration, counters and the run loop
//! - `visual`: color table and agent overlay for external renderers
//!
//! ```rust,ignore
//! use forest_fire_core::{Headless, Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::default())?;
//! sim.run(&mut Headless);
//! println!("{} trees burnt", sim.stats().trees_burnt);
//! ```

pub mod core_types;
pub mod grid;
pub mod simulation;
pub mod solver;
pub mod suppression;
pub mod visual;

// Re-export core types
pub use core_types::{CellState, AGENT_OVERLAY_CODE};
pub use grid::{CellBuffer, ForestGrid};
pub use solver::{step_transition, TickReport};
pub use suppression::{find_move_target, Agent, AgentKind, Crew};

// Re-export the run API
pub use simulation::{
    ConfigError, CounterSeries, FrameView, Headless, Simulation, SimulationConfig,
    SimulationHooks, SimulationStats,
};
