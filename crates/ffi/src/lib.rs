//! C ABI for the forest fire simulation.
//!
//! Every entry point returns a `ForestFireErrorCode`; on failure the message is
//! kept per thread and read back with `forest_fire_get_last_error()`. The C
//! header `ForestFireFFI.h` is generated at build time.

mod error;
mod helpers;
mod instance;
mod queries;
mod simulation;

pub use error::{forest_fire_get_last_error, forest_fire_get_last_error_code, ForestFireErrorCode};
pub use instance::{
    forest_fire_default_config, forest_fire_destroy, forest_fire_new, ForestFireConfig,
    ForestFireInstance,
};
pub use queries::{
    forest_fire_copy_frame, forest_fire_copy_states, forest_fire_dimensions,
    forest_fire_firefighter_count, forest_fire_firefighter_positions, forest_fire_state_at,
    forest_fire_stats, forest_fire_truck_position, ForestFirePosition, ForestFireStats,
};
pub use simulation::forest_fire_step;
