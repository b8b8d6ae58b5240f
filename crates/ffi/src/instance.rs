use forest_fire_core::{Simulation, SimulationConfig};
use std::ptr;
use std::sync::RwLock;

use crate::error::{DefaultForestFireError, ForestFireErrorCode};
use crate::helpers::{clear_last_error, track_error};

/// C-compatible mirror of `SimulationConfig`.
///
/// `seed == 0` draws a seed from entropy. Runs driven through the FFI are
/// unbounded; the caller decides how many ticks to step.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestFireConfig {
    /// World width in world units.
    pub world_width: u32,
    /// World height in world units.
    pub world_height: u32,
    /// World units per grid cell.
    pub cell_pitch: u32,
    /// Probability that a cell starts as a tree (0-1).
    pub tree_density: f64,
    /// Number of random initial ignitions.
    pub initial_fires: u32,
    /// Number of firefighters (the truck is always added).
    pub firefighter_count: u32,
    /// Firefighter suppression radius in cells.
    pub firefighter_radius: u32,
    /// Truck suppression radius in cells.
    pub truck_radius: u32,
    /// Display pacing hint in ticks per second.
    pub tick_rate: f32,
    /// RNG seed, 0 for entropy.
    pub seed: u64,
}

impl From<&SimulationConfig> for ForestFireConfig {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            world_width: config.world_width,
            world_height: config.world_height,
            cell_pitch: config.cell_pitch,
            tree_density: config.tree_density,
            initial_fires: saturate_u32(config.initial_fires),
            firefighter_count: saturate_u32(config.firefighter_count),
            firefighter_radius: saturate_u32(config.firefighter_radius),
            truck_radius: saturate_u32(config.truck_radius),
            tick_rate: config.tick_rate,
            seed: config.seed.unwrap_or(0),
        }
    }
}

impl From<&ForestFireConfig> for SimulationConfig {
    fn from(config: &ForestFireConfig) -> Self {
        Self {
            world_width: config.world_width,
            world_height: config.world_height,
            cell_pitch: config.cell_pitch,
            tree_density: config.tree_density,
            initial_fires: config.initial_fires as usize,
            firefighter_count: config.firefighter_count as usize,
            firefighter_radius: config.firefighter_radius as usize,
            truck_radius: config.truck_radius as usize,
            max_ticks: None,
            tick_rate: config.tick_rate,
            seed: (config.seed != 0).then_some(config.seed),
        }
    }
}

fn saturate_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// The forest fire simulation context.
///
/// # Thread Safety
/// The simulation sits behind an `RwLock`: queries take the read lock and
/// `forest_fire_step` takes the write lock, so one instance can be shared
/// between a render thread and an update thread.
///
/// ```cpp
/// ForestFireConfig config = forest_fire_default_config();
/// config.seed = 42;
///
/// ForestFireInstance* sim = nullptr;
/// if (forest_fire_new(&config, &sim) != Ok) {
///     fprintf(stderr, "%s\n", forest_fire_get_last_error());
///     return;
/// }
/// forest_fire_step(sim, 1);
/// forest_fire_destroy(sim);
/// ```
pub struct ForestFireInstance {
    pub(crate) sim: RwLock<Simulation>,
}

impl ForestFireInstance {
    pub(crate) fn new(config: &ForestFireConfig) -> Result<Box<Self>, DefaultForestFireError> {
        let sim = Simulation::new(SimulationConfig::from(config))
            .map_err(|e| DefaultForestFireError::invalid_config(&e))?;

        Ok(Box::new(Self {
            sim: RwLock::new(sim),
        }))
    }
}

/// Default configuration: a 128x128 grid at 50% density with 5 fires,
/// 8 firefighters (radius 5) and a truck (radius 11), seeded from entropy.
#[no_mangle]
pub extern "C" fn forest_fire_default_config() -> ForestFireConfig {
    ForestFireConfig::from(&SimulationConfig::default())
}

/// Create a new simulation and return it via out-parameter.
///
/// Returns
/// - `ForestFireErrorCode::Ok` (0) with a valid instance in `out_instance`
/// - `ForestFireErrorCode::NullPointer` if `config` or `out_instance` is null
/// - `ForestFireErrorCode::InvalidConfig` if the configuration is rejected
///
/// On failure `out_instance` is set to null and `forest_fire_get_last_error()`
/// describes the problem.
///
/// # Safety
///
/// - `config` must be null or point to a readable `ForestFireConfig`.
/// - `out_instance` must be null or valid for writes.
/// - The caller owns the returned instance and MUST call `forest_fire_destroy`
///   exactly once.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_new(
    config: *const ForestFireConfig,
    out_instance: *mut *mut ForestFireInstance,
) -> ForestFireErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultForestFireError::null_pointer("out_instance"));
    }

    let Some(config) = (unsafe { config.as_ref() }) else {
        unsafe {
            *out_instance = ptr::null_mut();
        }
        return track_error(&DefaultForestFireError::null_pointer("config"));
    };

    match ForestFireInstance::new(config) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            clear_last_error();
            ForestFireErrorCode::Ok
        }
        Err(error) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            track_error(&error)
        }
    }
}

/// Destroys an instance previously created by `forest_fire_new`.
///
/// A null `ptr` is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `forest_fire_new`.
/// - The pointer MUST NOT have been freed already.
/// - The caller must not use the pointer again afterwards.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_destroy(ptr: *mut ForestFireInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: the pointer came from `Box::into_raw` in `forest_fire_new`
    // and has not been freed.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
