use crate::error::{DefaultForestFireError, ForestFireErrorCode};
use crate::helpers::{handle_ffi_result, instance_from_ptr, with_sim_mut};
use crate::instance::ForestFireInstance;

/// Advance the simulation by `ticks` full ticks.
///
/// Each tick applies the cell transition, moves every agent and updates the
/// counters. `ticks == 0` only validates the pointer.
///
/// Thread-safe: holds the `RwLock` write lock for the whole batch.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `forest_fire_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_step(
    ptr: *const ForestFireInstance,
    ticks: u32,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;

        with_sim_mut(instance, |sim| {
            for _ in 0..ticks {
                sim.tick();
            }
        })?;

        Ok::<(), DefaultForestFireError>(())
    })
}
