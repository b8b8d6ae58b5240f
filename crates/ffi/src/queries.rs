use forest_fire_core::visual::compose_frame;
use std::slice;

use crate::error::{DefaultForestFireError, ForestFireErrorCode};
use crate::helpers::{handle_ffi_result, instance_from_ptr, with_sim, write_out};
use crate::instance::ForestFireInstance;

/// Grid cell coordinates of an agent.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestFirePosition {
    /// Column, 0 at the left edge.
    pub x: usize,
    /// Row, 0 at the top edge.
    pub y: usize,
}

impl From<(usize, usize)> for ForestFirePosition {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Snapshot of the run counters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestFireStats {
    /// Running vegetation estimate (sprouts minus burn-outs on top of the start count).
    pub trees_alive: i64,
    /// Cells that have burnt out to ground.
    pub trees_burnt: u64,
    /// Completed ticks.
    pub tick: u64,
}

/// Fill a caller buffer of `len` cell codes, one byte per cell in row-major order.
///
/// # Safety
/// `out` must be null or valid for `len` byte writes.
unsafe fn copy_codes(
    instance: &ForestFireInstance,
    out: *mut u8,
    len: usize,
    with_agents: bool,
) -> Result<(), DefaultForestFireError> {
    if out.is_null() {
        return Err(DefaultForestFireError::null_pointer("out_codes"));
    }

    with_sim(instance, |sim| {
        let required = sim.grid().states().len();
        if len < required {
            return Err(DefaultForestFireError::buffer_too_small(
                "out_codes", required, len,
            ));
        }

        // SAFETY: `out` is non-null and the caller guarantees `len >= required` bytes.
        let dest = unsafe { slice::from_raw_parts_mut(out, required) };
        if with_agents {
            dest.copy_from_slice(&compose_frame(&sim.view()));
        } else {
            for (slot, state) in dest.iter_mut().zip(sim.grid().states()) {
                *slot = state.code();
            }
        }
        Ok(())
    })?
}

/// Query the grid size in cells.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_width` and `out_height` must be
/// null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_dimensions(
    ptr: *const ForestFireInstance,
    out_width: *mut usize,
    out_height: *mut usize,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let (width, height) = with_sim(instance, |sim| sim.grid().dimensions())?;

        unsafe {
            write_out(out_width, "out_width", width)?;
            write_out(out_height, "out_height", height)?;
        }
        Ok::<(), DefaultForestFireError>(())
    })
}

/// Query the state code of one cell (0 ground, 1 tree, 2 sapling,
/// 3 ignition, 4 fire, 5 ember, 7 water).
///
/// Returns `ForestFireErrorCode::OutOfBounds` for coordinates outside the grid.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_code` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_state_at(
    ptr: *const ForestFireInstance,
    x: usize,
    y: usize,
    out_code: *mut u8,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let code = with_sim(instance, |sim| {
            let grid = sim.grid();
            grid.code_at(x, y).ok_or_else(|| {
                DefaultForestFireError::out_of_bounds(x, y, grid.width(), grid.height())
            })
        })??;

        unsafe { write_out(out_code, "out_code", code) }
    })
}

/// Copy every cell's state code into `out_codes` in row-major order
/// (`index = y * width + x`).
///
/// `len` is the capacity of `out_codes` and must be at least `width * height`.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_codes` must be null or valid
/// for `len` byte writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_copy_states(
    ptr: *const ForestFireInstance,
    out_codes: *mut u8,
    len: usize,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        unsafe { copy_codes(instance, out_codes, len, false) }
    })
}

/// Like `forest_fire_copy_states`, with agents painted on top: 6 for a
/// firefighter cell and 8 for the truck's 3x3 block.
///
/// # Safety
/// Same contract as `forest_fire_copy_states`.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_copy_frame(
    ptr: *const ForestFireInstance,
    out_codes: *mut u8,
    len: usize,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        unsafe { copy_codes(instance, out_codes, len, true) }
    })
}

/// Query the number of firefighters (the truck is not counted).
///
/// # Safety
/// `ptr` must be null or a live instance; `out_count` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_firefighter_count(
    ptr: *const ForestFireInstance,
    out_count: *mut usize,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let count = with_sim(instance, |sim| sim.crew().firefighters().len())?;

        unsafe { write_out(out_count, "out_count", count) }
    })
}

/// Copy firefighter positions into `out_positions`.
///
/// `capacity` is the length of `out_positions`. `out_written` receives the
/// number of positions written, or the required capacity when
/// `ForestFireErrorCode::BufferTooSmall` is returned.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_positions` must be null or
/// valid for `capacity` writes; `out_written` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_firefighter_positions(
    ptr: *const ForestFireInstance,
    out_positions: *mut ForestFirePosition,
    capacity: usize,
    out_written: *mut usize,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let positions: Vec<ForestFirePosition> = with_sim(instance, |sim| {
            sim.view()
                .firefighter_positions()
                .map(ForestFirePosition::from)
                .collect()
        })?;

        unsafe { write_out(out_written, "out_written", positions.len()) }?;
        if positions.is_empty() {
            return Ok(());
        }
        if out_positions.is_null() {
            return Err(DefaultForestFireError::null_pointer("out_positions"));
        }
        if capacity < positions.len() {
            return Err(DefaultForestFireError::buffer_too_small(
                "out_positions",
                positions.len(),
                capacity,
            ));
        }

        // SAFETY: non-null and the caller guarantees `capacity` slots.
        let dest = unsafe { slice::from_raw_parts_mut(out_positions, positions.len()) };
        dest.copy_from_slice(&positions);
        Ok(())
    })
}

/// Query the truck position.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_position` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_truck_position(
    ptr: *const ForestFireInstance,
    out_position: *mut ForestFirePosition,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let position = with_sim(instance, |sim| sim.crew().truck().position())?;

        unsafe { write_out(out_position, "out_position", position.into()) }
    })
}

/// Query the run counters.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_stats` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn forest_fire_stats(
    ptr: *const ForestFireInstance,
    out_stats: *mut ForestFireStats,
) -> ForestFireErrorCode {
    handle_ffi_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let stats = with_sim(instance, |sim| {
            let stats = sim.stats();
            ForestFireStats {
                trees_alive: stats.trees_alive,
                trees_burnt: stats.trees_burnt,
                tick: stats.tick,
            }
        })?;

        unsafe { write_out(out_stats, "out_stats", stats) }
    })
}
