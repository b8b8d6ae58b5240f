use crate::error::{with_last_error_mut, DefaultForestFireError, ForestFireError, ForestFireErrorCode};
use crate::instance::ForestFireInstance;
use forest_fire_core::Simulation;
use std::ffi::CString;
use tracing::debug;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl ForestFireError) {
    debug!(code = ?error.code(), "{}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ForestFireError) -> ForestFireErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ForestFireErrorCode::Ok;
    });
}

/// Run `func` and map its result onto the returned error code, recording
/// failures and clearing the last error on success.
pub(crate) fn handle_ffi_result<E, F>(func: F) -> ForestFireErrorCode
where
    E: ForestFireError,
    F: FnOnce() -> Result<(), E>,
{
    match func() {
        Ok(()) => {
            clear_last_error();
            ForestFireErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow an instance from a raw pointer handed out by `forest_fire_new`.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `forest_fire_new`.
pub(crate) unsafe fn instance_from_ptr<'a>(
    ptr: *const ForestFireInstance,
) -> Result<&'a ForestFireInstance, DefaultForestFireError> {
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultForestFireError::null_pointer("ptr"))
}

/// Write `value` through an out-parameter.
///
/// # Safety
/// `out` must be null or valid for writes.
pub(crate) unsafe fn write_out<T>(
    out: *mut T,
    name: &str,
    value: T,
) -> Result<(), DefaultForestFireError> {
    if out.is_null() {
        return Err(DefaultForestFireError::null_pointer(name));
    }
    unsafe {
        out.write(value);
    }
    Ok(())
}

/// Run `func` under the simulation read lock.
pub(crate) fn with_sim<F, T>(
    instance: &ForestFireInstance,
    func: F,
) -> Result<T, DefaultForestFireError>
where
    F: FnOnce(&Simulation) -> T,
{
    let sim = instance
        .sim
        .read()
        .map_err(|_| DefaultForestFireError::lock_poisoned("RwLock"))?;
    Ok(func(&sim))
}

/// Run `func` under the simulation write lock.
pub(crate) fn with_sim_mut<F, T>(
    instance: &ForestFireInstance,
    func: F,
) -> Result<T, DefaultForestFireError>
where
    F: FnOnce(&mut Simulation) -> T,
{
    let mut sim = instance
        .sim
        .write()
        .map_err(|_| DefaultForestFireError::lock_poisoned("RwLock"))?;
    Ok(func(&mut sim))
}
