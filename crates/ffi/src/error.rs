use forest_fire_core::ConfigError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - the error code passed across the FFI boundary
/// - `msg()` - the diagnostic message kept in thread-local storage
pub(crate) trait ForestFireError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> ForestFireErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default `ForestFireError` carrying a code and a formatted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultForestFireError {
    code: ForestFireErrorCode,
    msg: String,
}

impl DefaultForestFireError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ForestFireErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: ForestFireErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for a configuration rejected by the core library.
    pub fn invalid_config(error: &ConfigError) -> Self {
        Self {
            code: ForestFireErrorCode::InvalidConfig,
            msg: format!("Invalid configuration: {error}"),
        }
    }

    /// Create error for a cell query outside the grid.
    pub fn out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            code: ForestFireErrorCode::OutOfBounds,
            msg: format!("Cell ({x}, {y}) is outside the {width}x{height} grid"),
        }
    }

    /// Create error for a caller buffer that cannot hold the result.
    pub fn buffer_too_small(param_name: &str, required: usize, provided: usize) -> Self {
        Self {
            code: ForestFireErrorCode::BufferTooSmall,
            msg: format!("Buffer '{param_name}' holds {provided} entries, {required} required"),
        }
    }
}

impl ForestFireError for DefaultForestFireError {
    fn code(&self) -> ForestFireErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by forest fire functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestFireErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// The configuration was rejected (zero pitch, empty grid, density outside 0-1,
    /// zero radius or a non-positive tick rate).
    InvalidConfig = 3,

    /// Cell coordinates outside the grid.
    OutOfBounds = 4,

    /// Caller-provided buffer is too small for the requested data.
    BufferTooSmall = 5,
}

impl From<DefaultForestFireError> for ForestFireErrorCode {
    fn from(error: DefaultForestFireError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, ForestFireErrorCode)> = const { RefCell::new((None, ForestFireErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ForestFireErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ForestFireErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// ForestFireInstance* sim = nullptr;
/// ForestFireErrorCode err = forest_fire_new(&config, &sim);
/// if (err != Ok) {
///     const char* error = forest_fire_get_last_error();
///     if (error) {
///         printf("Forest fire creation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn forest_fire_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `ForestFireErrorCode::Ok` (0) if the last call on this thread succeeded.
/// Error state is per-thread.
#[no_mangle]
pub extern "C" fn forest_fire_get_last_error_code() -> ForestFireErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
