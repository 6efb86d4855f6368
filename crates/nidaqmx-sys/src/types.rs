//! ABI-exact types shared with the NI-DAQmx driver.
//!
//! The driver's C headers fix every width: `int32` status returns, `uInt32`
//! counts and buffer sizes, `float64` values, and a pointer-sized opaque
//! task handle. Booleans cross the boundary as 32-bit integers (`bool32`),
//! never as the host language's native boolean width.
//!
//! All entry points use the `extern "system"` calling convention: stdcall
//! on 32-bit Windows (the driver is exported for `windll`-style loading
//! there) and the platform C convention everywhere else.

use libc::{c_char, c_void};

/// Signed 32-bit driver status / enumeration value.
pub type int32 = i32;

/// Unsigned 32-bit count or buffer size.
pub type uInt32 = u32;

/// Unsigned 64-bit sample count.
pub type uInt64 = u64;

/// IEEE-754 double-precision value.
pub type float64 = f64;

/// Driver boolean: 0 is false, any nonzero value is true.
pub type bool32 = uInt32;

/// Opaque handle to a driver-side task.
///
/// The driver owns the identity and lifetime behind this value; the binding
/// holds it by value and never dereferences it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(pub *mut c_void);

impl TaskHandle {
    /// The null handle, used as the out-parameter seed for task creation.
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    /// Whether this handle is null (no task).
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

// SAFETY: the handle is an opaque token the binding never dereferences.
// The driver documents per-task thread safety: operations on distinct tasks
// proceed in parallel and operations on one task serialize inside the
// driver, so moving or sharing the token across threads is sound.
unsafe impl Send for TaskHandle {}
unsafe impl Sync for TaskHandle {}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::null()
    }
}

/// `DAQmxGet<Attr>(task, channel, *value)` for float64 attributes.
pub type GetChanAttrF64Fn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut float64) -> int32;

/// `DAQmxSet<Attr>(task, channel, value)` for float64 attributes.
pub type SetChanAttrF64Fn = unsafe extern "system" fn(TaskHandle, *const c_char, float64) -> int32;

/// `DAQmxGet<Attr>(task, channel, *value)` for enumeration attributes.
pub type GetChanAttrI32Fn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut int32) -> int32;

/// `DAQmxSet<Attr>(task, channel, value)` for enumeration attributes.
pub type SetChanAttrI32Fn = unsafe extern "system" fn(TaskHandle, *const c_char, int32) -> int32;

/// `DAQmxGet<Attr>(task, channel, *value)` for unsigned attributes.
pub type GetChanAttrU32Fn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut uInt32) -> int32;

/// `DAQmxSet<Attr>(task, channel, value)` for unsigned attributes.
pub type SetChanAttrU32Fn = unsafe extern "system" fn(TaskHandle, *const c_char, uInt32) -> int32;

/// `DAQmxGet<Attr>(task, channel, *value)` for bool32 attributes.
pub type GetChanAttrBoolFn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut bool32) -> int32;

/// `DAQmxSet<Attr>(task, channel, value)` for bool32 attributes.
pub type SetChanAttrBoolFn = unsafe extern "system" fn(TaskHandle, *const c_char, bool32) -> int32;

/// `DAQmxGet<Attr>(task, channel, buffer, size)` for string attributes.
///
/// Follows the variable-length output protocol: called with a null buffer
/// and size 0, the driver returns the required size as a positive status.
pub type GetChanAttrStringFn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut c_char, uInt32) -> int32;

/// `DAQmxSet<Attr>(task, channel, value)` for string attributes.
pub type SetChanAttrStringFn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *const c_char) -> int32;

/// `DAQmxGet<Attr>(task, channel, array, size)` for float64-array attributes.
pub type GetChanAttrF64ArrayFn =
    unsafe extern "system" fn(TaskHandle, *const c_char, *mut float64, uInt32) -> int32;

/// `DAQmxReset<Attr>(task, channel)` shared by every resettable attribute.
pub type ResetChanAttrFn = unsafe extern "system" fn(TaskHandle, *const c_char) -> int32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_task_handle() {
        let handle = TaskHandle::null();
        assert!(handle.is_null());
        assert_eq!(handle, TaskHandle::default());
    }

    #[test]
    fn test_handle_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<TaskHandle>(),
            std::mem::size_of::<*mut c_void>()
        );
    }
}
