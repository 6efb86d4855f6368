//! Runtime FFI bindings for the NI-DAQmx C driver library.
//!
//! This crate locates the NI-DAQmx shared library installed on the host,
//! opens it once per process, and resolves driver entry points lazily on
//! first use. Nothing links against the driver at build time, so binaries
//! built with this crate start on machines without the driver installed and
//! only fail when a driver feature is actually exercised. The same property
//! lets the binding run against older or newer driver versions as long as
//! the symbols it touches are present.
//!
//! # Layers
//!
//! - [`loader`] - library location (`NIDAQMX_LIBRARY_PATH` override, then
//!   OS-convention names) and the process-wide [`libloading::Library`]
//!   handle.
//! - [`cache`] - [`FunctionCache`], the per-symbol slot that binds an entry
//!   point exactly once and hands out the raw function pointer afterwards
//!   without locking.
//! - [`functions`] - the declared entry-point table: task lifecycle, task
//!   queries, error info, and every channel-creation call the high-level
//!   crate forwards to.
//! - [`types`] - ABI-exact aliases (`TaskHandle`, `bool32`, fixed-width
//!   integers) and the shared signatures of the per-channel attribute
//!   accessor families.
//!
//! # Safety
//!
//! Every function pointer handed out by this crate is `unsafe` to call.
//! The declared signatures mirror the driver's C prototypes; passing
//! pointers that violate those prototypes is undefined behavior. For a safe
//! wrapper, use the `nidaqmx` crate instead.
//!
//! # Example (unsafe)
//!
//! ```no_run
//! use nidaqmx_sys::{functions, TaskHandle};
//! use std::ffi::CString;
//!
//! # fn main() -> Result<(), nidaqmx_sys::LoadError> {
//! let create = functions::CREATE_TASK.get()?;
//! let name = CString::new("probe").unwrap();
//! let mut handle = TaskHandle::null();
//! let status = unsafe { create(name.as_ptr(), &mut handle) };
//! assert_eq!(status, 0);
//! # Ok(())
//! # }
//! ```

#![allow(non_camel_case_types)]

pub mod cache;
pub mod functions;
pub mod loader;
pub mod types;

pub use cache::FunctionCache;
pub use loader::{library, LoadError};
pub use types::{
    bool32, float64, int32, uInt32, uInt64, GetChanAttrBoolFn, GetChanAttrF64ArrayFn,
    GetChanAttrF64Fn, GetChanAttrI32Fn, GetChanAttrStringFn, GetChanAttrU32Fn, ResetChanAttrFn,
    SetChanAttrBoolFn, SetChanAttrF64Fn, SetChanAttrI32Fn, SetChanAttrStringFn, SetChanAttrU32Fn,
    TaskHandle,
};
