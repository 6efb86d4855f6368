//! Driver library location and loading.
//!
//! The NI-DAQmx runtime is a proprietary shared library installed by the
//! vendor. This module finds it by OS convention (or an explicit
//! `NIDAQMX_LIBRARY_PATH` override), opens it exactly once per process, and
//! keeps the handle alive until process exit. The handle is never closed:
//! resolved function pointers are cached for the life of the process and
//! must not dangle.

use std::env;

use libloading::Library;
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::info;

/// Environment variable that overrides the library search convention.
///
/// When set, only the named path is tried; failure to open it is an error
/// rather than a fallthrough, so a misconfigured override is never silently
/// ignored.
pub const LIBRARY_PATH_ENV: &str = "NIDAQMX_LIBRARY_PATH";

#[cfg(target_os = "windows")]
const OS_LIBRARY_NAMES: &[&str] = &["nicaiu.dll"];

#[cfg(target_os = "macos")]
const OS_LIBRARY_NAMES: &[&str] = &["libnidaqmx.dylib"];

#[cfg(all(unix, not(target_os = "macos")))]
const OS_LIBRARY_NAMES: &[&str] = &["libnidaqmx.so", "libnidaqmx.so.1"];

/// Errors raised while binding to the driver library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The shared library could not be located or opened.
    #[error("NI-DAQmx driver library could not be loaded (tried: {searched}): {message}")]
    LibraryNotFound {
        /// The paths and library names that were tried, in order.
        searched: String,
        /// The loader's message for the last failure.
        message: String,
    },

    /// The library loaded but does not export the requested entry point.
    #[error(
        "driver entry point '{symbol}' is missing; the installed NI-DAQmx \
         version does not support this feature"
    )]
    SymbolMissing {
        /// Name of the absent symbol.
        symbol: &'static str,
    },
}

static LIBRARY: OnceCell<Result<Library, LoadError>> = OnceCell::new();

/// The process-wide driver library handle.
///
/// The first call performs the load; later calls return the cached handle
/// or the remembered failure. The library is deliberately leaked so that
/// cached entry points stay valid until process exit.
pub fn library() -> Result<&'static Library, LoadError> {
    match LIBRARY.get_or_init(open_driver_library) {
        Ok(lib) => Ok(lib),
        Err(err) => Err(err.clone()),
    }
}

fn open_driver_library() -> Result<Library, LoadError> {
    if let Ok(path) = env::var(LIBRARY_PATH_ENV) {
        // SAFETY: loading a shared library runs its initializers; the
        // driver's initializers are the vendor's supported entry path.
        return match unsafe { Library::new(&path) } {
            Ok(lib) => {
                info!(path = %path, "Loaded NI-DAQmx driver library from override");
                Ok(lib)
            }
            Err(err) => Err(LoadError::LibraryNotFound {
                searched: path,
                message: err.to_string(),
            }),
        };
    }

    let mut last_message = String::new();
    for name in OS_LIBRARY_NAMES.iter().copied() {
        // SAFETY: as above.
        match unsafe { Library::new(name) } {
            Ok(lib) => {
                info!(library = name, "Loaded NI-DAQmx driver library");
                return Ok(lib);
            }
            Err(err) => last_message = err.to_string(),
        }
    }

    Err(LoadError::LibraryNotFound {
        searched: OS_LIBRARY_NAMES.join(", "),
        message: last_message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::SymbolMissing {
            symbol: "DAQmxCreateAIVoltageChan",
        };
        assert!(err.to_string().contains("DAQmxCreateAIVoltageChan"));

        let err = LoadError::LibraryNotFound {
            searched: "libnidaqmx.so".to_string(),
            message: "not found".to_string(),
        };
        assert!(err.to_string().contains("libnidaqmx.so"));
    }
}
