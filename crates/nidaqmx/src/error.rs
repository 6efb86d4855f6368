//! Error types for driver operations.
//!
//! The driver reports every outcome as a signed 32-bit status. This module
//! partitions that space: zero is success, positive codes are warnings
//! (reported, never fatal), the buffer-sizing sentinels are consumed by the
//! variable-length output protocol, and the remaining negative codes are
//! domain errors surfaced with the driver's own diagnostic message.

use std::ptr;

use libc::c_char;
use thiserror::Error;
use tracing::warn;

use nidaqmx_sys::{functions, int32, uInt32, LoadError};

use crate::types::ChannelType;

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, DaqmxError>;

/// The driver could not fit a string result in the supplied buffer.
pub(crate) const ERROR_BUFFER_TOO_SMALL_FOR_STRING: int32 = -200228;

/// The driver could not fit an array result in the supplied buffer.
pub(crate) const ERROR_READ_BUFFER_TOO_SMALL: int32 = -200229;

/// Codes the driver uses for values rejected by domain checks.
///
/// The set is not exhaustive; codes outside it surface as the general
/// [`DaqmxError::Driver`] kind rather than being guessed at.
const INVALID_ARGUMENT_CODES: &[int32] = &[
    -200077, // requested value is not supported for this property
    -200170, // physical channel does not exist on this device
    -200220, // device identifier is invalid
    -200431, // physical channel does not support the measurement type
];

/// Codes the driver uses when task or resource state forbids the operation.
const HARDWARE_STATE_CODES: &[int32] = &[
    -50103,  // the specified resource is reserved
    -200479, // operation cannot be performed while the task is running
    -200557, // property cannot be set while the task is running
];

/// Errors that can occur when talking to the driver.
#[derive(Error, Debug)]
pub enum DaqmxError {
    /// The driver library could not be loaded or lacks a required symbol.
    #[error(transparent)]
    DriverUnavailable(#[from] LoadError),

    /// The driver rejected a caller-supplied value.
    #[error("invalid argument (code {code}): {message}")]
    InvalidArgument {
        /// Driver status code.
        code: int32,
        /// Driver diagnostic message.
        message: String,
        /// Name of the task the operation targeted, when known.
        task: Option<String>,
    },

    /// The driver refused because of task or resource state.
    #[error("hardware state (code {code}): {message}")]
    HardwareState {
        /// Driver status code.
        code: int32,
        /// Driver diagnostic message.
        message: String,
        /// Name of the task the operation targeted, when known.
        task: Option<String>,
    },

    /// Any other driver rejection.
    #[error("driver error {code}: {message}")]
    Driver {
        /// Driver status code.
        code: int32,
        /// Driver diagnostic message.
        message: String,
        /// Name of the task the operation targeted, when known.
        task: Option<String>,
    },

    /// A buffer-sizing sentinel escaped the variable-length retry loop.
    ///
    /// The sentinels are internal to the protocol; seeing one here is a bug
    /// in the binding, not a caller error.
    #[error("buffer-sizing sentinel {code} escaped the retry loop")]
    BufferProtocol {
        /// The sentinel status that leaked.
        code: int32,
    },

    /// The driver returned an integer with no matching enumeration variant.
    #[error("driver returned unknown value {value} for {symbol}")]
    UnknownAttributeValue {
        /// The accessor symbol that produced the value.
        symbol: &'static str,
        /// The raw driver value.
        value: int32,
    },

    /// A caller-supplied string contains an interior NUL byte.
    #[error("string {value:?} contains an interior NUL byte")]
    InvalidString {
        /// The offending string.
        value: String,
    },

    /// A positional channel lookup was out of range.
    #[error("channel index {index} out of range: task has {len} channels")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of channels in the task.
        len: usize,
    },

    /// A named channel lookup found no such channel in the task.
    #[error("channel '{name}' is not in this task")]
    ChannelNotFound {
        /// The requested name (flat form).
        name: String,
    },

    /// A typed channel accessor addressed a channel of another kind.
    #[error("channel '{channel}' is {actual}, expected {expected}")]
    ChannelTypeMismatch {
        /// The channel name.
        channel: String,
        /// The kind the accessor expected.
        expected: ChannelType,
        /// The kind the driver reported.
        actual: ChannelType,
    },
}

impl DaqmxError {
    /// The driver status code, for variants that carry one.
    pub fn code(&self) -> Option<int32> {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::HardwareState { code, .. }
            | Self::Driver { code, .. }
            | Self::BufferProtocol { code } => Some(*code),
            _ => None,
        }
    }

    /// Attach the owning task's name to a driver-reported error.
    pub(crate) fn with_task(mut self, name: &str) -> Self {
        match &mut self {
            Self::InvalidArgument { task, .. }
            | Self::HardwareState { task, .. }
            | Self::Driver { task, .. } => {
                if task.is_none() {
                    *task = Some(name.to_string());
                }
            }
            _ => {}
        }
        self
    }

    /// Whether this is an invalid-argument rejection.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether the driver refused because of task or resource state.
    pub fn is_hardware_state(&self) -> bool {
        matches!(self, Self::HardwareState { .. })
    }
}

/// Whether `status` is one of the buffer-sizing sentinels consumed by the
/// variable-length output protocol.
pub(crate) fn is_buffer_too_small(status: int32) -> bool {
    status == ERROR_BUFFER_TOO_SMALL_FOR_STRING || status == ERROR_READ_BUFFER_TOO_SMALL
}

/// Validate a driver status.
///
/// Zero is success. Positive codes are warnings: the operation succeeded,
/// the condition is reported through the log and never aborts. Negative
/// codes become [`DaqmxError`]s carrying the driver's diagnostic message.
pub(crate) fn check(status: int32) -> Result<()> {
    if status == 0 {
        return Ok(());
    }
    if status > 0 {
        warn!(
            code = status,
            message = %driver_error_message(status),
            "NI-DAQmx warning"
        );
        return Ok(());
    }
    Err(failure(status))
}

/// Build the error for a negative driver status.
pub(crate) fn failure(status: int32) -> DaqmxError {
    debug_assert!(status < 0);
    if is_buffer_too_small(status) {
        return DaqmxError::BufferProtocol { code: status };
    }
    let message = driver_error_message(status);
    if INVALID_ARGUMENT_CODES.contains(&status) {
        DaqmxError::InvalidArgument {
            code: status,
            message,
            task: None,
        }
    } else if HARDWARE_STATE_CODES.contains(&status) {
        DaqmxError::HardwareState {
            code: status,
            message,
            task: None,
        }
    } else {
        DaqmxError::Driver {
            code: status,
            message,
            task: None,
        }
    }
}

/// Fetch the driver's diagnostic text for `code`.
///
/// Tries the extended error info for the failing call first (it includes
/// call-site context), then the generic per-code string. Both fetches are
/// single-shot and never route back through [`check`], so a failure while
/// fetching a message cannot recurse.
fn driver_error_message(code: int32) -> String {
    if let Some(message) = fetch_extended_error_info() {
        if !message.is_empty() {
            return message;
        }
    }
    if let Some(message) = fetch_error_string(code) {
        if !message.is_empty() {
            return message;
        }
    }
    format!("NI-DAQmx error {code}")
}

fn fetch_extended_error_info() -> Option<String> {
    let f = functions::GET_EXTENDED_ERROR_INFO.get().ok()?;
    // SAFETY: a null buffer with size 0 asks the driver for the required
    // size, returned as a positive status.
    let needed = unsafe { f(ptr::null_mut(), 0) };
    if needed <= 0 {
        return None;
    }
    let mut buf = vec![0u8; needed as usize];
    // SAFETY: buffer and declared size match; the driver writes at most
    // `needed` bytes including the terminator.
    let status = unsafe { f(buf.as_mut_ptr().cast::<c_char>(), needed as uInt32) };
    if status < 0 {
        return None;
    }
    Some(decode_nul_terminated(&buf))
}

fn fetch_error_string(code: int32) -> Option<String> {
    let f = functions::GET_ERROR_STRING.get().ok()?;
    let mut buf = vec![0u8; 2048];
    // SAFETY: buffer and declared size match.
    let status = unsafe { f(code, buf.as_mut_ptr().cast::<c_char>(), buf.len() as uInt32) };
    if status < 0 {
        return None;
    }
    Some(decode_nul_terminated(&buf))
}

/// Decode a driver-written, null-terminated byte buffer.
///
/// Driver strings are ASCII; lossy decoding guards against stray bytes.
pub(crate) fn decode_nul_terminated(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_warning_pass() {
        assert!(check(0).is_ok());
        // Positive codes are warnings; the operation still succeeds.
        assert!(check(50104).is_ok());
    }

    #[test]
    fn test_sentinels_become_buffer_protocol_errors() {
        let err = failure(ERROR_BUFFER_TOO_SMALL_FOR_STRING);
        assert!(matches!(err, DaqmxError::BufferProtocol { code: -200228 }));
        let err = failure(ERROR_READ_BUFFER_TOO_SMALL);
        assert!(matches!(err, DaqmxError::BufferProtocol { code: -200229 }));
    }

    #[test]
    fn test_known_code_classification() {
        assert!(failure(-200077).is_invalid_argument());
        assert!(failure(-200479).is_hardware_state());
        assert!(matches!(failure(-12345), DaqmxError::Driver { .. }));
    }

    #[test]
    fn test_with_task_attaches_context_once() {
        let err = failure(-200077).with_task("readTask");
        match &err {
            DaqmxError::InvalidArgument { task, .. } => {
                assert_eq!(task.as_deref(), Some("readTask"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // A second attachment does not overwrite the first.
        match err.with_task("other") {
            DaqmxError::InvalidArgument { task, .. } => {
                assert_eq!(task.as_deref(), Some("readTask"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_code_accessor() {
        assert_eq!(failure(-200077).code(), Some(-200077));
        let err = DaqmxError::InvalidString {
            value: "bad\0name".to_string(),
        };
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_decode_nul_terminated() {
        assert_eq!(decode_nul_terminated(b"volts\0junk"), "volts");
        assert_eq!(decode_nul_terminated(b"\0"), "");
        assert_eq!(decode_nul_terminated(b"no-terminator"), "no-terminator");
    }
}
