//! Marshalling primitives for the C boundary.
//!
//! Outbound strings are null-terminated ASCII, booleans are 32-bit
//! integers, and numeric arrays are caller-owned contiguous buffers the
//! driver writes into. Calls whose output length is unknown in advance go
//! through the variable-length protocol implemented here: ask for the
//! required size with a null buffer, allocate, call again, and start over
//! if the driver says the size changed in between.

use std::ffi::CString;
use std::ptr;

use libc::c_char;

use nidaqmx_sys::{bool32, int32, uInt32};

use crate::error::{self, check, DaqmxError, Result};

/// Upper bound on retry-loop iterations.
///
/// A stable driver answers in two calls (size query + fetch) and needs one
/// extra round per concurrent size change. Hitting the cap means the driver
/// never settles, which surfaces as [`DaqmxError::BufferProtocol`] instead
/// of looping forever.
const MAX_QUERY_ATTEMPTS: usize = 8;

/// Encode a caller string for the driver.
pub(crate) fn cstring(value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| DaqmxError::InvalidString {
        value: value.to_string(),
    })
}

/// Encode an optional caller string, mapping `None` to the empty string the
/// driver treats as "not specified".
pub(crate) fn cstring_opt(value: Option<&str>) -> Result<CString> {
    cstring(value.unwrap_or(""))
}

/// Host boolean to driver `bool32`.
pub(crate) fn to_bool32(value: bool) -> bool32 {
    bool32::from(value)
}

/// Driver `bool32` to host boolean: any nonzero value reads as true.
pub(crate) fn from_bool32(value: bool32) -> bool {
    value != 0
}

/// Run the variable-length output protocol for an element buffer.
///
/// `call` receives `(buffer, size_in_elements)` and returns the driver
/// status; a null pointer with size 0 asks for the required size, which the
/// driver reports as a positive status. A buffer-too-small sentinel resets
/// the size to zero so the requirement is re-queried.
pub(crate) fn query_buffer<T: Copy + Default>(
    mut call: impl FnMut(*mut T, uInt32) -> int32,
) -> Result<Vec<T>> {
    let mut size: uInt32 = 0;
    let mut last_status: int32 = 0;
    for _ in 0..MAX_QUERY_ATTEMPTS {
        let mut buf = vec![T::default(); size as usize];
        let ptr = if size == 0 {
            ptr::null_mut()
        } else {
            buf.as_mut_ptr()
        };
        let status = call(ptr, size);
        last_status = status;
        if error::is_buffer_too_small(status) {
            // The requirement changed between the query and the fetch;
            // start over from a fresh size query.
            size = 0;
            continue;
        }
        if status > 0 && size == 0 {
            size = status as uInt32;
            continue;
        }
        check(status)?;
        return Ok(buf);
    }
    Err(DaqmxError::BufferProtocol { code: last_status })
}

/// Variable-length string output, decoded from the driver's
/// null-terminated bytes.
pub(crate) fn query_string(
    mut call: impl FnMut(*mut c_char, uInt32) -> int32,
) -> Result<String> {
    let buf = query_buffer::<u8>(|ptr, size| call(ptr.cast::<c_char>(), size))?;
    Ok(error::decode_nul_terminated(&buf))
}

/// Variable-length `float64` array output.
pub(crate) fn query_f64_array(
    call: impl FnMut(*mut f64, uInt32) -> int32,
) -> Result<Vec<f64>> {
    query_buffer::<f64>(call)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ERROR_BUFFER_TOO_SMALL_FOR_STRING;

    #[test]
    fn test_bool32_round_trip() {
        assert_eq!(to_bool32(true), 1);
        assert_eq!(to_bool32(false), 0);
        assert!(from_bool32(1));
        assert!(!from_bool32(0));
        // Any nonzero driver value reads as true.
        assert!(from_bool32(0xFFFF_FFFF));
    }

    #[test]
    fn test_cstring_rejects_interior_nul() {
        assert!(cstring("Dev1/ai0").is_ok());
        assert!(matches!(
            cstring("Dev1\0ai0"),
            Err(DaqmxError::InvalidString { .. })
        ));
        assert!(cstring_opt(None).is_ok_and(|s| s.as_bytes().is_empty()));
    }

    #[test]
    fn test_query_string_two_phase() {
        // Size query answers 6, fetch writes "Dev1/a" + NUL... the driver
        // reports sizes including the terminator.
        let payload = b"chan1\0";
        let mut calls = 0;
        let result = query_string(|ptr, size| {
            calls += 1;
            if size == 0 {
                return payload.len() as int32;
            }
            assert_eq!(size as usize, payload.len());
            for (i, &b) in payload.iter().enumerate() {
                // SAFETY (test): buffer has `size` bytes.
                unsafe { *ptr.add(i) = b as c_char };
            }
            0
        });
        assert_eq!(result.ok().as_deref(), Some("chan1"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_query_string_size_change_retries_from_zero() {
        // The driver first claims 8 bytes, rejects the 8-byte fetch with the
        // too-small sentinel, then claims 16; the 16-byte fetch succeeds.
        let payload = b"Dev1/ai0:3,meta\0";
        assert_eq!(payload.len(), 16);
        let mut sizes_seen = Vec::new();
        let mut deliveries = 0;
        let result = query_string(|ptr, size| {
            sizes_seen.push(size);
            match sizes_seen.as_slice() {
                [0] => 8,
                [0, 8] => ERROR_BUFFER_TOO_SMALL_FOR_STRING,
                [0, 8, 0] => 16,
                [0, 8, 0, 16] => {
                    deliveries += 1;
                    for (i, &b) in payload.iter().enumerate() {
                        // SAFETY (test): buffer has 16 bytes.
                        unsafe { *ptr.add(i) = b as c_char };
                    }
                    0
                }
                other => panic!("unexpected call sequence: {other:?}"),
            }
        });
        assert_eq!(result.ok().as_deref(), Some("Dev1/ai0:3,meta"));
        // The payload is delivered exactly once.
        assert_eq!(deliveries, 1);
        assert_eq!(sizes_seen, vec![0, 8, 0, 16]);
    }

    #[test]
    fn test_query_terminates_against_adversarial_driver() {
        // A driver that always answers "too small" must not loop forever.
        let mut calls = 0;
        let result = query_string(|_, _| {
            calls += 1;
            ERROR_BUFFER_TOO_SMALL_FOR_STRING
        });
        assert!(matches!(result, Err(DaqmxError::BufferProtocol { .. })));
        assert!(calls <= 8);
    }

    #[test]
    fn test_query_empty_result() {
        // Status 0 on the size query means an empty result.
        let result = query_string(|_, size| {
            assert_eq!(size, 0);
            0
        });
        assert_eq!(result.ok().as_deref(), Some(""));
    }

    #[test]
    fn test_query_f64_array() {
        let coeffs = [0.0, 1.25, -3.5];
        let result = query_f64_array(|ptr, size| {
            if size == 0 {
                return coeffs.len() as int32;
            }
            assert_eq!(size as usize, coeffs.len());
            for (i, &c) in coeffs.iter().enumerate() {
                // SAFETY (test): buffer has `size` elements.
                unsafe { *ptr.add(i) = c };
            }
            0
        });
        assert_eq!(result.ok().as_deref(), Some(&coeffs[..]));
    }

    #[test]
    fn test_query_propagates_domain_errors() {
        let result = query_string(|_, _| -200170);
        assert!(matches!(
            result,
            Err(DaqmxError::InvalidArgument { code: -200170, .. })
        ));
    }
}
