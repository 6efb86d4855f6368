//! Attribute accessor plumbing.
//!
//! Every per-channel attribute maps onto a `DAQmxGet`/`DAQmxSet`/
//! `DAQmxReset` entry-point triple whose signature is one of a handful of
//! shapes. The helpers here do the marshalling once per shape; the macros
//! in [`super::macros`] stamp out one accessor triple per attribute, each
//! owning its own [`FunctionCache`] static so the symbol is bound lazily at
//! the call site that first needs it.

use libc::c_char;

use nidaqmx_sys::{
    bool32, float64, int32, uInt32, FunctionCache, GetChanAttrBoolFn, GetChanAttrF64ArrayFn,
    GetChanAttrF64Fn, GetChanAttrI32Fn, GetChanAttrStringFn, GetChanAttrU32Fn, ResetChanAttrFn,
    SetChanAttrBoolFn, SetChanAttrF64Fn, SetChanAttrI32Fn, SetChanAttrStringFn, SetChanAttrU32Fn,
    TaskHandle,
};

use crate::error::{check, Result};
use crate::marshal::{self, cstring};

pub(crate) fn get_f64(
    cache: &FunctionCache<GetChanAttrF64Fn>,
    task: TaskHandle,
    channel: &str,
) -> Result<f64> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    let mut value: float64 = 0.0;
    // SAFETY: signature matches the driver prototype; the driver writes one
    // float64 through the out pointer.
    check(unsafe { f(task, channel.as_ptr(), &mut value) })?;
    Ok(value)
}

pub(crate) fn set_f64(
    cache: &FunctionCache<SetChanAttrF64Fn>,
    task: TaskHandle,
    channel: &str,
    value: f64,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    // SAFETY: signature matches the driver prototype.
    check(unsafe { f(task, channel.as_ptr(), value) })
}

pub(crate) fn get_i32(
    cache: &FunctionCache<GetChanAttrI32Fn>,
    task: TaskHandle,
    channel: &str,
) -> Result<int32> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    let mut value: int32 = 0;
    // SAFETY: as in `get_f64`.
    check(unsafe { f(task, channel.as_ptr(), &mut value) })?;
    Ok(value)
}

pub(crate) fn set_i32(
    cache: &FunctionCache<SetChanAttrI32Fn>,
    task: TaskHandle,
    channel: &str,
    value: int32,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    // SAFETY: as in `set_f64`.
    check(unsafe { f(task, channel.as_ptr(), value) })
}

pub(crate) fn get_u32(
    cache: &FunctionCache<GetChanAttrU32Fn>,
    task: TaskHandle,
    channel: &str,
) -> Result<u32> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    let mut value: uInt32 = 0;
    // SAFETY: as in `get_f64`.
    check(unsafe { f(task, channel.as_ptr(), &mut value) })?;
    Ok(value)
}

pub(crate) fn set_u32(
    cache: &FunctionCache<SetChanAttrU32Fn>,
    task: TaskHandle,
    channel: &str,
    value: u32,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    // SAFETY: as in `set_f64`.
    check(unsafe { f(task, channel.as_ptr(), value) })
}

pub(crate) fn get_bool(
    cache: &FunctionCache<GetChanAttrBoolFn>,
    task: TaskHandle,
    channel: &str,
) -> Result<bool> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    let mut value: bool32 = 0;
    // SAFETY: as in `get_f64`.
    check(unsafe { f(task, channel.as_ptr(), &mut value) })?;
    Ok(marshal::from_bool32(value))
}

pub(crate) fn set_bool(
    cache: &FunctionCache<SetChanAttrBoolFn>,
    task: TaskHandle,
    channel: &str,
    value: bool,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    // SAFETY: as in `set_f64`.
    check(unsafe { f(task, channel.as_ptr(), marshal::to_bool32(value)) })
}

pub(crate) fn get_string(
    cache: &FunctionCache<GetChanAttrStringFn>,
    task: TaskHandle,
    channel: &str,
) -> Result<String> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    marshal::query_string(|buf: *mut c_char, size| {
        // SAFETY: buffer and declared size come from the retry protocol and
        // always match; a null buffer is only passed with size 0.
        unsafe { f(task, channel.as_ptr(), buf, size) }
    })
}

pub(crate) fn set_string(
    cache: &FunctionCache<SetChanAttrStringFn>,
    task: TaskHandle,
    channel: &str,
    value: &str,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    let value = cstring(value)?;
    // SAFETY: both strings are null-terminated and outlive the call.
    check(unsafe { f(task, channel.as_ptr(), value.as_ptr()) })
}

pub(crate) fn get_f64_array(
    cache: &FunctionCache<GetChanAttrF64ArrayFn>,
    task: TaskHandle,
    channel: &str,
) -> Result<Vec<f64>> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    marshal::query_f64_array(|buf, size| {
        // SAFETY: as in `get_string`, with float64 elements.
        unsafe { f(task, channel.as_ptr(), buf, size) }
    })
}

pub(crate) fn reset(
    cache: &FunctionCache<ResetChanAttrFn>,
    task: TaskHandle,
    channel: &str,
) -> Result<()> {
    let f = cache.get()?;
    let channel = cstring(channel)?;
    // SAFETY: signature matches the driver prototype.
    check(unsafe { f(task, channel.as_ptr()) })
}
