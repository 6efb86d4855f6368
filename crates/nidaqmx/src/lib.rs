//! Typed task/channel interface to the NI-DAQmx data-acquisition driver.
//!
//! This crate wraps the runtime bindings from `nidaqmx-sys` with a safe,
//! structured surface: tasks, virtual channels, channel collections,
//! enumerated constants, and per-channel attribute accessors mapped 1:1
//! onto the driver's get/set/reset entry points. All hardware behavior -
//! conversion, timing, routing, buffering - stays in the driver; the crate
//! owns marshalling, error decoding, and the variable-length output
//! protocol for results whose size is unknown until queried.
//!
//! # Architecture
//!
//! - [`Task`] - RAII wrapper over the driver task handle: lifecycle
//!   (create/start/stop/clear), queries, and collection accessors.
//! - [`channels`] - typed channel handles ([`AiChannel`], [`AoChannel`],
//!   [`CiChannel`], [`CoChannel`], [`DiChannel`], [`DoChannel`]) carrying
//!   kind-specific attribute sets, and the collections with the channel
//!   factories.
//! - [`types`] - enumerated driver constants, converted bit-exactly at the
//!   boundary; unknown inbound integers are surfaced, never swallowed.
//! - [`Scale`] - named handle to a driver-registered custom scale.
//! - [`DaqmxError`] - the error taxonomy: driver-unavailable,
//!   invalid-argument, hardware-state, other driver rejections, and the
//!   internal buffer-protocol failure. Warnings (positive driver statuses)
//!   are reported through `tracing` and never abort an operation.
//! - [`utils`] - lossless conversion between flat channel strings
//!   (`Dev1/ai0:3`) and name sequences.
//!
//! The driver library itself is located and loaded lazily at first use;
//! building and even constructing most types works on machines without the
//! driver installed. See `nidaqmx-sys` for the search rules and the
//! `NIDAQMX_LIBRARY_PATH` override.
//!
//! # Example
//!
//! ```no_run
//! use nidaqmx::{Task, TerminalConfiguration, VoltageUnits};
//!
//! # fn main() -> nidaqmx::Result<()> {
//! let task = Task::new("acq")?;
//! task.ai_channels().add_ai_voltage_chan(
//!     "Dev1/ai0:3",
//!     Some("v"),
//!     TerminalConfiguration::Rse,
//!     -10.0,
//!     10.0,
//!     VoltageUnits::Volts,
//!     None,
//! )?;
//!
//! for chan in task.channels().iter()? {
//!     println!("{}", chan.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod error;
pub(crate) mod marshal;
pub mod scale;
pub mod task;
pub mod types;
pub mod utils;

pub use channels::{
    AiChannel, AiChannelCollection, AoChannel, AoChannelCollection, Channel, ChannelCollection,
    CiChannel, CiChannelCollection, CoChannel, CoChannelCollection, DiChannel,
    DiChannelCollection, DoChannel, DoChannelCollection,
};
pub use error::{DaqmxError, Result};
pub use scale::Scale;
pub use task::Task;
pub use types::*;
pub use utils::{flatten_channel_string, unflatten_channel_string};

pub use nidaqmx_sys::TaskHandle;
