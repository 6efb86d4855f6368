//! Virtual channels and their attribute surfaces.
//!
//! A virtual channel is identified by `(task handle, name)`. Channel kinds
//! differ only in which attributes they expose; there is no behavioral
//! polymorphism beyond that, so each kind is its own struct carrying the
//! same two fields and a kind-specific accessor set:
//!
//! - [`Channel`] - untyped handle exposing only the attributes common to
//!   every kind.
//! - [`AiChannel`] / [`AoChannel`] - analog input and output.
//! - [`CiChannel`] / [`CoChannel`] - counter input and output.
//! - [`DiChannel`] / [`DoChannel`] - digital input and output.
//!
//! Channels are created through the factory methods on the typed
//! collections (see [`collections`]); the collections also resolve existing
//! channels by position or name.

pub(crate) mod attr;
pub(crate) mod macros;

pub mod ai;
pub mod ao;
pub mod ci;
pub mod co;
pub mod collections;
pub mod dio;

pub use ai::AiChannel;
pub use ao::AoChannel;
pub use ci::CiChannel;
pub use co::CoChannel;
pub use collections::{
    AiChannelCollection, AoChannelCollection, ChannelCollection, CiChannelCollection,
    CoChannelCollection, DiChannelCollection, DoChannelCollection,
};
pub use dio::{DiChannel, DoChannel};

use nidaqmx_sys::{functions, TaskHandle};

use crate::error::{DaqmxError, Result};
use crate::types::ChannelType;

/// Ask the driver for the kind of the named channel.
pub(crate) fn query_channel_type(task: TaskHandle, name: &str) -> Result<ChannelType> {
    let raw = attr::get_i32(&functions::GET_CHAN_TYPE, task, name)?;
    ChannelType::from_raw(raw).ok_or(DaqmxError::UnknownAttributeValue {
        symbol: "DAQmxGetChanType",
        value: raw,
    })
}

/// Verify the named channel has the kind a typed accessor expects.
pub(crate) fn expect_channel_type(
    task: TaskHandle,
    name: &str,
    expected: ChannelType,
) -> Result<()> {
    let actual = query_channel_type(task, name)?;
    if actual != expected {
        return Err(DaqmxError::ChannelTypeMismatch {
            channel: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

macro_rules! define_channel {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub(crate) task: ::nidaqmx_sys::TaskHandle,
            pub(crate) name: String,
        }

        impl $name {
            pub(crate) fn new(
                task: ::nidaqmx_sys::TaskHandle,
                name: impl Into<String>,
            ) -> Self {
                Self {
                    task,
                    name: name.into(),
                }
            }

            /// The channel's assigned name.
            ///
            /// When the handle addresses several channels this is the flat
            /// form (range or comma syntax).
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Raw handle of the owning task.
            pub fn task_handle(&self) -> ::nidaqmx_sys::TaskHandle {
                self.task
            }

            /// The channel kind the driver reports.
            pub fn channel_type(&self) -> $crate::error::Result<$crate::types::ChannelType> {
                $crate::channels::query_channel_type(self.task, &self.name)
            }

            $crate::channels::macros::chan_attr_string!(
                /// A user-settable description of what the channel measures
                /// or generates.
                description, set_description, reset_description, "ChanDescr");

            $crate::channels::macros::chan_attr_string_ro!(
                /// Name of the physical channel backing this virtual channel.
                physical_channel_name, "PhysicalChanName");

            $crate::channels::macros::chan_attr_bool_ro!(
                /// Whether this channel is a global channel from the
                /// driver's configuration database.
                is_global, "IsGlobalChan");
        }
    };
}
pub(crate) use define_channel;

define_channel!(
    /// An untyped virtual-channel handle.
    ///
    /// Exposes only the attributes every kind shares; obtain a typed handle
    /// through the typed collections to reach kind-specific attributes. A
    /// `Channel` may address several channels at once (flat name), in which
    /// case attribute reads return the value of the first channel and
    /// writes apply to all of them, per driver semantics.
    Channel
);

macro_rules! typed_to_untyped {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Channel {
                fn from(chan: $ty) -> Self {
                    Channel::new(chan.task, chan.name)
                }
            }
        )+
    };
}

typed_to_untyped!(AiChannel, AoChannel, CiChannel, CoChannel, DiChannel, DoChannel);
