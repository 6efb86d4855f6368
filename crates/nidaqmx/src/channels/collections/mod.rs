//! Channel collections: the ordered set of virtual channels on a task.
//!
//! [`ChannelCollection`] is the untyped view; the typed collections
//! ([`AiChannelCollection`], …) add the channel factories for their kind
//! and verify the channel kind on typed indexing. All collections are thin
//! views over the same task: two collections are equal exactly when they
//! wrap the same task handle, and none of them caches driver state.

pub mod ai;
pub mod ao;
pub mod ci;
pub mod co;
pub mod dio;

use nidaqmx_sys::{functions, uInt32, TaskHandle};

use super::{expect_channel_type, Channel};
use crate::error::{check, DaqmxError, Result};
use crate::marshal;
use crate::types::ChannelType;
use crate::utils::{flatten_channel_string, unflatten_channel_string};

/// The ordered, untyped set of virtual channels on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCollection {
    pub(crate) task: TaskHandle,
}

impl ChannelCollection {
    pub(crate) fn new(task: TaskHandle) -> Self {
        Self { task }
    }

    /// Raw handle of the owning task.
    pub fn task_handle(&self) -> TaskHandle {
        self.task
    }

    /// The driver's flat channel list for this task.
    fn flat_channel_names(&self) -> Result<String> {
        let f = functions::GET_TASK_CHANNELS.get()?;
        marshal::query_string(|buf, size| {
            // SAFETY: buffer and declared size come from the retry protocol.
            unsafe { f(self.task, buf, size) }
        })
    }

    /// Names of the task's channels, in insertion order.
    pub fn channel_names(&self) -> Result<Vec<String>> {
        Ok(unflatten_channel_string(&self.flat_channel_names()?))
    }

    /// Number of channels in the task.
    pub fn len(&self) -> Result<usize> {
        let f = functions::GET_TASK_NUM_CHANS.get()?;
        let mut count: uInt32 = 0;
        // SAFETY: the driver writes one uInt32 through the out pointer.
        check(unsafe { f(self.task, &mut count) })?;
        Ok(count as usize)
    }

    /// Whether the task has no channels.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// The channel at `index`, in insertion order.
    pub fn at(&self, index: usize) -> Result<Channel> {
        let names = self.channel_names()?;
        let len = names.len();
        names
            .into_iter()
            .nth(index)
            .map(|name| Channel::new(self.task, name))
            .ok_or(DaqmxError::IndexOutOfRange { index, len })
    }

    /// One channel addressing the contiguous `range` of positions.
    ///
    /// The returned handle's name is the flat concatenation of the range.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Result<Channel> {
        let names = self.channel_names()?;
        if range.end > names.len() {
            return Err(DaqmxError::IndexOutOfRange {
                index: range.end,
                len: names.len(),
            });
        }
        let flat = flatten_channel_string(&names[range]);
        Ok(Channel::new(self.task, flat))
    }

    /// The channel (or channels, in flat form) matching `name`.
    pub fn by_name(&self, name: &str) -> Result<Channel> {
        if !self.contains_name(name)? {
            return Err(DaqmxError::ChannelNotFound {
                name: name.to_string(),
            });
        }
        Ok(Channel::new(self.task, name))
    }

    /// Whether every name in `name` (flat form accepted) is in the task.
    pub fn contains_name(&self, name: &str) -> Result<bool> {
        let names = self.channel_names()?;
        Ok(unflatten_channel_string(name)
            .iter()
            .all(|n| names.iter().any(|have| have == n)))
    }

    /// Whether every channel the handle addresses is in the task.
    pub fn contains(&self, channel: &Channel) -> Result<bool> {
        self.contains_name(channel.name())
    }

    /// Iterate the channels in insertion order.
    ///
    /// The iterator is double-ended; use `.rev()` for reverse order.
    pub fn iter(&self) -> Result<std::vec::IntoIter<Channel>> {
        let task = self.task;
        Ok(self
            .channel_names()?
            .into_iter()
            .map(|name| Channel::new(task, name))
            .collect::<Vec<_>>()
            .into_iter())
    }

    /// A single channel handle addressing every channel in the task.
    pub fn all(&self) -> Result<Channel> {
        Ok(Channel::new(self.task, self.flat_channel_names()?))
    }
}

macro_rules! define_channel_collection {
    (
        $(#[$doc:meta])*
        $coll:ident, $chan:ident, $expected:expr
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $coll {
            pub(crate) task: TaskHandle,
        }

        impl $coll {
            pub(crate) fn new(task: TaskHandle) -> Self {
                Self { task }
            }

            /// Raw handle of the owning task.
            pub fn task_handle(&self) -> TaskHandle {
                self.task
            }

            /// The untyped view of the same task's channels.
            pub fn as_untyped(&self) -> ChannelCollection {
                ChannelCollection::new(self.task)
            }

            /// Names of the task's channels, in insertion order.
            ///
            /// The task-wide list; channels of other kinds appear too.
            pub fn channel_names(&self) -> Result<Vec<String>> {
                self.as_untyped().channel_names()
            }

            /// Number of channels in the task.
            pub fn len(&self) -> Result<usize> {
                self.as_untyped().len()
            }

            /// Whether the task has no channels.
            pub fn is_empty(&self) -> Result<bool> {
                self.as_untyped().is_empty()
            }

            /// Whether every name in `name` (flat form accepted) is in the task.
            pub fn contains_name(&self, name: &str) -> Result<bool> {
                self.as_untyped().contains_name(name)
            }

            /// Iterate the channels in insertion order.
            pub fn iter(&self) -> Result<std::vec::IntoIter<Channel>> {
                self.as_untyped().iter()
            }

            /// A single channel handle addressing every channel in the task.
            pub fn all(&self) -> Result<Channel> {
                self.as_untyped().all()
            }

            /// The typed channel at `index`, in insertion order.
            ///
            /// Fails with
            /// [`ChannelTypeMismatch`](crate::DaqmxError::ChannelTypeMismatch)
            /// when the channel at that position is of another kind.
            pub fn at(&self, index: usize) -> Result<$chan> {
                let chan = self.as_untyped().at(index)?;
                expect_channel_type(self.task, chan.name(), $expected)?;
                Ok($chan::new(self.task, chan.name))
            }

            /// The typed channel matching `name`.
            pub fn by_name(&self, name: &str) -> Result<$chan> {
                let chan = self.as_untyped().by_name(name)?;
                expect_channel_type(self.task, chan.name(), $expected)?;
                Ok($chan::new(self.task, chan.name))
            }
        }
    };
}

define_channel_collection!(
    /// The analog-input channels of a task, with the AI factories.
    AiChannelCollection, AiChannel, ChannelType::AnalogInput
);

define_channel_collection!(
    /// The analog-output channels of a task, with the AO factories.
    AoChannelCollection, AoChannel, ChannelType::AnalogOutput
);

define_channel_collection!(
    /// The counter-input channels of a task, with the CI factories.
    CiChannelCollection, CiChannel, ChannelType::CounterInput
);

define_channel_collection!(
    /// The counter-output channels of a task, with the CO factories.
    CoChannelCollection, CoChannel, ChannelType::CounterOutput
);

define_channel_collection!(
    /// The digital-input channels of a task, with the DI factory.
    DiChannelCollection, DiChannel, ChannelType::DigitalInput
);

define_channel_collection!(
    /// The digital-output channels of a task, with the DO factory.
    DoChannelCollection, DoChannel, ChannelType::DigitalOutput
);

use super::{AiChannel, AoChannel, CiChannel, CoChannel, DiChannel, DoChannel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_equal_iff_same_task() {
        let a = ChannelCollection::new(TaskHandle::null());
        let b = ChannelCollection::new(TaskHandle::null());
        assert_eq!(a, b);

        let ai_a = AiChannelCollection::new(TaskHandle::null());
        let ai_b = AiChannelCollection::new(TaskHandle::null());
        assert_eq!(ai_a, ai_b);
    }
}
