//! Task lifecycle and queries.

use tracing::{debug, warn};

use nidaqmx_sys::{bool32, functions, uInt32, TaskHandle};

use crate::channels::{
    AiChannelCollection, AoChannelCollection, ChannelCollection, CiChannelCollection,
    CoChannelCollection, DiChannelCollection, DoChannelCollection,
};
use crate::error::{check, Result};
use crate::marshal::{self, cstring};
use crate::types::TaskAction;
use crate::utils::unflatten_channel_string;

/// A driver-side task: the container grouping virtual channels, timing,
/// triggering, and buffer state.
///
/// The handle is owned by the driver; this wrapper holds it by value and
/// clears the task when dropped. The driver serializes operations on one
/// task internally, so a `Task` may be shared across threads; operations on
/// distinct tasks proceed in parallel.
///
/// # Example
///
/// ```no_run
/// use nidaqmx::{Task, TerminalConfiguration, VoltageUnits};
///
/// # fn example() -> nidaqmx::Result<()> {
/// let task = Task::new("")?;
/// let chan = task.ai_channels().add_ai_voltage_chan(
///     "Dev1/ai0",
///     Some("myChan"),
///     TerminalConfiguration::Default,
///     -5.0,
///     5.0,
///     VoltageUnits::Volts,
///     None,
/// )?;
/// assert_eq!(chan.name(), "myChan");
/// task.start()?;
/// task.stop()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Task {
    handle: TaskHandle,
}

impl Task {
    /// Create a task.
    ///
    /// Pass an empty name to let the driver assign one; the assigned name
    /// is available through [`name`](Self::name).
    pub fn new(name: &str) -> Result<Self> {
        let f = functions::CREATE_TASK.get()?;
        let name_c = cstring(name)?;
        let mut handle = TaskHandle::null();
        // SAFETY: the driver writes the new task's handle through the out
        // pointer on success.
        check(unsafe { f(name_c.as_ptr(), &mut handle) })?;
        debug!(name, "Created task");
        Ok(Self { handle })
    }

    /// Wrap a handle obtained from the driver elsewhere.
    ///
    /// The returned `Task` takes ownership and clears the task on drop.
    pub fn from_handle(handle: TaskHandle) -> Self {
        Self { handle }
    }

    /// The raw driver handle.
    pub fn handle(&self) -> TaskHandle {
        self.handle
    }

    /// The task's driver-assigned name.
    pub fn name(&self) -> Result<String> {
        let f = functions::GET_TASK_NAME.get()?;
        let handle = self.handle;
        marshal::query_string(|buf, size| {
            // SAFETY: buffer and declared size come from the retry protocol.
            unsafe { f(handle, buf, size) }
        })
    }

    /// Transition the task to the running state.
    pub fn start(&self) -> Result<()> {
        let f = functions::START_TASK.get()?;
        // SAFETY: the handle is valid for the life of `self`.
        self.attach_name(check(unsafe { f(self.handle) }))
    }

    /// Stop the task and return it to the committed state.
    pub fn stop(&self) -> Result<()> {
        let f = functions::STOP_TASK.get()?;
        // SAFETY: as in `start`.
        self.attach_name(check(unsafe { f(self.handle) }))
    }

    /// Explicitly drive the task through a state transition.
    pub fn control(&self, action: TaskAction) -> Result<()> {
        let f = functions::TASK_CONTROL.get()?;
        // SAFETY: as in `start`.
        self.attach_name(check(unsafe { f(self.handle, action.to_raw()) }))
    }

    /// Block until the task finishes, up to `timeout` seconds.
    ///
    /// Pass a negative timeout to wait indefinitely, per driver convention.
    pub fn wait_until_done(&self, timeout: f64) -> Result<()> {
        let f = functions::WAIT_UNTIL_TASK_DONE.get()?;
        // SAFETY: as in `start`.
        self.attach_name(check(unsafe { f(self.handle, timeout) }))
    }

    /// Whether the task completed the acquisition or generation.
    pub fn is_done(&self) -> Result<bool> {
        let f = functions::IS_TASK_DONE.get()?;
        let mut done: bool32 = 0;
        // SAFETY: the driver writes one bool32 through the out pointer.
        self.attach_name(check(unsafe { f(self.handle, &mut done) }))?;
        Ok(marshal::from_bool32(done))
    }

    /// Clear the task, releasing its driver resources.
    ///
    /// Consumes the task; afterwards the handle is invalid. Dropping a
    /// `Task` clears it implicitly.
    pub fn clear(mut self) -> Result<()> {
        let result = self.clear_inner();
        self.handle = TaskHandle::null();
        result
    }

    fn clear_inner(&self) -> Result<()> {
        if self.handle.is_null() {
            return Ok(());
        }
        let f = functions::CLEAR_TASK.get()?;
        // SAFETY: the handle is valid and cleared at most once.
        check(unsafe { f(self.handle) })
    }

    /// Number of virtual channels in the task.
    pub fn number_of_channels(&self) -> Result<usize> {
        let f = functions::GET_TASK_NUM_CHANS.get()?;
        let mut count: uInt32 = 0;
        // SAFETY: the driver writes one uInt32 through the out pointer.
        self.attach_name(check(unsafe { f(self.handle, &mut count) }))?;
        Ok(count as usize)
    }

    /// Names of the task's virtual channels, in insertion order.
    pub fn channel_names(&self) -> Result<Vec<String>> {
        let f = functions::GET_TASK_CHANNELS.get()?;
        let handle = self.handle;
        let flat = marshal::query_string(|buf, size| {
            // SAFETY: buffer and declared size come from the retry protocol.
            unsafe { f(handle, buf, size) }
        })?;
        Ok(unflatten_channel_string(&flat))
    }

    /// The untyped view of this task's channels.
    pub fn channels(&self) -> ChannelCollection {
        ChannelCollection::new(self.handle)
    }

    /// The analog-input channels and factories of this task.
    pub fn ai_channels(&self) -> AiChannelCollection {
        AiChannelCollection::new(self.handle)
    }

    /// The analog-output channels and factories of this task.
    pub fn ao_channels(&self) -> AoChannelCollection {
        AoChannelCollection::new(self.handle)
    }

    /// The counter-input channels and factories of this task.
    pub fn ci_channels(&self) -> CiChannelCollection {
        CiChannelCollection::new(self.handle)
    }

    /// The counter-output channels and factories of this task.
    pub fn co_channels(&self) -> CoChannelCollection {
        CoChannelCollection::new(self.handle)
    }

    /// The digital-input channels and factory of this task.
    pub fn di_channels(&self) -> DiChannelCollection {
        DiChannelCollection::new(self.handle)
    }

    /// The digital-output channels and factory of this task.
    pub fn do_channels(&self) -> DoChannelCollection {
        DoChannelCollection::new(self.handle)
    }

    /// Attach the task's name to a driver-reported error, when available.
    fn attach_name(&self, result: Result<()>) -> Result<()> {
        result.map_err(|err| match self.name() {
            Ok(name) => err.with_task(&name),
            Err(_) => err,
        })
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        if let Err(err) = self.clear_inner() {
            warn!(error = %err, "Error clearing task");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_handle_wraps_null_without_clearing() {
        // A null handle is inert: drop must not call into the driver.
        let task = Task::from_handle(TaskHandle::null());
        assert!(task.handle().is_null());
        drop(task);
    }
}
