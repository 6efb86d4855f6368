//! Counter-output channel factories.

use tracing::debug;

use nidaqmx_sys::functions;

use super::CoChannelCollection;
use crate::channels::CoChannel;
use crate::error::{check, Result};
use crate::marshal::{cstring, cstring_opt};
use crate::types::{FrequencyUnits, Level, TimeUnits};
use crate::utils::assigned_channel_name;

impl CoChannelCollection {
    /// Create a channel generating a pulse train defined by frequency and
    /// duty cycle.
    #[allow(clippy::too_many_arguments)]
    pub fn add_co_pulse_chan_freq(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        units: FrequencyUnits,
        idle_state: Level,
        initial_delay: f64,
        freq: f64,
        duty_cycle: f64,
    ) -> Result<CoChannel> {
        let f = functions::CREATE_CO_PULSE_CHAN_FREQ.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: signature matches the driver prototype; every string is
        // null-terminated and outlives the call.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                units.to_raw(),
                idle_state.to_raw(),
                initial_delay,
                freq,
                duty_cycle,
            )
        })?;
        debug!(counter, "Created CO pulse (frequency) channel");
        Ok(CoChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel generating a pulse train defined by high and low
    /// times.
    #[allow(clippy::too_many_arguments)]
    pub fn add_co_pulse_chan_time(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        units: TimeUnits,
        idle_state: Level,
        initial_delay: f64,
        low_time: f64,
        high_time: f64,
    ) -> Result<CoChannel> {
        let f = functions::CREATE_CO_PULSE_CHAN_TIME.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_co_pulse_chan_freq`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                units.to_raw(),
                idle_state.to_raw(),
                initial_delay,
                low_time,
                high_time,
            )
        })?;
        debug!(counter, "Created CO pulse (time) channel");
        Ok(CoChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel generating a pulse train defined by timebase ticks.
    #[allow(clippy::too_many_arguments)]
    pub fn add_co_pulse_chan_ticks(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        source_terminal: &str,
        idle_state: Level,
        initial_delay: i32,
        low_ticks: i32,
        high_ticks: i32,
    ) -> Result<CoChannel> {
        let f = functions::CREATE_CO_PULSE_CHAN_TICKS.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let source = cstring(source_terminal)?;
        // SAFETY: as in `add_co_pulse_chan_freq`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                source.as_ptr(),
                idle_state.to_raw(),
                initial_delay,
                low_ticks,
                high_ticks,
            )
        })?;
        debug!(counter, "Created CO pulse (ticks) channel");
        Ok(CoChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }
}
