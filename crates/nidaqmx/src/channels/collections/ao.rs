//! Analog-output channel factories.

use tracing::debug;

use nidaqmx_sys::functions;

use super::AoChannelCollection;
use crate::channels::AoChannel;
use crate::error::{check, Result};
use crate::marshal::{cstring, cstring_opt};
use crate::scale::Scale;
use crate::types::{CurrentUnits, FuncGenType, VoltageUnits};
use crate::utils::assigned_channel_name;

impl AoChannelCollection {
    /// Create channels generating voltage.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ao_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: VoltageUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AoChannel> {
        let f = functions::CREATE_AO_VOLTAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: signature matches the driver prototype; every string is
        // null-terminated and outlives the call.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AO voltage channel");
        Ok(AoChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels generating current.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ao_current_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: CurrentUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AoChannel> {
        let f = functions::CREATE_AO_CURRENT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ao_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AO current channel");
        Ok(AoChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels generating a standard waveform.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ao_func_gen_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        func_type: FuncGenType,
        frequency: f64,
        amplitude: f64,
        offset: f64,
    ) -> Result<AoChannel> {
        let f = functions::CREATE_AO_FUNC_GEN_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ao_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                func_type.to_raw(),
                frequency,
                amplitude,
                offset,
            )
        })?;
        debug!(physical_channel, "Created AO function-generator channel");
        Ok(AoChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }
}
