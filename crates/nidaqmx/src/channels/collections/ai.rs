//! Analog-input channel factories.
//!
//! Each factory forwards its full parameter tuple to the corresponding
//! driver entry point, then labels the returned handle with the derived
//! name (`<assigned>0:N-1` when one assigned name covers N physical
//! channels). Derivation happens only after the driver call succeeds, so a
//! rejected factory leaves nothing behind.
//!
//! The TEDS variants use the same calling conventions minus the parameters
//! the sensor's TEDS memory supplies; they must target TEDS-configured
//! physical channels.

use tracing::debug;

use nidaqmx_sys::functions;

use super::AiChannelCollection;
use crate::channels::AiChannel;
use crate::error::{check, Result};
use crate::marshal::{cstring, cstring_opt, to_bool32};
use crate::scale::Scale;
use crate::types::{
    AcExcitWireMode, AccelChargeSensitivityUnits, AccelSensitivityUnits, AccelUnits, AngleUnits,
    BridgeConfiguration, BridgeElectricalUnits, BridgePhysicalUnits, BridgeUnits, ChargeUnits,
    CjcSource, CurrentShuntResistorLocation, CurrentUnits, ExcitationSource,
    ForceIepeSensitivityUnits, ForceUnits, FrequencyUnits, LengthUnits, LvdtSensitivityUnits,
    PressureUnits, ResistanceConfiguration, ResistanceUnits, RtdType, RvdtSensitivityUnits,
    SoundPressureUnits, StrainGageBridgeType, StrainUnits, TemperatureUnits,
    TerminalConfiguration, ThermocoupleType, TorqueUnits, VelocityIepeSensitivityUnits,
    VelocityUnits, VoltageUnits,
};
use crate::utils::assigned_channel_name;

fn scale_name(scale: Option<&Scale>) -> Option<&str> {
    scale.map(Scale::name)
}

impl AiChannelCollection {
    /// Create channels measuring voltage.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: VoltageUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_VOLTAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: signature matches the driver prototype; every string is
        // null-terminated and outlives the call.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI voltage channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring the RMS of a voltage signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_voltage_rms_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: VoltageUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_VOLTAGE_RMS_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI voltage RMS channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create voltage channels for a sensor that requires excitation.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_voltage_chan_with_excit(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: VoltageUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        use_excit_for_scaling: bool,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_VOLTAGE_CHAN_WITH_EXCIT.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                to_bool32(use_excit_for_scaling),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI voltage channel with excitation");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring current through a shunt resistor.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_current_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: CurrentUnits,
        shunt_resistor_loc: CurrentShuntResistorLocation,
        ext_shunt_resistor_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_CURRENT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                shunt_resistor_loc.to_raw(),
                ext_shunt_resistor_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI current channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring the RMS of a current signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_current_rms_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: CurrentUnits,
        shunt_resistor_loc: CurrentShuntResistorLocation,
        ext_shunt_resistor_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_CURRENT_RMS_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                shunt_resistor_loc.to_raw(),
                ext_shunt_resistor_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI current RMS channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring temperature with a thermocouple.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_thrmcpl_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        thermocouple_type: ThermocoupleType,
        cjc_source: CjcSource,
        cjc_val: f64,
        cjc_channel: Option<&str>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_THRMCPL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let cjc_chan = cstring_opt(cjc_channel)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                thermocouple_type.to_raw(),
                cjc_source.to_raw(),
                cjc_val,
                cjc_chan.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI thermocouple channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring temperature with an RTD.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_rtd_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        rtd_type: RtdType,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        r0: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_RTD_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                rtd_type.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                r0,
            )
        })?;
        debug!(physical_channel, "Created AI RTD channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring temperature with a current-excited
    /// thermistor.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_thrmstr_chan_iex(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        a: f64,
        b: f64,
        c: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_THRMSTR_CHAN_IEX.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                a,
                b,
                c,
            )
        })?;
        debug!(physical_channel, "Created AI thermistor (Iex) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring temperature with a voltage-excited
    /// thermistor.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_thrmstr_chan_vex(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        resistance_config: ResistanceConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        a: f64,
        b: f64,
        c: f64,
        r1: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_THRMSTR_CHAN_VEX.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                a,
                b,
                c,
                r1,
            )
        })?;
        debug!(physical_channel, "Created AI thermistor (Vex) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring temperature with the device's built-in
    /// sensor.
    pub fn add_ai_temp_built_in_sensor_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        units: TemperatureUnits,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_TEMP_BUILT_IN_SENSOR_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe { f(self.task, phys.as_ptr(), name.as_ptr(), units.to_raw()) })?;
        debug!(physical_channel, "Created AI built-in temperature channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring resistance.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_resistance_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ResistanceUnits,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_RESISTANCE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI resistance channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring strain with a strain gage.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_strain_gage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: StrainUnits,
        strain_config: StrainGageBridgeType,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        gage_factor: f64,
        initial_bridge_voltage: f64,
        nominal_gage_resistance: f64,
        poisson_ratio: f64,
        lead_wire_resistance: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_STRAIN_GAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                strain_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                gage_factor,
                initial_bridge_voltage,
                nominal_gage_resistance,
                poisson_ratio,
                lead_wire_resistance,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI strain-gage channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring force with a bridge sensor scaled by two
    /// (electrical, physical) points.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_force_bridge_two_point_lin_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        first_electrical_val: f64,
        second_electrical_val: f64,
        electrical_units: BridgeElectricalUnits,
        first_physical_val: f64,
        second_physical_val: f64,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_FORCE_BRIDGE_TWO_POINT_LIN_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                first_electrical_val,
                second_electrical_val,
                electrical_units.to_raw(),
                first_physical_val,
                second_physical_val,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI force bridge (two-point linear) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring force with a bridge sensor scaled by a
    /// lookup table.
    ///
    /// `electrical_vals` and `physical_vals` are parallel arrays; the
    /// driver interpolates piecewise-linearly between pairs and clamps
    /// out-of-range inputs to the endpoints.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_force_bridge_table_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        electrical_vals: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_vals: &[f64],
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_FORCE_BRIDGE_TABLE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // The driver declares the arrays writable; pass owned buffers.
        let mut electrical = electrical_vals.to_vec();
        let mut physical = physical_vals.to_vec();
        // SAFETY: buffers are contiguous and their lengths are passed
        // alongside; the driver reads at most that many elements.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                electrical.as_mut_ptr(),
                electrical.len() as u32,
                electrical_units.to_raw(),
                physical.as_mut_ptr(),
                physical.len() as u32,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI force bridge (table) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring force with a bridge sensor scaled by a
    /// polynomial.
    ///
    /// The driver requires both the forward (electrical to physical) and
    /// reverse coefficient vectors; neither is derived from the other here,
    /// so supplying only one propagates the driver's rejection.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_force_bridge_polynomial_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        forward_coeffs: &[f64],
        reverse_coeffs: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_FORCE_BRIDGE_POLYNOMIAL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        let mut forward = forward_coeffs.to_vec();
        let mut reverse = reverse_coeffs.to_vec();
        // SAFETY: as in `add_ai_force_bridge_table_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                forward.as_mut_ptr(),
                forward.len() as u32,
                reverse.as_mut_ptr(),
                reverse.len() as u32,
                electrical_units.to_raw(),
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI force bridge (polynomial) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring pressure with a bridge sensor scaled by
    /// two (electrical, physical) points.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_pressure_bridge_two_point_lin_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: PressureUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        first_electrical_val: f64,
        second_electrical_val: f64,
        electrical_units: BridgeElectricalUnits,
        first_physical_val: f64,
        second_physical_val: f64,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_PRESSURE_BRIDGE_TWO_POINT_LIN_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                first_electrical_val,
                second_electrical_val,
                electrical_units.to_raw(),
                first_physical_val,
                second_physical_val,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI pressure bridge (two-point linear) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring pressure with a bridge sensor scaled by a
    /// lookup table.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_pressure_bridge_table_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: PressureUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        electrical_vals: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_vals: &[f64],
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_PRESSURE_BRIDGE_TABLE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        let mut electrical = electrical_vals.to_vec();
        let mut physical = physical_vals.to_vec();
        // SAFETY: as in `add_ai_force_bridge_table_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                electrical.as_mut_ptr(),
                electrical.len() as u32,
                electrical_units.to_raw(),
                physical.as_mut_ptr(),
                physical.len() as u32,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI pressure bridge (table) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring pressure with a bridge sensor scaled by a
    /// polynomial.
    ///
    /// Both coefficient directions are required, as in
    /// [`add_ai_force_bridge_polynomial_chan`](Self::add_ai_force_bridge_polynomial_chan).
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_pressure_bridge_polynomial_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: PressureUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        forward_coeffs: &[f64],
        reverse_coeffs: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_PRESSURE_BRIDGE_POLYNOMIAL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        let mut forward = forward_coeffs.to_vec();
        let mut reverse = reverse_coeffs.to_vec();
        // SAFETY: as in `add_ai_force_bridge_table_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                forward.as_mut_ptr(),
                forward.len() as u32,
                reverse.as_mut_ptr(),
                reverse.len() as u32,
                electrical_units.to_raw(),
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI pressure bridge (polynomial) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring torque with a bridge sensor scaled by two
    /// (electrical, physical) points.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_torque_bridge_two_point_lin_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TorqueUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        first_electrical_val: f64,
        second_electrical_val: f64,
        electrical_units: BridgeElectricalUnits,
        first_physical_val: f64,
        second_physical_val: f64,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_TORQUE_BRIDGE_TWO_POINT_LIN_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                first_electrical_val,
                second_electrical_val,
                electrical_units.to_raw(),
                first_physical_val,
                second_physical_val,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI torque bridge (two-point linear) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring torque with a bridge sensor scaled by a
    /// lookup table.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_torque_bridge_table_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TorqueUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        electrical_vals: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_vals: &[f64],
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_TORQUE_BRIDGE_TABLE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        let mut electrical = electrical_vals.to_vec();
        let mut physical = physical_vals.to_vec();
        // SAFETY: as in `add_ai_force_bridge_table_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                electrical.as_mut_ptr(),
                electrical.len() as u32,
                electrical_units.to_raw(),
                physical.as_mut_ptr(),
                physical.len() as u32,
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI torque bridge (table) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring torque with a bridge sensor scaled by a
    /// polynomial.
    ///
    /// Both coefficient directions are required, as in
    /// [`add_ai_force_bridge_polynomial_chan`](Self::add_ai_force_bridge_polynomial_chan).
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_torque_bridge_polynomial_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TorqueUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        forward_coeffs: &[f64],
        reverse_coeffs: &[f64],
        electrical_units: BridgeElectricalUnits,
        physical_units: BridgePhysicalUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_TORQUE_BRIDGE_POLYNOMIAL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        let mut forward = forward_coeffs.to_vec();
        let mut reverse = reverse_coeffs.to_vec();
        // SAFETY: as in `add_ai_force_bridge_table_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                forward.as_mut_ptr(),
                forward.len() as u32,
                reverse.as_mut_ptr(),
                reverse.len() as u32,
                electrical_units.to_raw(),
                physical_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI torque bridge (polynomial) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring a generic bridge ratio.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: BridgeUnits,
        bridge_config: BridgeConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        nominal_bridge_resistance: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_BRIDGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                bridge_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                nominal_bridge_resistance,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI bridge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring acceleration with an IEPE accelerometer.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_accel_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: AccelUnits,
        sensitivity: f64,
        sensitivity_units: AccelSensitivityUnits,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_ACCEL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI accelerometer channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring acceleration with a charge-mode
    /// accelerometer.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_accel_charge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: AccelUnits,
        sensitivity: f64,
        sensitivity_units: AccelChargeSensitivityUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_ACCEL_CHARGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI charge accelerometer channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring acceleration with a 4-wire DC-voltage
    /// accelerometer.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_accel_4_wire_dc_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: AccelUnits,
        sensitivity: f64,
        sensitivity_units: AccelSensitivityUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        use_excit_for_scaling: bool,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_ACCEL_4_WIRE_DC_VOLTAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                to_bool32(use_excit_for_scaling),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI 4-wire DC-voltage accelerometer channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring charge.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_charge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: ChargeUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_CHARGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI charge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring velocity with an IEPE velocity sensor.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_velocity_iepe_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: VelocityUnits,
        sensitivity: f64,
        sensitivity_units: VelocityIepeSensitivityUnits,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_VELOCITY_IEPE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI IEPE velocity channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring force with an IEPE force sensor.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_force_iepe_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        sensitivity: f64,
        sensitivity_units: ForceIepeSensitivityUnits,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_FORCE_IEPE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI IEPE force channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring sound pressure with a microphone.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_microphone_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        units: SoundPressureUnits,
        mic_sensitivity: f64,
        max_snd_press_level: f64,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_MICROPHONE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                units.to_raw(),
                mic_sensitivity,
                max_snd_press_level,
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI microphone channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring the frequency of a voltage signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_freq_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: FrequencyUnits,
        threshold_level: f64,
        hysteresis: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_FREQ_VOLTAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                threshold_level,
                hysteresis,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI frequency-from-voltage channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring linear position with an LVDT.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_pos_lvdt_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: LengthUnits,
        sensitivity: f64,
        sensitivity_units: LvdtSensitivityUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        voltage_excit_freq: f64,
        ac_excit_wire_mode: AcExcitWireMode,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_POS_LVDT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                voltage_excit_freq,
                ac_excit_wire_mode.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI LVDT position channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create channels measuring angular position with an RVDT.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ai_pos_rvdt_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: AngleUnits,
        sensitivity: f64,
        sensitivity_units: RvdtSensitivityUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        voltage_excit_freq: f64,
        ac_excit_wire_mode: AcExcitWireMode,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_AI_POS_RVDT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                sensitivity,
                sensitivity_units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                voltage_excit_freq,
                ac_excit_wire_mode.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created AI RVDT position channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }
}

/// TEDS factories.
impl AiChannelCollection {
    /// Create voltage channels whose scaling comes from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: VoltageUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_VOLTAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI voltage channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create current channels whose scaling comes from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_current_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: CurrentUnits,
        shunt_resistor_loc: CurrentShuntResistorLocation,
        ext_shunt_resistor_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_CURRENT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                shunt_resistor_loc.to_raw(),
                ext_shunt_resistor_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI current channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create thermocouple channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_thrmcpl_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        cjc_source: CjcSource,
        cjc_val: f64,
        cjc_channel: Option<&str>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_THRMCPL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let cjc_chan = cstring_opt(cjc_channel)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                cjc_source.to_raw(),
                cjc_val,
                cjc_chan.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI thermocouple channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create RTD channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_rtd_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_RTD_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
            )
        })?;
        debug!(physical_channel, "Created TEDS AI RTD channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create current-excited thermistor channels whose sensor parameters
    /// come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_thrmstr_chan_iex(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_THRMSTR_CHAN_IEX.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
            )
        })?;
        debug!(physical_channel, "Created TEDS AI thermistor (Iex) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create voltage-excited thermistor channels whose sensor parameters
    /// come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_thrmstr_chan_vex(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TemperatureUnits,
        resistance_config: ResistanceConfiguration,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        r1: f64,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_THRMSTR_CHAN_VEX.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                r1,
            )
        })?;
        debug!(physical_channel, "Created TEDS AI thermistor (Vex) channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create resistance channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_resistance_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ResistanceUnits,
        resistance_config: ResistanceConfiguration,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_RESISTANCE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                resistance_config.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI resistance channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create strain-gage channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_strain_gage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: StrainUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        initial_bridge_voltage: f64,
        lead_wire_resistance: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_STRAIN_GAGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                initial_bridge_voltage,
                lead_wire_resistance,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI strain-gage channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create generic bridge channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: BridgeUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_BRIDGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI bridge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create force-bridge channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_force_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_FORCE_BRIDGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI force-bridge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create pressure-bridge channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_pressure_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: PressureUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_PRESSURE_BRIDGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI pressure-bridge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create torque-bridge channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_torque_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TorqueUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_TORQUE_BRIDGE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI torque-bridge channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create accelerometer channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_accel_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: AccelUnits,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_ACCEL_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI accelerometer channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create IEPE force channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_force_iepe_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        min_val: f64,
        max_val: f64,
        units: ForceUnits,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_FORCE_IEPE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                min_val,
                max_val,
                units.to_raw(),
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI IEPE force channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create microphone channels whose sensor parameters come from TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_microphone_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        terminal_config: TerminalConfiguration,
        units: SoundPressureUnits,
        max_snd_press_level: f64,
        current_excit_source: ExcitationSource,
        current_excit_val: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_MICROPHONE_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                terminal_config.to_raw(),
                units.to_raw(),
                max_snd_press_level,
                current_excit_source.to_raw(),
                current_excit_val,
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI microphone channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create LVDT position channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_pos_lvdt_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: LengthUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        voltage_excit_freq: f64,
        ac_excit_wire_mode: AcExcitWireMode,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_POS_LVDT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                voltage_excit_freq,
                ac_excit_wire_mode.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI LVDT position channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }

    /// Create RVDT position channels whose sensor parameters come from
    /// TEDS.
    #[allow(clippy::too_many_arguments)]
    pub fn add_teds_ai_pos_rvdt_chan(
        &self,
        physical_channel: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: AngleUnits,
        voltage_excit_source: ExcitationSource,
        voltage_excit_val: f64,
        voltage_excit_freq: f64,
        ac_excit_wire_mode: AcExcitWireMode,
        custom_scale: Option<&Scale>,
    ) -> Result<AiChannel> {
        let f = functions::CREATE_TEDS_AI_POS_RVDT_CHAN.get()?;
        let phys = cstring(physical_channel)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(scale_name(custom_scale))?;
        // SAFETY: as in `add_ai_voltage_chan`.
        check(unsafe {
            f(
                self.task,
                phys.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                voltage_excit_source.to_raw(),
                voltage_excit_val,
                voltage_excit_freq,
                ac_excit_wire_mode.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(physical_channel, "Created TEDS AI RVDT position channel");
        Ok(AiChannel::new(
            self.task,
            assigned_channel_name(physical_channel, name_to_assign),
        ))
    }
}
