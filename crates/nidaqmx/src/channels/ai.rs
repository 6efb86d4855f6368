//! Analog-input channels.

use super::define_channel;
use super::macros::{
    chan_attr_bool, chan_attr_enum, chan_attr_enum_ro, chan_attr_f64, chan_attr_f64_array_ro,
    chan_attr_f64_ro, chan_attr_scale, chan_attr_string, chan_attr_string_ro, chan_attr_u32,
    chan_attr_u32_ro,
};
use crate::types::{
    AcExcitWireMode, AccelChargeSensitivityUnits, AccelSensitivityUnits, AccelUnits, AdcTimingMode,
    AiMeasurementType, AngleUnits, AutoZeroType, BridgeConfiguration, BridgeUnits, ChargeUnits,
    CjcSource, Coupling, CurrentShuntResistorLocation, CurrentUnits, DataJustification,
    DataTransferMechanism, ExcitationDcOrAc, ExcitationSource, ExcitationVoltageOrCurrent,
    ForceIepeSensitivityUnits, ForceUnits, FrequencyUnits, InputDataTransferCondition, LengthUnits,
    LvdtSensitivityUnits, PressureUnits, ResistanceConfiguration, ResistanceUnits, RtdType,
    RvdtSensitivityUnits, SoundPressureUnits, StrainGageBridgeType, StrainUnits, TemperatureUnits,
    TerminalConfiguration, ThermocoupleType, TorqueUnits, VelocityIepeSensitivityUnits,
    VelocityUnits, VoltageUnits,
};

define_channel!(
    /// An analog-input virtual channel.
    ///
    /// Created by the factory methods on
    /// [`AiChannelCollection`](crate::channels::AiChannelCollection). The
    /// attribute set covers every AI sensor family; the driver rejects
    /// accesses that do not apply to the channel's measurement type.
    AiChannel
);

impl AiChannel {
    // ------------------------------------------------------------------
    // Range and scaling
    // ------------------------------------------------------------------

    chan_attr_f64!(
        /// The maximum value you expect to measure, in the channel's units.
        ///
        /// The driver may coerce this upward to the nearest supported range.
        ai_max, set_ai_max, reset_ai_max, "AIMax");

    chan_attr_f64!(
        /// The minimum value you expect to measure, in the channel's units.
        ai_min, set_ai_min, reset_ai_min, "AIMin");

    chan_attr_scale!(
        /// The custom scale applied to this channel's data.
        ai_custom_scale, set_ai_custom_scale, reset_ai_custom_scale, "AICustomScaleName");

    chan_attr_enum_ro!(
        /// The measurement this channel was created to take.
        ai_meas_type, AiMeasurementType, "AIMeasType");

    chan_attr_f64_array_ro!(
        /// Coefficients of the device's raw-to-scaled conversion polynomial.
        ai_dev_scaling_coeff, "AIDevScalingCoeff");

    chan_attr_f64_ro!(
        /// Resolution of the ADC servicing this channel.
        ai_resolution, "AIResolution");

    chan_attr_u32_ro!(
        /// Size in bits of one raw sample.
        ai_raw_samp_size, "AIRawSampSize");

    chan_attr_enum_ro!(
        /// Justification of raw samples narrower than their container.
        ai_raw_samp_justification, DataJustification, "AIRawSampJustification");

    // ------------------------------------------------------------------
    // Input path
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Terminal configuration of the input path.
        ai_term_cfg, set_ai_term_cfg, reset_ai_term_cfg, TerminalConfiguration, "AITermCfg");

    chan_attr_string!(
        /// Source terminal of the channel's input.
        ai_input_src, set_ai_input_src, reset_ai_input_src, "AIInputSrc");

    chan_attr_enum!(
        /// Input coupling.
        ai_coupling, set_ai_coupling, reset_ai_coupling, Coupling, "AICoupling");

    chan_attr_f64!(
        /// Input impedance in ohms.
        ai_impedance, set_ai_impedance, reset_ai_impedance, "AIImpedance");

    chan_attr_f64!(
        /// Gain factor applied by the device to this channel.
        ai_gain, set_ai_gain, reset_ai_gain, "AIGain");

    chan_attr_f64!(
        /// Attenuation factor applied by the device to this channel.
        ai_atten, set_ai_atten, reset_ai_atten, "AIAtten");

    chan_attr_bool!(
        /// Whether the device applies dither to the signal before conversion.
        ai_dither_enable, set_ai_dither_enable, reset_ai_dither_enable, "AIDitherEnable");

    chan_attr_bool!(
        /// Whether sample-and-hold circuitry holds the signal during conversion.
        ai_samp_and_hold_enable, set_ai_samp_and_hold_enable, reset_ai_samp_and_hold_enable,
        "AISampAndHoldEnable");

    chan_attr_enum!(
        /// When the device compensates for its own offset drift.
        ai_auto_zero_mode, set_ai_auto_zero_mode, reset_ai_auto_zero_mode, AutoZeroType,
        "AIAutoZeroMode");

    chan_attr_enum!(
        /// Timing-engine profile of a sigma-delta converter.
        ai_adc_timing_mode, set_ai_adc_timing_mode, reset_ai_adc_timing_mode, AdcTimingMode,
        "AIADCTimingMode");

    chan_attr_u32!(
        /// Custom timing-mode value when `ai_adc_timing_mode` is custom.
        ai_adc_custom_timing_mode, set_ai_adc_custom_timing_mode,
        reset_ai_adc_custom_timing_mode, "AIADCCustomTimingMode");

    chan_attr_bool!(
        /// Whether enhanced alias rejection is enabled.
        ai_enhanced_alias_rejection_enable, set_ai_enhanced_alias_rejection_enable,
        reset_ai_enhanced_alias_rejection_enable, "AIEnhancedAliasRejectionEnable");

    chan_attr_bool!(
        /// Whether the lowpass filter is applied to this channel.
        ai_lowpass_enable, set_ai_lowpass_enable, reset_ai_lowpass_enable, "AILowpassEnable");

    chan_attr_f64!(
        /// Cutoff frequency of the lowpass filter in hertz.
        ai_lowpass_cutoff_freq, set_ai_lowpass_cutoff_freq, reset_ai_lowpass_cutoff_freq,
        "AILowpassCutoffFreq");

    chan_attr_u32!(
        /// Number of samples averaged into each delivered sample.
        ai_averaging_win_size, set_ai_averaging_win_size, reset_ai_averaging_win_size,
        "AIAveragingWinSize");

    chan_attr_f64_ro!(
        /// Filter delay of this channel's input path, in seconds.
        ai_filter_delay, "AIFilterDelay");

    // ------------------------------------------------------------------
    // Voltage, current, charge
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for voltage measurements.
        ai_voltage_units, set_ai_voltage_units, reset_ai_voltage_units, VoltageUnits,
        "AIVoltageUnits");

    chan_attr_enum!(
        /// Units for current measurements.
        ai_current_units, set_ai_current_units, reset_ai_current_units, CurrentUnits,
        "AICurrentUnits");

    chan_attr_enum!(
        /// Location of the shunt resistor for current measurements.
        ai_current_shunt_loc, set_ai_current_shunt_loc, reset_ai_current_shunt_loc,
        CurrentShuntResistorLocation, "AICurrentShuntLoc");

    chan_attr_f64!(
        /// Resistance of the shunt in ohms.
        ai_current_shunt_resistance, set_ai_current_shunt_resistance,
        reset_ai_current_shunt_resistance, "AICurrentShuntResistance");

    chan_attr_enum!(
        /// Units for charge measurements.
        ai_charge_units, set_ai_charge_units, reset_ai_charge_units, ChargeUnits,
        "AIChargeUnits");

    // ------------------------------------------------------------------
    // Temperature
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for temperature measurements.
        ai_temp_units, set_ai_temp_units, reset_ai_temp_units, TemperatureUnits, "AITempUnits");

    chan_attr_enum!(
        /// Thermocouple wire type.
        ai_thrmcpl_type, set_ai_thrmcpl_type, reset_ai_thrmcpl_type, ThermocoupleType,
        "AIThrmcplType");

    chan_attr_enum_ro!(
        /// Where cold-junction compensation comes from.
        ///
        /// Fixed at channel creation.
        ai_thrmcpl_cjc_src, CjcSource, "AIThrmcplCJCSrc");

    chan_attr_f64!(
        /// The constant cold-junction temperature, in the channel's units.
        ai_thrmcpl_cjc_val, set_ai_thrmcpl_cjc_val, reset_ai_thrmcpl_cjc_val, "AIThrmcplCJCVal");

    chan_attr_string_ro!(
        /// Channel supplying the cold-junction temperature.
        ai_thrmcpl_cjc_chan, "AIThrmcplCJCChan");

    chan_attr_bool!(
        /// Whether open-thermocouple detection is enabled.
        ai_open_thrmcpl_detect_enable, set_ai_open_thrmcpl_detect_enable,
        reset_ai_open_thrmcpl_detect_enable, "AIOpenThrmcplDetectEnable");

    chan_attr_enum!(
        /// Standardized RTD curve.
        ai_rtd_type, set_ai_rtd_type, reset_ai_rtd_type, RtdType, "AIRTDType");

    chan_attr_f64!(
        /// RTD resistance at 0 degrees Celsius, in ohms.
        ai_rtd_r0, set_ai_rtd_r0, reset_ai_rtd_r0, "AIRTDR0");

    chan_attr_f64!(
        /// Callendar-Van Dusen A coefficient of a custom RTD.
        ai_rtd_a, set_ai_rtd_a, reset_ai_rtd_a, "AIRTDA");

    chan_attr_f64!(
        /// Callendar-Van Dusen B coefficient of a custom RTD.
        ai_rtd_b, set_ai_rtd_b, reset_ai_rtd_b, "AIRTDB");

    chan_attr_f64!(
        /// Callendar-Van Dusen C coefficient of a custom RTD.
        ai_rtd_c, set_ai_rtd_c, reset_ai_rtd_c, "AIRTDC");

    chan_attr_f64!(
        /// Steinhart-Hart A constant of a thermistor.
        ai_thrmstr_a, set_ai_thrmstr_a, reset_ai_thrmstr_a, "AIThrmstrA");

    chan_attr_f64!(
        /// Steinhart-Hart B constant of a thermistor.
        ai_thrmstr_b, set_ai_thrmstr_b, reset_ai_thrmstr_b, "AIThrmstrB");

    chan_attr_f64!(
        /// Steinhart-Hart C constant of a thermistor.
        ai_thrmstr_c, set_ai_thrmstr_c, reset_ai_thrmstr_c, "AIThrmstrC");

    chan_attr_f64!(
        /// Reference resistance of a voltage-excited thermistor, in ohms.
        ai_thrmstr_r1, set_ai_thrmstr_r1, reset_ai_thrmstr_r1, "AIThrmstrR1");

    // ------------------------------------------------------------------
    // Resistance
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for resistance measurements.
        ai_resistance_units, set_ai_resistance_units, reset_ai_resistance_units,
        ResistanceUnits, "AIResistanceUnits");

    chan_attr_enum!(
        /// Wiring configuration for resistive measurements.
        ai_resistance_cfg, set_ai_resistance_cfg, reset_ai_resistance_cfg,
        ResistanceConfiguration, "AIResistanceCfg");

    chan_attr_f64!(
        /// Resistance of the lead wires, in ohms.
        ai_lead_wire_resistance, set_ai_lead_wire_resistance, reset_ai_lead_wire_resistance,
        "AILeadWireResistance");

    // ------------------------------------------------------------------
    // Excitation
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Source of the channel's excitation.
        ai_excit_src, set_ai_excit_src, reset_ai_excit_src, ExcitationSource, "AIExcitSrc");

    chan_attr_f64!(
        /// Amount of excitation, in volts or amps per
        /// [`ai_excit_voltage_or_current`](Self::ai_excit_voltage_or_current).
        ai_excit_val, set_ai_excit_val, reset_ai_excit_val, "AIExcitVal");

    chan_attr_f64!(
        /// The actual excitation delivered, used for ratiometric scaling.
        ai_excit_actual_val, set_ai_excit_actual_val, reset_ai_excit_actual_val,
        "AIExcitActualVal");

    chan_attr_bool!(
        /// Whether the excitation value participates in scaling.
        ai_excit_use_for_scaling, set_ai_excit_use_for_scaling, reset_ai_excit_use_for_scaling,
        "AIExcitUseForScaling");

    chan_attr_bool!(
        /// Whether excitation is multiplexed rather than continuous.
        ai_excit_use_multiplexed, set_ai_excit_use_multiplexed, reset_ai_excit_use_multiplexed,
        "AIExcitUseMultiplexed");

    chan_attr_enum!(
        /// DC or AC excitation.
        ai_excit_d_cor_ac, set_ai_excit_d_cor_ac, reset_ai_excit_d_cor_ac, ExcitationDcOrAc,
        "AIExcitDCorAC");

    chan_attr_enum!(
        /// Whether the channel uses voltage or current excitation.
        ai_excit_voltage_or_current, set_ai_excit_voltage_or_current,
        reset_ai_excit_voltage_or_current, ExcitationVoltageOrCurrent, "AIExcitVoltageOrCurrent");

    chan_attr_f64!(
        /// Frequency of AC excitation, in hertz.
        ai_ac_excit_freq, set_ai_ac_excit_freq, reset_ai_ac_excit_freq, "AIACExcitFreq");

    chan_attr_bool!(
        /// Whether AC excitation is synchronized across channels.
        ai_ac_excit_sync_enable, set_ai_ac_excit_sync_enable, reset_ai_ac_excit_sync_enable,
        "AIACExcitSyncEnable");

    chan_attr_enum!(
        /// Wire mode of an AC-excited sensor.
        ai_ac_excit_wire_mode, set_ai_ac_excit_wire_mode, reset_ai_ac_excit_wire_mode,
        AcExcitWireMode, "AIACExcitWireMode");

    // ------------------------------------------------------------------
    // Bridge sensors
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Wheatstone-bridge topology of the sensor.
        ai_bridge_cfg, set_ai_bridge_cfg, reset_ai_bridge_cfg, BridgeConfiguration, "AIBridgeCfg");

    chan_attr_enum!(
        /// Units for raw bridge-ratio measurements.
        ai_bridge_units, set_ai_bridge_units, reset_ai_bridge_units, BridgeUnits, "AIBridgeUnits");

    chan_attr_f64!(
        /// Nominal resistance of the bridge, in ohms.
        ai_bridge_nom_resistance, set_ai_bridge_nom_resistance, reset_ai_bridge_nom_resistance,
        "AIBridgeNomResistance");

    chan_attr_f64!(
        /// Bridge output voltage in the unloaded condition, used for offset
        /// nulling.
        ai_bridge_initial_voltage, set_ai_bridge_initial_voltage,
        reset_ai_bridge_initial_voltage, "AIBridgeInitialVoltage");

    chan_attr_f64!(
        /// Bridge output ratio in the unloaded condition.
        ai_bridge_initial_ratio, set_ai_bridge_initial_ratio, reset_ai_bridge_initial_ratio,
        "AIBridgeInitialRatio");

    chan_attr_bool!(
        /// Whether the shunt-calibration circuit is switched in.
        ai_bridge_shunt_cal_enable, set_ai_bridge_shunt_cal_enable,
        reset_ai_bridge_shunt_cal_enable, "AIBridgeShuntCalEnable");

    chan_attr_f64!(
        /// Gain adjustment determined by shunt calibration.
        ai_bridge_shunt_cal_gain_adjust, set_ai_bridge_shunt_cal_gain_adjust,
        reset_ai_bridge_shunt_cal_gain_adjust, "AIBridgeShuntCalGainAdjust");

    chan_attr_f64!(
        /// Resistance of shunt-calibration resistor A, in ohms.
        ai_bridge_shunt_cal_shunt_cal_a_resistance, set_ai_bridge_shunt_cal_shunt_cal_a_resistance,
        reset_ai_bridge_shunt_cal_shunt_cal_a_resistance, "AIBridgeShuntCalShuntCalAResistance");

    chan_attr_u32!(
        /// Coarse balance-potentiometer setting.
        ai_bridge_balance_coarse_pot, set_ai_bridge_balance_coarse_pot,
        reset_ai_bridge_balance_coarse_pot, "AIBridgeBalanceCoarsePot");

    chan_attr_u32!(
        /// Fine balance-potentiometer setting.
        ai_bridge_balance_fine_pot, set_ai_bridge_balance_fine_pot,
        reset_ai_bridge_balance_fine_pot, "AIBridgeBalanceFinePot");

    // ------------------------------------------------------------------
    // Strain
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for strain measurements.
        ai_strain_units, set_ai_strain_units, reset_ai_strain_units, StrainUnits,
        "AIStrainUnits");

    chan_attr_enum!(
        /// Bridge arrangement of the strain gage.
        ai_strain_gage_cfg, set_ai_strain_gage_cfg, reset_ai_strain_gage_cfg,
        StrainGageBridgeType, "AIStrainGageCfg");

    chan_attr_f64!(
        /// Sensitivity of the strain gage.
        ai_strain_gage_gage_factor, set_ai_strain_gage_gage_factor,
        reset_ai_strain_gage_gage_factor, "AIStrainGageGageFactor");

    chan_attr_f64!(
        /// Poisson ratio of the strained material.
        ai_strain_gage_poisson_ratio, set_ai_strain_gage_poisson_ratio,
        reset_ai_strain_gage_poisson_ratio, "AIStrainGagePoissonRatio");

    // ------------------------------------------------------------------
    // Force, pressure, torque
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for force measurements.
        ai_force_units, set_ai_force_units, reset_ai_force_units, ForceUnits, "AIForceUnits");

    chan_attr_f64!(
        /// Sensitivity of an IEPE force sensor.
        ai_force_iepe_sensor_sensitivity, set_ai_force_iepe_sensor_sensitivity,
        reset_ai_force_iepe_sensor_sensitivity, "AIForceIEPESensorSensitivity");

    chan_attr_enum!(
        /// Units of the IEPE force sensor's sensitivity figure.
        ai_force_iepe_sensor_sensitivity_units, set_ai_force_iepe_sensor_sensitivity_units,
        reset_ai_force_iepe_sensor_sensitivity_units, ForceIepeSensitivityUnits,
        "AIForceIEPESensorSensitivityUnits");

    chan_attr_enum!(
        /// Units for pressure measurements.
        ai_pressure_units, set_ai_pressure_units, reset_ai_pressure_units, PressureUnits,
        "AIPressureUnits");

    chan_attr_enum!(
        /// Units for torque measurements.
        ai_torque_units, set_ai_torque_units, reset_ai_torque_units, TorqueUnits,
        "AITorqueUnits");

    // ------------------------------------------------------------------
    // Acceleration, velocity, sound
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for acceleration measurements.
        ai_accel_units, set_ai_accel_units, reset_ai_accel_units, AccelUnits, "AIAccelUnits");

    chan_attr_f64!(
        /// Sensitivity of the accelerometer.
        ai_accel_sensitivity, set_ai_accel_sensitivity, reset_ai_accel_sensitivity,
        "AIAccelSensitivity");

    chan_attr_enum!(
        /// Units of the accelerometer's sensitivity figure.
        ai_accel_sensitivity_units, set_ai_accel_sensitivity_units,
        reset_ai_accel_sensitivity_units, AccelSensitivityUnits, "AIAccelSensitivityUnits");

    chan_attr_f64!(
        /// Sensitivity of a charge-mode accelerometer.
        ai_accel_charge_sensitivity, set_ai_accel_charge_sensitivity,
        reset_ai_accel_charge_sensitivity, "AIAccelChargeSensitivity");

    chan_attr_enum!(
        /// Units of the charge-mode accelerometer's sensitivity figure.
        ai_accel_charge_sensitivity_units, set_ai_accel_charge_sensitivity_units,
        reset_ai_accel_charge_sensitivity_units, AccelChargeSensitivityUnits,
        "AIAccelChargeSensitivityUnits");

    chan_attr_f64!(
        /// Sensitivity of a 4-wire DC-voltage accelerometer.
        ai_accel_4_wire_dc_voltage_sensitivity, set_ai_accel_4_wire_dc_voltage_sensitivity,
        reset_ai_accel_4_wire_dc_voltage_sensitivity, "AIAccel4WireDCVoltageSensitivity");

    chan_attr_enum!(
        /// Units of the 4-wire DC-voltage accelerometer's sensitivity figure.
        ai_accel_4_wire_dc_voltage_sensitivity_units,
        set_ai_accel_4_wire_dc_voltage_sensitivity_units,
        reset_ai_accel_4_wire_dc_voltage_sensitivity_units, AccelSensitivityUnits,
        "AIAccel4WireDCVoltageSensitivityUnits");

    chan_attr_enum!(
        /// Units for linear velocity measurements.
        ai_velocity_units, set_ai_velocity_units, reset_ai_velocity_units, VelocityUnits,
        "AIVelocityUnits");

    chan_attr_f64!(
        /// Sensitivity of an IEPE velocity sensor.
        ai_velocity_iepe_sensor_sensitivity, set_ai_velocity_iepe_sensor_sensitivity,
        reset_ai_velocity_iepe_sensor_sensitivity, "AIVelocityIEPESensorSensitivity");

    chan_attr_enum!(
        /// Units of the IEPE velocity sensor's sensitivity figure.
        ai_velocity_iepe_sensor_sensitivity_units, set_ai_velocity_iepe_sensor_sensitivity_units,
        reset_ai_velocity_iepe_sensor_sensitivity_units, VelocityIepeSensitivityUnits,
        "AIVelocityIEPESensorSensitivityUnits");

    chan_attr_f64!(
        /// Sensitivity of the microphone, in millivolts per pascal.
        ai_microphone_sensitivity, set_ai_microphone_sensitivity,
        reset_ai_microphone_sensitivity, "AIMicrophoneSensitivity");

    chan_attr_enum!(
        /// Units for sound-pressure measurements.
        ai_sound_pressure_units, set_ai_sound_pressure_units, reset_ai_sound_pressure_units,
        SoundPressureUnits, "AISoundPressureUnits");

    chan_attr_f64!(
        /// Loudest sound level you expect to measure, in decibels.
        ai_sound_pressure_max_sound_pressure_lvl, set_ai_sound_pressure_max_sound_pressure_lvl,
        reset_ai_sound_pressure_max_sound_pressure_lvl, "AISoundPressureMaxSoundPressureLvl");

    // ------------------------------------------------------------------
    // Displacement (LVDT/RVDT)
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for LVDT position measurements.
        ai_lvdt_units, set_ai_lvdt_units, reset_ai_lvdt_units, LengthUnits, "AILVDTUnits");

    chan_attr_f64!(
        /// Sensitivity of the LVDT.
        ai_lvdt_sensitivity, set_ai_lvdt_sensitivity, reset_ai_lvdt_sensitivity,
        "AILVDTSensitivity");

    chan_attr_enum!(
        /// Units of the LVDT's sensitivity figure.
        ai_lvdt_sensitivity_units, set_ai_lvdt_sensitivity_units,
        reset_ai_lvdt_sensitivity_units, LvdtSensitivityUnits, "AILVDTSensitivityUnits");

    chan_attr_enum!(
        /// Units for RVDT position measurements.
        ai_rvdt_units, set_ai_rvdt_units, reset_ai_rvdt_units, AngleUnits, "AIRVDTUnits");

    chan_attr_f64!(
        /// Sensitivity of the RVDT.
        ai_rvdt_sensitivity, set_ai_rvdt_sensitivity, reset_ai_rvdt_sensitivity,
        "AIRVDTSensitivity");

    chan_attr_enum!(
        /// Units of the RVDT's sensitivity figure.
        ai_rvdt_sensitivity_units, set_ai_rvdt_sensitivity_units,
        reset_ai_rvdt_sensitivity_units, RvdtSensitivityUnits, "AIRVDTSensitivityUnits");

    // ------------------------------------------------------------------
    // Frequency-from-voltage
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for frequency measurements.
        ai_freq_units, set_ai_freq_units, reset_ai_freq_units, FrequencyUnits, "AIFreqUnits");

    chan_attr_f64!(
        /// Voltage level at which the signal counts as a cycle.
        ai_freq_thresh_voltage, set_ai_freq_thresh_voltage, reset_ai_freq_thresh_voltage,
        "AIFreqThreshVoltage");

    chan_attr_f64!(
        /// Hysteresis window below the threshold, in volts.
        ai_freq_hyst, set_ai_freq_hyst, reset_ai_freq_hyst, "AIFreqHyst");

    // ------------------------------------------------------------------
    // Data transfer
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// How samples move from the device to host memory.
        ai_data_xfer_mech, set_ai_data_xfer_mech, reset_ai_data_xfer_mech,
        DataTransferMechanism, "AIDataXferMech");

    chan_attr_enum!(
        /// Condition under which a transfer request is issued.
        ai_data_xfer_req_cond, set_ai_data_xfer_req_cond, reset_ai_data_xfer_req_cond,
        InputDataTransferCondition, "AIDataXferReqCond");

    chan_attr_u32!(
        /// Onboard-memory threshold for custom-condition transfers.
        ai_data_xfer_custom_threshold, set_ai_data_xfer_custom_threshold,
        reset_ai_data_xfer_custom_threshold, "AIDataXferCustomThreshold");

    chan_attr_u32!(
        /// Size in bytes of each USB transfer request.
        ai_usb_xfer_req_size, set_ai_usb_xfer_req_size, reset_ai_usb_xfer_req_size,
        "AIUsbXferReqSize");

    chan_attr_u32!(
        /// Number of outstanding USB transfer requests.
        ai_usb_xfer_req_count, set_ai_usb_xfer_req_count, reset_ai_usb_xfer_req_count,
        "AIUsbXferReqCount");

    chan_attr_bool!(
        /// Whether driver buffers may be mapped into application memory.
        ai_mem_map_enable, set_ai_mem_map_enable, reset_ai_mem_map_enable, "AIMemMapEnable");
}

#[cfg(test)]
mod tests {
    use super::*;
    use nidaqmx_sys::TaskHandle;

    #[test]
    fn test_channel_identity() {
        let a = AiChannel::new(TaskHandle::null(), "myChan");
        let b = AiChannel::new(TaskHandle::null(), "myChan");
        assert_eq!(a, b);
        assert_eq!(a.name(), "myChan");

        let untyped: crate::channels::Channel = a.clone().into();
        assert_eq!(untyped.name(), "myChan");
    }
}
