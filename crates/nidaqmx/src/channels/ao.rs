//! Analog-output channels.

use super::define_channel;
use super::macros::{
    chan_attr_bool, chan_attr_enum, chan_attr_enum_ro, chan_attr_f64, chan_attr_f64_array_ro,
    chan_attr_f64_ro, chan_attr_scale, chan_attr_u32,
};
use crate::types::{
    AoIdleOutputBehavior, AoOutputType, CurrentUnits, DataTransferMechanism, ExcitationSource,
    FuncGenType, OutputDataTransferCondition, TerminalConfiguration, VoltageUnits,
};

define_channel!(
    /// An analog-output virtual channel.
    ///
    /// Created by the factory methods on
    /// [`AoChannelCollection`](crate::channels::AoChannelCollection).
    AoChannel
);

impl AoChannel {
    chan_attr_f64!(
        /// The maximum value you expect to generate, in the channel's units.
        ao_max, set_ao_max, reset_ao_max, "AOMax");

    chan_attr_f64!(
        /// The minimum value you expect to generate, in the channel's units.
        ao_min, set_ao_min, reset_ao_min, "AOMin");

    chan_attr_scale!(
        /// The custom scale applied to this channel's data.
        ao_custom_scale, set_ao_custom_scale, reset_ao_custom_scale, "AOCustomScaleName");

    chan_attr_enum_ro!(
        /// The generation this channel was created to perform.
        ao_output_type, AoOutputType, "AOOutputType");

    chan_attr_enum!(
        /// Units for voltage generations.
        ao_voltage_units, set_ao_voltage_units, reset_ao_voltage_units, VoltageUnits,
        "AOVoltageUnits");

    chan_attr_f64!(
        /// Current limit applied while generating voltage, in amps.
        ao_voltage_current_limit, set_ao_voltage_current_limit, reset_ao_voltage_current_limit,
        "AOVoltageCurrentLimit");

    chan_attr_enum!(
        /// Units for current generations.
        ao_current_units, set_ao_current_units, reset_ao_current_units, CurrentUnits,
        "AOCurrentUnits");

    chan_attr_enum!(
        /// Terminal configuration of the output path.
        ao_term_cfg, set_ao_term_cfg, reset_ao_term_cfg, TerminalConfiguration, "AOTermCfg");

    chan_attr_enum!(
        /// What the output does between generations.
        ao_idle_output_behavior, set_ao_idle_output_behavior, reset_ao_idle_output_behavior,
        AoIdleOutputBehavior, "AOIdleOutputBehavior");

    chan_attr_f64!(
        /// Impedance of the output stage, in ohms.
        ao_output_impedance, set_ao_output_impedance, reset_ao_output_impedance,
        "AOOutputImpedance");

    chan_attr_f64!(
        /// Impedance of the load wired to the output, in ohms.
        ao_load_impedance, set_ao_load_impedance, reset_ao_load_impedance, "AOLoadImpedance");

    chan_attr_f64_ro!(
        /// Resolution of the DAC servicing this channel.
        ao_resolution, "AOResolution");

    chan_attr_f64!(
        /// Upper limit of the DAC's output range, in volts.
        ao_dac_rng_high, set_ao_dac_rng_high, reset_ao_dac_rng_high, "AODACRngHigh");

    chan_attr_f64!(
        /// Lower limit of the DAC's output range, in volts.
        ao_dac_rng_low, set_ao_dac_rng_low, reset_ao_dac_rng_low, "AODACRngLow");

    chan_attr_enum!(
        /// Source of the DAC's reference voltage.
        ao_dac_ref_src, set_ao_dac_ref_src, reset_ao_dac_ref_src, ExcitationSource, "AODACRefSrc");

    chan_attr_f64!(
        /// Value of the DAC's reference voltage, in volts.
        ao_dac_ref_val, set_ao_dac_ref_val, reset_ao_dac_ref_val, "AODACRefVal");

    chan_attr_bool!(
        /// Whether the DAC reference is tied to ground.
        ao_dac_ref_conn_to_gnd, set_ao_dac_ref_conn_to_gnd, reset_ao_dac_ref_conn_to_gnd,
        "AODACRefConnToGnd");

    chan_attr_bool!(
        /// Whether the DAC reference may be tied to ground.
        ao_dac_ref_allow_conn_to_gnd, set_ao_dac_ref_allow_conn_to_gnd,
        reset_ao_dac_ref_allow_conn_to_gnd, "AODACRefAllowConnToGnd");

    chan_attr_enum!(
        /// Source of the DAC's offset voltage.
        ao_dac_offset_src, set_ao_dac_offset_src, reset_ao_dac_offset_src, ExcitationSource,
        "AODACOffsetSrc");

    chan_attr_f64!(
        /// Value of the DAC's offset voltage, in volts.
        ao_dac_offset_val, set_ao_dac_offset_val, reset_ao_dac_offset_val, "AODACOffsetVal");

    chan_attr_bool!(
        /// Whether the output stage reglitches transitions.
        ao_reglitch_enable, set_ao_reglitch_enable, reset_ao_reglitch_enable, "AOReglitchEnable");

    chan_attr_f64!(
        /// Gain factor applied by the device to this channel.
        ao_gain, set_ao_gain, reset_ao_gain, "AOGain");

    chan_attr_bool!(
        /// Whether generation runs from onboard memory only.
        ao_use_only_on_brd_mem, set_ao_use_only_on_brd_mem, reset_ao_use_only_on_brd_mem,
        "AOUseOnlyOnBrdMem");

    chan_attr_enum!(
        /// How samples move from host memory to the device.
        ao_data_xfer_mech, set_ao_data_xfer_mech, reset_ao_data_xfer_mech,
        DataTransferMechanism, "AODataXferMech");

    chan_attr_enum!(
        /// Condition under which a transfer request is issued.
        ao_data_xfer_req_cond, set_ao_data_xfer_req_cond, reset_ao_data_xfer_req_cond,
        OutputDataTransferCondition, "AODataXferReqCond");

    chan_attr_u32!(
        /// Size in bytes of each USB transfer request.
        ao_usb_xfer_req_size, set_ao_usb_xfer_req_size, reset_ao_usb_xfer_req_size,
        "AOUsbXferReqSize");

    chan_attr_u32!(
        /// Number of outstanding USB transfer requests.
        ao_usb_xfer_req_count, set_ao_usb_xfer_req_count, reset_ao_usb_xfer_req_count,
        "AOUsbXferReqCount");

    chan_attr_bool!(
        /// Whether driver buffers may be mapped into application memory.
        ao_mem_map_enable, set_ao_mem_map_enable, reset_ao_mem_map_enable, "AOMemMapEnable");

    chan_attr_f64_array_ro!(
        /// Coefficients of the device's scaled-to-raw conversion polynomial.
        ao_dev_scaling_coeff, "AODevScalingCoeff");

    // ------------------------------------------------------------------
    // Function generation
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Waveform produced by a function-generator channel.
        ao_func_gen_type, set_ao_func_gen_type, reset_ao_func_gen_type, FuncGenType,
        "AOFuncGenType");

    chan_attr_f64!(
        /// Frequency of the generated waveform, in hertz.
        ao_func_gen_freq, set_ao_func_gen_freq, reset_ao_func_gen_freq, "AOFuncGenFreq");

    chan_attr_f64!(
        /// Zero-to-peak amplitude of the generated waveform, in volts.
        ao_func_gen_amplitude, set_ao_func_gen_amplitude, reset_ao_func_gen_amplitude,
        "AOFuncGenAmplitude");

    chan_attr_f64!(
        /// Offset of the generated waveform, in volts.
        ao_func_gen_offset, set_ao_func_gen_offset, reset_ao_func_gen_offset, "AOFuncGenOffset");

    chan_attr_f64!(
        /// Duty cycle of a generated square wave, in percent.
        ao_func_gen_square_duty_cycle, set_ao_func_gen_square_duty_cycle,
        reset_ao_func_gen_square_duty_cycle, "AOFuncGenSquareDutyCycle");
}
