//! Counter-input channels.

use super::define_channel;
use super::macros::{
    chan_attr_bool, chan_attr_bool_ro, chan_attr_enum, chan_attr_enum_ro, chan_attr_f64,
    chan_attr_scale, chan_attr_string, chan_attr_u32, chan_attr_u32_ro,
};
use crate::types::{
    AngleUnits, AngularVelocityUnits, CiMeasurementType, CountDirection, CounterFrequencyMethod,
    DataTransferMechanism, Edge, EncoderType, EncoderZIndexPhase, FrequencyUnits, LengthUnits,
    Level, LogicLevelBehavior, TimeUnits, VelocityUnits,
};

define_channel!(
    /// A counter-input virtual channel.
    ///
    /// Created by the factory methods on
    /// [`CiChannelCollection`](crate::channels::CiChannelCollection).
    CiChannel
);

impl CiChannel {
    chan_attr_f64!(
        /// The maximum value you expect to measure, in the channel's units.
        ci_max, set_ci_max, reset_ci_max, "CIMax");

    chan_attr_f64!(
        /// The minimum value you expect to measure, in the channel's units.
        ci_min, set_ci_min, reset_ci_min, "CIMin");

    chan_attr_scale!(
        /// The custom scale applied to this channel's data.
        ci_custom_scale, set_ci_custom_scale, reset_ci_custom_scale, "CICustomScaleName");

    chan_attr_enum_ro!(
        /// The measurement this channel was created to take.
        ci_meas_type, CiMeasurementType, "CIMeasType");

    chan_attr_u32_ro!(
        /// The counter's current count.
        ci_count, "CICount");

    chan_attr_enum_ro!(
        /// Current state of the counter's output terminal.
        ci_output_state, Level, "CIOutputState");

    chan_attr_bool_ro!(
        /// Whether the counter rolled over its terminal count.
        ci_tc_reached, "CITCReached");

    // ------------------------------------------------------------------
    // Edge counting
    // ------------------------------------------------------------------

    chan_attr_string!(
        /// Terminal whose edges are counted.
        ci_count_edges_term, set_ci_count_edges_term, reset_ci_count_edges_term,
        "CICountEdgesTerm");

    chan_attr_enum!(
        /// Which edges increment or decrement the count.
        ci_count_edges_active_edge, set_ci_count_edges_active_edge,
        reset_ci_count_edges_active_edge, Edge, "CICountEdgesActiveEdge");

    chan_attr_enum!(
        /// Direction of counting.
        ci_count_edges_dir, set_ci_count_edges_dir, reset_ci_count_edges_dir, CountDirection,
        "CICountEdgesDir");

    chan_attr_u32!(
        /// Value the count starts from.
        ci_count_edges_initial_cnt, set_ci_count_edges_initial_cnt,
        reset_ci_count_edges_initial_cnt, "CICountEdgesInitialCnt");

    chan_attr_bool!(
        /// Whether an auxiliary signal resets the count mid-run.
        ci_count_edges_count_reset_enable, set_ci_count_edges_count_reset_enable,
        reset_ci_count_edges_count_reset_enable, "CICountEdgesCountResetEnable");

    chan_attr_u32!(
        /// Value the count resets to.
        ci_count_edges_count_reset_reset_count, set_ci_count_edges_count_reset_reset_count,
        reset_ci_count_edges_count_reset_reset_count, "CICountEdgesCountResetResetCount");

    chan_attr_string!(
        /// Terminal of the reset signal.
        ci_count_edges_count_reset_term, set_ci_count_edges_count_reset_term,
        reset_ci_count_edges_count_reset_term, "CICountEdgesCountResetTerm");

    chan_attr_enum!(
        /// Edge of the reset signal that performs the reset.
        ci_count_edges_count_reset_active_edge, set_ci_count_edges_count_reset_active_edge,
        reset_ci_count_edges_count_reset_active_edge, Edge, "CICountEdgesCountResetActiveEdge");

    chan_attr_enum!(
        /// Input conditioning applied to the counted signal.
        ci_count_edges_logic_lvl_behavior, set_ci_count_edges_logic_lvl_behavior,
        reset_ci_count_edges_logic_lvl_behavior, LogicLevelBehavior,
        "CICountEdgesLogicLvlBehavior");

    // ------------------------------------------------------------------
    // Frequency and period
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for frequency measurements.
        ci_freq_units, set_ci_freq_units, reset_ci_freq_units, FrequencyUnits, "CIFreqUnits");

    chan_attr_string!(
        /// Terminal of the measured signal.
        ci_freq_term, set_ci_freq_term, reset_ci_freq_term, "CIFreqTerm");

    chan_attr_enum!(
        /// Edge that begins each measurement.
        ci_freq_starting_edge, set_ci_freq_starting_edge, reset_ci_freq_starting_edge, Edge,
        "CIFreqStartingEdge");

    chan_attr_enum!(
        /// Method used to measure frequency.
        ci_freq_meas_meth, set_ci_freq_meas_meth, reset_ci_freq_meas_meth,
        CounterFrequencyMethod, "CIFreqMeasMeth");

    chan_attr_f64!(
        /// Measurement window for averaged methods, in seconds.
        ci_freq_meas_time, set_ci_freq_meas_time, reset_ci_freq_meas_time, "CIFreqMeasTime");

    chan_attr_u32!(
        /// Input divisor for the large-range two-counter method.
        ci_freq_div, set_ci_freq_div, reset_ci_freq_div, "CIFreqDiv");

    chan_attr_bool!(
        /// Whether consecutive measurements are averaged.
        ci_freq_enable_averaging, set_ci_freq_enable_averaging, reset_ci_freq_enable_averaging,
        "CIFreqEnableAveraging");

    chan_attr_enum!(
        /// Input conditioning applied to the measured signal.
        ci_freq_logic_lvl_behavior, set_ci_freq_logic_lvl_behavior,
        reset_ci_freq_logic_lvl_behavior, LogicLevelBehavior, "CIFreqLogicLvlBehavior");

    chan_attr_enum!(
        /// Units for period measurements.
        ci_period_units, set_ci_period_units, reset_ci_period_units, TimeUnits, "CIPeriodUnits");

    chan_attr_string!(
        /// Terminal of the measured signal.
        ci_period_term, set_ci_period_term, reset_ci_period_term, "CIPeriodTerm");

    chan_attr_enum!(
        /// Edge that begins each measurement.
        ci_period_starting_edge, set_ci_period_starting_edge, reset_ci_period_starting_edge,
        Edge, "CIPeriodStartingEdge");

    chan_attr_enum!(
        /// Method used to measure period.
        ci_period_meas_meth, set_ci_period_meas_meth, reset_ci_period_meas_meth,
        CounterFrequencyMethod, "CIPeriodMeasMeth");

    chan_attr_f64!(
        /// Measurement window for averaged methods, in seconds.
        ci_period_meas_time, set_ci_period_meas_time, reset_ci_period_meas_time,
        "CIPeriodMeasTime");

    chan_attr_u32!(
        /// Input divisor for the large-range two-counter method.
        ci_period_div, set_ci_period_div, reset_ci_period_div, "CIPeriodDiv");

    // ------------------------------------------------------------------
    // Pulse width, semi-period, two-edge separation, duty cycle
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for pulse-width measurements.
        ci_pulse_width_units, set_ci_pulse_width_units, reset_ci_pulse_width_units, TimeUnits,
        "CIPulseWidthUnits");

    chan_attr_string!(
        /// Terminal of the measured pulse.
        ci_pulse_width_term, set_ci_pulse_width_term, reset_ci_pulse_width_term,
        "CIPulseWidthTerm");

    chan_attr_enum!(
        /// Edge that begins each pulse measurement.
        ci_pulse_width_starting_edge, set_ci_pulse_width_starting_edge,
        reset_ci_pulse_width_starting_edge, Edge, "CIPulseWidthStartingEdge");

    chan_attr_enum!(
        /// Units for semi-period measurements.
        ci_semi_period_units, set_ci_semi_period_units, reset_ci_semi_period_units, TimeUnits,
        "CISemiPeriodUnits");

    chan_attr_string!(
        /// Terminal of the measured signal.
        ci_semi_period_term, set_ci_semi_period_term, reset_ci_semi_period_term,
        "CISemiPeriodTerm");

    chan_attr_enum!(
        /// Edge that begins the first semi-period measurement.
        ci_semi_period_starting_edge, set_ci_semi_period_starting_edge,
        reset_ci_semi_period_starting_edge, Edge, "CISemiPeriodStartingEdge");

    chan_attr_enum!(
        /// Units for two-edge separation measurements.
        ci_two_edge_sep_units, set_ci_two_edge_sep_units, reset_ci_two_edge_sep_units,
        TimeUnits, "CITwoEdgeSepUnits");

    chan_attr_string!(
        /// Terminal of the starting signal.
        ci_two_edge_sep_first_term, set_ci_two_edge_sep_first_term,
        reset_ci_two_edge_sep_first_term, "CITwoEdgeSepFirstTerm");

    chan_attr_enum!(
        /// Edge of the starting signal.
        ci_two_edge_sep_first_edge, set_ci_two_edge_sep_first_edge,
        reset_ci_two_edge_sep_first_edge, Edge, "CITwoEdgeSepFirstEdge");

    chan_attr_string!(
        /// Terminal of the stopping signal.
        ci_two_edge_sep_second_term, set_ci_two_edge_sep_second_term,
        reset_ci_two_edge_sep_second_term, "CITwoEdgeSepSecondTerm");

    chan_attr_enum!(
        /// Edge of the stopping signal.
        ci_two_edge_sep_second_edge, set_ci_two_edge_sep_second_edge,
        reset_ci_two_edge_sep_second_edge, Edge, "CITwoEdgeSepSecondEdge");

    chan_attr_string!(
        /// Terminal of the measured signal.
        ci_duty_cycle_term, set_ci_duty_cycle_term, reset_ci_duty_cycle_term, "CIDutyCycleTerm");

    chan_attr_enum!(
        /// Edge that begins each duty-cycle measurement.
        ci_duty_cycle_starting_edge, set_ci_duty_cycle_starting_edge,
        reset_ci_duty_cycle_starting_edge, Edge, "CIDutyCycleStartingEdge");

    // ------------------------------------------------------------------
    // Encoders
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Decoding applied to the encoder's quadrature signals.
        ci_encoder_decoding_type, set_ci_encoder_decoding_type, reset_ci_encoder_decoding_type,
        EncoderType, "CIEncoderDecodingType");

    chan_attr_string!(
        /// Terminal of the encoder's A signal.
        ci_encoder_a_input_term, set_ci_encoder_a_input_term, reset_ci_encoder_a_input_term,
        "CIEncoderAInputTerm");

    chan_attr_string!(
        /// Terminal of the encoder's B signal.
        ci_encoder_b_input_term, set_ci_encoder_b_input_term, reset_ci_encoder_b_input_term,
        "CIEncoderBInputTerm");

    chan_attr_string!(
        /// Terminal of the encoder's Z signal.
        ci_encoder_z_input_term, set_ci_encoder_z_input_term, reset_ci_encoder_z_input_term,
        "CIEncoderZInputTerm");

    chan_attr_bool!(
        /// Whether the Z index reloads the count.
        ci_encoder_z_index_enable, set_ci_encoder_z_index_enable,
        reset_ci_encoder_z_index_enable, "CIEncoderZIndexEnable");

    chan_attr_f64!(
        /// Value the count reloads to at the Z index.
        ci_encoder_z_index_val, set_ci_encoder_z_index_val, reset_ci_encoder_z_index_val,
        "CIEncoderZIndexVal");

    chan_attr_enum!(
        /// Quadrature phase at which the Z index applies.
        ci_encoder_z_index_phase, set_ci_encoder_z_index_phase, reset_ci_encoder_z_index_phase,
        EncoderZIndexPhase, "CIEncoderZIndexPhase");

    chan_attr_enum!(
        /// Units for angular-position measurements.
        ci_ang_encoder_units, set_ci_ang_encoder_units, reset_ci_ang_encoder_units, AngleUnits,
        "CIAngEncoderUnits");

    chan_attr_u32!(
        /// Encoder pulses per revolution.
        ci_ang_encoder_pulses_per_rev, set_ci_ang_encoder_pulses_per_rev,
        reset_ci_ang_encoder_pulses_per_rev, "CIAngEncoderPulsesPerRev");

    chan_attr_f64!(
        /// Starting angle of the measurement.
        ci_ang_encoder_initial_angle, set_ci_ang_encoder_initial_angle,
        reset_ci_ang_encoder_initial_angle, "CIAngEncoderInitialAngle");

    chan_attr_enum!(
        /// Units for linear-position measurements.
        ci_lin_encoder_units, set_ci_lin_encoder_units, reset_ci_lin_encoder_units, LengthUnits,
        "CILinEncoderUnits");

    chan_attr_f64!(
        /// Distance traveled per encoder pulse.
        ci_lin_encoder_dist_per_pulse, set_ci_lin_encoder_dist_per_pulse,
        reset_ci_lin_encoder_dist_per_pulse, "CILinEncoderDistPerPulse");

    chan_attr_f64!(
        /// Starting position of the measurement.
        ci_lin_encoder_initial_pos, set_ci_lin_encoder_initial_pos,
        reset_ci_lin_encoder_initial_pos, "CILinEncoderInitialPos");

    // ------------------------------------------------------------------
    // Velocity
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units for angular-velocity measurements.
        ci_velocity_ang_encoder_units, set_ci_velocity_ang_encoder_units,
        reset_ci_velocity_ang_encoder_units, AngularVelocityUnits, "CIVelocityAngEncoderUnits");

    chan_attr_u32!(
        /// Encoder pulses per revolution for velocity measurements.
        ci_velocity_ang_encoder_pulses_per_rev, set_ci_velocity_ang_encoder_pulses_per_rev,
        reset_ci_velocity_ang_encoder_pulses_per_rev, "CIVelocityAngEncoderPulsesPerRev");

    chan_attr_enum!(
        /// Units for linear-velocity measurements.
        ci_velocity_lin_encoder_units, set_ci_velocity_lin_encoder_units,
        reset_ci_velocity_lin_encoder_units, VelocityUnits, "CIVelocityLinEncoderUnits");

    chan_attr_f64!(
        /// Distance traveled per encoder pulse for velocity measurements.
        ci_velocity_lin_encoder_dist_per_pulse, set_ci_velocity_lin_encoder_dist_per_pulse,
        reset_ci_velocity_lin_encoder_dist_per_pulse, "CIVelocityLinEncoderDistPerPulse");

    chan_attr_enum!(
        /// Decoding applied to the velocity encoder's signals.
        ci_velocity_encoder_decoding_type, set_ci_velocity_encoder_decoding_type,
        reset_ci_velocity_encoder_decoding_type, EncoderType, "CIVelocityEncoderDecodingType");

    chan_attr_f64!(
        /// Measurement window of each velocity sample, in seconds.
        ci_velocity_meas_time, set_ci_velocity_meas_time, reset_ci_velocity_meas_time,
        "CIVelocityMeasTime");

    chan_attr_u32!(
        /// Input divisor for velocity measurements.
        ci_velocity_div, set_ci_velocity_div, reset_ci_velocity_div, "CIVelocityDiv");

    // ------------------------------------------------------------------
    // Timebase, filtering, transfer
    // ------------------------------------------------------------------

    chan_attr_string!(
        /// Source terminal of the counter timebase.
        ci_ctr_timebase_src, set_ci_ctr_timebase_src, reset_ci_ctr_timebase_src,
        "CICtrTimebaseSrc");

    chan_attr_f64!(
        /// Rate of the counter timebase, in hertz.
        ci_ctr_timebase_rate, set_ci_ctr_timebase_rate, reset_ci_ctr_timebase_rate,
        "CICtrTimebaseRate");

    chan_attr_enum!(
        /// Timebase edge on which the counter advances.
        ci_ctr_timebase_active_edge, set_ci_ctr_timebase_active_edge,
        reset_ci_ctr_timebase_active_edge, Edge, "CICtrTimebaseActiveEdge");

    chan_attr_u32!(
        /// Division applied ahead of the counter.
        ci_prescaler, set_ci_prescaler, reset_ci_prescaler, "CIPrescaler");

    chan_attr_f64!(
        /// Longest measurable interval, in seconds.
        ci_max_meas_period, set_ci_max_meas_period, reset_ci_max_meas_period, "CIMaxMeasPeriod");

    chan_attr_bool!(
        /// Whether the input digital filter is enabled.
        ci_filter_enable, set_ci_filter_enable, reset_ci_filter_enable, "CIFilterEnable");

    chan_attr_f64!(
        /// Cutoff frequency of the input digital filter, in hertz.
        ci_filter_freq, set_ci_filter_freq, reset_ci_filter_freq, "CIFilterFreq");

    chan_attr_f64!(
        /// Voltage threshold of the input comparator.
        ci_thresh_voltage, set_ci_thresh_voltage, reset_ci_thresh_voltage, "CIThreshVoltage");

    chan_attr_enum!(
        /// How samples move from the counter to host memory.
        ci_data_xfer_mech, set_ci_data_xfer_mech, reset_ci_data_xfer_mech,
        DataTransferMechanism, "CIDataXferMech");

    chan_attr_u32!(
        /// Size in bytes of each USB transfer request.
        ci_usb_xfer_req_size, set_ci_usb_xfer_req_size, reset_ci_usb_xfer_req_size,
        "CIUsbXferReqSize");

    chan_attr_u32!(
        /// Number of outstanding USB transfer requests.
        ci_usb_xfer_req_count, set_ci_usb_xfer_req_count, reset_ci_usb_xfer_req_count,
        "CIUsbXferReqCount");

    chan_attr_bool!(
        /// Whether driver buffers may be mapped into application memory.
        ci_mem_map_enable, set_ci_mem_map_enable, reset_ci_mem_map_enable, "CIMemMapEnable");
}
