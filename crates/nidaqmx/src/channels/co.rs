//! Counter-output channels.

use super::define_channel;
use super::macros::{
    chan_attr_bool, chan_attr_bool_ro, chan_attr_enum, chan_attr_enum_ro, chan_attr_f64,
    chan_attr_string, chan_attr_u32, chan_attr_u32_ro,
};
use crate::types::{
    ConstrainedGenMode, CoOutputType, Edge, FrequencyUnits, Level, TimeUnits,
};

define_channel!(
    /// A counter-output virtual channel.
    ///
    /// Created by the factory methods on
    /// [`CoChannelCollection`](crate::channels::CoChannelCollection).
    CoChannel
);

impl CoChannel {
    chan_attr_enum_ro!(
        /// The generation this channel was created to perform.
        co_output_type, CoOutputType, "COOutputType");

    chan_attr_enum!(
        /// Resting state of the output terminal.
        co_pulse_idle_state, set_co_pulse_idle_state, reset_co_pulse_idle_state, Level,
        "COPulseIdleState");

    chan_attr_string!(
        /// Terminal the pulse train is routed to.
        co_pulse_term, set_co_pulse_term, reset_co_pulse_term, "COPulseTerm");

    chan_attr_u32_ro!(
        /// The counter's current count.
        co_count, "COCount");

    chan_attr_enum_ro!(
        /// Current state of the counter's output terminal.
        co_output_state, Level, "COOutputState");

    chan_attr_bool_ro!(
        /// Whether the counter is ready for a new pulse specification.
        co_rdy_for_new_val, "CORdyForNewVal");

    chan_attr_bool_ro!(
        /// Whether the current pulse train has finished.
        co_pulse_done, "COPulseDone");

    // ------------------------------------------------------------------
    // Time-defined pulses
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units of the high/low time specifications.
        co_pulse_time_units, set_co_pulse_time_units, reset_co_pulse_time_units, TimeUnits,
        "COPulseTimeUnits");

    chan_attr_f64!(
        /// Time the pulse is high, in the channel's units.
        co_pulse_high_time, set_co_pulse_high_time, reset_co_pulse_high_time, "COPulseHighTime");

    chan_attr_f64!(
        /// Time the pulse is low, in the channel's units.
        co_pulse_low_time, set_co_pulse_low_time, reset_co_pulse_low_time, "COPulseLowTime");

    chan_attr_f64!(
        /// Delay before the first pulse, in seconds.
        co_pulse_time_initial_delay, set_co_pulse_time_initial_delay,
        reset_co_pulse_time_initial_delay, "COPulseTimeInitialDelay");

    // ------------------------------------------------------------------
    // Frequency-defined pulses
    // ------------------------------------------------------------------

    chan_attr_enum!(
        /// Units of the frequency specification.
        co_pulse_freq_units, set_co_pulse_freq_units, reset_co_pulse_freq_units,
        FrequencyUnits, "COPulseFreqUnits");

    chan_attr_f64!(
        /// Frequency of the pulse train, in the channel's units.
        co_pulse_freq, set_co_pulse_freq, reset_co_pulse_freq, "COPulseFreq");

    chan_attr_f64!(
        /// Fraction of each period the output is high.
        co_pulse_duty_cyc, set_co_pulse_duty_cyc, reset_co_pulse_duty_cyc, "COPulseDutyCyc");

    chan_attr_f64!(
        /// Delay before the first pulse, in seconds.
        co_pulse_freq_initial_delay, set_co_pulse_freq_initial_delay,
        reset_co_pulse_freq_initial_delay, "COPulseFreqInitialDelay");

    // ------------------------------------------------------------------
    // Tick-defined pulses
    // ------------------------------------------------------------------

    chan_attr_u32!(
        /// Timebase ticks the pulse is high.
        co_pulse_high_ticks, set_co_pulse_high_ticks, reset_co_pulse_high_ticks,
        "COPulseHighTicks");

    chan_attr_u32!(
        /// Timebase ticks the pulse is low.
        co_pulse_low_ticks, set_co_pulse_low_ticks, reset_co_pulse_low_ticks, "COPulseLowTicks");

    chan_attr_u32!(
        /// Timebase ticks before the first pulse.
        co_pulse_ticks_initial_delay, set_co_pulse_ticks_initial_delay,
        reset_co_pulse_ticks_initial_delay, "COPulseTicksInitialDelay");

    // ------------------------------------------------------------------
    // Timebase and generation behavior
    // ------------------------------------------------------------------

    chan_attr_string!(
        /// Source terminal of the counter timebase.
        co_ctr_timebase_src, set_co_ctr_timebase_src, reset_co_ctr_timebase_src,
        "COCtrTimebaseSrc");

    chan_attr_f64!(
        /// Rate of the counter timebase, in hertz.
        co_ctr_timebase_rate, set_co_ctr_timebase_rate, reset_co_ctr_timebase_rate,
        "COCtrTimebaseRate");

    chan_attr_enum!(
        /// Timebase edge on which the counter advances.
        co_ctr_timebase_active_edge, set_co_ctr_timebase_active_edge,
        reset_co_ctr_timebase_active_edge, Edge, "COCtrTimebaseActiveEdge");

    chan_attr_u32!(
        /// Amount the pulse specification increments after each trigger.
        co_auto_incr_cnt, set_co_auto_incr_cnt, reset_co_auto_incr_cnt, "COAutoIncrCnt");

    chan_attr_enum!(
        /// Constraint applied to the pulse generation.
        co_constrained_gen_mode, set_co_constrained_gen_mode, reset_co_constrained_gen_mode,
        ConstrainedGenMode, "COConstrainedGenMode");

    chan_attr_bool!(
        /// Whether generation runs from onboard memory only.
        co_use_only_on_brd_mem, set_co_use_only_on_brd_mem, reset_co_use_only_on_brd_mem,
        "COUseOnlyOnBrdMem");

    chan_attr_u32!(
        /// Division applied ahead of the counter.
        co_prescaler, set_co_prescaler, reset_co_prescaler, "COPrescaler");

    chan_attr_bool!(
        /// Whether the initial delay is re-applied on every retrigger.
        co_enable_initial_delay_on_retrigger, set_co_enable_initial_delay_on_retrigger,
        reset_co_enable_initial_delay_on_retrigger, "COEnableInitialDelayOnRetrigger");
}
