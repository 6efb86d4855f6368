//! Digital input and output channels.

use super::define_channel;
use super::macros::{
    chan_attr_bool, chan_attr_enum, chan_attr_f64, chan_attr_string, chan_attr_u32,
    chan_attr_u32_ro,
};
use crate::types::{
    DataTransferMechanism, DigitalLineState, InputDataTransferCondition, LogicFamily,
    OutputDataTransferCondition, OutputDriveType,
};

define_channel!(
    /// A digital-input virtual channel.
    ///
    /// Created by
    /// [`add_di_chan`](crate::channels::DiChannelCollection::add_di_chan);
    /// covers one line or a whole port depending on the line grouping
    /// chosen at creation.
    DiChannel
);

impl DiChannel {
    chan_attr_bool!(
        /// Whether the lines are read inverted.
        di_invert_lines, set_di_invert_lines, reset_di_invert_lines, "DIInvertLines");

    chan_attr_u32_ro!(
        /// Number of physical lines in the channel.
        di_num_lines, "DINumLines");

    chan_attr_bool!(
        /// Whether the input digital filter is enabled.
        di_dig_fltr_enable, set_di_dig_fltr_enable, reset_di_dig_fltr_enable, "DIDigFltrEnable");

    chan_attr_f64!(
        /// Shortest pulse the filter passes, in seconds.
        di_dig_fltr_min_pulse_width, set_di_dig_fltr_min_pulse_width,
        reset_di_dig_fltr_min_pulse_width, "DIDigFltrMinPulseWidth");

    chan_attr_string!(
        /// Source terminal of the filter timebase.
        di_dig_fltr_timebase_src, set_di_dig_fltr_timebase_src, reset_di_dig_fltr_timebase_src,
        "DIDigFltrTimebaseSrc");

    chan_attr_f64!(
        /// Rate of the filter timebase, in hertz.
        di_dig_fltr_timebase_rate, set_di_dig_fltr_timebase_rate,
        reset_di_dig_fltr_timebase_rate, "DIDigFltrTimebaseRate");

    chan_attr_bool!(
        /// Whether input transitions synchronize to the sample clock.
        di_dig_sync_enable, set_di_dig_sync_enable, reset_di_dig_sync_enable, "DIDigSyncEnable");

    chan_attr_bool!(
        /// Whether the lines float while the task does not drive them.
        di_tristate, set_di_tristate, reset_di_tristate, "DITristate");

    chan_attr_enum!(
        /// Voltage family of the port.
        di_logic_family, set_di_logic_family, reset_di_logic_family, LogicFamily,
        "DILogicFamily");

    chan_attr_enum!(
        /// How samples move from the device to host memory.
        di_data_xfer_mech, set_di_data_xfer_mech, reset_di_data_xfer_mech,
        DataTransferMechanism, "DIDataXferMech");

    chan_attr_enum!(
        /// Condition under which a transfer request is issued.
        di_data_xfer_req_cond, set_di_data_xfer_req_cond, reset_di_data_xfer_req_cond,
        InputDataTransferCondition, "DIDataXferReqCond");

    chan_attr_u32!(
        /// Size in bytes of each USB transfer request.
        di_usb_xfer_req_size, set_di_usb_xfer_req_size, reset_di_usb_xfer_req_size,
        "DIUsbXferReqSize");

    chan_attr_u32!(
        /// Number of outstanding USB transfer requests.
        di_usb_xfer_req_count, set_di_usb_xfer_req_count, reset_di_usb_xfer_req_count,
        "DIUsbXferReqCount");

    chan_attr_bool!(
        /// Whether driver buffers may be mapped into application memory.
        di_mem_map_enable, set_di_mem_map_enable, reset_di_mem_map_enable, "DIMemMapEnable");
}

define_channel!(
    /// A digital-output virtual channel.
    ///
    /// Created by
    /// [`add_do_chan`](crate::channels::DoChannelCollection::add_do_chan).
    DoChannel
);

impl DoChannel {
    chan_attr_bool!(
        /// Whether the lines are driven inverted.
        do_invert_lines, set_do_invert_lines, reset_do_invert_lines, "DOInvertLines");

    chan_attr_u32_ro!(
        /// Number of physical lines in the channel.
        do_num_lines, "DONumLines");

    chan_attr_bool!(
        /// Whether the lines float while the task does not drive them.
        do_tristate, set_do_tristate, reset_do_tristate, "DOTristate");

    chan_attr_enum!(
        /// State of the lines when the task starts.
        do_line_states_start_state, set_do_line_states_start_state,
        reset_do_line_states_start_state, DigitalLineState, "DOLineStatesStartState");

    chan_attr_enum!(
        /// State of the lines when the task finishes.
        do_line_states_done_state, set_do_line_states_done_state,
        reset_do_line_states_done_state, DigitalLineState, "DOLineStatesDoneState");

    chan_attr_enum!(
        /// State of the lines while the task is paused.
        do_line_states_paused_state, set_do_line_states_paused_state,
        reset_do_line_states_paused_state, DigitalLineState, "DOLineStatesPausedState");

    chan_attr_enum!(
        /// Voltage family of the port.
        do_logic_family, set_do_logic_family, reset_do_logic_family, LogicFamily,
        "DOLogicFamily");

    chan_attr_enum!(
        /// Electrical drive of the output stage.
        do_output_drive_type, set_do_output_drive_type, reset_do_output_drive_type,
        OutputDriveType, "DOOutputDriveType");

    chan_attr_f64!(
        /// Current limit of the output stage, in amps.
        do_overcurrent_limit, set_do_overcurrent_limit, reset_do_overcurrent_limit,
        "DOOvercurrentLimit");

    chan_attr_bool!(
        /// Whether the output re-enables itself after an overcurrent trip.
        do_overcurrent_auto_reenable, set_do_overcurrent_auto_reenable,
        reset_do_overcurrent_auto_reenable, "DOOvercurrentAutoReenable");

    chan_attr_f64!(
        /// Delay before an automatic re-enable, in seconds.
        do_overcurrent_reenable_period, set_do_overcurrent_reenable_period,
        reset_do_overcurrent_reenable_period, "DOOvercurrentReenablePeriod");

    chan_attr_bool!(
        /// Whether generation runs from onboard memory only.
        do_use_only_on_brd_mem, set_do_use_only_on_brd_mem, reset_do_use_only_on_brd_mem,
        "DOUseOnlyOnBrdMem");

    chan_attr_enum!(
        /// How samples move from host memory to the device.
        do_data_xfer_mech, set_do_data_xfer_mech, reset_do_data_xfer_mech,
        DataTransferMechanism, "DODataXferMech");

    chan_attr_enum!(
        /// Condition under which a transfer request is issued.
        do_data_xfer_req_cond, set_do_data_xfer_req_cond, reset_do_data_xfer_req_cond,
        OutputDataTransferCondition, "DODataXferReqCond");

    chan_attr_u32!(
        /// Size in bytes of each USB transfer request.
        do_usb_xfer_req_size, set_do_usb_xfer_req_size, reset_do_usb_xfer_req_size,
        "DOUsbXferReqSize");

    chan_attr_u32!(
        /// Number of outstanding USB transfer requests.
        do_usb_xfer_req_count, set_do_usb_xfer_req_count, reset_do_usb_xfer_req_count,
        "DOUsbXferReqCount");

    chan_attr_bool!(
        /// Whether driver buffers may be mapped into application memory.
        do_mem_map_enable, set_do_mem_map_enable, reset_do_mem_map_enable, "DOMemMapEnable");
}
