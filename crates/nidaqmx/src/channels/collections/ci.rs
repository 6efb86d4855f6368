//! Counter-input channel factories.
//!
//! Counter channels are created on a counter (e.g. `Dev1/ctr0`) rather
//! than an analog or digital terminal; the measured signal's terminal is a
//! separate channel attribute with a device default.

use tracing::debug;

use nidaqmx_sys::functions;

use super::CiChannelCollection;
use crate::channels::CiChannel;
use crate::error::{check, Result};
use crate::marshal::{cstring, cstring_opt, to_bool32};
use crate::scale::Scale;
use crate::types::{
    AngleUnits, AngularVelocityUnits, CountDirection, CounterFrequencyMethod, Edge, EncoderType,
    EncoderZIndexPhase, FrequencyUnits, LengthUnits, TimeUnits, VelocityUnits,
};
use crate::utils::assigned_channel_name;

impl CiChannelCollection {
    /// Create a channel counting edges of a digital signal.
    pub fn add_ci_count_edges_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        edge: Edge,
        initial_count: u32,
        count_direction: CountDirection,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_COUNT_EDGES_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: signature matches the driver prototype; every string is
        // null-terminated and outlives the call.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                edge.to_raw(),
                initial_count,
                count_direction.to_raw(),
            )
        })?;
        debug!(counter, "Created CI count-edges channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the frequency of a digital signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_freq_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: FrequencyUnits,
        edge: Edge,
        meas_method: CounterFrequencyMethod,
        meas_time: f64,
        divisor: u32,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_FREQ_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                edge.to_raw(),
                meas_method.to_raw(),
                meas_time,
                divisor,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI frequency channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the period of a digital signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_period_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TimeUnits,
        edge: Edge,
        meas_method: CounterFrequencyMethod,
        meas_time: f64,
        divisor: u32,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_PERIOD_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                edge.to_raw(),
                meas_method.to_raw(),
                meas_time,
                divisor,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI period channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the width of a digital pulse.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_pulse_width_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TimeUnits,
        starting_edge: Edge,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_PULSE_WIDTH_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                starting_edge.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI pulse-width channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring each half-period of a digital signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_semi_period_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TimeUnits,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_SEMI_PERIOD_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI semi-period channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the separation between two digital edges.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_two_edge_sep_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TimeUnits,
        first_edge: Edge,
        second_edge: Edge,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_TWO_EDGE_SEP_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
                first_edge.to_raw(),
                second_edge.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI two-edge-separation channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the duty cycle of a digital signal.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_duty_cycle_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_freq: f64,
        max_freq: f64,
        edge: Edge,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_DUTY_CYCLE_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_freq,
                max_freq,
                edge.to_raw(),
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI duty-cycle channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the frequency of an incoming pulse train.
    pub fn add_ci_pulse_chan_freq(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: FrequencyUnits,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_PULSE_CHAN_FREQ.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
            )
        })?;
        debug!(counter, "Created CI pulse (frequency) channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the high/low times of an incoming pulse
    /// train.
    pub fn add_ci_pulse_chan_time(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        units: TimeUnits,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_PULSE_CHAN_TIME.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                units.to_raw(),
            )
        })?;
        debug!(counter, "Created CI pulse (time) channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring the high/low tick counts of an incoming
    /// pulse train.
    pub fn add_ci_pulse_chan_ticks(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        source_terminal: &str,
        min_val: f64,
        max_val: f64,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_PULSE_CHAN_TICKS.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let source = cstring(source_terminal)?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                source.as_ptr(),
                min_val,
                max_val,
            )
        })?;
        debug!(counter, "Created CI pulse (ticks) channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring angular position with a quadrature
    /// encoder.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_ang_encoder_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        decoding_type: EncoderType,
        zidx_enable: bool,
        zidx_val: f64,
        zidx_phase: EncoderZIndexPhase,
        units: AngleUnits,
        pulses_per_rev: u32,
        initial_angle: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_ANG_ENCODER_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                decoding_type.to_raw(),
                to_bool32(zidx_enable),
                zidx_val,
                zidx_phase.to_raw(),
                units.to_raw(),
                pulses_per_rev,
                initial_angle,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI angular-encoder channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring linear position with an encoder.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_lin_encoder_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        decoding_type: EncoderType,
        zidx_enable: bool,
        zidx_val: f64,
        zidx_phase: EncoderZIndexPhase,
        units: LengthUnits,
        dist_per_pulse: f64,
        initial_pos: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_LIN_ENCODER_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                decoding_type.to_raw(),
                to_bool32(zidx_enable),
                zidx_val,
                zidx_phase.to_raw(),
                units.to_raw(),
                dist_per_pulse,
                initial_pos,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI linear-encoder channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring angular velocity with a quadrature
    /// encoder.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_ang_velocity_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        decoding_type: EncoderType,
        units: AngularVelocityUnits,
        pulses_per_rev: u32,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_ANG_VELOCITY_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                decoding_type.to_raw(),
                units.to_raw(),
                pulses_per_rev,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI angular-velocity channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }

    /// Create a channel measuring linear velocity with an encoder.
    #[allow(clippy::too_many_arguments)]
    pub fn add_ci_lin_velocity_chan(
        &self,
        counter: &str,
        name_to_assign: Option<&str>,
        min_val: f64,
        max_val: f64,
        decoding_type: EncoderType,
        units: VelocityUnits,
        dist_per_pulse: f64,
        custom_scale: Option<&Scale>,
    ) -> Result<CiChannel> {
        let f = functions::CREATE_CI_LIN_VELOCITY_CHAN.get()?;
        let ctr = cstring(counter)?;
        let name = cstring_opt(name_to_assign)?;
        let scale = cstring_opt(custom_scale.map(Scale::name))?;
        // SAFETY: as in `add_ci_count_edges_chan`.
        check(unsafe {
            f(
                self.task,
                ctr.as_ptr(),
                name.as_ptr(),
                min_val,
                max_val,
                decoding_type.to_raw(),
                units.to_raw(),
                dist_per_pulse,
                scale.as_ptr(),
            )
        })?;
        debug!(counter, "Created CI linear-velocity channel");
        Ok(CiChannel::new(
            self.task,
            assigned_channel_name(counter, name_to_assign),
        ))
    }
}
