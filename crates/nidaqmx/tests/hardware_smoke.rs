//! NI-DAQmx hardware smoke test suite.
//!
//! End-to-end scenarios against an installed driver and a real (or
//! simulated) device. Simulated devices created in NI MAX work for every
//! test here.
//!
//! # Environment Variables
//!
//! Required:
//! - `NIDAQMX_SMOKE_TEST=1` - enable the suite
//!
//! Optional:
//! - `NIDAQMX_DEVICE` - device name (default: "Dev1")
//!
//! # Quick Setup
//!
//! ```bash
//! export NIDAQMX_SMOKE_TEST=1
//! cargo test --features hardware -p nidaqmx --test hardware_smoke
//! ```

#![cfg(feature = "hardware")]

use std::env;
use std::sync::Arc;
use std::thread;

use nidaqmx::{
    unflatten_channel_string, BridgeConfiguration, BridgeElectricalUnits, BridgePhysicalUnits,
    DaqmxError, ExcitationSource, ForceUnits, Task, TerminalConfiguration, VoltageUnits,
};

/// Check if the smoke test is enabled via environment variable.
fn smoke_test_enabled() -> bool {
    env::var("NIDAQMX_SMOKE_TEST")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Device name from the environment, defaulting to "Dev1".
fn device() -> String {
    env::var("NIDAQMX_DEVICE").unwrap_or_else(|_| "Dev1".to_string())
}

macro_rules! skip_if_disabled {
    () => {
        if !smoke_test_enabled() {
            eprintln!("skipping: set NIDAQMX_SMOKE_TEST=1 to run");
            return;
        }
    };
}

#[test]
fn single_channel_voltage_creation_and_readback() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    let chan = task
        .ai_channels()
        .add_ai_voltage_chan(
            &format!("{dev}/ai0"),
            Some("myChan"),
            TerminalConfiguration::Default,
            -5.0,
            5.0,
            VoltageUnits::Volts,
            None,
        )
        .expect("create AI voltage channel");

    assert_eq!(chan.name(), "myChan");
    assert_eq!(
        task.channels().channel_names().expect("channel names"),
        vec!["myChan"]
    );

    // The driver may coerce the range upward to a supported one.
    let max = chan.ai_max().expect("read ai_max");
    assert!(max >= 5.0, "ai_max coerced below requested: {max}");
}

#[test]
fn multi_channel_name_suffixing() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    let chan = task
        .ai_channels()
        .add_ai_voltage_chan(
            &format!("{dev}/ai0:3"),
            Some("v"),
            TerminalConfiguration::Default,
            -10.0,
            10.0,
            VoltageUnits::Volts,
            None,
        )
        .expect("create AI voltage channels");

    assert_eq!(chan.name(), "v0:3");

    let names = task.channel_names().expect("channel names");
    assert_eq!(names, vec!["v0", "v1", "v2", "v3"]);
    assert_eq!(
        unflatten_channel_string(&names.join(",")),
        vec!["v0", "v1", "v2", "v3"]
    );
}

#[test]
fn polynomial_bridge_missing_reverse_coefficients_is_rejected() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    let result = task.ai_channels().add_ai_force_bridge_polynomial_chan(
        &format!("{dev}/ai0"),
        None,
        -100.0,
        100.0,
        ForceUnits::Newtons,
        BridgeConfiguration::FullBridge,
        ExcitationSource::Internal,
        2.5,
        350.0,
        &[0.0, 1.0],
        &[],
        BridgeElectricalUnits::MillivoltsPerVolt,
        BridgePhysicalUnits::Newtons,
        None,
    );

    // The binding never derives the missing direction; the driver's
    // rejection propagates and no channel is added.
    let err = result.expect_err("zero-length reverse coefficients must be rejected");
    assert!(
        err.code().is_some(),
        "expected a driver-coded rejection, got {err:?}"
    );
    assert_eq!(task.channels().len().expect("channel count"), 0);
}

#[test]
fn attribute_reset_restores_default() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    let chan = task
        .ao_channels()
        .add_ao_voltage_chan(
            &format!("{dev}/ao0"),
            Some("out"),
            -10.0,
            10.0,
            VoltageUnits::Volts,
            None,
        )
        .expect("create AO voltage channel");

    chan.set_ao_max(7.5).expect("set ao_max");
    let set_value = chan.ao_max().expect("read back ao_max");
    assert!(
        (set_value - 7.5).abs() < 1e-9 || set_value > 7.5,
        "get-after-set returned {set_value}"
    );

    chan.reset_ao_max().expect("reset ao_max");
    let default_value = chan.ao_max().expect("read default ao_max");
    // A +/-10 V device defaults back to 10.0.
    assert!(
        (default_value - set_value).abs() > 1e-9,
        "reset did not restore the device default (still {default_value})"
    );

    // A second reset is a no-op.
    chan.reset_ao_max().expect("second reset");
    let still_default = chan.ao_max().expect("read after second reset");
    assert!((still_default - default_value).abs() < 1e-9);
}

#[test]
fn get_after_set_round_trips() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    let chan = task
        .ai_channels()
        .add_ai_voltage_chan(
            &format!("{dev}/ai0"),
            None,
            TerminalConfiguration::Default,
            -10.0,
            10.0,
            VoltageUnits::Volts,
            None,
        )
        .expect("create AI voltage channel");

    chan.set_ai_min(-2.0).expect("set ai_min");
    let min = chan.ai_min().expect("read ai_min");
    // Driver coercion is idempotent; the stored value never exceeds the
    // request.
    assert!(min <= -2.0, "ai_min coerced upward: {min}");

    chan.set_description("bench supply monitor")
        .expect("set description");
    assert_eq!(
        chan.description().expect("read description"),
        "bench supply monitor"
    );
}

#[test]
fn typed_indexing_rejects_other_kinds() {
    skip_if_disabled!();
    let dev = device();

    let task = Task::new("").expect("create task");
    task.ai_channels()
        .add_ai_voltage_chan(
            &format!("{dev}/ai0"),
            Some("analog"),
            TerminalConfiguration::Default,
            -10.0,
            10.0,
            VoltageUnits::Volts,
            None,
        )
        .expect("create AI voltage channel");

    let err = task
        .ao_channels()
        .by_name("analog")
        .expect_err("AI channel must not resolve through the AO collection");
    assert!(matches!(err, DaqmxError::ChannelTypeMismatch { .. }));
}

#[test]
fn concurrent_first_use_of_factory_symbol() {
    skip_if_disabled!();
    let dev = Arc::new(device());

    // 64 threads race the first resolution of DAQmxCreateAIVoltageChan
    // against distinct tasks. Every call must complete and every channel
    // must behave; a torn signature slot would crash or corrupt here.
    let handles: Vec<_> = (0..64)
        .map(|i| {
            let dev = Arc::clone(&dev);
            thread::spawn(move || {
                let task = Task::new("").expect("create task");
                let assigned = format!("c{i}");
                let chan = task
                    .ai_channels()
                    .add_ai_voltage_chan(
                        &format!("{dev}/ai0"),
                        Some(assigned.as_str()),
                        TerminalConfiguration::Default,
                        -10.0,
                        10.0,
                        VoltageUnits::Volts,
                        None,
                    )
                    .expect("create AI voltage channel");
                assert_eq!(chan.name(), format!("c{i}"));
                assert!(chan.ai_max().expect("read ai_max") >= 10.0);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}
