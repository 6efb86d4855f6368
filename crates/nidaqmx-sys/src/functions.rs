//! Declared driver entry points.
//!
//! One [`FunctionCache`] static per driver verb, carrying the exact C
//! prototype. Nothing here is resolved until a call site first uses it, so
//! the table may safely declare entry points that older driver versions do
//! not export.
//!
//! Per-channel attribute accessors (`DAQmxGet*`/`DAQmxSet*`/`DAQmxReset*`)
//! are not listed here: their signatures collapse into a handful of shared
//! shapes (see [`crate::types`]) and each accessor declares its own cache at
//! the call site.

use libc::c_char;

use crate::cache::FunctionCache;
use crate::types::{bool32, float64, int32, uInt32, TaskHandle};

macro_rules! declare_functions {
    ($(
        $(#[$meta:meta])*
        $name:ident: $symbol:literal => fn($($arg:ty),* $(,)?);
    )*) => {
        $(
            $(#[$meta])*
            pub static $name: FunctionCache<
                unsafe extern "system" fn($($arg),*) -> int32,
            > = FunctionCache::new($symbol);
        )*
    };
}

declare_functions! {
    // ------------------------------------------------------------------
    // Task lifecycle
    // ------------------------------------------------------------------

    /// `DAQmxCreateTask(taskName, *taskHandle)`
    CREATE_TASK: "DAQmxCreateTask" => fn(*const c_char, *mut TaskHandle);
    /// `DAQmxStartTask(task)`
    START_TASK: "DAQmxStartTask" => fn(TaskHandle);
    /// `DAQmxStopTask(task)`
    STOP_TASK: "DAQmxStopTask" => fn(TaskHandle);
    /// `DAQmxClearTask(task)`
    CLEAR_TASK: "DAQmxClearTask" => fn(TaskHandle);
    /// `DAQmxTaskControl(task, action)`
    TASK_CONTROL: "DAQmxTaskControl" => fn(TaskHandle, int32);
    /// `DAQmxWaitUntilTaskDone(task, timeToWait)`
    WAIT_UNTIL_TASK_DONE: "DAQmxWaitUntilTaskDone" => fn(TaskHandle, float64);
    /// `DAQmxIsTaskDone(task, *isTaskDone)`
    IS_TASK_DONE: "DAQmxIsTaskDone" => fn(TaskHandle, *mut bool32);

    // ------------------------------------------------------------------
    // Task queries
    // ------------------------------------------------------------------

    /// `DAQmxGetTaskName(task, buffer, bufferSize)`
    GET_TASK_NAME: "DAQmxGetTaskName" => fn(TaskHandle, *mut c_char, uInt32);
    /// `DAQmxGetTaskChannels(task, buffer, bufferSize)`
    GET_TASK_CHANNELS: "DAQmxGetTaskChannels" => fn(TaskHandle, *mut c_char, uInt32);
    /// `DAQmxGetTaskNumChans(task, *numChans)`
    GET_TASK_NUM_CHANS: "DAQmxGetTaskNumChans" => fn(TaskHandle, *mut uInt32);
    /// `DAQmxGetChanType(task, channel, *chanType)`
    GET_CHAN_TYPE: "DAQmxGetChanType" => fn(TaskHandle, *const c_char, *mut int32);

    // ------------------------------------------------------------------
    // Error information
    // ------------------------------------------------------------------

    /// `DAQmxGetExtendedErrorInfo(buffer, bufferSize)`
    GET_EXTENDED_ERROR_INFO: "DAQmxGetExtendedErrorInfo" => fn(*mut c_char, uInt32);
    /// `DAQmxGetErrorString(errorCode, buffer, bufferSize)`
    GET_ERROR_STRING: "DAQmxGetErrorString" => fn(int32, *mut c_char, uInt32);

    // ------------------------------------------------------------------
    // Analog-input channel factories
    // ------------------------------------------------------------------

    /// `DAQmxCreateAIVoltageChan(task, physicalChannel, nameToAssignToChannel,
    /// terminalConfig, minVal, maxVal, units, customScaleName)`
    CREATE_AI_VOLTAGE_CHAN: "DAQmxCreateAIVoltageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIVoltageRMSChan(...)` - same prototype as the voltage factory.
    CREATE_AI_VOLTAGE_RMS_CHAN: "DAQmxCreateAIVoltageRMSChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIVoltageChanWithExcit(task, physicalChannel, name,
    /// terminalConfig, minVal, maxVal, units, bridgeConfig, voltageExcitSource,
    /// voltageExcitVal, useExcitForScaling, customScaleName)`
    CREATE_AI_VOLTAGE_CHAN_WITH_EXCIT: "DAQmxCreateAIVoltageChanWithExcit" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32, int32,
           float64, bool32, *const c_char);
    /// `DAQmxCreateAICurrentChan(task, physicalChannel, name, terminalConfig,
    /// minVal, maxVal, units, shuntResistorLoc, extShuntResistorVal, customScaleName)`
    CREATE_AI_CURRENT_CHAN: "DAQmxCreateAICurrentChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateAICurrentRMSChan(...)` - same prototype as the current factory.
    CREATE_AI_CURRENT_RMS_CHAN: "DAQmxCreateAICurrentRMSChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateAIThrmcplChan(task, physicalChannel, name, minVal, maxVal,
    /// units, thermocoupleType, cjcSource, cjcVal, cjcChannel)`
    CREATE_AI_THRMCPL_CHAN: "DAQmxCreateAIThrmcplChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateAIRTDChan(task, physicalChannel, name, minVal, maxVal, units,
    /// rtdType, resistanceConfig, currentExcitSource, currentExcitVal, r0)`
    CREATE_AI_RTD_CHAN: "DAQmxCreateAIRTDChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           int32, float64, float64);
    /// `DAQmxCreateAIThrmstrChanIex(task, physicalChannel, name, minVal, maxVal,
    /// units, resistanceConfig, currentExcitSource, currentExcitVal, a, b, c)`
    CREATE_AI_THRMSTR_CHAN_IEX: "DAQmxCreateAIThrmstrChanIex" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64);
    /// `DAQmxCreateAIThrmstrChanVex(task, physicalChannel, name, minVal, maxVal,
    /// units, resistanceConfig, voltageExcitSource, voltageExcitVal, a, b, c, r1)`
    CREATE_AI_THRMSTR_CHAN_VEX: "DAQmxCreateAIThrmstrChanVex" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64, float64);
    /// `DAQmxCreateAIResistanceChan(task, physicalChannel, name, minVal, maxVal,
    /// units, resistanceConfig, currentExcitSource, currentExcitVal, customScaleName)`
    CREATE_AI_RESISTANCE_CHAN: "DAQmxCreateAIResistanceChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateAIStrainGageChan(task, physicalChannel, name, minVal, maxVal,
    /// units, strainConfig, voltageExcitSource, voltageExcitVal, gageFactor,
    /// initialBridgeVoltage, nominalGageResistance, poissonRatio,
    /// leadWireResistance, customScaleName)`
    CREATE_AI_STRAIN_GAGE_CHAN: "DAQmxCreateAIStrainGageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64, float64, float64, *const c_char);
    /// `DAQmxCreateAIForceBridgeTwoPointLinChan(task, physicalChannel, name,
    /// minVal, maxVal, units, bridgeConfig, voltageExcitSource, voltageExcitVal,
    /// nominalBridgeResistance, firstElectricalVal, secondElectricalVal,
    /// electricalUnits, firstPhysicalVal, secondPhysicalVal, physicalUnits,
    /// customScaleName)`
    CREATE_AI_FORCE_BRIDGE_TWO_POINT_LIN_CHAN: "DAQmxCreateAIForceBridgeTwoPointLinChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIForceBridgeTableChan(task, physicalChannel, name, minVal,
    /// maxVal, units, bridgeConfig, voltageExcitSource, voltageExcitVal,
    /// nominalBridgeResistance, electricalVals, numElectricalVals,
    /// electricalUnits, physicalVals, numPhysicalVals, physicalUnits,
    /// customScaleName)`
    CREATE_AI_FORCE_BRIDGE_TABLE_CHAN: "DAQmxCreateAIForceBridgeTableChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, int32, *mut float64, uInt32, int32,
           *const c_char);
    /// `DAQmxCreateAIForceBridgePolynomialChan(task, physicalChannel, name,
    /// minVal, maxVal, units, bridgeConfig, voltageExcitSource, voltageExcitVal,
    /// nominalBridgeResistance, forwardCoeffs, numForwardCoeffs, reverseCoeffs,
    /// numReverseCoeffs, electricalUnits, physicalUnits, customScaleName)`
    CREATE_AI_FORCE_BRIDGE_POLYNOMIAL_CHAN: "DAQmxCreateAIForceBridgePolynomialChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, *mut float64, uInt32, int32, int32,
           *const c_char);
    /// `DAQmxCreateAIPressureBridgeTwoPointLinChan(...)` - force prototype with
    /// pressure units.
    CREATE_AI_PRESSURE_BRIDGE_TWO_POINT_LIN_CHAN: "DAQmxCreateAIPressureBridgeTwoPointLinChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIPressureBridgeTableChan(...)`
    CREATE_AI_PRESSURE_BRIDGE_TABLE_CHAN: "DAQmxCreateAIPressureBridgeTableChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, int32, *mut float64, uInt32, int32,
           *const c_char);
    /// `DAQmxCreateAIPressureBridgePolynomialChan(...)`
    CREATE_AI_PRESSURE_BRIDGE_POLYNOMIAL_CHAN: "DAQmxCreateAIPressureBridgePolynomialChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, *mut float64, uInt32, int32, int32,
           *const c_char);
    /// `DAQmxCreateAITorqueBridgeTwoPointLinChan(...)`
    CREATE_AI_TORQUE_BRIDGE_TWO_POINT_LIN_CHAN: "DAQmxCreateAITorqueBridgeTwoPointLinChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, float64, float64, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAITorqueBridgeTableChan(...)`
    CREATE_AI_TORQUE_BRIDGE_TABLE_CHAN: "DAQmxCreateAITorqueBridgeTableChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, int32, *mut float64, uInt32, int32,
           *const c_char);
    /// `DAQmxCreateAITorqueBridgePolynomialChan(...)`
    CREATE_AI_TORQUE_BRIDGE_POLYNOMIAL_CHAN: "DAQmxCreateAITorqueBridgePolynomialChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *mut float64, uInt32, *mut float64, uInt32, int32, int32,
           *const c_char);
    /// `DAQmxCreateAIBridgeChan(task, physicalChannel, name, minVal, maxVal,
    /// units, bridgeConfig, voltageExcitSource, voltageExcitVal,
    /// nominalBridgeResistance, customScaleName)`
    CREATE_AI_BRIDGE_CHAN: "DAQmxCreateAIBridgeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64, *const c_char);
    /// `DAQmxCreateAIAccelChan(task, physicalChannel, name, terminalConfig,
    /// minVal, maxVal, units, sensitivity, sensitivityUnits, currentExcitSource,
    /// currentExcitVal, customScaleName)`
    CREATE_AI_ACCEL_CHAN: "DAQmxCreateAIAccelChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, float64,
           int32, int32, float64, *const c_char);
    /// `DAQmxCreateAIAccelChargeChan(task, physicalChannel, name, terminalConfig,
    /// minVal, maxVal, units, sensitivity, sensitivityUnits, customScaleName)`
    CREATE_AI_ACCEL_CHARGE_CHAN: "DAQmxCreateAIAccelChargeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, float64,
           int32, *const c_char);
    /// `DAQmxCreateAIAccel4WireDCVoltageChan(task, physicalChannel, name,
    /// terminalConfig, minVal, maxVal, units, sensitivity, sensitivityUnits,
    /// voltageExcitSource, voltageExcitVal, useExcitForScaling, customScaleName)`
    CREATE_AI_ACCEL_4_WIRE_DC_VOLTAGE_CHAN: "DAQmxCreateAIAccel4WireDCVoltageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, float64,
           int32, int32, float64, bool32, *const c_char);
    /// `DAQmxCreateAIChargeChan(task, physicalChannel, name, terminalConfig,
    /// minVal, maxVal, units, customScaleName)`
    CREATE_AI_CHARGE_CHAN: "DAQmxCreateAIChargeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIVelocityIEPEChan(task, physicalChannel, name,
    /// terminalConfig, minVal, maxVal, units, sensitivity, sensitivityUnits,
    /// currentExcitSource, currentExcitVal, customScaleName)`
    CREATE_AI_VELOCITY_IEPE_CHAN: "DAQmxCreateAIVelocityIEPEChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, float64,
           int32, int32, float64, *const c_char);
    /// `DAQmxCreateAIForceIEPEChan(...)` - same prototype as the velocity factory.
    CREATE_AI_FORCE_IEPE_CHAN: "DAQmxCreateAIForceIEPEChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, float64,
           int32, int32, float64, *const c_char);
    /// `DAQmxCreateAIMicrophoneChan(task, physicalChannel, name, terminalConfig,
    /// units, micSensitivity, maxSndPressLevel, currentExcitSource,
    /// currentExcitVal, customScaleName)`
    CREATE_AI_MICROPHONE_CHAN: "DAQmxCreateAIMicrophoneChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, int32, float64, float64, int32,
           float64, *const c_char);
    /// `DAQmxCreateAIFreqVoltageChan(task, physicalChannel, name, minVal, maxVal,
    /// units, thresholdLevel, hysteresis, customScaleName)`
    CREATE_AI_FREQ_VOLTAGE_CHAN: "DAQmxCreateAIFreqVoltageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, float64, float64,
           *const c_char);
    /// `DAQmxCreateAIPosLVDTChan(task, physicalChannel, name, minVal, maxVal,
    /// units, sensitivity, sensitivityUnits, voltageExcitSource,
    /// voltageExcitVal, voltageExcitFreq, acExcitWireMode, customScaleName)`
    CREATE_AI_POS_LVDT_CHAN: "DAQmxCreateAIPosLVDTChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, float64, int32,
           int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAIPosRVDTChan(...)` - same prototype as the LVDT factory.
    CREATE_AI_POS_RVDT_CHAN: "DAQmxCreateAIPosRVDTChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, float64, int32,
           int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAITempBuiltInSensorChan(task, physicalChannel, name, units)`
    CREATE_AI_TEMP_BUILT_IN_SENSOR_CHAN: "DAQmxCreateAITempBuiltInSensorChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32);

    // ------------------------------------------------------------------
    // Analog-input TEDS factories
    //
    // Identical calling conventions to the non-TEDS forms minus the
    // parameters the sensor's TEDS memory supplies; they must target
    // TEDS-configured physical channels.
    // ------------------------------------------------------------------

    /// `DAQmxCreateTEDSAIVoltageChan(task, physicalChannel, name,
    /// terminalConfig, minVal, maxVal, units, customScaleName)`
    CREATE_TEDS_AI_VOLTAGE_CHAN: "DAQmxCreateTEDSAIVoltageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, *const c_char);
    /// `DAQmxCreateTEDSAICurrentChan(task, physicalChannel, name,
    /// terminalConfig, minVal, maxVal, units, shuntResistorLoc,
    /// extShuntResistorVal, customScaleName)`
    CREATE_TEDS_AI_CURRENT_CHAN: "DAQmxCreateTEDSAICurrentChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateTEDSAIThrmcplChan(task, physicalChannel, name, minVal,
    /// maxVal, units, cjcSource, cjcVal, cjcChannel)`
    CREATE_TEDS_AI_THRMCPL_CHAN: "DAQmxCreateTEDSAIThrmcplChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAIRTDChan(task, physicalChannel, name, minVal, maxVal,
    /// units, resistanceConfig, currentExcitSource, currentExcitVal)`
    CREATE_TEDS_AI_RTD_CHAN: "DAQmxCreateTEDSAIRTDChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64);
    /// `DAQmxCreateTEDSAIThrmstrChanIex(task, physicalChannel, name, minVal,
    /// maxVal, units, resistanceConfig, currentExcitSource, currentExcitVal)`
    CREATE_TEDS_AI_THRMSTR_CHAN_IEX: "DAQmxCreateTEDSAIThrmstrChanIex" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64);
    /// `DAQmxCreateTEDSAIThrmstrChanVex(task, physicalChannel, name, minVal,
    /// maxVal, units, resistanceConfig, voltageExcitSource, voltageExcitVal, r1)`
    CREATE_TEDS_AI_THRMSTR_CHAN_VEX: "DAQmxCreateTEDSAIThrmstrChanVex" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, float64);
    /// `DAQmxCreateTEDSAIResistanceChan(task, physicalChannel, name, minVal,
    /// maxVal, units, resistanceConfig, currentExcitSource, currentExcitVal,
    /// customScaleName)`
    CREATE_TEDS_AI_RESISTANCE_CHAN: "DAQmxCreateTEDSAIResistanceChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateTEDSAIStrainGageChan(task, physicalChannel, name, minVal,
    /// maxVal, units, voltageExcitSource, voltageExcitVal,
    /// initialBridgeVoltage, leadWireResistance, customScaleName)`
    CREATE_TEDS_AI_STRAIN_GAGE_CHAN: "DAQmxCreateTEDSAIStrainGageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           float64, float64, *const c_char);
    /// `DAQmxCreateTEDSAIBridgeChan(task, physicalChannel, name, minVal, maxVal,
    /// units, voltageExcitSource, voltageExcitVal, customScaleName)`
    CREATE_TEDS_AI_BRIDGE_CHAN: "DAQmxCreateTEDSAIBridgeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAIForceBridgeChan(...)` - bridge prototype with force units.
    CREATE_TEDS_AI_FORCE_BRIDGE_CHAN: "DAQmxCreateTEDSAIForceBridgeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAIPressureBridgeChan(...)`
    CREATE_TEDS_AI_PRESSURE_BRIDGE_CHAN: "DAQmxCreateTEDSAIPressureBridgeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAITorqueBridgeChan(...)`
    CREATE_TEDS_AI_TORQUE_BRIDGE_CHAN: "DAQmxCreateTEDSAITorqueBridgeChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAIAccelChan(task, physicalChannel, name, terminalConfig,
    /// minVal, maxVal, units, currentExcitSource, currentExcitVal,
    /// customScaleName)`
    CREATE_TEDS_AI_ACCEL_CHAN: "DAQmxCreateTEDSAIAccelChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateTEDSAIForceIEPEChan(...)` - accel prototype with force units.
    CREATE_TEDS_AI_FORCE_IEPE_CHAN: "DAQmxCreateTEDSAIForceIEPEChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, int32, int32,
           float64, *const c_char);
    /// `DAQmxCreateTEDSAIMicrophoneChan(task, physicalChannel, name,
    /// terminalConfig, units, maxSndPressLevel, currentExcitSource,
    /// currentExcitVal, customScaleName)`
    CREATE_TEDS_AI_MICROPHONE_CHAN: "DAQmxCreateTEDSAIMicrophoneChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, int32, float64, int32, float64,
           *const c_char);
    /// `DAQmxCreateTEDSAIPosLVDTChan(task, physicalChannel, name, minVal,
    /// maxVal, units, voltageExcitSource, voltageExcitVal, voltageExcitFreq,
    /// acExcitWireMode, customScaleName)`
    CREATE_TEDS_AI_POS_LVDT_CHAN: "DAQmxCreateTEDSAIPosLVDTChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           float64, int32, *const c_char);
    /// `DAQmxCreateTEDSAIPosRVDTChan(...)` - same prototype as the LVDT factory.
    CREATE_TEDS_AI_POS_RVDT_CHAN: "DAQmxCreateTEDSAIPosRVDTChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           float64, int32, *const c_char);

    // ------------------------------------------------------------------
    // Analog-output channel factories
    // ------------------------------------------------------------------

    /// `DAQmxCreateAOVoltageChan(task, physicalChannel, name, minVal, maxVal,
    /// units, customScaleName)`
    CREATE_AO_VOLTAGE_CHAN: "DAQmxCreateAOVoltageChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAOCurrentChan(...)` - same prototype as the voltage factory.
    CREATE_AO_CURRENT_CHAN: "DAQmxCreateAOCurrentChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, *const c_char);
    /// `DAQmxCreateAOFuncGenChan(task, physicalChannel, name, type, freq,
    /// amplitude, offset)`
    CREATE_AO_FUNC_GEN_CHAN: "DAQmxCreateAOFuncGenChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, float64, float64, float64);

    // ------------------------------------------------------------------
    // Counter-input channel factories
    // ------------------------------------------------------------------

    /// `DAQmxCreateCICountEdgesChan(task, counter, name, edge, initialCount,
    /// countDirection)`
    CREATE_CI_COUNT_EDGES_CHAN: "DAQmxCreateCICountEdgesChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, uInt32, int32);
    /// `DAQmxCreateCIFreqChan(task, counter, name, minVal, maxVal, units, edge,
    /// measMethod, measTime, divisor, customScaleName)`
    CREATE_CI_FREQ_CHAN: "DAQmxCreateCIFreqChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, uInt32, *const c_char);
    /// `DAQmxCreateCIPeriodChan(...)` - same prototype as the frequency factory.
    CREATE_CI_PERIOD_CHAN: "DAQmxCreateCIPeriodChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           float64, uInt32, *const c_char);
    /// `DAQmxCreateCIPulseWidthChan(task, counter, name, minVal, maxVal, units,
    /// startingEdge, customScaleName)`
    CREATE_CI_PULSE_WIDTH_CHAN: "DAQmxCreateCIPulseWidthChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32,
           *const c_char);
    /// `DAQmxCreateCISemiPeriodChan(task, counter, name, minVal, maxVal, units,
    /// customScaleName)`
    CREATE_CI_SEMI_PERIOD_CHAN: "DAQmxCreateCISemiPeriodChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, *const c_char);
    /// `DAQmxCreateCITwoEdgeSepChan(task, counter, name, minVal, maxVal, units,
    /// firstEdge, secondEdge, customScaleName)`
    CREATE_CI_TWO_EDGE_SEP_CHAN: "DAQmxCreateCITwoEdgeSepChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, int32,
           *const c_char);
    /// `DAQmxCreateCIDutyCycleChan(task, counter, name, minFreq, maxFreq, edge,
    /// customScaleName)`
    CREATE_CI_DUTY_CYCLE_CHAN: "DAQmxCreateCIDutyCycleChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, *const c_char);
    /// `DAQmxCreateCIPulseChanFreq(task, counter, name, minVal, maxVal, units)`
    CREATE_CI_PULSE_CHAN_FREQ: "DAQmxCreateCIPulseChanFreq" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32);
    /// `DAQmxCreateCIPulseChanTime(task, counter, name, minVal, maxVal, units)`
    CREATE_CI_PULSE_CHAN_TIME: "DAQmxCreateCIPulseChanTime" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32);
    /// `DAQmxCreateCIPulseChanTicks(task, counter, name, sourceTerminal,
    /// minVal, maxVal)`
    CREATE_CI_PULSE_CHAN_TICKS: "DAQmxCreateCIPulseChanTicks" =>
        fn(TaskHandle, *const c_char, *const c_char, *const c_char, float64, float64);
    /// `DAQmxCreateCIAngEncoderChan(task, counter, name, decodingType,
    /// zidxEnable, zidxVal, zidxPhase, units, pulsesPerRev, initialAngle,
    /// customScaleName)`
    CREATE_CI_ANG_ENCODER_CHAN: "DAQmxCreateCIAngEncoderChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, bool32, float64, int32, int32,
           uInt32, float64, *const c_char);
    /// `DAQmxCreateCILinEncoderChan(task, counter, name, decodingType,
    /// zidxEnable, zidxVal, zidxPhase, units, distancePerPulse, initialPos,
    /// customScaleName)`
    CREATE_CI_LIN_ENCODER_CHAN: "DAQmxCreateCILinEncoderChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, bool32, float64, int32, int32,
           float64, float64, *const c_char);
    /// `DAQmxCreateCIAngVelocityChan(task, counter, name, minVal, maxVal,
    /// decodingType, units, pulsesPerRev, customScaleName)`
    CREATE_CI_ANG_VELOCITY_CHAN: "DAQmxCreateCIAngVelocityChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, uInt32,
           *const c_char);
    /// `DAQmxCreateCILinVelocityChan(task, counter, name, minVal, maxVal,
    /// decodingType, units, distancePerPulse, customScaleName)`
    CREATE_CI_LIN_VELOCITY_CHAN: "DAQmxCreateCILinVelocityChan" =>
        fn(TaskHandle, *const c_char, *const c_char, float64, float64, int32, int32, float64,
           *const c_char);

    // ------------------------------------------------------------------
    // Counter-output channel factories
    // ------------------------------------------------------------------

    /// `DAQmxCreateCOPulseChanFreq(task, counter, name, units, idleState,
    /// initialDelay, freq, dutyCycle)`
    CREATE_CO_PULSE_CHAN_FREQ: "DAQmxCreateCOPulseChanFreq" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, int32, float64, float64, float64);
    /// `DAQmxCreateCOPulseChanTime(task, counter, name, units, idleState,
    /// initialDelay, lowTime, highTime)`
    CREATE_CO_PULSE_CHAN_TIME: "DAQmxCreateCOPulseChanTime" =>
        fn(TaskHandle, *const c_char, *const c_char, int32, int32, float64, float64, float64);
    /// `DAQmxCreateCOPulseChanTicks(task, counter, name, sourceTerminal,
    /// idleState, initialDelay, lowTicks, highTicks)`
    CREATE_CO_PULSE_CHAN_TICKS: "DAQmxCreateCOPulseChanTicks" =>
        fn(TaskHandle, *const c_char, *const c_char, *const c_char, int32, int32, int32, int32);

    // ------------------------------------------------------------------
    // Digital channel factories
    // ------------------------------------------------------------------

    /// `DAQmxCreateDIChan(task, lines, name, lineGrouping)`
    CREATE_DI_CHAN: "DAQmxCreateDIChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32);
    /// `DAQmxCreateDOChan(task, lines, name, lineGrouping)`
    CREATE_DO_CHAN: "DAQmxCreateDOChan" =>
        fn(TaskHandle, *const c_char, *const c_char, int32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_symbols_carry_driver_names() {
        assert_eq!(CREATE_TASK.symbol(), "DAQmxCreateTask");
        assert_eq!(
            CREATE_AI_VOLTAGE_CHAN.symbol(),
            "DAQmxCreateAIVoltageChan"
        );
        assert_eq!(GET_TASK_CHANNELS.symbol(), "DAQmxGetTaskChannels");
    }
}
