//! Enumerated driver constants.
//!
//! Every enumeration mirrors a closed set of `DAQmx_Val_*` constants
//! bit-exactly. Conversions happen at the boundary in both directions:
//! outbound values marshal through [`to_raw`], inbound integers translate
//! through [`from_raw`], and an integer with no matching variant is never
//! silently accepted (it surfaces as
//! [`DaqmxError::UnknownAttributeValue`](crate::DaqmxError::UnknownAttributeValue)).
//!
//! [`to_raw`]: TerminalConfiguration::to_raw
//! [`from_raw`]: TerminalConfiguration::from_raw

use nidaqmx_sys::int32;

macro_rules! daqmx_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Convert from the driver's raw constant.
            pub fn from_raw(raw: int32) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Convert to the driver's raw constant.
            pub fn to_raw(self) -> int32 {
                self as int32
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let label = match self {
                    $( Self::$variant => stringify!($variant), )+
                };
                write!(f, "{}", label)
            }
        }
    };
}

daqmx_enum! {
    /// Input terminal configuration.
    pub enum TerminalConfiguration {
        /// Let the driver pick the default for the device.
        Default = -1,
        /// Referenced single-ended.
        Rse = 10083,
        /// Non-referenced single-ended.
        Nrse = 10078,
        /// Differential.
        Differential = 10106,
        /// Pseudo-differential.
        PseudoDifferential = 12529,
    }
}

daqmx_enum! {
    /// Kind of a virtual channel, as reported by the driver.
    pub enum ChannelType {
        AnalogInput = 10100,
        AnalogOutput = 10102,
        CounterInput = 10131,
        CounterOutput = 10132,
        DigitalInput = 10151,
        DigitalOutput = 10153,
    }
}

daqmx_enum! {
    /// Units for voltage measurements and generations.
    pub enum VoltageUnits {
        Volts = 10348,
        FromCustomScale = 10065,
        FromTeds = 12516,
    }
}

daqmx_enum! {
    /// Units for current measurements and generations.
    pub enum CurrentUnits {
        Amps = 10342,
        FromCustomScale = 10065,
        FromTeds = 12516,
    }
}

daqmx_enum! {
    /// Location of the shunt resistor for current measurements.
    pub enum CurrentShuntResistorLocation {
        Default = -1,
        Internal = 10200,
        External = 10167,
    }
}

daqmx_enum! {
    /// Units for temperature measurements.
    pub enum TemperatureUnits {
        DegreesCelsius = 10143,
        DegreesFahrenheit = 10144,
        Kelvins = 10325,
        DegreesRankine = 10145,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Thermocouple wire types.
    pub enum ThermocoupleType {
        J = 10072,
        K = 10073,
        N = 10077,
        R = 10082,
        S = 10085,
        T = 10086,
        B = 10047,
        E = 10055,
    }
}

daqmx_enum! {
    /// Source of the cold-junction compensation value.
    pub enum CjcSource {
        BuiltIn = 10200,
        ConstantValue = 10116,
        Channel = 10113,
    }
}

daqmx_enum! {
    /// Standardized RTD curve types.
    pub enum RtdType {
        Pt3750 = 12481,
        Pt3851 = 10071,
        Pt3911 = 12482,
        Pt3916 = 10069,
        Pt3920 = 10053,
        Pt3928 = 12483,
        Custom = 10137,
    }
}

daqmx_enum! {
    /// Wiring configuration for resistive measurements.
    pub enum ResistanceConfiguration {
        TwoWire = 2,
        ThreeWire = 3,
        FourWire = 4,
    }
}

daqmx_enum! {
    /// Excitation supply for a measurement.
    pub enum ExcitationSource {
        Internal = 10200,
        External = 10167,
        None = 10230,
    }
}

daqmx_enum! {
    /// Units for resistance measurements.
    pub enum ResistanceUnits {
        Ohms = 10384,
        FromCustomScale = 10065,
        FromTeds = 12516,
    }
}

daqmx_enum! {
    /// Wheatstone-bridge arrangement of a strain gage.
    pub enum StrainGageBridgeType {
        FullBridgeI = 10183,
        FullBridgeII = 10184,
        FullBridgeIII = 10185,
        HalfBridgeI = 10188,
        HalfBridgeII = 10189,
        QuarterBridgeI = 10271,
        QuarterBridgeII = 10272,
    }
}

daqmx_enum! {
    /// Units for strain measurements.
    pub enum StrainUnits {
        Strain = 10299,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Wheatstone-bridge topology of a sensor.
    pub enum BridgeConfiguration {
        FullBridge = 10182,
        HalfBridge = 10187,
        QuarterBridge = 10270,
        NoBridge = 10228,
    }
}

daqmx_enum! {
    /// Units for raw bridge-ratio measurements.
    pub enum BridgeUnits {
        VoltsPerVolt = 15896,
        MillivoltsPerVolt = 15897,
        FromCustomScale = 10065,
        FromTeds = 12516,
    }
}

daqmx_enum! {
    /// Electrical units of a bridge scaling table or polynomial.
    pub enum BridgeElectricalUnits {
        VoltsPerVolt = 15896,
        MillivoltsPerVolt = 15897,
    }
}

daqmx_enum! {
    /// Physical units of a bridge scaling table or polynomial.
    pub enum BridgePhysicalUnits {
        Newtons = 15875,
        Pounds = 15876,
        KilogramForce = 15877,
        Pascals = 10081,
        PoundsPerSquareInch = 15879,
        Bar = 15880,
        NewtonMeters = 15881,
        InchOunces = 15882,
        InchPounds = 15883,
        FootPounds = 15884,
    }
}

daqmx_enum! {
    /// Units for force measurements.
    pub enum ForceUnits {
        Newtons = 15875,
        Pounds = 15876,
        KilogramForce = 15877,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units of an IEPE force sensor's sensitivity figure.
    pub enum ForceIepeSensitivityUnits {
        MillivoltsPerNewton = 15891,
        MillivoltsPerPound = 15892,
    }
}

daqmx_enum! {
    /// Units for pressure measurements.
    pub enum PressureUnits {
        Pascals = 10081,
        PoundsPerSquareInch = 15879,
        Bar = 15880,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for torque measurements.
    pub enum TorqueUnits {
        NewtonMeters = 15881,
        InchOunces = 15882,
        InchPounds = 15883,
        FootPounds = 15884,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for acceleration measurements.
    pub enum AccelUnits {
        G = 10186,
        MetersPerSecondSquared = 12470,
        InchesPerSecondSquared = 12471,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units of an accelerometer's sensitivity figure.
    pub enum AccelSensitivityUnits {
        MillivoltsPerG = 12509,
        VoltsPerG = 12510,
    }
}

daqmx_enum! {
    /// Units of a charge-mode accelerometer's sensitivity figure.
    pub enum AccelChargeSensitivityUnits {
        PicocoulombsPerG = 16099,
        PicocoulombsPerMetersPerSecondSquared = 16100,
        PicocoulombsPerInchesPerSecondSquared = 16101,
    }
}

daqmx_enum! {
    /// Units for charge measurements.
    pub enum ChargeUnits {
        Coulombs = 16102,
        Picocoulombs = 16103,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for linear velocity measurements.
    pub enum VelocityUnits {
        MetersPerSecond = 15959,
        InchesPerSecond = 15960,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units of an IEPE velocity sensor's sensitivity figure.
    pub enum VelocityIepeSensitivityUnits {
        MillivoltsPerMillimeterPerSecond = 15963,
        MillivoltsPerInchPerSecond = 15964,
    }
}

daqmx_enum! {
    /// Units for sound-pressure measurements.
    pub enum SoundPressureUnits {
        Pascals = 10081,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for frequency measurements.
    pub enum FrequencyUnits {
        Hertz = 10373,
        Ticks = 10304,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for time measurements and pulse generations.
    pub enum TimeUnits {
        Seconds = 10364,
        Ticks = 10304,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for angular measurements.
    pub enum AngleUnits {
        Degrees = 10146,
        Radians = 10273,
        Ticks = 10304,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for linear displacement measurements.
    pub enum LengthUnits {
        Meters = 10219,
        Inches = 10379,
        Ticks = 10304,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units for angular velocity measurements.
    pub enum AngularVelocityUnits {
        Rpm = 16080,
        RadiansPerSecond = 16081,
        DegreesPerSecond = 16082,
        FromCustomScale = 10065,
    }
}

daqmx_enum! {
    /// Units of an LVDT's sensitivity figure.
    pub enum LvdtSensitivityUnits {
        MillivoltsPerVoltPerMillimeter = 12506,
        MillivoltsPerVoltPerMilliInch = 12505,
    }
}

daqmx_enum! {
    /// Units of an RVDT's sensitivity figure.
    pub enum RvdtSensitivityUnits {
        MillivoltsPerVoltPerDegree = 12507,
        MillivoltsPerVoltPerRadian = 12508,
    }
}

daqmx_enum! {
    /// Wire mode for AC-excited sensors (LVDT/RVDT).
    pub enum AcExcitWireMode {
        FourWire = 4,
        FiveWire = 5,
        SixWire = 6,
    }
}

daqmx_enum! {
    /// Signal edge selection.
    pub enum Edge {
        Rising = 10280,
        Falling = 10171,
    }
}

daqmx_enum! {
    /// Direction of an edge-counting channel.
    pub enum CountDirection {
        CountUp = 10128,
        CountDown = 10124,
        ExternallyControlled = 10326,
    }
}

daqmx_enum! {
    /// Method used to measure frequency or period.
    pub enum CounterFrequencyMethod {
        LowFrequencyOneCounter = 10105,
        HighFrequencyTwoCounters = 10157,
        LargeRangeTwoCounters = 10205,
        DynamicAveraging = 16065,
    }
}

daqmx_enum! {
    /// Quadrature (or two-pulse) encoder decoding.
    pub enum EncoderType {
        X1 = 10090,
        X2 = 10111,
        X4 = 10092,
        TwoPulseCounting = 10313,
    }
}

daqmx_enum! {
    /// Quadrature phase at which the Z index resets the count.
    pub enum EncoderZIndexPhase {
        AHighBHigh = 10040,
        AHighBLow = 10041,
        ALowBHigh = 10042,
        ALowBLow = 10043,
    }
}

daqmx_enum! {
    /// Digital level.
    pub enum Level {
        High = 10192,
        Low = 10214,
    }
}

daqmx_enum! {
    /// Behavior of the counter input's logic-level conditioning.
    pub enum LogicLevelBehavior {
        LogicLevelPullUp = 16064,
        None = 10230,
    }
}

daqmx_enum! {
    /// Waveform produced by a function-generator channel.
    pub enum FuncGenType {
        Sine = 14751,
        Triangle = 14752,
        Square = 14753,
        Sawtooth = 14754,
    }
}

daqmx_enum! {
    /// How samples move between the device and host memory.
    pub enum DataTransferMechanism {
        Dma = 10054,
        Interrupts = 10204,
        ProgrammedIo = 10264,
        UsbBulk = 12590,
    }
}

daqmx_enum! {
    /// Condition under which an input transfer request is issued.
    pub enum InputDataTransferCondition {
        OnBoardMemoryMoreThanHalfFull = 10237,
        OnBoardMemoryNotEmpty = 10241,
        OnboardMemoryCustomThreshold = 12577,
        WhenAcquisitionComplete = 12546,
    }
}

daqmx_enum! {
    /// Condition under which an output transfer request is issued.
    pub enum OutputDataTransferCondition {
        OnBoardMemoryEmpty = 10235,
        OnBoardMemoryHalfFullOrLess = 10239,
        OnBoardMemoryLessThanFull = 10242,
    }
}

daqmx_enum! {
    /// When the device compensates for its own offset drift.
    pub enum AutoZeroType {
        None = 10230,
        Once = 10244,
        EverySample = 10164,
    }
}

daqmx_enum! {
    /// Input coupling.
    pub enum Coupling {
        Ac = 10045,
        Dc = 10050,
        Ground = 10066,
    }
}

daqmx_enum! {
    /// Whether a channel uses voltage or current excitation.
    pub enum ExcitationVoltageOrCurrent {
        UseVoltage = 10322,
        UseCurrent = 10134,
    }
}

daqmx_enum! {
    /// DC or AC excitation.
    pub enum ExcitationDcOrAc {
        Dc = 10050,
        Ac = 10045,
    }
}

daqmx_enum! {
    /// Trade-off profile of a sigma-delta converter's timing engine.
    pub enum AdcTimingMode {
        Automatic = 16097,
        HighResolution = 10195,
        HighSpeed = 14712,
        Best50HzRejection = 14713,
        Best60HzRejection = 14714,
        Custom = 10137,
    }
}

daqmx_enum! {
    /// What the device does when the sample clock outruns conversion.
    pub enum SampleClockOverrunBehavior {
        RepeatTransferredData = 16062,
        ReturnSentinelValue = 16063,
    }
}

daqmx_enum! {
    /// Justification of raw samples narrower than their container.
    pub enum DataJustification {
        RightJustified = 10279,
        LeftJustified = 10209,
    }
}

daqmx_enum! {
    /// Voltage family of a digital port.
    pub enum LogicFamily {
        TwoPointFiveVolts = 14620,
        ThreePointThreeVolts = 14621,
        FiveVolts = 14619,
    }
}

daqmx_enum! {
    /// Electrical drive of a digital output.
    pub enum OutputDriveType {
        ActiveDrive = 12573,
        OpenCollector = 12574,
    }
}

daqmx_enum! {
    /// What an analog output does between generations.
    pub enum AoIdleOutputBehavior {
        ZeroVolts = 12526,
        HighImpedance = 12527,
        MaintainExistingValue = 12528,
    }
}

daqmx_enum! {
    /// How digital lines map onto virtual channels.
    pub enum LineGrouping {
        /// One virtual channel per line.
        ChannelPerLine = 0,
        /// One virtual channel covering every line in the spec.
        ChannelForAllLines = 1,
    }
}

daqmx_enum! {
    /// Constraint applied to a counter pulse generation.
    pub enum ConstrainedGenMode {
        Unconstrained = 14708,
        FixedHighFrequency = 14709,
        FixedLowFrequency = 14710,
        Fixed50PercentDutyCycle = 14711,
    }
}

daqmx_enum! {
    /// State of a digital line.
    pub enum DigitalLineState {
        High = 10192,
        Low = 10214,
        Tristate = 10310,
        NoChange = 10160,
    }
}

daqmx_enum! {
    /// Explicit task state transitions for `DAQmxTaskControl`.
    pub enum TaskAction {
        Start = 0,
        Stop = 1,
        Verify = 2,
        Commit = 3,
        Reserve = 4,
        Unreserve = 5,
        Abort = 6,
    }
}

daqmx_enum! {
    /// Measurement kind of an AI channel, as reported by the driver.
    pub enum AiMeasurementType {
        Voltage = 10322,
        VoltageRms = 10350,
        VoltageCustomWithExcitation = 10323,
        Current = 10134,
        CurrentRms = 10351,
        FrequencyVoltage = 10181,
        Resistance = 10278,
        TemperatureThermocouple = 10303,
        TemperatureThermistor = 10302,
        TemperatureRtd = 10301,
        TemperatureBuiltInSensor = 10311,
        Strain = 10300,
        Bridge = 15908,
        PositionLvdt = 10352,
        PositionRvdt = 10353,
        Accelerometer = 10356,
        SoundPressureMicrophone = 10354,
    }
}

daqmx_enum! {
    /// Generation kind of an AO channel.
    pub enum AoOutputType {
        Voltage = 10322,
        Current = 10134,
        FunctionGeneration = 14750,
    }
}

daqmx_enum! {
    /// Measurement kind of a CI channel.
    pub enum CiMeasurementType {
        CountEdges = 10125,
        Frequency = 10179,
        Period = 10256,
        PulseWidth = 10359,
        SemiPeriod = 10289,
        PulseFrequency = 15864,
        PulseTime = 15865,
        PulseTicks = 15866,
        DutyCycle = 16070,
        PositionAngularEncoder = 10360,
        PositionLinearEncoder = 10361,
        TwoEdgeSeparation = 10267,
        GpsTimestamp = 10362,
        AngularVelocity = 16078,
        LinearVelocity = 16079,
    }
}

daqmx_enum! {
    /// Generation kind of a CO channel.
    pub enum CoOutputType {
        PulseTime = 10269,
        PulseFrequency = 10119,
        PulseTicks = 10268,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_driver_values() {
        // Spot checks against the driver's C header values.
        assert_eq!(TerminalConfiguration::Default.to_raw(), -1);
        assert_eq!(TerminalConfiguration::Rse.to_raw(), 10083);
        assert_eq!(TerminalConfiguration::Differential.to_raw(), 10106);
        assert_eq!(VoltageUnits::Volts.to_raw(), 10348);
        assert_eq!(VoltageUnits::FromCustomScale.to_raw(), 10065);
        assert_eq!(ExcitationSource::None.to_raw(), 10230);
        assert_eq!(BridgeConfiguration::FullBridge.to_raw(), 10182);
        assert_eq!(EncoderType::X4.to_raw(), 10092);
        assert_eq!(ResistanceConfiguration::FourWire.to_raw(), 4);
        assert_eq!(ChannelType::AnalogInput.to_raw(), 10100);
        assert_eq!(Edge::Rising.to_raw(), 10280);
        assert_eq!(Level::Low.to_raw(), 10214);
    }

    #[test]
    fn test_from_raw_round_trip() {
        for tc in [
            TerminalConfiguration::Default,
            TerminalConfiguration::Rse,
            TerminalConfiguration::Nrse,
            TerminalConfiguration::Differential,
            TerminalConfiguration::PseudoDifferential,
        ] {
            assert_eq!(TerminalConfiguration::from_raw(tc.to_raw()), Some(tc));
        }
        assert_eq!(
            ThermocoupleType::from_raw(ThermocoupleType::K.to_raw()),
            Some(ThermocoupleType::K)
        );
    }

    #[test]
    fn test_from_raw_rejects_unknown_values() {
        assert_eq!(TerminalConfiguration::from_raw(0), None);
        assert_eq!(ChannelType::from_raw(999), None);
        assert_eq!(EncoderType::from_raw(-7), None);
    }

    #[test]
    fn test_display_uses_variant_names() {
        assert_eq!(ChannelType::CounterInput.to_string(), "CounterInput");
        assert_eq!(Edge::Falling.to_string(), "Falling");
    }
}
