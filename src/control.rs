use core::{fmt, time::Duration};

use crate::{
    config::{ConfigError, LoopConfig, DEFAULT_INCREMENTS},
    devices::{AnalogGateway, EdgeSource, Telemetry},
    mappings::TuningMappings,
    pid::{ControlState, Pid},
    setpoint::Setpoint,
    tuner::{Gain, GainTuner, Gains},
};

/// One line of tuning feedback, printed every cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics {
    pub enabled: bool,
    pub input: f64,
    pub setpoint: f64,
    pub increment: f64,
    pub gains: Gains,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enabled: {} cur pos: {:8.6} setpoint: {:8.6} increment: {:8.6} p: {:8.6} i: {:8.6} d: {:8.6}",
            u8::from(self.enabled),
            self.input,
            self.setpoint,
            self.increment,
            self.gains.kp,
            self.gains.ki,
            self.gains.kd,
        )
    }
}

/// Everything the tuning task owns: gains, setpoint, PID memory and the
/// enable flag.
///
/// [`step`](Self::step) runs exactly one cycle. Pacing is left to the
/// caller, which should call it once every [`period`](Self::period).
#[derive(Clone, Debug)]
pub struct ControlLoop<const N: usize = 3> {
    config: LoopConfig,
    mappings: TuningMappings,
    tuner: GainTuner<N>,
    setpoint: Setpoint,
    pid: Pid,
    enabled: bool,
    input: f64,
}

impl ControlLoop {
    pub fn new(config: LoopConfig, mappings: TuningMappings) -> Result<Self, ConfigError> {
        Self::with_increments(config, mappings, DEFAULT_INCREMENTS)
    }
}

impl<const N: usize> ControlLoop<N> {
    pub fn with_increments(
        config: LoopConfig,
        mappings: TuningMappings,
        increments: [f64; N],
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            mappings,
            tuner: GainTuner::new(config.initial_gains, increments),
            setpoint: Setpoint::new(config.initial_setpoint, config.input_min, config.input_max),
            pid: Pid::new(config.integral_limit, config.output_min, config.output_max),
            enabled: false,
            input: 0.0,
            config,
        })
    }

    /// Runs one cycle and returns the output written to the actuator.
    pub fn step(
        &mut self,
        edges: &mut impl EdgeSource,
        io: &mut impl AnalogGateway,
        telemetry: &mut impl Telemetry,
    ) -> i8 {
        if edges.pressed(self.mappings.cycle_increment) {
            self.tuner.cycle_increment();
        }

        for gain in Gain::ALL {
            if let Some(action) = self.mappings.gain(gain).action(|b| edges.pressed(b)) {
                self.tuner.apply(gain, action);
            }
        }

        self.setpoint.advance(edges.axis());

        self.input = f64::from(io.read());
        telemetry.emit(&self.diagnostics());

        if edges.pressed(self.mappings.toggle_enabled) {
            self.enabled = !self.enabled;
        }

        let output = self.pid.step(
            self.input,
            self.setpoint.value(),
            self.tuner.gains(),
            self.enabled,
        );

        // Already clamped to the i8 scale, the cast only truncates.
        let output = output as i8;
        io.write(output);

        edges.consume_all();

        output
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            enabled: self.enabled,
            input: self.input,
            setpoint: self.setpoint.value(),
            increment: self.tuner.increment(),
            gains: *self.tuner.gains(),
        }
    }

    pub fn state(&self) -> ControlState {
        self.pid.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn gains(&self) -> &Gains {
        self.tuner.gains()
    }

    pub fn setpoint(&self) -> f64 {
        self.setpoint.value()
    }

    pub fn increment(&self) -> f64 {
        self.tuner.increment()
    }

    pub fn period(&self) -> Duration {
        self.config.period
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }
}
