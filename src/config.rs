use core::time::Duration;

use thiserror::Error;

use crate::tuner::Gains;

/// Step sizes selectable while tuning, smallest first.
pub const DEFAULT_INCREMENTS: [f64; 3] = [0.001, 0.01, 0.1];

/// How often the control loop runs.
pub const PERIOD: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("input range is empty (min is above max)")]
    InputRange,
    #[error("output range is empty (min is above max)")]
    OutputRange,
    #[error("output range does not fit the actuator's signed 8-bit scale")]
    OutputScale,
    #[error("integral limit must be positive and finite")]
    IntegralLimit,
    #[error("initial setpoint must be finite and inside the input range")]
    InitialSetpoint,
    #[error("loop period must be non-zero")]
    Period,
}

/// Limits and starting values for a single tuning loop.
///
/// Input values are in raw sensor counts, output values are on the
/// actuator's signed 8-bit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopConfig {
    pub input_min: f64,
    pub input_max: f64,
    pub output_min: f64,
    pub output_max: f64,
    /// Errors at or beyond this magnitude discard the accumulated integral.
    pub integral_limit: f64,
    pub initial_setpoint: f64,
    pub initial_gains: Gains,
    pub period: Duration,
}

impl LoopConfig {
    pub const fn new() -> Self {
        Self {
            input_min: 7.0,
            input_max: 4095.0,
            output_min: -60.0,
            output_max: 60.0,
            integral_limit: 100.0,
            initial_setpoint: 2000.0,
            initial_gains: Gains::new(0.01, 0.01, 0.01),
            period: PERIOD,
        }
    }

    pub const fn input_range(mut self, min: f64, max: f64) -> Self {
        self.input_min = min;
        self.input_max = max;
        self
    }

    pub const fn output_range(mut self, min: f64, max: f64) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }

    pub const fn integral_limit(mut self, limit: f64) -> Self {
        self.integral_limit = limit;
        self
    }

    pub const fn initial_setpoint(mut self, setpoint: f64) -> Self {
        self.initial_setpoint = setpoint;
        self
    }

    pub const fn initial_gains(mut self, gains: Gains) -> Self {
        self.initial_gains = gains;
        self
    }

    pub const fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons so NaN bounds are rejected too.
        if !(self.input_min <= self.input_max) {
            return Err(ConfigError::InputRange);
        }
        if !(self.output_min <= self.output_max) {
            return Err(ConfigError::OutputRange);
        }
        if self.output_min < i8::MIN as f64 || self.output_max > i8::MAX as f64 {
            return Err(ConfigError::OutputScale);
        }
        if !(self.integral_limit > 0.0) || !self.integral_limit.is_finite() {
            return Err(ConfigError::IntegralLimit);
        }
        if !(self.input_min..=self.input_max).contains(&self.initial_setpoint) {
            return Err(ConfigError::InitialSetpoint);
        }
        if self.period.is_zero() {
            return Err(ConfigError::Period);
        }

        Ok(())
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::new()
    }
}
