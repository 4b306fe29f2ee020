use crate::tuner::Gains;

/// Snapshot of the controller memory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlState {
    pub enabled: bool,
    pub error: f64,
    pub last_error: f64,
    pub integral: f64,
    pub output: f64,
}

/// PID controller whose gains live outside of it so they can be tuned live.
///
/// The derivative is the raw difference between consecutive errors. The
/// loop period is fixed, so any scaling is folded into `kd`.
#[derive(Clone, Debug)]
pub struct Pid {
    integral_threshold: f64,
    output_min: f64,
    output_max: f64,

    enabled: bool,
    error: f64,
    prev_error: f64,
    integral: f64,
    output: f64,
}

impl Pid {
    pub fn new(integral_threshold: f64, output_min: f64, output_max: f64) -> Self {
        Self {
            integral_threshold,
            output_min,
            output_max,
            enabled: false,
            error: 0.0,
            prev_error: 0.0,
            integral: 0.0,
            output: 0.0,
        }
    }

    /// Clears the integral and output.
    ///
    /// The previous error is kept, so the first derivative after the loop is
    /// enabled again is taken against the last error seen while it was
    /// running.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.output = 0.0;
    }

    pub fn step(&mut self, input: f64, setpoint: f64, gains: &Gains, enabled: bool) -> f64 {
        self.enabled = enabled;

        if !enabled {
            self.reset();
            return self.output;
        }

        let error = input - setpoint;
        self.error = error;

        // Large errors throw the accumulated history away instead of
        // saturating it.
        if error < self.integral_threshold && error > -self.integral_threshold {
            self.integral += error;
        } else {
            self.integral = 0.0;
        }

        let derivative = error - self.prev_error;
        self.prev_error = error;

        let output = error * gains.kp + self.integral * gains.ki + derivative * gains.kd;
        self.output = output.clamp(self.output_min, self.output_max);

        self.output
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn state(&self) -> ControlState {
        ControlState {
            enabled: self.enabled,
            error: self.error,
            last_error: self.prev_error,
            integral: self.integral,
            output: self.output,
        }
    }
}
