//! Host-side stand-ins for the controller and the plant.

use crate::{
    devices::{AnalogGateway, EdgeSource},
    mappings::Button,
};

/// Controller driven by button levels, with the same edge behavior as the
/// real one: a button held across cycles reports one press.
#[derive(Clone, Debug, Default)]
pub struct SimController {
    held: [bool; Button::ALL.len()],
    latched: [bool; Button::ALL.len()],
    axis: i8,
}

impl SimController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, button: Button) {
        self.held[button.index()] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[button.index()] = false;
    }

    pub fn release_all(&mut self) {
        self.held = Default::default();
    }

    pub fn set_axis(&mut self, axis: i8) {
        self.axis = axis;
    }
}

impl EdgeSource for SimController {
    fn pressed(&self, button: Button) -> bool {
        self.held[button.index()] && !self.latched[button.index()]
    }

    fn axis(&self) -> i8 {
        self.axis
    }

    fn consume_all(&mut self) {
        self.latched = self.held;
    }
}

/// First-order plant: the sensor moves toward a resting position and is
/// pushed by the actuator output.
#[derive(Clone, Debug)]
pub struct SimPlant {
    position: f64,
    rest: f64,
    gain: f64,
    leak: f64,
    min: f64,
    max: f64,
    last_output: i8,
}

impl SimPlant {
    pub fn new(position: f64) -> Self {
        Self {
            position,
            rest: position,
            gain: 0.5,
            leak: 0.02,
            min: 0.0,
            max: 4095.0,
            last_output: 0,
        }
    }

    /// How many sensor counts one unit of output moves the plant per cycle.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Fraction of the distance to the resting position recovered per cycle.
    pub fn with_leak(mut self, leak: f64) -> Self {
        self.leak = leak;
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn last_output(&self) -> i8 {
        self.last_output
    }
}

impl AnalogGateway for SimPlant {
    fn read(&mut self) -> i32 {
        self.position as i32
    }

    fn write(&mut self, output: i8) {
        self.last_output = output;
        self.position += f64::from(output) * self.gain + (self.rest - self.position) * self.leak;
        self.position = self.position.clamp(self.min, self.max);
    }
}
