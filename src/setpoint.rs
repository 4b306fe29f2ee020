/// Target value driven by a continuous operator input, kept inside the
/// sensor's range.
#[derive(Clone, Copy, Debug)]
pub struct Setpoint {
    value: f64,
    min: f64,
    max: f64,
}

impl Setpoint {
    pub fn new(initial: f64, min: f64, max: f64) -> Self {
        Self {
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    /// Moves the target by one raw input sample. The joystick tops out at
    /// ±127, which bounds how far it can travel per cycle.
    pub fn advance(&mut self, delta: i8) {
        self.value = (self.value + f64::from(delta)).clamp(self.min, self.max);
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
