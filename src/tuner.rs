//! Live gain adjustment.
//!
//! Gains are deliberately unbounded in both magnitude and sign. This is a
//! manual tuning tool and it is up to the operator to keep them sensible.

use crate::config::DEFAULT_INCREMENTS;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Gains {
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    fn get_mut(&mut self, gain: Gain) -> &mut f64 {
        match gain {
            Gain::Proportional => &mut self.kp,
            Gain::Integral => &mut self.ki,
            Gain::Derivative => &mut self.kd,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gain {
    Proportional,
    Integral,
    Derivative,
}

impl Gain {
    pub const ALL: [Gain; 3] = [Gain::Proportional, Gain::Integral, Gain::Derivative];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// What a single cycle of operator input does to one gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GainAction {
    Adjust(Direction),
    Zero,
}

/// Owns the gains and the currently selected step size.
#[derive(Clone, Debug)]
pub struct GainTuner<const N: usize = 3> {
    gains: Gains,
    increments: [f64; N],
    index: usize,
}

impl<const N: usize> GainTuner<N> {
    const NON_EMPTY: () = assert!(N > 0, "increment table needs at least one entry");

    pub fn new(gains: Gains, increments: [f64; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            gains,
            increments,
            index: 0,
        }
    }

    /// Selects the next step size, wrapping back to the first.
    pub fn cycle_increment(&mut self) {
        self.index = (self.index + 1) % N;
    }

    pub fn adjust(&mut self, gain: Gain, direction: Direction) {
        let step = self.increment();
        let value = self.gains.get_mut(gain);

        match direction {
            Direction::Increase => *value += step,
            Direction::Decrease => *value -= step,
        }
    }

    pub fn zero(&mut self, gain: Gain) {
        *self.gains.get_mut(gain) = 0.0;
    }

    pub fn apply(&mut self, gain: Gain, action: GainAction) {
        match action {
            GainAction::Adjust(direction) => self.adjust(gain, direction),
            GainAction::Zero => self.zero(gain),
        }
    }

    pub fn gains(&self) -> &Gains {
        &self.gains
    }

    pub fn increment(&self) -> f64 {
        self.increments[self.index]
    }

    pub fn increment_index(&self) -> usize {
        self.index
    }
}

impl Default for GainTuner<3> {
    fn default() -> Self {
        Self::new(Gains::default(), DEFAULT_INCREMENTS)
    }
}
