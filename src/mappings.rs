use crate::tuner::{Direction, Gain, GainAction};

/// Logical buttons on the operator controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    L1,
    L2,
    R1,
    R2,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::L1,
        Button::L2,
        Button::R1,
        Button::R2,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Buttons that tune a single gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GainButtons {
    pub increase: Button,
    pub decrease: Button,
    pub zero: Button,
}

impl GainButtons {
    /// Resolves this cycle's presses into one action. Increase beats
    /// decrease, which beats zero.
    pub fn action(&self, mut pressed: impl FnMut(Button) -> bool) -> Option<GainAction> {
        if pressed(self.increase) {
            Some(GainAction::Adjust(Direction::Increase))
        } else if pressed(self.decrease) {
            Some(GainAction::Adjust(Direction::Decrease))
        } else if pressed(self.zero) {
            Some(GainAction::Zero)
        } else {
            None
        }
    }
}

// TODO: allow the layout to be changed from the brain screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuningMappings {
    pub toggle_enabled: Button,
    pub cycle_increment: Button,

    pub kp: GainButtons,
    pub ki: GainButtons,
    pub kd: GainButtons,
}

impl TuningMappings {
    pub fn gain(&self, gain: Gain) -> &GainButtons {
        match gain {
            Gain::Proportional => &self.kp,
            Gain::Integral => &self.ki,
            Gain::Derivative => &self.kd,
        }
    }
}

impl Default for TuningMappings {
    /// D-pad up/down tunes kp, the left bumpers tune ki and the right
    /// bumpers tune kd. Y, X and A zero kp, ki and kd. B toggles the loop and
    /// d-pad right selects the next increment.
    fn default() -> Self {
        Self {
            toggle_enabled: Button::B,
            cycle_increment: Button::Right,
            kp: GainButtons {
                increase: Button::Up,
                decrease: Button::Down,
                zero: Button::Y,
            },
            ki: GainButtons {
                increase: Button::L1,
                decrease: Button::L2,
                zero: Button::X,
            },
            kd: GainButtons {
                increase: Button::R1,
                decrease: Button::R2,
                zero: Button::A,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_wins_over_decrease() {
        let buttons = TuningMappings::default().kp;
        let action = buttons.action(|_| true);
        assert_eq!(action, Some(GainAction::Adjust(Direction::Increase)));
    }

    #[test]
    fn decrease_wins_over_zero() {
        let buttons = TuningMappings::default().ki;
        let action = buttons.action(|button| button != Button::L1);
        assert_eq!(action, Some(GainAction::Adjust(Direction::Decrease)));
    }

    #[test]
    fn zero_alone() {
        let buttons = TuningMappings::default().kd;
        let action = buttons.action(|button| button == Button::A);
        assert_eq!(action, Some(GainAction::Zero));
    }

    #[test]
    fn lower_priority_buttons_are_not_polled() {
        let buttons = TuningMappings::default().kp;
        let mut polled = 0;
        buttons.action(|_| {
            polled += 1;
            true
        });
        assert_eq!(polled, 1);
    }

    #[test]
    fn default_layout_has_no_shared_buttons() {
        let m = TuningMappings::default();
        let mut used = [false; Button::ALL.len()];

        let buttons = [m.toggle_enabled, m.cycle_increment]
            .into_iter()
            .chain(Gain::ALL.iter().flat_map(|&g| {
                let b = m.gain(g);
                [b.increase, b.decrease, b.zero]
            }));
        for button in buttons {
            assert!(!used[button.index()], "{button:?} mapped twice");
            used[button.index()] = true;
        }
    }
}
