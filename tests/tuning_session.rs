use approx::assert_abs_diff_eq;
use pid_tuner::{
    sim::{SimController, SimPlant},
    Button, ControlLoop, Diagnostics, Gains, LoopConfig, Telemetry, TuningMappings,
};

#[derive(Default)]
struct Lines(Vec<String>);

impl Telemetry for Lines {
    fn emit(&mut self, diagnostics: &Diagnostics) {
        self.0.push(diagnostics.to_string());
    }
}

struct Session {
    control: ControlLoop,
    controller: SimController,
    plant: SimPlant,
    lines: Lines,
}

impl Session {
    fn new(gains: Gains) -> Self {
        let config = LoopConfig::new().initial_gains(gains);

        Self {
            control: ControlLoop::new(config, TuningMappings::default()).unwrap(),
            controller: SimController::new(),
            plant: SimPlant::new(2000.0).with_gain(-0.5).with_leak(0.0),
            lines: Lines::default(),
        }
    }

    fn cycle(&mut self) -> i8 {
        self.control
            .step(&mut self.controller, &mut self.plant, &mut self.lines)
    }

    fn run(&mut self, cycles: usize) {
        for _ in 0..cycles {
            self.cycle();
        }
    }

    /// Press and release, one cycle each.
    fn tap(&mut self, button: Button) {
        self.controller.hold(button);
        self.cycle();
        self.controller.release(button);
        self.cycle();
    }
}

#[test]
fn holding_toggle_flips_once() {
    let mut session = Session::new(Gains::new(0.01, 0.0, 0.0));

    session.controller.hold(Button::B);
    session.run(5);
    assert!(session.control.is_enabled());

    session.controller.release(Button::B);
    session.run(2);
    assert!(session.control.is_enabled());

    session.tap(Button::B);
    assert!(!session.control.is_enabled());
}

#[test]
fn taps_step_gains_by_selected_increment() {
    let mut session = Session::new(Gains::new(0.01, 0.01, 0.01));

    session.tap(Button::Up);
    session.tap(Button::Up);
    assert_abs_diff_eq!(session.control.gains().kp, 0.012, epsilon = 1e-12);

    session.tap(Button::Right);
    session.tap(Button::Right);
    assert_eq!(session.control.increment(), 0.1);

    session.tap(Button::R2);
    assert_abs_diff_eq!(session.control.gains().kd, -0.09, epsilon = 1e-12);

    session.tap(Button::X);
    assert_eq!(session.control.gains().ki, 0.0);

    session.tap(Button::Right);
    assert_eq!(session.control.increment(), 0.001);
}

#[test]
fn holding_gain_button_adjusts_once() {
    let mut session = Session::new(Gains::new(0.0, 0.0, 0.0));

    session.controller.hold(Button::L1);
    session.run(10);

    assert_abs_diff_eq!(session.control.gains().ki, 0.001, epsilon = 1e-12);
}

#[test]
fn setpoint_follows_axis_and_saturates() {
    let mut session = Session::new(Gains::default());

    session.controller.set_axis(127);
    session.run(50);
    assert_eq!(session.control.setpoint(), 4095.0);

    session.controller.set_axis(-128);
    session.run(50);
    assert_eq!(session.control.setpoint(), 7.0);
}

#[test]
fn enabled_loop_settles_near_setpoint() {
    let mut session = Session::new(Gains::new(0.2, 0.0, 0.0));

    session.controller.set_axis(100);
    session.cycle();
    session.controller.set_axis(0);
    assert_eq!(session.control.setpoint(), 2100.0);

    session.tap(Button::B);
    assert!(session.control.is_enabled());
    session.run(200);

    assert!((session.plant.position() - 2100.0).abs() <= 6.0);
    for output in [session.cycle(), session.plant.last_output()] {
        assert!((-60..=60).contains(&output));
    }
}

#[test]
fn disabling_holds_actuator_at_zero() {
    let mut session = Session::new(Gains::new(1.0, 0.0, 0.0));
    session.controller.set_axis(-100);
    session.cycle();
    session.controller.set_axis(0);

    session.tap(Button::B);
    assert_ne!(session.plant.last_output(), 0);

    session.tap(Button::B);
    let resting = session.plant.position();
    session.run(20);

    assert_eq!(session.plant.last_output(), 0);
    assert_eq!(session.plant.position(), resting);
    assert_eq!(session.control.state().integral, 0.0);
    assert_eq!(session.control.state().output, 0.0);
}

#[test]
fn one_diagnostic_line_per_cycle() {
    let mut session = Session::new(Gains::new(0.01, 0.01, 0.01));
    session.run(3);

    assert_eq!(session.lines.0.len(), 3);
    assert!(session.lines.0[0].starts_with("enabled: 0 cur pos: 2000.000000 setpoint: 2000.000000"));
    assert!(session.lines.0[0].ends_with("increment: 0.001000 p: 0.010000 i: 0.010000 d: 0.010000"));
}
