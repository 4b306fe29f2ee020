#![no_main]
#![no_std]

use core::time::Duration;

use pid_tuner::{
    AnalogGateway, Button, ControlLoop, Diagnostics, EdgeSource, LoopConfig, Telemetry,
    TuningMappings,
};
use vexide::{
    core::{print, println, time::Instant},
    devices::{
        adi::{analog::AdiAnalogIn, motor::AdiMotor},
        controller::ControllerState,
    },
    prelude::*,
    startup::banner::themes::THEME_MURICA,
};

struct Robot {
    controller: Controller,
    sensor: AdiAnalogIn,
    motor: AdiMotor,
}

/// Primary controller as an edge source. Edges are computed by vexide
/// between consecutive `state()` calls, so refreshing the snapshot is what
/// consumes them.
struct Gamepad<'a> {
    controller: &'a Controller,
    state: ControllerState,
}

impl<'a> Gamepad<'a> {
    fn new(controller: &'a Controller) -> Self {
        Self {
            controller,
            state: controller.state().unwrap_or_default(),
        }
    }
}

impl EdgeSource for Gamepad<'_> {
    fn pressed(&self, button: Button) -> bool {
        let state = &self.state;

        match button {
            Button::Up => state.button_up,
            Button::Down => state.button_down,
            Button::Left => state.button_left,
            Button::Right => state.button_right,
            Button::A => state.button_a,
            Button::B => state.button_b,
            Button::X => state.button_x,
            Button::Y => state.button_y,
            Button::L1 => state.button_l1,
            Button::L2 => state.button_l2,
            Button::R1 => state.button_r1,
            Button::R2 => state.button_r2,
        }
        .is_now_pressed()
    }

    fn axis(&self) -> i8 {
        self.state.left_stick.y_raw()
    }

    fn consume_all(&mut self) {
        self.state = self.controller.state().unwrap_or_default();
    }
}

struct Plant<'a> {
    sensor: &'a AdiAnalogIn,
    motor: &'a mut AdiMotor,
}

impl AnalogGateway for Plant<'_> {
    fn read(&mut self) -> i32 {
        self.sensor.value().map(i32::from).unwrap_or_default()
    }

    fn write(&mut self, output: i8) {
        _ = self.motor.set_raw_output(output);
    }
}

/// Rewrites the same terminal line every cycle.
struct Console;

impl Telemetry for Console {
    fn emit(&mut self, diagnostics: &Diagnostics) {
        print!("{}\r", diagnostics);
    }
}

impl Compete for Robot {
    async fn autonomous(&mut self) {
        println!("Autonomous control started.");
        _ = self.motor.set_raw_output(0);
    }

    async fn driver(&mut self) {
        println!("Driver control started.");

        // Tuned gains only live as long as this task does.
        let mut control = match ControlLoop::new(LoopConfig::default(), TuningMappings::default())
        {
            Ok(control) => control,
            Err(e) => {
                println!("Invalid loop configuration: {}", e);
                return;
            }
        };

        let mut gamepad = Gamepad::new(&self.controller);
        let mut plant = Plant {
            sensor: &self.sensor,
            motor: &mut self.motor,
        };

        loop {
            let delay = Instant::now() + control.period();

            control.step(&mut gamepad, &mut plant, &mut Console);

            sleep_until(delay).await;
        }
    }
}

/// Average resting reading of the sensor.
async fn baseline(sensor: &AdiAnalogIn) -> u16 {
    const SAMPLES: u32 = 50;

    let mut total = 0u32;
    for _ in 0..SAMPLES {
        total += u32::from(sensor.value().unwrap_or_default());
        sleep(Duration::from_millis(10)).await;
    }

    (total / SAMPLES) as u16
}

#[vexide::main(banner(theme = THEME_MURICA))]
async fn main(peripherals: Peripherals) {
    println!("Program started.");

    let sensor = AdiAnalogIn::new(peripherals.adi_a);
    let motor = AdiMotor::new(peripherals.adi_f, false);

    println!("Sensor baseline: {}", baseline(&sensor).await);

    let robot = Robot {
        controller: peripherals.primary_controller,
        sensor,
        motor,
    };

    robot.compete().await;
}
