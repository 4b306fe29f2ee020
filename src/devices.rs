//! Boundaries to the hardware the loop talks to.
//!
//! The loop only ever sees these traits, so a simulated controller or a
//! replayed session can stand in for the real devices.

use crate::{control::Diagnostics, mappings::Button};

/// Debounced operator input.
pub trait EdgeSource {
    /// Whether `button` went from released to pressed since the last
    /// [`consume_all`](Self::consume_all).
    fn pressed(&self, button: Button) -> bool;

    /// Raw continuous input used to move the setpoint, roughly ±127.
    fn axis(&self) -> i8;

    /// Latches the current button levels so a held button reports a single
    /// edge. Called once per cycle after every query.
    fn consume_all(&mut self);
}

/// Sensor in, actuator out.
pub trait AnalogGateway {
    fn read(&mut self) -> i32;

    fn write(&mut self, output: i8);
}

/// Receives the per-cycle tuning feedback.
pub trait Telemetry {
    fn emit(&mut self, diagnostics: &Diagnostics);
}

/// Drops every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTelemetry;

impl Telemetry for NoTelemetry {
    fn emit(&mut self, _diagnostics: &Diagnostics) {}
}
