//! Live-tunable PID loop for a single analog sensor and a single actuator.
//!
//! Gains are nudged from controller buttons and the setpoint follows a
//! joystick axis while the loop runs. The library is target independent;
//! the V5 binary in `main.rs` wires it to real devices.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod devices;
pub mod mappings;
pub mod pid;
pub mod setpoint;
pub mod sim;
pub mod tuner;

pub use config::{ConfigError, LoopConfig};
pub use control::{ControlLoop, Diagnostics};
pub use devices::{AnalogGateway, EdgeSource, Telemetry};
pub use mappings::{Button, TuningMappings};
pub use pid::{ControlState, Pid};
pub use tuner::{Gain, GainTuner, Gains};
