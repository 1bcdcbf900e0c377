#![no_std]
//! Drivers for the add-on boards of the smart car: the HC-SR04 ultrasonic
//! range finder, the hobby servo it is mounted on, and the three-channel
//! line tracker.

pub mod hc_sr04;
pub mod line_tracker;
pub mod servo;

pub use hc_sr04::{Distance, DistanceMeasurement, HcSr04};
pub use line_tracker::{LineBiasDirection, LinePosition, LineState, LineTracker, LineTrackerDirection};
pub use servo::{Servo, ServoPhase};
