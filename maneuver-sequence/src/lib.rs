#![no_std]
//! The demo program for an L298N car: switch the bridge on once, then drive
//! forward, backward, right and left forever with a pause after each maneuver.

pub mod cycle;
pub mod sequencer;

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use motion_hardware::EnablePins;
use motion_high_level::Chassis;

pub use cycle::{Step, DEMO_CYCLE, DRIVE_TIME, PAUSE};
pub use sequencer::Sequencer;

#[derive(Debug, PartialEq, Eq)]
pub enum DemoError<PinErr, ChassisErr> {
    /// Driving an enable pin high failed.
    Enable(PinErr),
    /// A maneuver failed.
    Chassis(ChassisErr),
}

/// Engage both enable pins, then play [`DEMO_CYCLE`] until something fails.
pub async fn run_demo<ENA, ENB, PinErr, C, D>(
    enable_pins: EnablePins<ENA, ENB>,
    chassis: C,
    delay: D,
) -> Result<Infallible, DemoError<PinErr, C::Error>>
where
    ENA: OutputPin<Error = PinErr>,
    ENB: OutputPin<Error = PinErr>,
    C: Chassis,
    D: DelayNs,
{
    // Held for the rest of the program; dropping it would hand the pins back.
    let _engaged = enable_pins.engage().map_err(DemoError::Enable)?;

    let mut sequencer = Sequencer::demo(chassis, delay);
    sequencer.run_forever().await.map_err(DemoError::Chassis)
}
