#![no_std]

pub mod chassis;

use core::time::Duration;

pub use chassis::Chassis;

/// Enum represents what high-level motion command to execute
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionCommand {
    /// Drive forward for the given time, then stop
    Forward(Duration),

    /// Drive backward for the given time, then stop
    Backward(Duration),

    /// Spin in place to the right for the given time, then stop
    TurnRight(Duration),

    /// Spin in place to the left for the given time, then stop
    TurnLeft(Duration),
}
