use core::time::Duration;

use embedded_hal_async::delay::DelayNs;
use motion_high_level::Chassis;

use crate::delay::wait_for;
use crate::{ChassisDirection, HBridge};

/// Runs each maneuver for a fixed time: set the direction, wait, stop.
///
/// The enable pins are not touched here; engage them once with
/// [`EnablePins`](crate::EnablePins) before driving.
pub struct TimedDrive<M, D> {
    bridge: M,
    delay: D,
}

impl<M, D> TimedDrive<M, D>
where
    M: HBridge,
    D: DelayNs,
{
    pub fn new(bridge: M, delay: D) -> Self {
        Self { bridge, delay }
    }

    pub fn release(self) -> (M, D) {
        (self.bridge, self.delay)
    }

    async fn run(&mut self, direction: ChassisDirection, duration: Duration) -> Result<(), M::Error> {
        log::debug!("{:?} for {}ms", direction, duration.as_millis());
        self.bridge.set_direction(direction)?;
        wait_for(&mut self.delay, duration).await;
        self.bridge.stop()?;
        Ok(())
    }
}

impl<M, D> Chassis for TimedDrive<M, D>
where
    M: HBridge,
    D: DelayNs,
{
    type Error = M::Error;

    async fn move_forward(&mut self, duration: Duration) -> Result<(), Self::Error> {
        self.run(ChassisDirection::Forward, duration).await
    }

    async fn move_backward(&mut self, duration: Duration) -> Result<(), Self::Error> {
        self.run(ChassisDirection::Backward, duration).await
    }

    async fn turn_right(&mut self, duration: Duration) -> Result<(), Self::Error> {
        self.run(ChassisDirection::Right, duration).await
    }

    async fn turn_left(&mut self, duration: Duration) -> Result<(), Self::Error> {
        self.run(ChassisDirection::Left, duration).await
    }
}
