use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;
use motion_hardware::delay::wait_for;
use motion_high_level::Chassis;

use crate::cycle::{Step, DEMO_CYCLE};

/// Plays a fixed list of [`Step`]s on a chassis, over and over.
pub struct Sequencer<'a, C, D> {
    chassis: C,
    delay: D,
    steps: &'a [Step],
    completed_cycles: u32,
}

impl<C, D> Sequencer<'static, C, D>
where
    C: Chassis,
    D: DelayNs,
{
    /// A sequencer for [`DEMO_CYCLE`].
    pub fn demo(chassis: C, delay: D) -> Self {
        Self::new(chassis, delay, &DEMO_CYCLE)
    }
}

impl<'a, C, D> Sequencer<'a, C, D>
where
    C: Chassis,
    D: DelayNs,
{
    pub fn new(chassis: C, delay: D, steps: &'a [Step]) -> Self {
        Self {
            chassis,
            delay,
            steps,
            completed_cycles: 0,
        }
    }

    pub fn steps(&self) -> &'a [Step] {
        self.steps
    }

    /// Number of full passes through the steps so far. Wraps around on overflow.
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Run every step once: the command, then its pause.
    pub async fn run_cycle(&mut self) -> Result<(), C::Error> {
        for step in self.steps {
            self.chassis.execute(step.command).await?;
            wait_for(&mut self.delay, step.pause).await;
        }
        self.completed_cycles = self.completed_cycles.wrapping_add(1);
        log::info!("cycle {} done", self.completed_cycles);
        Ok(())
    }

    /// Repeat [`run_cycle`](Self::run_cycle) until the chassis reports an error.
    ///
    /// With an empty step list this never yields.
    pub async fn run_forever(&mut self) -> Result<Infallible, C::Error> {
        loop {
            self.run_cycle().await?;
        }
    }

    pub fn release(self) -> (C, D) {
        (self.chassis, self.delay)
    }
}
