use core::time::Duration;

use crate::MotionCommand;

/// A drive base that can run the four basic maneuvers.
///
/// Every call powers the motors for `duration` and leaves them stopped when it returns.
#[allow(async_fn_in_trait)]
pub trait Chassis {
    type Error: core::fmt::Debug;

    async fn move_forward(&mut self, duration: Duration) -> Result<(), Self::Error>;
    async fn move_backward(&mut self, duration: Duration) -> Result<(), Self::Error>;
    async fn turn_right(&mut self, duration: Duration) -> Result<(), Self::Error>;
    async fn turn_left(&mut self, duration: Duration) -> Result<(), Self::Error>;

    async fn execute(&mut self, command: MotionCommand) -> Result<(), Self::Error> {
        match command {
            MotionCommand::Forward(d) => self.move_forward(d).await,
            MotionCommand::Backward(d) => self.move_backward(d).await,
            MotionCommand::TurnRight(d) => self.turn_right(d).await,
            MotionCommand::TurnLeft(d) => self.turn_left(d).await,
        }
    }
}
