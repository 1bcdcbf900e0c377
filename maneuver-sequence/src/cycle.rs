use core::time::Duration;

use motion_high_level::MotionCommand;

/// How long the motors run for each maneuver.
pub const DRIVE_TIME: Duration = Duration::from_millis(500);

/// How long the robot stands still after each maneuver.
pub const PAUSE: Duration = Duration::from_millis(3000);

/// One maneuver followed by a standstill.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub command: MotionCommand,
    pub pause: Duration,
}

impl Step {
    pub const fn new(command: MotionCommand, pause: Duration) -> Self {
        Self { command, pause }
    }
}

/// Forward, backward, right, left; each for [`DRIVE_TIME`] and followed by [`PAUSE`].
pub const DEMO_CYCLE: [Step; 4] = [
    Step::new(MotionCommand::Forward(DRIVE_TIME), PAUSE),
    Step::new(MotionCommand::Backward(DRIVE_TIME), PAUSE),
    Step::new(MotionCommand::TurnRight(DRIVE_TIME), PAUSE),
    Step::new(MotionCommand::TurnLeft(DRIVE_TIME), PAUSE),
];
