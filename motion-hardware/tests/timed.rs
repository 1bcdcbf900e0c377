mod common;

use core::time::Duration;

use common::{FlakyPin, RecordingDelay};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use motion_hardware::{L298NMotorDriver, TimedDrive};
use motion_high_level::{Chassis, MotionCommand};
use tokio_test::block_on;

fn pin(states: &[State]) -> PinMock {
    let expectations: Vec<_> = states.iter().map(|s| PinTransaction::set(*s)).collect();
    PinMock::new(&expectations)
}

#[test]
fn forward_sets_direction_waits_then_stops() {
    let mut out_1 = pin(&[State::High, State::Low]);
    let mut out_2 = pin(&[State::Low, State::Low]);
    let mut out_3 = pin(&[State::High, State::Low]);
    let mut out_4 = pin(&[State::Low, State::Low]);

    let driver = L298NMotorDriver::new(
        out_1.clone(),
        out_2.clone(),
        out_3.clone(),
        out_4.clone(),
        typebool::True,
        typebool::True,
    );
    let mut drive = TimedDrive::new(driver, RecordingDelay::default());

    block_on(drive.move_forward(Duration::from_millis(500))).unwrap();

    let (_, delay) = drive.release();
    assert_eq!(delay.waits_us, vec![500_000]);

    out_1.done();
    out_2.done();
    out_3.done();
    out_4.done();
}

#[test]
fn execute_dispatches_turn_left() {
    let mut out_1 = pin(&[State::Low, State::Low]);
    let mut out_2 = pin(&[State::High, State::Low]);
    let mut out_3 = pin(&[State::High, State::Low]);
    let mut out_4 = pin(&[State::Low, State::Low]);

    let driver = L298NMotorDriver::new(
        out_1.clone(),
        out_2.clone(),
        out_3.clone(),
        out_4.clone(),
        typebool::True,
        typebool::True,
    );
    let mut drive = TimedDrive::new(driver, RecordingDelay::default());

    block_on(drive.execute(MotionCommand::TurnLeft(Duration::from_millis(250)))).unwrap();

    out_1.done();
    out_2.done();
    out_3.done();
    out_4.done();
}

fn healthy_drive() -> TimedDrive<
    L298NMotorDriver<FlakyPin, FlakyPin, FlakyPin, FlakyPin, typebool::True, typebool::True>,
    RecordingDelay,
> {
    let pin = || FlakyPin { writes_left: usize::MAX };
    TimedDrive::new(
        L298NMotorDriver::new(pin(), pin(), pin(), pin(), typebool::True, typebool::True),
        RecordingDelay::default(),
    )
}

#[test]
fn zero_duration_does_not_wait() {
    let mut drive = healthy_drive();

    block_on(drive.turn_right(Duration::ZERO)).unwrap();

    let (_, delay) = drive.release();
    assert!(delay.waits_us.is_empty());
}

#[test]
fn sub_millisecond_remainder_is_waited_in_microseconds() {
    let mut drive = healthy_drive();

    block_on(drive.move_backward(Duration::from_micros(2_750))).unwrap();

    let (_, delay) = drive.release();
    assert_eq!(delay.waits_us, vec![2_000, 750]);
}

#[test]
fn failed_direction_write_skips_the_wait() {
    let mut drive = TimedDrive::new(
        L298NMotorDriver::new(
            FlakyPin { writes_left: 0 },
            FlakyPin { writes_left: 2 },
            FlakyPin { writes_left: 2 },
            FlakyPin { writes_left: 2 },
            typebool::True,
            typebool::True,
        ),
        RecordingDelay::default(),
    );

    let result = block_on(drive.move_forward(Duration::from_millis(500)));
    assert_eq!(result, Err(embedded_hal::digital::ErrorKind::Other));

    let (_, delay) = drive.release();
    assert!(delay.waits_us.is_empty());
}

#[test]
fn failed_stop_is_reported_after_the_wait() {
    // Each pin has exactly one write left: enough to set the direction, not to stop.
    let pin = || FlakyPin { writes_left: 1 };
    let mut drive = TimedDrive::new(
        L298NMotorDriver::new(pin(), pin(), pin(), pin(), typebool::True, typebool::True),
        RecordingDelay::default(),
    );

    let result = block_on(drive.move_forward(Duration::from_millis(500)));
    assert_eq!(result, Err(embedded_hal::digital::ErrorKind::Other));

    let (_, delay) = drive.release();
    assert_eq!(delay.waits_us, vec![500_000]);
}
