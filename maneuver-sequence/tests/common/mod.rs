#![allow(dead_code)]

use core::convert::Infallible;
use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use motion_high_level::Chassis;

/// Everything the program did to the outside world, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EnableHigh(&'static str),
    EnableLow(&'static str),
    Forward(u64),
    Backward(u64),
    TurnRight(u64),
    TurnLeft(u64),
    Wait(u64),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// The chassis ran out of its maneuver budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop;

/// Records maneuvers and fails once `budget` of them have run.
pub struct RecordingChassis {
    pub log: Log,
    pub budget: usize,
}

impl RecordingChassis {
    fn record(&mut self, event: Event) -> Result<(), Stop> {
        if self.budget == 0 {
            return Err(Stop);
        }
        self.budget -= 1;
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

fn ms(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

impl Chassis for RecordingChassis {
    type Error = Stop;

    async fn move_forward(&mut self, duration: Duration) -> Result<(), Stop> {
        self.record(Event::Forward(ms(duration)))
    }

    async fn move_backward(&mut self, duration: Duration) -> Result<(), Stop> {
        self.record(Event::Backward(ms(duration)))
    }

    async fn turn_right(&mut self, duration: Duration) -> Result<(), Stop> {
        self.record(Event::TurnRight(ms(duration)))
    }

    async fn turn_left(&mut self, duration: Duration) -> Result<(), Stop> {
        self.record(Event::TurnLeft(ms(duration)))
    }
}

pub struct RecordingDelay {
    pub log: Log,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Wait(ns as u64 / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Wait(ms as u64));
    }
}

pub struct RecordingPin {
    pub name: &'static str,
    pub log: Log,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::EnableLow(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::EnableHigh(self.name));
        Ok(())
    }
}

/// One full pass of the demo as it should appear in the log.
pub fn demo_cycle_events() -> [Event; 8] {
    [
        Event::Forward(500),
        Event::Wait(3000),
        Event::Backward(500),
        Event::Wait(3000),
        Event::TurnRight(500),
        Event::Wait(3000),
        Event::TurnLeft(500),
        Event::Wait(3000),
    ]
}
