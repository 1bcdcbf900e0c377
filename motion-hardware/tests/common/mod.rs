#![allow(dead_code)]

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// Remembers every wait it was asked for, in microseconds.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_us: Vec<u64>,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_us.push(ns as u64 / 1000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us as u64);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_us.push(ms as u64 * 1000);
    }
}

/// An output pin that starts failing after a number of writes.
pub struct FlakyPin {
    pub writes_left: usize,
}

impl ErrorType for FlakyPin {
    type Error = ErrorKind;
}

impl OutputPin for FlakyPin {
    fn set_low(&mut self) -> Result<(), ErrorKind> {
        self.write()
    }

    fn set_high(&mut self) -> Result<(), ErrorKind> {
        self.write()
    }
}

impl FlakyPin {
    fn write(&mut self) -> Result<(), ErrorKind> {
        match self.writes_left.checked_sub(1) {
            Some(left) => {
                self.writes_left = left;
                Ok(())
            }
            None => Err(ErrorKind::Other),
        }
    }
}
