#![allow(dead_code)]

use embedded_hal_async::delay::DelayNs;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

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

pub fn output_pin(states: &[State]) -> PinMock {
    let expectations: Vec<_> = states.iter().map(|s| PinTransaction::set(*s)).collect();
    PinMock::new(&expectations)
}

/// An input pin that reads `(state, count)` runs in order.
pub fn input_pin(runs: &[(State, usize)]) -> PinMock {
    let expectations: Vec<_> = runs
        .iter()
        .flat_map(|&(state, count)| std::iter::repeat(PinTransaction::get(state)).take(count))
        .collect();
    PinMock::new(&expectations)
}
