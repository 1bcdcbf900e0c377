//! The HC-SR04 is an ultrasonic distance sensor.
//!
//! Pulsing Trig makes the sensor emit a burst; Echo then stays high for the
//! round-trip time of that burst. The echo is sampled every [`TICK_US`], so one
//! tick is 4µs of flight, or about 0.68mm of distance.
//! The sensor is usable between 2cm and about 4m.

use core::fmt;

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// Sampling period of the echo pin.
pub const TICK_US: u32 = 4;

/// Trig pulse width from the datasheet.
const TRIGGER_PULSE_US: u32 = 10;

// Echo normally rises ~500µs after the trigger; give up after 750µs.
const ECHO_START_TIMEOUT_TICKS: u16 = 188;

// 100ms, about 17m. A lost burst keeps Echo high for ~130ms.
const ECHO_END_TIMEOUT_TICKS: u16 = 25_000;

// 4µs at the speed of sound, halved for the round trip.
const UM_PER_TICK: u64 = 6805;

/// Outcome of one ranging attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceMeasurement {
    /// Echo stayed high past the timeout: nothing in range.
    Infinity,
    /// Echo never went high: the sensor did not react to the trigger.
    Unknown,
    Measured(Distance),
}

/// A measured distance, kept as the number of echo ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Distance {
    ticks: u16,
}

impl Distance {
    pub fn from_ticks(ticks: u16) -> Self {
        Self { ticks }
    }

    pub fn ticks(&self) -> u16 {
        self.ticks
    }

    /// Distance in micrometers.
    pub fn to_um(&self) -> u64 {
        self.ticks as u64 * UM_PER_TICK
    }

    /// Distance in millimeters, rounded down.
    pub fn to_mm(&self) -> u64 {
        self.to_um() / 1000
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.to_mm())
    }
}

impl fmt::Display for DistanceMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMeasurement::Infinity => f.write_str("∞"),
            DistanceMeasurement::Unknown => f.write_str("Ø"),
            DistanceMeasurement::Measured(distance) => fmt::Display::fmt(distance, f),
        }
    }
}

pub struct HcSr04<TRIG, ECHO, D> {
    trigger: TRIG,
    echo: ECHO,
    delay: D,
}

impl<TRIG, ECHO, D, E> HcSr04<TRIG, ECHO, D>
where
    TRIG: OutputPin<Error = E>,
    ECHO: InputPin<Error = E>,
    D: DelayNs,
{
    pub fn new(trigger: TRIG, echo: ECHO, delay: D) -> Self {
        Self {
            trigger,
            echo,
            delay,
        }
    }

    /// Send a burst and time its echo.
    pub async fn get_distance(&mut self) -> Result<DistanceMeasurement, E> {
        self.trigger.set_high()?;
        self.delay.delay_us(TRIGGER_PULSE_US).await;
        self.trigger.set_low()?;

        let mut ticks: u16 = 0;
        while self.echo.is_low()? {
            if ticks > ECHO_START_TIMEOUT_TICKS {
                log::debug!("HC-SR04 did not answer");
                return Ok(DistanceMeasurement::Unknown);
            }
            self.delay.delay_us(TICK_US).await;
            ticks += 1;
        }

        let mut ticks: u16 = 0;
        while self.echo.is_high()? {
            if ticks > ECHO_END_TIMEOUT_TICKS {
                return Ok(DistanceMeasurement::Infinity);
            }
            self.delay.delay_us(TICK_US).await;
            ticks += 1;
        }

        Ok(DistanceMeasurement::Measured(Distance::from_ticks(ticks)))
    }

    pub fn release(self) -> (TRIG, ECHO, D) {
        (self.trigger, self.echo, self.delay)
    }
}
