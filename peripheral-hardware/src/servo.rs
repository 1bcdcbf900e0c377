//! Bit-banged hobby servo.
//!
//! The servo expects a rising edge every 20ms. The pulse width picks the
//! angle: 1ms is the smallest angle, 2ms the largest.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

const PERIOD_US: u32 = 20_000;
const MIN_PULSE_US: u32 = 1_000;
const MAX_PHASE_US: u32 = 1_000;
const MAX_ANGLE: u8 = 180;

// A single pulse is not always enough for the servo to settle.
const PULSES_PER_SET: usize = 5;

/// The part of the pulse above [`MIN_PULSE_US`], from 0 to 1000µs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ServoPhase {
    value: u32,
}

impl ServoPhase {
    /// Angles above 180° are clamped.
    pub fn from_angle(angle: u8) -> Self {
        let angle = angle.min(MAX_ANGLE) as u32;
        Self {
            value: angle * MAX_PHASE_US / MAX_ANGLE as u32,
        }
    }

    pub fn micros(&self) -> u32 {
        self.value
    }
}

pub struct Servo<P, D> {
    pin: P,
    delay: D,
    current_phase: ServoPhase,
}

impl<P, D> Servo<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take the pin and move the servo to the middle (90°).
    pub async fn new(pin: P, delay: D) -> Result<Self, P::Error> {
        let mut servo = Self {
            pin,
            delay,
            current_phase: ServoPhase::from_angle(90),
        };
        servo.set_phase(servo.current_phase).await?;
        Ok(servo)
    }

    pub fn phase(&self) -> ServoPhase {
        self.current_phase
    }

    pub async fn set_angle(&mut self, angle: u8) -> Result<(), P::Error> {
        self.set_phase(ServoPhase::from_angle(angle)).await
    }

    pub async fn set_phase(&mut self, phase: ServoPhase) -> Result<(), P::Error> {
        self.current_phase = phase;
        for _ in 0..PULSES_PER_SET {
            self.write_phase(phase).await?;
        }
        Ok(())
    }

    /// Visit each angle in turn, holding each one for `dwell_ms`.
    pub async fn sweep(&mut self, angles: &[u8], dwell_ms: u32) -> Result<(), P::Error> {
        for &angle in angles {
            self.set_angle(angle).await?;
            log::debug!("servo at {}°", angle);
            self.delay.delay_ms(dwell_ms).await;
        }
        Ok(())
    }

    async fn write_phase(&mut self, phase: ServoPhase) -> Result<(), P::Error> {
        let pulse = MIN_PULSE_US + phase.value;
        self.pin.set_high()?;
        self.delay.delay_us(pulse).await;
        self.pin.set_low()?;
        self.delay.delay_us(PERIOD_US - pulse).await;
        Ok(())
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
