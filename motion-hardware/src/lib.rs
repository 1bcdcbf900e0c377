#![no_std]
//! Drivers for the L298N dual H-bridge.
//!
//! The bridge has two enable pins (ENA, ENB) and four direction pins (IN1..IN4).
//! [`L298NMotorDriver`] owns the direction pins, [`EnablePins`] owns the enable pins,
//! and [`TimedDrive`] turns the pair into a [`motion_high_level::Chassis`].

pub mod delay;
pub mod direction;
pub mod enable;
pub mod timed;

pub use direction::{ChassisDirection, PairDirection};
pub use enable::{EnablePins, EngagedEnablePins};
pub use timed::TimedDrive;

use embedded_hal::digital::{OutputPin, PinState};
use typebool::Bool;

/// The direction half of an L298N.
///
/// `IsFirstPairForward` says whether pair A moves forward when OUT1 is high and OUT2 is low;
/// `IsSecondPairForward` says the same for pair B with OUT3 and OUT4.
/// Mirrored motors on the two sides of a chassis usually need different values.
pub struct L298NMotorDriver<OUT1, OUT2, OUT3, OUT4, IsFirstPairForward, IsSecondPairForward>
where
    OUT1: OutputPin,
    OUT2: OutputPin,
    OUT3: OutputPin,
    OUT4: OutputPin,
    IsFirstPairForward: Bool,
    IsSecondPairForward: Bool,
{
    out_1: OUT1,
    out_2: OUT2,
    out_3: OUT3,
    out_4: OUT4,
    _first_pair_forward: IsFirstPairForward,
    _second_pair_forward: IsSecondPairForward,
}

impl<OUT1, OUT2, OUT3, OUT4, FPF, SPF, PinErr> L298NMotorDriver<OUT1, OUT2, OUT3, OUT4, FPF, SPF>
where
    OUT1: OutputPin<Error = PinErr>,
    OUT2: OutputPin<Error = PinErr>,
    OUT3: OutputPin<Error = PinErr>,
    OUT4: OutputPin<Error = PinErr>,
    FPF: Bool,
    SPF: Bool,
{
    pub fn new(
        out_1: OUT1,
        out_2: OUT2,
        out_3: OUT3,
        out_4: OUT4,
        first_pair_forward: FPF,
        second_pair_forward: SPF,
    ) -> Self {
        Self {
            out_1,
            out_2,
            out_3,
            out_4,
            _first_pair_forward: first_pair_forward,
            _second_pair_forward: second_pair_forward,
        }
    }

    /// Set the direction for pair A (the left one).
    ///
    /// Only sets the direction pins. Whether the motor actually turns depends on ENA.
    pub fn set_pair_a_direction(&mut self, direction: PairDirection) -> Result<(), PinErr> {
        let high = direction.first_pin_high(FPF::VALUE);
        self.out_1.set_state(PinState::from(high))?;
        self.out_2.set_state(PinState::from(!high))?;
        Ok(())
    }

    /// Set the direction for pair B (the right one).
    ///
    /// Only sets the direction pins. Whether the motor actually turns depends on ENB.
    pub fn set_pair_b_direction(&mut self, direction: PairDirection) -> Result<(), PinErr> {
        let high = direction.first_pin_high(SPF::VALUE);
        self.out_3.set_state(PinState::from(high))?;
        self.out_4.set_state(PinState::from(!high))?;
        Ok(())
    }

    /// Set the direction for both pairs.
    pub fn set_direction(&mut self, direction: ChassisDirection) -> Result<(), PinErr> {
        let (a, b) = direction.pair_directions();
        self.set_pair_a_direction(a)?;
        self.set_pair_b_direction(b)?;
        Ok(())
    }

    /// Pull all direction pins low.
    ///
    /// With ENA/ENB high this is a fast stop: both motor terminals sit at the same level.
    /// The motors only free-run when the enable pins are low.
    pub fn stop(&mut self) -> Result<(), PinErr> {
        self.out_1.set_low()?;
        self.out_2.set_low()?;
        self.out_3.set_low()?;
        self.out_4.set_low()?;
        Ok(())
    }

    /// Pull all direction pins high. Also a fast stop while the channels are enabled.
    pub fn brake(&mut self) -> Result<(), PinErr> {
        self.out_1.set_high()?;
        self.out_2.set_high()?;
        self.out_3.set_high()?;
        self.out_4.set_high()?;
        Ok(())
    }

    pub fn release(self) -> (OUT1, OUT2, OUT3, OUT4) {
        (self.out_1, self.out_2, self.out_3, self.out_4)
    }
}

/// Something that can point a two-pair drive base in a direction and stop it again.
pub trait HBridge {
    type Error: core::fmt::Debug;

    fn set_direction(&mut self, direction: ChassisDirection) -> Result<(), Self::Error>;
    fn stop(&mut self) -> Result<(), Self::Error>;
}

impl<OUT1, OUT2, OUT3, OUT4, FPF, SPF, PinErr> HBridge
    for L298NMotorDriver<OUT1, OUT2, OUT3, OUT4, FPF, SPF>
where
    OUT1: OutputPin<Error = PinErr>,
    OUT2: OutputPin<Error = PinErr>,
    OUT3: OutputPin<Error = PinErr>,
    OUT4: OutputPin<Error = PinErr>,
    FPF: Bool,
    SPF: Bool,
    PinErr: core::fmt::Debug,
{
    type Error = PinErr;

    fn set_direction(&mut self, direction: ChassisDirection) -> Result<(), PinErr> {
        L298NMotorDriver::set_direction(self, direction)
    }

    fn stop(&mut self) -> Result<(), PinErr> {
        L298NMotorDriver::stop(self)
    }
}
