use embedded_hal::digital::OutputPin;

/// The ENA/ENB pins of an L298N before the channels are switched on.
pub struct EnablePins<ENA, ENB> {
    enable_a: ENA,
    enable_b: ENB,
}

/// Enable pins that have been driven high.
///
/// There is no way to change the pin level from here; the channels stay on
/// until the pins are released.
pub struct EngagedEnablePins<ENA, ENB> {
    enable_a: ENA,
    enable_b: ENB,
}

impl<ENA, ENB, PinErr> EnablePins<ENA, ENB>
where
    ENA: OutputPin<Error = PinErr>,
    ENB: OutputPin<Error = PinErr>,
{
    pub fn new(enable_a: ENA, enable_b: ENB) -> Self {
        Self { enable_a, enable_b }
    }

    /// Drive both enable pins high, once.
    pub fn engage(mut self) -> Result<EngagedEnablePins<ENA, ENB>, PinErr> {
        self.enable_a.set_high()?;
        self.enable_b.set_high()?;
        log::info!("L298N channels enabled");
        Ok(EngagedEnablePins {
            enable_a: self.enable_a,
            enable_b: self.enable_b,
        })
    }

    pub fn release(self) -> (ENA, ENB) {
        (self.enable_a, self.enable_b)
    }
}

impl<ENA, ENB> EngagedEnablePins<ENA, ENB> {
    pub fn release(self) -> (ENA, ENB) {
        (self.enable_a, self.enable_b)
    }
}
