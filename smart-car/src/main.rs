#![no_std]
#![no_main]

mod config;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{self, Driver};
use embassy_time::{Delay, Instant};
use maneuver_sequence::run_demo;
use motion_hardware::{EnablePins, L298NMotorDriver, TimedDrive};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => usb::InterruptHandler<USB>;
});

#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, config::USB_LOG_LEVEL, driver);
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Program start");
    let p = embassy_rp::init(Default::default());
    let _led = Output::new(p.PIN_25, Level::High);

    unwrap!(spawner.spawn(logger_task(Driver::new(p.USB, Irqs))));

    let enable_pins = EnablePins::new(
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
    );

    let motor = L298NMotorDriver::new(
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        config::LEFT_PAIR_FORWARD,
        config::RIGHT_PAIR_FORWARD,
    );
    let chassis = TimedDrive::new(motor, Delay);

    info!("Starting maneuver loop at {} ms", Instant::now().as_millis());
    match run_demo(enable_pins, chassis, Delay).await {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("maneuver loop stopped: {}", Debug2Format(&e)),
    }
}
