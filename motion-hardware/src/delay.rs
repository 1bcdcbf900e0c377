use core::time::Duration;

use embedded_hal_async::delay::DelayNs;

/// Wait for a [`Duration`] on a [`DelayNs`], which only takes `u32` arguments.
///
/// Whole milliseconds go through `delay_ms` (in `u32::MAX` chunks), the rest through `delay_us`.
/// Nanosecond remainders are dropped.
pub async fn wait_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut millis = duration.as_millis();
    while millis > 0 {
        let chunk = millis.min(u32::MAX as u128) as u32;
        delay.delay_ms(chunk).await;
        millis -= chunk as u128;
    }
    let micros = duration.subsec_micros() % 1000;
    if micros > 0 {
        delay.delay_us(micros).await;
    }
}
