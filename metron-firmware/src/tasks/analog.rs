//! Potentiometer sampling and DAC mirror
//!
//! Samples the front-panel potentiometer, publishes the derived resistance
//! for the display, and mirrors the raw sample onto the DAC output so the
//! external timer circuit sees the pot position as a voltage.

use defmt::*;
use embassy_stm32::adc::{Adc, AnyAdcChannel};
use embassy_stm32::dac::{DacCh1, Value};
use embassy_stm32::mode::Blocking;
use embassy_stm32::peripherals::{ADC1, DAC1};
use embassy_time::{Duration, Ticker};
use portable_atomic::{AtomicU32, Ordering};

use metron_core::analog::PotScale;

/// Latest potentiometer reading in ohms
pub static RESISTANCE_OHMS: AtomicU32 = AtomicU32::new(0);

/// Sample period. The pot is hand-turned, so 100 Hz is plenty.
const SAMPLE_PERIOD: Duration = Duration::from_millis(10);

/// Analog task - pot in, DAC out
#[embassy_executor::task]
pub async fn analog_task(
    mut adc: Adc<'static, ADC1>,
    mut pot: AnyAdcChannel<ADC1>,
    mut dac: DacCh1<'static, DAC1, Blocking>,
) {
    info!("Analog task started");

    let scale = PotScale::default();
    let mut ticker = Ticker::every(SAMPLE_PERIOD);

    loop {
        let raw = adc.read(&mut pot).await;

        RESISTANCE_OHMS.store(scale.ohms_from_raw(raw), Ordering::Relaxed);
        dac.set(Value::Bit12Right(raw));

        ticker.next().await;
    }
}
