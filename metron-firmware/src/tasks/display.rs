//! Display task
//!
//! Owns the panel end to end: reset pulse, init sequence, boot banner, then
//! a fixed-rate redraw loop that snapshots the published measurements and
//! rewrites the two telemetry lines. Link errors are logged and the loop
//! keeps going; the next redraw repaints the whole line anyway.

use defmt::*;
use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Ticker, Timer};
use portable_atomic::Ordering;

use metron_core::capture::Frequency;
use metron_core::telemetry::Readings;
use metron_display::{Renderer, Transport};

use super::analog::RESISTANCE_OHMS;
use super::capture::FREQUENCY_RAW;
use crate::hw::{ControlPin, OledBus};

/// Renderer over the board's SPI wiring
pub type OledRenderer = Renderer<Transport<OledBus, ControlPin, ControlPin>>;

/// Boot banner, one entry per displayed page
const BANNER: [(u8, &str); 4] = [
    (0, "Metron"),
    (2, "Freq + Res"),
    (4, "Meter"),
    (6, "v0.1"),
];

/// Redraw period
const REDRAW_PERIOD: Duration = Duration::from_millis(100);

/// Pause between bring-up attempts when the panel does not answer
const BRINGUP_RETRY: Duration = Duration::from_millis(500);

/// Display task - banner, then the telemetry redraw loop
#[embassy_executor::task]
pub async fn display_task(mut reset: Output<'static>, mut renderer: OledRenderer) {
    info!("Display task started");

    // Reset pulse, then let the controller come out of reset before the
    // init sequence. A panel that does not answer gets a fresh reset and
    // another attempt rather than staying dark until power cycle.
    loop {
        reset.set_low();
        Timer::after_millis(3).await;
        reset.set_high();
        Timer::after_millis(3).await;

        match renderer.init().and_then(|()| renderer.clear()) {
            Ok(()) => break,
            Err(e) => {
                warn!("Display bring-up failed: {}", e);
                Timer::after(BRINGUP_RETRY).await;
            }
        }
    }

    for (page, text) in BANNER {
        if let Err(e) = renderer.write_line(page, text) {
            warn!("Banner write failed: {}", e);
        }
        Timer::after_millis(500).await;
    }
    Timer::after_millis(2_000).await;

    // The redraw loop repaints the telemetry pages anyway, so a failed
    // clear here only leaves stale banner pixels on the unused pages
    if let Err(e) = renderer.clear() {
        warn!("Display clear failed: {}", e);
    }

    let mut ticker = Ticker::every(REDRAW_PERIOD);
    loop {
        let readings = Readings {
            frequency: Frequency::from_raw(FREQUENCY_RAW.load(Ordering::Relaxed)),
            resistance_ohms: RESISTANCE_OHMS.load(Ordering::Relaxed),
        };

        if let Err(e) = renderer.write_line(2, &readings.resistance_line()) {
            warn!("Display write failed: {}", e);
        }
        if let Err(e) = renderer.write_line(4, &readings.frequency_line()) {
            warn!("Display write failed: {}", e);
        }

        ticker.next().await;
    }
}
