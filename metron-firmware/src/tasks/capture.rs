//! Edge capture and input line selection
//!
//! The capture task awaits rising edges on whichever line is active; the
//! inactive line's edges are never awaited, which is this firmware's form
//! of masking the inactive interrupt source. The button task debounces the
//! line-select button and asks the capture task to switch.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_stm32::exti::ExtiInput;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use portable_atomic::{AtomicU32, Ordering};

use crate::hw::UptimeCounter;
use metron_core::capture::{Frequency, FrequencyCapture, InputLine, NO_SIGNAL_RAW};

/// Latest frequency reading, encoded with [`Frequency::to_raw`]
pub static FREQUENCY_RAW: AtomicU32 = AtomicU32::new(NO_SIGNAL_RAW);

/// Request from the button task to switch the active line
pub static LINE_SWITCH: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Debounce settle time after a button edge
const DEBOUNCE_MS: u64 = 20;

/// Lockout between accepted presses
const LOCKOUT_MS: u64 = 150;

/// Capture task - measures the period between rising edges on the active line
#[embassy_executor::task]
pub async fn capture_task(mut pulse: ExtiInput<'static>, mut funcgen: ExtiInput<'static>) {
    info!("Capture task started");

    let mut capture = FrequencyCapture::new(InputLine::Pulse, UptimeCounter::new());

    loop {
        let line = capture.active_line();
        let edge = async {
            match line {
                InputLine::Pulse => pulse.wait_for_rising_edge().await,
                InputLine::FunctionGen => funcgen.wait_for_rising_edge().await,
            }
        };

        let event = select(edge, LINE_SWITCH.wait()).await;
        match event {
            Either::First(()) => {
                if let Some(freq) = capture.on_edge() {
                    FREQUENCY_RAW.store(freq.to_raw(), Ordering::Relaxed);
                    match freq {
                        Frequency::Hz(hz) => trace!("Measured {} Hz", hz),
                        Frequency::NoSignal => warn!("Degenerate edge pair, no reading"),
                    }
                }
            }
            Either::Second(()) => {
                let line = capture.switch_line();
                // The old line's reading is stale for the new source
                FREQUENCY_RAW.store(NO_SIGNAL_RAW, Ordering::Relaxed);
                info!("Active line switched to {}", line);
            }
        }
    }
}

/// Button task - toggles the active input line
#[embassy_executor::task]
pub async fn button_task(mut button: ExtiInput<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_rising_edge().await;

        // Debounce
        Timer::after_millis(DEBOUNCE_MS).await;
        if button.is_high() {
            LINE_SWITCH.signal(());
            debug!("Line-select button pressed");
            Timer::after_millis(LOCKOUT_MS).await;
        }
    }
}
