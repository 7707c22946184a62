//! Trait implementations over the chip peripherals
//!
//! Everything above this module talks to [`metron_hal`] traits; this is
//! where those contracts meet the embassy drivers.

use embassy_stm32::gpio::Output;
use embassy_stm32::mode::Blocking;
use embassy_stm32::spi::{self, Spi};
use embassy_time::{Instant, TICK_HZ};

use metron_hal::{ByteBus, CaptureCounter, OutputPin};

/// Push-pull control line (chip-select, data/command) over an embassy output
pub struct ControlPin {
    pin: Output<'static>,
}

impl ControlPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for ControlPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Display bus over the blocking SPI driver
pub struct OledBus {
    spi: Spi<'static, Blocking>,
}

impl OledBus {
    pub fn new(spi: Spi<'static, Blocking>) -> Self {
        Self { spi }
    }
}

impl ByteBus for OledBus {
    type Error = spi::Error;

    fn poll_ready(&mut self) -> bool {
        // The blocking driver waits on the transmit-empty flag internally
        // and its write only returns once the byte has shifted out, so the
        // register is always free here. The transport's poll budget
        // therefore cannot bound that internal wait; the timeout guarantee
        // is delegated to the driver, which the SPI master can honor because
        // it generates its own clock.
        true
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.blocking_write(&[byte])
    }
}

/// Capture counter over the monotonic system timer
///
/// The time driver ticks at 1 MHz (see Cargo.toml), which bounds the
/// period resolution at 1 µs.
pub struct UptimeCounter {
    started: Instant,
}

impl UptimeCounter {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl CaptureCounter for UptimeCounter {
    fn clock_hz(&self) -> u32 {
        TICK_HZ as u32
    }

    fn restart(&mut self) {
        self.started = Instant::now();
    }

    fn stop(&mut self) -> u32 {
        // Saturates rather than wraps if no second edge arrived for over an
        // hour; the conversion treats it as a very low frequency either way.
        u64::min(self.started.elapsed().as_ticks(), u32::MAX as u64) as u32
    }
}
