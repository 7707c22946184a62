//! Chip-select / data-command byte transport
//!
//! The display controller shares its serial bus pins with nothing else, but
//! still wants chip-select framing around every byte, and a data/command
//! line level that is valid before the clock starts. Transmission is
//! strictly blocking: the caller resumes once the byte has been shifted out.
//!
//! The ready-flag spin of the original hardware is bounded here. A bus that
//! never reports ready returns [`TransportError::Timeout`] instead of
//! wedging the firmware.

use metron_hal::{ByteBus, OutputPin};

/// Whether a byte is a controller command or display data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKind {
    /// Command byte (data/command line low)
    Command,
    /// Display memory byte (data/command line high)
    Data,
}

/// Transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<E> {
    /// Bus never reported ready within the poll budget
    Timeout,
    /// Underlying bus error
    Bus(E),
}

/// Ready-flag polls allowed per byte before giving up
///
/// Generous: a healthy bus is ready within a handful of polls even at the
/// slowest clock divider.
pub const DEFAULT_POLL_BUDGET: u32 = 100_000;

/// Byte transport over a synchronous bus with CS and D/C framing
pub struct Transport<B, CS, DC> {
    bus: B,
    cs: CS,
    dc: DC,
    poll_budget: u32,
}

impl<B, CS, DC> Transport<B, CS, DC>
where
    B: ByteBus,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Create a transport; leaves chip-select deasserted (high)
    pub fn new(bus: B, mut cs: CS, dc: DC) -> Self {
        cs.set_high();
        Self {
            bus,
            cs,
            dc,
            poll_budget: DEFAULT_POLL_BUDGET,
        }
    }

    /// Override the ready-poll budget (mainly for tests)
    pub fn with_poll_budget(mut self, budget: u32) -> Self {
        self.poll_budget = budget;
        self
    }

    /// Send one byte, framing it with CS and the D/C level
    pub fn send(&mut self, kind: ByteKind, byte: u8) -> Result<(), TransportError<B::Error>> {
        // D/C must be stable before CS falls
        self.cs.set_high();
        self.dc.set_state(kind == ByteKind::Data);
        self.cs.set_low();

        let result = self.transmit(byte);

        // Release the bus whether or not the byte went out
        self.cs.set_high();
        result
    }

    fn transmit(&mut self, byte: u8) -> Result<(), TransportError<B::Error>> {
        self.wait_ready()?;
        self.bus.write_byte(byte).map_err(TransportError::Bus)?;
        // Drain: do not release CS mid-shift
        self.wait_ready()
    }

    fn wait_ready(&mut self) -> Result<(), TransportError<B::Error>> {
        for _ in 0..self.poll_budget {
            if self.bus.poll_ready() {
                return Ok(());
            }
        }
        Err(TransportError::Timeout)
    }
}
