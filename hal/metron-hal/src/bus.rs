//! Synchronous byte bus abstraction
//!
//! Models the display's serial link: a transmit register with a ready flag
//! and a single-byte blocking write. The transport layer polls the ready
//! flag with a bounded budget so a stalled bus surfaces as a fault instead
//! of a silent hang.

/// Synchronous single-byte bus master
pub trait ByteBus {
    /// Error type for bus operations
    type Error;

    /// Check whether the transmit register can accept a byte
    ///
    /// Equivalent to the TXE-style status flag on a synchronous serial
    /// peripheral. May be called repeatedly while waiting.
    fn poll_ready(&mut self) -> bool;

    /// Shift one byte out
    ///
    /// Callers are expected to have observed [`poll_ready`](Self::poll_ready)
    /// returning `true` first.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}
