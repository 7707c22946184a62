//! Free-running counter abstraction
//!
//! The edge-timing capture arms a hardware counter on the first qualifying
//! edge and reads it back on the second. The counter itself is chip-specific;
//! this trait is the whole contract the capture logic needs.

/// Free-running counter armed and read across two edges
pub trait CaptureCounter {
    /// Counting clock rate in Hz
    fn clock_hz(&self) -> u32;

    /// Zero the count and start counting
    fn restart(&mut self);

    /// Stop counting and return the accumulated tick count
    fn stop(&mut self) -> u32;
}
