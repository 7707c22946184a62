//! Period-to-frequency conversion
//!
//! A measurement is a tick count between two rising edges on a counter with
//! a known clock rate. Zero ticks (counter overflow, glitch, or a degenerate
//! signal) would divide by zero; that case is reported as [`Frequency::NoSignal`]
//! instead.

/// A frequency reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frequency {
    /// No valid measurement (zero elapsed ticks or unknown clock)
    NoSignal,
    /// Measured frequency in Hz, truncated to an integer
    Hz(u32),
}

/// Raw encoding of `NoSignal` for word-sized atomic publication
///
/// `Hz(0)` is a legitimate reading for sub-1 Hz signals, so the sentinel
/// uses the other end of the range.
pub const NO_SIGNAL_RAW: u32 = u32::MAX;

impl Frequency {
    /// Convert an elapsed tick count into a frequency
    ///
    /// `frequency = clock_hz / ticks`, truncating. Returns `NoSignal` when
    /// either value is zero.
    pub fn from_ticks(ticks: u32, clock_hz: u32) -> Self {
        if ticks == 0 || clock_hz == 0 {
            Frequency::NoSignal
        } else {
            Frequency::Hz(clock_hz / ticks)
        }
    }

    /// Value to show on the display; `NoSignal` renders as 0
    pub fn display_hz(self) -> u32 {
        match self {
            Frequency::NoSignal => 0,
            Frequency::Hz(hz) => hz,
        }
    }

    /// Word-sized encoding for atomic publication
    pub fn to_raw(self) -> u32 {
        match self {
            Frequency::NoSignal => NO_SIGNAL_RAW,
            // A reading at the sentinel value is indistinguishable from no
            // signal; saturate one below.
            Frequency::Hz(hz) => hz.min(NO_SIGNAL_RAW - 1),
        }
    }

    /// Decode [`to_raw`](Self::to_raw)
    pub fn from_raw(raw: u32) -> Self {
        if raw == NO_SIGNAL_RAW {
            Frequency::NoSignal
        } else {
            Frequency::Hz(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_khz_from_one_mhz_clock() {
        assert_eq!(Frequency::from_ticks(1_000, 1_000_000), Frequency::Hz(1_000));
    }

    #[test]
    fn zero_ticks_is_no_signal() {
        assert_eq!(Frequency::from_ticks(0, 1_000_000), Frequency::NoSignal);
        assert_eq!(Frequency::from_ticks(1_000, 0), Frequency::NoSignal);
    }

    #[test]
    fn slow_signal_truncates_to_zero_hz() {
        // Period longer than one second reads as 0 Hz, which is distinct
        // from NoSignal
        let f = Frequency::from_ticks(2_000_000, 1_000_000);
        assert_eq!(f, Frequency::Hz(0));
        assert_ne!(f, Frequency::NoSignal);
    }

    #[test]
    fn no_signal_displays_as_zero() {
        assert_eq!(Frequency::NoSignal.display_hz(), 0);
        assert_eq!(Frequency::Hz(440).display_hz(), 440);
    }

    #[test]
    fn raw_round_trip() {
        for f in [Frequency::NoSignal, Frequency::Hz(0), Frequency::Hz(48_000_000)] {
            assert_eq!(Frequency::from_raw(f.to_raw()), f);
        }
    }

    proptest! {
        /// frequency x period ~= 1: the truncated integer frequency f
        /// satisfies f * ticks <= clock < (f + 1) * ticks
        #[test]
        fn frequency_times_period_is_one(
            ticks in 1u32..,
            clock in 1u32..=48_000_000,
        ) {
            let f = match Frequency::from_ticks(ticks, clock) {
                Frequency::Hz(f) => f as u64,
                Frequency::NoSignal => unreachable!(),
            };
            let ticks = ticks as u64;
            let clock = clock as u64;
            prop_assert!(f * ticks <= clock);
            prop_assert!(clock < (f + 1) * ticks);
        }
    }
}
