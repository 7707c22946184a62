//! Telemetry snapshot and display line formatting
//!
//! The capture and analog paths publish word-sized values; the display task
//! snapshots them and formats two fixed-width text lines. Formatting lives
//! here so it can be verified on the host.

use core::fmt::Write;

use heapless::String;

use crate::capture::Frequency;

/// Characters per display line (128 columns / 8-column glyphs)
pub const LINE_LEN: usize = 16;

/// Widest value the 5-character numeric field can hold
const FIELD_MAX: u32 = 99_999;

/// One text line, sized for the display
pub type Line = String<LINE_LEN>;

/// Snapshot of the latest measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    pub frequency: Frequency,
    pub resistance_ohms: u32,
}

impl Readings {
    /// The resistance line, e.g. `"Res:  2500 Ohms"`
    pub fn resistance_line(&self) -> Line {
        let mut line = Line::new();
        let ohms = self.resistance_ohms.min(FIELD_MAX);
        // Cannot overflow LINE_LEN once the value is clamped to 5 digits
        let _ = write!(line, "Res: {ohms:5} Ohms");
        line
    }

    /// The frequency line, e.g. `"Freq:   440 Hz"`
    ///
    /// `NoSignal` shows as 0; values wider than the field clamp to 99999.
    pub fn frequency_line(&self) -> Line {
        let mut line = Line::new();
        let hz = self.frequency.display_hz().min(FIELD_MAX);
        let _ = write!(line, "Freq: {hz:5} Hz");
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(frequency: Frequency, resistance_ohms: u32) -> Readings {
        Readings {
            frequency,
            resistance_ohms,
        }
    }

    #[test]
    fn resistance_field_is_right_aligned() {
        let r = readings(Frequency::NoSignal, 2_500);
        assert_eq!(r.resistance_line(), "Res:  2500 Ohms");
    }

    #[test]
    fn no_signal_frequency_formats_as_zero() {
        let r = readings(Frequency::NoSignal, 0);
        assert_eq!(r.frequency_line(), "Freq:     0 Hz");
    }

    #[test]
    fn measured_frequency() {
        let r = readings(Frequency::Hz(1_000), 0);
        assert_eq!(r.frequency_line(), "Freq:  1000 Hz");
    }

    #[test]
    fn wide_values_clamp_to_field() {
        let r = readings(Frequency::Hz(1_000_000), 1_000_000);
        assert_eq!(r.frequency_line(), "Freq: 99999 Hz");
        assert_eq!(r.resistance_line(), "Res: 99999 Ohms");
    }

    #[test]
    fn lines_fit_the_display() {
        let r = readings(Frequency::Hz(99_999), 99_999);
        assert!(r.resistance_line().len() <= LINE_LEN);
        assert!(r.frequency_line().len() <= LINE_LEN);
    }
}
