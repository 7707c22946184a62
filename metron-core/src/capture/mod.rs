//! Edge-timing frequency capture
//!
//! Converts pairs of rising edges on the active input line into frequency
//! readings. The state machine, line selection, and tick conversion are all
//! independent of the interrupt delivery mechanism; the firmware feeds edges
//! in from EXTI events and supplies a counter implementation.

mod fsm;
mod frequency;
mod selector;

pub use fsm::{CaptureFsm, CaptureState, EdgeAction};
pub use frequency::{Frequency, NO_SIGNAL_RAW};
pub use selector::{ChannelSelector, InputLine};

use metron_hal::CaptureCounter;

/// Frequency capture over a hardware counter
///
/// Composes the edge state machine with line selection and a counter.
/// Invariant: switching the active line always discards an in-flight
/// measurement, so at most one line is ever armed.
pub struct FrequencyCapture<C> {
    selector: ChannelSelector,
    fsm: CaptureFsm,
    counter: C,
}

impl<C: CaptureCounter> FrequencyCapture<C> {
    /// Create a capture unit listening on `initial` first
    pub fn new(initial: InputLine, counter: C) -> Self {
        Self {
            selector: ChannelSelector::new(initial),
            fsm: CaptureFsm::new(),
            counter,
        }
    }

    /// Line whose edges currently drive the capture
    pub fn active_line(&self) -> InputLine {
        self.selector.active()
    }

    /// Whether a first edge has armed the counter
    pub fn is_armed(&self) -> bool {
        self.fsm.state() == CaptureState::Armed
    }

    /// Process a rising edge on the active line
    ///
    /// Returns a completed reading on every second edge, `None` on arming
    /// edges.
    pub fn on_edge(&mut self) -> Option<Frequency> {
        match self.fsm.on_edge() {
            EdgeAction::Arm => {
                self.counter.restart();
                None
            }
            EdgeAction::Measure => {
                let ticks = self.counter.stop();
                Some(Frequency::from_ticks(ticks, self.counter.clock_hz()))
            }
        }
    }

    /// Switch to the other input line
    ///
    /// Clears any armed state so a half-measurement from the old line is
    /// never completed by an edge on the new one. Returns the new line.
    pub fn switch_line(&mut self) -> InputLine {
        self.fsm.reset();
        self.selector.toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter fake with a manually advanced tick count
    struct FakeCounter {
        clock_hz: u32,
        ticks: u32,
        running: bool,
    }

    impl FakeCounter {
        fn new(clock_hz: u32) -> Self {
            Self {
                clock_hz,
                ticks: 0,
                running: false,
            }
        }

        fn advance(&mut self, ticks: u32) {
            if self.running {
                self.ticks += ticks;
            }
        }
    }

    impl CaptureCounter for FakeCounter {
        fn clock_hz(&self) -> u32 {
            self.clock_hz
        }

        fn restart(&mut self) {
            self.ticks = 0;
            self.running = true;
        }

        fn stop(&mut self) -> u32 {
            self.running = false;
            self.ticks
        }
    }

    #[test]
    fn two_edges_one_ms_apart_read_1khz() {
        let mut cap = FrequencyCapture::new(InputLine::Pulse, FakeCounter::new(1_000_000));

        assert_eq!(cap.on_edge(), None);
        assert!(cap.is_armed());
        cap.counter.advance(1_000); // 1 ms at 1 MHz
        assert_eq!(cap.on_edge(), Some(Frequency::Hz(1_000)));
        assert!(!cap.is_armed());
    }

    #[test]
    fn back_to_back_measurements() {
        let mut cap = FrequencyCapture::new(InputLine::Pulse, FakeCounter::new(1_000_000));

        cap.on_edge();
        cap.counter.advance(2_000);
        assert_eq!(cap.on_edge(), Some(Frequency::Hz(500)));

        cap.on_edge();
        cap.counter.advance(100);
        assert_eq!(cap.on_edge(), Some(Frequency::Hz(10_000)));
    }

    #[test]
    fn switching_lines_discards_armed_measurement() {
        let mut cap = FrequencyCapture::new(InputLine::Pulse, FakeCounter::new(1_000_000));

        cap.on_edge(); // arm on Pulse
        cap.counter.advance(5_000);
        assert_eq!(cap.switch_line(), InputLine::FunctionGen);
        assert!(!cap.is_armed());

        // First edge on the new line arms again instead of completing the
        // stale measurement
        assert_eq!(cap.on_edge(), None);
        cap.counter.advance(1_000);
        assert_eq!(cap.on_edge(), Some(Frequency::Hz(1_000)));
    }

    #[test]
    fn zero_elapsed_reports_no_signal() {
        let mut cap = FrequencyCapture::new(InputLine::Pulse, FakeCounter::new(1_000_000));
        cap.on_edge();
        // No time passes between edges
        assert_eq!(cap.on_edge(), Some(Frequency::NoSignal));
    }
}
