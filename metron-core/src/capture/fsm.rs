//! Edge-capture state machine
//!
//! Two rising edges bound one period measurement: the first edge arms the
//! counter, the second completes the measurement. The machine is driven by
//! abstract edge events so it can be tested without an interrupt controller.

/// Capture machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureState {
    /// No measurement in flight
    Idle,
    /// First edge seen, counter running
    Armed,
}

/// What the caller must do in response to an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeAction {
    /// First edge: zero and start the counter
    Arm,
    /// Second edge: stop the counter and read the tick count
    Measure,
}

/// Two-state edge capture machine
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureFsm {
    armed: bool,
}

impl CaptureFsm {
    /// Create a new machine in the idle state
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Process one qualifying rising edge
    pub fn on_edge(&mut self) -> EdgeAction {
        if self.armed {
            self.armed = false;
            EdgeAction::Measure
        } else {
            self.armed = true;
            EdgeAction::Arm
        }
    }

    /// Discard any in-flight measurement
    ///
    /// Idempotent. Called when the active input line changes so a stale
    /// half-measurement is never attributed to the new line.
    pub fn reset(&mut self) {
        self.armed = false;
    }

    /// Current state
    pub fn state(&self) -> CaptureState {
        if self.armed {
            CaptureState::Armed
        } else {
            CaptureState::Idle
        }
    }
}
