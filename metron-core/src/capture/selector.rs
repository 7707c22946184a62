//! Input line selection
//!
//! The instrument measures one of two physical signal sources at a time.
//! A dedicated button toggles between them.

/// Selectable frequency input lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// On-board 555-style pulse source
    Pulse,
    /// External function generator input
    FunctionGen,
}

impl InputLine {
    /// The opposite line
    pub fn other(self) -> Self {
        match self {
            InputLine::Pulse => InputLine::FunctionGen,
            InputLine::FunctionGen => InputLine::Pulse,
        }
    }
}

/// Tracks which input line feeds the capture machine
#[derive(Debug, Clone, Copy)]
pub struct ChannelSelector {
    active: InputLine,
}

impl ChannelSelector {
    /// Create a selector with the given initial line
    pub const fn new(initial: InputLine) -> Self {
        Self { active: initial }
    }

    /// Currently active line
    pub fn active(&self) -> InputLine {
        self.active
    }

    /// Flip to the other line and return it
    pub fn toggle(&mut self) -> InputLine {
        self.active = self.active.other();
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_lines() {
        let mut sel = ChannelSelector::new(InputLine::Pulse);
        assert_eq!(sel.toggle(), InputLine::FunctionGen);
        assert_eq!(sel.toggle(), InputLine::Pulse);
        assert_eq!(sel.active(), InputLine::Pulse);
    }

    #[test]
    fn other_is_involutive() {
        assert_eq!(InputLine::Pulse.other().other(), InputLine::Pulse);
    }
}
