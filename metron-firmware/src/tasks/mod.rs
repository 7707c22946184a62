//! Firmware tasks
//!
//! One task per concern: edge capture, line-select button, analog
//! pot-to-DAC loop, and the display redraw loop. Measurements flow between
//! them through word-sized atomics; control flows through signals.

mod analog;
mod capture;
mod display;

pub use analog::analog_task;
pub use capture::{button_task, capture_task};
pub use display::display_task;
