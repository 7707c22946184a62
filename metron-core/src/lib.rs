//! Board-agnostic core logic for the Metron measurement instrument
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Edge-timing capture state machine and period-to-frequency conversion
//! - Input line selection (pulse source vs. function generator)
//! - Potentiometer raw-sample-to-resistance scaling
//! - Telemetry snapshot types and display line formatting

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod capture;
pub mod telemetry;
