//! Metron Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware contracts the core logic and
//! display stack consume. Chip-specific code (the firmware binary) implements
//! these traits over its peripheral drivers, which keeps everything above the
//! register layer host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (metron-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  metron-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ metron-core   │       │ metron-display│
//! │ (capture)     │       │ (transport)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip-select, data/command lines)
//! - [`counter::CaptureCounter`] - Free-running counter for edge timing
//! - [`bus::ByteBus`] - Synchronous single-byte bus with a ready flag

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod counter;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use bus::ByteBus;
pub use counter::CaptureCounter;
pub use gpio::OutputPin;
