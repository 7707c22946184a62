//! Display stack for the Metron instrument
//!
//! This crate provides:
//! - `font`: column-bitmap glyphs for printable ASCII
//! - `transport`: chip-select / data-command byte framing over a synchronous
//!   serial bus, with a bounded ready-poll
//! - `renderer`: page/segment text rendering and full-screen clear for
//!   SH1106-class monochrome OLED controllers
//!
//! Everything here is hardware-agnostic and runs under test on the host;
//! the firmware supplies the bus and pin implementations.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod renderer;
pub mod transport;

// Re-export key types
pub use renderer::{DisplayLink, RenderError, Renderer, COLUMNS, PAGES};
pub use transport::{ByteKind, Transport, TransportError};
