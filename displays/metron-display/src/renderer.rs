//! Page/segment text renderer
//!
//! The controller addresses display memory as eight horizontal pages of 128
//! columns. Text is drawn by selecting a page and start column, then
//! streaming glyph columns; the controller auto-increments the column after
//! every data byte, so a burst of 8xN bytes lays down N characters.

use crate::font::{self, GLYPH_WIDTH};
use crate::transport::{ByteKind, Transport, TransportError};
use metron_hal::{ByteBus, OutputPin};

/// Horizontal 8-pixel-tall bands in display memory
pub const PAGES: u8 = 8;

/// Addressable columns per page
pub const COLUMNS: usize = 128;

/// First visible segment (the controller maps a 128-column panel into the
/// middle of a 132-column RAM)
const COLUMN_OFFSET: u8 = 2;

/// Controller command bytes
mod cmd {
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Vendor bring-up sequence, sent once after the reset pulse
///
/// Display off, horizontal addressing, start line, segment remap, multiplex
/// ratio, COM scan offset, display offset, COM pins, oscillator, precharge,
/// VCOM level, max contrast, resume-from-RAM, normal polarity, DC-DC and
/// charge pump, display on, scan/segment direction. Reproduced verbatim
/// from the panel vendor's reference bring-up.
const INIT_SEQUENCE: &[u8] = &[
    0xAE, // display off
    0x20, 0x00, // horizontal addressing mode
    0x40, // start line 0
    0xA1, // segment remap
    0xA8, 0x3F, // multiplex ratio: 64 lines
    0xC8, // COM scan direction
    0xD3, 0x00, // display offset 0
    0xDA, 0x32, // COM pins configuration
    0xD5, 0x80, // oscillator frequency
    0xD9, 0x22, // precharge period
    0xDB, 0x30, // VCOM deselect level
    0x81, 0xFF, // contrast: maximum
    0xA4, // resume to RAM content
    0xA6, // normal (non-inverted) polarity
    0xAD, 0x30, // DC-DC control
    0x8D, 0x10, // charge pump setting
    0xAF, // display on
    0xC0, 0xA0, // scan/segment direction
];

/// One byte down the wire to the display, command or data
///
/// [`Transport`] is the hardware implementation; tests substitute a
/// recording link.
pub trait DisplayLink {
    /// Error type for link operations
    type Error;

    /// Send a command byte
    fn command(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send a display memory byte
    fn data(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<B, CS, DC> DisplayLink for Transport<B, CS, DC>
where
    B: ByteBus,
    CS: OutputPin,
    DC: OutputPin,
{
    type Error = TransportError<B::Error>;

    fn command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send(ByteKind::Command, byte)
    }

    fn data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send(ByteKind::Data, byte)
    }
}

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// Requested page does not exist on this panel
    PageOutOfRange(u8),
    /// Link-level failure
    Link(E),
}

impl<E> From<E> for RenderError<E> {
    fn from(err: E) -> Self {
        RenderError::Link(err)
    }
}

/// Text renderer over a display link
pub struct Renderer<L> {
    link: L,
}

impl<L: DisplayLink> Renderer<L> {
    /// Wrap a link
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Send the vendor init sequence
    ///
    /// The caller is responsible for the reset pulse and its settle delays
    /// beforehand.
    pub fn init(&mut self) -> Result<(), RenderError<L::Error>> {
        for &byte in INIT_SEQUENCE {
            self.link.command(byte)?;
        }
        Ok(())
    }

    /// Blank the entire display memory
    ///
    /// Writes zeros across every page and column; idempotent.
    pub fn clear(&mut self) -> Result<(), RenderError<L::Error>> {
        for page in 0..PAGES {
            self.select(page)?;
            for _ in 0..COLUMNS {
                self.link.data(0x00)?;
            }
        }
        Ok(())
    }

    /// Draw `text` at the start of a page
    ///
    /// Emits one page select and one column select pair, then 8 data bytes
    /// per character. Characters without a glyph render blank. Text wider
    /// than the panel is truncated at the last whole glyph.
    pub fn write_line(&mut self, page: u8, text: &str) -> Result<(), RenderError<L::Error>> {
        if page >= PAGES {
            return Err(RenderError::PageOutOfRange(page));
        }
        self.select(page)?;

        for ch in text.chars().take(COLUMNS / GLYPH_WIDTH) {
            for &column in font::glyph(ch) {
                self.link.data(column)?;
            }
        }
        Ok(())
    }

    /// Position the cursor at the first segment of a page
    fn select(&mut self, page: u8) -> Result<(), RenderError<L::Error>> {
        self.link.command(cmd::SET_PAGE_ADDR | page)?;
        self.link.command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET)?;
        self.link.command(cmd::SET_HIGH_COLUMN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sent {
        Command(u8),
        Data(u8),
    }

    /// Link that records every byte
    #[derive(Default)]
    struct MockLink {
        sent: Vec<Sent>,
    }

    impl DisplayLink for MockLink {
        type Error = core::convert::Infallible;

        fn command(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.sent.push(Sent::Command(byte));
            Ok(())
        }

        fn data(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.sent.push(Sent::Data(byte));
            Ok(())
        }
    }

    fn data_bytes(sent: &[Sent]) -> Vec<u8> {
        sent.iter()
            .filter_map(|s| match s {
                Sent::Data(b) => Some(*b),
                Sent::Command(_) => None,
            })
            .collect()
    }

    #[test]
    fn write_line_emits_selects_then_glyph_columns() {
        let mut r = Renderer::new(MockLink::default());
        r.write_line(2, "Hi").unwrap();

        let sent = &r.link.sent;
        // One page select and one column select pair, nothing else
        assert_eq!(
            &sent[..3],
            &[
                Sent::Command(0xB2),
                Sent::Command(0x02),
                Sent::Command(0x10),
            ]
        );
        // 8 data bytes per character
        assert_eq!(data_bytes(sent).len(), 16);
        assert_eq!(sent.len(), 3 + 16);
    }

    #[test]
    fn write_line_rejects_bad_page() {
        let mut r = Renderer::new(MockLink::default());
        assert_eq!(r.write_line(8, "x"), Err(RenderError::PageOutOfRange(8)));
        assert!(r.link.sent.is_empty());
    }

    #[test]
    fn unknown_characters_render_blank() {
        let mut r = Renderer::new(MockLink::default());
        r.write_line(0, "\u{00e9}").unwrap();
        assert_eq!(data_bytes(&r.link.sent), std::vec![0u8; 8]);
    }

    #[test]
    fn long_text_truncates_to_panel_width() {
        let mut r = Renderer::new(MockLink::default());
        r.write_line(0, "abcdefghijklmnopqrstuvwxyz").unwrap();
        // 16 glyph cells of 8 columns fill the 128-column panel
        assert_eq!(data_bytes(&r.link.sent).len(), COLUMNS);
    }

    #[test]
    fn clear_writes_zeros_across_every_page() {
        let mut r = Renderer::new(MockLink::default());
        r.clear().unwrap();

        let data = data_bytes(&r.link.sent);
        assert_eq!(data.len(), PAGES as usize * COLUMNS);
        assert!(data.iter().all(|&b| b == 0));

        // Each page burst is preceded by its own select triplet
        let commands: Vec<_> = r
            .link
            .sent
            .iter()
            .filter(|s| matches!(s, Sent::Command(_)))
            .collect();
        assert_eq!(commands.len(), PAGES as usize * 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut r = Renderer::new(MockLink::default());
        r.clear().unwrap();
        let first = r.link.sent.clone();
        r.link.sent.clear();
        r.clear().unwrap();
        assert_eq!(r.link.sent, first);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct LinkDown;

    /// Link that faults on the first few bytes, then recovers
    struct FlakyLink {
        failures_left: u32,
        sent: Vec<Sent>,
    }

    impl FlakyLink {
        fn send(&mut self, entry: Sent) -> Result<(), LinkDown> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(LinkDown);
            }
            self.sent.push(entry);
            Ok(())
        }
    }

    impl DisplayLink for FlakyLink {
        type Error = LinkDown;

        fn command(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.send(Sent::Command(byte))
        }

        fn data(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.send(Sent::Data(byte))
        }
    }

    #[test]
    fn init_can_be_retried_after_a_link_fault() {
        let mut r = Renderer::new(FlakyLink {
            failures_left: 2,
            sent: Vec::new(),
        });

        // Each attempt dies on its first byte while the link is down
        assert_eq!(r.init(), Err(RenderError::Link(LinkDown)));
        assert_eq!(r.init(), Err(RenderError::Link(LinkDown)));
        assert!(r.link.sent.is_empty());

        // The same renderer completes the bring-up once the link recovers
        r.init().unwrap();
        assert_eq!(r.link.sent.len(), INIT_SEQUENCE.len());
        assert!(r.link.sent.iter().all(|s| matches!(s, Sent::Command(_))));
    }

    #[test]
    fn init_sends_the_full_sequence_as_commands() {
        let mut r = Renderer::new(MockLink::default());
        r.init().unwrap();

        assert_eq!(r.link.sent.len(), INIT_SEQUENCE.len());
        assert_eq!(r.link.sent.first(), Some(&Sent::Command(0xAE)));
        assert_eq!(r.link.sent.last(), Some(&Sent::Command(0xA0)));
        assert!(r
            .link
            .sent
            .iter()
            .all(|s| matches!(s, Sent::Command(_))));
    }
}
