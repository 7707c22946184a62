//! 8x8 column-bitmap font
//!
//! One glyph per printable ASCII character (32..=127), eight bytes per
//! glyph, one byte per display column with the least significant bit at the
//! top. Only the first five columns carry pixels; the rest pad the cell so
//! the controller's auto-increment lands on the next character.

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = 96;

/// Columns per glyph cell
pub const GLYPH_WIDTH: usize = 8;

/// First character code in the table
pub const FIRST_CHAR: u8 = b' ';

/// Blank cell used for characters outside the table
pub const BLANK: [u8; GLYPH_WIDTH] = [0; GLYPH_WIDTH];

/// Look up the glyph for a character
///
/// Characters outside the printable ASCII range map to [`BLANK`] rather
/// than indexing past the table.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_WIDTH] {
    match (ch as u32).checked_sub(FIRST_CHAR as u32) {
        Some(idx) if (idx as usize) < GLYPH_COUNT => &GLYPHS[idx as usize],
        _ => &BLANK,
    }
}

/// Glyph patterns, indexed by `code - FIRST_CHAR`
#[rustfmt::skip]
pub static GLYPHS: [[u8; GLYPH_WIDTH]; GLYPH_COUNT] = [
    [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ' '
    [0b00000000, 0b00000000, 0b01011111, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '!'
    [0b00000000, 0b00000111, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '"'
    [0b00010100, 0b01111111, 0b00010100, 0b01111111, 0b00010100, 0b00000000, 0b00000000, 0b00000000], // '#'
    [0b00100100, 0b00101010, 0b01111111, 0b00101010, 0b00010010, 0b00000000, 0b00000000, 0b00000000], // '$'
    [0b00100011, 0b00010011, 0b00001000, 0b01100100, 0b01100010, 0b00000000, 0b00000000, 0b00000000], // '%'
    [0b00110110, 0b01001001, 0b01010101, 0b00100010, 0b01010000, 0b00000000, 0b00000000, 0b00000000], // '&'
    [0b00000000, 0b00000101, 0b00000011, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // apostrophe
    [0b00000000, 0b00011100, 0b00100010, 0b01000001, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '('
    [0b00000000, 0b01000001, 0b00100010, 0b00011100, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ')'
    [0b00010100, 0b00001000, 0b00111110, 0b00001000, 0b00010100, 0b00000000, 0b00000000, 0b00000000], // '*'
    [0b00001000, 0b00001000, 0b00111110, 0b00001000, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // '+'
    [0b00000000, 0b01010000, 0b00110000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ','
    [0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // '-'
    [0b00000000, 0b01100000, 0b01100000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '.'
    [0b00100000, 0b00010000, 0b00001000, 0b00000100, 0b00000010, 0b00000000, 0b00000000, 0b00000000], // '/'
    [0b00111110, 0b01010001, 0b01001001, 0b01000101, 0b00111110, 0b00000000, 0b00000000, 0b00000000], // '0'
    [0b00000000, 0b01000010, 0b01111111, 0b01000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '1'
    [0b01000010, 0b01100001, 0b01010001, 0b01001001, 0b01000110, 0b00000000, 0b00000000, 0b00000000], // '2'
    [0b00100001, 0b01000001, 0b01000101, 0b01001011, 0b00110001, 0b00000000, 0b00000000, 0b00000000], // '3'
    [0b00011000, 0b00010100, 0b00010010, 0b01111111, 0b00010000, 0b00000000, 0b00000000, 0b00000000], // '4'
    [0b00100111, 0b01000101, 0b01000101, 0b01000101, 0b00111001, 0b00000000, 0b00000000, 0b00000000], // '5'
    [0b00111100, 0b01001010, 0b01001001, 0b01001001, 0b00110000, 0b00000000, 0b00000000, 0b00000000], // '6'
    [0b00000011, 0b00000001, 0b01110001, 0b00001001, 0b00000111, 0b00000000, 0b00000000, 0b00000000], // '7'
    [0b00110110, 0b01001001, 0b01001001, 0b01001001, 0b00110110, 0b00000000, 0b00000000, 0b00000000], // '8'
    [0b00000110, 0b01001001, 0b01001001, 0b00101001, 0b00011110, 0b00000000, 0b00000000, 0b00000000], // '9'
    [0b00000000, 0b00110110, 0b00110110, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ':'
    [0b00000000, 0b01010110, 0b00110110, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ';'
    [0b00001000, 0b00010100, 0b00100010, 0b01000001, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '<'
    [0b00010100, 0b00010100, 0b00010100, 0b00010100, 0b00010100, 0b00000000, 0b00000000, 0b00000000], // '='
    [0b00000000, 0b01000001, 0b00100010, 0b00010100, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // '>'
    [0b00000010, 0b00000001, 0b01010001, 0b00001001, 0b00000110, 0b00000000, 0b00000000, 0b00000000], // '?'
    [0b00110010, 0b01001001, 0b01111001, 0b01000001, 0b00111110, 0b00000000, 0b00000000, 0b00000000], // '@'
    [0b01111110, 0b00010001, 0b00010001, 0b00010001, 0b01111110, 0b00000000, 0b00000000, 0b00000000], // 'A'
    [0b01111111, 0b01001001, 0b01001001, 0b01001001, 0b00110110, 0b00000000, 0b00000000, 0b00000000], // 'B'
    [0b00111110, 0b01000001, 0b01000001, 0b01000001, 0b00100010, 0b00000000, 0b00000000, 0b00000000], // 'C'
    [0b01111111, 0b01000001, 0b01000001, 0b00100010, 0b00011100, 0b00000000, 0b00000000, 0b00000000], // 'D'
    [0b01111111, 0b01001001, 0b01001001, 0b01001001, 0b01000001, 0b00000000, 0b00000000, 0b00000000], // 'E'
    [0b01111111, 0b00001001, 0b00001001, 0b00001001, 0b00000001, 0b00000000, 0b00000000, 0b00000000], // 'F'
    [0b00111110, 0b01000001, 0b01001001, 0b01001001, 0b01111010, 0b00000000, 0b00000000, 0b00000000], // 'G'
    [0b01111111, 0b00001000, 0b00001000, 0b00001000, 0b01111111, 0b00000000, 0b00000000, 0b00000000], // 'H'
    [0b01000000, 0b01000001, 0b01111111, 0b01000001, 0b01000000, 0b00000000, 0b00000000, 0b00000000], // 'I'
    [0b00100000, 0b01000000, 0b01000001, 0b00111111, 0b00000001, 0b00000000, 0b00000000, 0b00000000], // 'J'
    [0b01111111, 0b00001000, 0b00010100, 0b00100010, 0b01000001, 0b00000000, 0b00000000, 0b00000000], // 'K'
    [0b01111111, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b00000000, 0b00000000, 0b00000000], // 'L'
    [0b01111111, 0b00000010, 0b00001100, 0b00000010, 0b01111111, 0b00000000, 0b00000000, 0b00000000], // 'M'
    [0b01111111, 0b00000100, 0b00001000, 0b00010000, 0b01111111, 0b00000000, 0b00000000, 0b00000000], // 'N'
    [0b00111110, 0b01000001, 0b01000001, 0b01000001, 0b00111110, 0b00000000, 0b00000000, 0b00000000], // 'O'
    [0b01111111, 0b00001001, 0b00001001, 0b00001001, 0b00000110, 0b00000000, 0b00000000, 0b00000000], // 'P'
    [0b00111110, 0b01000001, 0b01010001, 0b00100001, 0b01011110, 0b00000000, 0b00000000, 0b00000000], // 'Q'
    [0b01111111, 0b00001001, 0b00011001, 0b00101001, 0b01000110, 0b00000000, 0b00000000, 0b00000000], // 'R'
    [0b01000110, 0b01001001, 0b01001001, 0b01001001, 0b00110001, 0b00000000, 0b00000000, 0b00000000], // 'S'
    [0b00000001, 0b00000001, 0b01111111, 0b00000001, 0b00000001, 0b00000000, 0b00000000, 0b00000000], // 'T'
    [0b00111111, 0b01000000, 0b01000000, 0b01000000, 0b00111111, 0b00000000, 0b00000000, 0b00000000], // 'U'
    [0b00011111, 0b00100000, 0b01000000, 0b00100000, 0b00011111, 0b00000000, 0b00000000, 0b00000000], // 'V'
    [0b00111111, 0b01000000, 0b00111000, 0b01000000, 0b00111111, 0b00000000, 0b00000000, 0b00000000], // 'W'
    [0b01100011, 0b00010100, 0b00001000, 0b00010100, 0b01100011, 0b00000000, 0b00000000, 0b00000000], // 'X'
    [0b00000111, 0b00001000, 0b01110000, 0b00001000, 0b00000111, 0b00000000, 0b00000000, 0b00000000], // 'Y'
    [0b01100001, 0b01010001, 0b01001001, 0b01000101, 0b01000011, 0b00000000, 0b00000000, 0b00000000], // 'Z'
    [0b01111111, 0b01000001, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '['
    [0b00010101, 0b00010110, 0b01111100, 0b00010110, 0b00010101, 0b00000000, 0b00000000, 0b00000000], // backslash
    [0b00000000, 0b00000000, 0b00000000, 0b01000001, 0b01111111, 0b00000000, 0b00000000, 0b00000000], // ']'
    [0b00000100, 0b00000010, 0b00000001, 0b00000010, 0b00000100, 0b00000000, 0b00000000, 0b00000000], // '^'
    [0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b00000000, 0b00000000, 0b00000000], // '_'
    [0b00000000, 0b00000001, 0b00000010, 0b00000100, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '`'
    [0b00100000, 0b01010100, 0b01010100, 0b01010100, 0b01111000, 0b00000000, 0b00000000, 0b00000000], // 'a'
    [0b01111111, 0b01001000, 0b01000100, 0b01000100, 0b00111000, 0b00000000, 0b00000000, 0b00000000], // 'b'
    [0b00111000, 0b01000100, 0b01000100, 0b01000100, 0b00100000, 0b00000000, 0b00000000, 0b00000000], // 'c'
    [0b00111000, 0b01000100, 0b01000100, 0b01001000, 0b01111111, 0b00000000, 0b00000000, 0b00000000], // 'd'
    [0b00111000, 0b01010100, 0b01010100, 0b01010100, 0b00011000, 0b00000000, 0b00000000, 0b00000000], // 'e'
    [0b00001000, 0b01111110, 0b00001001, 0b00000001, 0b00000010, 0b00000000, 0b00000000, 0b00000000], // 'f'
    [0b00001100, 0b01010010, 0b01010010, 0b01010010, 0b00111110, 0b00000000, 0b00000000, 0b00000000], // 'g'
    [0b01111111, 0b00001000, 0b00000100, 0b00000100, 0b01111000, 0b00000000, 0b00000000, 0b00000000], // 'h'
    [0b00000000, 0b01000100, 0b01111101, 0b01000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // 'i'
    [0b00100000, 0b01000000, 0b01000100, 0b00111101, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // 'j'
    [0b01111111, 0b00010000, 0b00101000, 0b01000100, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // 'k'
    [0b00000000, 0b01000001, 0b01111111, 0b01000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // 'l'
    [0b01111100, 0b00000100, 0b00011000, 0b00000100, 0b01111000, 0b00000000, 0b00000000, 0b00000000], // 'm'
    [0b01111100, 0b00001000, 0b00000100, 0b00000100, 0b01111000, 0b00000000, 0b00000000, 0b00000000], // 'n'
    [0b00111000, 0b01000100, 0b01000100, 0b01000100, 0b00111000, 0b00000000, 0b00000000, 0b00000000], // 'o'
    [0b01111100, 0b00010100, 0b00010100, 0b00010100, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // 'p'
    [0b00001000, 0b00010100, 0b00010100, 0b00011000, 0b01111100, 0b00000000, 0b00000000, 0b00000000], // 'q'
    [0b01111100, 0b00001000, 0b00000100, 0b00000100, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // 'r'
    [0b01001000, 0b01010100, 0b01010100, 0b01010100, 0b00100000, 0b00000000, 0b00000000, 0b00000000], // 's'
    [0b00000100, 0b00111111, 0b01000100, 0b01000000, 0b00100000, 0b00000000, 0b00000000, 0b00000000], // 't'
    [0b00111100, 0b01000000, 0b01000000, 0b00100000, 0b01111100, 0b00000000, 0b00000000, 0b00000000], // 'u'
    [0b00011100, 0b00100000, 0b01000000, 0b00100000, 0b00011100, 0b00000000, 0b00000000, 0b00000000], // 'v'
    [0b00111100, 0b01000000, 0b00111000, 0b01000000, 0b00111100, 0b00000000, 0b00000000, 0b00000000], // 'w'
    [0b01000100, 0b00101000, 0b00010000, 0b00101000, 0b01000100, 0b00000000, 0b00000000, 0b00000000], // 'x'
    [0b00001100, 0b01010000, 0b01010000, 0b01010000, 0b00111100, 0b00000000, 0b00000000, 0b00000000], // 'y'
    [0b01000100, 0b01100100, 0b01010100, 0b01001100, 0b01000100, 0b00000000, 0b00000000, 0b00000000], // 'z'
    [0b00000000, 0b00001000, 0b00110110, 0b01000001, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '{'
    [0b00000000, 0b00000000, 0b01111111, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '|'
    [0b00000000, 0b01000001, 0b00110110, 0b00001000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '}'
    [0b00001000, 0b00001000, 0b00101010, 0b00011100, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // '~'
    [0b00001000, 0b00011100, 0b00101010, 0b00001000, 0b00001000, 0b00000000, 0b00000000, 0b00000000], // DEL (arrow placeholder)
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_distinct() {
        assert_ne!(glyph('0'), glyph('1'));
        assert_ne!(glyph('4'), glyph('5'));
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph(' '), &BLANK);
    }

    #[test]
    fn out_of_range_maps_to_blank() {
        assert_eq!(glyph('\u{00e9}'), &BLANK);
        assert_eq!(glyph('\n'), &BLANK);
        assert_eq!(glyph('\u{1F600}'), &BLANK);
    }

    #[test]
    fn table_covers_del() {
        // Last entry is the 0x7F placeholder arrow, not blank
        assert_ne!(glyph('\u{7f}'), &BLANK);
    }
}
