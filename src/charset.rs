//! Character to glyph code translation
//!
//! The HD44780 character generator ROM (code A00, the one fitted to most 1602
//! modules) places printable ASCII at its ASCII code, with two exceptions:
//! `0x5C` shows a yen sign and `0x7E`/`0x7F` show right and left arrows.
//! Backslash and tilde therefore have no glyph and are not mapped.
//!
//! ## Example
//!
//! ```
//! use lcd1602::charset::{glyph_code, glyphs};
//!
//! assert_eq!(glyph_code('A'), Some(0x41));
//! assert_eq!(glyph_code('→'), Some(0x7E));
//! assert_eq!(glyph_code('\\'), None);
//!
//! let mut codes = glyphs("Hi!");
//! assert_eq!(codes.next(), Some(Ok(0x48)));
//! assert_eq!(codes.next(), Some(Ok(0x69)));
//! assert_eq!(codes.next(), Some(Ok(0x21)));
//! assert_eq!(codes.next(), None);
//! ```

use core::str::Chars;

/// Glyph code of the yen sign
pub const YEN: u8 = 0x5C;
/// Glyph code of the right arrow
pub const ARROW_RIGHT: u8 = 0x7E;
/// Glyph code of the left arrow
pub const ARROW_LEFT: u8 = 0x7F;
/// Glyph code of the blank cell
pub const SPACE: u8 = 0x20;

/// Every character that has a glyph code, in code order
pub static SUPPORTED: &[char] = &[
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', //
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', //
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', //
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '¥', ']', '^', '_', //
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', //
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '→', '←',
];

/// Look up the glyph code for a character
///
/// Returns `None` for characters the character generator cannot show.
pub const fn glyph_code(c: char) -> Option<u8> {
    match c {
        '\\' | '~' => None,
        ' '..='}' => Some(c as u8),
        '¥' => Some(YEN),
        '→' => Some(ARROW_RIGHT),
        '←' => Some(ARROW_LEFT),
        _ => None,
    }
}

/// Lazily translate a string into glyph codes
///
/// Each item is either the glyph code or the character index and character
/// that has no code. Nothing is buffered; the input is walked once.
pub fn glyphs(text: &str) -> Glyphs<'_> {
    Glyphs {
        chars: text.chars(),
        index: 0,
    }
}

/// Iterator returned by [`glyphs`]
#[derive(Clone, Debug)]
pub struct Glyphs<'a> {
    chars: Chars<'a>,
    index: usize,
}

impl Iterator for Glyphs<'_> {
    type Item = Result<u8, (usize, char)>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let index = self.index;
        self.index += 1;
        Some(glyph_code(c).ok_or((index, c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl core::iter::FusedIterator for Glyphs<'_> {}
