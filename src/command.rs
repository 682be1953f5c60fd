//! HD44780 instruction definitions
//!
//! This module defines the instruction words understood by the HD44780
//! character LCD controller. Instructions are written over the 8-bit parallel
//! bus with RS low; glyph codes are written with RS high.
//!
//! ## Instruction Families
//!
//! Most instructions are a family base bit OR-combined with option bits from
//! the same family:
//!
//! | Family          | Base   | Options                                   |
//! |-----------------|--------|-------------------------------------------|
//! | Entry mode      | `0x04` | increment `0x02`, display shift `0x01`    |
//! | Display control | `0x08` | display `0x04`, cursor `0x02`, blink `0x01` |
//! | Cursor shift    | `0x10` | display `0x08`, right `0x04`              |
//! | Function set    | `0x20` | 8-bit `0x10`, two lines `0x08`, 5x11 `0x04` |
//! | Set DDRAM addr  | `0x80` | 7-bit address                             |
//!
//! ## Example
//!
//! ```
//! use lcd1602::command;
//!
//! let function = command::FUNCTION_SET | command::EIGHT_BIT_BUS | command::TWO_LINES;
//! assert_eq!(function, 0x38);
//!
//! let display = command::DISPLAY_CONTROL | command::DISPLAY_ON | command::CURSOR_ON;
//! assert_eq!(display, 0x0E);
//!
//! // Second row, fourth column
//! assert_eq!(command::ddram_address(1, 3), 0xC3);
//! ```

// Standalone instructions

/// Clear display instruction (0x01)
///
/// Fills DDRAM with spaces and returns the cursor to address 0.
/// Also resets the entry mode to increment.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home instruction (0x02)
///
/// Returns the cursor to address 0 and undoes any display shift.
/// DDRAM contents are left unchanged.
pub const RETURN_HOME: u8 = 0x02;

// Entry mode family

/// Entry mode set base (0x04)
///
/// Controls what happens after each glyph write.
pub const ENTRY_MODE: u8 = 0x04;

/// Entry mode: cursor moves right after each write (0x02)
pub const ENTRY_INCREMENT: u8 = 0x02;

/// Entry mode: cursor moves left after each write (0x00)
pub const ENTRY_DECREMENT: u8 = 0x00;

/// Entry mode: shift the whole display instead of the cursor (0x01)
pub const ENTRY_DISPLAY_SHIFT: u8 = 0x01;

// Display control family

/// Display on/off control base (0x08)
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Display control: display on (0x04)
///
/// With this bit clear the panel is blanked but DDRAM is retained.
pub const DISPLAY_ON: u8 = 0x04;

/// Display control: underline cursor on (0x02)
pub const CURSOR_ON: u8 = 0x02;

/// Display control: blinking block cursor on (0x01)
pub const BLINK_ON: u8 = 0x01;

// Cursor / display shift family

/// Cursor or display shift base (0x10)
pub const CURSOR_SHIFT: u8 = 0x10;

/// Shift target: whole display instead of cursor only (0x08)
pub const SHIFT_DISPLAY: u8 = 0x08;

/// Shift direction: right (0x04)
pub const SHIFT_RIGHT: u8 = 0x04;

/// Move the cursor one cell left (0x10)
pub const CURSOR_LEFT: u8 = CURSOR_SHIFT;

/// Move the cursor one cell right (0x14)
pub const CURSOR_RIGHT: u8 = CURSOR_SHIFT | SHIFT_RIGHT;

/// Shift the whole display one cell left (0x18)
pub const DISPLAY_LEFT: u8 = CURSOR_SHIFT | SHIFT_DISPLAY;

/// Shift the whole display one cell right (0x1C)
pub const DISPLAY_RIGHT: u8 = CURSOR_SHIFT | SHIFT_DISPLAY | SHIFT_RIGHT;

// Function set family

/// Function set base (0x20)
///
/// Function set must be issued before any other instruction after power-on.
pub const FUNCTION_SET: u8 = 0x20;

/// Function set: 8-bit data bus (0x10)
pub const EIGHT_BIT_BUS: u8 = 0x10;

/// Function set: 4-bit data bus (0x00)
///
/// Listed for completeness; this driver only drives the 8-bit bus.
pub const FOUR_BIT_BUS: u8 = 0x00;

/// Function set: two display lines (0x08)
pub const TWO_LINES: u8 = 0x08;

/// Function set: one display line (0x00)
pub const ONE_LINE: u8 = 0x00;

/// Function set: 5x11 dot font (0x04)
///
/// Only available in one-line mode.
pub const FONT_5X11: u8 = 0x04;

/// Function set: 5x8 dot font (0x00)
pub const FONT_5X8: u8 = 0x00;

// DDRAM addressing

/// Set DDRAM address base (0x80)
///
/// The low 7 bits carry the target address.
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// Mask of the address bits in [`SET_DDRAM_ADDRESS`]
pub const DDRAM_ADDRESS_MASK: u8 = 0x7F;

/// DDRAM address of the first cell of the second row
pub const ROW_STRIDE: u8 = 0x40;

/// Build the set-DDRAM-address instruction for a row and column
///
/// Computes `0x80 | (row * 0x40 + col)`. Nothing is bounds checked: out of
/// range values wrap into the 7-bit address space, which lands the cursor on
/// an invisible cell or in the other row.
pub const fn ddram_address(row: u8, col: u8) -> u8 {
    let address = row.wrapping_mul(ROW_STRIDE).wrapping_add(col);
    SET_DDRAM_ADDRESS | (address & DDRAM_ADDRESS_MASK)
}
