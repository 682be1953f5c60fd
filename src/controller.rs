//! Core display operations

use log::debug;

use crate::charset::glyphs;
use crate::command::{
    CLEAR_DISPLAY, CURSOR_LEFT, CURSOR_RIGHT, DISPLAY_LEFT, DISPLAY_RIGHT, RETURN_HOME,
    ddram_address,
};
use crate::config::{Config, Dimensions, UnmappedChar};
use crate::error::Error;
use crate::interface::BusInterface;

type ControllerResult<I> = core::result::Result<(), Error<I>>;

/// Driver state
///
/// Without busy-flag polling the controller is taken to be ready again once
/// a transfer's execution wait has elapsed, so every operation starts and
/// ends in [`State::Ready`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Accepting the next instruction
    #[default]
    Ready,
}

/// Core display driver for HD44780 character LCDs
///
/// The driver mirrors none of the controller's state: cursor position, entry
/// mode and display contents live in the chip. Operations only encode and
/// push instructions.
///
/// The controller owns its interface and every operation takes `&mut self`,
/// so a single caller drives the bus at a time. Wrap it in a mutex to share it.
#[derive(Debug)]
pub struct LcdController<I>
where
    I: BusInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Driver state
    state: State,
}

impl<I> LcdController<I>
where
    I: BusInterface,
{
    /// Create a new LcdController
    ///
    /// Nothing is written to the bus; call [`LcdController::init`] after power-on.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: State::Ready,
        }
    }

    /// Initialize the controller with configuration
    ///
    /// Writes function set, display control, clear display and entry mode,
    /// in that order.
    pub fn init(&mut self) -> ControllerResult<I> {
        debug!(
            "Init {}x{}: function {:#04x}, display {:#04x}, entry {:#04x}",
            self.config.dimensions.cols,
            self.config.dimensions.rows,
            self.config.function_set,
            self.config.display_control,
            self.config.entry_mode
        );
        self.set_function(self.config.function_set)?;
        self.set_display_options(self.config.display_control)?;
        self.reset()?;
        self.set_entry_mode(self.config.entry_mode)
    }

    /// Write an instruction word (RS low)
    pub fn write_command(&mut self, opcode: u8) -> ControllerResult<I> {
        self.interface.write_command(opcode).map_err(Error::Interface)
    }

    /// Write a glyph code at the cursor (RS high)
    pub fn write_glyph(&mut self, code: u8) -> ControllerResult<I> {
        self.interface.write_glyph(code).map_err(Error::Interface)
    }

    /// Write a string at the cursor
    ///
    /// Characters are translated one at a time with
    /// [`charset::glyph_code`](crate::charset::glyph_code) and written as they
    /// are translated. Characters without a glyph follow the configured
    /// [`UnmappedChar`] policy.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedCharacter` under [`UnmappedChar::Fail`]. Glyphs
    /// before the offending character have already been written.
    pub fn print_str(&mut self, text: &str) -> ControllerResult<I> {
        for glyph in glyphs(text) {
            let code = match glyph {
                Ok(code) => code,
                Err((index, character)) => match self.config.unmapped {
                    UnmappedChar::Fail => {
                        return Err(Error::UnsupportedCharacter { character, index });
                    }
                    UnmappedChar::Skip => {
                        debug!("Skipping unmapped {character:?} at {index}");
                        continue;
                    }
                    UnmappedChar::Substitute(code) => {
                        debug!("Substituting {code:#04x} for unmapped {character:?} at {index}");
                        code
                    }
                },
            };
            self.write_glyph(code)?;
        }
        Ok(())
    }

    /// Move the cursor and write a string
    pub fn print_at(&mut self, row: u8, col: u8, text: &str) -> ControllerResult<I> {
        self.set_cursor_position(row, col)?;
        self.print_str(text)
    }

    /// Clear the display and return the cursor home
    pub fn reset(&mut self) -> ControllerResult<I> {
        self.write_command(CLEAR_DISPLAY)
    }

    /// Return the cursor home and undo any display shift
    pub fn return_home(&mut self) -> ControllerResult<I> {
        self.write_command(RETURN_HOME)
    }

    /// Write a function set instruction
    ///
    /// `options` is written as is; OR together [`command::FUNCTION_SET`](crate::command::FUNCTION_SET)
    /// and its option bits.
    pub fn set_function(&mut self, options: u8) -> ControllerResult<I> {
        self.write_command(options)
    }

    /// Write a display control instruction
    ///
    /// `options` is written as is; OR together [`command::DISPLAY_CONTROL`](crate::command::DISPLAY_CONTROL)
    /// and its option bits.
    pub fn set_display_options(&mut self, options: u8) -> ControllerResult<I> {
        self.write_command(options)
    }

    /// Write an entry mode instruction
    ///
    /// `options` is written as is; OR together [`command::ENTRY_MODE`](crate::command::ENTRY_MODE)
    /// and its option bits.
    pub fn set_entry_mode(&mut self, options: u8) -> ControllerResult<I> {
        self.write_command(options)
    }

    /// Move the cursor to a row and column
    ///
    /// Not bounds checked. Out of range positions address DDRAM cells that are
    /// not visible or wrap into the other row.
    pub fn set_cursor_position(&mut self, row: u8, col: u8) -> ControllerResult<I> {
        self.write_command(ddram_address(row, col))
    }

    /// Move the cursor `n` cells, left when negative
    ///
    /// One instruction per cell.
    pub fn shift_cursor(&mut self, n: i32) -> ControllerResult<I> {
        self.repeat_shift(n, CURSOR_LEFT, CURSOR_RIGHT)
    }

    /// Shift the whole display `n` cells, left when negative
    ///
    /// One instruction per cell.
    pub fn shift_display(&mut self, n: i32) -> ControllerResult<I> {
        self.repeat_shift(n, DISPLAY_LEFT, DISPLAY_RIGHT)
    }

    fn repeat_shift(&mut self, n: i32, left: u8, right: u8) -> ControllerResult<I> {
        let opcode = if n < 0 { left } else { right };
        for _ in 0..n.unsigned_abs() {
            self.write_command(opcode)?;
        }
        Ok(())
    }

    /// Current driver state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> core::fmt::Write for LcdController<I>
where
    I: BusInterface,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print_str(s).map_err(|_| core::fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::interface::Register::{Data, Instruction};
    use crate::mock::{self, Event, Line, Log, MockBus};
    use alloc::vec;
    use core::fmt::Write;

    fn test_controller(unmapped: UnmappedChar) -> (LcdController<MockBus>, Log) {
        let (bus, log) = mock::bus();
        let config = Builder::new()
            .dimensions(Dimensions::LCD1602)
            .unmapped(unmapped)
            .build()
            .unwrap();
        (LcdController::new(bus, config), log)
    }

    #[test]
    fn test_new_writes_nothing() {
        let (lcd, log) = test_controller(UnmappedChar::Fail);
        assert!(log.borrow().is_empty());
        assert_eq!(lcd.state(), State::Ready);
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.init().unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![
                (Instruction, 0x38),
                (Instruction, 0x0C),
                (Instruction, 0x01),
                (Instruction, 0x06)
            ]
        );
    }

    #[test]
    fn test_write_command_uses_instruction_register() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.write_command(0x41).unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0x41)]);
    }

    #[test]
    fn test_write_glyph_uses_data_register() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.write_glyph(0x01).unwrap();
        assert_eq!(mock::latched(&log), vec![(Data, 0x01)]);
    }

    #[test]
    fn test_set_cursor_position_second_row() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.set_cursor_position(1, 3).unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0xC3)]);
    }

    #[test]
    fn test_set_cursor_position_is_not_clamped() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.set_cursor_position(0, 20).unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0x94)]);
    }

    #[test]
    fn test_shift_cursor_left() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.shift_cursor(-3).unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0x10); 3]);
        // Each step is a full cycle with its own execution wait
        let waits = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::DelayMs(2)))
            .count();
        assert_eq!(waits, 3);
    }

    #[test]
    fn test_shift_cursor_right() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.shift_cursor(3).unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0x14); 3]);
    }

    #[test]
    fn test_shift_zero_is_noop() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.shift_cursor(0).unwrap();
        lcd.shift_display(0).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_shift_display() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.shift_display(-2).unwrap();
        lcd.shift_display(1).unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![
                (Instruction, 0x18),
                (Instruction, 0x18),
                (Instruction, 0x1C)
            ]
        );
    }

    #[test]
    fn test_print_str() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.print_str("AB1").unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![(Data, 0x41), (Data, 0x42), (Data, 0x31)]
        );
    }

    #[test]
    fn test_print_str_fail_stops_at_unmapped() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        let result = lcd.print_str("ok~no");
        assert!(matches!(
            result,
            Err(Error::UnsupportedCharacter {
                character: '~',
                index: 2
            })
        ));
        assert_eq!(mock::latched(&log), vec![(Data, 0x6F), (Data, 0x6B)]);
    }

    #[test]
    fn test_print_str_skip() {
        let (mut lcd, log) = test_controller(UnmappedChar::Skip);
        lcd.print_str("a\nb").unwrap();
        assert_eq!(mock::latched(&log), vec![(Data, 0x61), (Data, 0x62)]);
    }

    #[test]
    fn test_print_str_substitute() {
        let (mut lcd, log) = test_controller(UnmappedChar::Substitute(0x20));
        lcd.print_str("é→").unwrap();
        assert_eq!(mock::latched(&log), vec![(Data, 0x20), (Data, 0x7E)]);
    }

    #[test]
    fn test_print_at() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.print_at(1, 0, "Hi").unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![(Instruction, 0xC0), (Data, 0x48), (Data, 0x69)]
        );
    }

    #[test]
    fn test_reset_and_return_home() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.reset().unwrap();
        assert_eq!(mock::latched(&log), vec![(Instruction, 0x01)]);
        // No extra wait beyond the transfer's own execution time
        assert_eq!(log.borrow().last(), Some(&Event::DelayMs(2)));

        lcd.return_home().unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![(Instruction, 0x01), (Instruction, 0x02)]
        );
    }

    #[test]
    fn test_option_setters_pass_through() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.set_function(0x30).unwrap();
        lcd.set_display_options(0x0F).unwrap();
        lcd.set_entry_mode(0x07).unwrap();
        // Not validated against the family
        lcd.set_entry_mode(0xFF).unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![
                (Instruction, 0x30),
                (Instruction, 0x0F),
                (Instruction, 0x07),
                (Instruction, 0xFF)
            ]
        );
    }

    #[test]
    fn test_fmt_write() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        write!(lcd, "T={}", 21).unwrap();
        assert_eq!(
            mock::latched(&log),
            vec![(Data, 0x54), (Data, 0x3D), (Data, 0x32), (Data, 0x31)]
        );
        assert!(write!(lcd, "\\").is_err());
    }

    #[test]
    fn test_interface_error_propagates() {
        let (bus, _log) = mock::failing_bus(Line::Db(0));
        let config = Builder::new()
            .dimensions(Dimensions::LCD1602)
            .build()
            .unwrap();
        let mut lcd = LcdController::new(bus, config);
        assert!(matches!(lcd.reset(), Err(Error::Interface(_))));
        assert!(matches!(lcd.print_str("A"), Err(Error::Interface(_))));
    }

    #[test]
    fn test_release_returns_interface() {
        let (mut lcd, log) = test_controller(UnmappedChar::Fail);
        lcd.reset().unwrap();
        let before = log.borrow().len();
        let mut bus = lcd.release();
        crate::interface::BusInterface::write_glyph(&mut bus, 0x41).unwrap();
        assert!(log.borrow().len() > before);
    }
}
