//! Hardware interface abstraction
//!
//! This module provides the [`BusInterface`] trait and the [`ParallelBus`] struct
//! for driving an HD44780 controller over its 8-bit parallel bus.
//!
//! ## Hardware Requirements
//!
//! The controller is wired with 11 output lines:
//! - **RS**: Register select (low=instruction, high=glyph data)
//! - **RW**: Read/write select (held low while writing, high between transfers)
//! - **E**: Enable strobe (the controller latches on the falling edge)
//! - **DB0..DB7**: Data bus, DB0 is the least significant bit
//!
//! The driver never reads the bus back. Instead of polling the busy flag it
//! waits out the worst-case execution time after every transfer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use lcd1602::{BusInterface, ParallelBus, Register};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let data = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! let mut bus = ParallelBus::new(MockPin, MockPin, MockPin, data, MockDelay);
//!
//! // Clear display
//! let _ = bus.transfer(0x01, Register::Instruction);
//!
//! // Write 'A'
//! let _ = bus.transfer(0x41, Register::Data);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::trace;

use crate::config::Timing;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Register addressed by a transfer, selected with the RS line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Instruction register (RS low)
    Instruction,
    /// Data register (RS high), the word is a glyph code
    Data,
}

impl Register {
    /// Level of the RS line for this register
    pub fn rs_state(self) -> PinState {
        match self {
            Self::Instruction => PinState::Low,
            Self::Data => PinState::High,
        }
    }
}

/// Trait for hardware interface to the HD44780 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`LcdController`](crate::controller::LcdController) to work with any
/// transport that can move one framed word to the controller.
///
/// ## Implementing
///
/// For most cases, use the provided [`ParallelBus`] struct. Implement this
/// trait on your own type for a different transport (e.g. an I/O expander).
pub trait BusInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Move one word to the controller and wait for it to execute
    ///
    /// The implementation must frame the word with RS set for `register`, and
    /// must not return before the controller can accept the next transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if driving a line fails.
    fn transfer(&mut self, word: u8, register: Register) -> InterfaceResult<(), Self::Error>;

    /// Write an instruction word (RS low)
    fn write_command(&mut self, opcode: u8) -> InterfaceResult<(), Self::Error> {
        self.transfer(opcode, Register::Instruction)
    }

    /// Write a glyph code (RS high)
    fn write_glyph(&mut self, code: u8) -> InterfaceResult<(), Self::Error> {
        self.transfer(code, Register::Data)
    }
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// 8-bit parallel bus implementation for HD44780
///
/// Implements [`BusInterface`] for embedded-hal v1.0 GPIO and delay traits.
/// The bus owns its lines and delay; hand them back with [`ParallelBus::release`].
///
/// ## Type Parameters
///
/// * `RS` - Register select pin implementing [`OutputPin`]
/// * `RW` - Read/write select pin implementing [`OutputPin`]
/// * `EN` - Enable pin implementing [`OutputPin`]
/// * `DB` - Data pin type implementing [`OutputPin`], usually a type-erased pin
/// * `D` - Delay implementing [`DelayNs`]
#[derive(Debug)]
pub struct ParallelBus<RS, RW, EN, DB, D> {
    /// Register select pin (low=instruction, high=data)
    rs: RS,
    /// Read/write select pin (low=write)
    rw: RW,
    /// Enable strobe pin
    en: EN,
    /// Data lines, DB0 first
    data: [DB; 8],
    /// Delay source for setup, hold and execution waits
    delay: D,
    /// Wait lengths
    timing: Timing,
}

impl<RS, RW, EN, DB, D> ParallelBus<RS, RW, EN, DB, D>
where
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    DB: OutputPin,
    D: DelayNs,
{
    /// Create a new ParallelBus
    ///
    /// # Arguments
    ///
    /// * `rs` - Register select pin
    /// * `rw` - Read/write select pin
    /// * `en` - Enable pin
    /// * `data` - Data pins DB0 through DB7
    /// * `delay` - Delay source
    pub fn new(rs: RS, rw: RW, en: EN, data: [DB; 8], delay: D) -> Self {
        Self {
            rs,
            rw,
            en,
            data,
            delay,
            timing: Timing::MIN,
        }
    }

    /// Set the bus timing
    ///
    /// Default is [`Timing::MIN`]. Longer waits help with slow modules or long wires.
    pub fn set_timing(&mut self, timing: Timing) -> &mut Self {
        self.timing = timing;
        self
    }

    /// Get the current bus timing
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Release the pins and delay
    pub fn release(self) -> (RS, RW, EN, [DB; 8], D) {
        (self.rs, self.rw, self.en, self.data, self.delay)
    }
}

impl<RS, RW, EN, DB, D, PinErr> BusInterface for ParallelBus<RS, RW, EN, DB, D>
where
    RS: OutputPin<Error = PinErr>,
    RW: OutputPin<Error = PinErr>,
    EN: OutputPin<Error = PinErr>,
    DB: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn transfer(&mut self, word: u8, register: Register) -> InterfaceResult<(), Self::Error> {
        trace!("Transfer {word:08b} to {register:?}");

        self.delay.delay_us(self.timing.setup_us);

        self.rs
            .set_state(register.rs_state())
            .map_err(InterfaceError::Pin)?;
        self.rw.set_low().map_err(InterfaceError::Pin)?;

        self.en.set_high().map_err(InterfaceError::Pin)?;
        for (bit, line) in self.data.iter_mut().enumerate() {
            line.set_state(PinState::from((word >> bit) & 1 == 1))
                .map_err(InterfaceError::Pin)?;
        }
        self.delay.delay_us(self.timing.strobe_us);

        // Falling edge latches the word
        self.en.set_low().map_err(InterfaceError::Pin)?;
        self.delay.delay_us(self.timing.hold_us);

        self.rw.set_high().map_err(InterfaceError::Pin)?;
        self.delay.delay_ms(self.timing.execution_ms);

        Ok(())
    }
}
