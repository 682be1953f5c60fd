//! HD44780 / LCD1602 Character Display Driver
//!
//! A driver for HD44780-compatible character LCD controllers, such as the
//! common 16x2 "1602" modules, wired in 8-bit parallel mode.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Write-only bus: RW is driven but never read, execution time is waited out
//! - Instruction constants for every write instruction except CGRAM
//! - Character to glyph translation for the A00 character ROM
//! - `core::fmt::Write` support
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use lcd1602::{Builder, Dimensions, LcdController, ParallelBus};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (rs, rw, en) = (MockPin, MockPin, MockPin);
//! # let data = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! # let delay = MockDelay;
//! let bus = ParallelBus::new(rs, rw, en, data, delay);
//! let config = match Builder::new().dimensions(Dimensions::LCD1602).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = LcdController::new(bus, config);
//! let _ = lcd.init();
//! let _ = lcd.print_str("Hello");
//! let _ = lcd.set_cursor_position(1, 0);
//! let _ = write!(lcd, "T={}C", 21);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Character to glyph code translation
pub mod charset;
/// HD44780 instruction definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod controller;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

#[cfg(test)]
mod mock;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Timing, UnmappedChar};
pub use controller::{LcdController, State};
pub use error::{BuilderError, Error};
pub use interface::{BusInterface, InterfaceError, ParallelBus, Register};
