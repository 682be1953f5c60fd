//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin errors
//!
//! The bus has no feedback path, so a transfer that reaches the pins is
//! assumed to have succeeded. Only pin failures and characters without a glyph
//! surface at runtime.
//!
//! ## Example
//!
//! ```
//! use lcd1602::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Four-row modules use a different address layout
//! let result = Dimensions::new(4, 20);
//! assert!(result.is_err());
//! ```

use crate::config::Timing;
use crate::interface::BusInterface;

/// Maximum rows addressable with the 0x40 row stride
pub const MAX_ROWS: u8 = 2;

/// Maximum DDRAM cells per row in two-line mode
pub const MAX_COLUMNS: u8 = 40;

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: BusInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`BusInterface`] implementation.
    Interface(I::Error),
    /// The character has no glyph code
    ///
    /// Only returned under [`UnmappedChar::Fail`](crate::UnmappedChar::Fail).
    UnsupportedCharacter {
        /// The offending character
        character: char,
        /// Its position in the string, counted in characters
        index: usize,
    },
}

impl<I: BusInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::UnsupportedCharacter { character, index } => {
                write!(f, "Unsupported character {character:?} at index {index}")
            }
        }
    }
}

impl<I: BusInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows requested
        rows: u8,
        /// Number of columns requested
        cols: u8,
    },
    /// A wait is shorter than the controller allows
    TimingTooShort(Timing),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_ROWS} rows, {MAX_COLUMNS} columns)"
            ),
            Self::TimingTooShort(timing) => write!(
                f,
                "Timing too short: {}/{}/{}us, {}ms (min {}/{}/{}us, {}ms)",
                timing.setup_us,
                timing.strobe_us,
                timing.hold_us,
                timing.execution_ms,
                Timing::MIN.setup_us,
                Timing::MIN.strobe_us,
                Timing::MIN.hold_us,
                Timing::MIN.execution_ms,
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
