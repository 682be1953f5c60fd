//! Display configuration types and builder

use crate::command::{
    DISPLAY_CONTROL, DISPLAY_ON, EIGHT_BIT_BUS, ENTRY_INCREMENT, ENTRY_MODE, FONT_5X8,
    FUNCTION_SET, ONE_LINE, TWO_LINES,
};
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions in character cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of visible rows (1 or 2)
    pub rows: u8,
    /// Number of visible columns per row
    pub cols: u8,
}

impl Dimensions {
    /// The common 16x2 module
    pub const LCD1602: Self = Self { rows: 2, cols: 16 };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows is 0 or greater than MAX_ROWS
    /// - cols is 0 or greater than MAX_COLUMNS
    pub fn new(rows: u8, cols: u8) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of visible cells
    pub fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// What `print_str` does with a character that has no glyph code
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum UnmappedChar {
    /// Stop and return [`Error::UnsupportedCharacter`](crate::Error::UnsupportedCharacter)
    ///
    /// Glyphs before the offending character have already been written.
    #[default]
    Fail,
    /// Drop the character and carry on
    Skip,
    /// Write the given glyph code in its place
    Substitute(u8),
}

/// Bus timing in microseconds / milliseconds
///
/// The transfer order is fixed; only the wait lengths are configurable, and
/// never below what the controller requires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Idle time before a cycle starts (µs)
    pub setup_us: u32,
    /// Time the data lines settle while enable is high (µs)
    pub strobe_us: u32,
    /// Hold time after the enable falling edge (µs)
    pub hold_us: u32,
    /// Instruction execution time absorbed after each transfer (ms)
    pub execution_ms: u32,
}

impl Timing {
    /// Shortest timing the controller tolerates
    pub const MIN: Self = Self {
        setup_us: 5,
        strobe_us: 5,
        hold_us: 5,
        execution_ms: 2,
    };

    /// Create a timing with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::TimingTooShort` if any wait is below [`Timing::MIN`].
    pub fn new(
        setup_us: u32,
        strobe_us: u32,
        hold_us: u32,
        execution_ms: u32,
    ) -> Result<Self, BuilderError> {
        let timing = Self {
            setup_us,
            strobe_us,
            hold_us,
            execution_ms,
        };
        if setup_us < Self::MIN.setup_us
            || strobe_us < Self::MIN.strobe_us
            || hold_us < Self::MIN.hold_us
            || execution_ms < Self::MIN.execution_ms
        {
            return Err(BuilderError::TimingTooShort(timing));
        }
        Ok(timing)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::MIN
    }
}

/// Display configuration
///
/// Holds the instruction words written by
/// [`LcdController::init`](crate::LcdController::init) and the policy for
/// unmapped characters. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Function set instruction (bus width, lines, font)
    pub function_set: u8,
    /// Display control instruction (display, cursor, blink)
    pub display_control: u8,
    /// Entry mode instruction (direction, display shift)
    pub entry_mode: u8,
    /// Unmapped character policy
    pub unmapped: UnmappedChar,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use lcd1602::{command, Builder, Dimensions, UnmappedChar};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::LCD1602)
///     .display_control(command::DISPLAY_CONTROL | command::DISPLAY_ON | command::BLINK_ON)
///     .unmapped(UnmappedChar::Substitute(0x20))
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.function_set, 0x38);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Function set override; derived from dimensions when unset
    function_set: Option<u8>,
    /// Display control override
    display_control: Option<u8>,
    /// Entry mode override
    entry_mode: Option<u8>,
    /// Unmapped character policy
    unmapped: UnmappedChar,
}

impl Builder {
    /// Display on, cursor off, blink off
    pub const DEFAULT_DISPLAY_CONTROL: u8 = DISPLAY_CONTROL | DISPLAY_ON;
    /// Cursor moves right, display does not shift
    pub const DEFAULT_ENTRY_MODE: u8 = ENTRY_MODE | ENTRY_INCREMENT;

    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the function set instruction
    ///
    /// Defaults to 8-bit bus, 5x8 font, and one or two lines from the dimensions.
    pub fn function_set(mut self, value: u8) -> Self {
        self.function_set = Some(value);
        self
    }

    /// Set the display control instruction
    pub fn display_control(mut self, value: u8) -> Self {
        self.display_control = Some(value);
        self
    }

    /// Set the entry mode instruction
    pub fn entry_mode(mut self, value: u8) -> Self {
        self.entry_mode = Some(value);
        self
    }

    /// Set the unmapped character policy
    pub fn unmapped(mut self, policy: UnmappedChar) -> Self {
        self.unmapped = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let lines = if dimensions.rows > 1 {
            TWO_LINES
        } else {
            ONE_LINE
        };
        Ok(Config {
            dimensions,
            function_set: self
                .function_set
                .unwrap_or(FUNCTION_SET | EIGHT_BIT_BUS | lines | FONT_5X8),
            display_control: self
                .display_control
                .unwrap_or(Self::DEFAULT_DISPLAY_CONTROL),
            entry_mode: self.entry_mode.unwrap_or(Self::DEFAULT_ENTRY_MODE),
            unmapped: self.unmapped,
        })
    }
}
