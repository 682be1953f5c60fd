//! Recording pin and delay doubles shared by the unit tests

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::interface::{ParallelBus, Register};

/// Bus line a [`MockPin`] stands in for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Rs,
    Rw,
    En,
    Db(u8),
}

/// One observable step on the bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug)]
pub struct MockPin {
    line: Line,
    log: Log,
    fails: bool,
}

impl MockPin {
    pub fn line(&self) -> Line {
        self.line
    }

    fn record(&mut self, level: bool) -> Result<(), MockError> {
        if self.fails {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Set(self.line, level));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true)
    }
}

#[derive(Debug)]
pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type MockBus = ParallelBus<MockPin, MockPin, MockPin, MockPin, MockDelay>;

fn build(failing: Option<Line>) -> (MockBus, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let pin = |line: Line| MockPin {
        line,
        log: Rc::clone(&log),
        fails: failing == Some(line),
    };
    let data = [0u8, 1, 2, 3, 4, 5, 6, 7].map(|bit| pin(Line::Db(bit)));
    let bus = ParallelBus::new(
        pin(Line::Rs),
        pin(Line::Rw),
        pin(Line::En),
        data,
        MockDelay {
            log: Rc::clone(&log),
        },
    );
    (bus, log)
}

/// Bus wired to recording pins
pub fn bus() -> (MockBus, Log) {
    build(None)
}

/// Bus whose `line` returns an error on every write
pub fn failing_bus(line: Line) -> (MockBus, Log) {
    build(Some(line))
}

/// Reconstruct the words the controller latched, one per enable falling edge
pub fn latched(log: &Log) -> Vec<(Register, u8)> {
    let mut rs = false;
    let mut word = 0u8;
    let mut words = Vec::new();
    for event in log.borrow().iter() {
        match *event {
            Event::Set(Line::Rs, level) => rs = level,
            Event::Set(Line::Db(bit), level) => {
                if level {
                    word |= 1 << bit;
                } else {
                    word &= !(1 << bit);
                }
            }
            Event::Set(Line::En, false) => {
                let register = if rs {
                    Register::Data
                } else {
                    Register::Instruction
                };
                words.push((register, word));
            }
            _ => {}
        }
    }
    words
}
