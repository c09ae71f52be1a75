//! No-hardware serial lines used during bring-up and in tests.
//!
//! [`RecordingLine`] stands in for a GPIO output and appends every level
//! write to a shared [`BusTrace`]; the trace can then be decoded back
//! into the command frames a real chip would have latched.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

use crate::protocol::FRAME_SIZE;

/// Transitions one trace can hold; enough for an init sequence plus a
/// handful of rendered glyphs.
pub const TRACE_CAPACITY: usize = 4096;
/// Decoded frames one trace can hold.
pub const FRAME_CAPACITY: usize = 64;

/// Bus lines distinguishable in a trace.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line {
    Data,
    Clock,
    ChipSelect,
}

/// One recorded level write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    pub line: Line,
    pub high: bool,
}

/// Shared log of everything driven onto the three lines.
#[derive(Debug, Default)]
pub struct BusTrace {
    transitions: Vec<Transition, TRACE_CAPACITY>,
    overflowed: bool,
}

impl BusTrace {
    pub const fn new() -> Self {
        Self {
            transitions: Vec::new(),
            overflowed: false,
        }
    }

    fn record(&mut self, line: Line, high: bool) {
        if self.transitions.push(Transition { line, high }).is_err() {
            self.overflowed = true;
        }
    }

    /// Every level write in driven order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// True when writes were dropped because the trace filled up.
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Decodes the trace into the command frames the chip would latch.
    ///
    /// Replays the shift-register contract: DIN is sampled on rising CLK
    /// edges while CS is low, and the collected bits are latched when CS
    /// returns high. Returns `None` when the trace overflowed or does
    /// not parse as clean two-byte frames.
    pub fn frames(&self) -> Option<Vec<[u8; FRAME_SIZE], FRAME_CAPACITY>> {
        if self.overflowed {
            return None;
        }

        let mut frames = Vec::new();
        let mut din = false;
        let mut selected = false;
        let mut shifted: u16 = 0;
        let mut bit_count = 0usize;

        for transition in self.transitions.iter() {
            match transition.line {
                Line::Data => din = transition.high,
                Line::Clock => {
                    if transition.high && selected {
                        bit_count += 1;
                        if bit_count > FRAME_SIZE * 8 {
                            return None;
                        }
                        shifted = (shifted << 1) | din as u16;
                    }
                }
                Line::ChipSelect => {
                    if transition.high {
                        if selected {
                            if bit_count != FRAME_SIZE * 8 {
                                return None;
                            }
                            frames
                                .push([(shifted >> 8) as u8, shifted as u8])
                                .ok()?;
                        }
                        selected = false;
                    } else {
                        selected = true;
                        shifted = 0;
                        bit_count = 0;
                    }
                }
            }
        }

        Some(frames)
    }
}

/// Output line that records level writes into a shared [`BusTrace`].
#[derive(Debug)]
pub struct RecordingLine<'a> {
    line: Line,
    trace: &'a RefCell<BusTrace>,
}

impl<'a> RecordingLine<'a> {
    pub fn new(trace: &'a RefCell<BusTrace>, line: Line) -> Self {
        Self { line, trace }
    }
}

impl ErrorType for RecordingLine<'_> {
    type Error = Infallible;
}

impl OutputPin for RecordingLine<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().record(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().record(self.line, true);
        Ok(())
    }
}
