//! Bit-banged 3-wire serial link.
//!
//! The MAX7219 input stage is a plain shift register: it samples DIN on
//! every rising CLK edge and latches the last 16 bits into the addressed
//! register when CS returns high. No hardware peripheral is involved
//! here; the link clocks the lines from software.

use embedded_hal::digital::OutputPin;

/// Errors raised by the serial lines.
///
/// The chip has no feedback path, so these can only originate in the pin
/// writes themselves.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LinkError<DinErr, ClkErr, CsErr> {
    /// DIN pin write failed.
    Data(DinErr),
    /// CLK pin write failed.
    Clock(ClkErr),
    /// CS pin write failed.
    ChipSelect(CsErr),
}

pub type LinkResult<DinErr, ClkErr, CsErr> = Result<(), LinkError<DinErr, ClkErr, CsErr>>;

/// Software-clocked serial link over three push-pull output lines.
///
/// The link owns its lines exclusively; nothing else may drive them.
#[derive(Debug)]
pub struct SerialLink<DIN, CLK, CS> {
    din: DIN,
    clk: CLK,
    cs: CS,
}

impl<DIN, CLK, CS> SerialLink<DIN, CLK, CS>
where
    DIN: OutputPin,
    CLK: OutputPin,
    CS: OutputPin,
{
    /// Creates a link over the given lines.
    ///
    /// The lines must already be configured as push-pull outputs with CS
    /// high; from here on only complete select/deselect frames are driven.
    pub fn new(din: DIN, clk: CLK, cs: CS) -> Self {
        Self { din, clk, cs }
    }

    /// Releases the owned lines.
    pub fn release(self) -> (DIN, CLK, CS) {
        (self.din, self.clk, self.cs)
    }

    /// Drives CS low, opening a command frame.
    pub fn select(&mut self) -> LinkResult<DIN::Error, CLK::Error, CS::Error> {
        self.cs.set_low().map_err(LinkError::ChipSelect)
    }

    /// Drives CS high, latching the shifted bits into the chip.
    ///
    /// A frame is valid only if exactly two bytes were shifted between
    /// `select` and `deselect`; anything else silently corrupts the
    /// chip's register state.
    pub fn deselect(&mut self) -> LinkResult<DIN::Error, CLK::Error, CS::Error> {
        self.cs.set_high().map_err(LinkError::ChipSelect)
    }

    /// Shifts one byte out, MSB first.
    ///
    /// Per bit: CLK low, DIN set to the bit value, CLK high, so DIN is
    /// settled before the rising edge the chip samples on. There is no
    /// inter-bit delay; the instruction cadence of this loop is the clock
    /// period, well inside the chip's timing tolerance. Returns with CLK
    /// high and DIN at the last bit's value.
    pub fn transmit_byte(&mut self, value: u8) -> LinkResult<DIN::Error, CLK::Error, CS::Error> {
        for bit in (0..8).rev() {
            self.clk.set_low().map_err(LinkError::Clock)?;

            if value & (1 << bit) != 0 {
                self.din.set_high().map_err(LinkError::Data)?;
            } else {
                self.din.set_low().map_err(LinkError::Data)?;
            }

            self.clk.set_high().map_err(LinkError::Clock)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use super::*;
    use crate::mock::{BusTrace, Line, RecordingLine};

    fn link(trace: &RefCell<BusTrace>) -> SerialLink<RecordingLine<'_>, RecordingLine<'_>, RecordingLine<'_>> {
        SerialLink::new(
            RecordingLine::new(trace, Line::Data),
            RecordingLine::new(trace, Line::Clock),
            RecordingLine::new(trace, Line::ChipSelect),
        )
    }

    fn sampled_bits(trace: &BusTrace) -> Vec<bool> {
        let mut din = false;
        let mut bits = Vec::new();
        for transition in trace.transitions() {
            match transition.line {
                Line::Data => din = transition.high,
                Line::Clock if transition.high => bits.push(din),
                _ => {}
            }
        }
        bits
    }

    #[test]
    fn bits_shift_out_msb_first() {
        let trace = RefCell::new(BusTrace::new());
        link(&trace).transmit_byte(0b1010_0011).unwrap();

        let bits = sampled_bits(&trace.borrow());
        assert_eq!(
            bits,
            [true, false, true, false, false, false, true, true]
        );
    }

    #[test]
    fn every_bit_is_clock_low_then_data_then_clock_high() {
        let trace = RefCell::new(BusTrace::new());
        link(&trace).transmit_byte(0x5A).unwrap();

        let transitions = trace.borrow().transitions().to_vec();
        assert_eq!(transitions.len(), 24);

        for bit in transitions.chunks(3) {
            assert_eq!(bit[0].line, Line::Clock);
            assert!(!bit[0].high);
            assert_eq!(bit[1].line, Line::Data);
            assert_eq!(bit[2].line, Line::Clock);
            assert!(bit[2].high);
        }
    }

    #[test]
    fn transmit_leaves_clock_high() {
        let trace = RefCell::new(BusTrace::new());
        link(&trace).transmit_byte(0x00).unwrap();

        let last_clock = trace
            .borrow()
            .transitions()
            .iter()
            .rev()
            .find(|t| t.line == Line::Clock)
            .copied()
            .unwrap();
        assert!(last_clock.high);
    }

    #[test]
    fn select_and_deselect_drive_chip_select() {
        let trace = RefCell::new(BusTrace::new());
        let mut link = link(&trace);

        link.select().unwrap();
        link.deselect().unwrap();

        let transitions = trace.borrow().transitions().to_vec();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].line, Line::ChipSelect);
        assert!(!transitions[0].high);
        assert_eq!(transitions[1].line, Line::ChipSelect);
        assert!(transitions[1].high);
    }
}
