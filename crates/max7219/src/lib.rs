#![cfg_attr(not(test), no_std)]

//! MAX7219 8x8 LED matrix driver over a bit-banged 3-wire serial link.
//!
//! The chip is addressed one register at a time: chip-select low, two
//! bytes MSB first (register address, then data), chip-select high.
//! Nothing is ever read back; the wire protocol is feedback-free, so a
//! glitched frame is visible only as wrong pixels.

mod link;
pub mod mock;
pub mod protocol;

pub use link::{LinkError, SerialLink};

use embedded_hal::digital::OutputPin;
use log::debug;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Display intensity, clamped to the chip's 4-bit range when used.
    pub intensity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intensity: protocol::DEFAULT_INTENSITY,
        }
    }
}

pub type DriverResult<DinErr, ClkErr, CsErr> = Result<(), LinkError<DinErr, ClkErr, CsErr>>;

/// MAX7219 driver.
#[derive(Debug)]
pub struct Max7219<DIN, CLK, CS> {
    link: SerialLink<DIN, CLK, CS>,
    config: Config,
}

impl<DIN, CLK, CS> Max7219<DIN, CLK, CS>
where
    DIN: OutputPin,
    CLK: OutputPin,
    CS: OutputPin,
{
    /// Creates a new driver instance.
    ///
    /// The lines must be pre-configured push-pull outputs with CS high.
    pub fn new(din: DIN, clk: CLK, cs: CS, config: Config) -> Self {
        Self {
            link: SerialLink::new(din, clk, cs),
            config,
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases the serial lines.
    pub fn release(self) -> (DIN, CLK, CS) {
        self.link.release()
    }

    /// Writes one register: select, address byte, data byte, deselect.
    pub fn write_register(
        &mut self,
        register: u8,
        data: u8,
    ) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        let frame = protocol::command_frame(register, data);

        self.link.select()?;
        self.link.transmit_byte(frame[0])?;
        self.link.transmit_byte(frame[1])?;
        self.link.deselect()
    }

    /// Runs the power-on sequence.
    ///
    /// In contract order: raw decode mode, scan across all 8 rows, the
    /// configured intensity, leave shutdown, leave display-test, blank
    /// every row.
    pub fn initialize(&mut self) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        for frame in protocol::init_frames(self.config.intensity) {
            self.write_register(frame[0], frame[1])?;
        }

        debug!(
            "max7219: initialized, intensity={:#04x}",
            protocol::clamp_intensity(self.config.intensity)
        );
        Ok(())
    }

    /// Blanks all 8 rows. Idempotent; safe any time after `initialize`.
    pub fn clear(&mut self) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        for register in protocol::ROW_REGISTERS {
            self.write_register(register, 0x00)?;
        }
        Ok(())
    }

    /// Writes an 8-row bitmap, row 0 (register 1) through row 7
    /// (register 8), in ascending row order.
    pub fn render_rows(
        &mut self,
        rows: &[u8; protocol::ROWS],
    ) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        for (register, bits) in protocol::ROW_REGISTERS.iter().zip(rows) {
            self.write_register(*register, *bits)?;
        }
        Ok(())
    }

    /// Takes the row drivers out of shutdown.
    pub fn power_up(&mut self) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        self.write_register(protocol::REG_SHUTDOWN, protocol::SHUTDOWN_CLEARED)
    }

    /// Parks the row drivers; register contents survive.
    pub fn shut_down(&mut self) -> DriverResult<DIN::Error, CLK::Error, CS::Error> {
        self.write_register(protocol::REG_SHUTDOWN, protocol::SHUTDOWN_ASSERTED)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use super::*;
    use crate::mock::{BusTrace, Line, RecordingLine};

    fn driver(
        trace: &RefCell<BusTrace>,
        config: Config,
    ) -> Max7219<RecordingLine<'_>, RecordingLine<'_>, RecordingLine<'_>> {
        Max7219::new(
            RecordingLine::new(trace, Line::Data),
            RecordingLine::new(trace, Line::Clock),
            RecordingLine::new(trace, Line::ChipSelect),
            config,
        )
    }

    #[test]
    fn write_register_emits_exactly_one_frame() {
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.write_register(protocol::REG_SHUTDOWN, 0x01).unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(frames.as_slice(), &[[0x0C, 0x01]]);

        // All bus activity sits inside the select/deselect window.
        let transitions = trace.borrow().transitions().to_vec();
        assert_eq!(transitions.first().map(|t| (t.line, t.high)), Some((Line::ChipSelect, false)));
        assert_eq!(transitions.last().map(|t| (t.line, t.high)), Some((Line::ChipSelect, true)));
    }

    #[test]
    fn initialize_frames_arrive_in_contract_order() {
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.initialize().unwrap();

        let frames = trace.borrow().frames().unwrap();
        let expected = protocol::init_frames(protocol::DEFAULT_INTENSITY);
        assert_eq!(frames.as_slice(), expected.as_slice());
    }

    #[test]
    fn initialize_honors_the_configured_intensity() {
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config { intensity: 0x08 });

        max.initialize().unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(frames[2], [protocol::REG_INTENSITY, 0x08]);
    }

    #[test]
    fn render_rows_writes_registers_1_through_8_ascending() {
        let rows = [0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C];
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.render_rows(&rows).unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(frames.len(), 8);
        for (row, frame) in frames.iter().enumerate() {
            assert_eq!(*frame, [row as u8 + 1, rows[row]]);
        }
    }

    #[test]
    fn rendering_the_same_glyph_twice_is_byte_identical() {
        let rows = [0x7E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20];
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.render_rows(&rows).unwrap();
        max.render_rows(&rows).unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[..8], frames[8..]);
    }

    #[test]
    fn clear_blanks_every_row() {
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.clear().unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(frames.len(), 8);
        for (row, frame) in frames.iter().enumerate() {
            assert_eq!(*frame, [row as u8 + 1, 0x00]);
        }
    }

    #[test]
    fn shutdown_register_drives_power_state() {
        let trace = RefCell::new(BusTrace::new());
        let mut max = driver(&trace, Config::default());

        max.shut_down().unwrap();
        max.power_up().unwrap();

        let frames = trace.borrow().frames().unwrap();
        assert_eq!(
            frames.as_slice(),
            &[
                [protocol::REG_SHUTDOWN, protocol::SHUTDOWN_ASSERTED],
                [protocol::REG_SHUTDOWN, protocol::SHUTDOWN_CLEARED],
            ]
        );
    }
}
