//! Capability seams between the monitor core and the hardware.
//!
//! The core only ever needs to read one analog channel, write one PWM
//! channel, push one log line, and wait — so that is all these traits
//! expose. Firmware implements them over real peripherals; tests implement
//! them over plain memory.

/// The four fixed PWM outputs of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Red,
    Green,
    Blue,
    Flasher,
}

/// One analog input, sampled as a 10-bit code in `[0, 1023]`.
pub trait AnalogSource {
    fn sample(&mut self) -> u16;
}

/// Four PWM outputs, each taking an 8-bit level.
///
/// Writes are assumed to always succeed at this abstraction level.
pub trait PwmBank {
    fn write(&mut self, channel: LedChannel, level: u8);
}

/// One line of text output, terminator included by the caller.
pub trait SerialSink {
    fn write_line(&mut self, line: &str);
}

/// Blocks the whole program for the given number of milliseconds.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}
