use crate::hal::{LedChannel, PwmBank};
use crate::utils::numeric::clamp;

/// Splits a target intensity into the red/blue gradient pair.
///
/// Out-of-range intensities clamp to `[0, 255]`; blue is the complement of
/// red so the pair always sums to full scale.
pub fn split_intensity(intensity: i32) -> (u8, u8) {
    let red = clamp(intensity, 0, 255) as u8;
    (red, 255 - red)
}

pub struct LedDriver<P: PwmBank> {
    bank: P,
}

impl<P: PwmBank> LedDriver<P> {
    pub const fn new(bank: P) -> Self {
        Self { bank }
    }

    /// Drives the red/blue pair from one intensity: red rises, blue falls.
    pub fn drive_gradient(&mut self, intensity: i32) {
        let (red, blue) = split_intensity(intensity);
        self.bank.write(LedChannel::Red, red);
        self.bank.write(LedChannel::Blue, blue);
    }

    /// Drives the dedicated flasher channel fully on or off.
    pub fn set_flasher(&mut self, on: bool) {
        self.bank.write(LedChannel::Flasher, if on { 255 } else { 0 });
    }

    /// Zeroes all four channels, including the unused green one.
    pub fn all_off(&mut self) {
        for channel in [
            LedChannel::Red,
            LedChannel::Green,
            LedChannel::Blue,
            LedChannel::Flasher,
        ] {
            self.bank.write(channel, 0);
        }
    }
}
