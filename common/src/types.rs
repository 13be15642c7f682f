use core::fmt::{self, Write};

use crate::utils::thermistor::Calibration;

/// Empirical ADC window remapped onto the LED intensity range.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleWindow {
    pub lo: u16,
    pub hi: u16,
}

/// Fixed per-board configuration handed to the monitor loop.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Raw samples inside this window span the full gradient; outside it
    /// they clamp to the nearest end.
    pub window: SampleWindow,
    /// Flasher half-period, which is also the loop period.
    pub flash_half_period_ms: u32,
    pub calibration: Calibration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: SampleWindow { lo: 530, hi: 591 },
            flash_half_period_ms: 250,
            calibration: Calibration::GENERIC_10K,
        }
    }
}

/// Readings derived from one loop iteration.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub raw: u16,
    pub mapped: u8,
    pub celsius: f32,
    pub fahrenheit: f32,
}

impl Report {
    /// Writes the CRLF-terminated serial line for this report.
    pub fn write_line<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "ADC={:4}  Mapped={:3}  T_C={:7.2}  T_F={:7.2}\r\n",
            self.raw, self.mapped, self.celsius, self.fahrenheit
        )
    }
}
