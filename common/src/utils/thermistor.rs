//! Steinhart–Hart conversion for an NTC thermistor in a resistor divider.

use libm::logf;

/// Full-scale ADC code for the 10-bit sample domain.
pub const ADC_MAX: u16 = 1023;

const KELVIN_OFFSET: f32 = 273.15;

/// Divider reference resistance and inverse-polynomial coefficients for one
/// thermistor part.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Reference resistor of the divider, in ohms.
    pub r_ref: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Calibration {
    /// Coefficients for a common 10k NTC with a 10k reference resistor.
    pub const GENERIC_10K: Self = Self {
        r_ref: 10_000.0,
        a: 0.003354016,
        b: 0.0002569850,
        c: 0.000002620131,
        d: 0.00000006383091,
    };

    /// Estimates the thermistor temperature in degrees Celsius from a raw
    /// ADC sample.
    ///
    /// Samples at the domain extremes saturate to `[1, 1022]` so the
    /// divider ratio and its logarithm stay defined.
    ///
    /// Assumes the divider reads `V = Vcc * R_th / (R_th + r_ref)`, or the
    /// inverse depending on wiring; the implied resistance here is
    /// `R_th = r_ref * sample / (ADC_MAX - sample)`.
    pub fn sample_to_celsius(&self, sample: u16) -> f32 {
        let sample = sample.clamp(1, ADC_MAX - 1);

        let ratio = f32::from(sample) / f32::from(ADC_MAX - sample);
        let r_th = self.r_ref * ratio;

        let ln_r = logf(r_th);
        let inv_kelvin = self.a + self.b * ln_r + self.c * ln_r * ln_r + self.d * ln_r * ln_r * ln_r;

        1.0 / inv_kelvin - KELVIN_OFFSET
    }
}
