//! The polling loop: read, map, compute, log, drive, wait.

use heapless::String;

use crate::hal::{AnalogSource, Delay, PwmBank, SerialSink};
use crate::led::LedDriver;
use crate::types::{Config, Report};
use crate::utils::numeric::{celsius_to_fahrenheit, clamp, remap};

/// Capacity for one formatted report line.
const LINE_CAP: usize = 64;

pub struct Monitor<A, P, S, D>
where
    A: AnalogSource,
    P: PwmBank,
    S: SerialSink,
    D: Delay,
{
    adc: A,
    leds: LedDriver<P>,
    serial: S,
    delay: D,
    config: Config,
    /// The only state carried across iterations.
    flash_on: bool,
}

impl<A, P, S, D> Monitor<A, P, S, D>
where
    A: AnalogSource,
    P: PwmBank,
    S: SerialSink,
    D: Delay,
{
    pub fn new(config: Config, adc: A, bank: P, serial: S, delay: D) -> Self {
        Self {
            adc,
            leds: LedDriver::new(bank),
            serial,
            delay,
            config,
            flash_on: false,
        }
    }

    /// One iteration: sample, derive, report, drive, toggle.
    pub fn step(&mut self) -> Report {
        let raw = self.adc.sample();
        trace!("raw sample: {}", raw);

        // remap the empirical window onto the gradient, clamping in case
        // truncation overshoots
        let mapped = clamp(
            remap(
                raw.into(),
                self.config.window.lo.into(),
                self.config.window.hi.into(),
                0,
                255,
            ),
            0,
            255,
        );

        let celsius = self.config.calibration.sample_to_celsius(raw);

        let report = Report {
            raw,
            mapped: mapped as u8,
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
        };

        let mut line: String<LINE_CAP> = String::new();
        if report.write_line(&mut line).is_ok() {
            self.serial.write_line(&line);
        }

        self.leds.drive_gradient(mapped);

        self.leds.set_flasher(self.flash_on);
        self.flash_on = !self.flash_on;

        report
    }

    /// Runs the loop forever at the configured period.
    pub fn run(&mut self) -> ! {
        info!("monitor loop starting");
        self.leds.all_off();

        loop {
            self.step();
            self.delay.delay_ms(self.config.flash_half_period_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::LedChannel;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::string::String as StdString;
    use std::vec::Vec;

    #[derive(Default)]
    struct Bus {
        sample: u16,
        levels: [u8; 4],
        lines: Vec<StdString>,
        delays: Vec<u32>,
    }

    #[derive(Clone)]
    struct Shared(Rc<RefCell<Bus>>);

    impl AnalogSource for Shared {
        fn sample(&mut self) -> u16 {
            self.0.borrow().sample
        }
    }

    impl PwmBank for Shared {
        fn write(&mut self, channel: LedChannel, level: u8) {
            self.0.borrow_mut().levels[channel as usize] = level;
        }
    }

    impl SerialSink for Shared {
        fn write_line(&mut self, line: &str) {
            self.0.borrow_mut().lines.push(line.into());
        }
    }

    impl Delay for Shared {
        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().delays.push(ms);
        }
    }

    fn monitor_on(bus: &Shared) -> Monitor<Shared, Shared, Shared, Shared> {
        Monitor::new(
            Config::default(),
            bus.clone(),
            bus.clone(),
            bus.clone(),
            bus.clone(),
        )
    }

    fn step_with(sample: u16) -> (Report, Shared) {
        let bus = Shared(Rc::new(RefCell::new(Bus {
            sample,
            ..Bus::default()
        })));
        let report = monitor_on(&bus).step();
        (report, bus)
    }

    #[test]
    fn window_floor_maps_to_zero() {
        let (report, bus) = step_with(530);
        assert_eq!(report.mapped, 0);
        let bus = bus.0.borrow();
        assert_eq!(bus.levels[LedChannel::Red as usize], 0);
        assert_eq!(bus.levels[LedChannel::Blue as usize], 255);
    }

    #[test]
    fn window_ceiling_maps_to_full() {
        let (report, bus) = step_with(591);
        assert_eq!(report.mapped, 255);
        let bus = bus.0.borrow();
        assert_eq!(bus.levels[LedChannel::Red as usize], 255);
        assert_eq!(bus.levels[LedChannel::Blue as usize], 0);
    }

    #[test]
    fn midwindow_maps_strictly_between() {
        let (report, _) = step_with(560);
        assert!(report.mapped > 0 && report.mapped < 255);
    }

    #[test]
    fn samples_outside_window_clamp() {
        let (low, _) = step_with(12);
        assert_eq!(low.mapped, 0);
        let (high, _) = step_with(1020);
        assert_eq!(high.mapped, 255);
    }

    #[test]
    fn one_line_logged_per_step() {
        let (_, bus) = step_with(550);
        let bus = bus.0.borrow();
        assert_eq!(bus.lines.len(), 1);
        let line = &bus.lines[0];
        assert!(line.starts_with("ADC= 550  Mapped= 83  T_C="));
        assert!(line.ends_with("\r\n"));
    }

    #[test]
    fn fahrenheit_tracks_celsius() {
        let (report, _) = step_with(700);
        let expected = report.celsius * 1.8 + 32.0;
        assert!((report.fahrenheit - expected).abs() < 1e-4);
    }

    #[test]
    fn flasher_alternates_from_off() {
        let bus = Shared(Rc::new(RefCell::new(Bus {
            sample: 550,
            ..Bus::default()
        })));
        let mut monitor = monitor_on(&bus);

        for n in 1..=8 {
            monitor.step();
            let driven = bus.0.borrow().levels[LedChannel::Flasher as usize];
            // iteration n drives the bit as it stood after n - 1 toggles
            let expected = if n % 2 == 1 { 0 } else { 255 };
            assert_eq!(driven, expected, "iteration {n}");
        }
    }
}
