//! Paced thermocouple sampling.
//!
//! The MAX6675 restarts a conversion every time CS is released and needs
//! ~220 ms to finish it; reading again sooner returns the previous
//! conversion or garbage.  [`TemperatureSampler`] therefore follows every
//! read with an unconditional settle hold.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::app::ports::SensorPort;

pub struct TemperatureSampler {
    settle_ms: u32,
}

impl TemperatureSampler {
    pub fn new(settle_ms: u32) -> Self {
        Self { settle_ms }
    }

    /// Read once in °F, then block for the settle interval.
    ///
    /// Faults come back as `f32::NAN` from the sensor port and are passed
    /// through untouched.
    pub fn sample<S, D>(&self, sensor: &mut S, delay: &mut D) -> f32
    where
        S: SensorPort,
        D: DelayNs,
    {
        let fahrenheit = sensor.read_fahrenheit();
        debug!("thermocouple: {:.2}F", fahrenheit);
        delay.delay_ms(self.settle_ms);
        fahrenheit
    }
}
