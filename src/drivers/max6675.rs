//! MAX6675 K-type thermocouple-to-digital converter, bit-banged.
//!
//! The chip is read-only: pulling CS low freezes the latest conversion and
//! clocks out a 16-bit frame MSB first on SO.
//!
//! ```text
//!  D15   D14..D3        D2      D1    D0
//!  dummy 12-bit temp    open    id    tri-state
//!        (0.25 C/LSB)   (1 = no thermocouple)
//! ```
//!
//! Releasing CS starts the next conversion, which takes up to 220 ms.
//! Pacing reads is the caller's job (see
//! [`TemperatureSampler`](crate::sensors::temperature::TemperatureSampler)).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::SensorError;

/// Half clock period while shifting bits out.
const CLOCK_HALF_PERIOD_US: u32 = 10;
/// Open-thermocouple flag.
const OPEN_BIT: u16 = 1 << 2;
const CELSIUS_PER_LSB: f32 = 0.25;

/// A decoded conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermocoupleReading {
    pub raw: u16,
    pub celsius: f32,
}

impl ThermocoupleReading {
    pub fn fahrenheit(&self) -> f32 {
        celsius_to_fahrenheit(self.celsius)
    }
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Decode one 16-bit frame.
pub fn decode_frame(raw: u16) -> Result<ThermocoupleReading, SensorError> {
    if raw & OPEN_BIT != 0 {
        return Err(SensorError::OpenThermocouple);
    }
    Ok(ThermocoupleReading {
        raw,
        celsius: f32::from(raw >> 3) * CELSIUS_PER_LSB,
    })
}

pub struct Max6675<CLK, CS, SO, D> {
    clk: CLK,
    cs: CS,
    so: SO,
    delay: D,
}

impl<CLK, CS, SO, D> Max6675<CLK, CS, SO, D>
where
    CLK: OutputPin,
    CS: OutputPin,
    SO: InputPin,
    D: DelayNs,
{
    /// Take ownership of the bus pins and park CS high (idle).
    pub fn new(clk: CLK, mut cs: CS, so: SO, delay: D) -> Result<Self, SensorError> {
        cs.set_high().map_err(|_| SensorError::BusFault)?;
        Ok(Self { clk, cs, so, delay })
    }

    /// Clock out one frame and decode it.
    pub fn read(&mut self) -> Result<ThermocoupleReading, SensorError> {
        let raw = self.read_frame()?;
        decode_frame(raw)
    }

    pub fn read_fahrenheit(&mut self) -> Result<f32, SensorError> {
        self.read().map(|r| r.fahrenheit())
    }

    fn read_frame(&mut self) -> Result<u16, SensorError> {
        self.cs.set_low().map_err(|_| SensorError::BusFault)?;
        self.delay.delay_us(CLOCK_HALF_PERIOD_US);

        let frame = self.shift_in();

        // Always release CS so the next conversion starts, even on a bus fault.
        let released = self.cs.set_high().map_err(|_| SensorError::BusFault);
        let frame = frame?;
        released?;
        Ok(frame)
    }

    fn shift_in(&mut self) -> Result<u16, SensorError> {
        let mut frame: u16 = 0;
        for _ in 0..16 {
            self.clk.set_low().map_err(|_| SensorError::BusFault)?;
            self.delay.delay_us(CLOCK_HALF_PERIOD_US);
            let bit = self.so.is_high().map_err(|_| SensorError::BusFault)?;
            frame = (frame << 1) | u16::from(bit);
            self.clk.set_high().map_err(|_| SensorError::BusFault)?;
            self.delay.delay_us(CLOCK_HALF_PERIOD_US);
        }
        Ok(frame)
    }
}
