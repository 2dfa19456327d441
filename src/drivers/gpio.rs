//! `embedded-hal` pin handles over the raw `hw_init` GPIO accessors.
//!
//! Lets generic drivers such as [`Max6675`](super::max6675::Max6675) run
//! on pins that `hw_init` configured, on target and in host simulation
//! alike.  Register access cannot fail once a pin is configured, so the
//! error type is [`Infallible`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::drivers::hw_init;

/// A GPIO configured as an input by `hw_init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioInput(i32);

impl GpioInput {
    pub fn new(gpio: i32) -> Self {
        Self(gpio)
    }
}

impl ErrorType for GpioInput {
    type Error = Infallible;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(hw_init::gpio_read(self.0))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!hw_init::gpio_read(self.0))
    }
}

/// A GPIO configured as a push-pull output by `hw_init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioOutput(i32);

impl GpioOutput {
    pub fn new(gpio: i32) -> Self {
        Self(gpio)
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.0, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.0, true);
        Ok(())
    }
}
