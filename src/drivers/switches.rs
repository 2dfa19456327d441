//! Three-position mode switch bank.
//!
//! Plain level reads, no debouncing: the loop samples the switches once
//! per iteration and every iteration spends at least one thermocouple
//! settle interval blocked, far longer than any contact bounce.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::SwitchLevels;

pub struct ModeSwitches<P> {
    pins: [P; 3],
}

impl<P: InputPin> ModeSwitches<P> {
    /// `pins` in physical order: switch 1, switch 2, switch 3.
    pub fn new(pins: [P; 3]) -> Self {
        Self { pins }
    }

    /// Raw levels, `true` = HIGH.  A pin that fails to read is reported
    /// HIGH, i.e. open under pull-up wiring.
    pub fn read_levels(&mut self) -> SwitchLevels {
        let mut levels = [true; 3];
        for (i, pin) in self.pins.iter_mut().enumerate() {
            levels[i] = pin.is_high().unwrap_or_else(|_| {
                warn!("switch {}: read failed, treating as open", i + 1);
                true
            });
        }
        levels
    }
}
