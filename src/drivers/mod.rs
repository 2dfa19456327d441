//! Peripheral drivers and hardware initialisation.

pub mod gpio;
pub mod hw_init;
pub mod max6675;
pub mod rgb_strip;
pub mod switches;
