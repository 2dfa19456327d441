//! Sensor-side helpers: the rolling temperature window, the settle-aware
//! sampler, and the potentiometer ADC reader.

pub mod history;
pub mod potentiometer;
pub mod temperature;
