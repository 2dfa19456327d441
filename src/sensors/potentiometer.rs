//! Linear potentiometer on an ADC1 input.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC1 channel via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` per channel for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::pins;

#[cfg(not(target_os = "espidf"))]
const ADC1_CHANNELS: usize = 8;

/// Half-scale default so a host simulation starts at 50 % brightness.
#[cfg(not(target_os = "espidf"))]
static SIM_POT_ADC: [AtomicU16; ADC1_CHANNELS] =
    [const { AtomicU16::new(pins::ADC_FULL_SCALE / 2) }; ADC1_CHANNELS];

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pot_adc(channel: u32, raw: u16) {
    if let Some(slot) = SIM_POT_ADC.get(channel as usize) {
        slot.store(raw, Ordering::Relaxed);
    }
}

pub struct Potentiometer {
    channel: u32,
    _adc_gpio: i32,
}

impl Potentiometer {
    pub fn new(adc_gpio: i32, channel: u32) -> Self {
        Self {
            channel,
            _adc_gpio: adc_gpio,
        }
    }

    /// Raw 12-bit reading, `0..4096`.
    pub fn read_raw(&self) -> u16 {
        self.read_adc().min(pins::ADC_FULL_SCALE - 1)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_POT_ADC
            .get(self.channel as usize)
            .map_or(0, |slot| slot.load(Ordering::Relaxed))
    }
}
