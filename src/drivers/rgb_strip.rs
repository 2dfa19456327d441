//! RGB strip PWM driver.
//!
//! Three LEDC PWM channels (CH0-2) gate the red, green and blue MOSFETs
//! of the strip.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three LEDC PWM channels via hw_init.
//! On host/test: hw_init records the duty values in atomics.

use log::warn;

use crate::drivers::hw_init;
use crate::pins;

pub struct RgbStrip {
    current: (u32, u32, u32),
}

impl RgbStrip {
    pub fn new() -> Self {
        Self { current: (0, 0, 0) }
    }

    pub fn max_duty(&self) -> u32 {
        pins::PWM_MAX_DUTY
    }

    /// Write all three duties, clamped to the timer resolution.
    pub fn set_duty(&mut self, r: u32, g: u32, b: u32) {
        let max = self.max_duty();
        let (r, g, b) = (r.min(max), g.min(max), b.min(max));
        for (channel, duty) in [
            (hw_init::LEDC_CH_STRIP_R, r),
            (hw_init::LEDC_CH_STRIP_G, g),
            (hw_init::LEDC_CH_STRIP_B, b),
        ] {
            if let Err(e) = hw_init::ledc_set(channel, duty) {
                warn!("strip: LEDC channel {} write failed: {}", channel, e);
            }
        }
        self.current = (r, g, b);
    }

    pub fn off(&mut self) {
        self.set_duty(0, 0, 0);
    }

    pub fn current_duty(&self) -> (u32, u32, u32) {
        self.current
    }
}

impl Default for RgbStrip {
    fn default() -> Self {
        Self::new()
    }
}
