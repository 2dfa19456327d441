//! Colour output: brightness-scaled writes and blocking fades.
//!
//! Every write samples the brightness potentiometer afresh, so turning the
//! knob takes effect on the next step of a fade rather than the next loop
//! iteration.

use embedded_hal::delay::DelayNs;

use crate::colour::{self, Rgb};
use crate::config::ControllerConfig;

use super::ports::{ActuatorPort, SensorPort};

/// Block for `ms`, skipping zero-length holds.
pub(crate) fn hold<D: DelayNs>(delay: &mut D, ms: u32) {
    if ms > 0 {
        delay.delay_ms(ms);
    }
}

/// Duty level for one channel at `brightness` on a `max_duty` timer.
///
/// Truncates like the integer PWM write it feeds; NaN and negative
/// products collapse to zero.
pub fn scale_channel(channel: u8, brightness: f32, max_duty: u32) -> u32 {
    let duty = f32::from(channel) * brightness * (max_duty as f32 / 255.0);
    (duty as u32).min(max_duty)
}

pub struct ColourOutput {
    brightness_full_scale: f32,
    fade_steps: u32,
    fade_step_ms: u32,
}

impl ColourOutput {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            brightness_full_scale: config.brightness_full_scale,
            fade_steps: config.fade_steps.max(1),
            fade_step_ms: config.fade_step_ms(),
        }
    }

    /// Current brightness scalar in `0.0..=1.0`.
    pub fn brightness<S: SensorPort>(&self, sensor: &mut S) -> f32 {
        let raw = f32::from(sensor.read_brightness_raw());
        (raw / self.brightness_full_scale).clamp(0.0, 1.0)
    }

    /// Show `rgb` immediately at the live brightness.
    pub fn set_colour<H>(&self, hw: &mut H, rgb: Rgb)
    where
        H: SensorPort + ActuatorPort,
    {
        let brightness = self.brightness(hw);
        let max = hw.max_duty();
        hw.write_duty(
            scale_channel(rgb.0, brightness, max),
            scale_channel(rgb.1, brightness, max),
            scale_channel(rgb.2, brightness, max),
        );
    }

    /// Step linearly from `from` to `to`, both endpoints included, holding
    /// each step for the per-step interval.  Blocks for the whole fade.
    pub fn fade<H, D>(&self, hw: &mut H, delay: &mut D, from: Rgb, to: Rgb)
    where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
    {
        for step in 0..=self.fade_steps {
            self.set_colour(hw, colour::lerp_step(from, to, step, self.fade_steps));
            hold(delay, self.fade_step_ms);
        }
    }

    /// Writes performed by one [`fade`](Self::fade).
    pub fn writes_per_fade(&self) -> u32 {
        self.fade_steps + 1
    }
}
