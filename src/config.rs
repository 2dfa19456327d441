//! Controller configuration parameters
//!
//! Every tunable of the strip controller, compiled in.  Nothing here is
//! persisted; the struct exists so the loop receives its constants
//! explicitly and so tests can run with shortened timings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// What the rising-edge policy compares the fresh reading against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RisingEdgeBaseline {
    /// Sum over all five history slots; empty slots count as `0.0`.
    WindowSum,
    /// Mean of the readings actually held in the window.
    WindowAverage,
    /// Oldest held reading multiplied by the window capacity.  This is
    /// what the shipped Arduino firmware computes.
    OldestRepeated,
}

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Temperature gradient (mode 1) ---
    /// Reading (°F) at or above which the strip is solid red.
    pub hot_bound_f: f32,
    /// Reading (°F) at or below which the strip is solid green.
    ///
    /// Ships above `hot_bound_f`, so mode 1 never interpolates: anything
    /// at or below 250 °F is green and anything above is red.
    pub cold_bound_f: f32,

    // --- Bounded-range blink (mode 0) ---
    pub test_hot_bound_f: f32,
    pub test_cold_bound_f: f32,
    /// Blink half-period at the hot extreme (milliseconds).
    pub blink_base_ms: f32,
    /// Floor applied to the gradient ratio before dividing `blink_base_ms`.
    pub min_blink_ratio: f32,

    // --- Rising edge (mode 1) ---
    pub rising_edge_baseline: RisingEdgeBaseline,

    // --- Fade (mode 2) ---
    /// Total duration of one palette transition (milliseconds).
    pub fade_time_ms: u32,
    /// Number of interpolation intervals per transition.
    pub fade_steps: u32,

    // --- Fixed blink sequence (mode 3) ---
    pub festive_cycles: u32,
    pub festive_on_ms: u32,
    pub festive_off_ms: u32,

    // --- Timing ---
    /// Hold after every thermocouple read.  The MAX6675 needs ~250 ms
    /// between conversions.
    pub settle_ms: u32,
    /// Delay after peripheral setup before the first loop iteration.
    pub startup_delay_ms: u32,

    // --- Inputs ---
    pub switch_active_low: bool,
    /// Divisor turning a raw brightness reading into `0.0..=1.0`.
    pub brightness_full_scale: f32,
}

impl ControllerConfig {
    /// Per-step sleep during a fade.
    pub fn fade_step_ms(&self) -> u32 {
        self.fade_time_ms / self.fade_steps.max(1)
    }

    /// Longest hold the bounded-range blink can produce.
    pub fn max_blink_ms(&self) -> u32 {
        (self.blink_base_ms / self.min_blink_ratio) as u32
    }

    /// Reject values that would divide by zero or stall the loop.
    pub fn validate(&self) -> Result<()> {
        if self.fade_steps == 0 {
            return Err(Error::Config("fade_steps must be non-zero"));
        }
        if !(self.min_blink_ratio > 0.0 && self.min_blink_ratio <= 1.0) {
            return Err(Error::Config("min_blink_ratio must be in (0, 1]"));
        }
        if !(self.blink_base_ms >= 0.0 && self.blink_base_ms.is_finite()) {
            return Err(Error::Config("blink_base_ms must be finite and non-negative"));
        }
        if !(self.brightness_full_scale > 0.0) {
            return Err(Error::Config("brightness_full_scale must be positive"));
        }
        if !(self.test_cold_bound_f < self.test_hot_bound_f) {
            return Err(Error::Config("test bounds must satisfy cold < hot"));
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Gradient
            hot_bound_f: 150.0,
            cold_bound_f: 250.0,

            // Bounded-range blink
            test_hot_bound_f: 80.0,
            test_cold_bound_f: 70.0,
            blink_base_ms: 200.0,
            min_blink_ratio: 0.0625, // 1/16, caps a blink at 3.2 s

            // Rising edge
            rising_edge_baseline: RisingEdgeBaseline::WindowSum,

            // Fade
            fade_time_ms: 1000,
            fade_steps: 100,

            // Fixed blink
            festive_cycles: 10,
            festive_on_ms: 400,
            festive_off_ms: 0,

            // Timing
            settle_ms: 500,
            startup_delay_ms: 500,

            // Inputs
            switch_active_low: pins::SWITCH_ACTIVE_LOW,
            brightness_full_scale: pins::ADC_FULL_SCALE as f32,
        }
    }
}
