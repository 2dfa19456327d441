//! The control loop, the hexagonal core.
//!
//! [`Controller`] owns the configuration, the rolling temperature history,
//! and the output helpers.  All I/O flows through port traits passed in
//! on every call, so the loop runs unchanged against real peripherals or
//! recording mocks.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │        Controller         │
//! ActuatorPort ◀──│ switches · sample · policy│
//!     DelayNs  ◀──└──────────────────────────┘
//! ```
//!
//! One iteration, in order: read switches, sample the thermocouple, take
//! the rising-edge baseline from the window, admit the sample, run the
//! policy for the mode.  Every policy blocks until it is done; switch
//! changes are only seen at the top of the next iteration.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::colour::{self, PALETTE};
use crate::config::ControllerConfig;
use crate::sensors::history::TemperatureHistory;
use crate::sensors::temperature::TemperatureSampler;

use super::events::AppEvent;
use super::mode::{Mode, Policy};
use super::output::{ColourOutput, hold};
use super::policies::GradientZone;
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// What one loop iteration observed and chose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    pub mode: Mode,
    pub policy: Option<Policy>,
    /// Loop-level reading (the one admitted to the history).
    pub fahrenheit: f32,
    /// Rising-edge baseline, taken before the reading was admitted.
    pub baseline: f32,
}

pub struct Controller {
    config: ControllerConfig,
    history: TemperatureHistory,
    sampler: TemperatureSampler,
    output: ColourOutput,
    last_mode: Option<Mode>,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        let sampler = TemperatureSampler::new(config.settle_ms);
        let output = ColourOutput::new(&config);
        Self {
            config,
            history: TemperatureHistory::new(),
            sampler,
            output,
            last_mode: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn history(&self) -> &TemperatureHistory {
        &self.history
    }

    pub fn output(&self) -> &ColourOutput {
        &self.output
    }

    /// Startup hold before the first iteration.
    pub fn start<D, E>(&mut self, delay: &mut D, sink: &mut E)
    where
        D: DelayNs,
        E: EventSink,
    {
        hold(delay, self.config.startup_delay_ms);
        sink.emit(&AppEvent::Started {
            startup_delay_ms: self.config.startup_delay_ms,
        });
    }

    /// Iterate forever.
    pub fn run<H, D, E>(&mut self, hw: &mut H, delay: &mut D, sink: &mut E) -> !
    where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
        E: EventSink,
    {
        info!("controller: entering control loop");
        loop {
            self.run_iteration(hw, delay, sink);
        }
    }

    /// One pass of the control loop.
    pub fn run_iteration<H, D, E>(
        &mut self,
        hw: &mut H,
        delay: &mut D,
        sink: &mut E,
    ) -> IterationReport
    where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
        E: EventSink,
    {
        let levels = hw.read_switch_levels();
        let mode = Mode::from_switch_levels(levels, self.config.switch_active_low);
        if self.last_mode != Some(mode) {
            sink.emit(&AppEvent::ModeChanged {
                from: self.last_mode,
                to: mode,
            });
            self.last_mode = Some(mode);
        }

        let fahrenheit = self.sampler.sample(hw, delay);
        let baseline = self.history.baseline(self.config.rising_edge_baseline);
        self.history.push(fahrenheit);
        sink.emit(&AppEvent::Sampled {
            fahrenheit,
            baseline,
            window_len: self.history.len(),
        });

        let policy = mode.policy();
        match policy {
            Some(Policy::BoundedBlink) => {
                self.gradient_with_blink(
                    hw,
                    delay,
                    sink,
                    self.config.test_hot_bound_f,
                    self.config.test_cold_bound_f,
                );
            }
            Some(Policy::RisingEdge) => {
                if fahrenheit > baseline {
                    sink.emit(&AppEvent::RisingEdge {
                        fahrenheit,
                        baseline,
                    });
                    self.output.set_colour(hw, colour::RED);
                } else {
                    self.gradient(
                        hw,
                        delay,
                        sink,
                        self.config.hot_bound_f,
                        self.config.cold_bound_f,
                    );
                }
            }
            Some(Policy::PaletteCycle) => self.palette_cycle(hw, delay),
            Some(Policy::FestiveBlink) => self.festive_blink(
                hw,
                delay,
                self.config.festive_cycles,
                self.config.festive_on_ms,
                self.config.festive_off_ms,
            ),
            None => sink.emit(&AppEvent::Unassigned(mode)),
        }

        IterationReport {
            mode,
            policy,
            fahrenheit,
            baseline,
        }
    }

    /// Fresh sample (not admitted to the history), shown as a gradient
    /// colour with no hold.
    pub fn gradient<H, D, E>(&self, hw: &mut H, delay: &mut D, sink: &mut E, hot: f32, cold: f32)
    where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
        E: EventSink,
    {
        let fahrenheit = self.sampler.sample(hw, delay);
        let colour = GradientZone::classify(fahrenheit, hot, cold).colour();
        sink.emit(&AppEvent::Gradient {
            fahrenheit,
            colour,
            blink_ms: 0,
        });
        self.output.set_colour(hw, colour);
    }

    /// Fresh sample shown as a gradient colour.  A nonzero blink hold
    /// blanks the strip for the hold, then shows the colour for the hold.
    pub fn gradient_with_blink<H, D, E>(
        &self,
        hw: &mut H,
        delay: &mut D,
        sink: &mut E,
        hot: f32,
        cold: f32,
    ) where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
        E: EventSink,
    {
        let fahrenheit = self.sampler.sample(hw, delay);
        let zone = GradientZone::classify(fahrenheit, hot, cold);
        let colour = zone.colour();
        let blink_ms = zone.blink_ms(self.config.blink_base_ms, self.config.min_blink_ratio);
        sink.emit(&AppEvent::Gradient {
            fahrenheit,
            colour,
            blink_ms,
        });

        if blink_ms != 0 {
            self.output.set_colour(hw, colour::BLACK);
            hold(delay, blink_ms);
        }
        self.output.set_colour(hw, colour);
        hold(delay, blink_ms);
    }

    /// Fade through every palette entry into the next, wrapping from the
    /// last back to the first.
    pub fn palette_cycle<H, D>(&self, hw: &mut H, delay: &mut D)
    where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
    {
        for (i, entry) in PALETTE.iter().enumerate() {
            let next = &PALETTE[(i + 1) % PALETTE.len()];
            self.output.fade(hw, delay, entry.colour, next.colour);
        }
    }

    /// `cycles` rounds of red, green, white held `on_ms` each, then black
    /// held `off_ms`.
    pub fn festive_blink<H, D>(
        &self,
        hw: &mut H,
        delay: &mut D,
        cycles: u32,
        on_ms: u32,
        off_ms: u32,
    ) where
        H: SensorPort + ActuatorPort,
        D: DelayNs,
    {
        for _ in 0..cycles {
            for rgb in [colour::RED, colour::GREEN, colour::WHITE] {
                self.output.set_colour(hw, rgb);
                hold(delay, on_ms);
            }
            self.output.set_colour(hw, colour::BLACK);
            hold(delay, off_ms);
        }
    }
}
