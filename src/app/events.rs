//! Outbound application events.
//!
//! The [`Controller`](super::controller::Controller) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  They carry what the
//! serial console shows; nothing depends on them for control.

use crate::colour::Rgb;

use super::mode::Mode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The controller finished its startup hold.
    Started { startup_delay_ms: u32 },

    /// The switch bank selects a different mode than last iteration.
    /// `from` is `None` on the first iteration.
    ModeChanged { from: Option<Mode>, to: Mode },

    /// A loop-level reading and the baseline it was compared against.
    Sampled {
        fahrenheit: f32,
        baseline: f32,
        window_len: usize,
    },

    /// The rising-edge policy forced solid red.
    RisingEdge { fahrenheit: f32, baseline: f32 },

    /// A gradient policy resolved a colour (and blink hold, 0 if none).
    Gradient {
        fahrenheit: f32,
        colour: Rgb,
        blink_ms: u32,
    },

    /// The selected mode has no policy; the iteration did nothing.
    Unassigned(Mode),
}
