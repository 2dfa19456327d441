//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (UART in production).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { startup_delay_ms } => {
                info!("START | after {} ms hold", startup_delay_ms);
            }
            AppEvent::ModeChanged { from: Some(from), to } => {
                info!("MODE  | {} -> {}", from, to);
            }
            AppEvent::ModeChanged { from: None, to } => {
                info!("MODE  | initial {}", to);
            }
            AppEvent::Sampled {
                fahrenheit,
                baseline,
                window_len,
            } => {
                info!(
                    "TEMP  | {:.2}\u{00b0}F | baseline={:.2} | window={}",
                    fahrenheit, baseline, window_len
                );
            }
            AppEvent::RisingEdge {
                fahrenheit,
                baseline,
            } => {
                info!("EDGE  | {:.2}\u{00b0}F > {:.2}, forcing red", fahrenheit, baseline);
            }
            AppEvent::Gradient {
                fahrenheit,
                colour,
                blink_ms,
            } => {
                debug!(
                    "GRAD  | {:.2}\u{00b0}F -> rgb({}, {}, {}) blink={} ms",
                    fahrenheit, colour.0, colour.1, colour.2, blink_ms
                );
            }
            AppEvent::Unassigned(mode) => {
                debug!("MODE  | {} has no policy, idle", mode);
            }
        }
    }
}
