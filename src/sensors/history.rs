//! Rolling window of recent thermocouple readings.
//!
//! Backed by a fixed-capacity [`heapless::HistoryBuffer`]: pushing into a
//! full window overwrites the oldest reading, so the window never holds
//! more than [`HISTORY_CAP`] entries and never allocates.

use heapless::HistoryBuffer;

use crate::config::RisingEdgeBaseline;

/// Number of readings kept.
pub const HISTORY_CAP: usize = 5;

pub struct TemperatureHistory {
    window: HistoryBuffer<f32, HISTORY_CAP>,
}

impl TemperatureHistory {
    pub fn new() -> Self {
        Self {
            window: HistoryBuffer::new(),
        }
    }

    /// Admit a reading, evicting the oldest once the window is full.
    pub fn push(&mut self, fahrenheit: f32) {
        self.window.write(fahrenheit);
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.window.len() == HISTORY_CAP
    }

    /// Oldest reading still held.
    pub fn oldest(&self) -> Option<f32> {
        self.window.oldest_ordered().next().copied()
    }

    /// Newest reading.
    pub fn latest(&self) -> Option<f32> {
        self.window.recent().copied()
    }

    /// Readings from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.window.oldest_ordered().copied()
    }

    /// Sum over all [`HISTORY_CAP`] slots.  Slots not yet written count
    /// as `0.0`, so a partly filled window sums low.
    pub fn window_sum(&self) -> f32 {
        self.iter().sum()
    }

    /// Mean of the held readings; `None` while empty.
    pub fn average(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        Some(self.window_sum() / self.len() as f32)
    }

    /// Reference value for the rising-edge comparison.
    ///
    /// An empty window yields `0.0` for every variant.
    pub fn baseline(&self, kind: RisingEdgeBaseline) -> f32 {
        match kind {
            RisingEdgeBaseline::WindowSum => self.window_sum(),
            RisingEdgeBaseline::WindowAverage => self.average().unwrap_or(0.0),
            RisingEdgeBaseline::OldestRepeated => {
                self.oldest().unwrap_or(0.0) * HISTORY_CAP as f32
            }
        }
    }
}

impl Default for TemperatureHistory {
    fn default() -> Self {
        Self::new()
    }
}
