//! Pure colour-policy arithmetic: temperature → colour and blink timing.
//!
//! Nothing here touches a port; the
//! [`Controller`](super::controller::Controller) samples, calls into this
//! module, and drives the strip with the result.

use crate::colour::{GREEN, RED, Rgb};

/// Where a reading falls relative to a pair of gradient bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientZone {
    /// At or below the cold bound, or not a number.
    Cold,
    /// At or above the hot bound.
    Hot,
    /// Strictly between; carries `(T - cold) / (hot - cold)`.
    Between(f32),
}

impl GradientZone {
    /// Classify `fahrenheit` against `hot` / `cold`.
    ///
    /// The cold test runs first.  With inverted bounds (`cold > hot`)
    /// nothing lands in [`Between`](Self::Between): readings up to `cold`
    /// are cold and anything above is hot.  A NaN reading fails both
    /// comparisons and is reported cold.
    pub fn classify(fahrenheit: f32, hot: f32, cold: f32) -> Self {
        if fahrenheit <= cold {
            Self::Cold
        } else if fahrenheit >= hot {
            Self::Hot
        } else {
            let ratio = (fahrenheit - cold) / (hot - cold);
            if ratio.is_finite() {
                Self::Between(ratio.clamp(0.0, 1.0))
            } else {
                Self::Cold
            }
        }
    }

    /// Green when cold, red when hot, a red/green mix in between.
    pub fn colour(self) -> Rgb {
        match self {
            Self::Cold => GREEN,
            Self::Hot => RED,
            Self::Between(ratio) => (
                (ratio * 255.0).round() as u8,
                ((1.0 - ratio) * 255.0).round() as u8,
                0,
            ),
        }
    }

    /// Blink hold in milliseconds: zero when cold, `base_ms` when hot,
    /// `base_ms / ratio` in between.  The ratio is floored at
    /// `min_ratio` so a reading just above the cold bound cannot demand
    /// an unbounded hold.
    pub fn blink_ms(self, base_ms: f32, min_ratio: f32) -> u32 {
        match self {
            Self::Cold => 0,
            Self::Hot => base_ms as u32,
            Self::Between(ratio) => (base_ms / ratio.max(min_ratio)) as u32,
        }
    }
}
