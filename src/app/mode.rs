//! Mode selection from the switch bank.
//!
//! | Mode | Policy                                    |
//! |------|-------------------------------------------|
//! | 0    | [`Policy::BoundedBlink`]                  |
//! | 1    | [`Policy::RisingEdge`]                    |
//! | 2    | [`Policy::PaletteCycle`]                  |
//! | 3    | [`Policy::FestiveBlink`]                  |
//! | 4–7  | unassigned, the loop does nothing         |

use core::fmt;

use super::ports::SwitchLevels;

/// Colour policy selected by a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Gradient with blink over the narrow test bounds.
    BoundedBlink,
    /// Solid red on a rising reading, else the plain gradient.
    RisingEdge,
    /// Fade through the palette once.
    PaletteCycle,
    /// Fixed red/green/white flash sequence.
    FestiveBlink,
}

/// 3-bit selector, `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mode(u8);

impl Mode {
    /// Keep the low three bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn policy(self) -> Option<Policy> {
        match self.0 {
            0 => Some(Policy::BoundedBlink),
            1 => Some(Policy::RisingEdge),
            2 => Some(Policy::PaletteCycle),
            3 => Some(Policy::FestiveBlink),
            _ => None,
        }
    }

    /// Decode raw switch levels as wired on the board.
    ///
    /// The packer is fed switch 3 first, so switch 3 is the most
    /// significant bit and switch 1 the least.  This is how the shipped
    /// Arduino firmware calls its packer (switch 3, 2, 1), not the
    /// switch-1-high order the packer's own argument names suggest.
    pub fn from_switch_levels(levels: SwitchLevels, active_low: bool) -> Self {
        let [s1, s2, s3] = levels.map(|level| is_active(level, active_low));
        pack_mode(s3, s2, s1)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0b{:03b})", self.0, self.0)
    }
}

/// Whether a raw level means "switch closed".
pub const fn is_active(level: bool, active_low: bool) -> bool {
    if active_low { !level } else { level }
}

/// Bit 2 from `first`, bit 1 from `second`, bit 0 from `third`.
pub const fn pack_mode(first: bool, second: bool, third: bool) -> Mode {
    Mode(((first as u8) << 2) | ((second as u8) << 1) | (third as u8))
}
