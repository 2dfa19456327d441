//! Colour primitives and the fixed cycling palette.

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const RED: Rgb = (255, 0, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const WHITE: Rgb = (255, 255, 255);

/// A named palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub colour: Rgb,
}

const fn entry(name: &'static str, colour: Rgb) -> PaletteEntry {
    PaletteEntry { name, colour }
}

/// Colours visited, in order, by the palette-cycle policy.
pub const PALETTE: [PaletteEntry; 9] = [
    entry("red", RED),
    entry("orange", (255, 160, 16)),
    entry("yellow", (255, 255, 0)),
    entry("green", GREEN),
    entry("cyan", (0, 255, 255)),
    entry("blue", (0, 0, 255)),
    entry("magenta", (255, 0, 255)),
    entry("hot pink", (255, 105, 180)),
    entry("white", WHITE),
];

/// Arduino-style integer range map with truncating division.
///
/// Works in `i64` so any `u32` step count times a channel span fits.
/// `in_min == in_max` returns `out_min` instead of dividing by zero.
pub fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    let span = in_max - in_min;
    if span == 0 {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / span + out_min
}

/// Colour at step `step` of `steps` on a straight line from `from` to `to`.
/// Each channel is mapped independently.
pub fn lerp_step(from: Rgb, to: Rgb, step: u32, steps: u32) -> Rgb {
    let channel = |a: u8, b: u8| {
        let mapped = map_range(i64::from(step), 0, i64::from(steps), i64::from(a), i64::from(b));
        mapped.clamp(0, 255) as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
