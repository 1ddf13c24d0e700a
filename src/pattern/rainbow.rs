//! Rainbow cycling pattern
//!
//! Spreads one full revolution of the color wheel over the strip and
//! rotates it by the cursor. The selected color is ignored.

use crate::color::{Rgb, wheel};

/// Render the rainbow with hue offset `cursor`.
///
/// Only `cursor mod 256` matters, so the pattern repeats every 256 steps.
#[allow(clippy::cast_possible_truncation)]
pub fn render_rainbow(cursor: u32, leds: &mut [Rgb]) {
    if leds.is_empty() {
        return;
    }

    let count = leds.len() as u64;
    let offset = u64::from(cursor % 256);
    for (i, led) in (0..count).zip(leds.iter_mut()) {
        let pos = (i * 256 / count + offset) % 256;
        *led = wheel(pos as u8);
    }
}
