use crate::color::{BLACK, Rgb};

const SPACING: usize = 3;

/// Light every third pixel starting at `cursor`, blank the others.
pub fn render_theater_chase(cursor: u32, color: Rgb, leds: &mut [Rgb]) {
    let phase = usize::try_from(cursor).unwrap_or(0) % SPACING;
    for (i, led) in leds.iter_mut().enumerate() {
        *led = if i % SPACING == phase { color } else { BLACK };
    }
}
