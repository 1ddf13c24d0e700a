use crate::color::{BLACK, Rgb};

/// Blank every pixel.
pub fn render_off(leds: &mut [Rgb]) {
    leds.fill(BLACK);
}

/// Fill every pixel with one color.
pub fn render_solid(color: Rgb, leds: &mut [Rgb]) {
    leds.fill(color);
}
