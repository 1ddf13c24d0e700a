//! Pattern renderers
//!
//! Every renderer is a pure function of its arguments: it fills the given
//! slice (one entry per pixel) and keeps no state between frames.

mod color_wipe;
mod pulse;
mod rainbow;
mod static_color;
mod theater_chase;

pub use color_wipe::render_color_wipe;
pub use pulse::pulse_brightness;
pub use rainbow::render_rainbow;
pub use static_color::{render_off, render_solid};
pub use theater_chase::render_theater_chase;

use crate::{color::Rgb, mode::Mode};

/// Render one frame of `mode` into `leds`.
///
/// `Pulse` draws the same pixels as `Solid`; its breathing comes from the
/// global brightness, see [`pulse_brightness`].
pub fn render(mode: Mode, cursor: u32, color: Rgb, leds: &mut [Rgb]) {
    match mode {
        Mode::Off => render_off(leds),
        Mode::Solid | Mode::Pulse => render_solid(color, leds),
        Mode::Rainbow => render_rainbow(cursor, leds),
        Mode::ColorWipe => render_color_wipe(cursor, color, leds),
        Mode::TheaterChase => render_theater_chase(cursor, color, leds),
    }
}
