use crate::color::{BLACK, Rgb};

/// Light pixels `[0, cursor)` with `color` and blank the rest.
///
/// A cursor of zero clears the whole strip, which closes the wipe cycle.
pub fn render_color_wipe(cursor: u32, color: Rgb, leds: &mut [Rgb]) {
    let lit = usize::try_from(cursor).unwrap_or(usize::MAX).min(leds.len());
    let (head, tail) = leds.split_at_mut(lit);
    head.fill(color);
    tail.fill(BLACK);
}
