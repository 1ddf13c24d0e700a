//! Breathing brightness for the pulse pattern

use embassy_time::Instant;

/// Angular speed of the breathing wave, in radians per second.
const PULSE_SPEED: f64 = 2.0;

/// Transient global brightness for a pulse frame rendered at `now`.
///
/// Follows `floor((sin(2t) + 1) * 127.5)` where `t` is in seconds, so it
/// sweeps the full 0-255 range roughly every three seconds.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn pulse_brightness(now: Instant) -> u8 {
    let seconds = now.as_micros() as f64 / 1_000_000.0;
    let level = libm::floor((libm::sin(PULSE_SPEED * seconds) + 1.0) * 127.5);
    level.clamp(0.0, 255.0) as u8
}
