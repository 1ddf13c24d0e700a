use crate::color::{Hsv, Rgb, hsv2rgb};

/// Map a 0-255 position onto the color wheel.
///
/// The wheel is made of three linear 85-step segments: position 0 is pure
/// green, 85 is pure red and 170 is pure blue.
pub const fn wheel(pos: u8) -> Rgb {
    match pos {
        0..85 => Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        },
        85..170 => {
            let pos = pos - 85;
            Rgb {
                r: 255 - pos * 3,
                g: 0,
                b: pos * 3,
            }
        }
        _ => {
            let pos = pos - 170;
            Rgb {
                r: 0,
                g: pos * 3,
                b: 255 - pos * 3,
            }
        }
    }
}

/// Convert an angle in degrees to a hue on the 0-255 circle.
///
/// Any angle is accepted, negative values and full turns wrap around.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_from_degrees(angle: f32) -> u8 {
    let mut wrapped = libm::fmodf(angle, 360.0);
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // `as` saturates, so a value rounded up to 360.0 still lands on 255
    (wrapped * 256.0 / 360.0) as u8
}

/// Fully saturated, full value color for the given angle.
pub fn color_from_angle(angle: f32) -> Rgb {
    hsv2rgb(Hsv {
        hue: hue_from_degrees(angle),
        sat: 255,
        val: 255,
    })
}
