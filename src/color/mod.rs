mod wheel;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;
pub use wheel::{color_from_angle, hue_from_degrees, wheel};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
