//! [`FrameSink`] adapter for `smart-leds` drivers

use heapless::Vec;
use smart_leds::{SmartLedsWrite, brightness};

use crate::{
    FrameSink,
    color::{BLACK, Rgb},
};

/// Frame sink on top of any [`SmartLedsWrite`] driver.
///
/// Pixels are buffered until [`FrameSink::present`], which writes the whole
/// buffer scaled by the global brightness. `N` bounds the buffer size.
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    frame: Vec<Rgb, N>,
    brightness: u8,
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a sink for `pixel_count` pixels, clamped to `N`.
    pub fn new(writer: W, pixel_count: usize, brightness: u8) -> Self {
        let mut frame = Vec::new();
        let _ = frame.resize(pixel_count.min(N), BLACK);
        Self {
            writer,
            frame,
            brightness,
        }
    }

    /// Currently buffered pixels, before brightness scaling
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> FrameSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = W::Error;

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u32 {
        self.frame.len() as u32
    }

    fn set_pixel(&mut self, index: u32, color: Rgb) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.frame.iter().copied(), self.brightness))
    }

    fn set_global_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
