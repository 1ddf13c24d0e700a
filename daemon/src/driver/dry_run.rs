use std::convert::Infallible;

use glowstrip::Rgb;
use smart_leds::SmartLedsWrite;

/// `smart-leds` writer that logs frames instead of driving hardware.
#[derive(Debug, Default)]
pub struct LogWriter {
    frames: u64,
}

impl SmartLedsWrite for LogWriter {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames += 1;
        if !log::log_enabled!(log::Level::Trace) {
            return Ok(());
        }

        let pixels: Vec<Rgb> = iterator.into_iter().map(Into::into).collect();
        let lit = pixels.iter().filter(|pixel| **pixel != Rgb::default()).count();
        let first = pixels.first().copied().unwrap_or_default();
        log::trace!(
            "frame #{}: {}/{} lit, first=({},{},{})",
            self.frames,
            lit,
            pixels.len(),
            first.r,
            first.g,
            first.b
        );
        Ok(())
    }
}
