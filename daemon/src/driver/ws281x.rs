//! Raspberry Pi strip driver on top of `rpi_ws281x`

use glowstrip::{FrameSink, Rgb};
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType};

use super::DriverError;
use crate::config::StripConfig;

pub struct Ws281xSink {
    controller: Controller,
    channel: usize,
}

// SAFETY: the controller owns its DMA buffers and is not tied to the thread
// that created it. The animation store serializes every access.
unsafe impl Send for Ws281xSink {}

impl Ws281xSink {
    pub fn new(config: &StripConfig) -> Result<Self, DriverError> {
        let count = i32::try_from(config.count)
            .map_err(|_| DriverError::Ws281x(format!("invalid LED_COUNT {}", config.count)))?;
        let channel = ChannelBuilder::new()
            .pin(config.pin)
            .count(count)
            .strip_type(StripType::Ws2812)
            .brightness(config.brightness)
            .invert(config.invert)
            .build();
        let controller = ControllerBuilder::new()
            .freq(config.freq_hz)
            .dma(config.dma)
            .channel(config.channel, channel)
            .build()
            .map_err(|err| DriverError::Ws281x(format!("{err:?}")))?;

        Ok(Self {
            controller,
            channel: config.channel,
        })
    }
}

impl FrameSink for Ws281xSink {
    type Error = DriverError;

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u32 {
        self.controller.leds(self.channel).len() as u32
    }

    fn set_pixel(&mut self, index: u32, color: Rgb) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if let Some(led) = self.controller.leds_mut(self.channel).get_mut(index) {
            // The controller expects BGRW byte order.
            *led = [color.b, color.g, color.r, 0];
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.controller
            .render()
            .map_err(|err| DriverError::Ws281x(format!("{err:?}")))
    }

    fn set_global_brightness(&mut self, level: u8) {
        self.controller.set_brightness(self.channel, level);
    }
}
