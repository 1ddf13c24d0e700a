#![allow(dead_code)]

use glowstrip::{AnimationConfig, AnimationStore, FrameSink, Instant, Rgb};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentFailed;

/// A frame as it was pushed to the hardware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedFrame {
    pub pixels: Vec<Rgb>,
    pub brightness: u8,
}

/// Sink that records every presented frame
#[derive(Debug, Default)]
pub struct MockSink {
    pub pixels: Vec<Rgb>,
    pub brightness: u8,
    pub presented: Vec<PresentedFrame>,
    pub fail_present: bool,
}

impl MockSink {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            pixels: vec![BLACK; pixel_count],
            ..Self::default()
        }
    }

    pub fn failing(pixel_count: usize) -> Self {
        Self {
            fail_present: true,
            ..Self::new(pixel_count)
        }
    }

    pub fn last_frame(&self) -> &PresentedFrame {
        self.presented.last().expect("no frame presented")
    }
}

impl FrameSink for MockSink {
    type Error = PresentFailed;

    fn pixel_count(&self) -> u32 {
        self.pixels.len() as u32
    }

    fn set_pixel(&mut self, index: u32, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index as usize) {
            *pixel = color;
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        if self.fail_present {
            return Err(PresentFailed);
        }
        self.presented.push(PresentedFrame {
            pixels: self.pixels.clone(),
            brightness: self.brightness,
        });
        Ok(())
    }

    fn set_global_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}

pub fn store_with_pixels(pixel_count: usize) -> AnimationStore<MockSink> {
    AnimationStore::new(MockSink::new(pixel_count), &AnimationConfig::default())
}

pub fn last_frame(store: &AnimationStore<MockSink>) -> PresentedFrame {
    store.with_sink(|sink| sink.last_frame().clone())
}

pub fn presented_count(store: &AnimationStore<MockSink>) -> usize {
    store.with_sink(|sink| sink.presented.len())
}

pub fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
