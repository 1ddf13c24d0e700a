//! Strip drivers
//!
//! All drivers are stored in an enum so the animation store stays generic
//! over a single [`FrameSink`] type.

mod dry_run;
#[cfg(feature = "ws281x")]
mod ws281x;

use std::fmt::Display;

use clap::ValueEnum;
use glowstrip::{AnimationStore, FrameSink, Rgb, SmartLedsSink};

pub use dry_run::LogWriter;

use crate::config::StripConfig;

/// Upper bound of pixels a strip may have.
pub const MAX_LEDS: usize = glowstrip::DEFAULT_MAX_LEDS;

/// Animation store bound to the configured strip
pub type Store = AnimationStore<Strip, MAX_LEDS>;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[cfg(not(feature = "ws281x"))]
    #[error("Driver `{0}` is not compiled in, rebuild with `--features {0}`")]
    Unavailable(DriverKind),
    #[cfg(feature = "ws281x")]
    #[error("ws281x: {0}")]
    Ws281x(String),
}

#[derive(ValueEnum, Copy, Clone, PartialEq, Eq, Debug)]
#[value(rename_all = "kebab-case")]
pub enum DriverKind {
    /// Log frames instead of driving hardware
    DryRun,
    /// Raspberry Pi PWM/DMA driver
    Ws281x,
}

impl DriverKind {
    #[cfg(feature = "ws281x")]
    pub const DEFAULT: Self = Self::Ws281x;
    #[cfg(not(feature = "ws281x"))]
    pub const DEFAULT: Self = Self::DryRun;
}

impl Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DryRun => f.write_str("dry-run"),
            Self::Ws281x => f.write_str("ws281x"),
        }
    }
}

pub enum Strip {
    DryRun(SmartLedsSink<LogWriter, MAX_LEDS>),
    #[cfg(feature = "ws281x")]
    Ws281x(ws281x::Ws281xSink),
}

impl Strip {
    /// Initialize the selected driver.
    pub fn open(kind: DriverKind, config: &StripConfig) -> Result<Self, DriverError> {
        log::info!("Initializing {} strip with {} pixels", kind, config.count);
        match kind {
            DriverKind::DryRun => Ok(Self::dry_run(config)),
            #[cfg(feature = "ws281x")]
            DriverKind::Ws281x => ws281x::Ws281xSink::new(config).map(Self::Ws281x),
            #[cfg(not(feature = "ws281x"))]
            DriverKind::Ws281x => Err(DriverError::Unavailable(kind)),
        }
    }

    pub fn dry_run(config: &StripConfig) -> Self {
        let count = buffered_pixel_count(config.count);
        Self::DryRun(SmartLedsSink::new(LogWriter::default(), count, config.brightness))
    }
}

/// Number of pixels a buffered driver keeps for a strip of `count` pixels.
fn buffered_pixel_count(count: u32) -> usize {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    if count > MAX_LEDS {
        log::warn!(
            "Strip has {} pixels, only the first {} are animated",
            count,
            MAX_LEDS
        );
    }
    count.min(MAX_LEDS)
}

impl FrameSink for Strip {
    type Error = DriverError;

    fn pixel_count(&self) -> u32 {
        match self {
            Self::DryRun(sink) => sink.pixel_count(),
            #[cfg(feature = "ws281x")]
            Self::Ws281x(sink) => sink.pixel_count(),
        }
    }

    fn set_pixel(&mut self, index: u32, color: Rgb) {
        match self {
            Self::DryRun(sink) => sink.set_pixel(index, color),
            #[cfg(feature = "ws281x")]
            Self::Ws281x(sink) => sink.set_pixel(index, color),
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        match self {
            Self::DryRun(sink) => match sink.present() {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
            #[cfg(feature = "ws281x")]
            Self::Ws281x(sink) => sink.present(),
        }
    }

    fn set_global_brightness(&mut self, level: u8) {
        match self {
            Self::DryRun(sink) => sink.set_global_brightness(level),
            #[cfg(feature = "ws281x")]
            Self::Ws281x(sink) => sink.set_global_brightness(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_uses_configured_count() {
        let strip = Strip::dry_run(&StripConfig {
            count: 144,
            ..StripConfig::default()
        });
        assert_eq!(strip.pixel_count(), 144);
    }

    #[test]
    fn test_dry_run_clamps_long_strips() {
        assert_eq!(buffered_pixel_count(50), 50);
        assert_eq!(buffered_pixel_count(u32::MAX), MAX_LEDS);

        let count = u32::try_from(MAX_LEDS).unwrap() + 1;
        let strip = Strip::dry_run(&StripConfig {
            count,
            ..StripConfig::default()
        });
        assert_eq!(strip.pixel_count(), count - 1);
    }
}
