//! Strip configuration file
//!
//! A JSON object using the `LED_*` keys of the classic rpi_ws281x setups.
//! Every key is optional and falls back to its default.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/glowstrip/config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Hardware parameters of the strip
///
/// Only used to construct the strip driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Number of pixels
    #[serde(rename = "LED_COUNT")]
    pub count: u32,
    /// GPIO pin of the data line
    #[serde(rename = "LED_PIN")]
    pub pin: i32,
    /// Signal frequency, usually 800 kHz
    #[serde(rename = "LED_FREQ_HZ")]
    pub freq_hz: u32,
    /// DMA channel used to generate the signal
    #[serde(rename = "LED_DMA")]
    pub dma: i32,
    /// Initial global brightness
    #[serde(rename = "LED_BRIGHTNESS")]
    pub brightness: u8,
    /// Invert the signal, for NPN level shifters
    #[serde(rename = "LED_INVERT")]
    pub invert: bool,
    /// PWM channel, 1 for GPIOs 13, 19, 41, 45 or 53
    #[serde(rename = "LED_CHANNEL")]
    pub channel: usize,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            count: 50,
            pin: 18,
            freq_hz: 800_000,
            dma: 10,
            brightness: 255,
            invert: false,
            channel: 0,
        }
    }
}

impl StripConfig {
    /// Load the config from `path`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!(
                    "Config file {} not found, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}
