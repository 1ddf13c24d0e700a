//! Lighting modes
//!
//! `Mode` is a closed set: adapters decode external names with
//! [`Mode::parse_from_str`] and reject anything it does not know.

use embassy_time::Duration;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_COLOR_WIPE: &str = "color_wipe";
const MODE_NAME_THEATER_CHASE: &str = "theater_chase";
const MODE_NAME_PULSE: &str = "pulse";

const RAINBOW_INTERVAL: Duration = Duration::from_millis(20);
const COLOR_WIPE_INTERVAL: Duration = Duration::from_millis(50);
const THEATER_CHASE_INTERVAL: Duration = Duration::from_millis(100);
const PULSE_INTERVAL: Duration = Duration::from_millis(20);

/// Number of hue steps in one rainbow revolution.
const RAINBOW_STEPS: u32 = 256;
/// Number of phases of the theater chase.
const CHASE_PHASES: u32 = 3;

/// Known lighting modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Off,
    Solid,
    Rainbow,
    ColorWipe,
    TheaterChase,
    Pulse,
}

impl Mode {
    /// Every mode, in declaration order
    pub const ALL: [Mode; 6] = [
        Self::Off,
        Self::Solid,
        Self::Rainbow,
        Self::ColorWipe,
        Self::TheaterChase,
        Self::Pulse,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Solid => MODE_NAME_SOLID,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::ColorWipe => MODE_NAME_COLOR_WIPE,
            Self::TheaterChase => MODE_NAME_THEATER_CHASE,
            Self::Pulse => MODE_NAME_PULSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_SOLID => Some(Self::Solid),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            MODE_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            MODE_NAME_PULSE => Some(Self::Pulse),
            _ => None,
        }
    }

    /// Minimum time between two cursor steps.
    ///
    /// `Off` and `Solid` are static and render on every call.
    pub const fn frame_interval(self) -> Duration {
        match self {
            Self::Off | Self::Solid => Duration::from_ticks(0),
            Self::Rainbow => RAINBOW_INTERVAL,
            Self::ColorWipe => COLOR_WIPE_INTERVAL,
            Self::TheaterChase => THEATER_CHASE_INTERVAL,
            Self::Pulse => PULSE_INTERVAL,
        }
    }

    /// Cursor value for the next frame of this mode.
    ///
    /// Modes without an animation cursor keep it unchanged.
    pub const fn next_cursor(self, cursor: u32, pixel_count: u32) -> u32 {
        match self {
            Self::Rainbow => (cursor % RAINBOW_STEPS + 1) % RAINBOW_STEPS,
            Self::ColorWipe if cursor >= pixel_count => 0,
            Self::ColorWipe => cursor + 1,
            Self::TheaterChase => (cursor % CHASE_PHASES + 1) % CHASE_PHASES,
            Self::Off | Self::Solid | Self::Pulse => cursor,
        }
    }

    /// Next pattern in the remote's double-tap cycle.
    ///
    /// `Off` is not part of the cycle and restarts it at `Solid`.
    pub const fn next_in_cycle(self) -> Self {
        match self {
            Self::Solid => Self::Rainbow,
            Self::Rainbow => Self::ColorWipe,
            Self::ColorWipe => Self::TheaterChase,
            Self::TheaterChase => Self::Pulse,
            Self::Pulse | Self::Off => Self::Solid,
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
