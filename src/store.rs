//! Animation state store
//!
//! The single piece of shared mutable state. Control adapters mutate it from
//! their own threads while the render loop drives time forward through
//! [`AnimationStore::advance`]. Every operation runs inside one critical
//! section covering the whole state, so each call observes and leaves a
//! consistent state.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use heapless::Vec;

use crate::{
    FrameSink,
    color::{BLACK, RED, Rgb},
    mode::Mode,
    pattern::{pulse_brightness, render},
};

/// Default upper bound of pixels the store can render.
pub const DEFAULT_MAX_LEDS: usize = 512;

/// Initial parameters of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Sticky global brightness
    pub brightness: u8,
    /// Solid and accent color
    pub color: Rgb,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            color: RED,
        }
    }
}

/// Consistent view of the store at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub mode: Mode,
    pub previous_mode: Mode,
    pub color: Rgb,
    pub brightness: u8,
    pub cursor: u32,
}

struct AnimationState<S, const MAX_LEDS: usize> {
    sink: S,
    mode: Mode,
    /// Last non-`Off` mode, restored by toggle
    previous_mode: Mode,
    color: Rgb,
    /// Sticky brightness, only changed by explicit requests
    brightness: u8,
    /// Brightness the sink currently holds, differs from `brightness` after
    /// pulse frames
    applied_brightness: u8,
    cursor: u32,
    last_frame_time: Option<Instant>,
    frame: Vec<Rgb, MAX_LEDS>,
}

impl<S: FrameSink, const MAX_LEDS: usize> AnimationState<S, MAX_LEDS> {
    fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.cursor = 0;
        self.last_frame_time = None;
    }

    fn is_due(&self, now: Instant) -> bool {
        let Some(last) = self.last_frame_time else {
            return true;
        };
        match now.checked_duration_since(last) {
            Some(elapsed) => elapsed >= self.mode.frame_interval(),
            // The clock went backwards, do not stall the animation.
            None => true,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, now: Instant) -> Result<bool, S::Error> {
        if !self.is_due(now) {
            return Ok(false);
        }

        let pixel_count = self.frame.len() as u32;
        self.cursor = self.mode.next_cursor(self.cursor, pixel_count);
        render(self.mode, self.cursor, self.color, &mut self.frame);

        let brightness = if self.mode == Mode::Pulse {
            pulse_brightness(now)
        } else {
            self.brightness
        };
        if brightness != self.applied_brightness {
            self.sink.set_global_brightness(brightness);
            self.applied_brightness = brightness;
        }

        for (index, color) in self.frame.iter().enumerate() {
            self.sink.set_pixel(index as u32, *color);
        }
        self.sink.present()?;

        self.last_frame_time = Some(now);
        Ok(true)
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            mode: self.mode,
            previous_mode: self.previous_mode,
            color: self.color,
            brightness: self.brightness,
            cursor: self.cursor,
        }
    }
}

/// Thread-safe owner of the animation state and the frame sink
pub struct AnimationStore<S, const MAX_LEDS: usize = DEFAULT_MAX_LEDS> {
    state: Mutex<RefCell<AnimationState<S, MAX_LEDS>>>,
}

impl<S: FrameSink, const MAX_LEDS: usize> AnimationStore<S, MAX_LEDS> {
    /// Bind a new store to `sink`.
    ///
    /// The store starts `Off` and pushes the configured brightness to the
    /// sink without presenting.
    pub fn new(mut sink: S, config: &AnimationConfig) -> Self {
        let pixel_count = usize::try_from(sink.pixel_count()).unwrap_or(usize::MAX);
        if pixel_count > MAX_LEDS {
            log::warn!(
                "Strip has {} pixels, only the first {} are animated",
                pixel_count,
                MAX_LEDS
            );
        }
        let mut frame = Vec::new();
        let _ = frame.resize(pixel_count.min(MAX_LEDS), BLACK);

        sink.set_global_brightness(config.brightness);

        Self {
            state: Mutex::new(RefCell::new(AnimationState {
                sink,
                mode: Mode::Off,
                previous_mode: Mode::Solid,
                color: config.color,
                brightness: config.brightness,
                applied_brightness: config.brightness,
                cursor: 0,
                last_frame_time: None,
                frame,
            })),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut AnimationState<S, MAX_LEDS>) -> R) -> R {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            f(&mut state)
        })
    }

    /// Switch to `mode` and restart its animation.
    pub fn set_mode(&self, mode: Mode) {
        self.with_state(|state| {
            if mode != Mode::Off {
                state.previous_mode = mode;
            }
            state.switch_mode(mode);
        });
        log::info!("Mode set to: {}", mode);
    }

    /// Turn the strip off, or back on in the last active mode.
    pub fn toggle(&self) {
        let mode = self.with_state(|state| {
            let next = if state.mode == Mode::Off {
                state.previous_mode
            } else {
                state.previous_mode = state.mode;
                Mode::Off
            };
            state.switch_mode(next);
            next
        });
        log::info!("Toggled to: {}", mode);
    }

    /// Set the solid and accent color.
    ///
    /// A color sent while the strip is off turns it on in `Solid`.
    pub fn set_color(&self, color: Rgb) {
        let woke_up = self.with_state(|state| {
            state.color = color;
            if state.mode == Mode::Off {
                state.previous_mode = Mode::Solid;
                state.switch_mode(Mode::Solid);
                true
            } else {
                false
            }
        });
        log::debug!("Color set to: {},{},{}", color.r, color.g, color.b);
        if woke_up {
            log::info!("Mode set to: {}", Mode::Solid);
        }
    }

    /// Set the sticky brightness.
    ///
    /// Takes effect immediately: the level is pushed to the sink and the
    /// current buffer is presented without waiting for the render loop.
    pub fn set_brightness(&self, level: u8) -> Result<(), S::Error> {
        self.with_state(|state| {
            state.brightness = level;
            state.applied_brightness = level;
            state.sink.set_global_brightness(level);
            state.sink.present()
        })
    }

    /// Render one frame step at `now`.
    ///
    /// Does nothing until the active mode's frame interval has elapsed since
    /// the previous frame. Returns `true` when a frame was presented.
    pub fn advance(&self, now: Instant) -> Result<bool, S::Error> {
        self.with_state(|state| state.advance(now))
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.with_state(|state| state.snapshot())
    }

    /// Number of pixels rendered on every frame
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel_count(&self) -> u32 {
        self.with_state(|state| state.frame.len() as u32)
    }

    /// Run `f` with shared access to the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.with_state(|state| f(&state.sink))
    }
}
