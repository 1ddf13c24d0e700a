#![no_std]

pub mod color;
pub mod command;
pub mod mode;
pub mod pattern;
pub mod remote;
pub mod render_loop;
pub mod sink;
pub mod store;

pub use command::ControlCommand;
pub use mode::Mode;
pub use remote::{RemoteEvent, dispatch};
pub use render_loop::{LoopState, POLL_INTERVAL, RenderLoop, TickResult};
pub use sink::SmartLedsSink;
pub use store::{AnimationConfig, AnimationStore, DEFAULT_MAX_LEDS, StateSnapshot};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip output
///
/// Implement this trait to support different hardware platforms.
/// The animation store is generic over this trait and is the only caller.
pub trait FrameSink {
    /// Error reported by the hardware when a frame can not be pushed
    type Error: core::fmt::Debug;

    /// Number of addressable pixels on the strip
    fn pixel_count(&self) -> u32;

    /// Buffer the color of a single pixel
    ///
    /// Indices past `pixel_count` are ignored.
    fn set_pixel(&mut self, index: u32, color: Rgb);

    /// Push the buffered pixels to the hardware
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Set the global brightness applied to the next presented frame
    fn set_global_brightness(&mut self, level: u8);
}
