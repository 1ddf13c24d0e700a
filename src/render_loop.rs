//! Render loop state machine
//!
//! Portable loop driver without a platform timer. The caller polls
//! [`RenderLoop::tick`] and sleeps for the returned duration in between:
//!
//! ```ignore
//! let mut render_loop = RenderLoop::new(&store);
//! while !stop_requested() {
//!     let result = render_loop.tick(Instant::now())?;
//!     sleep(result.sleep_duration);
//! }
//! render_loop.shutdown(Instant::now())?;
//! ```

use embassy_time::{Duration, Instant};

use crate::{FrameSink, mode::Mode, store::AnimationStore};

/// Fixed pause between two loop iterations.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal state entered on shutdown
    ShuttingDown,
}

/// Result of a single loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the store presented a new frame.
    pub presented: bool,
    /// How long to wait before the next iteration.
    pub sleep_duration: Duration,
}

/// The only driver of animation time.
pub struct RenderLoop<'a, S, const MAX_LEDS: usize> {
    store: &'a AnimationStore<S, MAX_LEDS>,
    state: LoopState,
    poll_interval: Duration,
}

impl<'a, S: FrameSink, const MAX_LEDS: usize> RenderLoop<'a, S, MAX_LEDS> {
    /// Create a loop polling every [`POLL_INTERVAL`].
    pub fn new(store: &'a AnimationStore<S, MAX_LEDS>) -> Self {
        Self::with_poll_interval(store, POLL_INTERVAL)
    }

    pub fn with_poll_interval(
        store: &'a AnimationStore<S, MAX_LEDS>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            store,
            state: LoopState::Running,
            poll_interval,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Run one iteration at `now`.
    ///
    /// After shutdown the store is left untouched and no sleep is requested.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, S::Error> {
        if !self.is_running() {
            return Ok(TickResult {
                presented: false,
                sleep_duration: Duration::from_ticks(0),
            });
        }

        let presented = self.store.advance(now)?;
        Ok(TickResult {
            presented,
            sleep_duration: self.poll_interval,
        })
    }

    /// Blank the strip and stop the loop.
    ///
    /// Forces `Off` and pushes one final frame. Calling it again is a no-op.
    pub fn shutdown(&mut self, now: Instant) -> Result<(), S::Error> {
        if !self.is_running() {
            return Ok(());
        }
        self.state = LoopState::ShuttingDown;

        log::info!("Shutting down...");
        self.store.set_mode(Mode::Off);
        self.store.advance(now)?;
        Ok(())
    }
}
