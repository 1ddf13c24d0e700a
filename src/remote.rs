//! Wireless remote events
//!
//! The remote adapter decodes its transport into [`RemoteEvent`] values and
//! hands them to [`dispatch`], the single place where gestures become store
//! mutations.

use crate::{FrameSink, color::color_from_angle, mode::Mode, store::AnimationStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteEvent {
    /// Single press, toggles the strip
    Tap,
    /// Second press in quick succession, cycles through the patterns
    DoubleTap,
    /// Drag across the remote's pad
    Move {
        /// Degrees clockwise from the top of the pad
        angle: f32,
        /// Distance from the pad center, 0.0 to 1.0
        distance: f32,
    },
}

/// Apply a remote gesture to the store.
pub fn dispatch<S: FrameSink, const MAX_LEDS: usize>(
    store: &AnimationStore<S, MAX_LEDS>,
    event: RemoteEvent,
) {
    match event {
        RemoteEvent::Tap => store.toggle(),
        RemoteEvent::DoubleTap => {
            let mode = store.snapshot().mode;
            store.set_mode(mode.next_in_cycle());
        }
        RemoteEvent::Move { angle, .. } => {
            store.set_color(color_from_angle(angle));
            if store.snapshot().mode != Mode::Solid {
                store.set_mode(Mode::Solid);
            }
        }
    }
}
