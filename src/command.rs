use crate::{FrameSink, color::Rgb, mode::Mode, store::AnimationStore};

/// Mutations a control adapter can request
///
/// Adapters decode their transport payloads into these values; invalid
/// input never gets this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Set the solid and accent color
    SetColor(Rgb),
    /// Set the sticky global brightness
    SetBrightness(u8),
    /// Switch to a pattern
    SetMode(Mode),
    /// Turn off, or back on in the previous mode
    Toggle,
}

impl ControlCommand {
    /// Apply the command to `store`.
    ///
    /// Only brightness changes touch the hardware and can fail.
    pub fn apply<S: FrameSink, const MAX_LEDS: usize>(
        self,
        store: &AnimationStore<S, MAX_LEDS>,
    ) -> Result<(), S::Error> {
        match self {
            Self::SetColor(color) => store.set_color(color),
            Self::SetBrightness(level) => store.set_brightness(level)?,
            Self::SetMode(mode) => store.set_mode(mode),
            Self::Toggle => store.toggle(),
        }
        Ok(())
    }
}
