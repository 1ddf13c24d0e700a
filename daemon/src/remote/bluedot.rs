//! Blue Dot protocol decoder
//!
//! The remote app sends one message per line: `op,x,y`, or `op,col,row,x,y`
//! for apps with several buttons. `op` is 0 for a release, 1 for a press and
//! 2 for a move; `x` and `y` are the position on the dot in `-1.0..=1.0`
//! with `y` pointing up.

use std::time::{Duration, Instant};

use glowstrip::RemoteEvent;

/// Two presses closer than this form a double press.
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected 3 or 5 fields, got {0}")]
    FieldCount(usize),
    #[error("Invalid operation `{0}`")]
    Operation(String),
    #[error("Invalid coordinate `{0}`")]
    Coordinate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Release,
    Press,
    Move,
}

impl Operation {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(Self::Release),
            "1" => Some(Self::Press),
            "2" => Some(Self::Move),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Decoder {
    last_press: Option<Instant>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one message received at `now`.
    ///
    /// Blank lines and releases yield no events.
    pub fn decode(&mut self, line: &str, now: Instant) -> Result<Vec<RemoteEvent>, DecodeError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        let fields: Vec<&str> = line.split(',').collect();
        let (op, x, y) = match fields.as_slice() {
            [op, x, y] | [op, _, _, x, y] => (*op, *x, *y),
            _ => return Err(DecodeError::FieldCount(fields.len())),
        };
        let op = Operation::parse(op).ok_or_else(|| DecodeError::Operation(op.to_owned()))?;
        let x = parse_coordinate(x)?;
        let y = parse_coordinate(y)?;

        Ok(match op {
            Operation::Release => Vec::new(),
            Operation::Press => self.press(now),
            Operation::Move => vec![RemoteEvent::Move {
                angle: angle(x, y),
                distance: x.hypot(y).min(1.0),
            }],
        })
    }

    fn press(&mut self, now: Instant) -> Vec<RemoteEvent> {
        let is_double = self
            .last_press
            .is_some_and(|last| now.saturating_duration_since(last) <= DOUBLE_PRESS_WINDOW);
        if is_double {
            // A third quick press starts a new pair.
            self.last_press = None;
            vec![RemoteEvent::Tap, RemoteEvent::DoubleTap]
        } else {
            self.last_press = Some(now);
            vec![RemoteEvent::Tap]
        }
    }
}

fn parse_coordinate(s: &str) -> Result<f32, DecodeError> {
    s.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DecodeError::Coordinate(s.to_owned()))
}

/// Degrees clockwise from the top of the dot, in `0.0..360.0`.
fn angle(x: f32, y: f32) -> f32 {
    x.atan2(y).to_degrees().rem_euclid(360.0)
}
