//! The three lines wiring one motor to an L293D channel.

use core::fmt;

use crate::config::PinNumbering;
use crate::error::PinError;
use crate::lines::LineId;

use super::state::Direction;

/// Lines of one L293D channel.
///
/// | field     | L293D pin | role                      |
/// |-----------|-----------|---------------------------|
/// | `enable`  | 1 or 9    | energizes the channel     |
/// | `reverse` | 2 or 10   | high for anticlockwise    |
/// | `forward` | 7 or 15   | high for clockwise        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotorPins {
    /// Channel enable line.
    pub enable: LineId,
    /// Anticlockwise-positive direction line.
    pub reverse: LineId,
    /// Clockwise-positive direction line.
    pub forward: LineId,
}

impl MotorPins {
    /// Create a new pin set.
    #[inline]
    pub const fn new(enable: LineId, reverse: LineId, forward: LineId) -> Self {
        Self {
            enable,
            reverse,
            forward,
        }
    }

    /// All three lines, enable first.
    #[inline]
    pub const fn lines(&self) -> [LineId; 3] {
        [self.enable, self.reverse, self.forward]
    }

    /// Lines to drive `(high, low)` for a running direction.
    pub fn direction_lines(&self, direction: Direction) -> Option<(LineId, LineId)> {
        match direction {
            Direction::Stopped => None,
            Direction::Clockwise => Some((self.forward, self.reverse)),
            Direction::Anticlockwise => Some((self.reverse, self.forward)),
        }
    }

    /// Check the lines against a numbering and against each other.
    ///
    /// Scheme membership is checked first, in the order enable, reverse,
    /// forward, and skipped entirely when `force_selection` is set. Then
    /// every line must be distinct.
    ///
    /// # Errors
    ///
    /// [`PinError::InvalidPin`] or [`PinError::DuplicatePin`].
    pub fn validate(&self, numbering: PinNumbering, force_selection: bool) -> Result<(), PinError> {
        let lines = self.lines();

        if !force_selection {
            if let Some(&line) = lines.iter().find(|&&l| !numbering.is_valid(l)) {
                return Err(PinError::InvalidPin { line, numbering });
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if lines[..i].contains(line) {
                return Err(PinError::DuplicatePin(*line));
            }
        }

        Ok(())
    }
}

impl fmt::Display for MotorPins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} and {}]", self.enable, self.reverse, self.forward)
    }
}
