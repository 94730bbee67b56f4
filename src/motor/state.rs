//! Logical direction of a motor.

use core::fmt;

/// Direction a motor is being driven in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Enable line low, motor unpowered.
    #[default]
    Stopped,
    /// Forward line high.
    Clockwise,
    /// Reverse line high.
    Anticlockwise,
}

impl Direction {
    /// Get direction as sign: 0, +1 or -1.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Stopped => 0,
            Direction::Clockwise => 1,
            Direction::Anticlockwise => -1,
        }
    }

    /// Direction from a sign, `None` for anything but 0, +1 and -1.
    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            0 => Some(Direction::Stopped),
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::Anticlockwise),
            _ => None,
        }
    }

    /// Reverse a running direction. `Stopped` stays `Stopped`.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Stopped => Direction::Stopped,
            Direction::Clockwise => Direction::Anticlockwise,
            Direction::Anticlockwise => Direction::Clockwise,
        }
    }

    /// Whether the enable line is high in this direction.
    #[inline]
    pub fn is_running(self) -> bool {
        self != Direction::Stopped
    }

    /// Get the direction name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Stopped => "stopped",
            Direction::Clockwise => "clockwise",
            Direction::Anticlockwise => "anticlockwise",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
