//! Pin numbering schemes and their valid line tables.

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;
use crate::lines::LineId;

const BOARD_LINES: [LineId; 14] = [
    LineId(7),
    LineId(11),
    LineId(12),
    LineId(13),
    LineId(15),
    LineId(16),
    LineId(18),
    LineId(22),
    LineId(29),
    LineId(31),
    LineId(32),
    LineId(33),
    LineId(36),
    LineId(37),
];

const BCM_LINES: [LineId; 14] = [
    LineId(4),
    LineId(5),
    LineId(6),
    LineId(12),
    LineId(13),
    LineId(16),
    LineId(17),
    LineId(18),
    LineId(22),
    LineId(23),
    LineId(24),
    LineId(25),
    LineId(26),
    LineId(27),
];

/// Convention mapping pin numbers to lines on the host controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PinNumbering {
    /// Physical header positions.
    #[default]
    Board,
    /// Broadcom channel numbers.
    Bcm,
}

impl PinNumbering {
    /// Lines that are safe to drive a motor from, in ascending order.
    pub fn valid_lines(self) -> &'static [LineId] {
        match self {
            PinNumbering::Board => &BOARD_LINES,
            PinNumbering::Bcm => &BCM_LINES,
        }
    }

    /// Check if a line may be allocated under this numbering.
    pub fn is_valid(self, id: LineId) -> bool {
        self.valid_lines().contains(&id)
    }

    /// Name as written in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            PinNumbering::Board => "BOARD",
            PinNumbering::Bcm => "BCM",
        }
    }
}

/// Lines valid for allocation under `mode`.
pub fn valid_lines(mode: PinNumbering) -> &'static [LineId] {
    mode.valid_lines()
}

/// Check `id` against the table of `mode`.
pub fn is_valid(mode: PinNumbering, id: LineId) -> bool {
    mode.is_valid(id)
}

impl FromStr for PinNumbering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("BOARD") {
            Ok(PinNumbering::Board)
        } else if s.eq_ignore_ascii_case("BCM") {
            Ok(PinNumbering::Bcm)
        } else {
            let mut name = heapless::String::new();
            for c in s.chars() {
                if name.push(c).is_err() {
                    break;
                }
            }
            Err(ConfigError::InvalidScheme(name))
        }
    }
}

impl fmt::Display for PinNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
