//! Shared result and error types: shot outcomes, placement rejections and
//! engine failures.

use core::fmt;

use crate::game::Phase;
use crate::grid::Coord;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// No ship at the target.
    Miss,
    /// A ship was struck and is still afloat.
    Hit,
    /// The final intact cell of a ship was struck, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Sunk(name) => write!(f, "hit, {name} sunk"),
        }
    }
}

/// Why a ship may not occupy a footprint. Routine and recoverable: the caller
/// simply tries another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship length outside `1..=MAX_SHIP_LENGTH`.
    InvalidLength(usize),
    /// Part of the footprint lies off the grid.
    OutOfBounds,
    /// Part of the footprint is already claimed by another ship.
    Overlaps,
    /// A footprint cell is orthogonally adjacent to another ship.
    Touches,
    /// Every ship of the board's fleet is already deployed.
    FleetFull,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength(len) => write!(f, "ship length {len} is not allowed"),
            PlacementError::OutOfBounds => write!(f, "ship would extend past the edge of the grid"),
            PlacementError::Overlaps => write!(f, "ship would overlap another ship"),
            PlacementError::Touches => write!(f, "ship would touch another ship"),
            PlacementError::FleetFull => write!(f, "the whole fleet is already placed"),
        }
    }
}

/// Fatal engine failures. Any of these means the session is unusable and must
/// be recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Random placement exhausted its attempts for one ship.
    PlacementExhausted { ship: &'static str, attempts: usize },
    /// Every cell of the target board has already been fired upon.
    NoTargetAvailable,
    /// A strategy selected a cell that was already fired upon.
    InvalidTarget(Coord),
    /// The session was found in a phase the caller cannot proceed from.
    UnexpectedPhase(Phase),
    /// A turn did not complete within its time limit.
    TurnTimeout { millis: u64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::PlacementExhausted { ship, attempts } => {
                write!(f, "could not place {ship} after {attempts} attempts")
            }
            EngineError::NoTargetAvailable => write!(f, "no unshot cell left to target"),
            EngineError::InvalidTarget(coord) => write!(f, "{coord} was already fired upon"),
            EngineError::UnexpectedPhase(phase) => write!(f, "unexpected phase {phase:?}"),
            EngineError::TurnTimeout { millis } => write!(f, "turn exceeded {millis} ms"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Text coordinate could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    Empty,
    /// First character is not a column letter A-J.
    InvalidColumn(char),
    /// Remainder is not a row number 1-10.
    InvalidRow,
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::Empty => write!(f, "empty coordinate"),
            CoordParseError::InvalidColumn(c) => {
                write!(f, "invalid column '{c}', must be a letter A-J")
            }
            CoordParseError::InvalidRow => write!(f, "invalid row, must be a number 1-10"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordParseError {}
