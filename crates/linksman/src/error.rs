// ABOUTME: Error types for the linksman rules engine.
// ABOUTME: Covers club legality, dice validation, and round progression errors.

use crate::tables::Club;
use crate::Lie;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{club} is not a legal club from the {lie} lie")]
    IllegalClub { club: Club, lie: Lie },

    #[error("Invalid {kind} die value: {value}")]
    InvalidDiceRoll { kind: DieKind, value: u8 },

    #[error("The {0} lie requires a problem die, but none was rolled")]
    MissingProblemDie(Lie),

    #[error("The {0} lie takes no problem die, but one was rolled")]
    UnexpectedProblemDie(Lie),

    #[error("Invalid hole index: {0} (holes are 1-18)")]
    InvalidHoleIndex(usize),

    #[error("Round is complete; no holes remain")]
    RoundComplete,

    #[error("Course must have exactly 18 holes, found {0}")]
    InvalidCourse(usize),
}

/// Which die a value came from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieKind {
    Distance,
    Direction,
    Problem,
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieKind::Distance => write!(f, "distance"),
            DieKind::Direction => write!(f, "direction"),
            DieKind::Problem => write!(f, "problem"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
