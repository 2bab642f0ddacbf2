//! Diagnostics raised while validating, sanitizing and interpreting commands.
//!
//! None of these abort a run. Each one marks a single unit of work (a token or
//! a move) as dropped, and its `Display` text is what the user sees.

use crate::turtle::Direction;
use glam::IVec2;
use std::fmt;
use thiserror::Error;

/// Which required command was absent from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredCommand {
    Placement,
    Report,
}

impl fmt::Display for RequiredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredCommand::Placement => f.write_str("placement"),
            RequiredCommand::Report => f.write_str("report"),
        }
    }
}

/// A recoverable problem with one command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Leading word is not a known keyword.
    #[error("ignoring invalid command: {0}")]
    UnknownCommand(String),

    /// `PLACE` arguments did not split into three fields.
    #[error("invalid placement command {0}; usage: PLACE x,y,F")]
    MalformedPlacement(String),

    /// A coordinate field is not made only of decimal digits.
    #[error("coordinates [{x}, {y}] are not numeric; ignoring placement command")]
    NonNumericCoordinate { x: String, y: String },

    /// Numeric coordinates fall outside `0..=grid_size`.
    #[error("coordinates [{x}, {y}] are outside the grid; ignoring placement command")]
    CoordinateOutOfBounds { x: String, y: String },

    /// Direction field does not name a direction.
    #[error("direction [{0}] is invalid; ignoring placement command")]
    InvalidDirection(String),

    /// Non-placement command seen before any valid placement.
    #[error("ignoring {0} before a valid placement command")]
    OutOfSequence(String),

    /// A move would take the pacman off the grid.
    #[error(
        "ignoring command {index}.MOVE at [{}, {}, {facing}] as it would leave the {grid_size}x{grid_size} grid",
        .position.x,
        .position.y
    )]
    MoveWouldExitGrid {
        index: usize,
        position: IVec2,
        facing: Direction,
        grid_size: i32,
    },

    /// The input never mentions a required command.
    #[error("no {0} command present; aborting")]
    MissingRequiredCommand(RequiredCommand),
}
