//! Reports, interpreter events and the collected result of a simulator run.

use crate::error::CommandError;
use crate::turtle::{Command, Direction, PacmanState};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A snapshot produced by a `REPORT` command.
///
/// Displays as `x, y, FACING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub position: IVec2,
    pub facing: Direction,
}

impl From<PacmanState> for Report {
    fn from(state: PacmanState) -> Self {
        Self {
            position: state.position,
            facing: state.facing,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.position.x, self.position.y, self.facing)
    }
}

/// Something the interpreter emitted while running a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Output of a `REPORT`.
    Report(Report),
    /// A command that had no effect on the state.
    Diagnostic(CommandError),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Report(report) => write!(f, "Output: {report}"),
            Event::Diagnostic(err) => write!(f, "{err}"),
        }
    }
}

/// Everything a single simulator run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationOutcome {
    /// Missing-command diagnostics from the validator.
    pub validation: Vec<CommandError>,

    /// Diagnostics for tokens dropped by the sanitizer.
    pub rejected: Vec<CommandError>,

    /// Commands that survived sanitization, in the order they ran.
    pub commands: Vec<Command>,

    /// Reports and move diagnostics from the interpreter.
    pub events: Vec<Event>,

    /// State after the last command. `None` if the pacman was never placed.
    pub final_state: Option<PacmanState>,

    /// Set when the run stopped after validation.
    pub halted: bool,
}

impl SimulationOutcome {
    /// Validation and sanitization diagnostics, in the order they were raised.
    pub fn diagnostics(&self) -> impl Iterator<Item = &CommandError> {
        self.validation.iter().chain(self.rejected.iter())
    }

    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.events.iter().filter_map(|event| match event {
            Event::Report(report) => Some(report),
            Event::Diagnostic(_) => None,
        })
    }

    /// The last `REPORT` output, if any.
    pub fn last_report(&self) -> Option<Report> {
        self.reports().last().copied()
    }

    /// True when no command survived sanitization.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every user-facing line of the run, in order.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics()
            .map(ToString::to_string)
            .chain(self.events.iter().map(ToString::to_string))
            .collect()
    }
}
