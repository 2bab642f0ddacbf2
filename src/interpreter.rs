//! Interpreter that folds a sanitized command sequence into a final [`PacmanState`].
//!
//! The entry point is [`Interpreter`]. Configure it with a [`SimConfig`], then
//! call [`Interpreter::run`] with the commands returned by
//! [`sanitize`](crate::sanitizer::sanitize). Single transitions are available
//! through [`Interpreter::step`].

use crate::error::CommandError;
use crate::outcome::{Event, Report};
use crate::turtle::{Command, PacmanState, within_grid};
use glam::IVec2;
use tracing::debug;

pub const DEFAULT_GRID_SIZE: i32 = 5;
pub const DEFAULT_MAX_COMMANDS: usize = 30;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Largest valid coordinate on either axis. Coordinates run `0..=grid_size`.
    pub grid_size: i32,
    /// Maximum number of input lines accepted before collection stops.
    pub max_commands: usize,
    /// Stop after validation when a required command is missing. Off by default:
    /// the run logs the problem and carries on.
    pub halt_on_missing_command: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_commands: DEFAULT_MAX_COMMANDS,
            halt_on_missing_command: false,
        }
    }
}

impl SimConfig {
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_max_commands(mut self, max_commands: usize) -> Self {
        self.max_commands = max_commands;
        self
    }

    pub fn with_halt_on_missing_command(mut self, halt: bool) -> Self {
        self.halt_on_missing_command = halt;
        self
    }

    pub fn contains(&self, position: IVec2) -> bool {
        within_grid(position, self.grid_size)
    }
}

/// Result of [`Interpreter::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interpretation {
    pub final_state: Option<PacmanState>,
    pub events: Vec<Event>,
}

/// Applies commands to pacman state on a bounded grid.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: SimConfig,
}

impl Interpreter {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Applies one command to `state` and returns the next state plus anything emitted.
    ///
    /// `index` is the 1-based position of `command` in the sequence and only
    /// appears in diagnostics.
    ///
    /// # Motion
    ///
    /// A `MOVE` whose target cell lies off the grid leaves the state untouched
    /// and emits [`CommandError::MoveWouldExitGrid`].
    ///
    /// # Unplaced state
    ///
    /// The sanitizer never lets a non-placement command through before a
    /// `PLACE`. When driven directly, such a command is skipped with
    /// [`CommandError::OutOfSequence`].
    pub fn step(
        &self,
        state: Option<PacmanState>,
        command: &Command,
        index: usize,
    ) -> (Option<PacmanState>, Option<Event>) {
        match (state, command) {
            (_, Command::Place { position, facing }) => {
                (Some(PacmanState::new(*position, *facing)), None)
            }
            (None, other) => {
                let err = CommandError::OutOfSequence(other.to_string());
                (None, Some(Event::Diagnostic(err)))
            }
            (Some(pacman), Command::Move) => {
                let (next, err) = self.advance(pacman, index);
                (Some(next), err.map(Event::Diagnostic))
            }
            (Some(mut pacman), Command::Left) => {
                pacman.turn_left();
                (Some(pacman), None)
            }
            (Some(mut pacman), Command::Right) => {
                pacman.turn_right();
                (Some(pacman), None)
            }
            (Some(pacman), Command::Report) => {
                (Some(pacman), Some(Event::Report(Report::from(pacman))))
            }
        }
    }

    /// Moves one cell forward unless that would leave the grid.
    fn advance(
        &self,
        mut pacman: PacmanState,
        index: usize,
    ) -> (PacmanState, Option<CommandError>) {
        let target = pacman.ahead().filter(|t| self.config.contains(*t));
        let Some(target) = target else {
            let err = CommandError::MoveWouldExitGrid {
                index,
                position: pacman.position,
                facing: pacman.facing,
                grid_size: self.config.grid_size,
            };
            return (pacman, Some(err));
        };
        pacman.position = target;
        (pacman, None)
    }

    /// Runs every command in order, starting from an unplaced pacman.
    ///
    /// Each command takes the next index whether or not it changed the state,
    /// so a rejected `MOVE` still uses up its number.
    pub fn run(&self, commands: &[Command]) -> Interpretation {
        let mut out = Interpretation::default();

        for (i, command) in commands.iter().enumerate() {
            let (next, event) = self.step(out.final_state, command, i + 1);
            debug!(index = i + 1, %command, state = ?next, "applied command");
            out.final_state = next;
            out.events.extend(event);
        }

        out
    }
}
