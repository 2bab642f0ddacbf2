//! Sanitization: turns normalized tokens into a legally ordered command stream.
//!
//! Each token first goes through [`parse_token`]. Commands that parse are then
//! passed through a [`SequenceGuard`], which refuses everything except `PLACE`
//! until a placement has been accepted. Every dropped token leaves at least one
//! diagnostic behind, in input order.

use crate::error::CommandError;
use crate::parse::parse_token;
use crate::turtle::Command;
use tracing::debug;

/// Output of [`sanitize`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sanitized {
    /// Accepted commands, in input order.
    pub commands: Vec<Command>,

    /// One or more entries per dropped token, in input order.
    pub diagnostics: Vec<CommandError>,
}

/// Tracks whether a valid `PLACE` has been accepted in the current pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceGuard {
    placed: bool,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Returns `true` if `command` may run at this point of the stream.
    ///
    /// An accepted `PLACE` unlocks every later command.
    pub fn admit(&mut self, command: &Command) -> bool {
        if command.is_place() {
            self.placed = true;
        }
        self.placed
    }
}

/// Filters `tokens` down to well-formed, correctly sequenced commands.
pub fn sanitize<S: AsRef<str>>(tokens: &[S], grid_size: i32) -> Sanitized {
    let mut out = Sanitized::default();
    let mut guard = SequenceGuard::new();

    for token in tokens {
        let token = token.as_ref();
        match parse_token(token, grid_size) {
            Ok(command) if guard.admit(&command) => {
                debug!(%command, "accepted command");
                out.commands.push(command);
            }
            Ok(command) => {
                debug!(%command, "command precedes placement");
                out.diagnostics
                    .push(CommandError::OutOfSequence(token.to_string()));
            }
            Err(errors) => {
                debug!(token, problems = errors.len(), "rejected token");
                out.diagnostics.extend(errors);
            }
        }
    }

    out
}
