//! The full validate → sanitize → interpret pipeline.

use crate::interpreter::{Interpretation, Interpreter, SimConfig};
use crate::outcome::SimulationOutcome;
use crate::parse::normalize;
use crate::sanitizer::sanitize;
use crate::validator::validate;
use tracing::{info, warn};

/// Runs raw command lines through every stage and collects the results.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    interpreter: Interpreter,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Self {
            interpreter: Interpreter::new(config),
        }
    }

    pub fn config(&self) -> &SimConfig {
        self.interpreter.config()
    }

    /// Processes `raw` lines in order.
    ///
    /// Lines are trimmed and upper-cased first; blank lines are skipped. A
    /// missing `PLACE` or `REPORT` is reported but only stops the run when
    /// [`SimConfig::halt_on_missing_command`] is set.
    pub fn run<S: AsRef<str>>(&self, raw: &[S]) -> SimulationOutcome {
        let tokens: Vec<String> = raw
            .iter()
            .map(|line| normalize(line.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();

        let validation = validate(&tokens);
        if self.config().halt_on_missing_command && !validation.is_empty() {
            warn!("required command missing; halting before sanitization");
            return SimulationOutcome {
                validation,
                halted: true,
                ..Default::default()
            };
        }

        let sanitized = sanitize(&tokens, self.config().grid_size);
        info!(
            received = tokens.len(),
            accepted = sanitized.commands.len(),
            "sanitized commands"
        );

        let Interpretation {
            final_state,
            events,
        } = self.interpreter.run(&sanitized.commands);

        SimulationOutcome {
            validation,
            rejected: sanitized.diagnostics,
            commands: sanitized.commands,
            events,
            final_state,
            halted: false,
        }
    }
}
