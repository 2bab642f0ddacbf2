//! Line collection from a reader, capped and stopped at the first `REPORT`.

use crate::parse::normalize;
use std::io::BufRead;
use tracing::{error, warn};

/// Normalized tokens read by [`collect_commands`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandBatch {
    pub tokens: Vec<String>,
    /// Set when more input was available after `max_commands` tokens.
    pub truncated: bool,
}

/// Reads command lines until EOF, a `REPORT` line, or `max_commands` tokens.
///
/// Blank lines are skipped and do not count. The `REPORT` line that ends
/// collection is kept. A read error is logged and treated as end of input.
pub fn collect_commands<R: BufRead>(reader: R, max_commands: usize) -> CommandBatch {
    let mut batch = CommandBatch::default();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(%err, "failed to read command input");
                break;
            }
        };

        let token = normalize(&line);
        if token.is_empty() {
            continue;
        }

        if batch.tokens.len() >= max_commands {
            warn!(max_commands, "too many commands; ignoring remaining input");
            batch.truncated = true;
            break;
        }

        let is_report = token == "REPORT";
        batch.tokens.push(token);
        if is_report {
            break;
        }
    }

    batch
}
