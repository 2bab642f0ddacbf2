//! Whole-input sanity checks run before any token is parsed.

use crate::error::{CommandError, RequiredCommand};
use tracing::warn;

/// Checks that the input mentions a placement and contains a bare `REPORT`.
///
/// Any token containing `PLACE` counts as a placement here; its syntax is left
/// to the sanitizer. The tokens themselves are never modified.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Vec<CommandError> {
    let mut missing = Vec::new();

    let has_place = tokens
        .iter()
        .any(|t| t.as_ref().to_ascii_uppercase().contains("PLACE"));
    if !has_place {
        missing.push(CommandError::MissingRequiredCommand(
            RequiredCommand::Placement,
        ));
    }

    let has_report = tokens
        .iter()
        .any(|t| t.as_ref().trim().eq_ignore_ascii_case("REPORT"));
    if !has_report {
        missing.push(CommandError::MissingRequiredCommand(RequiredCommand::Report));
    }

    for diagnostic in &missing {
        warn!(%diagnostic, "input validation failed");
    }

    missing
}
