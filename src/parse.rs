//! Token normalization and parsing of a single token into a [`Command`].
//!
//! Parsing is the first of two stages. It only answers "is this token a
//! well-formed command on this grid?". Whether the command is allowed at its
//! position in the stream is decided afterwards by the sanitizer.

use crate::error::CommandError;
use crate::turtle::{Command, Direction, Keyword, within_grid};
use glam::IVec2;

/// Result of parsing one token. A rejected `PLACE` may carry several errors.
pub type ParseResult = Result<Command, Vec<CommandError>>;

/// Trims and upper-cases one raw input line.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Splits a token into its leading word and the remainder after the first space.
pub fn split_keyword(token: &str) -> (&str, &str) {
    token.split_once(' ').unwrap_or((token, ""))
}

/// A coordinate field is numeric when it is non-empty and made only of ASCII digits.
///
/// Signs and decimal points are rejected, so `-1` is "not numeric" rather than
/// "outside the grid".
pub fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `token` into a [`Command`], checking placement coordinates against `grid_size`.
pub fn parse_token(token: &str, grid_size: i32) -> ParseResult {
    let unknown = || vec![CommandError::UnknownCommand(token.to_string())];

    let (word, args) = split_keyword(token);
    let keyword = Keyword::lookup(word).ok_or_else(unknown)?;

    match keyword {
        Keyword::Place => parse_placement(token, args, grid_size),
        // Only PLACE takes arguments.
        _ if !args.trim().is_empty() => Err(unknown()),
        Keyword::Move => Ok(Command::Move),
        Keyword::Left => Ok(Command::Left),
        Keyword::Right => Ok(Command::Right),
        Keyword::Report => Ok(Command::Report),
    }
}

/// Parses the `x,y,F` argument list of a `PLACE` token.
///
/// The coordinate and direction checks are independent: a token such as
/// `PLACE a,b,nowhere` reports both problems. The bounds check only runs when
/// both coordinates are numeric.
fn parse_placement(token: &str, args: &str, grid_size: i32) -> ParseResult {
    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    let [x, y, direction] = fields.as_slice() else {
        return Err(vec![CommandError::MalformedPlacement(token.to_string())]);
    };

    let mut errors = Vec::new();

    let position = if is_numeric(x) && is_numeric(y) {
        match (x.parse::<i32>(), y.parse::<i32>()) {
            (Ok(px), Ok(py)) if within_grid(IVec2::new(px, py), grid_size) => {
                Some(IVec2::new(px, py))
            }
            (px, py) => {
                // Digit strings that overflow i32 are reported as written.
                errors.push(CommandError::CoordinateOutOfBounds {
                    x: px.map_or_else(|_| x.to_string(), |v| v.to_string()),
                    y: py.map_or_else(|_| y.to_string(), |v| v.to_string()),
                });
                None
            }
        }
    } else {
        errors.push(CommandError::NonNumericCoordinate {
            x: x.to_string(),
            y: y.to_string(),
        });
        None
    };

    let facing = match direction.parse::<Direction>() {
        Ok(facing) => Some(facing),
        Err(_) => {
            errors.push(CommandError::InvalidDirection(direction.to_string()));
            None
        }
    };

    match (position, facing) {
        (Some(position), Some(facing)) => Ok(Command::Place { position, facing }),
        _ => Err(errors),
    }
}
