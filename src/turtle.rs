//! Pacman state and the commands that act on it.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal headings the pacman can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order they are tried when parsing.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Rotates 90 degrees counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    /// Rotates 90 degrees clockwise. Inverse of [`turn_left`](Self::turn_left).
    pub fn turn_right(self) -> Self {
        match self {
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
        }
    }

    /// Unit step taken by a `MOVE` while facing this way. North is `+y`.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::South => IVec2::NEG_Y,
            Direction::East => IVec2::X,
            Direction::West => IVec2::NEG_X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection;

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive match on the direction name. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownDirection)
    }
}

/// Whether `position` lies on a grid spanning `0..=grid_size` on both axes.
///
/// The upper edge is inclusive, so a grid size of 5 has six cells per axis.
pub fn within_grid(position: IVec2, grid_size: i32) -> bool {
    position.cmpge(IVec2::ZERO).all() && position.cmple(IVec2::splat(grid_size)).all()
}

/// The state of the pacman once it has been placed on the grid.
///
/// There is no "unplaced" variant; callers hold an `Option<PacmanState>` and
/// `None` means no valid placement has happened yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacmanState {
    /// Current grid cell. Both components lie in `0..=grid_size`.
    pub position: IVec2,

    /// Current heading.
    pub facing: Direction,
}

impl PacmanState {
    pub fn new(position: IVec2, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// The cell a `MOVE` would land on, without checking grid bounds.
    ///
    /// `None` when the step overflows `i32`, which is always off the grid.
    pub fn ahead(&self) -> Option<IVec2> {
        let step = self.facing.step();
        Some(IVec2::new(
            self.position.x.checked_add(step.x)?,
            self.position.y.checked_add(step.y)?,
        ))
    }

    pub fn turn_left(&mut self) {
        self.facing = self.facing.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.facing = self.facing.turn_right();
    }
}

/// Command keywords understood by the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl Keyword {
    pub const ALL: [Keyword; 5] = [
        Keyword::Place,
        Keyword::Move,
        Keyword::Left,
        Keyword::Right,
        Keyword::Report,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Place => "PLACE",
            Keyword::Move => "MOVE",
            Keyword::Left => "LEFT",
            Keyword::Right => "RIGHT",
            Keyword::Report => "REPORT",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn lookup(word: &str) -> Option<Self> {
        Keyword::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(word))
    }
}

/// A fully parsed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    // --- Placement ---
    /// Put the pacman at `position` facing `facing`. Replaces any prior state.
    Place { position: IVec2, facing: Direction },

    // --- Motion ---
    /// Advance one cell in the current heading.
    Move,
    /// Turn counter-clockwise.
    Left,
    /// Turn clockwise.
    Right,

    // --- Output ---
    /// Emit the current position and heading.
    Report,
}

impl Command {
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Place { .. } => Keyword::Place,
            Command::Move => Keyword::Move,
            Command::Left => Keyword::Left,
            Command::Right => Keyword::Right,
            Command::Report => Keyword::Report,
        }
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Command::Place { .. })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { position, facing } => {
                write!(f, "PLACE {},{},{}", position.x, position.y, facing)
            }
            other => f.write_str(other.keyword().as_str()),
        }
    }
}
