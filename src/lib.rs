//! # pacman-sim
//!
//! A command interpreter that moves a single pacman around a bounded square grid.
//!
//! Raw text lines pass through three stages: a [`validator`] that checks the
//! input as a whole, a [`sanitizer`] that parses each token into a typed
//! [`Command`] and drops anything malformed or out of order, and an
//! [`interpreter`] that folds the surviving commands into a final
//! [`PacmanState`]. [`Simulator`] wires the stages together.

pub mod error;
pub mod input;
pub mod interpreter;
pub mod outcome;
pub mod parse;
pub mod sanitizer;
pub mod simulator;
pub mod turtle;
pub mod validator;

pub use error::*;
pub use input::*;
pub use interpreter::*;
pub use outcome::*;
pub use parse::*;
pub use sanitizer::*;
pub use simulator::*;
pub use turtle::*;
pub use validator::*;
