//! Command-line interface: argument parsing and subcommand handlers.

mod args;
pub mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use enums::{RampArg, ResolutionArg};
