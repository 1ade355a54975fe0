//! Text interface for rookery: command parsing, settings and the turn loop.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;

pub use command::{Command, parse_command, parse_promotion};
pub use config::ControllerConfig;
pub use controller::{Outcome, TurnController};
pub use error::CliError;
