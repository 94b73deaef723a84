//! # Codefight Shell
//!
//! Command line front end: argument parsing and the interactive shell that
//! registers AIs, runs matches and prints their state.

pub mod args;
pub mod command;
pub mod error;
pub mod shell;

pub use args::Cli;
pub use command::{CommandKind, Phase};
pub use error::{Result, ShellError};
pub use shell::{run, Response, Shell};
