//! Shell errors
//!
//! Every variant is reported on stderr prefixed with `Error, `.

use codefight_assembler::AssemblerError;
use codefight_display::DisplayError;
use codefight_runtime::{RosterError, RuntimeError, SetupError};
use codefight_spec::ConfigError;
use thiserror::Error;

use crate::command::Phase;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Command '{0}' not found!")]
    CommandNotFound(String),

    #[error("This command is not valid in the GamePhase {0}")]
    WrongPhase(Phase),

    #[error("Wrong number of arguments for command '{0}'!")]
    WrongArgumentCount(&'static str),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown init mode: {0}, options are: INIT_MODE_RANDOM, INIT_MODE_STOP")]
    UnknownInitMode(String),

    #[error("Could not find AI with name {0}.")]
    UnknownAi(String),

    #[error("Not enough glyph pairs: {players} AIs selected but only {glyphs} pairs defined")]
    NotEnoughGlyphs { players: usize, glyphs: usize },

    #[error("AI glyphs must be given in pairs of default and bomb glyph")]
    UnpairedGlyph,

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Assembler(#[from] AssemblerError),

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("{0}")]
    Setup(#[from] SetupError),

    #[error("{0}")]
    Display(#[from] DisplayError),
}

impl From<RuntimeError> for ShellError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Setup(e) => ShellError::Setup(e),
            RuntimeError::Roster(e) => ShellError::Roster(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_not_found_display() {
        let err = ShellError::CommandNotFound("jump".to_string());
        assert_eq!(err.to_string(), "Command 'jump' not found!");
    }

    #[test]
    fn test_wrong_phase_display() {
        let err = ShellError::WrongPhase(Phase::Initialization);
        assert_eq!(
            err.to_string(),
            "This command is not valid in the GamePhase INITIALIZATION"
        );
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let err: ShellError = RosterError::DuplicateName("imp".into()).into();
        assert_eq!(err.to_string(), "An AI named imp already exists");

        let err: ShellError = RuntimeError::Setup(SetupError::NoPlayers).into();
        assert!(matches!(err, ShellError::Setup(SetupError::NoPlayers)));

        let err: ShellError = RuntimeError::Roster(RosterError::UnknownName("imp".into())).into();
        assert_eq!(err.to_string(), "No AI named imp exists");
    }
}
