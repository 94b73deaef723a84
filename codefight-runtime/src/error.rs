//! Runtime error types for Codefight

use thiserror::Error;

/// Reasons a match cannot be set up. Setup is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("At least one player is required")]
    NoPlayers,

    #[error("Unknown AI: {name}")]
    UnknownPlayer { name: String },

    #[error("AI {player} needs {len} cells but each AI only gets {spacing}")]
    SegmentOverflow {
        player: String,
        len: usize,
        spacing: usize,
    },

    #[error("AI {player} would end at cell {end} which exceeds the memory size of {size}")]
    ArenaOverflow {
        player: String,
        end: usize,
        size: usize,
    },

    #[error("AI {player} has no instruction other than STOP")]
    NoExecutableInstruction { player: String },
}

/// Roster maintenance errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("An AI named {0} already exists")]
    DuplicateName(String),

    #[error("No AI named {0} exists")]
    UnknownName(String),
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
