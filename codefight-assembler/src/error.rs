//! Assembler errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblerError {
    #[error("Empty program")]
    Empty,

    #[error("Syntax error at column {column}: {message}")]
    SyntaxError { column: usize, message: String },

    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("Invalid argument value: {0}")]
    InvalidImmediate(String),

    #[error("Program must not end with a comma")]
    TrailingComma,

    #[error("Program has no instruction other than STOP")]
    NoExecutableInstruction,

    #[error("Invalid AI name: {0:?}")]
    InvalidName(String),

    #[error("Program has {len} instructions but at most {max} are allowed")]
    ProgramTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
