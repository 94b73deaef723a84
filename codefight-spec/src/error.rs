//! # Error Types for Codefight

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::UnknownOpcode("NOP".to_string());
        assert_eq!(err.to_string(), "Unknown opcode: NOP");
    }
}
