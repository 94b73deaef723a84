//! Display errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("Address {address} is out of bounds of the memory (size {size})")]
    AddressOutOfRange { address: i64, size: usize },
}

pub type Result<T> = std::result::Result<T, DisplayError>;
