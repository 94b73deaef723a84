//! # Codefight Specification
//!
//! Core types shared by every Codefight crate.
//!
//! ## Key Features
//! - Nine-opcode instruction set, each instruction carrying two `i32` arguments
//! - Named programs registered once and cloned into every match
//! - Circular arena of 7 to 1337 cells, filled with `STOP` or seeded random cells
//! - Display glyph configuration validated at process start

pub mod opcode;
pub mod instruction;
pub mod program;
pub mod config;
pub mod error;

pub use opcode::Opcode;
pub use instruction::Instruction;
pub use program::Program;
pub use config::{
    ArenaConfig, ConfigError, DisplayConfig, FillMode, Glyphs, MarkerGlyphs, MAX_ARENA_SIZE,
    MAX_FILL_SEED, MIN_ARENA_SIZE, MIN_FILL_SEED,
};
pub use error::SpecError;

/// Arena address, always in `[0, size)` once sanitized
pub type Address = usize;
