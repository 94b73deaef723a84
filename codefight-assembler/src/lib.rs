//! Codefight Assembler
//!
//! Turn registration text into instruction lists and named programs.
//!
//! ## Example
//!
//! ```rust
//! use codefight_assembler::assemble;
//!
//! let program = assemble("dwarf", "ADD_R,4,3,MOV_I,2,2,JMP,-2,0", 10).unwrap();
//! assert_eq!(program.len(), 3);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::{parse_instruction, parse_instructions, parse_program};
