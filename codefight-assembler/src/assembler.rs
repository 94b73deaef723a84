//! Main assembler logic

use codefight_spec::Program;

use crate::error::{AssemblerError, Result};
use crate::parser::parse_program;

/// Assemble a named program for registration.
///
/// `max_len` is the longest program the arena accepts, see
/// [`codefight_spec::ArenaConfig::max_program_len`].
pub fn assemble(name: &str, source: &str, max_len: usize) -> Result<Program> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(AssemblerError::InvalidName(name.to_string()));
    }

    let instructions = parse_program(source)?;
    if instructions.len() > max_len {
        return Err(AssemblerError::ProgramTooLong {
            len: instructions.len(),
            max: max_len,
        });
    }

    tracing::debug!("assembled {} ({} instructions)", name, instructions.len());
    Ok(Program::new(name, instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codefight_spec::Instruction;

    #[test]
    fn test_assemble_simple() {
        let program = assemble("imp", "MOV_R,0,1", 4).unwrap();
        assert_eq!(program.name(), "imp");
        assert_eq!(program.instructions(), &[Instruction::MovR { a: 0, b: 1 }]);
    }

    #[test]
    fn test_assemble_length_limit() {
        let source = "JMP,0,0,JMP,0,0,JMP,0,0,JMP,0,0,JMP,0,0";
        assert!(assemble("five", source, 5).is_ok());
        assert_eq!(
            assemble("five", source, 4).unwrap_err(),
            AssemblerError::ProgramTooLong { len: 5, max: 4 }
        );
    }

    #[test]
    fn test_assemble_rejects_bad_names() {
        assert_eq!(
            assemble("", "JMP,0,0", 4).unwrap_err(),
            AssemblerError::InvalidName(String::new())
        );
        assert!(matches!(
            assemble("two words", "JMP,0,0", 4),
            Err(AssemblerError::InvalidName(_))
        ));
    }

    #[test]
    fn test_assemble_propagates_parse_errors() {
        assert_eq!(
            assemble("dud", "STOP,0,0", 4).unwrap_err(),
            AssemblerError::NoExecutableInstruction
        );
    }
}
