//! Codefight Instruction Set
//!
//! Every instruction carries exactly two signed 32-bit arguments, `a` and `b`.
//! Arguments are offsets relative to the executing player's pointer, except
//! where the opcode documentation says otherwise.

use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};

/// Codefight Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// STOP: eliminate the executing player
    Stop { a: i32, b: i32 },

    /// MOV_R: clone cell p+a onto p+b
    MovR { a: i32, b: i32 },

    /// MOV_I: clone cell p+a onto p+b+[p+b].b
    MovI { a: i32, b: i32 },

    /// ADD: [p].b = [p].a + [p].b
    Add { a: i32, b: i32 },

    /// ADD_R: [p+b].b = a + [p+b].b
    AddR { a: i32, b: i32 },

    /// JMP: p = p+a
    Jmp { a: i32, b: i32 },

    /// JMZ: p = p+a if [p+b].b == 0
    Jmz { a: i32, b: i32 },

    /// CMP: skip next turn if [p+a].a == [p+b].b
    Cmp { a: i32, b: i32 },

    /// SWAP: [p+a].a <-> [p+b].b
    Swap { a: i32, b: i32 },
}

impl Instruction {
    /// Build an instruction from its opcode and arguments.
    ///
    /// The mapping is total: every (opcode, a, b) triple names exactly one instruction.
    pub const fn new(opcode: Opcode, a: i32, b: i32) -> Self {
        match opcode {
            Opcode::Stop => Instruction::Stop { a, b },
            Opcode::MovR => Instruction::MovR { a, b },
            Opcode::MovI => Instruction::MovI { a, b },
            Opcode::Add => Instruction::Add { a, b },
            Opcode::AddR => Instruction::AddR { a, b },
            Opcode::Jmp => Instruction::Jmp { a, b },
            Opcode::Jmz => Instruction::Jmz { a, b },
            Opcode::Cmp => Instruction::Cmp { a, b },
            Opcode::Swap => Instruction::Swap { a, b },
        }
    }

    /// The `STOP,0,0` instruction used to fill an empty arena
    pub const fn stop() -> Self {
        Instruction::Stop { a: 0, b: 0 }
    }

    /// Get the opcode
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Stop { .. } => Opcode::Stop,
            Instruction::MovR { .. } => Opcode::MovR,
            Instruction::MovI { .. } => Opcode::MovI,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::AddR { .. } => Opcode::AddR,
            Instruction::Jmp { .. } => Opcode::Jmp,
            Instruction::Jmz { .. } => Opcode::Jmz,
            Instruction::Cmp { .. } => Opcode::Cmp,
            Instruction::Swap { .. } => Opcode::Swap,
        }
    }

    /// Get both arguments as `(a, b)`
    pub const fn args(&self) -> (i32, i32) {
        match *self {
            Instruction::Stop { a, b }
            | Instruction::MovR { a, b }
            | Instruction::MovI { a, b }
            | Instruction::Add { a, b }
            | Instruction::AddR { a, b }
            | Instruction::Jmp { a, b }
            | Instruction::Jmz { a, b }
            | Instruction::Cmp { a, b }
            | Instruction::Swap { a, b } => (a, b),
        }
    }

    /// First argument
    #[inline]
    pub const fn a(&self) -> i32 {
        self.args().0
    }

    /// Second argument
    #[inline]
    pub const fn b(&self) -> i32 {
        self.args().1
    }

    /// Get instruction mnemonic
    pub const fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Check if this is a STOP instruction
    pub const fn is_stop(&self) -> bool {
        matches!(self, Instruction::Stop { .. })
    }
}

impl Default for Instruction {
    fn default() -> Self {
        Self::stop()
    }
}

/// Formats in registration grammar form: `OPCODE,a,b`
impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.args();
        write!(f, "{},{},{}", self.mnemonic(), a, b)
    }
}
