//! # Codefight Opcode Definitions
//!
//! This module defines the nine opcode kinds a program may use.
//!
//! ## Opcode Table
//!
//! | Mnemonic | Effect (relative to the executing pointer `p`)       |
//! |----------|------------------------------------------------------|
//! | STOP     | halt the executing player                            |
//! | MOV_R    | copy cell `p+a` onto `p+b`                           |
//! | MOV_I    | copy cell `p+a` onto `p+b+[p+b].b`                   |
//! | ADD      | `[p].b = [p].a + [p].b`                              |
//! | ADD_R    | `[p+b].b = a + [p+b].b`                              |
//! | JMP      | `p = p+a`                                            |
//! | JMZ      | `p = p+a` if `[p+b].b == 0`                          |
//! | CMP      | skip the next turn if `[p+a].a == [p+b].b`           |
//! | SWAP     | exchange `[p+a].a` with `[p+b].b`                    |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SpecError;

/// Instruction opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Opcode {
    /// STOP: the executing player is eliminated
    Stop,
    /// MOV_R: clone cell at p+a onto p+b
    MovR,
    /// MOV_I: clone cell at p+a onto p+b, indirected by the destination's B field
    MovI,
    /// ADD: own B field becomes own A + own B
    Add,
    /// ADD_R: B field of p+b becomes a + that B field
    AddR,
    /// JMP: pointer becomes p+a
    Jmp,
    /// JMZ: pointer becomes p+a if B field of p+b is zero
    Jmz,
    /// CMP: skip the next turn if A of p+a equals B of p+b
    Cmp,
    /// SWAP: A of p+a and B of p+b trade values
    Swap,
}

impl Opcode {
    /// Number of opcode kinds
    pub const COUNT: usize = 9;

    /// All opcodes in declaration order
    pub const ALL: [Opcode; Self::COUNT] = [
        Opcode::Stop,
        Opcode::MovR,
        Opcode::MovI,
        Opcode::Add,
        Opcode::AddR,
        Opcode::Jmp,
        Opcode::Jmz,
        Opcode::Cmp,
        Opcode::Swap,
    ];

    /// Upper-case mnemonic as used by the registration grammar
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Stop => "STOP",
            Opcode::MovR => "MOV_R",
            Opcode::MovI => "MOV_I",
            Opcode::Add => "ADD",
            Opcode::AddR => "ADD_R",
            Opcode::Jmp => "JMP",
            Opcode::Jmz => "JMZ",
            Opcode::Cmp => "CMP",
            Opcode::Swap => "SWAP",
        }
    }

    /// Look up an opcode by its exact mnemonic
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }
}

impl FromStr for Opcode {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| SpecError::UnknownOpcode(s.to_string()))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_declaration_order() {
        assert_eq!(Opcode::ALL.len(), Opcode::COUNT);
        assert_eq!(Opcode::ALL[0], Opcode::Stop);
        assert_eq!(Opcode::ALL[8], Opcode::Swap);
    }

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(Opcode::from_mnemonic("MOV_R"), Some(Opcode::MovR));
        assert_eq!(Opcode::from_mnemonic("ADD_R"), Some(Opcode::AddR));
        assert_eq!(Opcode::from_mnemonic("mov_r"), None);
        assert_eq!(Opcode::from_mnemonic("NOP"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SWAP".parse::<Opcode>().unwrap(), Opcode::Swap);
        let err = "HALT".parse::<Opcode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown opcode: HALT");
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::MovI.to_string(), "MOV_I");
        assert_eq!(Opcode::Stop.to_string(), "STOP");
    }
}
