//! # Lexer for the Codefight registration grammar

use logos::Logos;

/// Tokens of `OPCODE,a,b,OPCODE,a,b,...`
///
/// Whitespace is not part of the grammar and is a lexing error.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Instruction mnemonic, matched case-sensitively by the parser
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Mnemonic(String),

    /// Decimal argument, kept as text so the parser can report overflow
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// Comma
    #[token(",")]
    Comma,
}
