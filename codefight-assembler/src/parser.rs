//! Registration grammar parser
//!
//! `OPCODE,a,b` repeated and separated by commas. Opcodes are the exact
//! upper-case mnemonics; arguments are decimal `i32` values.

use codefight_spec::{Instruction, Opcode};
use logos::Logos;
use std::ops::Range;

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Parse a full program, rejecting programs made only of STOP
pub fn parse_program(source: &str) -> Result<Vec<Instruction>> {
    let instructions = parse_instructions(source)?;
    if instructions.iter().all(Instruction::is_stop) {
        return Err(AssemblerError::NoExecutableInstruction);
    }
    Ok(instructions)
}

/// Parse exactly one `OPCODE,a,b`
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    match parse_instructions(text)?.as_slice() {
        [single] => Ok(*single),
        more => Err(AssemblerError::SyntaxError {
            column: 1,
            message: format!("expected one instruction, found {}", more.len()),
        }),
    }
}

/// Parse a comma separated instruction list without semantic checks
pub fn parse_instructions(source: &str) -> Result<Vec<Instruction>> {
    if source.is_empty() {
        return Err(AssemblerError::Empty);
    }

    let mut parser = Parser::new(source)?;
    let mut instructions = Vec::new();
    loop {
        instructions.push(parser.instruction()?);
        if parser.at_end() {
            break;
        }
        parser.comma("between instructions")?;
        if parser.at_end() {
            return Err(AssemblerError::TrailingComma);
        }
    }
    Ok(instructions)
}

struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn new(source: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut lex = Token::lexer(source);
        while let Some(token) = lex.next() {
            match token {
                Ok(token) => tokens.push((token, lex.span())),
                Err(()) => {
                    return Err(AssemblerError::SyntaxError {
                        column: lex.span().start + 1,
                        message: format!("unexpected {:?}", lex.slice()),
                    })
                }
            }
        }
        Ok(Self {
            tokens,
            pos: 0,
            end: source.len(),
        })
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn column(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.end, |(_, span)| span.start)
            + 1
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        self.pos += 1;
        token
    }

    fn syntax(&self, message: String) -> AssemblerError {
        AssemblerError::SyntaxError {
            column: self.column(),
            message,
        }
    }

    fn instruction(&mut self) -> Result<Instruction> {
        let opcode = self.opcode()?;
        self.comma("after opcode")?;
        let a = self.number()?;
        self.comma("between arguments")?;
        let b = self.number()?;
        Ok(Instruction::new(opcode, a, b))
    }

    fn opcode(&mut self) -> Result<Opcode> {
        match self.tokens.get(self.pos) {
            Some((Token::Mnemonic(name), _)) => {
                let opcode = name
                    .parse::<Opcode>()
                    .map_err(|_| AssemblerError::UnknownInstruction(name.clone()))?;
                self.pos += 1;
                Ok(opcode)
            }
            Some((Token::Number(text), _)) => {
                Err(self.syntax(format!("expected opcode, found {}", text)))
            }
            Some((Token::Comma, _)) => Err(self.syntax("expected opcode, found ','".to_string())),
            None => Err(self.syntax("expected opcode".to_string())),
        }
    }

    fn number(&mut self) -> Result<i32> {
        let column = self.column();
        match self.bump() {
            Some(Token::Number(text)) => text
                .parse::<i32>()
                .map_err(|_| AssemblerError::InvalidImmediate(text)),
            Some(Token::Mnemonic(text)) => Err(AssemblerError::InvalidImmediate(text)),
            Some(Token::Comma) | None => Err(AssemblerError::SyntaxError {
                column,
                message: "expected argument".to_string(),
            }),
        }
    }

    fn comma(&mut self, context: &str) -> Result<()> {
        let column = self.column();
        match self.bump() {
            Some(Token::Comma) => Ok(()),
            _ => Err(AssemblerError::SyntaxError {
                column,
                message: format!("expected ',' {}", context),
            }),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_instruction() -> impl Strategy<Value = Instruction> {
        (0..Opcode::COUNT, any::<i32>(), any::<i32>())
            .prop_map(|(op, a, b)| Instruction::new(Opcode::ALL[op], a, b))
    }

    proptest! {
        #[test]
        fn test_display_parses_back(code in prop::collection::vec(any_instruction(), 1..20)) {
            let source = code.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(",");
            prop_assert_eq!(parse_instructions(&source).unwrap(), code);
        }
    }
}
