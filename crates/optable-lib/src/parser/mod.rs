//! Parser for the `.opmap` authoring format.
//!
//! ```text
//! # comment
//! fallback = instr_unimplemented
//!
//! [primary]
//! 0000_0000  instr_nop
//! 00xx_0001  instr_ld_r16_imm16
//!
//! [prefixed]
//! 0000_0xxx  instr_rlc_r8
//! ```
//!
//! Parsing never stops at the first problem. The result always carries an
//! [`OpcodeMap`] built from the well-formed lines plus every diagnostic.

pub mod ast;
pub mod lexer;

mod grammar;

#[cfg(test)]
mod tests;

pub use ast::{Entry, Name, OpcodeMap, Section};
pub use grammar::{FALLBACK_DIRECTIVE, ParseResult, Parser};

use lexer::lex;

/// Main entry point.
pub fn parse(source: &str) -> ParseResult {
    Parser::new(source, lex(source)).parse()
}
