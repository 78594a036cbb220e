#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core of the opcode table compiler.
//!
//! Turns an ordered list of wildcard bit patterns, each mapped to a handler
//! name, into a total 256-entry dispatch table:
//! - [`BitPattern`]: one 8-symbol encoding with fixed and don't-care bits
//! - [`Expansion`]: every concrete byte a pattern matches
//! - [`TableBuilder`]: applies specs in authoring order (later specs override
//!   earlier ones) and fills the gaps with a fallback handler
//! - [`OpcodeTable`]: the finished, immutable table
//!
//! Nothing here performs I/O. Rendering tables into source text is left to
//! the caller.

pub mod expand;
pub mod pattern;
pub mod spec;
pub mod table;

#[cfg(test)]
mod pattern_tests;

pub use expand::Expansion;
pub use pattern::{BitPattern, BitSymbol, PATTERN_WIDTH, PatternFormatError};
pub use spec::{InstructionSpec, OpcodeSpace};
pub use table::{
    HandlerId, OPCODE_COUNT, OpcodeTable, Overlap, TableBuilder, build_table,
    build_table_from_strs,
};
