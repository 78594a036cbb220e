//! Optable: compile wildcard opcode maps into dense dispatch tables.
//!
//! # Example
//!
//! ```
//! use optable_lib::TableCompiler;
//!
//! let source = r#"
//!     fallback = instr_unimplemented
//!
//!     [primary]
//!     0000_0000  instr_nop
//!     1100_1011  instr_cb_prefix
//! "#;
//!
//! let compiled = TableCompiler::new(source).compile().expect("valid opcode map");
//! assert_eq!(compiled.primary.get(0xCB), "instr_cb_prefix");
//! assert_eq!(compiled.prefixed.get(0xCB), "instr_unimplemented");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod dump;
pub mod emit;
pub mod parser;
pub mod presets;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod presets_tests;

pub use colors::Colors;
pub use compile::{Compilation, CompileOptions, TableCompiler};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{EmitConfig, EmitError};

pub use optable_core::{BitPattern, InstructionSpec, OpcodeSpace, OpcodeTable};

/// Errors that can occur while compiling an opcode map.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("opcode map is invalid: {} errors", .0.error_count())]
    InvalidSpec(Diagnostics),
}

/// Result type for opcode map operations.
pub type Result<T> = std::result::Result<T, Error>;
