//! Authored (pattern, handler) pairs and the opcode spaces they target.

use std::fmt;

use crate::pattern::{BitPattern, PatternFormatError};

/// One authored mapping from an encoding pattern to a handler name.
///
/// The handler name is opaque: it is copied into the table unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    pub pattern: BitPattern,
    pub handler: String,
}

impl InstructionSpec {
    pub fn new(pattern: BitPattern, handler: impl Into<String>) -> Self {
        Self {
            pattern,
            handler: handler.into(),
        }
    }

    pub fn parse(pattern: &str, handler: impl Into<String>) -> Result<Self, PatternFormatError> {
        Ok(Self::new(BitPattern::parse(pattern)?, handler))
    }
}

/// Independent byte-indexed instruction domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpcodeSpace {
    /// Opcodes fetched directly.
    Primary,
    /// Opcodes reached through the escape handler of the primary space.
    Prefixed,
}

impl OpcodeSpace {
    pub const ALL: [OpcodeSpace; 2] = [OpcodeSpace::Primary, OpcodeSpace::Prefixed];

    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Prefixed => "prefixed",
        }
    }

    /// Parse a space name. `prefix` is accepted as an alias of `prefixed`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "prefixed" | "prefix" => Some(Self::Prefixed),
            _ => None,
        }
    }
}

impl fmt::Display for OpcodeSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
