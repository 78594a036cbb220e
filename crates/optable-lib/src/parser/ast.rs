//! Parsed opcode map.
//!
//! Only well-formed lines make it here; malformed ones are reported as
//! diagnostics and dropped.

use optable_core::{BitPattern, InstructionSpec, OpcodeSpace};

use rowan::TextRange;

/// A word from the source together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub text: String,
    pub span: TextRange,
}

impl Name {
    pub fn new(text: impl Into<String>, span: TextRange) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// One `pattern handler` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub pattern: BitPattern,
    pub pattern_span: TextRange,
    pub handler: Name,
}

impl Entry {
    pub fn to_spec(&self) -> InstructionSpec {
        InstructionSpec::new(self.pattern, self.handler.text.clone())
    }

    /// Span of the whole line.
    pub fn span(&self) -> TextRange {
        self.pattern_span.cover(self.handler.span)
    }
}

/// A `[space]` header and everything under it, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub space: OpcodeSpace,
    pub header: TextRange,
    pub fallback: Option<Name>,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(space: OpcodeSpace, header: TextRange) -> Self {
        Self {
            space,
            header,
            fallback: None,
            entries: Vec::new(),
        }
    }

    pub fn specs(&self) -> Vec<InstructionSpec> {
        self.entries.iter().map(Entry::to_spec).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeMap {
    /// File-level `fallback = ...` directive.
    pub fallback: Option<Name>,
    pub sections: Vec<Section>,
}

impl OpcodeMap {
    pub fn section(&self, space: OpcodeSpace) -> Option<&Section> {
        self.sections.iter().find(|s| s.space == space)
    }

    /// Fallback named in the file for `space`, section directive first.
    pub fn fallback_for(&self, space: OpcodeSpace) -> Option<&Name> {
        self.section(space)
            .and_then(|s| s.fallback.as_ref())
            .or(self.fallback.as_ref())
    }
}
