//! Splice compiled tables into a source template.
//!
//! Each table renders as 256 designated-initializer lines, one per opcode,
//! so a C array literal like `{/*[REPLACE_ME]*/}` becomes a complete
//! dispatch table.

mod error;


pub use error::EmitError;

use std::fmt::Write;

use optable_core::{OpcodeSpace, OpcodeTable};
use tracing::debug;

use crate::Compilation;

/// Marker replaced by the primary table entries.
pub const PRIMARY_PLACEHOLDER: &str = "/*[REPLACE_ME]*/";

/// Marker replaced by the prefixed table entries.
pub const PREFIXED_PLACEHOLDER: &str = "/*PREFIX_OPTABLE*/";

/// C header declaring `optable` and `prefix_optable` arrays.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.h");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    pub primary_placeholder: String,
    pub prefixed_placeholder: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            primary_placeholder: PRIMARY_PLACEHOLDER.to_string(),
            prefixed_placeholder: PREFIXED_PLACEHOLDER.to_string(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_placeholder(mut self, marker: impl Into<String>) -> Self {
        self.primary_placeholder = marker.into();
        self
    }

    pub fn prefixed_placeholder(mut self, marker: impl Into<String>) -> Self {
        self.prefixed_placeholder = marker.into();
        self
    }

    pub fn placeholder(&self, space: OpcodeSpace) -> &str {
        match space {
            OpcodeSpace::Primary => &self.primary_placeholder,
            OpcodeSpace::Prefixed => &self.prefixed_placeholder,
        }
    }
}

/// Render all 256 entries of `table`.
///
/// Starts with a newline, then one `\t[0xNN] \t= \thandler, \n` line per
/// opcode in ascending order.
pub fn render_entries(table: &OpcodeTable) -> String {
    let mut out = String::with_capacity(1 + table.len() * 32);
    out.push('\n');
    for (opcode, handler) in table.entries() {
        writeln!(out, "\t[0x{opcode:02x}] \t= \t{handler}, ").expect("String write never fails");
    }
    out
}

/// Replace every occurrence of both placeholders in `template`.
///
/// The primary placeholder is substituted first.
pub fn emit(
    template: &str,
    compilation: &Compilation,
    config: &EmitConfig,
) -> Result<String, EmitError> {
    if config.primary_placeholder == config.prefixed_placeholder {
        return Err(EmitError::AmbiguousPlaceholder(
            config.primary_placeholder.clone(),
        ));
    }

    for space in OpcodeSpace::ALL {
        let placeholder = config.placeholder(space);
        if placeholder.is_empty() || !template.contains(placeholder) {
            return Err(EmitError::MissingPlaceholder {
                space,
                placeholder: placeholder.to_string(),
            });
        }
    }

    let mut out = template.to_string();
    for space in OpcodeSpace::ALL {
        let entries = render_entries(compilation.table(space));
        out = out.replace(config.placeholder(space), &entries);
    }

    debug!(
        target: "optable::emit",
        template_bytes = template.len(),
        output_bytes = out.len(),
        "filled template"
    );
    Ok(out)
}
