//! Opcode map compilation: parse, resolve fallbacks, build one table per space.

use indexmap::IndexMap;
use optable_core::{OpcodeSpace, OpcodeTable, TableBuilder};
use tracing::debug;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{self, OpcodeMap, ParseResult, Section};
use rowan::TextRange;

use crate::{Error, Result};

/// Compilation settings that do not come from the opcode map itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Fallback used for a space when neither its section nor the file names one.
    pub default_fallback: Option<String>,
    /// Report overlapping and fully overridden entries as warnings.
    pub check_overlaps: bool,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_fallback(mut self, name: impl Into<String>) -> Self {
        self.default_fallback = Some(name.into());
        self
    }

    pub fn check_overlaps(mut self, value: bool) -> Self {
        self.check_overlaps = value;
        self
    }
}

/// Both dispatch tables of a successfully compiled opcode map.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub primary: OpcodeTable,
    pub prefixed: OpcodeTable,
    /// Lints collected when overlap checking is on. Never contains errors.
    pub warnings: Diagnostics,
}

impl Compilation {
    pub fn table(&self, space: OpcodeSpace) -> &OpcodeTable {
        match space {
            OpcodeSpace::Primary => &self.primary,
            OpcodeSpace::Prefixed => &self.prefixed,
        }
    }
}

pub struct TableCompiler<'src> {
    source: &'src str,
    options: CompileOptions,
}

impl<'src> TableCompiler<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            options: CompileOptions::default(),
        }
    }

    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Any parse error, or a space left without a fallback, fails the whole
    /// compilation. No partial tables are produced.
    pub fn compile(self) -> Result<Compilation> {
        let ParseResult {
            map,
            mut diagnostics,
        } = parser::parse(self.source);

        debug!(
            target: "optable::compile",
            sections = map.sections.len(),
            errors = diagnostics.error_count(),
            "parsed opcode map"
        );

        let primary_fallback =
            self.resolve_fallback(&map, OpcodeSpace::Primary, &mut diagnostics);
        let prefixed_fallback =
            self.resolve_fallback(&map, OpcodeSpace::Prefixed, &mut diagnostics);

        let (Some(primary_fallback), Some(prefixed_fallback)) =
            (primary_fallback, prefixed_fallback)
        else {
            return Err(Error::InvalidSpec(diagnostics));
        };
        if diagnostics.has_errors() {
            return Err(Error::InvalidSpec(diagnostics));
        }

        let primary = self.build_space(
            &map,
            OpcodeSpace::Primary,
            &primary_fallback,
            &mut diagnostics,
        );
        let prefixed = self.build_space(
            &map,
            OpcodeSpace::Prefixed,
            &prefixed_fallback,
            &mut diagnostics,
        );

        Ok(Compilation {
            primary,
            prefixed,
            warnings: diagnostics,
        })
    }

    /// Section directive, then file directive, then the configured default.
    fn resolve_fallback(
        &self,
        map: &OpcodeMap,
        space: OpcodeSpace,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        if let Some(name) = map.fallback_for(space) {
            return Some(name.text.clone());
        }
        if let Some(name) = &self.options.default_fallback {
            return Some(name.clone());
        }

        let span = map
            .section(space)
            .map_or(TextRange::empty(0.into()), |section| section.header);
        diagnostics
            .report(DiagnosticKind::MissingFallback, span)
            .message(space.name())
            .emit();
        None
    }

    fn build_space(
        &self,
        map: &OpcodeMap,
        space: OpcodeSpace,
        fallback: &str,
        diagnostics: &mut Diagnostics,
    ) -> OpcodeTable {
        let mut builder = TableBuilder::new();
        let section = map.section(space);

        if let Some(section) = section {
            builder.extend(&section.specs());
            if self.options.check_overlaps {
                report_overlaps(section, &builder, diagnostics);
            }
        }

        let table = builder.finish(fallback);
        debug!(
            target: "optable::compile",
            space = %space,
            entries = section.map_or(0, |s| s.entries.len()),
            handlers = table.handlers().len(),
            fallback_slots = table.fallback_count(),
            "built opcode table"
        );
        table
    }
}

/// One warning per (earlier, later) entry pair, in the order the first
/// override happened, then one per entry left with no opcode at all.
fn report_overlaps(section: &Section, builder: &TableBuilder, diagnostics: &mut Diagnostics) {
    let mut pairs: IndexMap<(usize, usize), usize> = IndexMap::new();
    for overlap in builder.overlaps() {
        *pairs.entry((overlap.earlier, overlap.later)).or_default() += 1;
    }

    for ((earlier, later), count) in pairs {
        let earlier = &section.entries[earlier];
        let later = &section.entries[later];
        let plural = if count == 1 { "" } else { "s" };
        diagnostics
            .report(DiagnosticKind::PatternOverlap, later.pattern_span)
            .message(format!(
                "`{}` overrides `{}` on {count} opcode{plural}",
                later.handler.text, earlier.handler.text
            ))
            .related_to("overridden entry", earlier.span())
            .emit();
    }

    for index in builder.shadowed() {
        let entry = &section.entries[index];
        diagnostics
            .report(DiagnosticKind::ShadowedEntry, entry.span())
            .message(&entry.handler.text)
            .emit();
    }
}
