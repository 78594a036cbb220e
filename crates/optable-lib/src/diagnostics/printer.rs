//! Rendering of opcode map diagnostics.
//!
//! With the map source at hand every message becomes an annotated snippet
//! pointing at the offending line. Without it each message is one plain
//! `severity at start..end: message` line.

use std::fmt;
use std::ops::Range;

use annotate_snippets::{Annotation, AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticKind, DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Opcode map text the spans point into.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown in the `-->` line.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn snippet<'a>(
        &'a self,
        source: &'a str,
        diag: &'a DiagnosticMessage,
    ) -> Snippet<'a, Annotation<'a>> {
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(clamp(diag.span, source.len()))
                .label(primary_label(diag)),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(clamp(related.span, source.len()))
                    .label(&related.message),
            );
        }
        snippet
    }
}

impl fmt::Display for DiagnosticsPrinter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let Some(source) = self.source else {
                write!(f, "{diag}")?;
                continue;
            };
            let level = match diag.severity() {
                Severity::Error => Level::ERROR,
                Severity::Warning => Level::WARNING,
            };
            let report: Vec<Group> =
                vec![level.primary_title(&diag.message).element(self.snippet(source, diag))];
            write!(f, "{}", renderer.render(&report))?;
        }
        Ok(())
    }
}

/// Overlap lints describe the opcodes changing hands; everything else
/// repeats the message under the caret.
fn primary_label(diag: &DiagnosticMessage) -> &str {
    match diag.kind {
        DiagnosticKind::PatternOverlap => "applied later, takes over the shared opcodes",
        DiagnosticKind::ShadowedEntry => "no opcode dispatches here",
        _ => &diag.message,
    }
}

/// Byte range inside `source`. Empty spans widen to one character so the
/// caret stays visible.
fn clamp(span: TextRange, len: usize) -> Range<usize> {
    let start = usize::from(span.start()).min(len);
    let end = usize::from(span.end()).min(len);
    if start == end {
        return start..(start + 1).min(len);
    }
    start..end
}
