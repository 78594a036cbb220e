//! Line grammar.
//!
//! Every line is one of:
//!
//! - `[space]` opens a section
//! - `key = value` sets a directive in the current scope
//! - `pattern handler` adds an entry to the current section
//!
//! A malformed line is reported and dropped; parsing resumes at the next
//! line, so one pass collects every error in the file.

use optable_core::{BitPattern, OpcodeSpace};

use super::ast::{Entry, Name, OpcodeMap, Section};
use super::lexer::{Token, TokenKind, token_text};
use rowan::TextRange;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// The only directive the format knows.
pub const FALLBACK_DIRECTIVE: &str = "fallback";

#[derive(Debug)]
pub struct ParseResult {
    pub map: OpcodeMap,
    pub diagnostics: Diagnostics,
}

/// Where directives and entries currently land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Section(usize),
    /// Under a rejected header. Lines are still checked but not recorded.
    Ignored,
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    scope: Scope,
    map: OpcodeMap,
    diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            scope: Scope::TopLevel,
            map: OpcodeMap::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn parse(mut self) -> ParseResult {
        while let Some(line) = self.next_line() {
            self.parse_line(&line);
        }
        ParseResult {
            map: self.map,
            diagnostics: self.diagnostics,
        }
    }

    /// Significant tokens up to the next newline. `None` at end of input.
    fn next_line(&mut self) -> Option<Vec<Token>> {
        if self.pos >= self.tokens.len() {
            return None;
        }

        let mut line = Vec::new();
        while let Some(&token) = self.tokens.get(self.pos) {
            self.pos += 1;
            match token.kind {
                TokenKind::Newline => break,
                kind if kind.is_trivia() => {}
                _ => line.push(token),
            }
        }
        Some(line)
    }

    fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    fn parse_line(&mut self, line: &[Token]) {
        let Some(first) = line.first() else {
            return;
        };

        let mut has_garbage = false;
        for token in line.iter().filter(|t| t.kind == TokenKind::Garbage) {
            has_garbage = true;
            let text = self.text(token);
            self.diagnostics
                .report(DiagnosticKind::UnexpectedCharacters, token.span)
                .message(format!("`{}`", text.escape_debug()))
                .emit();
        }
        if has_garbage {
            return;
        }

        match first.kind {
            TokenKind::BracketOpen => self.parse_header(line),
            TokenKind::Word if line.get(1).is_some_and(|t| t.kind == TokenKind::Equals) => {
                self.parse_directive(line)
            }
            TokenKind::Word => self.parse_entry(line),
            kind => {
                self.diagnostics
                    .report(DiagnosticKind::UnexpectedToken, first.span)
                    .message(kind.describe())
                    .emit();
            }
        }
    }

    fn parse_header(&mut self, line: &[Token]) {
        let open = line[0];
        // Until the header is known good, lines below it belong nowhere.
        self.scope = Scope::Ignored;

        let Some(name) = line.get(1).filter(|t| t.kind == TokenKind::Word) else {
            let span = line.get(1).map_or(TextRange::empty(open.span.end()), |t| t.span);
            self.diagnostics
                .report(DiagnosticKind::ExpectedSpaceName, span)
                .emit();
            return;
        };

        let Some(close) = line.get(2).filter(|t| t.kind == TokenKind::BracketClose) else {
            self.diagnostics
                .report(DiagnosticKind::UnclosedHeader, open.span.cover(name.span))
                .emit();
            return;
        };

        let header = open.span.cover(close.span);
        self.check_trailing(&line[3..]);

        let text = self.text(name);
        let Some(space) = OpcodeSpace::from_name(text) else {
            self.diagnostics
                .report(DiagnosticKind::UnknownSpace, name.span)
                .message(text)
                .emit();
            return;
        };

        if let Some(first) = self.map.section(space) {
            let first_header = first.header;
            self.diagnostics
                .report(DiagnosticKind::DuplicateSection, header)
                .message(space.name())
                .related_to("first defined here", first_header)
                .emit();
            return;
        }

        self.map.sections.push(Section::new(space, header));
        self.scope = Scope::Section(self.map.sections.len() - 1);
    }

    fn parse_directive(&mut self, line: &[Token]) {
        let key = line[0];
        let equals = line[1];

        let Some(value) = line.get(2).filter(|t| t.kind == TokenKind::Word) else {
            let span = line
                .get(2)
                .map_or(TextRange::empty(equals.span.end()), |t| t.span);
            self.diagnostics
                .report(DiagnosticKind::ExpectedValue, span)
                .emit();
            return;
        };
        self.check_trailing(&line[3..]);

        let key_text = self.text(&key);
        if key_text != FALLBACK_DIRECTIVE {
            self.diagnostics
                .report(DiagnosticKind::UnknownDirective, key.span)
                .message(key_text)
                .emit();
            return;
        }

        let value = Name::new(self.text(value), value.span);
        let slot = match self.scope {
            Scope::TopLevel => &mut self.map.fallback,
            Scope::Section(index) => &mut self.map.sections[index].fallback,
            Scope::Ignored => return,
        };

        if let Some(previous) = &*slot {
            self.diagnostics
                .report(DiagnosticKind::DuplicateDirective, key.span.cover(value.span))
                .message(FALLBACK_DIRECTIVE)
                .related_to("first set here", previous.span)
                .emit();
            return;
        }
        *slot = Some(value);
    }

    fn parse_entry(&mut self, line: &[Token]) {
        let pattern_token = line[0];

        let Some(handler) = line.get(1).filter(|t| t.kind == TokenKind::Word) else {
            let span = line
                .get(1)
                .map_or(TextRange::empty(pattern_token.span.end()), |t| t.span);
            self.diagnostics
                .report(DiagnosticKind::ExpectedHandler, span)
                .emit();
            return;
        };
        self.check_trailing(&line[2..]);

        let pattern = match BitPattern::parse(self.text(&pattern_token)) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidPattern, pattern_token.span)
                    .message(err.to_string())
                    .emit();
                None
            }
        };

        let index = match self.scope {
            Scope::Section(index) => index,
            Scope::Ignored => return,
            Scope::TopLevel => {
                self.diagnostics
                    .report(
                        DiagnosticKind::EntryOutsideSection,
                        pattern_token.span.cover(handler.span),
                    )
                    .emit();
                return;
            }
        };

        let Some(pattern) = pattern else {
            return;
        };

        let handler = Name::new(self.text(handler), handler.span);
        self.map.sections[index].entries.push(Entry {
            pattern,
            pattern_span: pattern_token.span,
            handler,
        });
    }

    fn check_trailing(&mut self, rest: &[Token]) {
        let (Some(first), Some(last)) = (rest.first(), rest.last()) else {
            return;
        };
        let text = &self.source[first.span.cover(last.span)];
        self.diagnostics
            .report(DiagnosticKind::TrailingTokens, first.span.cover(last.span))
            .message(format!("`{text}`"))
            .emit();
    }
}
