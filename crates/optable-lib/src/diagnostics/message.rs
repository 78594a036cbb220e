use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Lexical and structural problems come first since they make the rest of
/// the line meaningless. Lints come last and default to warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Characters the lexer cannot place in any token
    UnexpectedCharacters,

    // Malformed lines
    UnclosedHeader,
    ExpectedSpaceName,
    ExpectedHandler,
    ExpectedValue,
    UnexpectedToken,
    TrailingTokens,

    // Well-formed lines with invalid content
    InvalidPattern,
    UnknownSpace,
    UnknownDirective,
    DuplicateSection,
    DuplicateDirective,
    EntryOutsideSection,
    MissingFallback,

    // Overlap lints, only reported on request
    PatternOverlap,
    ShadowedEntry,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::PatternOverlap | Self::ShadowedEntry => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacters => "unexpected characters",

            Self::UnclosedHeader => "missing closing `]`",
            Self::ExpectedSpaceName => "expected opcode space name",
            Self::ExpectedHandler => "expected handler name after pattern",
            Self::ExpectedValue => "expected value after `=`",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingTokens => "unexpected tokens at end of line",

            Self::InvalidPattern => "invalid bit pattern",
            Self::UnknownSpace => "unknown opcode space",
            Self::UnknownDirective => "unknown directive",
            Self::DuplicateSection => "duplicate section",
            Self::DuplicateDirective => "duplicate directive",
            Self::EntryOutsideSection => "entry outside of a section",
            Self::MissingFallback => "no fallback handler",

            Self::PatternOverlap => "pattern overrides an earlier entry",
            Self::ShadowedEntry => "entry is fully overridden",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownSpace => "`{}` is not an opcode space".to_string(),
            Self::UnknownDirective => "`{}` is not a directive".to_string(),
            Self::DuplicateSection => "section `[{}]` is already defined".to_string(),
            Self::DuplicateDirective => "`{}` is already set in this scope".to_string(),
            Self::MissingFallback => "no fallback handler for the {} table".to_string(),
            Self::InvalidPattern => "{}".to_string(),
            Self::PatternOverlap => "{}".to_string(),
            Self::ShadowedEntry => "entry `{}` is fully overridden by later entries".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(span: TextRange, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) span: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: TextRange) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.span.start()),
            u32::from(self.span.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.span.start()),
                u32::from(related.span.end())
            )?;
        }
        Ok(())
    }
}
