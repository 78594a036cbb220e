//! Lexer for opcode map sources.
//!
//! Produces span-based tokens without storing text. Text is sliced from the
//! source only when needed.
//!
//! Consecutive characters that fit no token are coalesced into a single
//! `Garbage` token rather than one error per character.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("=")]
    Equals,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    /// Pattern, handler, space or directive name. The parser decides which.
    #[regex(r"[^\s\[\]=#\x00-\x1F\x7F]+", allow_greedy = true)]
    Word,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Human-readable name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::BracketOpen => "`[`",
            Self::BracketClose => "`]`",
            Self::Equals => "`=`",
            Self::Newline => "end of line",
            Self::Word => "name",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Garbage => "unexpected characters",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, range_to_text_range(start..end)));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span]
}
