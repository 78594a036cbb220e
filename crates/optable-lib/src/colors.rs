//! ANSI color codes for `dump` and `expand` output.
//!
//! - `handler`: dispatched handler names
//! - `bits`: section headers and binary forms
//! - `muted`: opcode indices and fallback slots

/// Palette for CLI output, standard 16-color ANSI codes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub handler: &'static str,
    pub bits: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        handler: "\x1b[34m",
        bits: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Every code empty, output is plain text.
    pub const OFF: Self = Self {
        handler: "",
        bits: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
