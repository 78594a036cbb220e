//! Wildcard bit patterns over a single opcode byte.
//!
//! A pattern is written most-significant bit first. `0` and `1` are fixed
//! bits; every other character is a wildcard. Underscores are cosmetic and
//! may appear anywhere (`00xx_0001`, `01xxx_xxx`).

use std::fmt;
use std::str::FromStr;

/// Number of bit symbols in a pattern (one opcode byte).
pub const PATTERN_WIDTH: usize = 8;

/// Cosmetic separator removed before parsing.
const SEPARATOR: char = '_';

/// A pattern string that does not reduce to exactly eight bit symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pattern `{pattern}` has {len} bit symbols, expected 8")]
pub struct PatternFormatError {
    /// The pattern as written, separators included.
    pub pattern: String,
    /// Symbol count after removing separators.
    pub len: usize,
}

/// Classification of one pattern position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitSymbol {
    Fixed0,
    Fixed1,
    Wildcard,
}

impl BitSymbol {
    fn from_char(c: char) -> Self {
        match c {
            '0' => Self::Fixed0,
            '1' => Self::Fixed1,
            _ => Self::Wildcard,
        }
    }

    /// Canonical character used by [`BitPattern`]'s `Display`.
    pub fn as_char(self) -> char {
        match self {
            Self::Fixed0 => '0',
            Self::Fixed1 => '1',
            Self::Wildcard => 'x',
        }
    }
}

/// An 8-bit encoding pattern.
///
/// Stored as two masks: `fixed` has a bit set for every non-wildcard
/// position, `bits` holds the required value of those positions. Bits of
/// `bits` outside `fixed` are always zero, so equal patterns compare equal
/// regardless of which wildcard characters they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPattern {
    fixed: u8,
    bits: u8,
}

impl BitPattern {
    /// Parse a pattern string, ignoring `_` separators.
    pub fn parse(source: &str) -> Result<Self, PatternFormatError> {
        let mut fixed = 0u8;
        let mut bits = 0u8;
        let mut len = 0usize;

        for c in source.chars().filter(|&c| c != SEPARATOR) {
            len += 1;
            if len > PATTERN_WIDTH {
                continue;
            }
            let bit = 1u8 << (PATTERN_WIDTH - len);
            match BitSymbol::from_char(c) {
                BitSymbol::Fixed0 => fixed |= bit,
                BitSymbol::Fixed1 => {
                    fixed |= bit;
                    bits |= bit;
                }
                BitSymbol::Wildcard => {}
            }
        }

        if len != PATTERN_WIDTH {
            return Err(PatternFormatError {
                pattern: source.to_string(),
                len,
            });
        }

        Ok(Self { fixed, bits })
    }

    /// Pattern matching exactly one byte.
    pub const fn exact(byte: u8) -> Self {
        Self {
            fixed: u8::MAX,
            bits: byte,
        }
    }

    /// Pattern matching every byte.
    pub const fn any() -> Self {
        Self { fixed: 0, bits: 0 }
    }

    /// Mask of fixed (non-wildcard) positions.
    pub fn fixed_mask(&self) -> u8 {
        self.fixed
    }

    /// Required values of the fixed positions; zero at wildcard positions.
    pub fn fixed_bits(&self) -> u8 {
        self.bits
    }

    /// Mask of wildcard positions.
    pub fn wildcard_mask(&self) -> u8 {
        !self.fixed
    }

    pub fn wildcard_count(&self) -> u32 {
        self.wildcard_mask().count_ones()
    }

    /// True when the pattern has no wildcard and matches a single byte.
    pub fn is_exact(&self) -> bool {
        self.fixed == u8::MAX
    }

    pub fn matches(&self, byte: u8) -> bool {
        byte & self.fixed == self.bits
    }

    /// Whether some byte matches both patterns.
    ///
    /// Two patterns are disjoint iff they disagree on a position fixed in both.
    pub fn overlaps(&self, other: &BitPattern) -> bool {
        let common = self.fixed & other.fixed;
        self.bits & common == other.bits & common
    }

    /// Symbols from the most significant bit to the least significant.
    pub fn symbols(&self) -> [BitSymbol; PATTERN_WIDTH] {
        std::array::from_fn(|i| {
            let bit = 1u8 << (PATTERN_WIDTH - 1 - i);
            if self.fixed & bit == 0 {
                BitSymbol::Wildcard
            } else if self.bits & bit == 0 {
                BitSymbol::Fixed0
            } else {
                BitSymbol::Fixed1
            }
        })
    }
}

impl FromStr for BitPattern {
    type Err = PatternFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().into_iter().enumerate() {
            if i == PATTERN_WIDTH / 2 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}
