//! Enumeration of the concrete bytes matched by a [`BitPattern`].
//!
//! A pattern with `w` wildcards matches exactly `2^w` bytes. The expansion
//! counts `k` from `0` to `2^w - 1` and scatters the low `w` bits of `k` into
//! the wildcard positions, lowest bit of `k` into the lowest wildcard.

use std::iter::FusedIterator;

use crate::pattern::BitPattern;

/// Iterator over every byte matched by a pattern.
///
/// Bytes come out in ascending order, which callers must not rely on: the
/// expansion is a set.
#[derive(Debug, Clone)]
pub struct Expansion {
    base: u8,
    wildcards: u8,
    next: u16,
    end: u16,
}

impl Expansion {
    pub fn new(pattern: &BitPattern) -> Self {
        Self {
            base: pattern.fixed_bits(),
            wildcards: pattern.wildcard_mask(),
            next: 0,
            end: 1 << pattern.wildcard_count(),
        }
    }
}

/// Deposit the low bits of `combo` into the set bits of `mask`.
fn deposit(combo: u16, mask: u8) -> u8 {
    let mut out = 0u8;
    let mut remaining = mask;
    let mut k = 0;
    while remaining != 0 {
        let lowest = remaining & remaining.wrapping_neg();
        if combo & (1 << k) != 0 {
            out |= lowest;
        }
        remaining &= remaining - 1;
        k += 1;
    }
    out
}

impl Iterator for Expansion {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next >= self.end {
            return None;
        }
        let byte = self.base | deposit(self.next, self.wildcards);
        self.next += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion {}

impl FusedIterator for Expansion {}

impl BitPattern {
    /// Every byte this pattern matches.
    pub fn expand(&self) -> Expansion {
        Expansion::new(self)
    }
}
