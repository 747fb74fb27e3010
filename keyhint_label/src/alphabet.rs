// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alphabets and label generation.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Symbols of the default alphabet: home row first, then strong fingers.
pub const DEFAULT_SYMBOLS: &str = "fjdkslaghwrieucmvnqo";

/// Reasons a custom alphabet is rejected by [`Alphabet::new`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AlphabetError {
    /// Fewer than two symbols; a one-symbol alphabet cannot tell labels apart.
    TooFewSymbols(usize),
    /// A symbol outside `a..=z`.
    InvalidSymbol(char),
    /// A symbol appears more than once.
    DuplicateSymbol(char),
}

impl core::fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewSymbols(n) => {
                write!(f, "alphabet needs at least two symbols, got {n}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "alphabet symbol {c:?} is not a lowercase ASCII letter")
            }
            Self::DuplicateSymbol(c) => write!(f, "alphabet symbol {c:?} appears twice"),
        }
    }
}

impl core::error::Error for AlphabetError {}

/// An ordered set of label symbols.
///
/// Earlier symbols are cheaper to type; rank `0` is spelled entirely with the first
/// symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Cow<'static, [u8]>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Alphabet {
    /// The 20-symbol default alphabet, [`DEFAULT_SYMBOLS`].
    pub const DEFAULT: Self = Self {
        symbols: Cow::Borrowed(DEFAULT_SYMBOLS.as_bytes()),
    };

    /// Build an alphabet from `symbols`, in preference order.
    ///
    /// Symbols must be distinct lowercase ASCII letters and there must be at least two.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut seen = [false; 26];
        let mut out = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            let b = match u8::try_from(c) {
                Ok(b) if b.is_ascii_lowercase() => b,
                _ => return Err(AlphabetError::InvalidSymbol(c)),
            };
            let slot = &mut seen[usize::from(b - b'a')];
            if *slot {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
            *slot = true;
            out.push(b);
        }
        if out.len() < 2 {
            return Err(AlphabetError::TooFewSymbols(out.len()));
        }
        Ok(Self {
            symbols: Cow::Owned(out),
        })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Smallest `L >= 1` with `len^L >= total`.
    ///
    /// Non-decreasing in `total`. Saturates rather than overflowing, so every `usize`
    /// total has a finite answer.
    pub fn label_len(&self, total: usize) -> usize {
        let base = self.symbols.len();
        let mut len = 1;
        let mut capacity = base;
        while capacity < total {
            len += 1;
            capacity = capacity.saturating_mul(base);
        }
        len
    }

    /// Label for rank `index` among `total` candidates.
    ///
    /// Every label for the same `total` has length [`label_len(total)`](Self::label_len).
    /// `index` should be below `total`; larger values keep only the low-order digits that
    /// fit.
    pub fn label(&self, index: usize, total: usize) -> String {
        self.spell(index, self.label_len(total))
    }

    /// All labels for a session of `total` candidates, in rank order.
    pub fn labels(&self, total: usize) -> Labels<'_> {
        Labels {
            alphabet: self,
            next: 0,
            total,
            len: self.label_len(total),
        }
    }

    fn spell(&self, index: usize, len: usize) -> String {
        let base = self.symbols.len();
        let mut digits = vec![self.symbols[0]; len];
        let mut rest = index;
        for slot in digits.iter_mut().rev() {
            *slot = self.symbols[rest % base];
            rest /= base;
        }
        digits.into_iter().map(char::from).collect()
    }
}

/// Iterator over the labels of one session, returned by [`Alphabet::labels`].
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    alphabet: &'a Alphabet,
    next: usize,
    total: usize,
    len: usize,
}

impl Iterator for Labels<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.total {
            return None;
        }
        let label = self.alphabet.spell(self.next, self.len);
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.total - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Labels<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn default_alphabet_has_twenty_symbols() {
        assert_eq!(Alphabet::DEFAULT.len(), 20);
        assert_eq!(Alphabet::new(DEFAULT_SYMBOLS), Ok(Alphabet::DEFAULT));
    }

    #[test]
    fn label_len_boundaries() {
        let a = Alphabet::DEFAULT;
        assert_eq!(a.label_len(0), 1);
        assert_eq!(a.label_len(1), 1);
        assert_eq!(a.label_len(20), 1);
        assert_eq!(a.label_len(21), 2);
        assert_eq!(a.label_len(400), 2);
        assert_eq!(a.label_len(401), 3);
        assert_eq!(a.label_len(8000), 3);
        assert_eq!(a.label_len(8001), 4);
    }

    #[test]
    fn label_len_is_monotonic_and_minimal() {
        let a = Alphabet::new("abc").unwrap();
        let mut prev = 1;
        for total in 1..200usize {
            let len = a.label_len(total);
            assert!(len >= prev, "length shrank at {total}");
            assert!(3usize.pow(len as u32) >= total, "too short at {total}");
            if len > 1 {
                assert!(3usize.pow(len as u32 - 1) < total, "not minimal at {total}");
            }
            prev = len;
        }
    }

    #[test]
    fn label_len_saturates_at_usize_max() {
        let a = Alphabet::new("ab").unwrap();
        assert_eq!(a.label_len(usize::MAX), usize::BITS as usize);
    }

    #[test]
    fn labels_are_unique_equal_length_and_prefix_free() {
        for total in [1usize, 2, 19, 20, 21, 25, 399, 400, 401] {
            let labels: Vec<String> = Alphabet::DEFAULT.labels(total).collect();
            assert_eq!(labels.len(), total);
            let len = Alphabet::DEFAULT.label_len(total);
            assert!(labels.iter().all(|l| l.len() == len), "ragged at {total}");
            let unique: BTreeSet<&String> = labels.iter().collect();
            assert_eq!(unique.len(), total, "duplicate label at {total}");
            // Spot-check prefix-freeness on the first few labels.
            for a in labels.iter().take(30) {
                for b in labels.iter().take(30) {
                    assert!(a == b || !b.starts_with(a.as_str()), "{a} prefixes {b}");
                }
            }
        }
    }

    #[test]
    fn rank_zero_is_padded_with_first_symbol() {
        assert_eq!(Alphabet::DEFAULT.label(0, 1), "f");
        assert_eq!(Alphabet::DEFAULT.label(0, 401), "fff");
        assert_eq!(Alphabet::DEFAULT.label(19, 20), "o");
        assert_eq!(Alphabet::DEFAULT.label(20, 21), "jf");
        assert_eq!(Alphabet::DEFAULT.label(399, 400), "oo");
    }

    #[test]
    fn labels_iterator_matches_label() {
        let it = Alphabet::DEFAULT.labels(25);
        assert_eq!(it.len(), 25);
        for (i, l) in it.enumerate() {
            assert_eq!(l, Alphabet::DEFAULT.label(i, 25));
        }
        assert_eq!(Alphabet::DEFAULT.labels(0).count(), 0);
    }

    #[test]
    fn new_rejects_bad_alphabets() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::TooFewSymbols(0)));
        assert_eq!(Alphabet::new("f"), Err(AlphabetError::TooFewSymbols(1)));
        assert_eq!(Alphabet::new("fJ"), Err(AlphabetError::InvalidSymbol('J')));
        assert_eq!(Alphabet::new("f1"), Err(AlphabetError::InvalidSymbol('1')));
        assert_eq!(Alphabet::new("fjf"), Err(AlphabetError::DuplicateSymbol('f')));
    }
}
