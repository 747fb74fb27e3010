// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhint Label: fixed-length, prefix-free hint labels.
//!
//! ## Overview
//!
//! A hint session assigns one label to every candidate element. Labels are typed one
//! character at a time, so the set must be *prefix-free*: once the typed text equals a
//! label, no other label may still be reachable by typing more. This crate guarantees
//! that by giving every label in a session the same length.
//!
//! The length `L` is the smallest integer with `alphabet_len^L >= total`, never less than
//! one. A label is the base-`alphabet_len` spelling of its rank, most significant digit
//! first, left-padded with the alphabet's first symbol.
//!
//! The default [`Alphabet`] has 20 symbols ordered by reach on a standard keyboard,
//! home row first, so the best-ranked candidates get the most comfortable labels.
//!
//! ## Example
//!
//! ```rust
//! use keyhint_label::{Alphabet, generate_label, label_len};
//!
//! // 25 candidates need two characters with a 20-symbol alphabet.
//! assert_eq!(label_len(25), 2);
//! assert_eq!(generate_label(0, 25), "ff");
//! assert_eq!(generate_label(1, 25), "fj");
//! assert_eq!(generate_label(2, 25), "fd");
//!
//! // Up to 20 candidates fit in a single character.
//! let all: Vec<_> = Alphabet::DEFAULT.labels(3).collect();
//! assert_eq!(all, ["f", "j", "d"]);
//! ```
//!
//! Custom alphabets are validated:
//!
//! ```rust
//! use keyhint_label::{Alphabet, AlphabetError};
//!
//! let abc = Alphabet::new("asdf").unwrap();
//! assert_eq!(abc.label_len(17), 3);
//! assert_eq!(Alphabet::new("aa"), Err(AlphabetError::DuplicateSymbol('a')));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alphabet;

pub use alphabet::{Alphabet, AlphabetError, DEFAULT_SYMBOLS, Labels};

use alloc::string::String;

/// Label length for a session of `total` candidates using [`Alphabet::DEFAULT`].
///
/// See [`Alphabet::label_len`].
pub fn label_len(total: usize) -> usize {
    Alphabet::DEFAULT.label_len(total)
}

/// Label for rank `index` in a session of `total` candidates using [`Alphabet::DEFAULT`].
///
/// See [`Alphabet::label`].
pub fn generate_label(index: usize, total: usize) -> String {
    Alphabet::DEFAULT.label(index, total)
}
