// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

use std::str::CharIndices;

use crate::types::{ByteWriter, StringWriter};

/// Conversion of a table value to `char`.
/// Tables never hold surrogates, so the replacement character is only a guard.
#[inline]
pub fn as_char(ch: u32) -> char {
    char::from_u32(ch).unwrap_or('\u{fffd}')
}

/// External iterator for a string's characters with its corresponding byte offset range.
pub struct StrCharIndexIterator<'r> {
    inner: CharIndices<'r>,
}

impl<'r> Iterator for StrCharIndexIterator<'r> {
    type Item = ((usize, usize), char);

    #[inline]
    fn next(&mut self) -> Option<((usize, usize), char)> {
        self.inner.next().map(|(i, ch)| ((i, i + ch.len_utf8()), ch))
    }
}

/// A trait providing an `index_iter` method.
pub trait StrCharIndex<'r> {
    fn index_iter(&self) -> StrCharIndexIterator<'r>;
}

impl<'r> StrCharIndex<'r> for &'r str {
    /// Iterates over each character with corresponding byte offset range.
    fn index_iter(&self) -> StrCharIndexIterator<'r> {
        StrCharIndexIterator { inner: self.char_indices() }
    }
}

/// A `ByteWriter` that only counts.
#[derive(Default)]
pub struct ByteCounter {
    pub count: usize,
}

impl ByteWriter for ByteCounter {
    fn write_byte(&mut self, _b: u8) {
        self.count += 1;
    }

    fn write_bytes(&mut self, v: &[u8]) {
        self.count += v.len();
    }
}

/// A `StringWriter` that counts UTF-16 code units.
#[derive(Default)]
pub struct Utf16Counter {
    pub count: usize,
}

impl StringWriter for Utf16Counter {
    fn write_char(&mut self, c: char) {
        self.count += c.len_utf16();
    }

    fn write_str(&mut self, s: &str) {
        self.count += s.chars().map(char::len_utf16).sum::<usize>();
    }
}

/// Input carried over from a previous call followed by the current input,
/// addressed as one stream. Offsets below `carried_len` refer to the carried bytes.
pub struct Joined<'a> {
    bytes: std::borrow::Cow<'a, [u8]>,
    carried_len: usize,
}

impl<'a> Joined<'a> {
    pub fn new(carried: &[u8], input: &'a [u8]) -> Joined<'a> {
        let bytes = if carried.is_empty() {
            std::borrow::Cow::Borrowed(input)
        } else {
            let mut v = Vec::with_capacity(carried.len() + input.len());
            v.extend_from_slice(carried);
            v.extend_from_slice(input);
            std::borrow::Cow::Owned(v)
        };
        Joined { bytes, carried_len: carried.len() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    #[inline]
    pub fn slice(&self, from: usize) -> &[u8] {
        &self.bytes[from..]
    }

    /// Translates a stream offset into an offset of the current input, clamped at zero.
    #[inline]
    pub fn input_offset(&self, i: usize) -> usize {
        i.saturating_sub(self.carried_len)
    }
}
