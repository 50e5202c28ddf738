// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Best-fit fallback tables and the recursion guard shared by a conversion call.

use crate::error::{Error, Result};

/// Deepest chain of fallbacks whose output is itself unmappable.
pub const MAX_FALLBACK_DEPTH: usize = 250;

/// Sorted `(key, substitute)` pairs, searched by binary search.
///
/// For encoding the key is a BMP code point and the substitute a character.
/// For decoding the key is a one- or two-byte sequence read as a big-endian integer.
#[derive(Clone, Debug, Default)]
pub struct BestFitTable {
    pairs: Vec<(u16, u16)>,
}

impl BestFitTable {
    /// Builds a table from pairs in any order. Later duplicates win.
    pub fn new(mut pairs: Vec<(u16, u16)>) -> BestFitTable {
        pairs.reverse();
        pairs.sort_by_key(|&(key, _)| key);
        pairs.dedup_by_key(|&mut (key, _)| key);
        BestFitTable { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Looks up the substitute of `key`.
    pub fn get(&self, key: u16) -> Option<u16> {
        self.pairs
            .binary_search_by_key(&key, |&(k, _)| k)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    /// Looks up the substitute character of the character `ch`.
    pub fn substitute_char(&self, ch: char) -> Option<char> {
        let code = ch as u32;
        if code > 0xffff {
            return None;
        }
        self.get(code as u16).and_then(|c| char::from_u32(c as u32))
    }

    /// Looks up the character for a one- or two-byte sequence.
    pub fn substitute_bytes(&self, bytes: &[u8]) -> Option<char> {
        let key = match *bytes {
            [b] => b as u16,
            [lead, trail] => (lead as u16) << 8 | trail as u16,
            _ => return None,
        };
        self.get(key).and_then(|c| char::from_u32(c as u32))
    }
}

/// Replacement used when an unmappable character has no best-fit entry.
/// Supplementary characters stand for two UTF-16 units and get one `?` each.
pub fn default_substitute(ch: char) -> &'static str {
    if ch as u32 > 0xffff {
        "??"
    } else {
        "?"
    }
}

/// Tracks how deep fallback output is being re-encoded within one conversion call.
#[derive(Clone, Debug)]
pub struct FallbackSession {
    code_page: u16,
    depth: usize,
}

impl FallbackSession {
    pub fn new(code_page: u16) -> FallbackSession {
        FallbackSession { code_page, depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enters one more level of fallback.
    pub fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_FALLBACK_DEPTH {
            return Err(Error::RecursiveFallback { code_page: self.code_page });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let t = BestFitTable::new(vec![(0x2019, 0x27), (0x00a0, 0x20), (0x201c, 0x22)]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.substitute_char('\u{a0}'), Some(' '));
        assert_eq!(t.substitute_char('\u{2019}'), Some('\''));
        assert_eq!(t.substitute_char('\u{2018}'), None);
        assert_eq!(t.substitute_char('\u{1f600}'), None);
    }

    #[test]
    fn test_byte_keys() {
        let t = BestFitTable::new(vec![(0x81, 0x81), (0xed40, 0x7e8a)]);
        assert_eq!(t.substitute_bytes(&[0x81]), Some('\u{81}'));
        assert_eq!(t.substitute_bytes(&[0xed, 0x40]), Some('\u{7e8a}'));
        assert_eq!(t.substitute_bytes(&[0xed]), None);
        assert_eq!(t.substitute_bytes(&[1, 2, 3]), None);
    }

    #[test]
    fn test_later_duplicates_win() {
        let t = BestFitTable::new(vec![(1, 10), (1, 11)]);
        assert_eq!(t.get(1), Some(11));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_default_substitute() {
        assert_eq!(default_substitute('\u{263a}'), "?");
        assert_eq!(default_substitute('\u{1f600}'), "??");
    }

    #[test]
    fn test_session_limit() {
        let mut s = FallbackSession::new(1252);
        for _ in 0..MAX_FALLBACK_DEPTH {
            s.enter().unwrap();
        }
        assert!(matches!(s.enter(), Err(Error::RecursiveFallback { code_page: 1252 })));
        s.leave();
        assert!(s.enter().is_ok());
    }
}
