// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for single-byte encodings.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::fallback::BestFitTable;
use crate::table::{TableStore, WordReader};
use crate::types::*;
use crate::util::{as_char, StrCharIndex};

const UNMAPPED: u16 = 0xfffd;

/// Byte-to-char table of a single-byte code page and its inverse.
pub struct SingleByteTable {
    code_page: u16,
    forward: [u16; 256],
    /// Indexed by BMP code point; 0 is unmapped except for U+0000.
    backward: Box<[u8]>,
    replacement: char,
    /// The best-fit sections, parsed on first use.
    best_fit_data: Vec<u8>,
    best_fit: OnceCell<SingleByteBestFit>,
}

#[derive(Default)]
struct SingleByteBestFit {
    bytes: BestFitTable,
    chars: BestFitTable,
}

impl SingleByteTable {
    /// Builds the table of `code_page` from the store.
    pub fn from_store(store: &TableStore, code_page: u16) -> Result<SingleByteTable> {
        let record = store
            .locate(code_page)
            .ok_or(Error::UnsupportedCodePage(code_page as u32))?;
        if record.byte_width != 1 {
            return Err(Error::malformed(code_page, "not a single-byte table"));
        }
        let payload = store.read_payload(record)?;

        let mut r = WordReader::new(payload.data, code_page);
        let mut forward = [UNMAPPED; 256];
        for (b, slot) in forward.iter_mut().enumerate() {
            let ch = r.u16()?;
            *slot = if ch == 0 && b != 0 { UNMAPPED } else { ch };
        }

        // later bytes win when two bytes decode to the same char
        let mut backward = vec![0u8; 0x10000].into_boxed_slice();
        for (b, &ch) in forward.iter().enumerate() {
            if ch != UNMAPPED {
                backward[ch as usize] = b as u8;
            }
        }

        debug!("built single-byte table for code page {}", code_page);
        Ok(SingleByteTable {
            code_page,
            forward,
            backward,
            replacement: as_char(payload.header.unicode_replacement as u32),
            best_fit_data: r.rest().to_vec(),
            best_fit: OnceCell::new(),
        })
    }

    pub fn code_page(&self) -> u16 {
        self.code_page
    }

    /// The character substituted for undecodable bytes.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// True when bytes 00 through 7F are ASCII both ways.
    pub fn is_ascii_compatible(&self) -> bool {
        (0..0x80).all(|b| self.forward[b] == b as u16)
    }

    #[inline]
    pub fn decode_byte(&self, b: u8) -> Option<char> {
        match self.forward[b as usize] {
            UNMAPPED => None,
            ch => Some(as_char(ch as u32)),
        }
    }

    #[inline]
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        let code = ch as u32;
        if code == 0 {
            return Some(0);
        }
        if code > 0xffff {
            return None;
        }
        match self.backward[code as usize] {
            0 => None,
            b => Some(b),
        }
    }

    fn best_fit(&self) -> &SingleByteBestFit {
        self.best_fit.get_or_init(|| {
            parse_best_fit(&self.best_fit_data, self.code_page).unwrap_or_else(|err| {
                warn!("ignoring best-fit tables: {}", err);
                SingleByteBestFit::default()
            })
        })
    }

    /// The best-fit substitute of an unmappable character.
    pub fn encode_fallback(&self, ch: char) -> Option<char> {
        let byte = self.best_fit().chars.substitute_char(ch)? as u32;
        self.decode_byte(byte as u8)
    }

    /// The best-fit character of an undecodable byte.
    pub fn decode_fallback(&self, bytes: &[u8]) -> Option<char> {
        self.best_fit().bytes.substitute_bytes(bytes)
    }
}

fn parse_best_fit(data: &[u8], code_page: u16) -> Result<SingleByteBestFit> {
    let mut r = WordReader::new(data, code_page);

    let mut bytes = Vec::new();
    loop {
        let b = r.u16()?;
        if b == 0 {
            break;
        }
        bytes.push((b, r.u16()?));
    }

    let mut chars = Vec::new();
    let mut pos = r.u16()? as u32;
    while pos < 0x10000 {
        match r.u8()? {
            0 => pos += 1,
            1 => pos = r.u16()? as u32,
            0x1e => {
                chars.push((pos as u16, r.u8()? as u16));
                pos += 1;
            }
            n @ 2..=0x1f => pos += n as u32,
            b => {
                chars.push((pos as u16, b as u16));
                pos += 1;
            }
        }
    }

    debug!("parsed single-byte best fit for code page {}: {} bytes, {} chars",
           code_page, bytes.len(), chars.len());
    Ok(SingleByteBestFit { bytes: BestFitTable::new(bytes), chars: BestFitTable::new(chars) })
}

/// An encoder for single-byte code pages.
#[derive(Clone)]
pub struct SingleByteEncoder {
    table: Arc<SingleByteTable>,
}

impl SingleByteEncoder {
    pub fn new(table: Arc<SingleByteTable>) -> Box<dyn RawEncoder> {
        Box::new(SingleByteEncoder { table })
    }
}

impl RawEncoder for SingleByteEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> {
        SingleByteEncoder::new(self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawEncoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        self.table.is_ascii_compatible()
    }

    fn raw_feed(&mut self, input: &str, output: &mut dyn ByteWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        for ((i, j), ch) in input.index_iter() {
            match self.table.encode_char(ch) {
                Some(b) => output.write_byte(b),
                None => return (i, Some(CodecError::unrepresentable(j))),
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn ByteWriter) -> Option<CodecError> {
        None
    }
}

/// A decoder for single-byte code pages.
#[derive(Clone)]
pub struct SingleByteDecoder {
    table: Arc<SingleByteTable>,
}

impl SingleByteDecoder {
    pub fn new(table: Arc<SingleByteTable>) -> Box<dyn RawDecoder> {
        Box::new(SingleByteDecoder { table })
    }
}

impl RawDecoder for SingleByteDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> {
        SingleByteDecoder::new(self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawDecoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        self.table.is_ascii_compatible()
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        for (i, &b) in input.iter().enumerate() {
            match self.table.decode_byte(b) {
                Some(ch) => output.write_char(ch),
                None => return (i, Some(CodecError::invalid(i + 1))),
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<CodecError> {
        None
    }
}

#[cfg(all(test, feature = "embedded-tables"))]
mod tests {
    use super::*;

    fn table(code_page: u16) -> Arc<SingleByteTable> {
        let store = TableStore::embedded().unwrap();
        Arc::new(SingleByteTable::from_store(store, code_page).unwrap())
    }

    #[test]
    fn test_encoder_valid() {
        let mut e = SingleByteEncoder::new(table(1252));
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "BC", "", [0x42, 0x43]);
        assert_feed_ok!(e, "", "", []);
        assert_feed_ok!(e, "\u{20ac}\u{e9}\u{178}", "", [0x80, 0xe9, 0x9f]);
        assert_feed_ok!(e, "\0", "", [0x00]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = SingleByteEncoder::new(table(1252));
        assert_feed_err!(e, "", "\u{263a}", "", []);
        assert_feed_err!(e, "?", "\u{263a}", "!", [0x3f]);
        assert_feed_err!(e, "A", "\u{10000}", "B", [0x41]);
        assert_feed_err!(e, "", "\u{81}", "", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = SingleByteDecoder::new(table(1252));
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0x80, 0xe9, 0x9f], [], "\u{20ac}\u{e9}\u{178}");
        assert_feed_ok!(d, [], [], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = SingleByteDecoder::new(table(1252));
        assert_feed_err!(d, [0x41], [0x81], [0x42], "A");
        assert_feed_err!(d, [], [0x8d], [], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_oem_and_ebcdic() {
        let mut d = SingleByteDecoder::new(table(437));
        assert_feed_ok!(d, [0x82, 0xb0, 0xe1], [], "\u{e9}\u{2591}\u{df}");
        let mut d = SingleByteDecoder::new(table(37));
        assert_feed_ok!(d, [0xc1, 0x40, 0xf1], [], "A 1");
        assert!(!table(37).is_ascii_compatible());
        assert!(table(866).is_ascii_compatible());
        let mut e = SingleByteEncoder::new(table(37));
        assert_feed_ok!(e, "A 1", "", [0xc1, 0x40, 0xf1]);
    }

    #[test]
    fn test_best_fit() {
        let t = table(1252);
        assert_eq!(t.replacement(), '?');
        assert_eq!(t.encode_fallback('\u{101}'), Some('a'));
        assert_eq!(t.encode_fallback('\u{263a}'), None);
        assert_eq!(t.decode_fallback(&[0x81]), Some('\u{81}'));
        assert_eq!(t.decode_fallback(&[0x41]), None);
    }

    #[test]
    fn test_round_trip_every_byte() {
        for &cp in &[437u16, 850, 866, 1250, 1251, 1252, 1253, 10000, 20866, 28591, 28605] {
            let t = table(cp);
            for b in 0..=0xffu8 {
                if let Some(ch) = t.decode_byte(b) {
                    assert_eq!(t.encode_char(ch), Some(b), "cp{} byte {:02x}", cp, b);
                }
            }
        }
    }
}
