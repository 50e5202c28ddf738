// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for double-byte code pages
//! (Shift_JIS, GBK, Unified Hangul Code, Big5 and Johab).
//!
//! Characters take one byte or two; a byte is the first of a pair when the table marks it
//! as a lead byte. Both tables are dense and indexed by `lead << 8 | trail`.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::fallback::BestFitTable;
use crate::table::{TableStore, WordReader};
use crate::types::*;
use crate::util::{as_char, StrCharIndex};

/// Marks a lead byte in the forward table.
const LEAD: u16 = 0xfffe;

/// Forward and backward tables of a double-byte code page.
pub struct DoubleByteTable {
    code_page: u16,
    /// Indexed by the single byte or `lead << 8 | trail`; 0 is unmapped except at 0.
    forward: Box<[u16]>,
    /// Indexed by BMP code point; holds the byte or the pair, 0 is unmapped except for U+0000.
    backward: Box<[u16]>,
    replacement: char,
    best_fit_data: Vec<u8>,
    best_fit: OnceCell<DoubleByteBestFit>,
}

#[derive(Default)]
struct DoubleByteBestFit {
    bytes: BestFitTable,
    chars: BestFitTable,
}

impl DoubleByteTable {
    /// Builds the table of `code_page` from the store.
    pub fn from_store(store: &TableStore, code_page: u16) -> Result<DoubleByteTable> {
        let record = store
            .locate(code_page)
            .ok_or(Error::UnsupportedCodePage(code_page as u32))?;
        if record.byte_width != 2 {
            return Err(Error::malformed(code_page, "not a double-byte table"));
        }
        let payload = store.read_payload(record)?;

        let mut r = WordReader::new(payload.data, code_page);
        let mut forward = vec![0u16; 0x10000].into_boxed_slice();
        let mut backward = vec![0u16; 0x10000].into_boxed_slice();
        let mut pos = 0u32;
        while pos < 0x10000 {
            match r.u16()? {
                1 => pos = r.u16()? as u32,
                n @ 2..=0x1f => pos += n as u32,
                0xfffd => pos += 1,
                LEAD => {
                    if pos > 0xff {
                        return Err(Error::malformed(code_page, format!(
                            "lead byte marker at {:#x}", pos)));
                    }
                    forward[pos as usize] = LEAD;
                    pos += 1;
                }
                ch => {
                    let ch = if ch == 0xffff { pos as u16 } else { ch };
                    forward[pos as usize] = ch;
                    backward[ch as usize] = pos as u16;
                    pos += 1;
                }
            }
        }

        debug!("built double-byte table for code page {}", code_page);
        Ok(DoubleByteTable {
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

    /// The character substituted for undecodable sequences.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    pub fn is_ascii_compatible(&self) -> bool {
        (0..0x80u16).all(|b| self.forward[b as usize] == b)
    }

    #[inline]
    pub fn is_lead(&self, b: u8) -> bool {
        self.forward[b as usize] == LEAD
    }

    /// Decodes a byte that is not a lead byte.
    #[inline]
    pub fn decode_single(&self, b: u8) -> Option<char> {
        match self.forward[b as usize] {
            0 if b != 0 => None,
            LEAD => None,
            ch => Some(as_char(ch as u32)),
        }
    }

    #[inline]
    pub fn decode_pair(&self, lead: u8, trail: u8) -> Option<char> {
        match self.forward[(lead as usize) << 8 | trail as usize] {
            0 => None,
            ch => Some(as_char(ch as u32)),
        }
    }

    /// Returns the byte (below 0x100) or the pair `lead << 8 | trail` for `ch`.
    #[inline]
    pub fn encode_char(&self, ch: char) -> Option<u16> {
        let code = ch as u32;
        if code == 0 {
            return Some(0);
        }
        if code > 0xffff {
            return None;
        }
        match self.backward[code as usize] {
            0 => None,
            packed => Some(packed),
        }
    }

    fn best_fit(&self) -> &DoubleByteBestFit {
        self.best_fit.get_or_init(|| {
            parse_best_fit(&self.best_fit_data, self.code_page).unwrap_or_else(|err| {
                warn!("ignoring best-fit tables: {}", err);
                DoubleByteBestFit::default()
            })
        })
    }

    /// The best-fit substitute of an unmappable character.
    pub fn encode_fallback(&self, ch: char) -> Option<char> {
        let code = self.best_fit().chars.substitute_char(ch)? as u32;
        match code {
            0..=0xff => self.decode_single(code as u8),
            _ => self.decode_pair((code >> 8) as u8, code as u8),
        }
    }

    /// The best-fit character of an undecodable one- or two-byte sequence.
    pub fn decode_fallback(&self, bytes: &[u8]) -> Option<char> {
        self.best_fit().bytes.substitute_bytes(bytes)
    }
}

fn parse_best_fit(data: &[u8], code_page: u16) -> Result<DoubleByteBestFit> {
    let mut r = WordReader::new(data, code_page);

    let mut bytes = Vec::new();
    let mut pos = r.u16()? as u32;
    while pos < 0x10000 {
        match r.u16()? {
            1 => pos = r.u16()? as u32,
            n @ 2..=0x1f => pos += n as u32,
            0xfffd | LEAD => pos += 1,
            ch => {
                let ch = if ch == 0xffff { pos as u16 } else { ch };
                bytes.push((pos as u16, ch));
                pos += 1;
            }
        }
    }

    let mut chars = Vec::new();
    let mut pos = r.u16()? as u32;
    while pos < 0x10000 {
        match r.u16()? {
            0 => pos += 1,
            1 => pos = r.u16()? as u32,
            n @ 2..=0x1f => pos += n as u32,
            code => {
                chars.push((pos as u16, code));
                pos += 1;
            }
        }
    }

    debug!("parsed double-byte best fit for code page {}: {} sequences, {} chars",
           code_page, bytes.len(), chars.len());
    Ok(DoubleByteBestFit { bytes: BestFitTable::new(bytes), chars: BestFitTable::new(chars) })
}

/// An encoder for double-byte code pages.
#[derive(Clone)]
pub struct DoubleByteEncoder {
    table: Arc<DoubleByteTable>,
}

impl DoubleByteEncoder {
    pub fn new(table: Arc<DoubleByteTable>) -> Box<dyn RawEncoder> {
        Box::new(DoubleByteEncoder { table })
    }
}

impl RawEncoder for DoubleByteEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> {
        DoubleByteEncoder::new(self.table.clone())
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
                Some(code) if code > 0xff => {
                    output.write_byte((code >> 8) as u8);
                    output.write_byte(code as u8);
                }
                Some(code) => output.write_byte(code as u8),
                None => return (i, Some(CodecError::unrepresentable(j))),
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn ByteWriter) -> Option<CodecError> {
        None
    }
}

/// A decoder for double-byte code pages.
///
/// The only state is a lead byte waiting for its trail byte.
#[derive(Clone)]
pub struct DoubleByteDecoder {
    table: Arc<DoubleByteTable>,
    lead: Option<u8>,
}

impl DoubleByteDecoder {
    pub fn new(table: Arc<DoubleByteTable>) -> Box<dyn RawDecoder> {
        Box::new(DoubleByteDecoder { table, lead: None })
    }
}

impl RawDecoder for DoubleByteDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> {
        DoubleByteDecoder::new(self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawDecoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        self.table.is_ascii_compatible()
    }
    fn is_idle(&self) -> bool {
        self.lead.is_none()
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        let mut i = 0;
        if let Some(lead) = self.lead.take() {
            match input.first() {
                None => {
                    self.lead = Some(lead);
                    return (0, None);
                }
                Some(&trail) => match self.table.decode_pair(lead, trail) {
                    Some(ch) => output.write_char(ch),
                    None => return (0, Some(CodecError::invalid(1))),
                },
            }
            i = 1;
        }

        let len = input.len();
        while i < len {
            let b = input[i];
            if self.table.is_lead(b) {
                if i + 1 >= len {
                    self.lead = Some(b);
                    return (i, None);
                }
                match self.table.decode_pair(b, input[i + 1]) {
                    Some(ch) => output.write_char(ch),
                    None => return (i, Some(CodecError::invalid(i + 2))),
                }
                i += 2;
            } else {
                match self.table.decode_single(b) {
                    Some(ch) => output.write_char(ch),
                    None => return (i, Some(CodecError::invalid(i + 1))),
                }
                i += 1;
            }
        }
        (len, None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<CodecError> {
        match self.lead.take() {
            Some(_) => Some(CodecError::incomplete()),
            None => None,
        }
    }
}

#[cfg(all(test, feature = "embedded-tables"))]
mod tests {
    use super::*;

    fn table(code_page: u16) -> Arc<DoubleByteTable> {
        let store = TableStore::embedded().unwrap();
        Arc::new(DoubleByteTable::from_store(store, code_page).unwrap())
    }

    #[test]
    fn test_encoder_valid() {
        let mut e = DoubleByteEncoder::new(table(932));
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "BC", "", [0x42, 0x43]);
        assert_feed_ok!(e, "", "", []);
        assert_feed_ok!(e, "\u{306b}\u{307b}\u{3093}", "", [0x82, 0xc9, 0x82, 0xd9, 0x82, 0xf1]);
        assert_feed_ok!(e, "\u{ff86}\u{ff8e}\u{ff9d}", "", [0xc6, 0xce, 0xdd]);
        assert_feed_ok!(e, "\u{65e5}\u{672c}", "", [0x93, 0xfa, 0x96, 0x7b]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = DoubleByteEncoder::new(table(932));
        assert_feed_err!(e, "", "\u{ffff}", "", []);
        assert_feed_err!(e, "?", "\u{ffff}", "!", [0x3f]);
        assert_feed_err!(e, "", "\u{736c}", "\u{8c78}", []);
        assert_feed_err!(e, "", "\u{1f600}", "", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = DoubleByteDecoder::new(table(932));
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0x42, 0x43], [], "BC");
        assert_feed_ok!(d, [], [], "");
        assert_feed_ok!(d, [0x82, 0xc9, 0x82, 0xd9, 0x82, 0xf1], [], "\u{306b}\u{307b}\u{3093}");
        assert_feed_ok!(d, [0xc6, 0xce, 0xdd], [], "\u{ff86}\u{ff8e}\u{ff9d}");
        assert_feed_ok!(d, [0x93, 0xfa, 0x96, 0x7b], [], "\u{65e5}\u{672c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_split_pair() {
        let mut d = DoubleByteDecoder::new(table(932));
        assert_feed_ok!(d, [], [0x81], "");
        assert_feed_ok!(d, [0x40], [], "\u{3000}");
        assert_feed_ok!(d, [0x41], [0x82], "A");
        assert_feed_ok!(d, [], [], "");
        assert_feed_ok!(d, [0xa0], [], "\u{3042}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = DoubleByteDecoder::new(table(932));
        // an unmapped pair is consumed as a whole
        assert_feed_err!(d, [0x41], [0x81, 0xad], [0x42], "A");
        assert_feed_err!(d, [], [0x85], [0x40], "");
        // a carried lead byte with an unmapped trail
        assert_feed_ok!(d, [], [0x81], "");
        assert_feed_err!(d, [], [0xad], [0x41], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_feed_after_finish() {
        let mut d = DoubleByteDecoder::new(table(932));
        assert_feed_ok!(d, [0x82, 0xa0], [0x82], "\u{3042}");
        assert_finish_err!(d, "");
        assert_feed_ok!(d, [0x82, 0xa0], [], "\u{3042}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_other_tables() {
        let mut d = DoubleByteDecoder::new(table(949));
        assert_feed_ok!(d, [0xc7, 0xd1, 0xb1, 0xb9], [], "\u{d55c}\u{ad6d}");
        let mut d = DoubleByteDecoder::new(table(950));
        assert_feed_ok!(d, [0xa4, 0xa4, 0xa4, 0xe5], [], "\u{4e2d}\u{6587}");
        let mut d = DoubleByteDecoder::new(table(936));
        assert_feed_ok!(d, [0xd6, 0xd0, 0xce, 0xc4], [], "\u{4e2d}\u{6587}");
        let mut e = DoubleByteEncoder::new(table(1361));
        assert_feed_ok!(e, "\u{d55c}", "", [0xd0, 0x65]);
    }

    #[test]
    fn test_best_fit() {
        let t = table(932);
        assert_eq!(t.replacement(), '\u{30fb}');
        // duplicated IBM extensions decode one way only
        assert_eq!(t.decode_pair(0xfa, 0x5c), None);
        assert_eq!(t.decode_fallback(&[0xfa, 0x5c]), Some('\u{7e8a}'));
        assert_eq!(t.encode_char('\u{7e8a}'), Some(0xed40));
        assert_eq!(t.decode_single(0xa0), Some('\u{f8f0}'));
        assert_eq!(t.encode_fallback('\u{ff5f}'), None);
        assert_eq!(t.encode_fallback('\u{e9}'), Some('e'));
    }

    #[test]
    fn test_round_trip_every_pair() {
        for &cp in &[932u16, 936, 949, 950, 1361] {
            let t = table(cp);
            for code in 0..=0xffffu32 {
                let ch = if code < 0x100 {
                    if t.is_lead(code as u8) {
                        continue;
                    }
                    t.decode_single(code as u8)
                } else if t.is_lead((code >> 8) as u8) {
                    t.decode_pair((code >> 8) as u8, code as u8)
                } else {
                    None
                };
                if let Some(ch) = ch {
                    assert_eq!(t.encode_char(ch), Some(code as u16), "cp{} {:04x}", cp, code);
                }
            }
        }
    }
}
