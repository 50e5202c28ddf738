// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * Escape-switched encodings: ISO-2022-JP (code pages 50220, 50221 and 50222),
 * ISO-2022-KR (50225) and HZ-GB-2312 (52936).
 *
 * The double-byte character sets are not tables of their own. They are the 7-bit forms of
 * the Shift_JIS (932), Unified Hangul Code (949) and GBK (936) tables, so every
 * character with a JIS X 0208, KS X 1001 or GB 2312 pair goes through those tables.
 */

use std::sync::Arc;

use crate::codec::doublebyte::DoubleByteTable;
use crate::types::*;
use crate::util::{as_char, Joined, StrCharIndex};

const ESC: u8 = 0x1b;
const SO: u8 = 0x0e;
const SI: u8 = 0x0f;

/// The flavour of an escape-switched code page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Iso2022Variant {
    /// Code page 50220. Half-width katakana is written as full-width katakana.
    JpFullWidthKana,
    /// Code page 50221. Half-width katakana is written after `ESC ( I`.
    JpEscapeKana,
    /// Code page 50222. Half-width katakana is written between SO and SI.
    JpShiftKana,
    /// Code page 50225.
    Kr,
    /// Code page 52936.
    Hz,
}

impl Iso2022Variant {
    pub fn from_code_page(code_page: u16) -> Option<Iso2022Variant> {
        match code_page {
            50220 => Some(Iso2022Variant::JpFullWidthKana),
            50221 => Some(Iso2022Variant::JpEscapeKana),
            50222 => Some(Iso2022Variant::JpShiftKana),
            50225 => Some(Iso2022Variant::Kr),
            52936 => Some(Iso2022Variant::Hz),
            _ => None,
        }
    }

    pub fn code_page(self) -> u16 {
        match self {
            Iso2022Variant::JpFullWidthKana => 50220,
            Iso2022Variant::JpEscapeKana => 50221,
            Iso2022Variant::JpShiftKana => 50222,
            Iso2022Variant::Kr => 50225,
            Iso2022Variant::Hz => 52936,
        }
    }

    /// The double-byte code page the character sets are taken from.
    pub fn base_code_page(self) -> u16 {
        match self {
            Iso2022Variant::JpFullWidthKana |
            Iso2022Variant::JpEscapeKana |
            Iso2022Variant::JpShiftKana => 932,
            Iso2022Variant::Kr => 949,
            Iso2022Variant::Hz => 936,
        }
    }
}

/// The character set designated to G0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Charset {
    Ascii,
    Jis0208,
    Katakana,
    Gb2312,
}

static JP_ESCAPES: &[(&[u8], Charset)] = &[
    (b"\x1b(B", Charset::Ascii),
    (b"\x1b(J", Charset::Ascii),
    (b"\x1b(I", Charset::Katakana),
    (b"\x1b$@", Charset::Jis0208),
    (b"\x1b$B", Charset::Jis0208),
];

static KR_HEADER: &[u8] = b"\x1b$)C";

/// Full-width forms of U+FF61 through U+FF9F.
static FULL_WIDTH_KANA: [u16; 63] = [
    0x3002, 0x300c, 0x300d, 0x3001, 0x30fb, 0x30f2, 0x30a1, 0x30a3, 0x30a5, 0x30a7, 0x30a9,
    0x30e3, 0x30e5, 0x30e7, 0x30c3, 0x30fc, 0x30a2, 0x30a4, 0x30a6, 0x30a8, 0x30aa, 0x30ab,
    0x30ad, 0x30af, 0x30b1, 0x30b3, 0x30b5, 0x30b7, 0x30b9, 0x30bb, 0x30bd, 0x30bf, 0x30c1,
    0x30c4, 0x30c6, 0x30c8, 0x30ca, 0x30cb, 0x30cc, 0x30cd, 0x30ce, 0x30cf, 0x30d2, 0x30d5,
    0x30d8, 0x30db, 0x30de, 0x30df, 0x30e0, 0x30e1, 0x30e2, 0x30e4, 0x30e6, 0x30e8, 0x30e9,
    0x30ea, 0x30eb, 0x30ec, 0x30ed, 0x30ef, 0x30f3, 0x309b, 0x309c,
];

/// Converts a Shift_JIS pair to its JIS X 0208 row and cell bytes.
pub fn sjis_to_jis(code: u16) -> Option<(u8, u8)> {
    let (s1, s2) = ((code >> 8) as u8, code as u8);
    let mut j1 = match s1 {
        0x81..=0x9f => (s1 - 0x70) * 2 - 1,
        0xe0..=0xef => (s1 - 0xb0) * 2 - 1,
        _ => return None,
    };
    let j2 = if s2 >= 0x9f {
        j1 += 1;
        s2 - 0x7e
    } else if s2 > 0x7f {
        s2 - 0x20
    } else {
        s2.checked_sub(0x1f)?
    };
    if (0x21..=0x7e).contains(&j1) && (0x21..=0x7e).contains(&j2) {
        Some((j1, j2))
    } else {
        None
    }
}

/// Converts JIS X 0208 row and cell bytes (both 0x21 through 0x7E) to a Shift_JIS pair.
pub fn jis_to_sjis(j1: u8, j2: u8) -> (u8, u8) {
    let s1 = ((j1 + 1) >> 1) + if j1 <= 0x5e { 0x70 } else { 0xb0 };
    let s2 = if j1 & 1 == 1 {
        j2 + if j2 > 0x5f { 0x20 } else { 0x1f }
    } else {
        j2 + 0x7e
    };
    (s1, s2)
}

#[inline]
fn half_width_kana(b: u8) -> char {
    as_char(0xff61 + (b - 0x21) as u32)
}

/// An encoder for escape-switched code pages.
#[derive(Clone)]
pub struct Iso2022Encoder {
    variant: Iso2022Variant,
    table: Arc<DoubleByteTable>,
    g0: Charset,
    /// SO is in effect: half-width katakana for ISO-2022-JP, KS X 1001 for ISO-2022-KR.
    shifted: bool,
    header_sent: bool,
}

impl Iso2022Encoder {
    pub fn new(variant: Iso2022Variant, table: Arc<DoubleByteTable>) -> Box<dyn RawEncoder> {
        Box::new(Iso2022Encoder {
            variant,
            table,
            g0: Charset::Ascii,
            shifted: false,
            header_sent: false,
        })
    }

    fn switch(&mut self, g0: Charset, shifted: bool, output: &mut dyn ByteWriter) {
        if self.shifted && !shifted {
            output.write_byte(SI);
        }
        if self.g0 != g0 {
            match (self.variant, g0) {
                (Iso2022Variant::Hz, Charset::Gb2312) => output.write_bytes(b"~{"),
                (Iso2022Variant::Hz, _) => output.write_bytes(b"~}"),
                (_, Charset::Jis0208) => output.write_bytes(b"\x1b$B"),
                (_, Charset::Katakana) => output.write_bytes(b"\x1b(I"),
                (_, _) => output.write_bytes(b"\x1b(B"),
            }
            self.g0 = g0;
        }
        if shifted && !self.shifted {
            output.write_byte(SO);
        }
        self.shifted = shifted;
    }

    /// Writes `ch` or returns false without writing anything.
    fn encode_jp(&mut self, ch: char, output: &mut dyn ByteWriter) -> bool {
        let code = ch as u32;
        if code < 0x80 {
            self.switch(Charset::Ascii, false, output);
            output.write_byte(code as u8);
            return true;
        }
        if (0xff61..=0xff9f).contains(&code) {
            let b = (code - 0xff61 + 0x21) as u8;
            match self.variant {
                Iso2022Variant::JpEscapeKana => self.switch(Charset::Katakana, false, output),
                Iso2022Variant::JpShiftKana => {
                    let g0 = self.g0;
                    self.switch(g0, true, output);
                }
                _ => {
                    let full = as_char(FULL_WIDTH_KANA[(code - 0xff61) as usize] as u32);
                    return self.encode_jp(full, output);
                }
            }
            output.write_byte(b);
            return true;
        }
        match self.table.encode_char(ch).and_then(sjis_to_jis) {
            Some((j1, j2)) => {
                self.switch(Charset::Jis0208, false, output);
                output.write_byte(j1);
                output.write_byte(j2);
                true
            }
            None => false,
        }
    }

    fn encode_kr(&mut self, ch: char, output: &mut dyn ByteWriter) -> bool {
        if (ch as u32) < 0x80 {
            self.switch(Charset::Ascii, false, output);
            output.write_byte(ch as u8);
            return true;
        }
        match self.table.encode_char(ch) {
            Some(code) if code >> 8 >= 0xa1 && code & 0xff >= 0xa1 => {
                self.switch(Charset::Ascii, true, output);
                output.write_byte((code >> 8) as u8 & 0x7f);
                output.write_byte(code as u8 & 0x7f);
                true
            }
            _ => false,
        }
    }

    fn encode_hz(&mut self, ch: char, output: &mut dyn ByteWriter) -> bool {
        if ch == '~' {
            self.switch(Charset::Ascii, false, output);
            output.write_bytes(b"~~");
            return true;
        }
        if (ch as u32) < 0x80 {
            self.switch(Charset::Ascii, false, output);
            output.write_byte(ch as u8);
            return true;
        }
        match self.table.encode_char(ch) {
            Some(code) if (0xa1..=0xfd).contains(&(code >> 8)) && code & 0xff >= 0xa1 => {
                self.switch(Charset::Gb2312, false, output);
                output.write_byte((code >> 8) as u8 & 0x7f);
                output.write_byte(code as u8 & 0x7f);
                true
            }
            _ => false,
        }
    }
}

impl RawEncoder for Iso2022Encoder {
    fn from_self(&self) -> Box<dyn RawEncoder> {
        Iso2022Encoder::new(self.variant, self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawEncoder> {
        Box::new(self.clone())
    }
    fn is_idle(&self) -> bool {
        self.g0 == Charset::Ascii && !self.shifted
    }

    fn raw_feed(&mut self, input: &str, output: &mut dyn ByteWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        if self.variant == Iso2022Variant::Kr && !self.header_sent && !input.is_empty() {
            output.write_bytes(KR_HEADER);
            self.header_sent = true;
        }

        for ((i, j), ch) in input.index_iter() {
            let written = match self.variant {
                Iso2022Variant::Kr => self.encode_kr(ch, output),
                Iso2022Variant::Hz => self.encode_hz(ch, output),
                _ => self.encode_jp(ch, output),
            };
            if !written {
                return (i, Some(CodecError::unrepresentable(j)));
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, output: &mut dyn ByteWriter) -> Option<CodecError> {
        self.switch(Charset::Ascii, false, output);
        self.header_sent = false;
        None
    }
}

/// A decoder for escape-switched code pages.
///
/// Carries an incomplete escape sequence or a lead byte, up to three bytes.
#[derive(Clone)]
pub struct Iso2022Decoder {
    variant: Iso2022Variant,
    table: Arc<DoubleByteTable>,
    g0: Charset,
    shifted: bool,
    carried: [u8; 3],
    carried_len: usize,
    /// Carried bytes the last feed consumed, possibly as literals.
    resolved: usize,
}

impl Iso2022Decoder {
    pub fn new(variant: Iso2022Variant, table: Arc<DoubleByteTable>) -> Box<dyn RawDecoder> {
        Box::new(Iso2022Decoder {
            variant,
            table,
            g0: Charset::Ascii,
            shifted: false,
            carried: [0; 3],
            carried_len: 0,
            resolved: 0,
        })
    }
}

enum Step {
    Char(char, usize),
    /// An escape or shift of the given length changed the mode.
    Switch(usize),
    Invalid(usize),
    Incomplete,
}

/// Matches `seq` at `i`: `None` when the input ends inside a matching prefix.
fn match_at(s: &Joined, i: usize, seq: &[u8]) -> Option<bool> {
    for (k, &expected) in seq.iter().enumerate() {
        match s.get(i + k) {
            None => return None,
            Some(b) if b != expected => return Some(false),
            Some(_) => {}
        }
    }
    Some(true)
}

impl Iso2022Decoder {
    /// Decodes a 7-bit pair of the double-byte set, or reports how many bytes are bad.
    fn pair(&self, s: &Joined, i: usize, lead: u8, to_code: fn(u8, u8) -> (u8, u8)) -> Step {
        let trail = match s.get(i + 1) {
            Some(b) => b,
            None => return Step::Incomplete,
        };
        if !(0x21..=0x7e).contains(&trail) {
            return Step::Invalid(1);
        }
        let (b1, b2) = to_code(lead, trail);
        match self.table.decode_pair(b1, b2) {
            Some(ch) => Step::Char(ch, 2),
            None => Step::Invalid(2),
        }
    }

    fn step_jp(&mut self, s: &Joined, i: usize, b: u8) -> Step {
        match b {
            ESC => {
                let mut incomplete = false;
                for &(seq, charset) in JP_ESCAPES {
                    match match_at(s, i, seq) {
                        Some(true) => {
                            self.g0 = charset;
                            return Step::Switch(seq.len());
                        }
                        Some(false) => {}
                        None => incomplete = true,
                    }
                }
                if incomplete { Step::Incomplete } else { Step::Char('\x1b', 1) }
            }
            SO => {
                self.shifted = true;
                Step::Switch(1)
            }
            SI => {
                self.shifted = false;
                Step::Switch(1)
            }
            0x00..=0x20 if self.g0 != Charset::Ascii || self.shifted => Step::Char(b as char, 1),
            0x21..=0x5f if self.shifted || self.g0 == Charset::Katakana => {
                Step::Char(half_width_kana(b), 1)
            }
            _ if self.shifted || self.g0 == Charset::Katakana => Step::Invalid(1),
            0x21..=0x7e if self.g0 == Charset::Jis0208 => self.pair(s, i, b, jis_to_sjis),
            _ if self.g0 == Charset::Jis0208 => Step::Invalid(1),
            0x00..=0x7f => Step::Char(b as char, 1),
            0xa1..=0xdf => Step::Char(half_width_kana(b - 0x80), 1),
            _ => Step::Invalid(1),
        }
    }

    fn step_kr(&mut self, s: &Joined, i: usize, b: u8) -> Step {
        match b {
            ESC => match match_at(s, i, KR_HEADER) {
                Some(true) => Step::Switch(KR_HEADER.len()),
                Some(false) => Step::Char('\x1b', 1),
                None => Step::Incomplete,
            },
            SO => {
                self.shifted = true;
                Step::Switch(1)
            }
            SI => {
                self.shifted = false;
                Step::Switch(1)
            }
            0x00..=0x20 => Step::Char(b as char, 1),
            0x21..=0x7e if self.shifted => self.pair(s, i, b, |b1, b2| (b1 | 0x80, b2 | 0x80)),
            0x21..=0x7f if !self.shifted => Step::Char(b as char, 1),
            _ => Step::Invalid(1),
        }
    }

    fn step_hz(&mut self, s: &Joined, i: usize, b: u8) -> Step {
        match b {
            b'~' => match s.get(i + 1) {
                None => Step::Incomplete,
                Some(b'{') => {
                    self.g0 = Charset::Gb2312;
                    Step::Switch(2)
                }
                Some(b'}') => {
                    self.g0 = Charset::Ascii;
                    Step::Switch(2)
                }
                Some(b'~') => Step::Char('~', 2),
                Some(b'\n') => Step::Switch(2),
                Some(_) => Step::Char('~', 1),
            },
            0x00..=0x20 => Step::Char(b as char, 1),
            0x21..=0x7d if self.g0 == Charset::Gb2312 => {
                self.pair(s, i, b, |b1, b2| (b1 | 0x80, b2 | 0x80))
            }
            0x21..=0x7f if self.g0 == Charset::Ascii => Step::Char(b as char, 1),
            _ => Step::Invalid(1),
        }
    }

    fn reset(&mut self) {
        self.g0 = Charset::Ascii;
        self.shifted = false;
        self.carried_len = 0;
        self.resolved = 0;
    }
}

impl RawDecoder for Iso2022Decoder {
    fn from_self(&self) -> Box<dyn RawDecoder> {
        Iso2022Decoder::new(self.variant, self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawDecoder> {
        Box::new(self.clone())
    }
    fn is_idle(&self) -> bool {
        self.carried_len == 0 && self.g0 == Charset::Ascii && !self.shifted
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        let carried = self.carried;
        let carried_len = self.carried_len;
        let s = Joined::new(&carried[..carried_len], input);
        self.carried_len = 0;

        let mut i = 0;
        while let Some(b) = s.get(i) {
            self.resolved = i.min(carried_len);
            let step = match self.variant {
                Iso2022Variant::Kr => self.step_kr(&s, i, b),
                Iso2022Variant::Hz => self.step_hz(&s, i, b),
                _ => self.step_jp(&s, i, b),
            };
            match step {
                Step::Char(ch, n) => {
                    output.write_char(ch);
                    i += n;
                }
                Step::Switch(n) => i += n,
                Step::Invalid(n) => {
                    return (s.input_offset(i), Some(CodecError::invalid(s.input_offset(i + n))));
                }
                Step::Incomplete => {
                    let rest = s.slice(i);
                    self.carried[..rest.len()].copy_from_slice(rest);
                    self.carried_len = rest.len();
                    return (s.input_offset(i), None);
                }
            }
        }
        self.resolved = carried_len;
        (input.len(), None)
    }

    fn resolved_carry(&self) -> usize {
        self.resolved
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<CodecError> {
        let incomplete = self.carried_len > 0;
        self.reset();
        if incomplete { Some(CodecError::incomplete()) } else { None }
    }
}


#[cfg(all(test, feature = "embedded-tables"))]
mod tests {
    use super::*;
    use crate::table::TableStore;

    fn coders(code_page: u16) -> (Box<dyn RawEncoder>, Box<dyn RawDecoder>) {
        let variant = Iso2022Variant::from_code_page(code_page).unwrap();
        let store = TableStore::embedded().unwrap();
        let table = Arc::new(DoubleByteTable::from_store(store, variant.base_code_page()).unwrap());
        (Iso2022Encoder::new(variant, table.clone()), Iso2022Decoder::new(variant, table))
    }

    #[test]
    fn test_jp_encoder_valid() {
        let (mut e, _) = coders(50220);
        assert_feed_ok!(e, "A\u{65e5}B", "",
                        [0x41, 0x1b, 0x24, 0x42, 0x46, 0x7c, 0x1b, 0x28, 0x42, 0x42]);
        assert_feed_ok!(e, "\u{65e5}\u{672c}", "", [0x1b, 0x24, 0x42, 0x46, 0x7c, 0x4b, 0x5c]);
        assert_feed_ok!(e, "\u{3000}", "", [0x21, 0x21]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_jp_encoder_kana() {
        let (mut e, _) = coders(50220);
        assert_feed_ok!(e, "\u{ff76}\u{ff9e}", "", [0x1b, 0x24, 0x42, 0x25, 0x2b, 0x21, 0x2b]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);

        let (mut e, _) = coders(50221);
        assert_feed_ok!(e, "\u{ff76}", "", [0x1b, 0x28, 0x49, 0x36]);
        assert_feed_ok!(e, "\u{ff61}", "", [0x21]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);

        let (mut e, _) = coders(50222);
        assert_feed_ok!(e, "\u{ff76}A", "", [0x0e, 0x36, 0x0f, 0x41]);
        assert_feed_ok!(e, "\u{65e5}\u{ff76}", "", [0x1b, 0x24, 0x42, 0x46, 0x7c, 0x0e, 0x36]);
        assert_finish_ok!(e, [0x0f, 0x1b, 0x28, 0x42]);
    }

    #[test]
    fn test_jp_encoder_invalid() {
        let (mut e, _) = coders(50221);
        assert_feed_err!(e, "A", "\u{e000}", "B", [0x41]);
        assert_feed_err!(e, "", "\u{e9}", "", []);
        assert_feed_ok!(e, "\u{65e5}", "", [0x1b, 0x24, 0x42, 0x46, 0x7c]);
        // a failed character leaves the mode alone
        assert_feed_err!(e, "", "\u{1f600}", "", []);
        assert_feed_ok!(e, "\u{672c}", "", [0x4b, 0x5c]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);
    }

    #[test]
    fn test_jp_decoder_valid() {
        let (_, mut d) = coders(50220);
        assert_feed_ok!(d, [0x41, 0x1b, 0x24, 0x42, 0x46, 0x7c, 0x1b, 0x28, 0x42, 0x42], [],
                        "A\u{65e5}B");
        assert_feed_ok!(d, [0x1b, 0x24, 0x40, 0x4b, 0x5c, 0x0a, 0x1b, 0x28, 0x4a, 0x5c], [],
                        "\u{672c}\n\\");
        assert_feed_ok!(d, [0x1b, 0x28, 0x49, 0x36, 0x1b, 0x28, 0x42], [], "\u{ff76}");
        assert_feed_ok!(d, [0x0e, 0x36, 0x0f, 0x41], [], "\u{ff76}A");
        assert_feed_ok!(d, [0xb6], [], "\u{ff76}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_jp_decoder_partial() {
        let (_, mut d) = coders(50222);
        assert_feed_ok!(d, [], [0x1b], "");
        assert_feed_ok!(d, [], [0x24], "");
        assert_feed_ok!(d, [0x42], [0x46], "");
        // mode changes survive the carried byte
        assert_feed_ok!(d, [0x7c], [0x4b], "\u{65e5}");
        assert_feed_ok!(d, [0x5c], [], "\u{672c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_jp_decoder_literal_escape() {
        let (_, mut d) = coders(50221);
        assert_feed_ok!(d, [0x1b, 0x28, 0x5a], [], "\x1b(Z");
        assert_feed_ok!(d, [0x1b, 0x41], [], "\x1bA");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_carried_escape_turns_literal() {
        let (_, mut d) = coders(50220);
        assert_feed_ok!(d, [], [0x1b, 0x28], "");
        assert_eq!(d.resolved_carry(), 0);
        assert_feed_err!(d, [], [0x80], [0x41], "\x1b(");
        assert_eq!(d.resolved_carry(), 2);
        assert_feed_ok!(d, [0x41], [], "A");
        assert_finish_ok!(d, "");

        let (_, mut d) = coders(50225);
        assert_feed_ok!(d, [], [0x1b, 0x24, 0x29], "");
        assert_feed_err!(d, [], [0x80], [], "\x1b$)");
        assert_eq!(d.resolved_carry(), 3);
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_jp_decoder_invalid() {
        let (_, mut d) = coders(50220);
        assert_feed_err!(d, [0x1b, 0x24, 0x42], [0x46], [0x0a], "");
        assert_feed_err!(d, [], [0x22, 0x2f], [0x21, 0x21], "");
        assert_feed_err!(d, [0x21, 0x21], [0x80], [], "\u{3000}");
        assert_feed_ok!(d, [0x1b, 0x28, 0x42], [], "");
        assert_feed_err!(d, [0x41], [0xe0], [], "A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_jp_decoder_finish_resets() {
        let (_, mut d) = coders(50220);
        assert_feed_ok!(d, [0x1b, 0x24, 0x42], [0x1b, 0x28], "");
        assert_finish_err!(d, "");
        assert_feed_ok!(d, [0x46, 0x7c], [], "F|");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_kr_encoder() {
        let (mut e, _) = coders(50225);
        assert_feed_ok!(e, "\u{d55c}\u{ad6d}", "",
                        [0x1b, 0x24, 0x29, 0x43, 0x0e, 0x47, 0x51, 0x31, 0x39]);
        assert_feed_ok!(e, "A", "", [0x0f, 0x41]);
        assert_feed_err!(e, "", "\u{ac02}", "", []);
        assert_finish_ok!(e, []);
        assert_feed_ok!(e, "", "", []);
        assert_feed_err!(e, "", "\u{ac02}", "", [0x1b, 0x24, 0x29, 0x43]);
        assert_feed_ok!(e, "\u{d55c}", "", [0x0e, 0x47, 0x51]);
        assert_finish_ok!(e, [0x0f]);
    }

    #[test]
    fn test_kr_decoder() {
        let (_, mut d) = coders(50225);
        assert_feed_ok!(d, [0x1b, 0x24, 0x29, 0x43, 0x0e, 0x47, 0x51, 0x31, 0x39, 0x0f, 0x41], [],
                        "\u{d55c}\u{ad6d}A");
        assert_feed_ok!(d, [], [0x1b, 0x24, 0x29], "");
        assert_feed_ok!(d, [0x43, 0x0e, 0x47, 0x51], [0x31], "\u{d55c}");
        assert_feed_ok!(d, [0x39, 0x20, 0x0f], [], "\u{ad6d} ");
        assert_feed_ok!(d, [0x1b, 0x41], [], "\x1bA");
        assert_feed_err!(d, [], [0xc7], [0xd1], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_hz_encoder() {
        let (mut e, _) = coders(52936);
        assert_feed_ok!(e, "A\u{4e2d}\u{6587}~", "",
                        [0x41, 0x7e, 0x7b, 0x56, 0x50, 0x4e, 0x44, 0x7e, 0x7d, 0x7e, 0x7e]);
        assert_feed_ok!(e, "\u{4e2d}", "", [0x7e, 0x7b, 0x56, 0x50]);
        assert_feed_err!(e, "", "\u{4e02}", "", []);
        assert_finish_ok!(e, [0x7e, 0x7d]);
    }

    #[test]
    fn test_hz_decoder() {
        let (_, mut d) = coders(52936);
        assert_feed_ok!(d, [0x7e, 0x7b, 0x56, 0x50, 0x4e, 0x44, 0x7e, 0x7d, 0x41], [],
                        "\u{4e2d}\u{6587}A");
        assert_feed_ok!(d, [0x7e, 0x7e, 0x7e, 0x0a, 0x7e, 0x78], [], "~~x");
        assert_feed_ok!(d, [0x41], [0x7e], "A");
        assert_feed_ok!(d, [0x7b], [0x56], "");
        assert_feed_ok!(d, [0x50], [], "\u{4e2d}");
        // an unknown escape is a literal tilde, even in GB mode
        assert_feed_err!(d, [0x7e], [0x7f], [], "~");
        assert_finish_ok!(d, "");
    }
}
