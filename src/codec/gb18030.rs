// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * GB 18030 (code page 54936).
 *
 * GB 18030 extends the two-byte GBK table with four-byte sequences
 * `[81-FE] [30-39] [81-FE] [30-39]`, read as a linear offset with digits in bases 10, 126 and 10.
 *
 * - Offsets below the number of BMP characters missing from the two-byte table
 *   map those characters in code point order, so the offset of a character is its rank
 *   among them.
 * - Offsets 189000 through 1237575 map U+10000 through U+10FFFF linearly.
 */

use std::sync::Arc;

use crate::codec::doublebyte::DoubleByteTable;
use crate::types::*;
use crate::util::{as_char, Joined, StrCharIndex};

/// Linear offset of U+10000.
const SUPPLEMENTARY_BASE: u32 = 189000;
/// Linear offset of U+10FFFF.
const SUPPLEMENTARY_LAST: u32 = 1237575;

/// The set of BMP characters with four-byte sequences and their ranks.
struct FourByteRanks {
    bits: Box<[u64]>,
    /// Number of set bits in all preceding words.
    bases: Box<[u32]>,
    count: u32,
}

impl FourByteRanks {
    fn build(two_byte: &DoubleByteTable) -> FourByteRanks {
        let mut bits = vec![0u64; 0x10000 / 64].into_boxed_slice();
        for code in 0x80..=0xffffu32 {
            if (0xd800..0xe000).contains(&code) {
                continue;
            }
            if two_byte.encode_char(as_char(code)).is_none() {
                bits[(code >> 6) as usize] |= 1 << (code & 63);
            }
        }
        let mut bases = Vec::with_capacity(bits.len());
        let mut count = 0;
        for word in bits.iter() {
            bases.push(count);
            count += word.count_ones();
        }
        FourByteRanks { bits, bases: bases.into_boxed_slice(), count }
    }

    fn rank(&self, code: u32) -> Option<u32> {
        let word = *self.bits.get((code >> 6) as usize)?;
        let bit = 1u64 << (code & 63);
        if word & bit == 0 {
            return None;
        }
        Some(self.bases[(code >> 6) as usize] + (word & (bit - 1)).count_ones())
    }

    fn select(&self, offset: u32) -> Option<u32> {
        if offset >= self.count {
            return None;
        }
        // the last word starting at or before `offset` holds it
        let index = self.bases.partition_point(|&base| base <= offset) - 1;
        let mut word = self.bits[index];
        for _ in 0..offset - self.bases[index] {
            word &= word - 1;
        }
        Some((index as u32) << 6 | word.trailing_zeros())
    }
}

/// The two-byte table of code page 54936 with its four-byte tier.
pub struct Gb18030Table {
    two_byte: Arc<DoubleByteTable>,
    ranks: FourByteRanks,
}

impl Gb18030Table {
    pub fn new(two_byte: Arc<DoubleByteTable>) -> Gb18030Table {
        let ranks = FourByteRanks::build(&two_byte);
        debug!("derived {} four-byte BMP characters for GB 18030", ranks.count);
        Gb18030Table { two_byte, ranks }
    }

    pub fn two_byte(&self) -> &Arc<DoubleByteTable> {
        &self.two_byte
    }

    /// Number of BMP characters with a four-byte sequence.
    pub fn four_byte_bmp_count(&self) -> u32 {
        self.ranks.count
    }

    /// The linear offset of a character without a two-byte sequence.
    pub fn four_byte_offset(&self, ch: char) -> Option<u32> {
        let code = ch as u32;
        if code >= 0x10000 {
            Some(SUPPLEMENTARY_BASE + (code - 0x10000))
        } else {
            self.ranks.rank(code)
        }
    }

    /// The character of a linear offset, if any.
    pub fn four_byte_char(&self, offset: u32) -> Option<char> {
        match offset {
            SUPPLEMENTARY_BASE..=SUPPLEMENTARY_LAST => {
                char::from_u32(0x10000 + (offset - SUPPLEMENTARY_BASE))
            }
            _ => self.ranks.select(offset).map(as_char),
        }
    }
}

/// An encoder for GB 18030.
#[derive(Clone)]
pub struct Gb18030Encoder {
    table: Arc<Gb18030Table>,
}

impl Gb18030Encoder {
    pub fn new(table: Arc<Gb18030Table>) -> Box<dyn RawEncoder> {
        Box::new(Gb18030Encoder { table })
    }
}

impl RawEncoder for Gb18030Encoder {
    fn from_self(&self) -> Box<dyn RawEncoder> {
        Gb18030Encoder::new(self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawEncoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        true
    }

    fn raw_feed(&mut self, input: &str, output: &mut dyn ByteWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        for ((i, j), ch) in input.index_iter() {
            if let Some(code) = self.table.two_byte.encode_char(ch) {
                if code > 0xff {
                    output.write_byte((code >> 8) as u8);
                }
                output.write_byte(code as u8);
            } else if let Some(offset) = self.table.four_byte_offset(ch) {
                output.write_byte((offset / 12600 + 0x81) as u8);
                output.write_byte((offset / 1260 % 10 + 0x30) as u8);
                output.write_byte((offset / 10 % 126 + 0x81) as u8);
                output.write_byte((offset % 10 + 0x30) as u8);
            } else {
                return (i, Some(CodecError::unrepresentable(j)));
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn ByteWriter) -> Option<CodecError> {
        None
    }
}

/// A decoder for GB 18030.
///
/// Carries up to three bytes of an incomplete sequence between calls.
#[derive(Clone)]
pub struct Gb18030Decoder {
    table: Arc<Gb18030Table>,
    carried: [u8; 3],
    carried_len: usize,
}

impl Gb18030Decoder {
    pub fn new(table: Arc<Gb18030Table>) -> Box<dyn RawDecoder> {
        Box::new(Gb18030Decoder { table, carried: [0; 3], carried_len: 0 })
    }
}

enum Step {
    /// A character taking the given number of bytes.
    Char(char, usize),
    /// The given number of bytes are invalid; the following byte is processed afresh.
    Invalid(usize),
    /// The stream ends in the middle of a sequence.
    Incomplete,
}

impl Gb18030Decoder {
    fn step(&self, s: &Joined, i: usize) -> Step {
        let two_byte = &self.table.two_byte;
        let b1 = match s.get(i) {
            Some(b) => b,
            None => return Step::Incomplete,
        };
        if !two_byte.is_lead(b1) {
            return match two_byte.decode_single(b1) {
                Some(ch) => Step::Char(ch, 1),
                None => Step::Invalid(1),
            };
        }
        let b2 = match s.get(i + 1) {
            Some(b) => b,
            None => return Step::Incomplete,
        };
        match b2 {
            0x30..=0x39 => {
                let b3 = match s.get(i + 2) {
                    Some(b) => b,
                    None => return Step::Incomplete,
                };
                if !(0x81..=0xfe).contains(&b3) {
                    return Step::Invalid(2);
                }
                let b4 = match s.get(i + 3) {
                    Some(b) => b,
                    None => return Step::Incomplete,
                };
                if !(0x30..=0x39).contains(&b4) {
                    return Step::Invalid(3);
                }
                let offset = (b1 as u32 - 0x81) * 12600 + (b2 as u32 - 0x30) * 1260 +
                             (b3 as u32 - 0x81) * 10 + (b4 as u32 - 0x30);
                match self.table.four_byte_char(offset) {
                    Some(ch) => Step::Char(ch, 4),
                    None => Step::Invalid(4),
                }
            }
            0x40..=0x7e | 0x80..=0xfe => match two_byte.decode_pair(b1, b2) {
                Some(ch) => Step::Char(ch, 2),
                None => Step::Invalid(2),
            },
            _ => Step::Invalid(1),
        }
    }
}

impl RawDecoder for Gb18030Decoder {
    fn from_self(&self) -> Box<dyn RawDecoder> {
        Gb18030Decoder::new(self.table.clone())
    }
    fn snapshot(&self) -> Box<dyn RawDecoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        true
    }
    fn is_idle(&self) -> bool {
        self.carried_len == 0
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        let carried = self.carried;
        let s = Joined::new(&carried[..self.carried_len], input);
        self.carried_len = 0;

        let mut i = 0;
        while i < s.len() {
            match self.step(&s, i) {
                Step::Char(ch, n) => {
                    output.write_char(ch);
                    i += n;
                }
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
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<CodecError> {
        if self.carried_len > 0 {
            self.carried_len = 0;
            Some(CodecError::incomplete())
        } else {
            None
        }
    }
}
