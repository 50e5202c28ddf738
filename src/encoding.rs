// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! The `Encoding` of a code page, whatever its codec.

use std::fmt;
use std::sync::Arc;

use crate::codec::doublebyte::{DoubleByteDecoder, DoubleByteEncoder, DoubleByteTable};
use crate::codec::gb18030::{Gb18030Decoder, Gb18030Encoder, Gb18030Table};
use crate::codec::iscii::{IsciiDecoder, IsciiEncoder};
use crate::codec::iso2022::{Iso2022Decoder, Iso2022Encoder, Iso2022Variant};
use crate::codec::singlebyte::{SingleByteDecoder, SingleByteEncoder, SingleByteTable};
use crate::types::*;

/// The codec of a code page with the tables it runs on.
#[derive(Clone)]
pub enum CodecKind {
    SingleByte(Arc<SingleByteTable>),
    DoubleByte(Arc<DoubleByteTable>),
    Gb18030(Arc<Gb18030Table>),
    /// An escape-switched variant over a double-byte table.
    Iso2022(Iso2022Variant, Arc<DoubleByteTable>),
    /// ISCII with the given default script.
    Iscii(u8),
}

impl fmt::Debug for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CodecKind::SingleByte(ref t) => write!(f, "SingleByte({})", t.code_page()),
            CodecKind::DoubleByte(ref t) => write!(f, "DoubleByte({})", t.code_page()),
            CodecKind::Gb18030(_) => f.write_str("Gb18030"),
            CodecKind::Iso2022(variant, ref t) => write!(f, "Iso2022({:?}, {})", variant, t.code_page()),
            CodecKind::Iscii(script) => write!(f, "Iscii({})", script),
        }
    }
}

/// A code page usable through the `Encoding` trait.
#[derive(Clone, Debug)]
pub struct CodePageEncoding {
    code_page: u16,
    name: String,
    kind: CodecKind,
}

impl CodePageEncoding {
    pub fn new(code_page: u16, name: impl Into<String>, kind: CodecKind) -> CodePageEncoding {
        CodePageEncoding { code_page, name: name.into(), kind }
    }

    pub fn kind(&self) -> &CodecKind {
        &self.kind
    }

    /// True when bytes 00 through 7F always decode to ASCII and back, regardless of state.
    pub fn is_ascii_compatible(&self) -> bool {
        match self.kind {
            CodecKind::SingleByte(ref t) => t.is_ascii_compatible(),
            CodecKind::DoubleByte(ref t) => t.is_ascii_compatible(),
            CodecKind::Gb18030(_) | CodecKind::Iscii(_) => true,
            CodecKind::Iso2022(..) => false,
        }
    }

    /// True for codecs whose coders can carry state between calls.
    pub fn is_stateful(&self) -> bool {
        !matches!(self.kind, CodecKind::SingleByte(_))
    }
}

impl Encoding for CodePageEncoding {
    fn name(&self) -> &str {
        &self.name
    }

    fn code_page(&self) -> u16 {
        self.code_page
    }

    fn raw_encoder(&self) -> Box<dyn RawEncoder> {
        match self.kind {
            CodecKind::SingleByte(ref t) => SingleByteEncoder::new(t.clone()),
            CodecKind::DoubleByte(ref t) => DoubleByteEncoder::new(t.clone()),
            CodecKind::Gb18030(ref t) => Gb18030Encoder::new(t.clone()),
            CodecKind::Iso2022(variant, ref t) => Iso2022Encoder::new(variant, t.clone()),
            CodecKind::Iscii(script) => IsciiEncoder::new(script),
        }
    }

    fn raw_decoder(&self) -> Box<dyn RawDecoder> {
        match self.kind {
            CodecKind::SingleByte(ref t) => SingleByteDecoder::new(t.clone()),
            CodecKind::DoubleByte(ref t) => DoubleByteDecoder::new(t.clone()),
            CodecKind::Gb18030(ref t) => Gb18030Decoder::new(t.clone()),
            CodecKind::Iso2022(variant, ref t) => Iso2022Decoder::new(variant, t.clone()),
            CodecKind::Iscii(script) => IsciiDecoder::new(script),
        }
    }

    fn encode_fallback(&self, ch: char) -> Option<char> {
        match self.kind {
            CodecKind::SingleByte(ref t) => t.encode_fallback(ch),
            CodecKind::DoubleByte(ref t) => t.encode_fallback(ch),
            CodecKind::Gb18030(ref t) => t.two_byte().encode_fallback(ch),
            CodecKind::Iso2022(_, ref t) => t.encode_fallback(ch),
            CodecKind::Iscii(_) => None,
        }
    }

    fn decode_fallback(&self, input: &[u8]) -> Option<char> {
        match self.kind {
            CodecKind::SingleByte(ref t) => t.decode_fallback(input),
            CodecKind::DoubleByte(ref t) => t.decode_fallback(input),
            CodecKind::Gb18030(ref t) => t.two_byte().decode_fallback(input),
            CodecKind::Iso2022(..) | CodecKind::Iscii(_) => None,
        }
    }

    fn replacement_char(&self) -> char {
        match self.kind {
            CodecKind::SingleByte(ref t) => t.replacement(),
            CodecKind::DoubleByte(ref t) => t.replacement(),
            CodecKind::Gb18030(ref t) => t.two_byte().replacement(),
            CodecKind::Iso2022(..) | CodecKind::Iscii(_) => '\u{fffd}',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iscii_encoding() {
        let enc = CodePageEncoding::new(57003, "x-iscii-be", CodecKind::Iscii(3));
        assert_eq!(enc.name(), "x-iscii-be");
        assert_eq!(enc.code_page(), 57003);
        assert!(enc.is_ascii_compatible());
        assert!(enc.is_stateful());
        assert_eq!(enc.encode("\u{995}A", EncoderTrap::Strict).unwrap(), vec![0xb3, 0x41]);
        assert_eq!(enc.decode(&[0xb3, 0xe9], DecoderTrap::Strict).unwrap(), "\u{995}\u{9bc}");
        assert_eq!(enc.decode(&[0xa0], DecoderTrap::BestFit).unwrap(), "\u{fffd}");
        assert_eq!(enc.encode("\u{263a}", EncoderTrap::BestFit).unwrap(), vec![0x3f]);
    }
}

#[cfg(all(test, feature = "embedded-tables"))]
mod table_tests {
    use super::*;
    use crate::table::TableStore;

    fn double_byte(code_page: u16) -> Arc<DoubleByteTable> {
        Arc::new(DoubleByteTable::from_store(TableStore::embedded().unwrap(), code_page).unwrap())
    }

    #[test]
    fn test_single_byte_best_fit() {
        let t = SingleByteTable::from_store(TableStore::embedded().unwrap(), 1252).unwrap();
        let enc = CodePageEncoding::new(1252, "windows-1252", CodecKind::SingleByte(Arc::new(t)));
        assert_eq!(enc.encode("A", EncoderTrap::Strict).unwrap(), vec![0x41]);
        assert_eq!(enc.decode(&[0x41], DecoderTrap::Strict).unwrap(), "A");
        assert_eq!(enc.encode("\u{101}\u{263a}", EncoderTrap::BestFit).unwrap(), vec![0x61, 0x3f]);
        assert_eq!(enc.encode("\u{1f600}", EncoderTrap::BestFit).unwrap(), vec![0x3f, 0x3f]);
        assert!(enc.encode("\u{101}", EncoderTrap::Strict).is_err());
        assert_eq!(enc.decode(&[0x81], DecoderTrap::BestFit).unwrap(), "\u{81}");
        assert!(!enc.is_stateful());
    }

    #[test]
    fn test_double_byte_replacement() {
        let enc = CodePageEncoding::new(932, "shift_jis", CodecKind::DoubleByte(double_byte(932)));
        assert_eq!(enc.replacement_char(), '\u{30fb}');
        assert_eq!(enc.decode(&[0x41, 0x85], DecoderTrap::BestFit).unwrap(), "A\u{30fb}");
        assert_eq!(enc.decode(&[0xfa, 0x5c], DecoderTrap::BestFit).unwrap(), "\u{7e8a}");
        assert_eq!(enc.decode(&[0x82], DecoderTrap::BestFit).unwrap(), "\u{30fb}");
    }

    #[test]
    fn test_iso2022_uses_base_best_fit() {
        let kind = CodecKind::Iso2022(Iso2022Variant::JpFullWidthKana, double_byte(932));
        let enc = CodePageEncoding::new(50220, "iso-2022-jp", kind);
        assert!(!enc.is_ascii_compatible());
        assert_eq!(enc.encode("\u{e9}\u{65e5}", EncoderTrap::BestFit).unwrap(),
                   vec![0x65, 0x1b, 0x24, 0x42, 0x46, 0x7c, 0x1b, 0x28, 0x42]);
        assert_eq!(enc.decode(&[0x1b, 0x24, 0x42, 0x22, 0x2f], DecoderTrap::BestFit).unwrap(),
                   "\u{fffd}");
    }
}
