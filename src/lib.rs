// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!

# codepages

Conversion between Unicode and legacy numbered code pages.

Single-byte code pages (Windows, DOS, EBCDIC, Mac, ISO 8859, KOI8), double-byte code pages
(Shift_JIS, GBK, Unified Hangul Code, Big5, Johab), GB 18030, the ISO-2022 family
(ISO-2022-JP, ISO-2022-KR, HZ) and ISCII are served from one table blob,
with best-fit fallbacks for characters and bytes that have no exact mapping.

## Simple Usage

To encode a string:

~~~~ {.rust}
use codepages::{Encoding, EncoderTrap};

let latin1 = codepages::encoding(28591).unwrap();
assert_eq!(latin1.encode("caf\u{e9}", EncoderTrap::Strict).unwrap(),
           vec![99, 97, 102, 233]);
~~~~

To encode a string with unrepresentable characters:

~~~~ {.rust}
use codepages::{Encoding, EncoderTrap};

let latin2 = codepages::encoding_by_name("iso-8859-2").unwrap();
assert!(latin2.encode("Acme\u{a9}", EncoderTrap::Strict).is_err());
assert_eq!(latin2.encode("Acme\u{a9}", EncoderTrap::Replace).unwrap(),
           vec![65, 99, 109, 101, 63]);
assert_eq!(latin2.encode("Acme\u{a9}", EncoderTrap::Ignore).unwrap(),
           vec![65, 99, 109, 101]);
assert_eq!(latin2.encode("Acme\u{a9}", EncoderTrap::NcrEscape).unwrap(),
           vec![65, 99, 109, 101, 38, 35, 49, 54, 57, 59]);
~~~~

Best fit is the default trap. It substitutes a look-alike where the code page has one:

~~~~ {.rust}
use codepages::{Encoding, EncoderTrap};

let ansi = codepages::encoding(1252).unwrap();
assert_eq!(ansi.encode("\u{101}\u{263a}", EncoderTrap::default()).unwrap(), vec![b'a', b'?']);
~~~~

To decode a byte sequence with invalid sequences:

~~~~ {.rust}
use codepages::{Encoding, DecoderTrap};

let sjis = codepages::encoding_by_name("shift_jis").unwrap();
assert!(sjis.decode(&[0x41, 0x85], DecoderTrap::Strict).is_err());
assert_eq!(sjis.decode(&[0x41, 0x85], DecoderTrap::Replace).unwrap(), "A\u{fffd}");
assert_eq!(sjis.decode(&[0x41, 0x85], DecoderTrap::Ignore).unwrap(), "A");
// the code page's own replacement character
assert_eq!(sjis.decode(&[0x41, 0x85], DecoderTrap::BestFit).unwrap(), "A\u{30fb}");
~~~~

## Detailed Usage

**`Registry`** resolves code page numbers and names to shared encodings.
`Registry::global` serves the embedded tables; `Registry::with_config` takes any `TableStore`.
Code page 0 stands for the platform default, as in Windows.

**`Encoding`** is a single code page.
Its `encode` and `decode` methods convert whole strings,
handling errors with **traps** (`EncoderTrap` and `DecoderTrap`).

**`Encoder`** and **`Decoder`** convert a stream in pieces,
carrying lead bytes and shift states between calls.
They also write into fixed buffers and report `CoderResult::OutputFull`
with how much input was consumed, so the caller can resume.

The raw protocol under all of this (`RawEncoder`, `RawDecoder`) lives in the `types` module.

*/

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
mod testutils;

mod util;

pub mod codec {
    //! Codec implementations.
    pub mod singlebyte;
    pub mod doublebyte;
    pub mod gb18030;
    pub mod iso2022;
    pub mod iscii;
}

pub mod encoding;
pub mod error;
pub mod fallback;
pub mod incremental;
pub mod label;
pub mod platform;
pub mod registry;
pub mod table;
pub mod types;

pub use self::encoding::{CodePageEncoding, CodecKind};
pub use self::error::{Error, Result};
pub use self::incremental::{CoderResult, Decoder, Encoder};
pub use self::registry::{EncodingInfo, EncodingRef, Registry, RegistryConfig};
pub use self::table::TableStore;
pub use self::types::{decode_with, encode_with, ByteWriter, CodecError, DecoderTrap,
                      DecoderTrapFunc, Encoding, EncoderTrap, EncoderTrapFunc, RawDecoder,
                      RawEncoder, StringWriter}; // reexport

/// Returns the encoding of `code_page` from the global registry.
/// Code page 0 stands for the platform default.
pub fn encoding(code_page: u32) -> Option<EncodingRef> {
    Registry::global().ok()?.get_encoding(code_page)
}

/// Returns the encoding with given name or alias from the global registry.
pub fn encoding_by_name(name: &str) -> Option<EncodingRef> {
    Registry::global().ok()?.get_encoding_by_name(name)
}

#[cfg(all(test, feature = "embedded-tables"))]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::{encoding, CodecKind, CoderResult, Decoder, DecoderTrap, Encoder, EncoderTrap,
                Encoding, EncodingRef, Error, Registry, RegistryConfig};
    use crate::testutils;

    fn get(code_page: u32) -> EncodingRef {
        encoding(code_page).unwrap()
    }

    fn shared(code_page: u32) -> Arc<dyn Encoding> {
        get(code_page)
    }

    /// Stateful code pages with a sample they represent exactly.
    fn samples() -> Vec<(u32, String)> {
        vec![
            (932, format!("{} {}", testutils::JAPANESE_TEXT, testutils::ASCII_TEXT)),
            (50221, format!("{} {}", testutils::ASCII_TEXT, testutils::JAPANESE_TEXT)),
            (949, testutils::KOREAN_TEXT.to_owned()),
            (50225, format!("{}\n{}", testutils::KOREAN_TEXT, testutils::KOREAN_TEXT)),
            (936, testutils::SIMPLIFIED_CHINESE_TEXT.to_owned()),
            (52936, format!("a~{}b", testutils::SIMPLIFIED_CHINESE_TEXT)),
            (54936, format!("{}\u{80}\u{e9}\u{10000}\u{10ffff}", testutils::SIMPLIFIED_CHINESE_TEXT)),
            (950, testutils::TRADITIONAL_CHINESE_TEXT.to_owned()),
            (57002, testutils::HINDI_TEXT.to_owned()),
            (57003, "\u{995}\u{9bc} \u{9f0}".to_owned()),
        ]
    }

    fn decode_in_pieces(code_page: u32, bytes: &[u8], splits: &[usize]) -> String {
        let mut decoder = Decoder::new(shared(code_page), DecoderTrap::Strict);
        let mut output = String::new();
        let mut start = 0;
        for &split in splits {
            decoder.decode_to_string(&bytes[start..split], &mut output, false).unwrap();
            start = split;
        }
        decoder.decode_to_string(&bytes[start..], &mut output, true).unwrap();
        output
    }

    /// Like `decode_in_pieces`, but with any trap, giving the rejected bytes on an error.
    fn try_decode_in_pieces(code_page: u32, bytes: &[u8], splits: &[usize], trap: DecoderTrap)
                            -> Result<String, Vec<u8>> {
        let mut decoder = Decoder::new(shared(code_page), trap);
        let mut output = String::new();
        let ends: Vec<usize> = splits.iter().cloned().chain(Some(bytes.len())).collect();
        let mut start = 0;
        for (k, &end) in ends.iter().enumerate() {
            match decoder.decode_to_string(&bytes[start..end], &mut output, k + 1 == ends.len()) {
                Ok(()) => start = end,
                Err(Error::InvalidSequence { bytes, .. }) => return Err(bytes),
                Err(e) => panic!("cp{}: {}", code_page, e),
            }
        }
        Ok(output)
    }

    /// Escapes that turn out invalid, and a shift sequence cut off by the end of the stream.
    fn broken_escapes() -> Vec<(u32, Vec<u8>)> {
        vec![
            (50220, vec![0x41, 0x1b, 0x28, 0x5a, 0x42]),
            (50220, vec![0x1b, 0x28, 0x80, 0x41]),
            (50221, vec![0x1b, 0x24, 0x28, 0x5a, 0x21, 0x21]),
            (50225, vec![0x1b, 0x24, 0x29, 0x44, 0x41]),
            (50225, vec![0x1b, 0x24, 0x29, 0x80, 0x41]),
            (52936, vec![0x41, 0x7e, 0x78, 0x42]),
            (52936, vec![0x7e, 0x7b, 0x7e, 0x80, 0x41]),
            (50220, vec![0x41, 0x1b, 0x24]),
            (50225, vec![0x1b, 0x24, 0x29]),
        ]
    }

    #[test]
    fn test_carried_escape_is_not_reported_twice() {
        let jp = [0x1b, 0x28, 0x80, 0x41];
        assert_eq!(try_decode_in_pieces(50220, &jp, &[], DecoderTrap::Strict), Err(vec![0x80]));
        assert_eq!(try_decode_in_pieces(50220, &jp, &[2], DecoderTrap::Strict), Err(vec![0x80]));
        let kr = [0x1b, 0x24, 0x29, 0x80];
        assert_eq!(try_decode_in_pieces(50225, &kr, &[], DecoderTrap::Strict), Err(vec![0x80]));
        assert_eq!(try_decode_in_pieces(50225, &kr, &[3], DecoderTrap::Strict), Err(vec![0x80]));
        assert_eq!(try_decode_in_pieces(50220, &[0x41, 0x1b, 0x24], &[2], DecoderTrap::Strict),
                   Err(vec![0x1b, 0x24]));
    }

    #[test]
    fn test_broken_escapes_at_every_split_point() {
        for (code_page, bytes) in broken_escapes() {
            for &trap in &[DecoderTrap::Strict, DecoderTrap::Replace, DecoderTrap::BestFit] {
                let whole = try_decode_in_pieces(code_page, &bytes, &[], trap);
                for split in 0..bytes.len() + 1 {
                    assert_eq!(try_decode_in_pieces(code_page, &bytes, &[split], trap), whole,
                               "cp{} {:02x?} split at {}", code_page, bytes, split);
                }
                let every: Vec<usize> = (1..bytes.len()).collect();
                assert_eq!(try_decode_in_pieces(code_page, &bytes, &every, trap), whole,
                           "cp{} {:02x?} byte by byte", code_page, bytes);
            }
        }
    }

    #[test]
    fn test_samples_round_trip() {
        for (code_page, text) in samples() {
            let enc = get(code_page);
            let bytes = enc.encode(&text, EncoderTrap::Strict).unwrap();
            assert_eq!(enc.decode(&bytes, DecoderTrap::Strict).unwrap(), text, "cp{}", code_page);
        }
    }

    #[test]
    fn test_every_split_point() {
        for (code_page, text) in samples() {
            let bytes = get(code_page).encode(&text, EncoderTrap::Strict).unwrap();
            for split in 0..bytes.len() + 1 {
                assert_eq!(decode_in_pieces(code_page, &bytes, &[split]), text,
                           "cp{} split at {}", code_page, split);
            }
        }
    }

    #[test]
    fn test_single_byte_round_trip() {
        let registry = Registry::global().unwrap();
        for info in registry.encodings() {
            let enc = registry.get_encoding(info.code_page as u32).unwrap();
            let table = match *enc.kind() {
                CodecKind::SingleByte(ref table) => table.clone(),
                _ => continue,
            };
            for b in 0..=255u8 {
                if let Some(ch) = table.decode_byte(b) {
                    let mut buf = [0u8; 4];
                    let encoded = enc.encode(ch.encode_utf8(&mut buf), EncoderTrap::Strict).unwrap();
                    let decoded = enc.decode(&encoded, DecoderTrap::Strict).unwrap();
                    assert_eq!(decoded.chars().collect::<Vec<_>>(), vec![ch],
                               "cp{} byte {:02x}", info.code_page, b);
                }
            }
        }
    }

    #[test]
    fn test_fallback_is_stable() {
        for &code_page in &[1252, 437, 932, 54936, 50220] {
            let enc = get(code_page);
            let first = enc.encode("\u{101}\u{2620}\u{1f600}", EncoderTrap::BestFit).unwrap();
            let second = enc.encode("\u{101}\u{2620}\u{1f600}", EncoderTrap::BestFit).unwrap();
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_overflow_contract() {
        let text = format!("{}{}", testutils::ASCII_TEXT, testutils::JAPANESE_TEXT);
        let whole = get(50221).encode(&text, EncoderTrap::Strict).unwrap();

        let mut encoder = Encoder::new(shared(50221), EncoderTrap::Strict);
        let mut small = vec![0u8; whole.len() - 1];
        let (result, read, written) = encoder.encode_to_slice(&text, &mut small, true).unwrap();
        assert_eq!(result, CoderResult::OutputFull);
        assert!(written <= small.len());
        assert_eq!(&small[..written], &whole[..written]);

        let mut rest = vec![0u8; whole.len() - written];
        let (result, read2, written2) =
            encoder.encode_to_slice(&text[read..], &mut rest, true).unwrap();
        assert_eq!(result, CoderResult::InputEmpty);
        assert_eq!(read + read2, text.len());
        assert_eq!(written + written2, whole.len());
        assert_eq!(&rest[..written2], &whole[written..]);

        let units: Vec<u16> = text.encode_utf16().collect();
        let mut decoder = Decoder::new(shared(50221), DecoderTrap::Strict);
        let mut small = vec![0u16; units.len() - 1];
        let (result, read, written) = decoder.decode_to_utf16(&whole, &mut small, true).unwrap();
        assert_eq!(result, CoderResult::OutputFull);
        assert_eq!(&small[..written], &units[..written]);
        let mut rest = vec![0u16; units.len() - written];
        let (result, _, written2) = decoder.decode_to_utf16(&whole[read..], &mut rest, true).unwrap();
        assert_eq!(result, CoderResult::InputEmpty);
        assert_eq!(&rest[..written2], &units[written..]);
    }

    #[test]
    fn test_single_byte_scenario() {
        let enc = get(28591);
        assert_eq!(enc.encode("A", EncoderTrap::Strict).unwrap(), vec![0x41]);
        assert_eq!(enc.decode(&[0x41], DecoderTrap::Strict).unwrap(), "A");
    }

    #[test]
    fn test_split_lead_byte_scenario() {
        let whole = get(936).decode(&[0x81, 0x40], DecoderTrap::Strict).unwrap();
        assert_eq!(whole, "\u{4e02}");
        assert_eq!(decode_in_pieces(936, &[0x81, 0x40], &[1]), whole);
    }

    #[test]
    fn test_gb18030_supplementary_scenario() {
        let enc = get(54936);
        let bytes = enc.encode("\u{10000}", EncoderTrap::Strict).unwrap();
        assert_eq!(bytes, vec![0x90, 0x30, 0x81, 0x30]);
        let decoded = enc.decode(&bytes, DecoderTrap::Strict).unwrap();
        assert_eq!(decoded.encode_utf16().collect::<Vec<_>>(), vec![0xd800, 0xdc00]);
    }

    #[test]
    fn test_iso2022_jp_scenario() {
        let enc = get(50220);
        let bytes = enc.encode("A\u{65e5}B", EncoderTrap::Strict).unwrap();
        assert_eq!(bytes, vec![0x41, 0x1b, 0x24, 0x42, 0x46, 0x7c, 0x1b, 0x28, 0x42, 0x42]);
        assert_eq!(enc.decode(&bytes, DecoderTrap::Strict).unwrap(), "A\u{65e5}B");
        // one escape per transition, the last one written by the final flush
        let bytes = enc.encode("\u{65e5}\u{672c}AB\u{65e5}", EncoderTrap::Strict).unwrap();
        assert_eq!(bytes.iter().filter(|&&b| b == 0x1b).count(), 4);
    }

    #[test]
    fn test_unmappable_scenario() {
        let enc = get(1252);
        assert_eq!(enc.encode("\u{101}", EncoderTrap::BestFit).unwrap(), vec![b'a']);
        assert_eq!(enc.encode("\u{263a}", EncoderTrap::BestFit).unwrap(), vec![b'?']);
    }

    #[test]
    fn test_iscii_nukta_scenario() {
        let enc = get(57002);
        let decoded = enc.decode(&[0xb3, 0xe9], DecoderTrap::Strict).unwrap();
        assert_eq!(decoded, "\u{958}");
        assert_eq!(decoded.chars().count(), 1);
    }

    #[test]
    fn test_default_code_page() {
        let registry = Registry::with_config(RegistryConfig::default()
            .with_default_code_page(866)).unwrap();
        assert_eq!(registry.get_encoding(0).unwrap().code_page(), 866);
        assert!(encoding(0).is_some());
    }

    proptest! {
        #[test]
        fn prop_chunked_decode_matches(index in 0usize..10, a in any::<prop::sample::Index>(),
                                       b in any::<prop::sample::Index>()) {
            let (code_page, text) = samples().swap_remove(index);
            let bytes = get(code_page).encode(&text, EncoderTrap::Strict).unwrap();
            let mut splits = [a.index(bytes.len() + 1), b.index(bytes.len() + 1)];
            splits.sort();
            prop_assert_eq!(decode_in_pieces(code_page, &bytes, &splits), text);
        }

        #[test]
        fn prop_gb18030_round_trips_any_char(ch in any::<char>()) {
            let enc = get(54936);
            let mut buf = [0u8; 4];
            let text = ch.encode_utf8(&mut buf);
            let bytes = enc.encode(text, EncoderTrap::Strict).unwrap();
            prop_assert_eq!(enc.decode(&bytes, DecoderTrap::Strict).unwrap(), &*text);
        }

        #[test]
        fn prop_best_fit_never_fails(s in "\\PC{0,16}", index in 0usize..10) {
            let (code_page, _) = samples().swap_remove(index);
            let enc = get(code_page);
            let bytes = enc.encode(&s, EncoderTrap::BestFit).unwrap();
            prop_assert!(s.is_empty() || !bytes.is_empty());
            enc.decode(&bytes, DecoderTrap::BestFit).unwrap();
        }
    }
}
