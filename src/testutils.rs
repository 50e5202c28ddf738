// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing.

use crate::types::{CodecError, RawDecoder, RawEncoder};

/// Raw coders driven by the `assert_feed_*` and `assert_finish_*` macros.
pub trait Testable {
    type Input: ?Sized;
    type Output: ?Sized;

    fn test_feed_ok(&mut self, processed: &Self::Input, unprocessed: &Self::Input,
                    output: &Self::Output);
    fn test_feed_err(&mut self, processed: &Self::Input, problem: &Self::Input,
                     remaining: &Self::Input, output: &Self::Output);
    fn test_finish_ok(&mut self, output: &Self::Output);
    fn test_finish_err(&mut self, output: &Self::Output);
}

macro_rules! impl_testable {
    ($coder:ty, $input:ty, $output:ty, $buf:ty) => {
        impl Testable for $coder {
            type Input = $input;
            type Output = $output;

            fn test_feed_ok(&mut self, processed: &$input, unprocessed: &$input,
                            output: &$output) {
                let input = [processed, unprocessed].concat();
                let mut buf = <$buf>::new();
                let (nprocessed, err) = self.raw_feed(&input, &mut buf);
                let upto = err.map(|e| e.upto);
                assert!(processed.len() == nprocessed && upto.is_none(),
                        "raw_feed should return {:?}, but instead returned {:?}",
                        (processed.len(), None::<isize>), (nprocessed, upto));
                assert!(*output == buf[..],
                        "raw_feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
            }

            fn test_feed_err(&mut self, processed: &$input, problem: &$input,
                             remaining: &$input, output: &$output) {
                let input = [processed, problem, remaining].concat();
                let mut buf = <$buf>::new();
                let (nprocessed, err) = self.raw_feed(&input, &mut buf);
                let upto = err.map(|e| e.upto);
                let expected = Some((processed.len() + problem.len()) as isize);
                assert!(processed.len() == nprocessed && expected == upto,
                        "raw_feed should return {:?}, but instead returned {:?}",
                        (processed.len(), expected), (nprocessed, upto));
                assert!(*output == buf[..],
                        "raw_feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
            }

            fn test_finish_ok(&mut self, output: &$output) {
                let mut buf = <$buf>::new();
                let upto = self.raw_finish(&mut buf).map(|e: CodecError| e.upto);
                assert!(upto.is_none(),
                        "raw_finish should return {:?}, but instead returned {:?}",
                        None::<isize>, upto);
                assert!(*output == buf[..],
                        "raw_finish should push {:?}, but instead pushed {:?}", output, &buf[..]);
            }

            fn test_finish_err(&mut self, output: &$output) {
                let mut buf = <$buf>::new();
                let upto = self.raw_finish(&mut buf).map(|e: CodecError| e.upto);
                assert!(upto == Some(0),
                        "raw_finish should return {:?}, but instead returned {:?}",
                        Some(0isize), upto);
                assert!(*output == buf[..],
                        "raw_finish should push {:?}, but instead pushed {:?}", output, &buf[..]);
            }
        }
    };
}

impl_testable!(dyn RawEncoder, str, [u8], Vec<u8>);
impl_testable!(dyn RawDecoder, [u8], str, String);

macro_rules! assert_feed_ok {
    ($this:expr, $processed:expr, $unprocessed:expr, $output:expr) => {
        $crate::testutils::Testable::test_feed_ok(
            &mut *$this, &$processed[..], &$unprocessed[..], &$output[..])
    };
}

macro_rules! assert_feed_err {
    ($this:expr, $processed:expr, $problem:expr, $remaining:expr, $output:expr) => {
        $crate::testutils::Testable::test_feed_err(
            &mut *$this, &$processed[..], &$problem[..], &$remaining[..], &$output[..])
    };
}

macro_rules! assert_finish_ok {
    ($this:expr, $output:expr) => {
        $crate::testutils::Testable::test_finish_ok(&mut *$this, &$output[..])
    };
}

macro_rules! assert_finish_err {
    ($this:expr, $output:expr) => {
        $crate::testutils::Testable::test_finish_err(&mut *$this, &$output[..])
    };
}

/// Plain English, representable in every ASCII-compatible code page.
pub static ASCII_TEXT: &str = "Code pages were numbered long before anyone agreed on Unicode.";

/// Japanese sample covering kana, kanji and a half-width katakana run.
pub static JAPANESE_TEXT: &str =
    "\u{65e5}\u{672c}\u{8a9e}\u{306e}\u{6587}\u{7ae0}\u{3067}\u{3059}\u{3002}\
     \u{30ab}\u{30bf}\u{30ab}\u{30ca}\u{3068}\u{ff76}\u{ff80}\u{ff76}\u{ff85}";

/// Korean sample.
pub static KOREAN_TEXT: &str =
    "\u{d55c}\u{ad6d}\u{c5b4}\u{b294} \u{c544}\u{b984}\u{b2f5}\u{c2b5}\u{b2c8}\u{b2e4}.";

/// Simplified Chinese sample.
pub static SIMPLIFIED_CHINESE_TEXT: &str =
    "\u{4e2d}\u{6587}\u{7f16}\u{7801}\u{8f6c}\u{6362}\u{6d4b}\u{8bd5}\u{3002}";

/// Traditional Chinese sample.
pub static TRADITIONAL_CHINESE_TEXT: &str =
    "\u{4e2d}\u{6587}\u{7de8}\u{78bc}\u{8f49}\u{63db}\u{6e2c}\u{8a66}\u{3002}";

/// Hindi sample in Devanagari, with a nukta form and a conjunct.
pub static HINDI_TEXT: &str =
    "\u{0928}\u{092e}\u{0938}\u{094d}\u{0924}\u{0947} \u{095c}\u{0915}\u{093e}";
