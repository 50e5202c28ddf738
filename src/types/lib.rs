// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Raw incremental interface to the code page codecs.
//!
//! Methods which name starts with `raw_` constitute the raw incremental interface,
//! the lowest-available API for encoders and decoders.
//! This interface divides the entire input to four parts:
//!
//! - **Processed** bytes do not affect the future result.
//! - **Unprocessed** bytes may affect the future result
//!   and can be a part of problematic sequence according to the future input.
//! - **Problematic** bytes are the bytes that cause an error condition.
//! - **Remaining** bytes are not yet processed nor read,
//!   so the caller should feed any remaining bytes again.
//!
//! The following figure illustrates an example of successive `raw_feed` calls:
//!
//! ```text
//! 1st raw_feed   :2nd raw_feed   :3rd raw_feed
//! ----------+----:---------------:--+--+---------
//!           |    :               :  |  |
//! ----------+----:---------------:--+--+---------
//! processed  unprocessed             |  remaining
//!                               problematic
//! ```
//!
//! `raw_feed` returns two offsets (one optional).
//! The first offset points to the first unprocessed byte,
//! or is zero when unprocessed bytes have started before the current call.
//! The second offset (`upto` field in the `CodecError` struct), if any,
//! points to the first remaining byte.
//!
//! A codec that reports an error always drops its carried state first,
//! so after an error the caller restarts from `upto` with a clean slate.

use std::borrow::Cow;

/// Error information from either encoder or decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecError {
    /// The byte position of the first remaining byte, with respect to the *current* input.
    /// For the `finish` call, this should be no more than zero (since there is no input).
    /// The caller should feed the bytes starting from this point again
    /// in order to continue encoding or decoding after an error.
    pub upto: isize,
    /// A human-readable cause of the error.
    pub cause: Cow<'static, str>,
}

impl CodecError {
    /// Makes an error for an unrepresentable character ending at `upto`.
    pub fn unrepresentable(upto: usize) -> CodecError {
        CodecError { upto: upto as isize, cause: Cow::Borrowed("unrepresentable character") }
    }

    /// Makes an error for an invalid byte sequence ending at `upto`.
    pub fn invalid(upto: usize) -> CodecError {
        CodecError { upto: upto as isize, cause: Cow::Borrowed("invalid sequence") }
    }

    /// Makes an error for a sequence left dangling at the end of the stream.
    pub fn incomplete() -> CodecError {
        CodecError { upto: 0, cause: Cow::Borrowed("incomplete sequence") }
    }
}

/// Byte writer used by encoders. In most cases this will be an owned vector of `u8`.
pub trait ByteWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single byte.
    fn write_byte(&mut self, b: u8);

    /// Writes a number of bytes.
    fn write_bytes(&mut self, v: &[u8]);
}

impl ByteWriter for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, v: &[u8]) {
        self.extend_from_slice(v);
    }
}

/// String writer used by decoders. In most cases this will be an owned string.
pub trait StringWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single character.
    fn write_char(&mut self, c: char);

    /// Writes a string.
    fn write_str(&mut self, s: &str);
}

impl StringWriter for String {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

/// UTF-16 output, one or two code units per character.
impl StringWriter for Vec<u16> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_char(&mut self, c: char) {
        let mut units = [0u16; 2];
        self.extend_from_slice(c.encode_utf16(&mut units));
    }

    fn write_str(&mut self, s: &str) {
        self.extend(s.encode_utf16());
    }
}

/// Encoder converting a Unicode string into a byte sequence.
/// This is a lower level interface, and normally `Encoding::encode` should be used instead.
pub trait RawEncoder: Send + 'static {
    /// Creates a fresh `RawEncoder` instance which parameters are same as `self`.
    fn from_self(&self) -> Box<dyn RawEncoder>;

    /// Creates a copy of `self` including any mode it is currently in,
    /// so that the caller can roll back a conversion step.
    fn snapshot(&self) -> Box<dyn RawEncoder>;

    /// Returns true if this encoding is compatible to ASCII,
    /// i.e. U+0000 through U+007F always map to bytes 00 through 7F and nothing else.
    fn is_ascii_compatible(&self) -> bool {
        false
    }

    /// Returns true when the encoder is in its initial mode,
    /// so that `raw_finish` would write nothing.
    fn is_idle(&self) -> bool {
        true
    }

    /// Feeds given portion of string to the encoder,
    /// pushes the an encoded byte sequence at the end of the given output,
    /// and returns a byte offset to the first unprocessed character
    /// (that can be zero when the first such character appeared in the prior calls to `raw_feed`)
    /// and optional error information (None means success).
    fn raw_feed(&mut self, input: &str, output: &mut dyn ByteWriter) -> (usize, Option<CodecError>);

    /// Finishes the encoder,
    /// pushes the an encoded byte sequence at the end of the given output,
    /// and returns optional error information (None means success).
    /// `upto` of the error, if any, is never positive.
    fn raw_finish(&mut self, output: &mut dyn ByteWriter) -> Option<CodecError>;
}

/// Decoder converting a byte sequence into a Unicode string.
/// This is a lower level interface, and normally `Encoding::decode` should be used instead.
pub trait RawDecoder: Send + 'static {
    /// Creates a fresh `RawDecoder` instance which parameters are same as `self`.
    fn from_self(&self) -> Box<dyn RawDecoder>;

    /// Creates a copy of `self` including any carried bytes and mode.
    fn snapshot(&self) -> Box<dyn RawDecoder>;

    /// Returns true if this encoding is compatible to ASCII,
    /// i.e. bytes 00 through 7F always map to U+0000 through U+007F and nothing else.
    fn is_ascii_compatible(&self) -> bool {
        false
    }

    /// Returns true when the decoder carries no partial sequence and is in its initial mode.
    fn is_idle(&self) -> bool {
        true
    }

    /// Feeds given portion of byte sequence to the decoder,
    /// pushes the a decoded string at the end of the given output,
    /// and returns an offset to the first unprocessed byte
    /// (that can be zero when the first such byte appeared in the prior calls to `raw_feed`)
    /// and optional error information (None means success).
    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>);

    /// Returns how many bytes carried over from prior calls the last `raw_feed` resolved
    /// before the offset it returned.
    /// Only matters when that offset is zero: the caller drops as many bytes
    /// from the front of what it keeps for the sequence in progress.
    fn resolved_carry(&self) -> usize {
        0
    }

    /// Finishes the decoder,
    /// pushes the a decoded string at the end of the given output,
    /// and returns optional error information (None means success).
    /// The decoder is back to its initial state afterwards.
    fn raw_finish(&mut self, output: &mut dyn StringWriter) -> Option<CodecError>;
}
