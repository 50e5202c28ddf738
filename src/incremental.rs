// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * Persistent encoders and decoders for chunked conversion.
 *
 * An `Encoder` or `Decoder` keeps its raw coder between calls, so a character or an
 * escape sequence split across two chunks converts the same as in one piece.
 * The `*_to_slice` and `*_to_utf16` variants write into caller-owned buffers and never
 * overrun them: when the output does not fit they stop at a character boundary and report
 * how much was read and written.
 */

use std::sync::Arc;

use crate::error::Result;
use crate::fallback::FallbackSession;
use crate::types::*;
use crate::util::{ByteCounter, StrCharIndex, Utf16Counter};

/// The outcome of a bounded conversion call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoderResult {
    /// All input was consumed.
    InputEmpty,
    /// The output buffer is full; resume from the reported input offset.
    OutputFull,
}

/// An incremental encoder.
pub struct Encoder {
    encoding: Arc<dyn Encoding>,
    raw: Box<dyn RawEncoder>,
    trap: EncoderTrap,
}

impl Encoder {
    pub fn new(encoding: Arc<dyn Encoding>, trap: EncoderTrap) -> Encoder {
        let raw = encoding.raw_encoder();
        Encoder { encoding, raw, trap }
    }

    pub fn encoding(&self) -> &Arc<dyn Encoding> {
        &self.encoding
    }

    /// True when a shift state has to be closed by a final call.
    pub fn has_state(&self) -> bool {
        !self.raw.is_idle()
    }

    /// Drops all state, as if the encoder were new.
    pub fn reset(&mut self) {
        self.raw = self.raw.from_self();
    }

    /// Encodes `input` and appends the result to `output`.
    /// With `last` the encoder also returns to its initial state, writing what that takes.
    pub fn encode_to_vec(&mut self, input: &str, output: &mut Vec<u8>, last: bool) -> Result<()> {
        let mut session = FallbackSession::new(self.encoding.code_page());
        encode_into(&*self.encoding, &mut *self.raw, input, self.trap, output, last, &mut session)
    }

    /// Encodes into `output` as far as it fits.
    /// Returns the result with the number of input bytes read and output bytes written.
    pub fn encode_to_slice(&mut self, input: &str, output: &mut [u8], last: bool)
                           -> Result<(CoderResult, usize, usize)> {
        let mut session = FallbackSession::new(self.encoding.code_page());
        let mut buf = Vec::new();

        let saved = self.try_encode(input, &mut buf, last, &mut session)?;
        if buf.len() <= output.len() {
            output[..buf.len()].copy_from_slice(&buf);
            return Ok((CoderResult::InputEmpty, input.len(), buf.len()));
        }
        self.raw = saved;

        // one character at a time, so each piece is either written whole or not at all
        let mut written = 0;
        for ((i, j), _) in input.index_iter() {
            buf.clear();
            let saved = self.try_encode(&input[i..j], &mut buf, false, &mut session)?;
            if written + buf.len() > output.len() {
                self.raw = saved;
                return Ok((CoderResult::OutputFull, i, written));
            }
            output[written..written + buf.len()].copy_from_slice(&buf);
            written += buf.len();
        }
        if last {
            buf.clear();
            let saved = self.try_encode("", &mut buf, true, &mut session)?;
            if written + buf.len() > output.len() {
                self.raw = saved;
                return Ok((CoderResult::OutputFull, input.len(), written));
            }
            output[written..written + buf.len()].copy_from_slice(&buf);
            written += buf.len();
        }
        Ok((CoderResult::InputEmpty, input.len(), written))
    }

    /// Counts the bytes `encode_to_vec` would write, leaving the encoder untouched.
    pub fn byte_length(&self, input: &str, last: bool) -> Result<usize> {
        let mut raw = self.raw.snapshot();
        let mut counter = ByteCounter::default();
        let mut session = FallbackSession::new(self.encoding.code_page());
        encode_into(&*self.encoding, &mut *raw, input, self.trap, &mut counter, last,
                    &mut session)?;
        Ok(counter.count)
    }

    /// Encodes into `buf` and returns the state before the call.
    /// On failure the state is restored.
    fn try_encode(&mut self, input: &str, buf: &mut Vec<u8>, last: bool,
                  session: &mut FallbackSession) -> Result<Box<dyn RawEncoder>> {
        let saved = self.raw.snapshot();
        match encode_into(&*self.encoding, &mut *self.raw, input, self.trap, buf, last, session) {
            Ok(()) => Ok(saved),
            Err(err) => {
                self.raw = saved;
                Err(err)
            }
        }
    }
}

/// An incremental decoder.
pub struct Decoder {
    encoding: Arc<dyn Encoding>,
    raw: Box<dyn RawDecoder>,
    trap: DecoderTrap,
    /// Bytes read by the raw decoder and not yet resolved.
    unprocessed: Vec<u8>,
}

impl Decoder {
    pub fn new(encoding: Arc<dyn Encoding>, trap: DecoderTrap) -> Decoder {
        let raw = encoding.raw_decoder();
        Decoder { encoding, raw, trap, unprocessed: Vec::new() }
    }

    pub fn encoding(&self) -> &Arc<dyn Encoding> {
        &self.encoding
    }

    /// True when an incomplete sequence or a non-default mode is carried.
    pub fn has_state(&self) -> bool {
        !self.raw.is_idle()
    }

    /// Drops all state, as if the decoder were new.
    pub fn reset(&mut self) {
        self.raw = self.raw.from_self();
        self.unprocessed.clear();
    }

    /// Decodes `input` and appends the result to `output`.
    /// With `last` a trailing incomplete sequence goes through the trap.
    pub fn decode_to_string(&mut self, input: &[u8], output: &mut String, last: bool) -> Result<()> {
        decode_into(&*self.encoding, &mut *self.raw, input, self.trap, output, last,
                    &mut self.unprocessed)
    }

    /// Decodes into `output` as far as it fits.
    /// Returns the result with the number of input bytes read and UTF-16 units written.
    pub fn decode_to_utf16(&mut self, input: &[u8], output: &mut [u16], last: bool)
                           -> Result<(CoderResult, usize, usize)> {
        let mut buf = Vec::new();

        let saved = self.try_decode(input, &mut buf, last)?;
        if buf.len() <= output.len() {
            output[..buf.len()].copy_from_slice(&buf);
            return Ok((CoderResult::InputEmpty, input.len(), buf.len()));
        }
        self.restore(saved);

        let mut written = 0;
        for i in 0..input.len() {
            buf.clear();
            let saved = self.try_decode(&input[i..i + 1], &mut buf, false)?;
            if written + buf.len() > output.len() {
                self.restore(saved);
                return Ok((CoderResult::OutputFull, i, written));
            }
            output[written..written + buf.len()].copy_from_slice(&buf);
            written += buf.len();
        }
        if last {
            buf.clear();
            let saved = self.try_decode(&[], &mut buf, true)?;
            if written + buf.len() > output.len() {
                self.restore(saved);
                return Ok((CoderResult::OutputFull, input.len(), written));
            }
            output[written..written + buf.len()].copy_from_slice(&buf);
            written += buf.len();
        }
        Ok((CoderResult::InputEmpty, input.len(), written))
    }

    /// Counts the UTF-16 units `decode_to_utf16` would write, leaving the decoder untouched.
    pub fn char_length(&self, input: &[u8], last: bool) -> Result<usize> {
        let mut raw = self.raw.snapshot();
        let mut unprocessed = self.unprocessed.clone();
        let mut counter = Utf16Counter::default();
        decode_into(&*self.encoding, &mut *raw, input, self.trap, &mut counter, last,
                    &mut unprocessed)?;
        Ok(counter.count)
    }

    fn try_decode(&mut self, input: &[u8], buf: &mut Vec<u16>, last: bool)
                  -> Result<(Box<dyn RawDecoder>, Vec<u8>)> {
        let saved = (self.raw.snapshot(), self.unprocessed.clone());
        match decode_into(&*self.encoding, &mut *self.raw, input, self.trap, buf, last,
                          &mut self.unprocessed) {
            Ok(()) => Ok(saved),
            Err(err) => {
                self.restore(saved);
                Err(err)
            }
        }
    }

    fn restore(&mut self, (raw, unprocessed): (Box<dyn RawDecoder>, Vec<u8>)) {
        self.raw = raw;
        self.unprocessed = unprocessed;
    }
}
