// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * Interface to the character encoding.
 *
 * The raw incremental interface (`RawEncoder`, `RawDecoder`) lives in the
 * `codepages-types` crate and is re-exported here. This module adds the `Encoding`
 * trait and the traps which decide what happens to unmappable or invalid input.
 *
 * The conversion loops keep feeding the raw coder and hand every problematic
 * sequence to the trap. A trap that substitutes something re-encodes the substitute
 * through the same coder, so the substitute obeys the coder's current mode; such
 * nested fallbacks are bounded by a `FallbackSession`.
 */

pub use codepages_types::{ByteWriter, CodecError, RawDecoder, RawEncoder, StringWriter};

use crate::error::{Error, Result};
use crate::fallback::{default_substitute, FallbackSession};

/// A type of the bare function in `EncoderTrap` values.
pub type EncoderTrapFunc =
    fn(encoder: &mut dyn RawEncoder, input: &str, output: &mut dyn ByteWriter) -> bool;

/// A type of the bare function in `DecoderTrap` values.
pub type DecoderTrapFunc =
    fn(decoder: &mut dyn RawDecoder, input: &[u8], output: &mut dyn StringWriter) -> bool;

/// Trap, which handles decoder errors.
#[derive(Clone, Copy, Debug, Default)]
pub enum DecoderTrap {
    /// Immediately fails on errors.
    Strict,
    /// Replaces an error with a U+FFFD.
    Replace,
    /// Silently ignores an error, effectively replacing it with an empty sequence.
    Ignore,
    /// Looks the sequence up in the code page's best-fit table
    /// and falls back to the code page's replacement character.
    #[default]
    BestFit,
    /// Calls given function to handle decoder errors.
    /// The function is given the current decoder, input and output writer,
    /// and should return true only when it is fine to keep going.
    Call(DecoderTrapFunc),
}

impl DecoderTrap {
    /// Handles a decoder error. May write to the output writer.
    fn trap(&self, encoding: &dyn Encoding, decoder: &mut dyn RawDecoder, input: &[u8],
            output: &mut dyn StringWriter) -> Result<()> {
        let refuse = || Error::InvalidSequence {
            code_page: encoding.code_page(),
            bytes: input.to_vec(),
        };
        match *self {
            DecoderTrap::Strict => Err(refuse()),
            DecoderTrap::Replace => {
                output.write_char('\u{fffd}');
                Ok(())
            }
            DecoderTrap::Ignore => Ok(()),
            DecoderTrap::BestFit => {
                let ch = encoding
                    .decode_fallback(input)
                    .unwrap_or_else(|| encoding.replacement_char());
                trace!("cp{}: {:02x?} decoded as best fit {:?}", encoding.code_page(), input, ch);
                output.write_char(ch);
                Ok(())
            }
            DecoderTrap::Call(func) => {
                if func(decoder, input, output) {
                    Ok(())
                } else {
                    Err(refuse())
                }
            }
        }
    }
}

/// Trap, which handles encoder errors.
#[derive(Clone, Copy, Debug, Default)]
pub enum EncoderTrap {
    /// Immediately fails on errors.
    Strict,
    /// Replaces an error with `?` in given encoding.
    /// Note that this fails when `?` cannot be represented in given encoding.
    Replace,
    /// Silently ignores an error, effectively replacing it with an empty sequence.
    Ignore,
    /// Replaces an error with XML numeric character references (e.g. `&#1234;`).
    /// The encoder trap fails when NCRs cannot be represented in given encoding.
    NcrEscape,
    /// Replaces an error with the code page's best-fit character, or `?` without one.
    /// The substitute is encoded with this trap again, at most `MAX_FALLBACK_DEPTH` deep.
    #[default]
    BestFit,
    /// Calls given function to handle encoder errors.
    /// The function is given the current encoder, input and output writer,
    /// and should return true only when it is fine to keep going.
    Call(EncoderTrapFunc),
}

impl EncoderTrap {
    /// Handles an encoder error. May write to the output writer.
    fn trap(&self, encoding: &dyn Encoding, encoder: &mut dyn RawEncoder, input: &str,
            output: &mut dyn ByteWriter, session: &mut FallbackSession) -> Result<()> {
        let refuse = || Error::Unmappable {
            code_page: encoding.code_page(),
            ch: input.chars().next().unwrap_or('\u{fffd}'),
        };
        match *self {
            EncoderTrap::Strict => Err(refuse()),
            EncoderTrap::Replace => {
                reencode(encoding, encoder, "?", output, EncoderTrap::Strict, session)
            }
            EncoderTrap::Ignore => Ok(()),
            EncoderTrap::NcrEscape => {
                let escapes: String = input.chars().map(|ch| format!("&#{};", ch as u32)).collect();
                reencode(encoding, encoder, &escapes, output, EncoderTrap::Strict, session)
            }
            EncoderTrap::BestFit => {
                for ch in input.chars() {
                    let mut buf = [0u8; 4];
                    let substitute = match encoding.encode_fallback(ch) {
                        Some(sub) => &*sub.encode_utf8(&mut buf),
                        None => default_substitute(ch),
                    };
                    trace!("cp{}: {:?} encoded as best fit {:?}",
                           encoding.code_page(), ch, substitute);
                    reencode(encoding, encoder, substitute, output, EncoderTrap::BestFit, session)?;
                }
                Ok(())
            }
            EncoderTrap::Call(func) => {
                if func(encoder, input, output) {
                    Ok(())
                } else {
                    Err(refuse())
                }
            }
        }
    }
}

fn reencode(encoding: &dyn Encoding, encoder: &mut dyn RawEncoder, input: &str,
            output: &mut dyn ByteWriter, trap: EncoderTrap,
            session: &mut FallbackSession) -> Result<()> {
    session.enter()?;
    let ret = encode_into(encoding, encoder, input, trap, output, false, session);
    session.leave();
    ret
}

/// Feeds `input` to `encoder`, resolving every error through `trap`.
/// With `last` the encoder is finished as well.
pub fn encode_into(encoding: &dyn Encoding, encoder: &mut dyn RawEncoder, input: &str,
                   trap: EncoderTrap, output: &mut dyn ByteWriter, last: bool,
                   session: &mut FallbackSession) -> Result<()> {
    // encoders never carry characters between calls,
    // so the unprocessed part always starts within this input.
    let mut remaining = 0;
    loop {
        let (offset, err) = encoder.raw_feed(&input[remaining..], output);
        let unprocessed = remaining + offset;
        match err {
            Some(err) => {
                remaining = (remaining as isize + err.upto) as usize;
                trap.trap(encoding, encoder, &input[unprocessed..remaining], output, session)?;
            }
            None => {
                remaining = input.len();
                if last {
                    if let Some(err) = encoder.raw_finish(output) {
                        remaining = (remaining as isize + err.upto) as usize;
                        trap.trap(encoding, encoder, &input[unprocessed..remaining], output,
                                  session)?;
                    }
                }
                if remaining >= input.len() {
                    return Ok(());
                }
            }
        }
    }
}

/// Feeds `input` to `decoder`, resolving every error through `trap`.
///
/// `unprocessed` keeps the bytes the decoder has read but not yet resolved,
/// across calls; it is what the trap sees when such a sequence turns out invalid.
/// With `last` the decoder is finished as well.
pub fn decode_into(encoding: &dyn Encoding, decoder: &mut dyn RawDecoder, input: &[u8],
                   trap: DecoderTrap, output: &mut dyn StringWriter, last: bool,
                   unprocessed: &mut Vec<u8>) -> Result<()> {
    let mut remaining = 0;
    loop {
        let (offset, err) = decoder.raw_feed(&input[remaining..], output);
        let start = remaining + offset;
        if offset > 0 {
            unprocessed.clear();
        } else {
            let resolved = decoder.resolved_carry().min(unprocessed.len());
            unprocessed.drain(..resolved);
        }
        match err {
            Some(err) => {
                let upto = ((remaining as isize + err.upto).max(start as isize)) as usize;
                unprocessed.extend_from_slice(&input[start..upto]);
                let ret = trap.trap(encoding, decoder, unprocessed, output);
                unprocessed.clear();
                ret?;
                remaining = upto;
            }
            None => {
                unprocessed.extend_from_slice(&input[start..]);
                if last {
                    let ret = match decoder.raw_finish(output) {
                        Some(_) => trap.trap(encoding, decoder, unprocessed, output),
                        None => Ok(()),
                    };
                    unprocessed.clear();
                    ret?;
                }
                return Ok(());
            }
        }
    }
}

/// Character encoding.
pub trait Encoding: Send + Sync {
    /// Returns the canonical name of given encoding.
    fn name(&self) -> &str;

    /// Returns the numeric code page identifier.
    fn code_page(&self) -> u16;

    /// Creates a new encoder.
    fn raw_encoder(&self) -> Box<dyn RawEncoder>;

    /// Creates a new decoder.
    fn raw_decoder(&self) -> Box<dyn RawDecoder>;

    /// Returns the best-fit substitute of an unmappable character, if any.
    fn encode_fallback(&self, _ch: char) -> Option<char> {
        None
    }

    /// Returns the best-fit character of an invalid byte sequence, if any.
    fn decode_fallback(&self, _input: &[u8]) -> Option<char> {
        None
    }

    /// The character substituted for invalid sequences without a best-fit entry.
    fn replacement_char(&self) -> char {
        '\u{fffd}'
    }

    /// An easy-to-use interface to `RawEncoder`.
    /// On the encoder error `trap` is called,
    /// which may return a replacement sequence to continue processing,
    /// or a failure to return the error.
    fn encode(&self, input: &str, trap: EncoderTrap) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        encode_with(self, input, trap)
    }

    /// An easy-to-use interface to `RawDecoder`.
    /// On the decoder error `trap` is called,
    /// which may return a replacement string to continue processing,
    /// or a failure to return the error.
    fn decode(&self, input: &[u8], trap: DecoderTrap) -> Result<String>
    where
        Self: Sized,
    {
        decode_with(self, input, trap)
    }
}

/// `Encoding::encode` for trait objects.
pub fn encode_with(encoding: &dyn Encoding, input: &str, trap: EncoderTrap) -> Result<Vec<u8>> {
    let mut encoder = encoding.raw_encoder();
    let mut ret: Vec<u8> = Vec::new();
    ret.writer_hint(input.len());
    let mut session = FallbackSession::new(encoding.code_page());
    encode_into(encoding, &mut *encoder, input, trap, &mut ret, true, &mut session)?;
    Ok(ret)
}

/// `Encoding::decode` for trait objects.
pub fn decode_with(encoding: &dyn Encoding, input: &[u8], trap: DecoderTrap) -> Result<String> {
    let mut decoder = encoding.raw_decoder();
    let mut ret = String::new();
    ret.writer_hint(input.len());
    let mut unprocessed = Vec::new();
    decode_into(encoding, &mut *decoder, input, trap, &mut ret, true, &mut unprocessed)?;
    Ok(ret)
}
