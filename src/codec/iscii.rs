// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * ISCII-91 (code pages 57002 through 57011).
 *
 * One byte layout serves ten Indic scripts. Each code page only differs in its default
 * script; an attribute sequence `EF 4x` switches the script mid-stream.
 * A nukta byte (E9) after certain letters selects a different character, and a virama (E8)
 * followed by E8 or E9 stands for ZWNJ or ZWJ.
 */

use codepages_index_iscii as index;

use crate::types::*;
use crate::util::{as_char, StrCharIndex};

const ATR: u8 = 0xef;
const EXT: u8 = 0xf0;
const VIRAMA: u8 = 0xe8;
const NUKTA: u8 = 0xe9;
const UNMAPPED: u16 = 0xffff;

/// Pseudo-script selected by `EF 41`: bytes from A0 up are invalid.
const ROMAN: u8 = 1;

const ZWNJ: char = '\u{200c}';
const ZWJ: char = '\u{200d}';

/// Returns the default script of an ISCII code page.
pub fn script_of_code_page(code_page: u16) -> Option<u8> {
    match code_page {
        57002..=57011 => Some((code_page - 57000) as u8),
        _ => None,
    }
}

/// An encoder for ISCII.
#[derive(Clone)]
pub struct IsciiEncoder {
    default: u8,
    script: u8,
    after_virama: bool,
}

impl IsciiEncoder {
    pub fn new(script: u8) -> Box<dyn RawEncoder> {
        Box::new(IsciiEncoder { default: script, script, after_virama: false })
    }
}

enum Form {
    Plain,
    Nukta,
    Ext,
}

impl RawEncoder for IsciiEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> {
        IsciiEncoder::new(self.default)
    }
    fn snapshot(&self) -> Box<dyn RawEncoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        true
    }
    fn is_idle(&self) -> bool {
        self.script == self.default && !self.after_virama
    }

    fn raw_feed(&mut self, input: &str, output: &mut dyn ByteWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        for ((i, j), ch) in input.index_iter() {
            let code = ch as u32;
            if code < 0xa0 {
                output.write_byte(code as u8);
                self.after_virama = false;
                continue;
            }
            if (ch == ZWNJ || ch == ZWJ) && self.after_virama {
                output.write_byte(if ch == ZWNJ { VIRAMA } else { NUKTA });
                self.after_virama = false;
                continue;
            }

            let packed = index::backward(code);
            if packed == 0 {
                return (i, Some(CodecError::unrepresentable(j)));
            }
            let byte = packed as u8;
            let owner = ((packed >> 8) & 0xf) as u8;
            let form = if packed & index::EXT_FLAG != 0 {
                Form::Ext
            } else if packed & index::NUKTA_FLAG != 0 {
                Form::Nukta
            } else {
                Form::Plain
            };

            if owner != index::NEUTRAL_SCRIPT {
                let decoded = match form {
                    Form::Plain => index::forward(self.script, byte),
                    Form::Nukta => index::forward_nukta(self.script, byte),
                    Form::Ext => index::forward_ext(self.script, byte),
                };
                if decoded as u32 != code {
                    output.write_byte(ATR);
                    output.write_byte(0x40 + owner);
                    self.script = owner;
                }
            }

            match form {
                Form::Plain => output.write_byte(byte),
                Form::Nukta => {
                    output.write_byte(byte);
                    output.write_byte(NUKTA);
                }
                Form::Ext => {
                    output.write_byte(EXT);
                    output.write_byte(byte);
                }
            }
            self.after_virama = matches!(form, Form::Plain) && byte == VIRAMA;
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, output: &mut dyn ByteWriter) -> Option<CodecError> {
        if self.script != self.default {
            output.write_byte(ATR);
            output.write_byte(0x40);
        }
        self.script = self.default;
        self.after_virama = false;
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Idle,
    AfterAtr,
    AfterExt,
    AfterVirama,
    /// A letter whose form depends on whether a nukta follows.
    PendingNukta(u8),
}

/// A decoder for ISCII.
#[derive(Clone)]
pub struct IsciiDecoder {
    default: u8,
    script: u8,
    state: State,
}

impl IsciiDecoder {
    pub fn new(script: u8) -> Box<dyn RawDecoder> {
        Box::new(IsciiDecoder { default: script, script, state: State::Idle })
    }

    fn reset(&mut self) {
        self.script = self.default;
        self.state = State::Idle;
    }
}

impl RawDecoder for IsciiDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> {
        IsciiDecoder::new(self.default)
    }
    fn snapshot(&self) -> Box<dyn RawDecoder> {
        Box::new(self.clone())
    }
    fn is_ascii_compatible(&self) -> bool {
        true
    }
    fn is_idle(&self) -> bool {
        self.state == State::Idle && self.script == self.default
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter) -> (usize, Option<CodecError>) {
        output.writer_hint(input.len());

        // everything before `processed` is fully reflected in the output or in `self.state`
        let mut processed = 0;
        for (i, &b) in input.iter().enumerate() {
            match std::mem::replace(&mut self.state, State::Idle) {
                State::AfterAtr => {
                    self.script = match b {
                        0x40 => self.default,
                        0x41 => ROMAN,
                        0x42..=0x4b => b - 0x40,
                        _ => return (processed, Some(CodecError::invalid(i))),
                    };
                    processed = i + 1;
                    continue;
                }
                State::AfterExt => match index::forward_ext(self.script, b) {
                    UNMAPPED => return (processed, Some(CodecError::invalid(i))),
                    ch => {
                        output.write_char(as_char(ch as u32));
                        processed = i + 1;
                        continue;
                    }
                },
                State::PendingNukta(prev) => {
                    if b == NUKTA {
                        output.write_char(as_char(index::forward_nukta(self.script, prev) as u32));
                        processed = i + 1;
                        continue;
                    }
                    output.write_char(as_char(index::forward(self.script, prev) as u32));
                }
                State::AfterVirama if b == VIRAMA || b == NUKTA => {
                    output.write_char(if b == VIRAMA { ZWNJ } else { ZWJ });
                    processed = i + 1;
                    continue;
                }
                State::AfterVirama | State::Idle => {}
            }

            match b {
                ATR => self.state = State::AfterAtr,
                EXT => self.state = State::AfterExt,
                0x00..=0x9f => {
                    output.write_char(b as char);
                    processed = i + 1;
                }
                _ => {
                    let ch = index::forward(self.script, b);
                    if self.script == ROMAN || ch == UNMAPPED {
                        return (i, Some(CodecError::invalid(i + 1)));
                    }
                    if index::forward_nukta(self.script, b) != UNMAPPED {
                        self.state = State::PendingNukta(b);
                    } else {
                        output.write_char(as_char(ch as u32));
                        if b == VIRAMA {
                            self.state = State::AfterVirama;
                        }
                    }
                    processed = i + 1;
                }
            }
        }
        (processed, None)
    }

    fn raw_finish(&mut self, output: &mut dyn StringWriter) -> Option<CodecError> {
        let state = self.state;
        let script = self.script;
        self.reset();
        match state {
            State::PendingNukta(prev) => {
                output.write_char(as_char(index::forward(script, prev) as u32));
                None
            }
            State::AfterAtr | State::AfterExt => Some(CodecError::incomplete()),
            State::AfterVirama | State::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils;

    #[test]
    fn test_code_pages() {
        assert_eq!(script_of_code_page(57002), Some(2));
        assert_eq!(script_of_code_page(57011), Some(11));
        assert_eq!(script_of_code_page(57001), None);
    }

    #[test]
    fn test_encoder_valid() {
        let mut e = IsciiEncoder::new(2);
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, testutils::HINDI_TEXT, "",
                        [0xc6, 0xcc, 0xd7, 0xe8, 0xc2, 0xe1, 0x20, 0xbf, 0xe9, 0xb3, 0xda]);
        assert_feed_ok!(e, "\u{952}\u{964}", "", [0xf0, 0xb8, 0xea]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_script_switch() {
        let mut e = IsciiEncoder::new(2);
        assert_feed_ok!(e, "\u{915}\u{995}", "", [0xb3, 0xef, 0x43, 0xb3]);
        // the danda and ASCII need no switch
        assert_feed_ok!(e, "\u{964}.\u{9f0}", "", [0xea, 0x2e, 0xef, 0x46, 0xcf]);
        assert!(!e.is_idle());
        assert_finish_ok!(e, [0xef, 0x40]);
        assert!(e.is_idle());
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_joiners() {
        let mut e = IsciiEncoder::new(2);
        assert_feed_ok!(e, "\u{915}\u{94d}\u{200c}", "", [0xb3, 0xe8, 0xe8]);
        assert_feed_ok!(e, "\u{915}\u{94d}\u{200d}", "", [0xb3, 0xe8, 0xe9]);
        assert_feed_err!(e, "\u{915}", "\u{200c}", "", [0xb3]);
        assert_feed_ok!(e, "\u{94d}", "", [0xe8]);
        assert_feed_ok!(e, "\u{200d}", "", [0xe9]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = IsciiEncoder::new(2);
        assert_feed_err!(e, "A", "\u{e9}", "B", [0x41]);
        assert_feed_err!(e, "", "\u{a0}", "", []);
        assert_feed_err!(e, "", "\u{1f600}", "", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_ok!(d, [0xc6, 0xcc, 0xd7, 0xe8, 0xc2, 0xe1, 0x20, 0xbf, 0xe9, 0xb3, 0xda], [],
                        testutils::HINDI_TEXT);
        assert_feed_ok!(d, [0xb3, 0xe9], [], "\u{958}");
        // a danda may still turn into an avagraha
        assert_feed_ok!(d, [0xf0, 0xb8, 0xf0, 0xbf, 0xea], [], "\u{952}\u{970}");
        assert_finish_ok!(d, "\u{964}");
    }

    #[test]
    fn test_decoder_pending_nukta() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_ok!(d, [0xb3], [], "");
        assert!(!d.is_idle());
        assert_feed_ok!(d, [0xe9], [], "\u{958}");
        assert_feed_ok!(d, [0xb3], [], "");
        assert_feed_ok!(d, [0x41], [], "\u{915}A");
        assert_feed_ok!(d, [0xb3], [], "");
        assert_finish_ok!(d, "\u{915}");
    }

    #[test]
    fn test_decoder_virama() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_ok!(d, [0xb3, 0xe8, 0xe8], [], "\u{915}\u{94d}\u{200c}");
        assert_feed_ok!(d, [0xb3, 0xe8], [], "\u{915}\u{94d}");
        assert_feed_ok!(d, [0xe9], [], "\u{200d}");
        assert_feed_ok!(d, [0xe8, 0xda], [], "\u{94d}\u{93e}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_attributes() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_ok!(d, [0xef, 0x43, 0xb3], [], "\u{995}");
        assert_feed_ok!(d, [], [0xef], "");
        assert_feed_ok!(d, [0x40, 0xb3, 0xda], [], "\u{915}\u{93e}");
        assert_feed_err!(d, [], [0xef], [0x30], "");
        assert_feed_err!(d, [0xef, 0x41, 0x41], [0xb3], [], "A");
        assert_feed_ok!(d, [0xef, 0x40, 0xea], [], "");
        assert_feed_ok!(d, [0xe9, 0xea, 0x20], [], "\u{93d}\u{964} ");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_err!(d, [0x41], [0xa0], [0x42], "A");
        assert_feed_err!(d, [], [0xf0], [0xb3], "");
        // the pending letter is written before the error
        assert_feed_err!(d, [0xb3], [0xff], [], "\u{915}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_finish() {
        let mut d = IsciiDecoder::new(2);
        assert_feed_ok!(d, [0xef, 0x43], [0xef], "");
        assert_finish_err!(d, "");
        assert_feed_ok!(d, [0xb3, 0xda], [], "\u{915}\u{93e}");
        assert_finish_ok!(d, "");
    }
}
