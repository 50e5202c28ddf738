// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;
use std::str;
use std::sync::Arc;

use codepages::{DecoderTrap, Decoder, Encoder, EncoderTrap, Encoding, Registry};
use getopts::Options;

const CHUNK: usize = 8192;

fn lookup(registry: &Registry, name: &str) -> Arc<dyn Encoding> {
    let found = match name.parse::<u32>() {
        Ok(code_page) => registry.try_get_encoding(code_page),
        Err(_) => registry.try_get_encoding_by_name(name),
    };
    match found {
        Ok(enc) => enc as Arc<dyn Encoding>,
        Err(e) => fail(&format!("invalid encoding {}: {}", name, e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("recode: {}", message);
    process::exit(1);
}

/// Turns raw input bytes into text, either UTF-8 or through a code page decoder.
struct Source {
    decoder: Option<Decoder>,
    /// Bytes of an incomplete UTF-8 sequence.
    pending: Vec<u8>,
}

impl Source {
    fn feed(&mut self, bytes: &[u8], text: &mut String, last: bool) {
        if let Some(ref mut decoder) = self.decoder {
            if let Err(e) = decoder.decode_to_string(bytes, text, last) {
                fail(&format!("decoder error: {}", e));
            }
            return;
        }
        self.pending.extend_from_slice(bytes);
        let valid = match str::from_utf8(&self.pending) {
            Ok(s) => s.len(),
            Err(e) if e.error_len().is_none() && !last => e.valid_up_to(),
            Err(e) => fail(&format!("input is not UTF-8: {}", e)),
        };
        text.push_str(str::from_utf8(&self.pending[..valid]).unwrap_or(""));
        self.pending.drain(..valid);
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input code page (number or name, UTF-8 if omitted)", "NAME");
    opts.optopt("t", "to-code", "set output code page (number or name, UTF-8 if omitted)", "NAME");
    opts.optopt("e", "error-policy",
                "set error policy (one of strict, ignore, replace, ncr-escape, best-fit)", "POLICY");
    opts.optflag("c", "", "same as `--error-policy=ignore`");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("l", "list", "list the supported code pages");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => fail(&e.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage("Converts text between code pages using codepages."));
        return;
    }

    let registry = match Registry::global() {
        Ok(registry) => registry,
        Err(e) => fail(&e.to_string()),
    };
    if matches.opt_present("l") {
        for info in registry.encodings() {
            println!("{:>5}  {:<20} {}", info.code_page, info.name, info.display_name);
        }
        return;
    }

    let mut policy = matches.opt_str("e");
    if matches.opt_present("c") {
        policy = Some("ignore".to_owned());
    }
    let (intrap, outtrap) = match policy.as_deref() {
        Some("best-fit") | None => (DecoderTrap::BestFit, EncoderTrap::BestFit),
        Some("strict") => (DecoderTrap::Strict, EncoderTrap::Strict),
        Some("ignore") => (DecoderTrap::Ignore, EncoderTrap::Ignore),
        Some("replace") => (DecoderTrap::Replace, EncoderTrap::Replace),
        Some("ncr-escape") => (DecoderTrap::Replace, EncoderTrap::NcrEscape),
        Some(s) => fail(&format!("invalid error policy {}", s)),
    };

    let mut source = Source {
        decoder: matches.opt_str("f").map(|name| Decoder::new(lookup(registry, &name), intrap)),
        pending: Vec::new(),
    };
    let mut encoder = matches.opt_str("t").map(|name| Encoder::new(lookup(registry, &name), outtrap));

    let mut input: Box<dyn Read> = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => Box::new(io::stdin()),
        Some(f) => match File::open(f) {
            Ok(file) => Box::new(file),
            Err(e) => fail(&format!("cannot open {}: {}", f, e)),
        },
    };
    let mut output: Box<dyn Write> = match matches.opt_str("o").as_deref() {
        Some("-") | None => Box::new(io::stdout()),
        Some(f) => match File::create(f) {
            Ok(file) => Box::new(file),
            Err(e) => fail(&format!("cannot create {}: {}", f, e)),
        },
    };

    let mut buf = vec![0u8; CHUNK];
    let mut text = String::new();
    let mut encoded = Vec::new();
    loop {
        let n = match input.read(&mut buf) {
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => fail(&format!("read error: {}", e)),
        };
        let last = n == 0;

        text.clear();
        source.feed(&buf[..n], &mut text, last);
        let bytes = match encoder {
            Some(ref mut encoder) => {
                encoded.clear();
                if let Err(e) = encoder.encode_to_vec(&text, &mut encoded, last) {
                    fail(&format!("encoder error: {}", e));
                }
                &encoded[..]
            }
            None => text.as_bytes(),
        };
        if let Err(e) = output.write_all(bytes) {
            fail(&format!("write error: {}", e));
        }
        if last {
            break;
        }
    }
    if let Err(e) = output.flush() {
        fail(&format!("write error: {}", e));
    }
}
