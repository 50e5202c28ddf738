// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! Error types.

use std::io;
use thiserror::Error;

/// Errors reported by table loading, codec selection and trapped conversions.
#[derive(Debug, Error)]
pub enum Error {
    /// The code page is out of range or has no table.
    #[error("code page {0} is not supported")]
    UnsupportedCodePage(u32),

    /// The encoding name is not in the name table.
    #[error("encoding name {0:?} is not supported")]
    UnsupportedName(String),

    /// The table blob is truncated or inconsistent.
    #[error("malformed table for code page {code_page}: {reason}")]
    MalformedTable { code_page: u16, reason: String },

    /// A character has no representation and the trap refused to substitute it.
    #[error("character {ch:?} cannot be encoded in code page {code_page}")]
    Unmappable { code_page: u16, ch: char },

    /// A byte sequence is not valid and the trap refused to substitute it.
    #[error("invalid byte sequence {bytes:02x?} in code page {code_page}")]
    InvalidSequence { code_page: u16, bytes: Vec<u8> },

    /// Fallback substitutions kept producing unmappable input.
    #[error("recursive fallback in code page {code_page}")]
    RecursiveFallback { code_page: u16 },

    /// No table store was configured and none is embedded.
    #[error("no table store is available")]
    MissingTableStore,

    /// Reading a table blob failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn malformed(code_page: u16, reason: impl Into<String>) -> Error {
        Error::MalformedTable { code_page, reason: reason.into() }
    }
}

/// Result type alias for codepages operations.
pub type Result<T> = std::result::Result<T, Error>;
