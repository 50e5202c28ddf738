// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * Code page table store.
 *
 * The tables live in a single little-endian blob:
 *
 * ```text
 * global header   44 bytes   name[16 x u16] version[4 x u16] count:i16 reserved:i16
 * index record    40 bytes   name[16 x u16] code_page:u16 byte_count:i16 offset:u32
 *   ... `count` records ...
 * payload header  48 bytes   name[16 x u16] version[4 x u16] code_page:u16 byte_count:i16
 *                            unicode_replacement:u16 byte_replacement:u16 (ignored)
 * payload data               up to the next record's offset (or the end of the blob)
 * ```
 *
 * The whole blob is kept in memory, so looking up a payload is a slice operation
 * and never touches a shared stream position.
 */

use std::borrow::Cow;
use std::fmt;
use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};

pub const GLOBAL_HEADER_SIZE: usize = 44;
pub const INDEX_RECORD_SIZE: usize = 40;
pub const PAYLOAD_HEADER_SIZE: usize = 48;

const NAME_UNITS: usize = 16;

#[cfg(feature = "embedded-tables")]
static EMBEDDED_BLOB: &[u8] = include_bytes!("../data/codepages.nlp");

#[cfg(feature = "embedded-tables")]
static EMBEDDED: once_cell::sync::OnceCell<TableStore> = once_cell::sync::OnceCell::new();

/// One entry of the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePageRecord {
    pub name: String,
    pub code_page: u16,
    /// 1 for single-byte tables, 2 for double-byte tables.
    pub byte_width: u16,
    /// Offset of the payload header from the start of the blob.
    pub offset: u32,
    /// Length of the payload data following the payload header.
    pub length: u32,
}

/// The header in front of each payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadHeader {
    pub name: String,
    pub version: [u16; 4],
    pub code_page: u16,
    pub byte_width: u16,
    pub unicode_replacement: u16,
}

/// A payload header with its mapping data.
pub struct Payload<'a> {
    pub header: PayloadHeader,
    pub data: &'a [u8],
}

/// Parsed table blob.
pub struct TableStore {
    blob: Cow<'static, [u8]>,
    name: String,
    version: [u16; 4],
    records: Vec<CodePageRecord>,
}

impl fmt::Debug for TableStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TableStore")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("records", &self.records.len())
            .finish()
    }
}

fn read_name<R: Read>(r: &mut R) -> std::io::Result<String> {
    let mut units = [0u16; NAME_UNITS];
    for unit in units.iter_mut() {
        *unit = r.read_u16::<LittleEndian>()?;
    }
    let len = units.iter().position(|&u| u == 0).unwrap_or(NAME_UNITS);
    Ok(String::from_utf16_lossy(&units[..len]))
}

fn read_version<R: Read>(r: &mut R) -> std::io::Result<[u16; 4]> {
    let mut version = [0u16; 4];
    for word in version.iter_mut() {
        *word = r.read_u16::<LittleEndian>()?;
    }
    Ok(version)
}

impl TableStore {
    /// The tables compiled into the crate.
    #[cfg(feature = "embedded-tables")]
    pub fn embedded() -> Result<&'static TableStore> {
        EMBEDDED.get_or_try_init(|| TableStore::parse(Cow::Borrowed(EMBEDDED_BLOB)))
    }

    /// Parses an owned blob.
    pub fn from_bytes(blob: Vec<u8>) -> Result<TableStore> {
        TableStore::parse(Cow::Owned(blob))
    }

    /// Parses a blob with static lifetime without copying it.
    pub fn from_static(blob: &'static [u8]) -> Result<TableStore> {
        TableStore::parse(Cow::Borrowed(blob))
    }

    /// Reads a whole blob from `reader` and parses it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<TableStore> {
        let mut blob = Vec::new();
        reader.read_to_end(&mut blob)?;
        TableStore::from_bytes(blob)
    }

    fn parse(blob: Cow<'static, [u8]>) -> Result<TableStore> {
        if blob.len() < GLOBAL_HEADER_SIZE {
            return Err(Error::malformed(0, "global header is truncated"));
        }
        let mut cur = Cursor::new(&blob[..]);
        let name = read_name(&mut cur)?;
        let version = read_version(&mut cur)?;
        let count = cur.read_i16::<LittleEndian>()?;
        let _reserved = cur.read_i16::<LittleEndian>()?;
        if count < 0 {
            return Err(Error::malformed(0, format!("negative table count {}", count)));
        }
        let count = count as usize;
        let index_end = GLOBAL_HEADER_SIZE + count * INDEX_RECORD_SIZE;
        if blob.len() < index_end {
            return Err(Error::malformed(0, "index is truncated"));
        }

        let mut raw = Vec::with_capacity(count);
        for _ in 0..count {
            let name = read_name(&mut cur)?;
            let code_page = cur.read_u16::<LittleEndian>()?;
            let byte_width = cur.read_i16::<LittleEndian>()?;
            let offset = cur.read_u32::<LittleEndian>()?;
            if byte_width != 1 && byte_width != 2 {
                return Err(Error::malformed(code_page, format!("byte width {}", byte_width)));
            }
            raw.push((name, code_page, byte_width as u16, offset));
        }

        // payloads are laid out in index order; each runs up to the next one
        let mut records = Vec::with_capacity(count);
        for (i, (name, code_page, byte_width, offset)) in raw.iter().enumerate() {
            let start = *offset as usize;
            let end = match raw.get(i + 1) {
                Some(next) => next.3 as usize,
                None => blob.len(),
            };
            if start < index_end || end > blob.len() || end < start + PAYLOAD_HEADER_SIZE {
                return Err(Error::malformed(*code_page, format!(
                    "payload range {}..{} is out of bounds", start, end)));
            }
            records.push(CodePageRecord {
                name: name.clone(),
                code_page: *code_page,
                byte_width: *byte_width,
                offset: *offset,
                length: (end - start - PAYLOAD_HEADER_SIZE) as u32,
            });
        }

        debug!("loaded table store {:?} version {:?} with {} code pages", name, version, count);
        Ok(TableStore { blob, name, version, records })
    }

    /// The table set name from the global header.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> [u16; 4] {
        self.version
    }

    /// All records in index order.
    pub fn records(&self) -> &[CodePageRecord] {
        &self.records
    }

    /// Finds the record of `code_page`.
    pub fn locate(&self, code_page: u16) -> Option<&CodePageRecord> {
        self.records.iter().find(|r| r.code_page == code_page)
    }

    /// Reads the payload header and data of `record`.
    pub fn read_payload(&self, record: &CodePageRecord) -> Result<Payload<'_>> {
        let start = record.offset as usize;
        let data_start = start + PAYLOAD_HEADER_SIZE;
        let data_end = data_start + record.length as usize;
        if data_end > self.blob.len() {
            return Err(Error::malformed(record.code_page, "payload is truncated"));
        }

        let mut cur = Cursor::new(&self.blob[start..data_start]);
        let header = PayloadHeader {
            name: read_name(&mut cur)?,
            version: read_version(&mut cur)?,
            code_page: cur.read_u16::<LittleEndian>()?,
            byte_width: cur.read_i16::<LittleEndian>()? as u16,
            unicode_replacement: cur.read_u16::<LittleEndian>()?,
        };
        // byte replacement; `EncoderTrap::Replace` encodes `?` instead
        cur.read_u16::<LittleEndian>()?;
        if header.code_page != record.code_page || header.byte_width != record.byte_width {
            return Err(Error::malformed(record.code_page, format!(
                "payload header says code page {} width {}", header.code_page, header.byte_width)));
        }
        Ok(Payload { header, data: &self.blob[data_start..data_end] })
    }
}

/// Sequential little-endian reader over payload data, failing with `MalformedTable`.
pub struct WordReader<'a> {
    cur: Cursor<&'a [u8]>,
    code_page: u16,
}

impl<'a> WordReader<'a> {
    pub fn new(data: &'a [u8], code_page: u16) -> WordReader<'a> {
        WordReader { cur: Cursor::new(data), code_page }
    }

    pub fn u8(&mut self) -> Result<u8> {
        let code_page = self.code_page;
        self.cur.read_u8().map_err(|_| Error::malformed(code_page, "unexpected end of payload"))
    }

    pub fn u16(&mut self) -> Result<u16> {
        let code_page = self.code_page;
        self.cur
            .read_u16::<LittleEndian>()
            .map_err(|_| Error::malformed(code_page, "unexpected end of payload"))
    }

    /// The unread part of the payload.
    pub fn rest(&self) -> &'a [u8] {
        let data = *self.cur.get_ref();
        let pos = (self.cur.position() as usize).min(data.len());
        &data[pos..]
    }

    pub fn code_page(&self) -> u16 {
        self.code_page
    }
}
