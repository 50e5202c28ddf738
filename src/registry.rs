// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

/*!
 * Resolution of code page numbers and names to shared encodings.
 *
 * Encodings and the tables behind them are built on first request and cached for the
 * lifetime of the registry. Code pages that share a table (the ISO-2022 variants and
 * their double-byte base, or GB 18030 and its two-byte part) share one copy.
 */

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::OnceCell;

use crate::codec::doublebyte::DoubleByteTable;
use crate::codec::gb18030::Gb18030Table;
use crate::codec::iscii;
use crate::codec::iso2022::Iso2022Variant;
use crate::codec::singlebyte::SingleByteTable;
use crate::encoding::{CodePageEncoding, CodecKind};
use crate::error::{Error, Result};
use crate::label;
use crate::platform;
use crate::table::TableStore;

/// A shared encoding.
pub type EncodingRef = Arc<CodePageEncoding>;

/// Code page used when the platform default cannot be served.
pub const FALLBACK_CODE_PAGE: u16 = 1252;

/// Environment variable overriding the platform default code page.
pub const DEFAULT_CODE_PAGE_VAR: &str = "CODEPAGES_DEFAULT_CODEPAGE";

const GB18030: u16 = 54936;

static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// Description of a supported code page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingInfo {
    pub code_page: u16,
    pub name: &'static str,
    pub display_name: &'static str,
}

/// Settings of a `Registry`.
#[derive(Debug, Default)]
pub struct RegistryConfig {
    /// The code page served for code page 0, instead of the platform default.
    pub default_code_page: Option<u16>,
    /// The tables to serve. Without one the embedded tables are used.
    pub store: Option<TableStore>,
}

impl RegistryConfig {
    /// The default settings, with `CODEPAGES_DEFAULT_CODEPAGE` applied when it is set.
    pub fn from_env() -> RegistryConfig {
        let default_code_page = match env::var(DEFAULT_CODE_PAGE_VAR) {
            Ok(value) => match value.trim().parse::<u16>() {
                Ok(code_page) => Some(code_page),
                Err(_) => {
                    warn!("ignoring {}={:?}: not a code page number", DEFAULT_CODE_PAGE_VAR, value);
                    None
                }
            },
            Err(_) => None,
        };
        RegistryConfig { default_code_page, store: None }
    }

    pub fn with_default_code_page(mut self, code_page: u16) -> RegistryConfig {
        self.default_code_page = Some(code_page);
        self
    }

    pub fn with_store(mut self, store: TableStore) -> RegistryConfig {
        self.store = Some(store);
        self
    }
}

enum Store {
    #[cfg_attr(not(feature = "embedded-tables"), allow(dead_code))]
    Embedded(&'static TableStore),
    Custom(TableStore),
}

impl Store {
    #[cfg(feature = "embedded-tables")]
    fn embedded() -> Result<Store> {
        TableStore::embedded().map(Store::Embedded)
    }

    #[cfg(not(feature = "embedded-tables"))]
    fn embedded() -> Result<Store> {
        Err(Error::MissingTableStore)
    }

    fn get(&self) -> &TableStore {
        match *self {
            Store::Embedded(store) => store,
            Store::Custom(ref store) => store,
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the cached value for `code_page`, building it under the write lock if needed.
fn cached<T>(cache: &RwLock<HashMap<u16, Arc<T>>>, code_page: u16,
             build: impl FnOnce() -> Result<T>) -> Result<Arc<T>> {
    if let Some(value) = read(cache).get(&code_page) {
        return Ok(value.clone());
    }
    let mut cache = write(cache);
    if let Some(value) = cache.get(&code_page) {
        return Ok(value.clone());
    }
    let value = Arc::new(build()?);
    cache.insert(code_page, value.clone());
    Ok(value)
}

/// Resolves code pages to encodings over one table store.
pub struct Registry {
    store: Store,
    default_code_page: Option<u16>,
    encodings: RwLock<HashMap<u16, EncodingRef>>,
    single_byte: RwLock<HashMap<u16, Arc<SingleByteTable>>>,
    double_byte: RwLock<HashMap<u16, Arc<DoubleByteTable>>>,
    gb18030: OnceCell<Arc<Gb18030Table>>,
}

impl Registry {
    /// The process-wide registry, configured from the environment on first use.
    pub fn global() -> Result<&'static Registry> {
        GLOBAL.get_or_try_init(|| Registry::with_config(RegistryConfig::from_env()))
    }

    /// A registry over the embedded tables.
    pub fn new() -> Result<Registry> {
        Registry::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Result<Registry> {
        let store = match config.store {
            Some(store) => Store::Custom(store),
            None => Store::embedded()?,
        };
        debug!("registry over {:?}", store.get());
        Ok(Registry {
            store,
            default_code_page: config.default_code_page,
            encodings: RwLock::new(HashMap::new()),
            single_byte: RwLock::new(HashMap::new()),
            double_byte: RwLock::new(HashMap::new()),
            gb18030: OnceCell::new(),
        })
    }

    pub fn store(&self) -> &TableStore {
        self.store.get()
    }

    /// Returns the encoding of `code_page`, or `None` when it is not supported.
    /// Code page 0 stands for the default code page.
    pub fn get_encoding(&self, code_page: u32) -> Option<EncodingRef> {
        match self.try_get_encoding(code_page) {
            Ok(encoding) => Some(encoding),
            Err(err) => {
                debug!("no encoding for code page {}: {}", code_page, err);
                None
            }
        }
    }

    /// Like `get_encoding`, with the reason of a failure.
    pub fn try_get_encoding(&self, code_page: u32) -> Result<EncodingRef> {
        let code_page = match code_page {
            0 => self.default_code_page(),
            1..=0xffff => code_page as u16,
            _ => return Err(Error::UnsupportedCodePage(code_page)),
        };
        cached(&self.encodings, code_page, || self.build(code_page))
    }

    /// Returns the encoding with given name or alias, or `None`.
    pub fn get_encoding_by_name(&self, name: &str) -> Option<EncodingRef> {
        self.try_get_encoding_by_name(name).ok()
    }

    /// Like `get_encoding_by_name`, with the reason of a failure.
    pub fn try_get_encoding_by_name(&self, name: &str) -> Result<EncodingRef> {
        let code_page = label::code_page_from_name(name)
            .ok_or_else(|| Error::UnsupportedName(name.to_owned()))?;
        self.try_get_encoding(code_page as u32)
    }

    /// True when `code_page` can be served from this registry's tables.
    pub fn supports(&self, code_page: u16) -> bool {
        let store = self.store.get();
        if let Some(variant) = Iso2022Variant::from_code_page(code_page) {
            store.locate(variant.base_code_page()).map_or(false, |r| r.byte_width == 2)
        } else if iscii::script_of_code_page(code_page).is_some() {
            true
        } else {
            store.locate(code_page).is_some()
        }
    }

    /// Every supported code page with a name, in ascending order.
    pub fn encodings(&self) -> Vec<EncodingInfo> {
        label::named_code_pages()
            .filter(|&code_page| self.supports(code_page))
            .filter_map(|code_page| {
                Some(EncodingInfo {
                    code_page,
                    name: label::web_name(code_page)?,
                    display_name: label::display_name(code_page)?,
                })
            })
            .collect()
    }

    /// The code page served for code page 0.
    pub fn default_code_page(&self) -> u16 {
        let code_page = self.default_code_page.unwrap_or_else(platform::default_code_page);
        if self.supports(code_page) {
            code_page
        } else {
            warn!("default code page {} is not supported, using {}",
                  code_page, FALLBACK_CODE_PAGE);
            FALLBACK_CODE_PAGE
        }
    }

    fn single_byte(&self, code_page: u16) -> Result<Arc<SingleByteTable>> {
        cached(&self.single_byte, code_page, || {
            SingleByteTable::from_store(self.store.get(), code_page)
        })
    }

    fn double_byte(&self, code_page: u16) -> Result<Arc<DoubleByteTable>> {
        cached(&self.double_byte, code_page, || {
            DoubleByteTable::from_store(self.store.get(), code_page)
        })
    }

    fn gb18030(&self) -> Result<Arc<Gb18030Table>> {
        self.gb18030
            .get_or_try_init(|| Ok(Arc::new(Gb18030Table::new(self.double_byte(GB18030)?))))
            .map(Arc::clone)
    }

    fn build(&self, code_page: u16) -> Result<CodePageEncoding> {
        let kind = if let Some(variant) = Iso2022Variant::from_code_page(code_page) {
            CodecKind::Iso2022(variant, self.double_byte(variant.base_code_page())?)
        } else if let Some(script) = iscii::script_of_code_page(code_page) {
            CodecKind::Iscii(script)
        } else if code_page == GB18030 {
            CodecKind::Gb18030(self.gb18030()?)
        } else {
            match self.store.get().locate(code_page) {
                Some(record) if record.byte_width == 1 => {
                    CodecKind::SingleByte(self.single_byte(code_page)?)
                }
                Some(_) => CodecKind::DoubleByte(self.double_byte(code_page)?),
                None => return Err(Error::UnsupportedCodePage(code_page as u32)),
            }
        };

        let name = match label::web_name(code_page) {
            Some(name) => name.to_owned(),
            None => match self.store.get().locate(code_page) {
                Some(record) if !record.name.is_empty() => record.name.clone(),
                _ => format!("cp{}", code_page),
            },
        };
        debug!("built encoding {} for code page {} ({:?})", name, code_page, kind);
        Ok(CodePageEncoding::new(code_page, name, kind))
    }
}
