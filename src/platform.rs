// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! The default code page of the running system.

#[cfg(not(windows))]
use std::env;

use crate::label;

/// The ANSI code page of the system.
#[cfg(windows)]
pub fn default_code_page() -> u16 {
    let code_page = unsafe { windows::Win32::Globalization::GetACP() };
    debug!("system ANSI code page is {}", code_page);
    code_page_from_acp(code_page)
}

/// Narrows a code page reported by the system, which is never above 65535 in practice.
#[cfg_attr(not(windows), allow(dead_code))]
fn code_page_from_acp(code_page: u32) -> u16 {
    u16::try_from(code_page).unwrap_or(1252)
}

/// The code page implied by the locale environment.
#[cfg(not(windows))]
pub fn default_code_page() -> u16 {
    for var in &["LC_ALL", "LC_CTYPE", "LANG"] {
        match env::var(var) {
            Ok(ref locale) if !locale.is_empty() => {
                let code_page = code_page_from_locale(locale);
                debug!("{}={:?} selects code page {}", var, locale, code_page);
                return code_page;
            }
            _ => {}
        }
    }
    1252
}

/// Maps a POSIX locale name like `ja_JP.eucJP` or `ru_RU@euro` to a code page.
///
/// An explicit codeset wins when it names a supported code page; otherwise the
/// language decides the ANSI code page Windows would use for it.
pub fn code_page_from_locale(locale: &str) -> u16 {
    let locale = match locale.find('@') {
        Some(i) => &locale[..i],
        None => locale,
    };
    let (tag, codeset) = match locale.find('.') {
        Some(i) => (&locale[..i], Some(&locale[i + 1..])),
        None => (locale, None),
    };
    if let Some(code_page) = codeset.and_then(label::code_page_from_name) {
        return code_page;
    }

    let language = tag.split(|c| c == '_' || c == '-').next().unwrap_or("");
    match &*language.to_ascii_lowercase() {
        "ja" => 932,
        "ko" => 949,
        "zh" => {
            let region = tag.get(3..).unwrap_or("").to_ascii_uppercase();
            match &*region {
                "TW" | "HK" | "MO" => 950,
                _ => 936,
            }
        }
        "ru" | "uk" | "be" | "bg" | "sr" | "mk" => 1251,
        "pl" | "cs" | "sk" | "hu" | "sl" | "hr" | "ro" | "sq" => 1250,
        "el" => 1253,
        "tr" => 1254,
        "he" | "iw" => 1255,
        "ar" | "fa" | "ur" => 1256,
        "lt" | "lv" | "et" => 1257,
        "vi" => 1258,
        "th" => 874,
        _ => 1252,
    }
}
