// This is a part of codepages.
// Copyright (c) 2024, The codepages developers.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving a code page number from a string label, and names back.
//!
//! The tables are generated by `tools/gen_labels.py`.

/// Names of one code page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePageNames {
    pub code_page: u16,
    /// The preferred interchange name, such as `windows-1252`.
    pub name: &'static str,
    /// A human-readable name, such as `Western European (Windows)`.
    pub display_name: &'static str,
}

static NAMES: &[CodePageNames] = &[
    CodePageNames { code_page: 37, name: "IBM037", display_name: "IBM EBCDIC (US-Canada)" },
    CodePageNames { code_page: 437, name: "IBM437", display_name: "OEM United States" },
    CodePageNames { code_page: 500, name: "IBM500", display_name: "IBM EBCDIC (International)" },
    CodePageNames { code_page: 737, name: "ibm737", display_name: "Greek (DOS)" },
    CodePageNames { code_page: 775, name: "ibm775", display_name: "Baltic (DOS)" },
    CodePageNames { code_page: 850, name: "ibm850", display_name: "Western European (DOS)" },
    CodePageNames { code_page: 852, name: "ibm852", display_name: "Central European (DOS)" },
    CodePageNames { code_page: 855, name: "IBM855", display_name: "OEM Cyrillic" },
    CodePageNames { code_page: 857, name: "ibm857", display_name: "Turkish (DOS)" },
    CodePageNames { code_page: 858, name: "IBM00858", display_name: "OEM Multilingual Latin I" },
    CodePageNames { code_page: 860, name: "IBM860", display_name: "Portuguese (DOS)" },
    CodePageNames { code_page: 861, name: "ibm861", display_name: "Icelandic (DOS)" },
    CodePageNames { code_page: 862, name: "DOS-862", display_name: "Hebrew (DOS)" },
    CodePageNames { code_page: 863, name: "IBM863", display_name: "French Canadian (DOS)" },
    CodePageNames { code_page: 864, name: "IBM864", display_name: "Arabic (864)" },
    CodePageNames { code_page: 865, name: "IBM865", display_name: "Nordic (DOS)" },
    CodePageNames { code_page: 866, name: "cp866", display_name: "Cyrillic (DOS)" },
    CodePageNames { code_page: 869, name: "ibm869", display_name: "Greek, Modern (DOS)" },
    CodePageNames { code_page: 874, name: "windows-874", display_name: "Thai (Windows)" },
    CodePageNames { code_page: 875, name: "cp875", display_name: "IBM EBCDIC (Greek Modern)" },
    CodePageNames { code_page: 932, name: "shift_jis", display_name: "Japanese (Shift-JIS)" },
    CodePageNames { code_page: 936, name: "gb2312", display_name: "Chinese Simplified (GB2312)" },
    CodePageNames { code_page: 949, name: "ks_c_5601-1987", display_name: "Korean" },
    CodePageNames { code_page: 950, name: "big5", display_name: "Chinese Traditional (Big5)" },
    CodePageNames { code_page: 1026, name: "IBM1026", display_name: "IBM EBCDIC (Turkish Latin-5)" },
    CodePageNames { code_page: 1140, name: "IBM01140", display_name: "IBM EBCDIC (US-Canada-Euro)" },
    CodePageNames { code_page: 1250, name: "windows-1250", display_name: "Central European (Windows)" },
    CodePageNames { code_page: 1251, name: "windows-1251", display_name: "Cyrillic (Windows)" },
    CodePageNames { code_page: 1252, name: "windows-1252", display_name: "Western European (Windows)" },
    CodePageNames { code_page: 1253, name: "windows-1253", display_name: "Greek (Windows)" },
    CodePageNames { code_page: 1254, name: "windows-1254", display_name: "Turkish (Windows)" },
    CodePageNames { code_page: 1255, name: "windows-1255", display_name: "Hebrew (Windows)" },
    CodePageNames { code_page: 1256, name: "windows-1256", display_name: "Arabic (Windows)" },
    CodePageNames { code_page: 1257, name: "windows-1257", display_name: "Baltic (Windows)" },
    CodePageNames { code_page: 1258, name: "windows-1258", display_name: "Vietnamese (Windows)" },
    CodePageNames { code_page: 1361, name: "Johab", display_name: "Korean (Johab)" },
    CodePageNames { code_page: 10000, name: "macintosh", display_name: "Western European (Mac)" },
    CodePageNames { code_page: 10006, name: "x-mac-greek", display_name: "Greek (Mac)" },
    CodePageNames { code_page: 10007, name: "x-mac-cyrillic", display_name: "Cyrillic (Mac)" },
    CodePageNames { code_page: 10029, name: "x-mac-ce", display_name: "Central European (Mac)" },
    CodePageNames { code_page: 10079, name: "x-mac-icelandic", display_name: "Icelandic (Mac)" },
    CodePageNames { code_page: 10081, name: "x-mac-turkish", display_name: "Turkish (Mac)" },
    CodePageNames { code_page: 20866, name: "koi8-r", display_name: "Cyrillic (KOI8-R)" },
    CodePageNames { code_page: 21866, name: "koi8-u", display_name: "Cyrillic (KOI8-U)" },
    CodePageNames { code_page: 28591, name: "iso-8859-1", display_name: "Western European (ISO)" },
    CodePageNames { code_page: 28592, name: "iso-8859-2", display_name: "Central European (ISO)" },
    CodePageNames { code_page: 28593, name: "iso-8859-3", display_name: "Latin 3 (ISO)" },
    CodePageNames { code_page: 28594, name: "iso-8859-4", display_name: "Baltic (ISO)" },
    CodePageNames { code_page: 28595, name: "iso-8859-5", display_name: "Cyrillic (ISO)" },
    CodePageNames { code_page: 28596, name: "iso-8859-6", display_name: "Arabic (ISO)" },
    CodePageNames { code_page: 28597, name: "iso-8859-7", display_name: "Greek (ISO)" },
    CodePageNames { code_page: 28598, name: "iso-8859-8", display_name: "Hebrew (ISO-Visual)" },
    CodePageNames { code_page: 28599, name: "iso-8859-9", display_name: "Turkish (ISO)" },
    CodePageNames { code_page: 28603, name: "iso-8859-13", display_name: "Estonian (ISO)" },
    CodePageNames { code_page: 28605, name: "iso-8859-15", display_name: "Latin 9 (ISO)" },
    CodePageNames { code_page: 50220, name: "iso-2022-jp", display_name: "Japanese (JIS)" },
    CodePageNames { code_page: 50221, name: "csISO2022JP", display_name: "Japanese (JIS-Allow 1 byte Kana)" },
    CodePageNames { code_page: 50222, name: "iso-2022-jp", display_name: "Japanese (JIS-Allow 1 byte Kana - SO/SI)" },
    CodePageNames { code_page: 50225, name: "iso-2022-kr", display_name: "Korean (ISO)" },
    CodePageNames { code_page: 52936, name: "hz-gb-2312", display_name: "Chinese Simplified (HZ)" },
    CodePageNames { code_page: 54936, name: "GB18030", display_name: "Chinese Simplified (GB18030)" },
    CodePageNames { code_page: 57002, name: "x-iscii-de", display_name: "ISCII Devanagari" },
    CodePageNames { code_page: 57003, name: "x-iscii-be", display_name: "ISCII Bengali" },
    CodePageNames { code_page: 57004, name: "x-iscii-ta", display_name: "ISCII Tamil" },
    CodePageNames { code_page: 57005, name: "x-iscii-te", display_name: "ISCII Telugu" },
    CodePageNames { code_page: 57006, name: "x-iscii-as", display_name: "ISCII Assamese" },
    CodePageNames { code_page: 57007, name: "x-iscii-or", display_name: "ISCII Oriya" },
    CodePageNames { code_page: 57008, name: "x-iscii-ka", display_name: "ISCII Kannada" },
    CodePageNames { code_page: 57009, name: "x-iscii-ma", display_name: "ISCII Malayalam" },
    CodePageNames { code_page: 57010, name: "x-iscii-gu", display_name: "ISCII Gujarati" },
    CodePageNames { code_page: 57011, name: "x-iscii-pa", display_name: "ISCII Punjabi" },
];

static LABELS: &[(&str, u16)] = &[
    ("866", 866),
    ("ansi_x3.4-1968", 1252),
    ("arabic", 28596),
    ("ascii", 1252),
    ("asmo-708", 28596),
    ("big5", 950),
    ("big5-hkscs", 950),
    ("chinese", 936),
    ("cn-big5", 950),
    ("cp10000", 10000),
    ("cp10006", 10006),
    ("cp10007", 10007),
    ("cp10029", 10029),
    ("cp10079", 10079),
    ("cp10081", 10081),
    ("cp1026", 1026),
    ("cp1140", 1140),
    ("cp1250", 1250),
    ("cp1251", 1251),
    ("cp1252", 1252),
    ("cp1253", 1253),
    ("cp1254", 1254),
    ("cp1255", 1255),
    ("cp1256", 1256),
    ("cp1257", 1257),
    ("cp1258", 1258),
    ("cp1361", 1361),
    ("cp20866", 20866),
    ("cp21866", 21866),
    ("cp28591", 28591),
    ("cp28592", 28592),
    ("cp28593", 28593),
    ("cp28594", 28594),
    ("cp28595", 28595),
    ("cp28596", 28596),
    ("cp28597", 28597),
    ("cp28598", 28598),
    ("cp28599", 28599),
    ("cp28603", 28603),
    ("cp28605", 28605),
    ("cp37", 37),
    ("cp437", 437),
    ("cp500", 500),
    ("cp50220", 50220),
    ("cp50221", 50221),
    ("cp50222", 50222),
    ("cp50225", 50225),
    ("cp52936", 52936),
    ("cp54936", 54936),
    ("cp57002", 57002),
    ("cp57003", 57003),
    ("cp57004", 57004),
    ("cp57005", 57005),
    ("cp57006", 57006),
    ("cp57007", 57007),
    ("cp57008", 57008),
    ("cp57009", 57009),
    ("cp57010", 57010),
    ("cp57011", 57011),
    ("cp737", 737),
    ("cp775", 775),
    ("cp819", 28591),
    ("cp850", 850),
    ("cp852", 852),
    ("cp855", 855),
    ("cp857", 857),
    ("cp858", 858),
    ("cp860", 860),
    ("cp861", 861),
    ("cp862", 862),
    ("cp863", 863),
    ("cp864", 864),
    ("cp865", 865),
    ("cp866", 866),
    ("cp869", 869),
    ("cp874", 874),
    ("cp875", 875),
    ("cp932", 932),
    ("cp936", 936),
    ("cp949", 949),
    ("cp950", 950),
    ("csbig5", 950),
    ("cseuckr", 949),
    ("csgb2312", 936),
    ("csibm866", 866),
    ("csiso2022jp", 50221),
    ("csiso2022kr", 50225),
    ("csiso58gb231280", 936),
    ("csiso88596e", 28596),
    ("csiso88596i", 28596),
    ("csiso88598e", 28598),
    ("csiso88598i", 28598),
    ("csisolatin1", 28591),
    ("csisolatin2", 28592),
    ("csisolatin3", 28593),
    ("csisolatin4", 28594),
    ("csisolatin5", 28599),
    ("csisolatin9", 28605),
    ("csisolatinarabic", 28596),
    ("csisolatincyrillic", 28595),
    ("csisolatingreek", 28597),
    ("csisolatinhebrew", 28598),
    ("cskoi8r", 20866),
    ("csksc56011987", 949),
    ("csmacintosh", 10000),
    ("csshiftjis", 932),
    ("cyrillic", 28595),
    ("dos-862", 862),
    ("dos-874", 874),
    ("ecma-114", 28596),
    ("ecma-118", 28597),
    ("elot_928", 28597),
    ("euc-kr", 949),
    ("gb18030", 54936),
    ("gb2312", 936),
    ("gb_2312", 936),
    ("gb_2312-80", 936),
    ("gbk", 936),
    ("greek", 28597),
    ("greek8", 28597),
    ("hebrew", 28598),
    ("hz-gb-2312", 52936),
    ("ibm00858", 858),
    ("ibm01140", 1140),
    ("ibm037", 37),
    ("ibm1026", 1026),
    ("ibm1140", 1140),
    ("ibm37", 37),
    ("ibm437", 437),
    ("ibm500", 500),
    ("ibm737", 737),
    ("ibm775", 775),
    ("ibm819", 28591),
    ("ibm850", 850),
    ("ibm852", 852),
    ("ibm855", 855),
    ("ibm857", 857),
    ("ibm858", 858),
    ("ibm860", 860),
    ("ibm861", 861),
    ("ibm862", 862),
    ("ibm863", 863),
    ("ibm864", 864),
    ("ibm865", 865),
    ("ibm866", 866),
    ("ibm869", 869),
    ("iso-2022-jp", 50220),
    ("iso-2022-kr", 50225),
    ("iso-8859-1", 28591),
    ("iso-8859-11", 874),
    ("iso-8859-13", 28603),
    ("iso-8859-15", 28605),
    ("iso-8859-2", 28592),
    ("iso-8859-3", 28593),
    ("iso-8859-4", 28594),
    ("iso-8859-5", 28595),
    ("iso-8859-6", 28596),
    ("iso-8859-6-e", 28596),
    ("iso-8859-6-i", 28596),
    ("iso-8859-7", 28597),
    ("iso-8859-8", 28598),
    ("iso-8859-8-e", 28598),
    ("iso-8859-8-i", 28598),
    ("iso-8859-9", 28599),
    ("iso-ir-100", 28591),
    ("iso-ir-101", 28592),
    ("iso-ir-109", 28593),
    ("iso-ir-110", 28594),
    ("iso-ir-126", 28597),
    ("iso-ir-127", 28596),
    ("iso-ir-138", 28598),
    ("iso-ir-144", 28595),
    ("iso-ir-148", 28599),
    ("iso-ir-149", 949),
    ("iso-ir-58", 936),
    ("iso8859-1", 28591),
    ("iso8859-11", 874),
    ("iso8859-13", 28603),
    ("iso8859-15", 28605),
    ("iso8859-2", 28592),
    ("iso8859-3", 28593),
    ("iso8859-4", 28594),
    ("iso8859-5", 28595),
    ("iso8859-6", 28596),
    ("iso8859-7", 28597),
    ("iso8859-8", 28598),
    ("iso8859-9", 28599),
    ("iso88591", 28591),
    ("iso885911", 874),
    ("iso885913", 28603),
    ("iso885915", 28605),
    ("iso88592", 28592),
    ("iso88593", 28593),
    ("iso88594", 28594),
    ("iso88595", 28595),
    ("iso88596", 28596),
    ("iso88597", 28597),
    ("iso88598", 28598),
    ("iso88599", 28599),
    ("iso_8859-1", 28591),
    ("iso_8859-15", 28605),
    ("iso_8859-1:1987", 28591),
    ("iso_8859-2", 28592),
    ("iso_8859-2:1987", 28592),
    ("iso_8859-3", 28593),
    ("iso_8859-3:1988", 28593),
    ("iso_8859-4", 28594),
    ("iso_8859-4:1988", 28594),
    ("iso_8859-5", 28595),
    ("iso_8859-5:1988", 28595),
    ("iso_8859-6", 28596),
    ("iso_8859-6:1987", 28596),
    ("iso_8859-7", 28597),
    ("iso_8859-7:1987", 28597),
    ("iso_8859-8", 28598),
    ("iso_8859-8:1988", 28598),
    ("iso_8859-9", 28599),
    ("iso_8859-9:1989", 28599),
    ("johab", 1361),
    ("koi", 20866),
    ("koi8", 20866),
    ("koi8-r", 20866),
    ("koi8-u", 21866),
    ("koi8_r", 20866),
    ("korean", 949),
    ("ks_c_5601-1987", 949),
    ("ks_c_5601-1989", 949),
    ("ksc5601", 949),
    ("ksc_5601", 949),
    ("l1", 28591),
    ("l2", 28592),
    ("l3", 28593),
    ("l4", 28594),
    ("l5", 28599),
    ("l9", 28605),
    ("latin1", 28591),
    ("latin2", 28592),
    ("latin3", 28593),
    ("latin4", 28594),
    ("latin5", 28599),
    ("logical", 28598),
    ("mac", 10000),
    ("macintosh", 10000),
    ("ms_kanji", 932),
    ("shift-jis", 932),
    ("shift_jis", 932),
    ("sjis", 932),
    ("sun_eu_greek", 28597),
    ("tis-620", 874),
    ("us-ascii", 1252),
    ("visual", 28598),
    ("windows-1250", 1250),
    ("windows-1251", 1251),
    ("windows-1252", 1252),
    ("windows-1253", 1253),
    ("windows-1254", 1254),
    ("windows-1255", 1255),
    ("windows-1256", 1256),
    ("windows-1257", 1257),
    ("windows-1258", 1258),
    ("windows-31j", 932),
    ("windows-874", 874),
    ("windows-949", 949),
    ("x-cp1250", 1250),
    ("x-cp1251", 1251),
    ("x-cp1252", 1252),
    ("x-cp1253", 1253),
    ("x-cp1254", 1254),
    ("x-cp1255", 1255),
    ("x-cp1256", 1256),
    ("x-cp1257", 1257),
    ("x-cp1258", 1258),
    ("x-gbk", 936),
    ("x-iscii-as", 57006),
    ("x-iscii-be", 57003),
    ("x-iscii-de", 57002),
    ("x-iscii-gu", 57010),
    ("x-iscii-ka", 57008),
    ("x-iscii-ma", 57009),
    ("x-iscii-or", 57007),
    ("x-iscii-pa", 57011),
    ("x-iscii-ta", 57004),
    ("x-iscii-te", 57005),
    ("x-mac-ce", 10029),
    ("x-mac-cyrillic", 10007),
    ("x-mac-greek", 10006),
    ("x-mac-icelandic", 10079),
    ("x-mac-roman", 10000),
    ("x-mac-turkish", 10081),
    ("x-mac-ukrainian", 10007),
    ("x-sjis", 932),
    ("x-x-big5", 950),
];

fn names(code_page: u16) -> Option<&'static CodePageNames> {
    NAMES
        .binary_search_by_key(&code_page, |n| n.code_page)
        .ok()
        .map(|i| &NAMES[i])
}

/// Returns the preferred name of given code page, if it has one.
pub fn web_name(code_page: u16) -> Option<&'static str> {
    names(code_page).map(|n| n.name)
}

/// Returns the human-readable name of given code page, if it has one.
pub fn display_name(code_page: u16) -> Option<&'static str> {
    names(code_page).map(|n| n.display_name)
}

/// Returns a code page number from given label, if any.
///
/// Leading and trailing ASCII whitespace is ignored and the match is ASCII case-insensitive.
pub fn code_page_from_name(label: &str) -> Option<u16> {
    let label = label
        .trim_matches(|c: char| matches!(c, ' ' | '\n' | '\r' | '\t' | '\x0C'))
        .to_ascii_lowercase();
    LABELS
        .binary_search_by(|&(l, _)| l.cmp(&label[..]))
        .ok()
        .map(|i| LABELS[i].1)
}

/// Returns every label which resolves to given code page, in sorted order.
pub fn names_for_code_page(code_page: u16) -> Vec<&'static str> {
    LABELS.iter().filter(|&&(_, cp)| cp == code_page).map(|&(l, _)| l).collect()
}

/// Every code page with a name, in ascending order.
pub fn named_code_pages() -> impl Iterator<Item = u16> {
    NAMES.iter().map(|n| n.code_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(LABELS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(NAMES.windows(2).all(|w| w[0].code_page < w[1].code_page));
        assert!(LABELS.iter().all(|&(l, _)| l == l.to_ascii_lowercase()));
    }

    #[test]
    fn test_code_page_from_name() {
        assert_eq!(code_page_from_name("windows-1252"), Some(1252));
        assert_eq!(code_page_from_name("Windows-1252"), Some(1252));
        assert_eq!(code_page_from_name("\t\n\x0C\r latin1\t\n\x0C\r "), Some(28591));
        assert_eq!(code_page_from_name("SJIS"), Some(932));
        assert_eq!(code_page_from_name("cp437"), Some(437));
        assert_eq!(code_page_from_name("IBM037"), Some(37));
        assert_eq!(code_page_from_name("csISO2022JP"), Some(50221));
        assert_eq!(code_page_from_name("x-iscii-de"), Some(57002));
        assert_eq!(code_page_from_name("\u{a0}latin1"), None,
                   "Non-ASCII whitespace should not be trimmed");
        assert_eq!(code_page_from_name("gree\u{212a}"), None,
                   "Case-insensitive matching should be ASCII only. Kelvin sign does not match k.");
        assert_eq!(code_page_from_name("utf-8"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(web_name(932), Some("shift_jis"));
        assert_eq!(display_name(54936), Some("Chinese Simplified (GB18030)"));
        assert_eq!(web_name(65001), None);
        let names = names_for_code_page(1252);
        assert!(names.contains(&"cp1252"));
        assert!(names.contains(&"us-ascii"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_named_code_page_has_a_label() {
        for cp in named_code_pages() {
            assert!(code_page_from_name(&format!("cp{}", cp)) == Some(cp), "cp{}", cp);
        }
    }
}
