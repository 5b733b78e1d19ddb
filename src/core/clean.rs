//! Input cleaning shared by every validator.
//!
//! Numbers are often pasted from PDFs or word processors, which bring along
//! typographic dashes, non-breaking spaces and non-ASCII digits. Cleaning
//! folds those look-alikes to ASCII before any structural check runs.

/// Upper-case `input`, fold look-alike characters to ASCII and drop every
/// char in `delete`.
///
/// Folding happens before deletion, so `delete = " -"` also removes an
/// em dash or a no-break space. Cleaning is idempotent.
pub fn clean_unicode(input: &str, delete: &str) -> String {
    input
        .chars()
        .flat_map(char::to_uppercase)
        .map(fold_char)
        .filter(|c| !delete.contains(*c))
        .collect()
}

/// Remove the first of `prefixes` that `value` starts with.
pub fn strip_prefix_any<'a>(value: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|p| value.strip_prefix(p))
        .unwrap_or(value)
}

/// True when `value` is non-empty and consists only of ASCII digits.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Split `value` at the given ascending byte offsets.
///
/// Offsets past the end are clamped, so the result always has
/// `offsets.len() + 1` parts (trailing ones possibly empty).
pub fn split_at_many<'a>(value: &'a str, offsets: &[usize]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &offset in offsets {
        let end = offset.clamp(start, value.len());
        parts.push(value.get(start..end).unwrap_or_default());
        start = end;
    }
    parts.push(value.get(start..).unwrap_or_default());
    parts
}

/// Map a single character to its ASCII look-alike, if it has one.
pub fn fold_char(c: char) -> char {
    if let Some(d) = fold_digit(c) {
        return d;
    }
    CONFUSABLES
        .binary_search_by_key(&c, |&(from, _)| from)
        .map(|i| CONFUSABLES[i].1)
        .unwrap_or(c)
}

fn fold_digit(c: char) -> Option<char> {
    let cp = c as u32;
    let value = match cp {
        // Arabic-Indic, Eastern Arabic, fullwidth
        0x0660..=0x0669 => cp - 0x0660,
        0x06F0..=0x06F9 => cp - 0x06F0,
        0xFF10..=0xFF19 => cp - 0xFF10,
        // Mathematical bold, double-struck, sans-serif, sans-serif bold, monospace
        0x1D7CE..=0x1D7FF => (cp - 0x1D7CE) % 10,
        _ => return None,
    };
    char::from_digit(value, 10)
}

/// Punctuation and whitespace look-alikes. Sorted for binary search.
static CONFUSABLES: &[(char, char)] = &[
    ('\u{0009}', ' '), ('\u{000B}', ' '), ('\u{000C}', ' '), ('\u{0060}', '\''),
    ('\u{00A0}', ' '), ('\u{00AD}', '-'), ('\u{00AF}', '-'), ('\u{00B4}', '\''),
    ('\u{00B7}', '.'), ('\u{00B8}', ','), ('\u{02B9}', '\''), ('\u{02BB}', '\''),
    ('\u{02BC}', '\''), ('\u{02BE}', '\''), ('\u{02BF}', '\''), ('\u{02C8}', '\''),
    ('\u{02D7}', '-'), ('\u{02D9}', '.'), ('\u{0300}', '\''), ('\u{0301}', '\''),
    ('\u{0312}', '\''), ('\u{0313}', '\''), ('\u{0387}', '.'), ('\u{055A}', '\''),
    ('\u{058A}', '-'), ('\u{05BE}', '-'), ('\u{060C}', ','), ('\u{066B}', ','),
    ('\u{066C}', ','), ('\u{066D}', '*'), ('\u{06D4}', '.'), ('\u{0701}', '.'),
    ('\u{0702}', '.'), ('\u{070D}', '*'), ('\u{0830}', '.'), ('\u{083C}', '/'),
    ('\u{0F0B}', '.'), ('\u{0F0C}', '.'), ('\u{1361}', ':'), ('\u{1427}', '.'),
    ('\u{1680}', ' '), ('\u{16EB}', '.'), ('\u{16EC}', ':'), ('\u{1804}', ':'),
    ('\u{180A}', '-'), ('\u{2000}', ' '), ('\u{2001}', ' '), ('\u{2002}', ' '),
    ('\u{2003}', ' '), ('\u{2004}', ' '), ('\u{2005}', ' '), ('\u{2006}', ' '),
    ('\u{2007}', ' '), ('\u{2008}', ' '), ('\u{2009}', ' '), ('\u{200A}', ' '),
    ('\u{2010}', '-'), ('\u{2011}', '-'), ('\u{2012}', '-'), ('\u{2013}', '-'),
    ('\u{2014}', '-'), ('\u{2015}', '-'), ('\u{2018}', '\''), ('\u{2019}', '\''),
    ('\u{201A}', ','), ('\u{201B}', '\''), ('\u{2022}', '.'), ('\u{2024}', '.'),
    ('\u{2027}', '.'), ('\u{2028}', ' '), ('\u{2029}', ' '), ('\u{202F}', ' '),
    ('\u{2032}', ','), ('\u{203E}', '-'), ('\u{2043}', '-'), ('\u{2044}', '/'),
    ('\u{204E}', '*'), ('\u{2055}', '*'), ('\u{205F}', ' '), ('\u{207B}', '-'),
    ('\u{208B}', '-'), ('\u{2212}', '-'), ('\u{2215}', '/'), ('\u{2217}', '*'),
    ('\u{2219}', '.'), ('\u{22C5}', '.'), ('\u{22C6}', '*'), ('\u{23AF}', '-'),
    ('\u{23BA}', '-'), ('\u{23BB}', '-'), ('\u{23BC}', '-'), ('\u{23BD}', '-'),
    ('\u{23E4}', '-'), ('\u{2731}', '*'), ('\u{2732}', '*'), ('\u{2733}', '*'),
    ('\u{273A}', '*'), ('\u{273B}', '*'), ('\u{273C}', '*'), ('\u{273D}', '*'),
    ('\u{2743}', '*'), ('\u{2749}', '*'), ('\u{274A}', '*'), ('\u{274B}', '*'),
    ('\u{27CB}', '/'), ('\u{29F8}', '/'), ('\u{2E31}', '.'), ('\u{2E33}', '.'),
    ('\u{2E34}', ','), ('\u{3000}', ' '), ('\u{3001}', ','), ('\u{3002}', '.'),
    ('\u{30FB}', '.'), ('\u{A60E}', '*'), ('\u{FBB2}', '.'), ('\u{FBB3}', '.'),
    ('\u{FE11}', ','), ('\u{FE13}', ':'), ('\u{FE30}', ':'), ('\u{FE50}', ','),
    ('\u{FE51}', ','), ('\u{FE52}', '.'), ('\u{FE55}', ':'), ('\u{FE61}', '*'),
    ('\u{FE63}', '-'), ('\u{FF0A}', '*'), ('\u{FF0C}', ','), ('\u{FF0D}', '-'),
    ('\u{FF0E}', '.'), ('\u{FF0F}', '/'), ('\u{FF1A}', ':'), ('\u{FF64}', ','),
    ('\u{FF65}', '.'), ('\u{FFE3}', '-'), ('\u{10101}', '.'), ('\u{1091F}', '.'),
    ('\u{10A50}', '.'),
];
