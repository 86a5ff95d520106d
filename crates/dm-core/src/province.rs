//! Province identifiers.
//!
//! The boundary file and the demand tables spell province names with
//! inconsistent Turkish character encodings, so both sides are joined on a
//! normalized key rather than the raw name.

use std::fmt;

/// Normalized province name, the join key between boundary features and
/// table rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProvinceKey(String);

impl ProvinceKey {
    pub fn new(raw: &str) -> Self {
        Self(normalize_province(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProvinceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold a raw province name into its join form: trimmed, lowercased, with
/// the Turkish letters that vary between datasets mapped to ASCII.
///
/// Dotted capital 'İ' must be handled before lowercasing: Rust lowercases
/// it to "i" plus a combining dot, which would never match.
pub fn normalize_province(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        match c {
            'ç' | 'Ç' => out.push('c'),
            'ğ' | 'Ğ' => out.push('g'),
            'ı' | 'İ' | 'I' => out.push('i'),
            'ö' | 'Ö' => out.push('o'),
            'ş' | 'Ş' => out.push('s'),
            'ü' | 'Ü' => out.push('u'),
            'â' | 'Â' => out.push('a'),
            'î' | 'Î' => out.push('i'),
            'û' | 'Û' => out.push('u'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
