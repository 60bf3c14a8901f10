use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ParseError;
use crate::locale_tag::LocaleTag;
use crate::types::Territory;

/// Keys the resolver understands. Anything else is preserved untouched.
pub const KNOWN_KEYS: [&str; 7] = ["ca", "cf", "cu", "ms", "nu", "rg", "tz"];

/// Decoded `-u-` extension content, plus the `-t-` transform fragment.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UnicodeOptions {
    attributes: Vec<String>,
    values: BTreeMap<String, String>,
    incomplete: BTreeSet<String>,
    region_override: Option<RegionOverride>,
    transform: Option<String>,
}

/// Outcome of decoding the `rg` key. A malformed value poisons only this
/// key; every other key stays usable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionOverride {
    Territory(Territory),
    Malformed(String),
}

impl UnicodeOptions {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.values.is_empty()
            && self.transform.is_none()
    }

    /// Value stored under a key, lowercased. Incomplete keys carry an empty
    /// value; use [`UnicodeOptions::is_incomplete`] to distinguish them.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value usable for resolution: present, complete, and non-empty.
    pub fn resolvable(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn is_incomplete(&self, key: &str) -> bool {
        self.incomplete.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Keys carried through without interpretation.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|key| !KNOWN_KEYS.contains(key))
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn region_override(&self) -> Option<&RegionOverride> {
        self.region_override.as_ref()
    }

    /// Scoped failure for the `rg` key, if its value was malformed.
    pub fn region_override_error(&self) -> Option<ParseError> {
        match &self.region_override {
            Some(RegionOverride::Malformed(raw)) => {
                Some(ParseError::InvalidRegionOverride(raw.clone()))
            }
            _ => None,
        }
    }

    /// Source-locale fragment from the `-t-` singleton. Provenance only;
    /// never consulted during resolution.
    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }
}

/// Decodes the `u` extension of a parsed tag into a typed options map.
///
/// Absence of the extension is the common case and yields empty options. A
/// key with no following value is retained with an empty value and flagged
/// incomplete; decoding of subsequent keys continues.
pub fn decode_u_extension(tag: &LocaleTag) -> UnicodeOptions {
    let mut options = UnicodeOptions::default();

    if let Some(raw) = tag.extension('t') {
        options.transform = Some(raw.to_ascii_lowercase());
    }

    let Some(raw) = tag.extension('u') else {
        return options;
    };
    let subtags: Vec<&str> = raw.split('-').collect();

    let mut idx = 0;
    while idx < subtags.len() && subtags[idx].len() != 2 {
        options.attributes.push(subtags[idx].to_ascii_lowercase());
        idx += 1;
    }

    while idx < subtags.len() {
        let key = subtags[idx].to_ascii_lowercase();
        idx += 1;
        let start = idx;
        while idx < subtags.len() && subtags[idx].len() != 2 {
            idx += 1;
        }
        let value = subtags[start..idx].join("-").to_ascii_lowercase();
        if start == idx {
            options.incomplete.insert(key.clone());
        } else if key == "rg" {
            options.region_override = Some(decode_region_override(&value));
        }
        options.values.insert(key, value);
    }

    options
}

fn decode_region_override(value: &str) -> RegionOverride {
    if value.len() == 6 {
        let (region, padding) = value.split_at(2);
        if padding.eq_ignore_ascii_case("zzzz") {
            if let Ok(territory) = Territory::new(region) {
                return RegionOverride::Territory(territory);
            }
        }
    }
    RegionOverride::Malformed(String::from(value))
}
