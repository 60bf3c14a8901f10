use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{ParseError, ParseResult};
use crate::types::Territory;

/// Structured form of a BCP47 language tag.
///
/// Language, script, region, and variant subtags are case-normalized per
/// subtag-type convention; extension and private-use content is stored
/// verbatim so the original casing survives a round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<Territory>,
    variants: Vec<String>,
    extensions: BTreeMap<char, String>,
    private_use: Option<String>,
}

impl LocaleTag {
    pub fn parse(input: &str) -> ParseResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyTag);
        }

        let subtags: Vec<&str> = trimmed.split('-').collect();
        if subtags.iter().any(|part| part.is_empty()) {
            return Err(ParseError::EmptySubtag);
        }

        let language = subtags[0];
        if !is_alpha(language) || !(2..=8).contains(&language.len()) {
            return Err(ParseError::MalformedTag("invalid language subtag"));
        }
        let language = language.to_ascii_lowercase();

        let mut script = None;
        let mut region = None;
        let mut variants = Vec::new();
        let mut extensions = BTreeMap::new();
        let mut private_use = None;

        let mut idx = 1;
        while idx < subtags.len() {
            let part = subtags[idx];
            if part.len() == 1 {
                break;
            }
            if script.is_none() && region.is_none() && variants.is_empty() && is_script(part) {
                script = Some(titlecase(part));
                idx += 1;
                continue;
            }
            if region.is_none() && variants.is_empty() && is_region(part) {
                region = Some(Territory::new(part)?);
                idx += 1;
                continue;
            }
            if is_variant(part) {
                variants.push(part.to_ascii_lowercase());
                idx += 1;
                continue;
            }
            return Err(ParseError::MalformedTag("unexpected subtag"));
        }

        while idx < subtags.len() {
            let part = subtags[idx];
            if part.len() != 1 {
                return Err(ParseError::MalformedTag("expected extension singleton"));
            }
            let Some(singleton) = part.chars().next() else {
                return Err(ParseError::EmptySubtag);
            };
            if !singleton.is_ascii_alphanumeric() {
                return Err(ParseError::MalformedTag("invalid extension singleton"));
            }
            let singleton = singleton.to_ascii_lowercase();
            idx += 1;

            if singleton == 'x' {
                // Private use runs to the end of the tag and may contain
                // one-character subtags.
                if subtags.len() == idx {
                    return Err(ParseError::EmptyExtension('x'));
                }
                private_use = Some(subtags[idx..].join("-"));
                idx = subtags.len();
                continue;
            }

            let start = idx;
            while idx < subtags.len() && subtags[idx].len() > 1 {
                if subtags[idx].len() > 8 || !is_alphanumeric(subtags[idx]) {
                    return Err(ParseError::MalformedTag("invalid extension subtag"));
                }
                idx += 1;
            }
            if start == idx {
                return Err(ParseError::EmptyExtension(singleton));
            }
            if extensions.contains_key(&singleton) {
                return Err(ParseError::DuplicateExtension(singleton));
            }
            extensions.insert(singleton, subtags[start..idx].join("-"));
        }

        Ok(Self {
            language,
            script,
            region,
            variants,
            extensions,
            private_use,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&Territory> {
        self.region.as_ref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn extensions(&self) -> &BTreeMap<char, String> {
        &self.extensions
    }

    /// Raw subtag sequence stored under the given singleton, if present.
    pub fn extension(&self, singleton: char) -> Option<&str> {
        self.extensions
            .get(&singleton.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn private_use(&self) -> Option<&str> {
        self.private_use.as_deref()
    }

    /// Case-normalized serialization. Parsing the result yields a structure
    /// identical to this one.
    pub fn canonical(&self) -> String {
        let mut out = String::from(self.language.as_str());
        if let Some(script) = &self.script {
            out.push('-');
            out.push_str(script);
        }
        if let Some(region) = &self.region {
            out.push('-');
            out.push_str(region.as_str());
        }
        for variant in &self.variants {
            out.push('-');
            out.push_str(variant);
        }
        for (singleton, raw) in &self.extensions {
            out.push('-');
            out.push(*singleton);
            out.push('-');
            out.push_str(raw);
        }
        if let Some(private_use) = &self.private_use {
            out.push_str("-x-");
            out.push_str(private_use);
        }
        out
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

fn is_alpha(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_alphabetic())
}

fn is_alphanumeric(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_alphanumeric())
}

fn is_script(value: &str) -> bool {
    value.len() == 4 && is_alpha(value)
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.bytes().all(|byte| byte.is_ascii_digit()))
}

fn is_variant(value: &str) -> bool {
    match value.len() {
        4 => {
            value.as_bytes()[0].is_ascii_digit() && is_alphanumeric(value)
        }
        5..=8 => is_alphanumeric(value),
        _ => false,
    }
}

fn titlecase(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(value.len());
    output.push(first.to_ascii_uppercase());
    for ch in chars {
        output.push(ch.to_ascii_lowercase());
    }
    output
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::LocaleTag;
    use crate::error::ParseError;

    #[test]
    fn normalizes_language_script_region() {
        let tag = LocaleTag::parse("zh-hant-tw").expect("valid tag");
        assert_eq!(tag.language(), "zh");
        assert_eq!(tag.script(), Some("Hant"));
        assert_eq!(tag.region().expect("region").as_str(), "TW");
        assert_eq!(tag.canonical(), "zh-Hant-TW");
    }

    #[test]
    fn keeps_variant_order() {
        let tag = LocaleTag::parse("sl-rozaj-biske-1994").expect("valid tag");
        assert_eq!(
            tag.variants(),
            &[
                String::from("rozaj"),
                String::from("biske"),
                String::from("1994")
            ]
        );
        assert_eq!(tag.canonical(), "sl-rozaj-biske-1994");
    }

    #[test]
    fn groups_extension_sequences_by_singleton() {
        let tag = LocaleTag::parse("en-AU-u-ca-gregory-tz-ausyd-t-ja").expect("valid tag");
        assert_eq!(tag.extension('u'), Some("ca-gregory-tz-ausyd"));
        assert_eq!(tag.extension('t'), Some("ja"));
        assert_eq!(tag.extension('q'), None);
    }

    #[test]
    fn preserves_extension_casing_verbatim() {
        let tag = LocaleTag::parse("en-US-u-RG-auZZZZ").expect("valid tag");
        assert_eq!(tag.extension('u'), Some("RG-auZZZZ"));
    }

    #[test]
    fn captures_private_use_to_end() {
        let tag = LocaleTag::parse("es-PE-x-a-northperu").expect("valid tag");
        assert_eq!(tag.private_use(), Some("a-northperu"));
        assert_eq!(tag.canonical(), "es-PE-x-a-northperu");
    }

    #[test]
    fn numeric_region_parses() {
        let tag = LocaleTag::parse("es-419").expect("valid tag");
        assert_eq!(tag.region().expect("region").as_str(), "419");
    }

    #[test]
    fn canonical_form_reparses_identically() {
        let tag = LocaleTag::parse("EN-latn-us-U-CA-gregory").expect("valid tag");
        let canonical = tag.canonical();
        let reparsed = LocaleTag::parse(&canonical).expect("canonical reparses");
        assert_eq!(reparsed, tag);
        assert_eq!(reparsed.canonical(), canonical);
    }

    #[test]
    fn rejects_empty_and_missing_language() {
        assert_eq!(LocaleTag::parse("  "), Err(ParseError::EmptyTag));
        assert_eq!(LocaleTag::parse("en--US"), Err(ParseError::EmptySubtag));
        assert_eq!(
            LocaleTag::parse("1en-US"),
            Err(ParseError::MalformedTag("invalid language subtag"))
        );
    }

    #[test]
    fn rejects_duplicate_singleton() {
        assert_eq!(
            LocaleTag::parse("en-u-ca-persian-u-nu-arab"),
            Err(ParseError::DuplicateExtension('u'))
        );
    }

    #[test]
    fn rejects_singleton_without_subtags() {
        assert_eq!(LocaleTag::parse("en-u"), Err(ParseError::EmptyExtension('u')));
        assert_eq!(LocaleTag::parse("en-x"), Err(ParseError::EmptyExtension('x')));
    }

    #[test]
    fn rejects_stray_subtag_between_region_and_extensions() {
        assert_eq!(
            LocaleTag::parse("en-US-foo"),
            Err(ParseError::MalformedTag("unexpected subtag"))
        );
    }

    #[test]
    fn display_matches_canonical() {
        let tag = LocaleTag::parse("pt-br").expect("valid tag");
        assert_eq!(tag.to_string(), "pt-BR");
    }
}
