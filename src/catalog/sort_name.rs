//! Artist name normalization for sorting and alphabetical grouping.
//!
//! Display names are never modified for rendering; the sort name is a
//! comparison-only key. The pipeline is: alias substitution, ligature
//! expansion, accent stripping, leading article removal, case fold.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Names that cannot be ordered against the Latin-alphabet catalog get a
/// romanized stand-in. This is data, not logic: entries can be extended
/// from the config file.
const DEFAULT_ALIASES: &[(&str, &str)] = &[("夢遊病者", "Sleepwalker")];

lazy_static! {
    static ref LEADING_ARTICLE: Regex = Regex::new(r"(?i)^(the|a|an)\s+").unwrap();
}

fn expand_ligatures(input: &str) -> String {
    // NFD does not decompose these, so they are expanded up front.
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            'Æ' => out.push_str("Ae"),
            'æ' => out.push_str("ae"),
            'Œ' => out.push_str("Oe"),
            'œ' => out.push_str("oe"),
            _ => out.push(c),
        }
    }
    out
}

fn strip_combining_marks(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Alias table plus the normalization rules built on top of it.
#[derive(Debug, Clone)]
pub struct SortNameRules {
    aliases: HashMap<String, String>,
}

impl Default for SortNameRules {
    fn default() -> Self {
        SortNameRules {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SortNameRules {
    /// Builds the default table extended with entries from configuration.
    /// Configured entries win over built-in ones.
    pub fn with_aliases<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut rules = SortNameRules::default();
        rules.aliases.extend(extra);
        rules
    }

    /// Canonical comparison key for an artist display name.
    ///
    /// The result is lowercase, accent-free and article-free. Passing an
    /// already normalized name through again leaves it unchanged.
    pub fn sort_name(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let aliased = self
            .aliases
            .get(trimmed)
            .map(String::as_str)
            .unwrap_or(trimmed);
        let stripped = strip_combining_marks(&expand_ligatures(aliased));
        let stripped = stripped.trim();
        LEADING_ARTICLE.replace(stripped, "").to_lowercase()
    }

    /// Single-character grouping key: `'A'..='Z'` or `'#'`.
    ///
    /// Empty and digit-leading names bucket under `'#'`, and so does any
    /// name whose normalized form starts with a non-ASCII-alphabetic
    /// character, keeping the result total over arbitrary input.
    pub fn bucket_letter(&self, raw: &str) -> char {
        let norm = self.sort_name(raw);
        match norm.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => '#',
        }
    }
}
