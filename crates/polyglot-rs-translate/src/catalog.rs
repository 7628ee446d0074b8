//! The translation catalog: per-locale message stores.
//!
//! A catalog maps locale identifiers to message stores, and each store maps
//! message ids to a [`TranslationEntry`]. Entries are merged on load
//! (overwriting duplicates) and never removed during resolution.

use std::collections::HashMap;

use polyglot_rs_plural::PluralCategory;
use serde::Deserialize;

/// A stored message: either a plain string, or one string per plural
/// category.
///
/// Pluralized entries need not define all six categories; only the ones the
/// locale's rule can produce, plus `other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranslationEntry {
    /// A non-pluralized message.
    Simple(String),
    /// A pluralized message, keyed by category.
    Plural(HashMap<PluralCategory, String>),
}

impl TranslationEntry {
    /// Returns the plain string, or `None` for a pluralized entry.
    pub fn as_simple(&self) -> Option<&str> {
        match self {
            Self::Simple(text) => Some(text),
            Self::Plural(_) => None,
        }
    }

    /// Returns the variant for `category`, or `None` for a plain entry or
    /// an undefined category.
    pub fn variant(&self, category: PluralCategory) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Plural(variants) => variants.get(&category).map(String::as_str),
        }
    }
}

/// A locale-keyed store of translation entries.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    locales: HashMap<String, HashMap<String, TranslationEntry>>,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or overwrites) an entry for `locale`/`id`, creating the
    /// locale store on first use.
    pub fn insert(&mut self, locale: &str, id: impl Into<String>, entry: TranslationEntry) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(id.into(), entry);
    }

    /// Looks up the entry for `locale`/`id`.
    pub fn get(&self, locale: &str, id: &str) -> Option<&TranslationEntry> {
        self.locales.get(locale)?.get(id)
    }

    /// Returns `true` if any entries are stored for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Returns the locales with stored entries, sorted.
    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of entries stored for `locale`.
    pub fn message_count(&self, locale: &str) -> usize {
        self.locales.get(locale).map_or(0, HashMap::len)
    }

    /// Removes all entries for `locale`.
    pub fn clear_locale(&mut self, locale: &str) {
        self.locales.remove(locale);
    }

    /// Removes everything.
    pub fn clear_all(&mut self) {
        self.locales.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut catalog = TranslationCatalog::new();
        catalog.insert("en", "greeting", TranslationEntry::Simple("Hello".into()));
        assert_eq!(
            catalog.get("en", "greeting"),
            Some(&TranslationEntry::Simple("Hello".into()))
        );
        assert_eq!(catalog.get("en", "missing"), None);
        assert_eq!(catalog.get("fr", "greeting"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut catalog = TranslationCatalog::new();
        catalog.insert("en", "x", TranslationEntry::Simple("a".into()));
        catalog.insert("en", "x", TranslationEntry::Simple("b".into()));
        assert_eq!(catalog.get("en", "x").unwrap().as_simple(), Some("b"));
        assert_eq!(catalog.message_count("en"), 1);
    }

    #[test]
    fn test_locale_introspection() {
        let mut catalog = TranslationCatalog::new();
        catalog.insert("ru", "x", TranslationEntry::Simple("а".into()));
        catalog.insert("en", "x", TranslationEntry::Simple("a".into()));
        assert!(catalog.has_locale("ru"));
        assert!(!catalog.has_locale("de"));
        assert_eq!(catalog.available_locales(), vec!["en", "ru"]);

        catalog.clear_locale("ru");
        assert!(!catalog.has_locale("ru"));
        catalog.clear_all();
        assert!(catalog.available_locales().is_empty());
    }

    #[test]
    fn test_entry_variant_access() {
        let mut variants = HashMap::new();
        variants.insert(PluralCategory::One, "{{count}} item".to_string());
        variants.insert(PluralCategory::Other, "{{count}} items".to_string());
        let entry = TranslationEntry::Plural(variants);

        assert_eq!(entry.variant(PluralCategory::One), Some("{{count}} item"));
        assert_eq!(entry.variant(PluralCategory::Few), None);
        assert_eq!(entry.as_simple(), None);

        let simple = TranslationEntry::Simple("Hello".into());
        assert_eq!(simple.as_simple(), Some("Hello"));
        assert_eq!(simple.variant(PluralCategory::Other), None);
    }

    #[test]
    fn test_entry_deserializes_untagged() {
        let simple: TranslationEntry = serde_json::from_str("\"Hello\"").unwrap();
        assert_eq!(simple.as_simple(), Some("Hello"));

        let plural: TranslationEntry =
            serde_json::from_str(r#"{"one": "item", "other": "items"}"#).unwrap();
        assert_eq!(plural.variant(PluralCategory::One), Some("item"));

        let bad: Result<TranslationEntry, _> =
            serde_json::from_str(r#"{"several": "items"}"#);
        assert!(bad.is_err());
    }
}
