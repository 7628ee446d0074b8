//! JSON catalog loading.
//!
//! Catalog files are JSON arrays of `{ "id": ..., "translation": ... }`
//! records, where each translation is a plain string or a category-keyed
//! object:
//!
//! ```json
//! [
//!   { "id": "greeting", "translation": "Hello, {{name}}" },
//!   { "id": "items", "translation": { "one": "{{count}} item", "other": "{{count}} items" } }
//! ]
//! ```
//!
//! The locale of a file is its name's first dot-separated segment:
//! `en.json` and `en.all.json` both load into `en`.

use std::fs;
use std::path::Path;

use polyglot_rs_core::error::{PolyglotError, PolyglotResult};
use serde::Deserialize;

use crate::catalog::{TranslationCatalog, TranslationEntry};

/// One record in a catalog file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslationRecord {
    /// The stable message id.
    pub id: String,
    /// The stored message.
    pub translation: TranslationEntry,
}

/// Parses a JSON catalog document into records.
///
/// # Errors
///
/// Returns [`PolyglotError::SerializationError`] if the document is not a
/// valid record array.
pub fn parse_records(json: &str) -> PolyglotResult<Vec<TranslationRecord>> {
    serde_json::from_str(json).map_err(|e| PolyglotError::SerializationError(e.to_string()))
}

/// Parses `json` and merges its records into `catalog` under `locale`.
///
/// Returns the number of records merged. Records with duplicate ids
/// overwrite earlier entries, last one wins.
///
/// # Errors
///
/// Returns [`PolyglotError::SerializationError`] on malformed JSON; the
/// catalog is left untouched in that case.
pub fn load_json_into(
    catalog: &mut TranslationCatalog,
    locale: &str,
    json: &str,
) -> PolyglotResult<usize> {
    let records = parse_records(json)?;
    let count = records.len();
    for record in records {
        catalog.insert(locale, record.id, record.translation);
    }
    Ok(count)
}

/// Reads a catalog file and merges it into `catalog`, deriving the locale
/// from the file name.
///
/// # Errors
///
/// Returns [`PolyglotError::IoError`] if the file cannot be read,
/// [`PolyglotError::SerializationError`] on malformed JSON or a file name
/// with no usable locale segment.
pub fn load_file_into(catalog: &mut TranslationCatalog, path: &Path) -> PolyglotResult<usize> {
    let locale = locale_from_path(path).ok_or_else(|| {
        PolyglotError::SerializationError(format!(
            "cannot derive a locale from file name {path:?}"
        ))
    })?;
    let json = fs::read_to_string(path)?;
    load_json_into(catalog, locale, &json)
}

/// Extracts the locale segment from a catalog file path (`en.json` → `en`).
pub fn locale_from_path(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let locale = name.split('.').next()?;
    if locale.is_empty() {
        None
    } else {
        Some(locale)
    }
}
