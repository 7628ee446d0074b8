//! The `Translator` service object and message resolution.
//!
//! A [`Translator`] owns the plural rule table and the translation catalog.
//! The catalog sits behind a read-write lock so catalogs can keep loading
//! while resolutions are in flight (readers = resolves, writer = loads);
//! the rule table is immutable after construction and shared without
//! locking.
//!
//! Resolution follows a strict never-break-the-UI policy: every internal
//! failure (missing locale, missing entry, wrong entry shape, bad count,
//! template error) degrades to returning the message id. [`Resolution`]
//! records which path was taken so callers and tests can observe fallbacks
//! without string-comparing against the id.

use std::path::Path;
use std::sync::RwLock;

use polyglot_rs_core::error::{PolyglotError, PolyglotResult};
use polyglot_rs_core::logging::resolve_span;
use polyglot_rs_plural::{Operands, PluralCategory, PluralRules, Quantity};
use polyglot_rs_template::{params_from_json, render, Params, Value};

use crate::catalog::{TranslationCatalog, TranslationEntry};
use crate::loader;

/// The arguments accompanying a resolution, as a tagged sum.
///
/// The resolver core never inspects argument types at runtime; callers (or
/// the [`TranslateArgs::classify`] boundary adapter) construct the right
/// variant up front.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TranslateArgs {
    /// No count, no parameters.
    #[default]
    None,
    /// A plural count only.
    Count(Quantity),
    /// A plural count plus named parameters.
    CountAndParams(Quantity, Params),
    /// Named parameters only.
    Params(Params),
}

impl TranslateArgs {
    /// A plural count only.
    pub fn count(quantity: impl Into<Quantity>) -> Self {
        Self::Count(quantity.into())
    }

    /// A plural count plus named parameters.
    pub fn count_with(quantity: impl Into<Quantity>, params: Params) -> Self {
        Self::CountAndParams(quantity.into(), params)
    }

    /// Named parameters only.
    pub fn params(params: Params) -> Self {
        Self::Params(params)
    }

    /// Classifies a loose JSON argument list the way the variadic callers
    /// expect: a leading integer or numeric string is the plural count, an
    /// optional following object is the parameter bag; a leading non-number
    /// is itself the parameter bag. Unsupported bag shapes become an empty
    /// map.
    pub fn classify(args: &[serde_json::Value]) -> Self {
        match args {
            [] => Self::None,
            [first, rest @ ..] => quantity_from_json(first).map_or_else(
                || Self::Params(params_from_json(first)),
                |quantity| match rest.first() {
                    Some(bag) => Self::CountAndParams(quantity, params_from_json(bag)),
                    None => Self::Count(quantity),
                },
            ),
        }
    }
}

/// Extracts a plural count from a JSON value, if it is number-like.
///
/// Integer numbers become exact integers; fractional numbers and numeric
/// strings become decimal strings (the JSON text is the visible decimal
/// form). Anything else is not a count.
fn quantity_from_json(value: &serde_json::Value) -> Option<Quantity> {
    match value {
        serde_json::Value::Number(n) => Some(
            n.as_i64()
                .map_or_else(|| Quantity::Decimal(n.to_string()), Quantity::Integer),
        ),
        serde_json::Value::String(s) if Operands::from_decimal_str(s).is_ok() => {
            Some(Quantity::Decimal(s.clone()))
        }
        _ => None,
    }
}

/// Why a resolution fell back to the message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The catalog holds no entries for the requested locale.
    UnknownLocale,
    /// No plural rule is registered for the rule locale.
    UnknownRule,
    /// The count could not be parsed into operands.
    InvalidCount,
    /// The catalog has no entry for the message id.
    MissingEntry,
    /// A count was given for a plain entry, or none for a pluralized one.
    EntryShapeMismatch,
    /// The pluralized entry does not define the computed category.
    MissingCategory(PluralCategory),
    /// The template failed to render.
    TemplateFailed,
}

/// The outcome of a resolution: rendered text, or the fallback to the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The message rendered successfully.
    Rendered(String),
    /// Resolution failed internally; display the id instead.
    Fallback {
        /// The message id, returned verbatim.
        id: String,
        /// Which step failed.
        reason: FallbackReason,
    },
}

impl Resolution {
    /// Collapses the outcome into displayable text: the rendered message,
    /// or the message id on fallback.
    pub fn into_text(self) -> String {
        match self {
            Self::Rendered(text) => text,
            Self::Fallback { id, .. } => id,
        }
    }

    /// Returns `true` if this resolution fell back to the id.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// The translation service object.
///
/// Owns a plural rule table and a translation catalog; construct one
/// explicitly and share it by reference (or `Arc`). All methods take
/// `&self`; catalog loads synchronize internally.
#[derive(Debug)]
pub struct Translator {
    rules: PluralRules,
    /// When set, counts are always classified under this locale's rule
    /// instead of the requested locale's.
    rule_locale: Option<String>,
    catalog: RwLock<TranslationCatalog>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Creates a translator with the full CLDR rule table and an empty
    /// catalog.
    pub fn new() -> Self {
        Self::with_rules(PluralRules::cldr())
    }

    /// Creates a translator with a custom rule table.
    pub fn with_rules(rules: PluralRules) -> Self {
        Self {
            rules,
            rule_locale: None,
            catalog: RwLock::new(TranslationCatalog::new()),
        }
    }

    /// Pins plural classification to one locale's rule regardless of the
    /// locale requested per call.
    #[must_use]
    pub fn with_rule_locale(mut self, locale: impl Into<String>) -> Self {
        self.rule_locale = Some(locale.into());
        self
    }

    /// The rule table this translator classifies with.
    pub const fn rules(&self) -> &PluralRules {
        &self.rules
    }

    // ── Catalog management ───────────────────────────────────────────

    /// Merges a JSON record array into the catalog under `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::SerializationError`] on malformed JSON.
    pub fn load_json(&self, locale: &str, json: &str) -> PolyglotResult<usize> {
        let mut catalog = self.catalog.write().expect("catalog lock poisoned");
        let count = loader::load_json_into(&mut catalog, locale, json)?;
        drop(catalog);
        tracing::debug!(locale = locale, records = count, "catalog loaded");
        Ok(count)
    }

    /// Reads a catalog file and merges it, deriving the locale from the
    /// file name (`en.json` → `en`).
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::IoError`] or
    /// [`PolyglotError::SerializationError`].
    pub fn load_file(&self, path: &Path) -> PolyglotResult<usize> {
        let mut catalog = self.catalog.write().expect("catalog lock poisoned");
        loader::load_file_into(&mut catalog, path)
    }

    /// Inserts a single entry programmatically.
    pub fn insert(&self, locale: &str, id: impl Into<String>, entry: TranslationEntry) {
        self.catalog
            .write()
            .expect("catalog lock poisoned")
            .insert(locale, id, entry);
    }

    /// Returns `true` if the catalog has entries for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.catalog
            .read()
            .expect("catalog lock poisoned")
            .has_locale(locale)
    }

    /// The locales with catalog entries, sorted.
    pub fn available_locales(&self) -> Vec<String> {
        self.catalog
            .read()
            .expect("catalog lock poisoned")
            .available_locales()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Removes all entries for `locale`.
    pub fn clear_locale(&self, locale: &str) {
        self.catalog
            .write()
            .expect("catalog lock poisoned")
            .clear_locale(locale);
    }

    /// Empties the catalog.
    pub fn clear_all(&self) {
        self.catalog
            .write()
            .expect("catalog lock poisoned")
            .clear_all();
    }

    // ── Classification ───────────────────────────────────────────────

    /// Classifies a count under `locale`'s plural rule.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::InvalidNumber`] or
    /// [`PolyglotError::UnknownLocale`].
    pub fn classify(
        &self,
        locale: &str,
        quantity: impl Into<Quantity>,
    ) -> PolyglotResult<PluralCategory> {
        self.rules.classify_count(locale, &quantity.into())
    }

    // ── Resolution ───────────────────────────────────────────────────

    /// Resolves a message, reporting which path was taken.
    ///
    /// Never fails: the worst outcome is a [`Resolution::Fallback`]
    /// carrying the id and the reason.
    pub fn resolve(&self, locale: &str, message_id: &str, args: TranslateArgs) -> Resolution {
        let span = resolve_span(locale, message_id);
        let _guard = span.enter();

        let fallback = |reason: FallbackReason| {
            tracing::debug!(reason = ?reason, "falling back to message id");
            Resolution::Fallback {
                id: message_id.to_string(),
                reason,
            }
        };

        let (count, mut params) = match args {
            TranslateArgs::None => (None, Params::new()),
            TranslateArgs::Count(quantity) => (Some(quantity), Params::new()),
            TranslateArgs::CountAndParams(quantity, params) => (Some(quantity), params),
            TranslateArgs::Params(params) => (None, params),
        };

        let catalog = self.catalog.read().expect("catalog lock poisoned");
        if !catalog.has_locale(locale) {
            return fallback(FallbackReason::UnknownLocale);
        }

        let template = if let Some(quantity) = count {
            let rule_locale = self.rule_locale.as_deref().unwrap_or(locale);
            let category = match self.rules.classify_count(rule_locale, &quantity) {
                Ok(category) => category,
                Err(PolyglotError::UnknownLocale(_)) => {
                    return fallback(FallbackReason::UnknownRule)
                }
                Err(_) => return fallback(FallbackReason::InvalidCount),
            };
            let Some(entry) = catalog.get(locale, message_id) else {
                return fallback(FallbackReason::MissingEntry);
            };
            let Some(text) = entry.variant(category) else {
                return fallback(match entry {
                    TranslationEntry::Simple(_) => FallbackReason::EntryShapeMismatch,
                    TranslationEntry::Plural(_) => FallbackReason::MissingCategory(category),
                });
            };
            // The count is available to templates as {{count}} unless the
            // caller bound that name explicitly.
            params
                .entry("count".to_string())
                .or_insert_with(|| Value::String(quantity.to_string()));
            text.to_string()
        } else {
            let Some(entry) = catalog.get(locale, message_id) else {
                return fallback(FallbackReason::MissingEntry);
            };
            let Some(text) = entry.as_simple() else {
                return fallback(FallbackReason::EntryShapeMismatch);
            };
            text.to_string()
        };
        drop(catalog);

        match render(&template, &params) {
            Ok(text) => Resolution::Rendered(text),
            Err(err) => {
                tracing::debug!(error = %err, "template rendering failed");
                fallback(FallbackReason::TemplateFailed)
            }
        }
    }

    /// Resolves a message to displayable text, falling back to the id.
    pub fn translate(&self, locale: &str, message_id: &str, args: TranslateArgs) -> String {
        self.resolve(locale, message_id, args).into_text()
    }

    /// Returns a handle with `locale` pre-bound.
    pub fn for_locale(&self, locale: impl Into<String>) -> LocaleTranslator<'_> {
        LocaleTranslator {
            translator: self,
            locale: locale.into(),
        }
    }
}

/// A [`Translator`] handle with the locale pre-bound.
#[derive(Debug, Clone)]
pub struct LocaleTranslator<'a> {
    translator: &'a Translator,
    locale: String,
}

impl LocaleTranslator<'_> {
    /// The bound locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolves a message under the bound locale.
    pub fn resolve(&self, message_id: &str, args: TranslateArgs) -> Resolution {
        self.translator.resolve(&self.locale, message_id, args)
    }

    /// Translates a message under the bound locale.
    pub fn translate(&self, message_id: &str, args: TranslateArgs) -> String {
        self.translator.translate(&self.locale, message_id, args)
    }
}
