//! Locale-to-rule registry and classification.
//!
//! A [`PluralRules`] table maps locale identifiers to rule functions. Many
//! identifiers share one rule (CLDR groups languages into rule families).
//! Lookup is exact: `pt` and `pt_PT` are distinct registrations and there is
//! no locale-chain fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use polyglot_rs_core::error::{PolyglotError, PolyglotResult};

use crate::category::PluralCategory;
use crate::operands::{Operands, Quantity};
use crate::rules;

/// A plural rule: a pure function from operands to a category.
///
/// Rules are plain function pointers, stateless and freely shared across
/// threads. Each rule evaluates its conditions in CLDR order and falls
/// through to [`PluralCategory::Other`].
pub type PluralRule = fn(&Operands) -> PluralCategory;

/// A locale-to-rule table.
///
/// Build one with [`PluralRules::cldr`] (the full CLDR table), or start
/// empty and [`register`](PluralRules::register) custom rules. Tables are
/// built once and read-only afterward; reads need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    rules: HashMap<String, PluralRule>,
}

impl PluralRules {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table populated with the full CLDR rule set.
    pub fn cldr() -> Self {
        let mut table = Self::new();
        rules::install(&mut table);
        table
    }

    /// Returns the process-wide shared CLDR table.
    ///
    /// Built on first use; all callers observe the same immutable table.
    pub fn shared() -> &'static Self {
        static TABLE: Lazy<PluralRules> = Lazy::new(PluralRules::cldr);
        &TABLE
    }

    /// Registers `rule` for every identifier in `locales`, overwriting any
    /// previous registration for those identifiers.
    pub fn register(&mut self, locales: &[&str], rule: PluralRule) {
        for locale in locales {
            self.rules.insert((*locale).to_string(), rule);
        }
    }

    /// Returns `true` if a rule is registered for the exact identifier.
    pub fn contains(&self, locale: &str) -> bool {
        self.rules.contains_key(locale)
    }

    /// Iterates over the registered locale identifiers, in no defined order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered locale identifiers.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no locales are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classifies pre-derived operands under `locale`'s rule.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::UnknownLocale`] if no rule is registered for
    /// the exact identifier.
    pub fn classify(&self, locale: &str, operands: &Operands) -> PolyglotResult<PluralCategory> {
        let rule = self
            .rules
            .get(locale)
            .ok_or_else(|| PolyglotError::UnknownLocale(locale.to_string()))?;
        Ok(rule(operands))
    }

    /// Derives operands from `quantity` and classifies them under `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::InvalidNumber`] for malformed quantities and
    /// [`PolyglotError::UnknownLocale`] for unregistered identifiers.
    pub fn classify_count(&self, locale: &str, quantity: &Quantity) -> PolyglotResult<PluralCategory> {
        self.classify(locale, &quantity.operands()?)
    }
}

/// Classifies a count against the shared CLDR table.
///
/// # Examples
///
/// ```
/// use polyglot_rs_plural::{classify, PluralCategory};
///
/// assert_eq!(classify("ru", 21).unwrap(), PluralCategory::One);
/// assert_eq!(classify("ar", 0).unwrap(), PluralCategory::Zero);
/// ```
///
/// # Errors
///
/// Returns [`PolyglotError::InvalidNumber`] or [`PolyglotError::UnknownLocale`].
pub fn classify(locale: &str, quantity: impl Into<Quantity>) -> PolyglotResult<PluralCategory> {
    PluralRules::shared().classify_count(locale, &quantity.into())
}
