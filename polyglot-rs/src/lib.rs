//! # polyglot-rs
//!
//! CLDR plural rules and message translation for Rust.
//!
//! This is the meta-crate that re-exports the member crates for convenient
//! access. Depend on `polyglot-rs` for the whole library, or on individual
//! crates for finer-grained control.
//!
//! ```
//! use polyglot_rs::plural::{classify, PluralCategory};
//! use polyglot_rs::translate::{TranslateArgs, Translator};
//!
//! assert_eq!(classify("ru", 21).unwrap(), PluralCategory::One);
//!
//! let translator = Translator::new();
//! translator
//!     .load_json("en", r#"[{"id": "greeting", "translation": "Hello, {{name}}"}]"#)
//!     .unwrap();
//! let args = TranslateArgs::classify(&[serde_json::json!({"name": "Ada"})]);
//! assert_eq!(translator.translate("en", "greeting", args), "Hello, Ada");
//! ```

/// Error types and logging integration.
pub use polyglot_rs_core as core;

/// CLDR operands, rule table, and classification.
#[cfg(feature = "plural")]
pub use polyglot_rs_plural as plural;

/// Placeholder-substitution template renderer.
#[cfg(feature = "template")]
pub use polyglot_rs_template as template;

/// Catalogs, JSON loading, and the fallback-safe resolver.
#[cfg(feature = "translate")]
pub use polyglot_rs_translate as translate;

pub use polyglot_rs_core::{PolyglotError, PolyglotResult};

#[cfg(feature = "translate")]
pub use polyglot_rs_translate::{Resolution, TranslateArgs, Translator};
