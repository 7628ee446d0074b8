//! # polyglot-rs-translate
//!
//! Message translation: the catalog of stored messages, the JSON catalog
//! loader, and the [`Translator`] that resolves a locale + message id
//! (+ optional count and parameters) into display text.
//!
//! Resolution never fails outward: every internal failure degrades to
//! returning the message id, so the UI always has something to show.
//!
//! ## Modules
//!
//! - [`catalog`] - Per-locale message store
//! - [`loader`] - JSON catalog parsing and file loading
//! - [`resolver`] - The `Translator` service object
//!
//! ## Quick Start
//!
//! ```
//! use polyglot_rs_translate::{TranslateArgs, Translator};
//!
//! let translator = Translator::new();
//! translator
//!     .load_json(
//!         "en",
//!         r#"[{"id": "items", "translation": {"one": "{{count}} item", "other": "{{count}} items"}}]"#,
//!     )
//!     .unwrap();
//!
//! assert_eq!(translator.translate("en", "items", TranslateArgs::count(1)), "1 item");
//! assert_eq!(translator.translate("en", "items", TranslateArgs::count(5)), "5 items");
//! // Unknown ids degrade to the id itself.
//! assert_eq!(translator.translate("en", "missing.id", TranslateArgs::None), "missing.id");
//! ```

pub mod catalog;
pub mod loader;
pub mod resolver;

pub use catalog::{TranslationCatalog, TranslationEntry};
pub use loader::TranslationRecord;
pub use resolver::{FallbackReason, LocaleTranslator, Resolution, TranslateArgs, Translator};
