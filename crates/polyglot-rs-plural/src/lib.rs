//! # polyglot-rs-plural
//!
//! CLDR pluralization: operand derivation from exact quantities, the CLDR
//! plural rule table, and per-locale category classification.
//!
//! ## Modules
//!
//! - [`category`] - The closed set of grammatical plural categories
//! - [`operands`] - The six CLDR operands (`n`, `i`, `v`, `w`, `f`, `t`)
//! - [`registry`] - Locale to rule mapping and classification
//! - [`rules`] - The CLDR rule bodies, one per locale family
//!
//! ## Quick Start
//!
//! ```
//! use polyglot_rs_plural::{classify, PluralCategory};
//!
//! assert_eq!(classify("en", 1).unwrap(), PluralCategory::One);
//! assert_eq!(classify("en", 5).unwrap(), PluralCategory::Other);
//! // Decimal strings preserve visible fraction digits: 1.5 is not "one" item.
//! assert_eq!(classify("en", "1.5").unwrap(), PluralCategory::Other);
//! ```

pub mod category;
pub mod operands;
pub mod registry;
pub mod rules;

pub use category::PluralCategory;
pub use operands::{Operands, Quantity};
pub use registry::{classify, PluralRule, PluralRules};
