//! The closed set of grammatical plural categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A CLDR plural category.
///
/// Every locale's rule selects from this closed set. [`PluralCategory::Other`]
/// is the universal fallback: every rule can produce it, and pluralized
/// catalog entries must define it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Explicit zero form (e.g. Latvian, Welsh).
    Zero,
    /// Singular form.
    One,
    /// Dual form (e.g. Slovenian, Scottish Gaelic).
    Two,
    /// Paucal form (e.g. Slavic 2..4).
    Few,
    /// Greater-plural form (e.g. Slavic 5..).
    Many,
    /// The universal fallback form.
    Other,
}

impl PluralCategory {
    /// Returns the CLDR keyword for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            other => Err(format!("not a plural category: {other:?}")),
        }
    }
}
