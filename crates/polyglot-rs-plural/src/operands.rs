//! CLDR plural operands and their derivation from exact quantities.
//!
//! A quantity enters classification either as an exact integer or as a
//! decimal string that preserves its visible fraction digits. Binary floats
//! are rejected: `1.5`, `1.50`, and `1.500000` derive distinct operands but
//! are the same `f64`, so callers must format floats to decimal strings
//! before classifying.

use polyglot_rs_core::error::{PolyglotError, PolyglotResult};

/// An exact count to classify: an integer, or a decimal string preserving
/// its visible fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// An exact integer count. Has zero visible fraction digits.
    Integer(i64),
    /// A decimal string such as `"1.50"`. Trailing zeros are significant.
    Decimal(String),
}

impl Quantity {
    /// Derives the CLDR operands for this quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::InvalidNumber`] if a decimal string is
    /// malformed (non-digit characters outside an optional leading minus
    /// sign and a single decimal point, or an empty digit segment).
    pub fn operands(&self) -> PolyglotResult<Operands> {
        match self {
            Self::Integer(value) => Ok(Operands::from_integer(*value)),
            Self::Decimal(text) => Operands::from_decimal_str(text),
        }
    }
}

impl std::fmt::Display for Quantity {
    /// Renders the quantity as the caller wrote it: integers in decimal,
    /// decimal strings verbatim (trailing zeros preserved).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self::Decimal(value)
    }
}

impl TryFrom<f64> for Quantity {
    type Error = PolyglotError;

    /// Floats are always rejected; format them into a decimal string first.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Err(PolyglotError::InvalidNumber(format!(
            "{value} (floats should be formatted into a string)"
        )))
    }
}

/// The six CLDR plural operands, derived once per classification.
///
/// | Operand | Meaning |
/// |---------|---------|
/// | `n` | absolute value of the source number |
/// | `i` | integer digits of `n` |
/// | `v` | visible fraction digits, with trailing zeros |
/// | `w` | visible fraction digits, without trailing zeros |
/// | `f` | visible fraction digits as an integer, with trailing zeros |
/// | `t` | visible fraction digits as an integer, without trailing zeros |
///
/// When `v == 0` there are no fraction digits at all, so `f == 0 && t == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    /// Absolute value of the source number.
    pub n: f64,
    /// Integer part of `n`.
    pub i: u64,
    /// Count of visible fraction digits, including trailing zeros.
    pub v: u64,
    /// Count of visible fraction digits, excluding trailing zeros.
    pub w: u64,
    /// Fraction digits (with trailing zeros) as an integer.
    pub f: u64,
    /// Fraction digits (trailing zeros stripped) as an integer.
    pub t: u64,
}

impl Operands {
    /// Derives operands from an exact integer. Operands use the absolute value.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_integer(value: i64) -> Self {
        let i = value.unsigned_abs();
        Self {
            n: i as f64,
            i,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }

    /// Derives operands from a decimal string such as `"-1.50"`.
    ///
    /// An optional leading minus sign is stripped (operands are absolute).
    /// The fraction is scanned from the right for the last non-zero digit to
    /// separate `w`/`t` from `v`/`f`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::InvalidNumber`] for inputs with non-digit
    /// characters, more than one decimal point, or an empty integer or
    /// fraction segment (`".5"`, `"5."`).
    pub fn from_decimal_str(text: &str) -> PolyglotResult<Self> {
        let invalid = || PolyglotError::InvalidNumber(text.to_string());

        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let i: u64 = int_part.parse().map_err(|_| invalid())?;

        let Some(fraction) = frac_part else {
            #[allow(clippy::cast_precision_loss)]
            return Ok(Self {
                n: i as f64,
                i,
                v: 0,
                w: 0,
                f: 0,
                t: 0,
            });
        };

        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let n: f64 = unsigned.parse().map_err(|_| invalid())?;
        let v = fraction.len() as u64;
        // Index just past the last non-zero fraction digit; 0 if all zeros.
        let w = fraction
            .bytes()
            .rposition(|b| b != b'0')
            .map_or(0, |pos| pos as u64 + 1);
        let f: u64 = fraction.parse().map_err(|_| invalid())?;
        let t: u64 = if w > 0 {
            fraction[..w as usize].parse().map_err(|_| invalid())?
        } else {
            0
        };

        Ok(Self { n, i, v, w, f, t })
    }

    // ── N-predicates ─────────────────────────────────────────────────
    //
    // These test the visible decimal value as a whole number: they compare
    // against `i` but are only true when `t == 0`, so "n = 1" is false for
    // 1.5 and for "1.5" alike, while "1.0" (t = 0) still counts as 1.

    /// True when the value is a whole number equal to one of `values`.
    pub fn n_equals_any(&self, values: &[u64]) -> bool {
        self.t == 0 && values.contains(&self.i)
    }

    /// True when the value is a whole number in `from..=to`.
    pub fn n_in_range(&self, from: u64, to: u64) -> bool {
        self.t == 0 && in_range(self.i, from, to)
    }

    /// True when the value is a whole number whose remainder modulo
    /// `modulus` equals one of `values`.
    pub fn n_mod_equals_any(&self, modulus: u64, values: &[u64]) -> bool {
        self.t == 0 && values.contains(&(self.i % modulus))
    }

    /// True when the value is a whole number whose remainder modulo
    /// `modulus` is in `from..=to`.
    pub fn n_mod_in_range(&self, modulus: u64, from: u64, to: u64) -> bool {
        self.t == 0 && in_range(self.i % modulus, from, to)
    }
}

impl TryFrom<&Quantity> for Operands {
    type Error = PolyglotError;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.operands()
    }
}

/// `from <= value <= to`, for the bare integer predicates in rule bodies.
pub(crate) const fn in_range(value: u64, from: u64, to: u64) -> bool {
    from <= value && value <= to
}

/// Membership test for the bare integer predicates in rule bodies.
pub(crate) fn equals_any(value: u64, values: &[u64]) -> bool {
    values.contains(&value)
}
