//! Exact non-negative fractions
//!
//! Jaccard values and decimal thresholds are compared exactly: a similarity of
//! `1/4` must satisfy `GEQ0.25` regardless of floating point rounding.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Maximum number of fractional digits accepted by [`Fraction::parse_decimal`]
const MAX_FRACTION_DIGITS: usize = 18;

/// Exact non-negative rational number `numerator / denominator`
///
/// The denominator is never zero. Values are not reduced; equality and
/// ordering use cross-multiplication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "FractionRepr")]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a fraction. A zero denominator yields [`Fraction::ZERO`].
    pub fn new(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self {
            numerator,
            denominator,
        }
    }

    #[inline]
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Parse a plain decimal literal (`"0.25"`, `"1"`, `".5"`) exactly.
    ///
    /// Signs, exponents and more than 18 fractional digits are rejected.
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if frac_part.len() > MAX_FRACTION_DIGITS {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let scale = 10u64.checked_pow(frac_part.len() as u32)?;
        let int_value: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let frac_value: u64 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().ok()?
        };

        let numerator = int_value.checked_mul(scale)?.checked_add(frac_value)?;
        Some(Self::new(numerator, scale))
    }

    #[inline]
    fn cross(&self, other: &Self) -> (u128, u128) {
        (
            self.numerator as u128 * other.denominator as u128,
            other.numerator as u128 * self.denominator as u128,
        )
    }
}

/// Wire form, validated before it becomes a [`Fraction`]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FractionRepr {
    numerator: u64,
    denominator: u64,
}

impl TryFrom<FractionRepr> for Fraction {
    type Error = DomainError;

    fn try_from(repr: FractionRepr) -> Result<Self, Self::Error> {
        if repr.denominator == 0 {
            return Err(DomainError::invalid_input(format!(
                "fraction {}/0 has a zero denominator",
                repr.numerator
            )));
        }
        Ok(Self {
            numerator: repr.numerator,
            denominator: repr.denominator,
        })
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross(other);
        a == b
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross(other);
        a.cmp(&b)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
