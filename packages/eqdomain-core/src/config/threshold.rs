//! Threshold specifications
//!
//! A threshold is a comparison operator plus an exact decimal, written as one
//! token: `GT0.5`, `GEQ0.25`, `LT1`. Similarity thresholds are tested against
//! exact Jaccard fractions; gap thresholds against `f64` score differences.
//!
//! Grammar (case-insensitive): `(GT|GE|GEQ|LT|LE|LEQ|EQ)<decimal>`

use super::error::{ConfigError, ConfigResult};
use crate::shared::models::Fraction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Gt,
    Geq,
    Lt,
    Leq,
    Eq,
}

impl Comparison {
    /// Operator prefixes, longest first so `GEQ` wins over `GE`
    const PREFIXES: [(&'static str, Comparison); 7] = [
        ("GEQ", Comparison::Geq),
        ("LEQ", Comparison::Leq),
        ("GE", Comparison::Geq),
        ("GT", Comparison::Gt),
        ("LE", Comparison::Leq),
        ("LT", Comparison::Lt),
        ("EQ", Comparison::Eq),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Gt => "GT",
            Comparison::Geq => "GEQ",
            Comparison::Lt => "LT",
            Comparison::Leq => "LEQ",
            Comparison::Eq => "EQ",
        }
    }

    #[inline]
    fn holds(&self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            Comparison::Gt => ordering == Greater,
            Comparison::Geq => ordering != Less,
            Comparison::Lt => ordering == Less,
            Comparison::Leq => ordering != Greater,
            Comparison::Eq => ordering == Equal,
        }
    }
}

/// Comparison operator + exact decimal bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Threshold {
    comparison: Comparison,
    value: Fraction,
}

impl Threshold {
    pub fn new(comparison: Comparison, value: Fraction) -> Self {
        Self { comparison, value }
    }

    /// `> value`
    pub fn greater_than(value: Fraction) -> Self {
        Self::new(Comparison::Gt, value)
    }

    /// `>= value`
    pub fn at_least(value: Fraction) -> Self {
        Self::new(Comparison::Geq, value)
    }

    /// Parse a threshold specification such as `"GT0.5"`
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let trimmed = text.trim();
        let upper = trimmed.to_ascii_uppercase();

        let (comparison, rest) = Comparison::PREFIXES
            .iter()
            .find_map(|(prefix, comparison)| {
                upper
                    .strip_prefix(prefix)
                    .map(|rest| (*comparison, rest))
            })
            .ok_or_else(|| ConfigError::InvalidThreshold(text.to_string()))?;

        let value = Fraction::parse_decimal(rest)
            .ok_or_else(|| ConfigError::InvalidThreshold(text.to_string()))?;

        Ok(Self { comparison, value })
    }

    #[inline]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    #[inline]
    pub fn value(&self) -> Fraction {
        self.value
    }

    /// Exact test of a fraction (Jaccard values)
    #[inline]
    pub fn is_satisfied_by(&self, candidate: Fraction) -> bool {
        self.comparison.holds(candidate.cmp(&self.value))
    }

    /// Test of a floating point value (score gaps)
    pub fn is_satisfied_by_f64(&self, candidate: f64) -> bool {
        match candidate.partial_cmp(&self.value.to_f64()) {
            Some(ordering) => self.comparison.holds(ordering),
            None => false,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.comparison.as_str(),
            format_decimal(self.value)
        )
    }
}

impl std::str::FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Threshold {
    type Error = ConfigError;

    fn try_from(text: String) -> ConfigResult<Self> {
        Self::parse(&text)
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}

/// Render a fraction as a decimal literal.
///
/// Decimal denominators (every parsed threshold) render exactly with trailing
/// zeros removed; other denominators fall back to `f64` formatting.
fn format_decimal(value: Fraction) -> String {
    let mut denominator = value.denominator();
    let mut digits = 0usize;
    while denominator != 0 && denominator % 10 == 0 {
        denominator /= 10;
        digits += 1;
    }
    if denominator != 1 {
        return value.to_f64().to_string();
    }

    let scale = value.denominator();
    let int_part = value.numerator() / scale;
    let frac_part = value.numerator() % scale;
    if frac_part == 0 {
        return int_part.to_string();
    }

    let frac = format!("{:0width$}", frac_part, width = digits);
    format!("{}.{}", int_part, frac.trim_end_matches('0'))
}
