//! Numeric format and comparison predicates.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());

static NATURAL_NO_ZERO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());

/// `numeric`: digits only.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// `integer`: optionally signed digits.
pub fn is_integer(value: &str) -> bool {
    INTEGER.is_match(value)
}

/// `decimal`: optionally signed decimal number (`.5` and `-12` included).
pub fn is_decimal(value: &str) -> bool {
    DECIMAL.is_match(value)
}

/// `is_natural`: digits only, same set as [`is_numeric`].
pub fn is_natural(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// `is_natural_no_zero`: positive integer without leading zeros.
pub fn is_natural_no_zero(value: &str) -> bool {
    NATURAL_NO_ZERO.is_match(value)
}

fn compare(value: &str, bound: Option<&str>, cmp: fn(f64, f64) -> bool) -> bool {
    if !is_decimal(value) {
        return false;
    }
    let Some(bound) = bound.and_then(|b| b.parse::<f64>().ok()) else {
        return false;
    };
    value.parse::<f64>().is_ok_and(|v| cmp(v, bound))
}

/// `greater_than[n]`: value is a valid decimal and numerically exceeds `n`.
/// A malformed bound fails the rule.
pub fn greater_than(value: &str, bound: Option<&str>) -> bool {
    compare(value, bound, |v, b| v > b)
}

/// `less_than[n]`: value is a valid decimal and numerically below `n`.
/// A malformed bound fails the rule.
pub fn less_than(value: &str, bound: Option<&str>) -> bool {
    compare(value, bound, |v, b| v < b)
}

// ============================================================================
// TESTS
// ============================================================================
