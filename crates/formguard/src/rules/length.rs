//! Length predicates: `min_length`, `max_length`, `exact_length`.
//!
//! Length is counted in Unicode scalar values. The bound parameter must be
//! all digits; anything else fails the rule (fail-closed), never errors.

use super::numeric::is_numeric;

fn bound(param: Option<&str>) -> Option<usize> {
    let param = param?;
    if !is_numeric(param) {
        return None;
    }
    param.parse().ok()
}

/// `min_length[n]`: value length >= n.
pub fn min_length(value: &str, min: Option<&str>) -> bool {
    bound(min).is_some_and(|n| value.chars().count() >= n)
}

/// `max_length[n]`: value length <= n.
pub fn max_length(value: &str, max: Option<&str>) -> bool {
    bound(max).is_some_and(|n| value.chars().count() <= n)
}

/// `exact_length[n]`: value length == n.
pub fn exact_length(value: &str, len: Option<&str>) -> bool {
    bound(len).is_some_and(|n| value.chars().count() == n)
}

// ============================================================================
// TESTS
// ============================================================================
