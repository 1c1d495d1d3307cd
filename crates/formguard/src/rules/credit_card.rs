//! Credit-card predicate: character gate plus Luhn checksum.

use std::sync::LazyLock;

use regex::Regex;

// Digits, dashes, and whitespace only; separators are stripped before the
// checksum runs.
static NUMERIC_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\s-]+$").unwrap());

/// `valid_credit_card`: digits/dashes/spaces only, and the digit string
/// passes the Luhn mod-10 check.
pub fn valid_credit_card(value: &str) -> bool {
    if !NUMERIC_DASH.is_match(value) {
        return false;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    luhn(&digits)
}

/// The Luhn checksum: double every second digit from the right, subtract 9
/// from doubled values above 9, and require the sum to be divisible by 10.
fn luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

// ============================================================================
// TESTS
// ============================================================================
