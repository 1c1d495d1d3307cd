//! Regex-backed format predicates.
//!
//! The patterns here are deliberately the permissive, RFC-lite ones the
//! rule catalogue documents, not strict parsers: `valid_url` in particular
//! accepts anything `scheme://`-shaped (and the empty string, which the
//! empty-value skip normally filters out before it gets here), and
//! `valid_base64` only rejects characters outside the base64 alphabet.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+\-/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$").unwrap()
});

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHA_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static ALPHA_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

static IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})$")
        .unwrap()
});

// Inverted check: matches any character that is NOT valid base64.
static BASE64_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9/+=]").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((http|https)://(\w+:?\w*@)?(\S+)|)(:[0-9]+)?(/|/([\w#!:.?+=&%@!\-/]))?$").unwrap()
});

/// `valid_email`: one well-formed address.
pub fn valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// `valid_emails`: comma-split, every segment must pass [`valid_email`].
/// Segments are not trimmed.
pub fn valid_emails(value: &str) -> bool {
    value.split(',').all(valid_email)
}

/// `alpha`: letters only.
pub fn alpha(value: &str) -> bool {
    ALPHA.is_match(value)
}

/// `alpha_numeric`: letters and digits only.
pub fn alpha_numeric(value: &str) -> bool {
    ALPHA_NUMERIC.is_match(value)
}

/// `alpha_dash`: letters, digits, underscores, and dashes only.
pub fn alpha_dash(value: &str) -> bool {
    ALPHA_DASH.is_match(value)
}

/// `valid_ip`: dotted-quad IPv4, each octet 0-255.
pub fn valid_ip(value: &str) -> bool {
    IP.is_match(value)
}

/// `valid_base64`: no characters outside `[A-Za-z0-9/+=]`.
/// The empty string passes; padding placement is not checked.
pub fn valid_base64(value: &str) -> bool {
    !BASE64_FORBIDDEN.is_match(value)
}

/// `valid_url`: permissive `scheme://host[:port][/path]` shape.
pub fn valid_url(value: &str) -> bool {
    URL.is_match(value)
}

// ============================================================================
// TESTS
// ============================================================================
