//! The built-in predicate library and the parse-time rule representation.
//!
//! Every rule name in a rule expression resolves to a [`Rule`] variant when
//! the field is registered, so evaluation dispatches over an enum instead of
//! looking names up in a string-keyed table. Names that match nothing
//! resolve to [`Rule::Unknown`], which always passes (the documented
//! fail-open policy for unknown rules).
//!
//! The predicates themselves are pure functions, grouped by family:
//!
//! - **Length**: [`length`] — `min_length`, `max_length`, `exact_length`
//! - **Numeric**: [`numeric`] — `numeric`, `integer`, `decimal`,
//!   `is_natural`, `is_natural_no_zero`, `greater_than`, `less_than`
//! - **Patterns**: [`patterns`] — `alpha*`, `valid_email(s)`, `valid_ip`,
//!   `valid_base64`, `valid_url`
//! - **Checksum**: [`credit_card`] — `valid_credit_card` (Luhn)
//! - **Files**: [`file_type`] — `is_file_type`
//!
//! All predicates return `true` for "valid" and never fail: a malformed
//! parameter makes the rule fail (fail-closed), not error.

use std::borrow::Cow;

use crate::field::ControlKind;

pub mod credit_card;
pub mod file_type;
pub mod length;
pub mod numeric;
pub mod patterns;

// ============================================================================
// RULE
// ============================================================================

/// One resolved rule invocation from a field's rule expression.
///
/// Parameters are kept as the raw text between the brackets; numeric
/// parameters are validated inside the predicate so a malformed bound fails
/// the rule rather than erroring, and the raw text stays available for
/// message substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present; checkbox/radio controls must be checked.
    Required,
    /// Value must differ from the given default string.
    Default { value: Option<String> },
    /// Value must equal another field's current value.
    Matches { other: Option<String> },
    /// Value must be a single well-formed email address.
    ValidEmail,
    /// Value must be a comma-separated list of well-formed email addresses.
    ValidEmails,
    /// Value length must be at least the given bound.
    MinLength { min: Option<String> },
    /// Value length must not exceed the given bound.
    MaxLength { max: Option<String> },
    /// Value length must equal the given bound.
    ExactLength { len: Option<String> },
    /// Value must be a decimal number greater than the bound.
    GreaterThan { bound: Option<String> },
    /// Value must be a decimal number less than the bound.
    LessThan { bound: Option<String> },
    /// Letters only.
    Alpha,
    /// Letters and digits only.
    AlphaNumeric,
    /// Letters, digits, underscores, and dashes only.
    AlphaDash,
    /// Digits only.
    Numeric,
    /// Optionally signed digits.
    Integer,
    /// Optionally signed decimal number.
    Decimal,
    /// Digits only (non-negative integer).
    IsNatural,
    /// Positive integer with no leading zero.
    IsNaturalNoZero,
    /// Dotted-quad IPv4 address.
    ValidIp,
    /// No characters outside the base64 alphabet.
    ValidBase64,
    /// Permissive `scheme://host[:port][/path]` URL.
    ValidUrl,
    /// Digits/dashes/spaces passing the Luhn checksum.
    ValidCreditCard,
    /// File extension must be one of the listed types.
    IsFileType { types: Option<String> },
    /// A registered custom predicate. `run_on_empty` is set when the token
    /// was written with a leading `!`, opting the callback out of the
    /// empty-value skip.
    Callback {
        name: String,
        param: Option<String>,
        run_on_empty: bool,
    },
    /// Anything else; always passes.
    Unknown { name: String },
}

impl Rule {
    /// Resolves a parsed `(name, param)` token into a rule.
    ///
    /// `negated` records a leading `!` on the token; it only affects
    /// `callback_*` rules (their empty-value skip), never a predicate's
    /// own pass/fail result.
    pub(crate) fn resolve(name: &str, param: Option<&str>, negated: bool) -> Self {
        let param_owned = || param.map(str::to_owned);
        if let Some(callback) = name.strip_prefix("callback_") {
            return Rule::Callback {
                name: callback.to_owned(),
                param: param_owned(),
                run_on_empty: negated,
            };
        }
        match name {
            "required" => Rule::Required,
            "default" => Rule::Default {
                value: param_owned(),
            },
            "matches" => Rule::Matches {
                other: param_owned(),
            },
            "valid_email" => Rule::ValidEmail,
            "valid_emails" => Rule::ValidEmails,
            "min_length" => Rule::MinLength { min: param_owned() },
            "max_length" => Rule::MaxLength { max: param_owned() },
            "exact_length" => Rule::ExactLength { len: param_owned() },
            "greater_than" => Rule::GreaterThan {
                bound: param_owned(),
            },
            "less_than" => Rule::LessThan {
                bound: param_owned(),
            },
            "alpha" => Rule::Alpha,
            "alpha_numeric" => Rule::AlphaNumeric,
            "alpha_dash" => Rule::AlphaDash,
            "numeric" => Rule::Numeric,
            "integer" => Rule::Integer,
            "decimal" => Rule::Decimal,
            "is_natural" => Rule::IsNatural,
            "is_natural_no_zero" => Rule::IsNaturalNoZero,
            "valid_ip" => Rule::ValidIp,
            "valid_base64" => Rule::ValidBase64,
            "valid_url" => Rule::ValidUrl,
            "valid_credit_card" => Rule::ValidCreditCard,
            "is_file_type" => Rule::IsFileType {
                types: param_owned(),
            },
            _ => Rule::Unknown {
                name: name.to_owned(),
            },
        }
    }

    /// The rule name an emitted error is attributed to.
    ///
    /// Built-in names are static; callback failures are attributed to the
    /// full `callback_<name>` token.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Rule::Required => Cow::Borrowed("required"),
            Rule::Default { .. } => Cow::Borrowed("default"),
            Rule::Matches { .. } => Cow::Borrowed("matches"),
            Rule::ValidEmail => Cow::Borrowed("valid_email"),
            Rule::ValidEmails => Cow::Borrowed("valid_emails"),
            Rule::MinLength { .. } => Cow::Borrowed("min_length"),
            Rule::MaxLength { .. } => Cow::Borrowed("max_length"),
            Rule::ExactLength { .. } => Cow::Borrowed("exact_length"),
            Rule::GreaterThan { .. } => Cow::Borrowed("greater_than"),
            Rule::LessThan { .. } => Cow::Borrowed("less_than"),
            Rule::Alpha => Cow::Borrowed("alpha"),
            Rule::AlphaNumeric => Cow::Borrowed("alpha_numeric"),
            Rule::AlphaDash => Cow::Borrowed("alpha_dash"),
            Rule::Numeric => Cow::Borrowed("numeric"),
            Rule::Integer => Cow::Borrowed("integer"),
            Rule::Decimal => Cow::Borrowed("decimal"),
            Rule::IsNatural => Cow::Borrowed("is_natural"),
            Rule::IsNaturalNoZero => Cow::Borrowed("is_natural_no_zero"),
            Rule::ValidIp => Cow::Borrowed("valid_ip"),
            Rule::ValidBase64 => Cow::Borrowed("valid_base64"),
            Rule::ValidUrl => Cow::Borrowed("valid_url"),
            Rule::ValidCreditCard => Cow::Borrowed("valid_credit_card"),
            Rule::IsFileType { .. } => Cow::Borrowed("is_file_type"),
            Rule::Callback { name, .. } => Cow::Owned(format!("callback_{name}")),
            Rule::Unknown { name } => Cow::Owned(name.clone()),
        }
    }

    /// The key used to look up message templates for this rule.
    ///
    /// For callbacks this is the registered (stripped) name, so overrides
    /// installed via `set_message("x", ...)` apply to `callback_x` failures.
    pub(crate) fn message_key(&self) -> Cow<'static, str> {
        match self {
            Rule::Callback { name, .. } => Cow::Owned(name.clone()),
            _ => self.name(),
        }
    }

    /// The raw parameter text, for the second `%s` slot in messages.
    pub(crate) fn param_text(&self) -> Option<&str> {
        match self {
            Rule::Default { value: p }
            | Rule::Matches { other: p }
            | Rule::MinLength { min: p }
            | Rule::MaxLength { max: p }
            | Rule::ExactLength { len: p }
            | Rule::GreaterThan { bound: p }
            | Rule::LessThan { bound: p }
            | Rule::IsFileType { types: p }
            | Rule::Callback { param: p, .. } => p.as_deref(),
            _ => None,
        }
    }

    /// True for callback rules that were written `!callback_*` and so run
    /// even when a non-required field is empty.
    pub(crate) fn runs_on_empty(&self) -> bool {
        matches!(
            self,
            Rule::Callback {
                run_on_empty: true,
                ..
            }
        )
    }
}

// ============================================================================
// CONTEXT-DEPENDENT PREDICATES
// ============================================================================

/// `required`: checkbox/radio controls pass when checked; everything else
/// passes when the value is present and non-empty.
pub fn required(value: Option<&str>, checked: Option<bool>, kind: ControlKind) -> bool {
    match kind {
        ControlKind::Checkbox | ControlKind::Radio => checked == Some(true),
        _ => value.is_some_and(|v| !v.is_empty()),
    }
}

/// `default[text]`: passes when the value differs from the literal default.
pub fn not_default(value: Option<&str>, default_value: Option<&str>) -> bool {
    match default_value {
        Some(default_value) => value != Some(default_value),
        None => true,
    }
}

/// `matches[other]`: passes when both values are present and equal.
/// An absent counterpart field fails the rule.
pub fn matches(value: Option<&str>, other_value: Option<&str>) -> bool {
    match (value, other_value) {
        (Some(value), Some(other)) => value == other,
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
