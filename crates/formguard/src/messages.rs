//! Error-message templates and substitution.
//!
//! Template resolution order: per-session override, then the built-in
//! default for the rule, then a generic fallback naming the field. The
//! built-in table is immutable; sessions never mutate shared state.
//!
//! Templates carry up to two `%s` placeholders, filled left to right: the
//! field's display name first, then the rule parameter's display text.

use std::collections::HashMap;

/// The built-in default template for a rule name, if one exists.
pub fn builtin_template(rule: &str) -> Option<&'static str> {
    Some(match rule {
        "required" => "The %s field is required.",
        "matches" => "The %s field does not match the %s field.",
        "default" => "The %s field is still set to default, please change.",
        "valid_email" => "The %s field must contain a valid email address.",
        "valid_emails" => "The %s field must contain all valid email addresses.",
        "min_length" => "The %s field must be at least %s characters in length.",
        "max_length" => "The %s field must not exceed %s characters in length.",
        "exact_length" => "The %s field must be exactly %s characters in length.",
        "greater_than" => "The %s field must contain a number greater than %s.",
        "less_than" => "The %s field must contain a number less than %s.",
        "alpha" => "The %s field must only contain alphabetical characters.",
        "alpha_numeric" => "The %s field must only contain alpha-numeric characters.",
        "alpha_dash" => {
            "The %s field must only contain alpha-numeric characters, underscores, and dashes."
        }
        "numeric" => "The %s field must contain only numbers.",
        "integer" => "The %s field must contain an integer.",
        "decimal" => "The %s field must contain a decimal number.",
        "is_natural" => "The %s field must contain only positive numbers.",
        "is_natural_no_zero" => "The %s field must contain a number greater than zero.",
        "valid_ip" => "The %s field must contain a valid IP.",
        "valid_base64" => "The %s field must contain a base64 string.",
        "valid_credit_card" => "The %s field must contain a valid credit card number.",
        "is_file_type" => "The %s field must contain only %s files.",
        "valid_url" => "The %s field must contain a valid URL.",
        _ => return None,
    })
}

/// Resolves the template for a rule: session override first, built-in next.
/// `None` means the caller renders the generic fallback.
pub(crate) fn resolve_template<'a>(
    overrides: &'a HashMap<String, String>,
    rule: &str,
) -> Option<&'a str> {
    overrides
        .get(rule)
        .map(String::as_str)
        .or_else(|| builtin_template(rule))
}

/// Renders a message: first `%s` becomes the display name, the second (when
/// present and a parameter exists) becomes the parameter's display text.
pub(crate) fn render(template: Option<&str>, display: &str, param: Option<&str>) -> String {
    let Some(template) = template else {
        return format!("An error has occurred with the {display} field.");
    };
    let message = template.replacen("%s", display, 1);
    match param {
        Some(param) => message.replacen("%s", param, 1),
        None => message,
    }
}

// ============================================================================
// TESTS
// ============================================================================
