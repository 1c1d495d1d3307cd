//! Per-field rule evaluation.
//!
//! One pass over one field's resolved rules, in expression order. The
//! first failing rule produces the field's single error and the remaining
//! rules are not evaluated.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::field::{ControlKind, Field};
use crate::messages;
use crate::rules::{self, Rule, credit_card, file_type, length, numeric, patterns};
use crate::session::Handler;
use crate::source::InputSource;

// ============================================================================
// FIELD STATE
// ============================================================================

/// A field's control state, read from the input source once per pass.
#[derive(Debug, Clone)]
pub(crate) struct FieldState {
    pub id: Option<String>,
    pub kind: ControlKind,
    pub value: Option<String>,
    pub checked: Option<bool>,
}

/// Reads a field's current state, or `None` when the source has no such
/// control (the field is then skipped for this pass).
pub(crate) fn read_state(source: &dyn InputSource, name: &str) -> Option<FieldState> {
    if !source.contains(name) {
        return None;
    }
    Some(FieldState {
        id: source.element_id(name),
        kind: source.kind(name).unwrap_or_default(),
        value: source.value(name),
        checked: source.checked(name),
    })
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Borrowed session registries the evaluator needs.
pub(crate) struct EvalContext<'a> {
    pub source: &'a dyn InputSource,
    pub fields: &'a IndexMap<String, Field>,
    pub handlers: &'a HashMap<String, Handler>,
    pub overrides: &'a HashMap<String, String>,
}

/// Evaluates one field, returning its error if any rule failed.
///
/// Skip rule: a non-required field that is currently empty skips every
/// token except callbacks written `!callback_*`, which always run so they
/// can validate emptiness themselves.
pub(crate) fn evaluate(
    field: &Field,
    state: &FieldState,
    ctx: &EvalContext<'_>,
) -> Option<ValidationError> {
    let value = state.value.as_deref();
    let is_empty = value.is_none_or(str::is_empty);
    let text = value.unwrap_or("");

    for rule in &field.parsed {
        if !field.requires_value && is_empty && !rule.runs_on_empty() {
            continue;
        }

        let passed = match rule {
            Rule::Required => rules::required(value, state.checked, state.kind),
            Rule::Default { value: default } => rules::not_default(value, default.as_deref()),
            Rule::Matches { other } => {
                let other_value = other.as_deref().and_then(|o| ctx.source.value(o));
                rules::matches(value, other_value.as_deref())
            }
            Rule::ValidEmail => patterns::valid_email(text),
            Rule::ValidEmails => patterns::valid_emails(text),
            Rule::MinLength { min } => length::min_length(text, min.as_deref()),
            Rule::MaxLength { max } => length::max_length(text, max.as_deref()),
            Rule::ExactLength { len } => length::exact_length(text, len.as_deref()),
            Rule::GreaterThan { bound } => numeric::greater_than(text, bound.as_deref()),
            Rule::LessThan { bound } => numeric::less_than(text, bound.as_deref()),
            Rule::Alpha => patterns::alpha(text),
            Rule::AlphaNumeric => patterns::alpha_numeric(text),
            Rule::AlphaDash => patterns::alpha_dash(text),
            Rule::Numeric => numeric::is_numeric(text),
            Rule::Integer => numeric::is_integer(text),
            Rule::Decimal => numeric::is_decimal(text),
            Rule::IsNatural => numeric::is_natural(text),
            Rule::IsNaturalNoZero => numeric::is_natural_no_zero(text),
            Rule::ValidIp => patterns::valid_ip(text),
            Rule::ValidBase64 => patterns::valid_base64(text),
            Rule::ValidUrl => patterns::valid_url(text),
            Rule::ValidCreditCard => credit_card::valid_credit_card(text),
            Rule::IsFileType { types } => file_type::is_file_type(text, state.kind, types.as_deref()),
            Rule::Callback { name, param, .. } => match ctx.handlers.get(name) {
                // A panicking callback fails its rule rather than passing the
                // field (fail-closed).
                Some(handler) => {
                    panic::catch_unwind(AssertUnwindSafe(|| handler(text, param.as_deref())))
                        .unwrap_or(false)
                }
                // Unregistered callbacks are a no-op.
                None => true,
            },
            Rule::Unknown { .. } => true,
        };

        if !passed {
            return Some(build_error(field, state, rule, ctx));
        }
    }

    None
}

fn build_error(
    field: &Field,
    state: &FieldState,
    rule: &Rule,
    ctx: &EvalContext<'_>,
) -> ValidationError {
    // A parameter naming a registered field is shown by its display label.
    let param_display = rule.param_text().map(|p| {
        ctx.fields
            .get(p)
            .map_or_else(|| p.to_owned(), |f| f.display.clone())
    });

    let key = rule.message_key();
    let template = messages::resolve_template(ctx.overrides, &key);
    let message = messages::render(template, &field.display, param_display.as_deref());

    let mut error = ValidationError::new(field.name.as_str(), message, rule.name());
    if let Some(id) = &state.id {
        error = error.with_id(id.as_str());
    }
    error
}

// ============================================================================
// TESTS
// ============================================================================
