//! Validation failure records.
//!
//! A [`ValidationError`] is the engine's only output for a failing field:
//! one record per field per pass, produced by the first rule that fails.
//! The `rule` name uses `Cow<'static, str>` so the built-in rule names stay
//! allocation-free while callback rule names can be owned.

use std::borrow::Cow;

use serde::Serialize;

/// A single field-validation failure.
///
/// At most one `ValidationError` is emitted per field per validation pass:
/// rule evaluation for a field stops at the first failing rule.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::ValidationError;
///
/// let error = ValidationError::new("email", "The Email field is required.", "required");
/// assert_eq!(error.rule, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Identifier of the originating control, when the input source knows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The registered field name.
    pub name: String,

    /// Fully substituted human-readable message.
    pub message: String,

    /// Name of the rule that failed, e.g. `"min_length"` or `"callback_x"`.
    pub rule: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error for `name` with a rendered message and the failing
    /// rule's name.
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            message: message.into(),
            rule: rule.into(),
        }
    }

    /// Attaches the originating control's identifier.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
