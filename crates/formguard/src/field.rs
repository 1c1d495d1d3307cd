//! Field registration surface.
//!
//! A [`FieldSpec`] is what callers hand to the session: a name (or several
//! names sharing one rule set), an optional display label, and the raw rule
//! expression. Registration turns each spec into one or more [`Field`]
//! records with the rule expression resolved into [`Rule`] values up front.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::parser;
use crate::rules::Rule;

// ============================================================================
// CONTROL KIND
// ============================================================================

/// The semantic type of the control behind a field.
///
/// Only two behaviors hang off this: `required` checks the checked state for
/// checkbox/radio controls, and `is_file_type` only applies to file controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Free-text input (the default).
    #[default]
    Text,
    /// Checkbox control; `required` passes only when checked.
    Checkbox,
    /// Radio control; `required` passes only when the group has a checked member.
    Radio,
    /// File input; subject to `is_file_type`.
    File,
    /// Anything else; treated like text.
    #[serde(other)]
    Other,
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Declarative specification of one or more fields to validate.
///
/// A spec with neither `name` nor `names`, or with an empty `rules` string,
/// is silently skipped at registration (permissive by design).
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::FieldSpec;
///
/// let password = FieldSpec::new("password", "required|min_length[8]").with_display("Password");
/// let pair = FieldSpec::for_names(["day", "month"], "required|numeric");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name; ignored when `names` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Several field names sharing this spec's rules and display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,

    /// Human-readable label for messages; defaults to the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Pipe-delimited rule expression, e.g. `required|min_length[8]`.
    #[serde(default)]
    pub rules: String,
}

impl FieldSpec {
    /// Creates a spec for a single named field.
    pub fn new(name: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            names: None,
            display: None,
            rules: rules.into(),
        }
    }

    /// Creates a spec registering the same rules under several names.
    pub fn for_names<I, S>(names: I, rules: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            names: Some(names.into_iter().map(Into::into).collect()),
            display: None,
            rules: rules.into(),
        }
    }

    /// Sets the display label used in error messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// The list of names this spec registers under, `names` taking
    /// precedence over `name`. Empty names are dropped.
    pub(crate) fn effective_names(&self) -> Vec<&str> {
        match (&self.names, &self.name) {
            (Some(names), _) => names
                .iter()
                .map(String::as_str)
                .filter(|n| !n.is_empty())
                .collect(),
            (None, Some(name)) if !name.is_empty() => vec![name.as_str()],
            _ => Vec::new(),
        }
    }
}

/// Loads field specs from a JSON array, for declarative configuration.
///
/// ```rust,ignore
/// let specs = formguard::fields_from_json(
///     r#"[{ "name": "email", "rules": "required|valid_email" }]"#,
/// )?;
/// ```
pub fn fields_from_json(json: &str) -> Result<Vec<FieldSpec>, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// REGISTERED FIELD
// ============================================================================

/// A registered field: one validated entity.
#[derive(Debug, Clone)]
pub struct Field {
    /// Unique name within the session.
    pub name: String,
    /// Label substituted into messages.
    pub display: String,
    /// The raw rule expression, immutable after registration.
    pub rules: String,
    /// Rule expression resolved at registration time.
    pub(crate) parsed: SmallVec<[Rule; 4]>,
    /// Whether `required` appears anywhere in the raw rule string.
    /// A field-level flag, not a per-rule property.
    pub(crate) requires_value: bool,
}

impl Field {
    pub(crate) fn build(name: &str, display: Option<&str>, rules: &str) -> Self {
        Self {
            name: name.to_owned(),
            display: display.unwrap_or(name).to_owned(),
            rules: rules.to_owned(),
            parsed: parser::parse_rules(rules),
            requires_value: rules.contains("required"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
