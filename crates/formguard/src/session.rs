//! Validation session.
//!
//! [`FormValidator`] owns the field registry, per-session message
//! overrides, custom callbacks, and the completion handler. Registration
//! methods return `&mut Self` so a session can be configured in one chain,
//! and the session can be run any number of times: every pass starts from
//! a clean error list and reads fresh control state from the source.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::evaluator::{self, EvalContext};
use crate::field::{Field, FieldSpec};
use crate::source::InputSource;

/// A custom rule implementation. Receives the field's current value (empty
/// string when the control has none) and the rule's bracket parameter.
pub type Handler = Box<dyn Fn(&str, Option<&str>) -> bool>;

/// Runs once after every pass with the pass's errors and the optional
/// host event that triggered it.
pub type CompletionHandler = Box<dyn Fn(&[ValidationError], Option<&dyn Any>)>;

// ============================================================================
// OUTCOME
// ============================================================================

/// What the host should do with the action that triggered the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every field passed; let the action proceed.
    Proceed,
    /// At least one field failed; suppress the action.
    Suppress,
}

impl Outcome {
    pub fn should_proceed(self) -> bool {
        self == Self::Proceed
    }
}

// ============================================================================
// FORM VALIDATOR
// ============================================================================

/// A reusable validation session over a set of declared fields.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::{FieldSpec, FormValidator, StaticSource};
///
/// let mut validator = FormValidator::new();
/// validator
///     .register_field(FieldSpec::new("email", "required|valid_email"))
///     .register_field(
///         FieldSpec::new("password", "required|min_length[8]").with_display("Password"),
///     )
///     .set_message("required", "%s cannot be blank.");
///
/// let source = StaticSource::new()
///     .text("email", "user@example.com")
///     .text("password", "hunter2");
///
/// let outcome = validator.validate(&source);
/// assert!(!outcome.should_proceed());
/// assert_eq!(validator.errors().len(), 1);
/// ```
#[derive(Default)]
pub struct FormValidator {
    fields: IndexMap<String, Field>,
    overrides: HashMap<String, String>,
    handlers: HashMap<String, Handler>,
    on_complete: Option<CompletionHandler>,
    errors: Vec<ValidationError>,
}

impl FormValidator {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-loaded with field declarations.
    pub fn with_fields(specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        let mut validator = Self::new();
        for spec in specs {
            validator.register_field(spec);
        }
        validator
    }

    /// Registers a field declaration. A spec with an empty rule expression
    /// or no usable names is ignored. A multi-name spec registers one field
    /// per name, each sharing the display label and rules. Re-registering a
    /// name replaces its rules.
    pub fn register_field(&mut self, spec: FieldSpec) -> &mut Self {
        if spec.rules.is_empty() {
            tracing::debug!(name = ?spec.name, "ignoring field with no rules");
            return self;
        }
        let names = spec.effective_names();
        if names.is_empty() {
            tracing::debug!("ignoring field with no usable names");
            return self;
        }
        for name in names {
            let field = Field::build(name, spec.display.as_deref(), &spec.rules);
            self.fields.insert(name.to_owned(), field);
        }
        self
    }

    /// Overrides the message template for a rule in this session only.
    /// Templates use `%s` placeholders: display name first, parameter second.
    pub fn set_message(
        &mut self,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.overrides.insert(rule.into(), template.into());
        self
    }

    /// Registers a custom rule under `name`, referenced from rule
    /// expressions as `callback_<name>`. An empty name is ignored.
    pub fn register_callback(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&str, Option<&str>) -> bool + 'static,
    ) -> &mut Self {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!("ignoring callback with empty name");
            return self;
        }
        self.handlers.insert(name, Box::new(handler));
        self
    }

    /// Installs the completion handler, invoked exactly once per pass
    /// after all fields are evaluated, including passes with no errors.
    pub fn on_complete(
        &mut self,
        handler: impl Fn(&[ValidationError], Option<&dyn Any>) + 'static,
    ) -> &mut Self {
        self.on_complete = Some(Box::new(handler));
        self
    }

    /// Runs a full pass over the source.
    pub fn validate(&mut self, source: &dyn InputSource) -> Outcome {
        self.run(source, None)
    }

    /// Runs a full pass, forwarding the triggering host event to the
    /// completion handler.
    pub fn validate_event(&mut self, source: &dyn InputSource, event: &dyn Any) -> Outcome {
        self.run(source, Some(event))
    }

    /// The errors from the most recent pass, in field registration order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn run(&mut self, source: &dyn InputSource, event: Option<&dyn Any>) -> Outcome {
        tracing::debug!(fields = self.fields.len(), "starting validation pass");

        let ctx = EvalContext {
            source,
            fields: &self.fields,
            handlers: &self.handlers,
            overrides: &self.overrides,
        };

        let mut errors = Vec::new();
        for field in self.fields.values() {
            let Some(state) = evaluator::read_state(source, &field.name) else {
                tracing::debug!(name = %field.name, "source has no such control, skipping");
                continue;
            };
            if let Some(error) = evaluator::evaluate(field, &state, &ctx) {
                tracing::debug!(name = %field.name, rule = %error.rule, "rule failed");
                errors.push(error);
            }
        }
        self.errors = errors;

        if let Some(handler) = &self.on_complete {
            let call = AssertUnwindSafe(|| handler(&self.errors, event));
            if panic::catch_unwind(call).is_err() {
                tracing::warn!("completion handler panicked");
            }
        }

        if self.errors.is_empty() {
            Outcome::Proceed
        } else {
            Outcome::Suppress
        }
    }
}

impl fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("overrides", &self.overrides)
            .field("callbacks", &self.handlers.keys().collect::<Vec<_>>())
            .field("has_completion_handler", &self.on_complete.is_some())
            .field("errors", &self.errors)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
