//! The input-source seam.
//!
//! The engine never touches a live control surface: the session is handed
//! an [`InputSource`] and queries it once per field per pass. Hosts adapt
//! whatever they render (a DOM, a TUI form, a parsed request) behind this
//! trait; [`StaticSource`] is the map-backed implementation used in tests
//! and by hosts that already hold plain values.

use std::collections::HashMap;

use crate::field::ControlKind;

// ============================================================================
// INPUT SOURCE
// ============================================================================

/// Read access to the current state of named input controls.
///
/// For grouped radio/checkbox controls sharing one name, implementations
/// must resolve to the *checked* member's value and checked-state, or
/// report no value when no member is checked.
pub trait InputSource {
    /// Whether a control with this name exists at all. Registered fields
    /// the source does not contain are skipped for the pass.
    fn contains(&self, name: &str) -> bool;

    /// The control's current value, if it has one.
    fn value(&self, name: &str) -> Option<String>;

    /// The control's checked state; `None` for controls without one (or a
    /// group with no checked member).
    fn checked(&self, name: &str) -> Option<bool>;

    /// The control's semantic kind, when known.
    fn kind(&self, name: &str) -> Option<ControlKind>;

    /// An identifier for the underlying control, for error reporting.
    fn element_id(&self, name: &str) -> Option<String>;
}

// ============================================================================
// STATIC SOURCE
// ============================================================================

#[derive(Debug, Clone)]
struct Control {
    kind: ControlKind,
    value: Option<String>,
    checked: Option<bool>,
    id: Option<String>,
}

/// A map-backed [`InputSource`] with a builder-style API.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::StaticSource;
///
/// let source = StaticSource::new()
///     .text("email", "user@example.com")
///     .checkbox("tos", true)
///     .radio("color", Some("red"))
///     .file("avatar", "me.png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    controls: HashMap<String, Control>,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, name: impl Into<String>, control: Control) -> Self {
        self.controls.insert(name.into(), control);
        self
    }

    /// Adds a text control holding `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(
            name,
            Control {
                kind: ControlKind::Text,
                value: Some(value.into()),
                checked: None,
                id: None,
            },
        )
    }

    /// Adds a checkbox control.
    #[must_use = "builder methods must be chained or built"]
    pub fn checkbox(self, name: impl Into<String>, checked: bool) -> Self {
        self.insert(
            name,
            Control {
                kind: ControlKind::Checkbox,
                value: None,
                checked: Some(checked),
                id: None,
            },
        )
    }

    /// Adds a radio group. `selected` is the checked member's value;
    /// `None` models a group with no checked member, which reports neither
    /// a value nor a checked state.
    #[must_use = "builder methods must be chained or built"]
    pub fn radio(self, name: impl Into<String>, selected: Option<&str>) -> Self {
        self.insert(
            name,
            Control {
                kind: ControlKind::Radio,
                value: selected.map(str::to_owned),
                checked: selected.map(|_| true),
                id: None,
            },
        )
    }

    /// Adds a file control holding a file name.
    #[must_use = "builder methods must be chained or built"]
    pub fn file(self, name: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.insert(
            name,
            Control {
                kind: ControlKind::File,
                value: Some(file_name.into()),
                checked: None,
                id: None,
            },
        )
    }

    /// Sets the element id of an already-added control.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_id(mut self, name: &str, id: impl Into<String>) -> Self {
        if let Some(control) = self.controls.get_mut(name) {
            control.id = Some(id.into());
        }
        self
    }
}

impl InputSource for StaticSource {
    fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    fn value(&self, name: &str) -> Option<String> {
        self.controls.get(name).and_then(|c| c.value.clone())
    }

    fn checked(&self, name: &str) -> Option<bool> {
        self.controls.get(name).and_then(|c| c.checked)
    }

    fn kind(&self, name: &str) -> Option<ControlKind> {
        self.controls.get(name).map(|c| c.kind)
    }

    fn element_id(&self, name: &str) -> Option<String> {
        self.controls.get(name).and_then(|c| c.id.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
