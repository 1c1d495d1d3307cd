//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard::prelude::*;` import that brings in
//! everything needed to declare fields and run a session.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! let mut validator = FormValidator::new();
//! validator.register_field(FieldSpec::new("email", "required|valid_email"));
//! let outcome = validator.validate(&StaticSource::new().text("email", "a@b.com"));
//! assert!(outcome.should_proceed());
//! ```

pub use crate::error::ValidationError;
pub use crate::field::{ControlKind, FieldSpec, fields_from_json};
pub use crate::session::{CompletionHandler, FormValidator, Handler, Outcome};
pub use crate::source::{InputSource, StaticSource};
