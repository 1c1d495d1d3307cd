//! # formguard
//!
//! A declarative field-validation engine driven by compact rule
//! expressions.
//!
//! Fields are declared with pipe-delimited rule strings such as
//! `required|min_length[8]|matches[password_confirm]`. A
//! [`FormValidator`] session resolves each expression once at
//! registration, then validates any [`InputSource`] implementation on
//! demand, producing at most one [`ValidationError`] per field with a
//! rendered, human-readable message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! let mut validator = FormValidator::new();
//! validator
//!     .register_field(FieldSpec::new("email", "required|valid_email"))
//!     .register_field(
//!         FieldSpec::new("password", "required|min_length[8]").with_display("Password"),
//!     );
//!
//! let source = StaticSource::new()
//!     .text("email", "user@example.com")
//!     .text("password", "short");
//!
//! let outcome = validator.validate(&source);
//! assert!(!outcome.should_proceed());
//! assert_eq!(
//!     validator.errors()[0].message,
//!     "The Password field must be at least 8 characters in length.",
//! );
//! ```
//!
//! ## Built-in Rules
//!
//! - **Presence**: `required`, `default[value]`, `matches[other_field]`
//! - **Format**: `valid_email`, `valid_emails`, `valid_ip`, `valid_url`,
//!   `valid_base64`, `valid_credit_card`
//! - **Character class**: `alpha`, `alpha_numeric`, `alpha_dash`
//! - **Numeric**: `numeric`, `integer`, `decimal`, `is_natural`,
//!   `is_natural_no_zero`, `greater_than[n]`, `less_than[n]`
//! - **Length**: `min_length[n]`, `max_length[n]`, `exact_length[n]`
//! - **Files**: `is_file_type[jpg,png]`
//! - **Custom**: `callback_<name>` (see
//!   [`FormValidator::register_callback`]); prefix with `!` to run the
//!   callback even when the field is empty.

pub mod error;
pub mod field;
pub mod messages;
pub mod prelude;
pub mod rules;
pub mod session;
pub mod source;

mod evaluator;
mod parser;

pub use error::ValidationError;
pub use field::{ControlKind, FieldSpec, fields_from_json};
pub use session::{CompletionHandler, FormValidator, Handler, Outcome};
pub use source::{InputSource, StaticSource};
