//! Full registration-to-outcome scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use formguard::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn required_field_left_empty_produces_one_error() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("email", "required|valid_email"));

    let source = StaticSource::new().text("email", "");
    let outcome = validator.validate(&source);

    assert_eq!(outcome, Outcome::Suppress);
    assert_eq!(validator.errors().len(), 1);
    let error = &validator.errors()[0];
    assert_eq!(error.name, "email");
    assert_eq!(error.rule, "required");
    assert_eq!(error.message, "The email field is required.");
}

#[test]
fn empty_optional_field_is_not_an_error() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("website", "valid_url|min_length[10]"));

    let source = StaticSource::new().text("website", "");
    assert_eq!(validator.validate(&source), Outcome::Proceed);
    assert!(validator.errors().is_empty());
}

#[test]
fn first_failing_rule_wins() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("age", "required|numeric|greater_than[17]"));

    let source = StaticSource::new().text("age", "abc");
    validator.validate(&source);
    assert_eq!(validator.errors()[0].rule, "numeric");

    let source = StaticSource::new().text("age", "12");
    validator.validate(&source);
    assert_eq!(validator.errors()[0].rule, "greater_than");
}

#[test]
fn matches_compares_against_the_named_control() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new(
        "password_confirm",
        "required|matches[password]",
    ));

    let agreeing = StaticSource::new()
        .text("password", "hunter2")
        .text("password_confirm", "hunter2");
    assert_eq!(validator.validate(&agreeing), Outcome::Proceed);

    let disagreeing = StaticSource::new()
        .text("password", "hunter2")
        .text("password_confirm", "hunter3");
    validator.validate(&disagreeing);
    assert_eq!(validator.errors()[0].rule, "matches");

    // counterpart missing from the source entirely
    let lonely = StaticSource::new().text("password_confirm", "hunter2");
    validator.validate(&lonely);
    assert_eq!(validator.errors()[0].rule, "matches");
}

#[test]
fn callback_rule_failure_is_attributed_to_the_callback() {
    let mut validator = FormValidator::new();
    validator
        .register_field(FieldSpec::new("username", "required|callback_not_taken"))
        .register_callback("not_taken", |value, _| value != "admin");

    let source = StaticSource::new().text("username", "admin");
    validator.validate(&source);

    let error = &validator.errors()[0];
    assert_eq!(error.rule, "callback_not_taken");
    assert_eq!(
        error.message,
        "An error has occurred with the username field."
    );
}

#[test]
fn checkbox_required_follows_checked_state() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("tos", "required").with_display("Terms"));

    let unchecked = StaticSource::new().checkbox("tos", false);
    validator.validate(&unchecked);
    assert_eq!(validator.errors()[0].message, "The Terms field is required.");

    let checked = StaticSource::new().checkbox("tos", true);
    assert_eq!(validator.validate(&checked), Outcome::Proceed);
}

#[test]
fn radio_group_uses_the_checked_member() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("color", "required"));

    let nothing_checked = StaticSource::new().radio("color", None);
    assert_eq!(validator.validate(&nothing_checked), Outcome::Suppress);

    let checked = StaticSource::new().radio("color", Some("red"));
    assert_eq!(validator.validate(&checked), Outcome::Proceed);
}

#[test]
fn controls_absent_from_the_source_are_skipped() {
    let mut validator = FormValidator::new();
    validator
        .register_field(FieldSpec::new("visible", "required"))
        .register_field(FieldSpec::new("hidden", "required|numeric"));

    let source = StaticSource::new().text("visible", "present");
    assert_eq!(validator.validate(&source), Outcome::Proceed);
}

#[test]
fn multi_name_spec_validates_each_control() {
    let mut validator = FormValidator::new();
    validator.register_field(
        FieldSpec::for_names(["day", "month", "year"], "required|numeric").with_display("Date"),
    );

    let source = StaticSource::new()
        .text("day", "29")
        .text("month", "08")
        .text("year", "two thousand");
    validator.validate(&source);

    assert_eq!(validator.errors().len(), 1);
    assert_eq!(validator.errors()[0].name, "year");
    assert_eq!(
        validator.errors()[0].message,
        "The Date field must contain only numbers."
    );
}

#[test]
fn completion_handler_runs_once_per_pass() {
    let log: Rc<RefCell<Vec<usize>>> = Rc::default();
    let log_in_handler = Rc::clone(&log);

    let mut validator = FormValidator::new();
    validator
        .register_field(FieldSpec::new("email", "required"))
        .register_field(FieldSpec::new("phone", "required|numeric"))
        .on_complete(move |errors, _| log_in_handler.borrow_mut().push(errors.len()));

    let bad = StaticSource::new().text("email", "").text("phone", "abc");
    assert_eq!(validator.validate(&bad), Outcome::Suppress);

    let good = StaticSource::new()
        .text("email", "a@b.com")
        .text("phone", "5551234");
    assert_eq!(validator.validate(&good), Outcome::Proceed);

    // one entry per pass, with that pass's error count
    assert_eq!(*log.borrow(), vec![2, 0]);
}

#[test]
fn host_event_reaches_the_completion_handler() {
    #[derive(Debug, PartialEq)]
    struct Submit {
        form: &'static str,
    }

    let seen: Rc<RefCell<Option<&'static str>>> = Rc::default();
    let seen_in_handler = Rc::clone(&seen);

    let mut validator = FormValidator::new();
    validator
        .register_field(FieldSpec::new("email", "required"))
        .on_complete(move |_, event| {
            let submit = event.and_then(|e| e.downcast_ref::<Submit>());
            *seen_in_handler.borrow_mut() = submit.map(|s| s.form);
        });

    let source = StaticSource::new().text("email", "a@b.com");
    validator.validate_event(&source, &Submit { form: "signup" });
    assert_eq!(*seen.borrow(), Some("signup"));
}

#[test]
fn errors_serialize_for_host_consumption() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("email", "required"));

    let source = StaticSource::new().text("email", "").with_id("email", "f-email");
    validator.validate(&source);

    let json = serde_json::to_value(validator.errors()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "f-email",
            "name": "email",
            "message": "The email field is required.",
            "rule": "required",
        }])
    );
}
