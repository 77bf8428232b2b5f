//! End-to-end usage flows: argument assertions, single-value validation
//! and multi-field form validation.

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use chrono::{DateTime, TimeDelta, Utc};
use nebula_assert::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;

// ============================================================================
// ARGUMENT ASSERTION
// ============================================================================

#[derive(Debug, PartialEq)]
struct Event;

fn deactivate(deactivated_at: DateTime<Utc>, events: &Option<Vec<Event>>) {
    time::<Utc>().not_zero().less_eq(Utc::now()).must(&deactivated_at);
    any::<Option<Vec<Event>>>().not_nil_deep().must(events);
}

fn panics(f: impl FnOnce()) -> bool {
    catch_unwind(AssertUnwindSafe(f)).is_err()
}

#[test]
fn argument_assertion_panics_on_bad_arguments() {
    assert!(panics(|| deactivate(DateTime::<Utc>::default(), &Some(Vec::new()))));
    assert!(panics(|| deactivate(Utc::now() + TimeDelta::hours(1), &Some(Vec::new()))));
    assert!(panics(|| deactivate(Utc::now(), &None)));
    assert!(!panics(|| deactivate(Utc::now() - TimeDelta::seconds(1), &Some(vec![Event]))));
}

// ============================================================================
// SINGLE-VALUE VALIDATION
// ============================================================================

#[derive(Debug)]
struct Name(String);

impl Name {
    fn parse(value: &str) -> Result<Self, ValidationError> {
        string()
            .word()
            .check_msg(value, &format!("Name {value:?} is incorrect!"))?;
        Ok(Self(value.to_owned()))
    }
}

#[test]
fn single_value_validation_uses_call_message() {
    for input in ["Hello!", "W o r l d", "12345", "", "-"] {
        let error = Name::parse(input).unwrap_err();
        assert_eq!(error.to_string(), format!("Name {input:?} is incorrect!"));
        assert_eq!(error.code, "word");
    }
    assert_eq!(Name::parse("Ada").unwrap().0, "Ada");
}

// ============================================================================
// FORM VALIDATION
// ============================================================================

#[derive(Debug, Default)]
struct SignUpForm {
    email: String,
    name: String,
    age: u32,
    agreement: bool,
}

type FormErrors = BTreeMap<&'static str, Vec<String>>;

fn messages(errors: ValidationErrors) -> Vec<String> {
    errors.into_iter().map(|e| e.message.into_owned()).collect()
}

fn validate(form: &SignUpForm) -> FormErrors {
    let email_pattern = Regex::new(r"^\w+@\w+\.\w+$").unwrap();
    let mut errors = FormErrors::new();

    errors.insert(
        "email",
        messages(
            string()
                .not_empty()
                .msg("Email is required!")
                .regexp(email_pattern)
                .msg("Email is incorrect!")
                .custom(|_| Ok(()))
                .check_all(&form.email),
        ),
    );

    // optional
    let name_errors = if form.name.is_empty() {
        ValidationErrors::new()
    } else {
        string()
            .word()
            .msg("Only letters and '-' allowed!")
            .runes_min(2)
            .msg("Too short, isn't it?")
            .runes_max(255)
            .msg("Too long, isn't it?")
            .not_in(Vec::<String>::new())
            .msg("Is that your real name, friend?")
            .check_all(&form.name)
    };
    errors.insert("name", messages(name_errors));

    errors.insert(
        "age",
        messages(
            num::<u32>()
                .greater_eq(18)
                .msg("Things are serious -- come back later!")
                .less(65)
                .msg("Take a rest, friend!")
                .check_all(&form.age),
        ),
    );

    errors.insert(
        "agreement",
        messages(
            boolean()
                .is_true()
                .msg("This flag is required!")
                .check_all(&form.agreement),
        ),
    );

    errors
}

fn expected(entries: [(&'static str, &[&str]); 4]) -> FormErrors {
    entries
        .into_iter()
        .map(|(field, msgs)| (field, msgs.iter().map(|m| (*m).to_owned()).collect()))
        .collect()
}

#[test]
fn form_with_missing_fields() {
    let form = SignUpForm {
        age: 17,
        ..SignUpForm::default()
    };

    assert_eq!(
        validate(&form),
        expected([
            ("age", &["Things are serious -- come back later!"]),
            ("agreement", &["This flag is required!"]),
            ("email", &["Email is required!", "Email is incorrect!"]),
            ("name", &[]),
        ])
    );
}

#[test]
fn form_with_out_of_range_fields() {
    let form = SignUpForm {
        email: "old@man.email".to_owned(),
        name: "I".to_owned(),
        age: 100,
        agreement: true,
    };

    assert_eq!(
        validate(&form),
        expected([
            ("age", &["Take a rest, friend!"]),
            ("agreement", &[]),
            ("email", &[]),
            ("name", &["Too short, isn't it?"]),
        ])
    );
}

#[test]
fn valid_form_has_no_errors() {
    let form = SignUpForm {
        email: "assert@package.test".to_owned(),
        name: "Test".to_owned(),
        age: 33,
        agreement: true,
    };

    assert!(validate(&form).values().all(Vec::is_empty));
}
