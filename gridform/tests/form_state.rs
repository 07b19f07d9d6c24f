use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gridform::error::SpecError;
use gridform::form::{ErrorKind, FieldKind, FieldSpec, Form, FormEvent, RuleSet, SelectOption};
use gridform::model::Value;

fn customer_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "First Name", FieldKind::Text)
            .rules(RuleSet::new().required().min_length(2).max_length(50)),
        FieldSpec::new("email", "Email", FieldKind::Email).rules(RuleSet::new().required().email()),
        FieldSpec::new("weight", "Weight (kg)", FieldKind::Number)
            .rules(RuleSet::new().required().min(0.0)),
    ]
}

fn values(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_spec_errors_fail_fast() {
    let inverted = vec![
        FieldSpec::new("weight", "Weight", FieldKind::Number)
            .rules(RuleSet::new().min(10.0).max(1.0)),
    ];
    assert!(matches!(
        Form::new(inverted, HashMap::new()),
        Err(SpecError::InvalidBounds { .. })
    ));

    let inverted_lengths = vec![
        FieldSpec::new("name", "Name", FieldKind::Text)
            .rules(RuleSet::new().min_length(9).max_length(3)),
    ];
    assert!(matches!(
        Form::new(inverted_lengths, HashMap::new()),
        Err(SpecError::InvalidLengthBounds { .. })
    ));

    let duplicated = vec![
        FieldSpec::new("name", "Name", FieldKind::Text),
        FieldSpec::new("name", "Name again", FieldKind::Text),
    ];
    assert_eq!(
        Form::new(duplicated, HashMap::new()).err(),
        Some(SpecError::DuplicateKey { key: "name".into() })
    );

    let nameless = vec![FieldSpec::new("", "Nameless", FieldKind::Text)];
    assert_eq!(
        Form::new(nameless, HashMap::new()).err(),
        Some(SpecError::EmptyKey)
    );
}

#[test]
fn test_required_takes_precedence_over_min_length() {
    let fields = vec![
        FieldSpec::new("name", "Name", FieldKind::Text)
            .rules(RuleSet::new().required().min_length(5)),
    ];
    let form = Form::new(fields, values(&[("name", Value::String(String::new()))])).unwrap();
    assert_eq!(form.error_for("name"), Some(ErrorKind::Required));
}

#[test]
fn test_errors_stay_latent_until_touched() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();

    // Invalid from construction, but pristine fields don't report.
    assert_eq!(form.error_for("name"), Some(ErrorKind::Required));
    assert!(!form.is_invalid("name"));

    form.mark_touched("name");
    assert!(form.is_invalid("name"));
}

#[test]
fn test_set_value_revalidates_without_touching() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();

    form.set_value("email", "nonsense");
    assert_eq!(form.error_for("email"), Some(ErrorKind::Email));
    assert!(!form.is_invalid("email"));

    form.set_value("email", "ada@example.com");
    assert_eq!(form.error_for("email"), None);
}

#[test]
fn test_optional_empty_fields_are_valid() {
    let fields = vec![
        FieldSpec::new("notes", "Notes", FieldKind::Textarea)
            .rules(RuleSet::new().min_length(10)),
        FieldSpec::new("contact", "Contact", FieldKind::Email).rules(RuleSet::new().email()),
    ];
    let form = Form::new(fields, HashMap::new()).unwrap();
    assert!(form.is_valid());
}

#[test]
fn test_numeric_bounds() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_value("weight", -2.5);
    assert_eq!(form.error_for("weight"), Some(ErrorKind::Min));
    form.set_value("weight", 12.5);
    assert_eq!(form.error_for("weight"), None);
}

#[test]
fn test_length_bounds() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_value("name", "A");
    assert_eq!(form.error_for("name"), Some(ErrorKind::MinLength));
    form.set_value("name", "A".repeat(51));
    assert_eq!(form.error_for("name"), Some(ErrorKind::MaxLength));
    form.set_value("name", "Ada");
    assert_eq!(form.error_for("name"), None);
}

#[test]
fn test_submit_failure_touches_everything_and_lists_errors_in_order() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_value("email", "ada@example.com");

    let errors = form.attempt_submit().unwrap_err();
    let keys: Vec<_> = errors.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["name", "weight"]);
    assert_eq!(errors[0].kind, ErrorKind::Required);

    assert!(form.is_invalid("name"));
    assert!(form.is_invalid("weight"));
    assert!(form.is_touched("email"));
}

#[test]
fn test_submit_success_returns_value_snapshot() {
    let mut form = Form::new(
        vec![FieldSpec::new("name", "Name", FieldKind::Text).rules(RuleSet::new().required())],
        values(&[("name", Value::String("Ada".into()))]),
    )
    .unwrap();

    let snapshot = form.attempt_submit().unwrap();
    assert_eq!(snapshot.get("name"), Some(&Value::String("Ada".into())));
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn test_submitted_event_only_fires_on_success() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.on_event(move |event| match event {
        FormEvent::Submitted(snapshot) => {
            let name = snapshot.get("name").cloned().unwrap_or_default();
            sink.borrow_mut().push(format!("submitted {name}"));
        }
        FormEvent::Cancelled => sink.borrow_mut().push("cancelled".into()),
    });

    assert!(form.attempt_submit().is_err());
    assert!(seen.borrow().is_empty());

    form.set_input("name", "Ada");
    form.set_input("email", "ada@example.com");
    form.set_input("weight", "12.5");
    assert!(form.attempt_submit().is_ok());

    form.cancel();
    assert_eq!(*seen.borrow(), vec!["submitted Ada", "cancelled"]);
}

#[test]
fn test_handlers_fire_in_registration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));

    let mut form = Form::new(
        vec![FieldSpec::new("name", "Name", FieldKind::Text)],
        HashMap::new(),
    )
    .unwrap();
    let first = Rc::clone(&seen);
    form.on_event(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&seen);
    form.on_event(move |_| second.borrow_mut().push("second"));

    form.cancel();
    assert_eq!(*seen.borrow(), vec!["first", "second"]);
}

#[test]
fn test_number_input_parses_through_kind_handler() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();

    form.set_input("weight", "42");
    assert_eq!(form.value("weight"), &Value::Int(42));

    form.set_input("weight", "12.5");
    assert_eq!(form.value("weight"), &Value::Float(12.5));

    // Invalid numeric text degrades to Null, caught by `required`.
    form.set_input("weight", "heavy");
    assert_eq!(form.value("weight"), &Value::Null);
    assert_eq!(form.error_for("weight"), Some(ErrorKind::Required));
}

#[test]
fn test_dotted_keys_are_opaque_identifiers() {
    let fields = vec![
        FieldSpec::new("dimensions.length", "Length (cm)", FieldKind::Number)
            .rules(RuleSet::new().required().min(0.0)),
    ];
    let mut form = Form::new(fields, HashMap::new()).unwrap();
    form.set_input("dimensions.length", "120");

    let snapshot = form.attempt_submit().unwrap();
    assert_eq!(snapshot.get("dimensions.length"), Some(&Value::Int(120)));
}

#[test]
fn test_select_membership_is_not_validated() {
    let fields = vec![
        FieldSpec::new("type", "Vehicle Type", FieldKind::Select)
            .rules(RuleSet::new().required())
            .options(vec![
                SelectOption::new("TRUCK", "Truck"),
                SelectOption::new("VAN", "Van"),
            ]),
    ];
    let mut form = Form::new(fields, HashMap::new()).unwrap();

    // Emptiness is still policed by `required`...
    form.set_input("type", "");
    assert_eq!(form.error_for("type"), Some(ErrorKind::Required));

    // ...but membership in the options list is rendering metadata only.
    form.set_input("type", "HOVERCRAFT");
    assert_eq!(form.error_for("type"), None);
}

#[test]
fn test_error_messages_use_label_and_bound() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_value("name", "A");
    form.set_value("email", "nope");
    form.set_value("weight", -1.0);

    assert_eq!(
        form.error_message("name").unwrap(),
        "First Name must be at least 2 characters"
    );
    assert_eq!(
        form.error_message("email").unwrap(),
        "Please enter a valid email address"
    );
    assert_eq!(
        form.error_message("weight").unwrap(),
        "Weight (kg) must be at least 0"
    );

    form.set_value("weight", 1.0);
    assert_eq!(form.error_message("weight"), None);
}

#[test]
fn test_initial_values_seed_fields_and_extras_are_dropped() {
    let form = Form::new(
        customer_fields(),
        values(&[
            ("name", Value::String("Grace".into())),
            ("unrelated", Value::Int(7)),
        ]),
    )
    .unwrap();

    assert_eq!(form.value("name"), &Value::String("Grace".into()));
    assert_eq!(form.value("unrelated"), &Value::Null);
    assert!(!form.values().contains_key("unrelated"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_value("ghost", 1i64);
    form.mark_touched("ghost");
    assert_eq!(form.error_for("ghost"), None);
    assert!(!form.is_invalid("ghost"));
    assert!(!form.values().contains_key("ghost"));
}

#[test]
fn test_input_text_round_trip() {
    let mut form = Form::new(customer_fields(), HashMap::new()).unwrap();
    form.set_input("weight", "12.5");
    assert_eq!(form.input_text("weight"), "12.5");
    assert_eq!(form.input_text("name"), "");
}
