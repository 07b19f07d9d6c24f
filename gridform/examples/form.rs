//! Form demo - declarative fields, live validation, gated submission.
//!
//! Run with `cargo run --example form`.

use std::collections::HashMap;

use gridform::form::{FieldKind, FieldSpec, Form, RuleSet, SelectOption};

fn report(form: &Form) {
    for field in form.fields() {
        match form.error_message(&field.key) {
            Some(message) if form.is_touched(&field.key) => {
                println!("  {} -> {message}", field.key);
            }
            _ => println!("  {} -> ok", field.key),
        }
    }
}

fn main() {
    let fields = vec![
        FieldSpec::new("name", "First Name", FieldKind::Text)
            .rules(RuleSet::new().required().min_length(2).max_length(50)),
        FieldSpec::new("email", "Email", FieldKind::Email).rules(RuleSet::new().required().email()),
        FieldSpec::new("branchId", "Branch", FieldKind::Select)
            .rules(RuleSet::new().required())
            .options(vec![
                SelectOption::new("b-1", "North Hub"),
                SelectOption::new("b-2", "South Hub"),
            ]),
        FieldSpec::new("weight", "Weight (kg)", FieldKind::Number)
            .rules(RuleSet::new().required().min(0.0)),
    ];

    let mut form = Form::new(fields, HashMap::new()).expect("valid fields");

    form.set_input("name", "A");
    form.set_input("email", "not-an-email");

    println!("== first submit attempt ==");
    match form.attempt_submit() {
        Ok(_) => unreachable!("form is invalid"),
        Err(errors) => println!("rejected with {} field errors", errors.len()),
    }
    report(&form);

    form.set_input("name", "Ada");
    form.set_input("email", "ada@example.com");
    form.set_input("branchId", "b-2");
    form.set_input("weight", "12.5");

    println!("\n== second submit attempt ==");
    match form.attempt_submit() {
        Ok(snapshot) => {
            println!("accepted:");
            let mut keys: Vec<_> = snapshot.keys().collect();
            keys.sort();
            for key in keys {
                println!("  {key} = {}", snapshot[key]);
            }
        }
        Err(_) => unreachable!("form is valid"),
    }
}
