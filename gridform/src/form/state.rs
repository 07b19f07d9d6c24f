//! Form state: values, touched set, per-field errors.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::error::SpecError;
use crate::model::Value;

use super::events::{FormEvent, FormEventHandler};
use super::rules::{self, ErrorKind, FieldError};
use super::spec::FieldSpec;

/// Live-validated input state compiled from a list of [`FieldSpec`]s.
///
/// Field errors are evaluated eagerly (at construction and again on every
/// value change) but stay latent until the field is touched. A submit
/// attempt touches everything, so latent errors become visible exactly when
/// the user asks to proceed.
pub struct Form {
    fields: Vec<FieldSpec>,
    values: HashMap<String, Value>,
    touched: HashSet<String>,
    errors: HashMap<String, ErrorKind>,
    handlers: Vec<FormEventHandler>,
}

impl Form {
    /// Compiles the field specs and seeds values from `initial_values`.
    ///
    /// Fields missing from `initial_values` start as [`Value::Null`]; extra
    /// entries that match no field are dropped. Malformed specs (empty or
    /// duplicate keys, inverted bounds) fail here rather than at submit time.
    pub fn new(
        fields: Vec<FieldSpec>,
        initial_values: HashMap<String, Value>,
    ) -> Result<Self, SpecError> {
        let mut seen = HashSet::new();
        for field in &fields {
            field.validate()?;
            if !seen.insert(field.key.as_str()) {
                return Err(SpecError::duplicate(&field.key));
            }
        }

        let mut initial_values = initial_values;
        let values = fields
            .iter()
            .map(|field| {
                let value = initial_values.remove(&field.key).unwrap_or(Value::Null);
                (field.key.clone(), value)
            })
            .collect();

        let mut form = Self {
            fields,
            values,
            touched: HashSet::new(),
            errors: HashMap::new(),
            handlers: Vec::new(),
        };
        form.revalidate_all();
        Ok(form)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The field specs this form was built with, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Current value of a field. Unknown keys read as `Null`.
    pub fn value(&self, key: &str) -> &Value {
        self.values.get(key).unwrap_or(&Value::Null)
    }

    /// The full values mapping.
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// Current value rendered back to input text through the field kind's
    /// formatter. Unknown keys render empty.
    pub fn input_text(&self, key: &str) -> String {
        match self.field(key) {
            Some(field) => (field.kind.handler().format)(self.value(key)),
            None => String::new(),
        }
    }

    /// Whether the field has been touched (blurred or swept by a submit).
    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    /// Current error for a field, regardless of touch state.
    pub fn error_for(&self, key: &str) -> Option<ErrorKind> {
        self.errors.get(key).copied()
    }

    /// Whether the field should be presented as invalid: it has failed
    /// validation *and* the user has interacted with it.
    pub fn is_invalid(&self, key: &str) -> bool {
        self.errors.contains_key(key) && self.touched.contains(key)
    }

    /// Whether every field currently passes validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable message for the field's current error, assembled from
    /// the field label and the violated rule's bound.
    pub fn error_message(&self, key: &str) -> Option<String> {
        let field = self.field(key)?;
        let message = match self.errors.get(key)? {
            ErrorKind::Required => format!("{} is required", field.label),
            ErrorKind::Email => "Please enter a valid email address".to_string(),
            ErrorKind::MinLength => format!(
                "{} must be at least {} characters",
                field.label,
                field.rules.min_length.unwrap_or_default()
            ),
            ErrorKind::MaxLength => format!(
                "{} cannot exceed {} characters",
                field.label,
                field.rules.max_length.unwrap_or_default()
            ),
            ErrorKind::Min => format!(
                "{} must be at least {}",
                field.label,
                format_bound(field.rules.min.unwrap_or_default())
            ),
            ErrorKind::Max => format!(
                "{} cannot exceed {}",
                field.label,
                format_bound(field.rules.max.unwrap_or_default())
            ),
        };
        Some(message)
    }

    /// Registers an event handler. Handlers fire synchronously, in
    /// registration order, within the call that emits the event.
    pub fn on_event(&mut self, handler: impl FnMut(&FormEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Stores a value and re-evaluates that field's error.
    ///
    /// Does not mark the field touched; a value pushed programmatically
    /// should not surface an error the user never earned. Unknown keys log
    /// a warning and change nothing.
    pub fn set_value(&mut self, key: &str, value: impl Into<Value>) {
        if self.field(key).is_none() {
            warn!("set_value on unknown field '{key}'");
            return;
        }
        self.values.insert(key.to_string(), value.into());
        self.revalidate(key);
    }

    /// Parses raw input text through the field kind's parser, then stores it.
    pub fn set_input(&mut self, key: &str, raw: &str) {
        let Some(field) = self.field(key) else {
            warn!("set_input on unknown field '{key}'");
            return;
        };
        let value = (field.kind.handler().parse)(raw);
        self.set_value(key, value);
    }

    /// Marks a field touched. Called on first loss of focus.
    pub fn mark_touched(&mut self, key: &str) {
        if self.field(key).is_none() {
            warn!("mark_touched on unknown field '{key}'");
            return;
        }
        self.touched.insert(key.to_string());
    }

    /// Attempts to submit the form.
    ///
    /// Marks every field touched (latent errors become visible) and
    /// re-evaluates everything. On success returns a snapshot of the values
    /// and emits [`FormEvent::Submitted`]; on failure returns the failing
    /// fields in declaration order and has no other effect.
    pub fn attempt_submit(&mut self) -> Result<HashMap<String, Value>, Vec<FieldError>> {
        for field in &self.fields {
            self.touched.insert(field.key.clone());
        }
        self.revalidate_all();

        if self.errors.is_empty() {
            let snapshot = self.values.clone();
            self.emit(FormEvent::Submitted(snapshot.clone()));
            Ok(snapshot)
        } else {
            Err(self
                .fields
                .iter()
                .filter_map(|field| {
                    self.errors
                        .get(&field.key)
                        .map(|kind| FieldError::new(&field.key, *kind))
                })
                .collect())
        }
    }

    /// Dismisses the form: emits [`FormEvent::Cancelled`], state untouched.
    pub fn cancel(&mut self) {
        self.emit(FormEvent::Cancelled);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    fn revalidate(&mut self, key: &str) {
        let Some(rules) = self.field(key).map(|field| field.rules) else {
            return;
        };
        let value = self.values.get(key).unwrap_or(&Value::Null);
        match rules::evaluate(&rules, value) {
            Some(kind) => {
                self.errors.insert(key.to_string(), kind);
            }
            None => {
                self.errors.remove(key);
            }
        }
    }

    fn revalidate_all(&mut self) {
        self.errors = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = self.values.get(&field.key).unwrap_or(&Value::Null);
                rules::evaluate(&field.rules, value).map(|kind| (field.key.clone(), kind))
            })
            .collect();
    }

    fn emit(&mut self, event: FormEvent) {
        for handler in &mut self.handlers {
            handler(&event);
        }
    }
}

/// Bounds render without a trailing `.0` when integral.
fn format_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        format!("{bound}")
    }
}
