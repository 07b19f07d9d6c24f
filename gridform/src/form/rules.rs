//! Validator evaluation and error kinds.

use std::fmt;

use crate::model::Value;

use super::spec::RuleSet;

/// Category of a validation failure.
///
/// At most one surfaces per field at a time; evaluation order in
/// [`evaluate`] decides which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Email,
    MinLength,
    MaxLength,
    Min,
    Max,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Required => "required",
            ErrorKind::Email => "email",
            ErrorKind::MinLength => "min_length",
            ErrorKind::MaxLength => "max_length",
            ErrorKind::Min => "min",
            ErrorKind::Max => "max",
        };
        f.write_str(name)
    }
}

/// A field that failed validation during a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: String,
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn new(key: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.kind)
    }
}

/// Evaluates a rule set against a value. First failing rule wins.
///
/// Only `required` polices presence: every other rule passes vacuously on an
/// empty value, and on values of the wrong shape for the rule (length rules
/// on non-strings, numeric bounds on non-numbers). An optional email field
/// left blank is therefore valid.
pub(super) fn evaluate(rules: &RuleSet, value: &Value) -> Option<ErrorKind> {
    if rules.required && value.is_empty() {
        return Some(ErrorKind::Required);
    }
    if value.is_empty() {
        return None;
    }

    if rules.email
        && let Some(text) = value.as_str()
        && !email_address::EmailAddress::is_valid(text)
    {
        return Some(ErrorKind::Email);
    }

    if let Some(min) = rules.min_length
        && let Some(text) = value.as_str()
        && text.chars().count() < min
    {
        return Some(ErrorKind::MinLength);
    }

    if let Some(max) = rules.max_length
        && let Some(text) = value.as_str()
        && text.chars().count() > max
    {
        return Some(ErrorKind::MaxLength);
    }

    if let Some(min) = rules.min
        && let Some(n) = numeric(value)
        && n < min
    {
        return Some(ErrorKind::Min);
    }

    if let Some(max) = rules.max
        && let Some(n) = numeric(value)
        && n > max
    {
        return Some(ErrorKind::Max);
    }

    None
}

/// Numeric view for the bound rules: native numbers, or strings that parse
/// as one (the loose coercion number inputs hand a form).
fn numeric(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_wins_over_min_length() {
        let rules = RuleSet::new().required().min_length(5);
        assert_eq!(
            evaluate(&rules, &Value::String(String::new())),
            Some(ErrorKind::Required)
        );
    }

    #[test]
    fn test_optional_empty_is_valid() {
        let rules = RuleSet::new().email().min_length(5);
        assert_eq!(evaluate(&rules, &Value::Null), None);
        assert_eq!(evaluate(&rules, &Value::String("  ".into())), None);
    }

    #[test]
    fn test_numeric_bounds_parse_strings() {
        let rules = RuleSet::new().min(0.0);
        assert_eq!(
            evaluate(&rules, &Value::String("-3".into())),
            Some(ErrorKind::Min)
        );
        assert_eq!(evaluate(&rules, &Value::String("oops".into())), None);
    }
}
