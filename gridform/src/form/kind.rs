//! Per-kind parser/formatter dispatch.

use crate::model::Value;

use super::spec::FieldKind;

/// Parser and formatter pair for one field kind.
///
/// The dispatch table in [`FieldKind::handler`] is the only place that
/// branches on the kind: adding a kind means adding one handler entry, not
/// sprinkling new match arms through the engine.
#[derive(Debug, Clone, Copy)]
pub struct KindHandler {
    /// Turns raw input text into a typed value.
    pub parse: fn(&str) -> Value,
    /// Turns a stored value back into input text.
    pub format: fn(&Value) -> String,
}

const TEXT: KindHandler = KindHandler {
    parse: parse_text,
    format: format_value,
};

const NUMBER: KindHandler = KindHandler {
    parse: parse_number,
    format: format_value,
};

impl FieldKind {
    /// Dispatch table entry for this kind.
    pub fn handler(self) -> KindHandler {
        match self {
            // Select stores the chosen option value verbatim, like text.
            FieldKind::Text | FieldKind::Email | FieldKind::Textarea | FieldKind::Select => TEXT,
            FieldKind::Number => NUMBER,
        }
    }
}

fn parse_text(raw: &str) -> Value {
    Value::String(raw.to_string())
}

/// Integers stay integral; anything unparseable becomes `Null`, which is
/// what a number input control hands the form for blank or invalid text.
fn parse_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Int(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) => Value::Float(n),
        Err(_) => Value::Null,
    }
}

fn format_value(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("42"), Value::Int(42));
        assert_eq!(parse_number(" 12.5 "), Value::Float(12.5));
        assert_eq!(parse_number(""), Value::Null);
        assert_eq!(parse_number("abc"), Value::Null);
    }

    #[test]
    fn test_text_round_trip() {
        let handler = FieldKind::Text.handler();
        let value = (handler.parse)("Central Depot");
        assert_eq!((handler.format)(&value), "Central Depot");
    }
}
