//! Field specifications

use serde::Deserialize;
use serde::Serialize;

use crate::error::SpecError;

/// Input control kind for a field.
///
/// The kind selects a parser/formatter pair from the dispatch table in
/// [`handler`](FieldKind::handler); validation rules are orthogonal and live
/// in [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Select,
    Textarea,
}

/// One choice of a select field.
///
/// Options are rendering metadata: the engine does not check that a
/// submitted value is a member (a `required` rule still polices emptiness).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Validation rules for one field, each independently optional.
///
/// # Example
///
/// ```
/// use gridform::form::RuleSet;
///
/// let rules = RuleSet::new().required().min_length(10).max_length(20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuleSet {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be non-empty.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// A non-empty value must be a well-formed email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Minimum string length, in characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Maximum string length, in characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Minimum numeric value.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum numeric value.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Declarative metadata for one form field.
///
/// `key` may be a dotted path such as `"dimensions.length"`; the engine
/// treats it as an opaque flat identifier. Reassembling flat keys into
/// nested structures is the owning form orchestration's responsibility.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub rules: RuleSet,
    pub options: Vec<SelectOption>,
}

impl FieldSpec {
    /// Creates a field with no rules and no options.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            rules: RuleSet::default(),
            options: Vec::new(),
        }
    }

    /// Sets the validation rules.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the select options.
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Fail-fast structural checks, run at form construction.
    pub(super) fn validate(&self) -> Result<(), SpecError> {
        if self.key.is_empty() {
            return Err(SpecError::EmptyKey);
        }
        if let (Some(min), Some(max)) = (self.rules.min, self.rules.max)
            && min > max
        {
            return Err(SpecError::InvalidBounds {
                key: self.key.clone(),
                min,
                max,
            });
        }
        if let (Some(min), Some(max)) = (self.rules.min_length, self.rules.max_length)
            && min > max
        {
            return Err(SpecError::InvalidLengthBounds {
                key: self.key.clone(),
                min,
                max,
            });
        }
        Ok(())
    }
}
