//! Schema-driven form engine: declarative field specs, live validation,
//! gated submission.
//!
//! [`Form`] compiles a list of [`FieldSpec`]s into per-field value, touched
//! and error state. Errors are computed eagerly but only *reported* once a
//! field has been touched (blurred, or swept up by a submit attempt), so a
//! pristine form never shouts at the user.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use gridform::form::{FieldKind, FieldSpec, Form, RuleSet};
//!
//! let fields = vec![
//!     FieldSpec::new("name", "First Name", FieldKind::Text)
//!         .rules(RuleSet::new().required().min_length(2)),
//! ];
//! let mut form = Form::new(fields, HashMap::new()).unwrap();
//! assert!(form.attempt_submit().is_err());
//! form.set_input("name", "Ada");
//! assert!(form.attempt_submit().is_ok());
//! ```

mod events;
mod kind;
mod rules;
mod spec;
mod state;

pub use events::FormEvent;
pub use kind::KindHandler;
pub use rules::{ErrorKind, FieldError};
pub use spec::{FieldKind, FieldSpec, RuleSet, SelectOption};
pub use state::Form;
