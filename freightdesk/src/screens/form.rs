//! Generic entity form controller.

use gridform::error::SpecError;
use gridform::form::{FieldError, FieldSpec, Form};
use log::warn;

use crate::client::{EntityClient, EntityRow};
use crate::context::AdminContext;
use crate::error::ServiceError;
use crate::model::FormEntity;

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid and accepted by the backend; carries the affected id.
    Saved(String),
    /// Blocked by field validation; errors listed in field order.
    Invalid(Vec<FieldError>),
    /// Valid but refused by the backend (an error notification is queued).
    Rejected,
}

/// A create-or-edit form over one entity.
///
/// The caller builds the field set, including any select options that need
/// sibling collections loaded first; the screen owns the [`Form`] plus the
/// entity client.
pub struct FormScreen<T, C> {
    client: C,
    form: Form,
    existing: Option<T>,
}

impl<T: FormEntity, C: EntityClient<T>> FormScreen<T, C> {
    /// Builds a create form with blank values.
    pub fn create(client: C, fields: Vec<FieldSpec>) -> Result<Self, SpecError> {
        Ok(Self {
            client,
            form: Form::new(fields, Default::default())?,
            existing: None,
        })
    }

    /// Builds an edit form seeded from the entity's flattened values.
    pub fn edit(client: C, fields: Vec<FieldSpec>, entity: T) -> Result<Self, SpecError> {
        Ok(Self {
            form: Form::new(fields, entity.form_values())?,
            client,
            existing: Some(entity),
        })
    }

    /// The underlying form engine.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mutable access for field interaction.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Whether this screen edits an existing entity.
    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    /// Runs the gated submit: validate, rebuild the entity, create or update
    /// through the client, and queue the outcome notification.
    pub fn submit(&mut self, cx: &mut AdminContext) -> Result<SubmitOutcome, ServiceError> {
        let values = match self.form.attempt_submit() {
            Ok(values) => values,
            Err(errors) => return Ok(SubmitOutcome::Invalid(errors)),
        };

        let entity = T::from_values(&values, self.existing.as_ref())?;

        cx.loading.begin();
        let response = match self.existing.as_ref().and_then(EntityRow::id) {
            Some(id) => self.client.update(id, entity),
            None => self.client.create(entity),
        };
        cx.loading.end();

        if response.is_successful {
            let action = if self.is_edit() { "updated" } else { "created" };
            cx.notifications
                .success(format!("{} {action} successfully", T::NAME));
            Ok(SubmitOutcome::Saved(response.data.unwrap_or_default()))
        } else {
            warn!(
                "saving {} failed: {}",
                T::NAME,
                response.failure_message().unwrap_or("no error payload")
            );
            cx.notifications.error(
                response
                    .failure_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Failed to save {}", T::NAME.to_lowercase())),
            );
            Ok(SubmitOutcome::Rejected)
        }
    }

    /// Dismisses the form without submitting.
    pub fn cancel(&mut self) {
        self.form.cancel();
    }
}
