//! Generic entity list controller.

use std::marker::PhantomData;

use gridform::error::SpecError;
use gridform::model::Record;
use gridform::table::TableView;
use log::warn;
use uuid::Uuid;

use crate::client::EntityClient;
use crate::context::AdminContext;
use crate::error::ServiceError;
use crate::model::TableEntity;

/// A searched/sorted/paginated list over one entity collection.
///
/// Owns the [`TableView`] and the entity's client; refreshing after a
/// mutation preserves the user's page, filter and sort (the view's
/// snapshot-consistency guarantee).
pub struct ListScreen<T, C> {
    client: C,
    view: TableView,
    _entity: PhantomData<T>,
}

impl<T: TableEntity, C: EntityClient<T>> ListScreen<T, C> {
    /// Builds the screen with the entity's column set.
    pub fn new(client: C) -> Result<Self, SpecError> {
        Ok(Self {
            client,
            view: TableView::new(T::columns())?,
            _entity: PhantomData,
        })
    }

    /// The underlying table view.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Mutable access for search/sort/page interaction.
    pub fn view_mut(&mut self) -> &mut TableView {
        &mut self.view
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Reloads the collection through the client.
    ///
    /// A failure envelope leaves the current rows in place and queues an
    /// error notification; an empty collection is a normal result.
    pub fn refresh(&mut self, cx: &mut AdminContext) {
        cx.loading.begin();
        let response = self.client.get_all();
        cx.loading.end();

        match response.data {
            Some(items) if response.is_successful => {
                let records = items.iter().map(TableEntity::to_record).collect();
                self.view.replace_rows(records);
            }
            _ => {
                warn!(
                    "loading {} failed: {}",
                    T::COLLECTION,
                    response.failure_message().unwrap_or("no error payload")
                );
                cx.notifications
                    .error(format!("Failed to load {}", T::COLLECTION));
            }
        }
    }

    /// Deletes the entity behind a record, then refreshes.
    ///
    /// Returns `Ok(true)` when the backend accepted the deletion. A failure
    /// envelope queues an error notification and returns `Ok(false)`; only a
    /// record that cannot address an entity at all is an `Err`.
    pub fn delete(&mut self, record: &Record, cx: &mut AdminContext) -> Result<bool, ServiceError> {
        let raw = record.get_str("id").ok_or(ServiceError::MissingId)?;
        let id = Uuid::parse_str(raw).map_err(|_| ServiceError::invalid_id(raw))?;

        cx.loading.begin();
        let response = self.client.delete(id);
        cx.loading.end();

        if response.is_successful {
            cx.notifications
                .success(format!("{} deleted successfully", T::NAME));
            self.refresh(cx);
            Ok(true)
        } else {
            cx.notifications.error(
                response
                    .failure_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Failed to delete {}", T::NAME.to_lowercase())),
            );
            Ok(false)
        }
    }
}
