//! In-memory entity client.

use uuid::Uuid;

use super::envelope::ApiResponse;
use super::{EntityClient, EntityRow};

/// An [`EntityClient`] backed by a plain vector.
///
/// Used wherever the real REST collaborator is out of scope: tests, examples
/// and the screen glue. Unknown ids answer with the failure envelope the
/// backend would produce.
#[derive(Debug, Clone)]
pub struct MemoryClient<T> {
    label: &'static str,
    items: Vec<T>,
}

impl<T: EntityRow> MemoryClient<T> {
    /// Creates an empty client. `label` names the entity in failure
    /// messages ("customer", "shipment", ...).
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            items: Vec::new(),
        }
    }

    /// Creates a client seeded with items; items without an id get one.
    pub fn seeded(label: &'static str, items: Vec<T>) -> Self {
        let mut client = Self::new(label);
        for mut item in items {
            if item.id().is_none() {
                item.set_id(Uuid::new_v4());
            }
            client.items.push(item);
        }
        client
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }

    fn not_found(&self, id: Uuid) -> ApiResponse<String> {
        ApiResponse::fail(
            format!("{} {} not found", self.label, id),
            vec![format!("no {} exists with the given id", self.label)],
        )
    }
}

impl<T: EntityRow> EntityClient<T> for MemoryClient<T> {
    fn get_all(&self) -> ApiResponse<Vec<T>> {
        ApiResponse::ok(self.items.clone())
    }

    fn get_by_id(&self, id: Uuid) -> ApiResponse<T> {
        match self.position(id) {
            Some(index) => ApiResponse::ok(self.items[index].clone()),
            None => ApiResponse::fail(
                format!("{} {} not found", self.label, id),
                vec![format!("no {} exists with the given id", self.label)],
            ),
        }
    }

    fn create(&mut self, mut item: T) -> ApiResponse<String> {
        let id = item.id().unwrap_or_else(Uuid::new_v4);
        item.set_id(id);
        self.items.push(item);
        ApiResponse::ok(id.to_string())
    }

    fn update(&mut self, id: Uuid, mut item: T) -> ApiResponse<String> {
        match self.position(id) {
            Some(index) => {
                item.set_id(id);
                self.items[index] = item;
                ApiResponse::ok(id.to_string())
            }
            None => self.not_found(id),
        }
    }

    fn delete(&mut self, id: Uuid) -> ApiResponse<String> {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                ApiResponse::ok(id.to_string())
            }
            None => self.not_found(id),
        }
    }
}
