//! Entity client boundary.
//!
//! Every backend collaborator exposes the same five operations wrapped in a
//! uniform [`ApiResponse`] envelope. The trait is parametric per entity; no
//! shared base type, no inheritance. Transport is out of scope here; the
//! in-memory [`MemoryClient`] is the stand-in used by tests, examples and
//! the screens.

mod envelope;
mod memory;

use uuid::Uuid;

pub use envelope::{ApiError, ApiResponse};
pub use memory::MemoryClient;

/// Row-level identity for entities a client can store.
pub trait EntityRow: Clone {
    /// The entity id, if it has been assigned.
    fn id(&self) -> Option<Uuid>;

    /// Assigns the entity id.
    fn set_id(&mut self, id: Uuid);
}

/// Uniform CRUD surface of one backend collaborator.
///
/// Write operations answer with the affected id as a string, mirroring the
/// REST backend's envelope payloads.
pub trait EntityClient<T> {
    fn get_all(&self) -> ApiResponse<Vec<T>>;
    fn get_by_id(&self, id: Uuid) -> ApiResponse<T>;
    fn create(&mut self, item: T) -> ApiResponse<String>;
    fn update(&mut self, id: Uuid, item: T) -> ApiResponse<String>;
    fn delete(&mut self, id: Uuid) -> ApiResponse<String>;
}
