//! Shipment administration domain.
//!
//! Entity models for a courier back office (branches, customers, shipments,
//! vehicles), their projections into the generic `gridform` engines, and the
//! in-process stand-ins for the REST collaborators: the response envelope,
//! per-entity clients, and explicitly passed context services.

pub mod client;
pub mod context;
pub mod error;
pub mod model;
pub mod screens;

pub use error::ServiceError;
