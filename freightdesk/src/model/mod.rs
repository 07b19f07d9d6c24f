//! Domain entities and their projections into the gridform engines.
//!
//! Each entity carries the column set of its list page, the field set of its
//! form page, and the conversions between nested structs and the engines'
//! flat, string-keyed values. Flattening dotted keys (`"dimensions.length"`)
//! happens here, never inside the engines.

mod branch;
mod customer;
mod shipment;
mod tracking;
mod vehicle;

use std::collections::HashMap;

use gridform::model::{Record, Value};
use gridform::table::ColumnSpec;
use uuid::Uuid;

use crate::client::EntityRow;
use crate::error::ServiceError;

pub use branch::Branch;
pub use customer::Customer;
pub use shipment::{Dimensions, Shipment, ShipmentStatus};
pub use tracking::ShipmentTracking;
pub use vehicle::{Vehicle, VehicleKind, VehicleStatus};

/// Naming shared by the screens' notification messages.
pub trait Entity: EntityRow {
    /// Singular display name ("Customer").
    const NAME: &'static str;
    /// Plural collection name ("customers").
    const COLLECTION: &'static str;
}

/// Projection of an entity into the table engine.
pub trait TableEntity: Entity {
    /// The list page's column set.
    fn columns() -> Vec<ColumnSpec>;

    /// Flattens the entity into an opaque record, keyed by the wire names
    /// the columns reference.
    fn to_record(&self) -> Record;
}

/// Round trip between an entity and the form engine's flat values.
pub trait FormEntity: Entity + Sized {
    /// Flattens the entity into initial form values.
    fn form_values(&self) -> HashMap<String, Value>;

    /// Rebuilds the entity from a validated value snapshot. `existing`
    /// supplies the fields the form does not edit (id, status, timestamps)
    /// when updating.
    fn from_values(
        values: &HashMap<String, Value>,
        existing: Option<&Self>,
    ) -> Result<Self, ServiceError>;
}

// -----------------------------------------------------------------------------
// Value extraction helpers shared by the from_values implementations
// -----------------------------------------------------------------------------

pub(crate) fn require_str<'a>(
    values: &'a HashMap<String, Value>,
    field: &str,
) -> Result<&'a str, ServiceError> {
    values
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ServiceError::bad_field(field))
}

pub(crate) fn require_f64(
    values: &HashMap<String, Value>,
    field: &str,
) -> Result<f64, ServiceError> {
    values
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ServiceError::bad_field(field))
}

pub(crate) fn require_uuid(
    values: &HashMap<String, Value>,
    field: &str,
) -> Result<Uuid, ServiceError> {
    let raw = require_str(values, field)?;
    Uuid::parse_str(raw).map_err(|_| ServiceError::bad_field(field))
}

/// Record value for an optional id.
pub(crate) fn id_value(id: Option<Uuid>) -> Value {
    match id {
        Some(id) => Value::String(id.to_string()),
        None => Value::Null,
    }
}

/// Record value for an optional timestamp, as an ISO-8601 string.
pub(crate) fn timestamp_value(ts: Option<chrono::DateTime<chrono::Utc>>) -> Value {
    match ts {
        Some(ts) => Value::String(ts.to_rfc3339()),
        None => Value::Null,
    }
}
