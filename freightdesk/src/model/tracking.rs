//! Shipment tracking entity

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::client::EntityRow;

use super::{Entity, ShipmentStatus};

/// One event in a shipment's tracking history.
///
/// Tracking renders as a timeline rather than a table, so the entity has no
/// column set; the details page reads the history straight off the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentTracking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub shipment_id: Uuid,
    pub status: ShipmentStatus,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl EntityRow for ShipmentTracking {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Entity for ShipmentTracking {
    const NAME: &'static str = "Tracking entry";
    const COLLECTION: &'static str = "shipment-trackings";
}
