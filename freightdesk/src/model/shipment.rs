//! Shipment entity

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gridform::form::{FieldKind, FieldSpec, RuleSet, SelectOption};
use gridform::model::{Record, Value};
use gridform::table::ColumnSpec;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::client::EntityRow;
use crate::error::ServiceError;

use super::{Branch, Customer, Entity, FormEntity, TableEntity};
use super::{id_value, require_f64, require_str, require_uuid};

/// Lifecycle state of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// Wire name, as the backend sends it.
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "PENDING",
            ShipmentStatus::InTransit => "IN_TRANSIT",
            ShipmentStatus::Delivered => "DELIVERED",
            ShipmentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// Parcel dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// The `LxWxH` display form the list page shows.
    pub fn formatted(&self) -> String {
        format!("{}x{}x{}", self.length, self.width, self.height)
    }
}

/// A parcel moving between two branches on behalf of two customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub source_branch_id: Uuid,
    pub destination_branch_id: Uuid,
    pub content: String,
    pub status: ShipmentStatus,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Shipment {
    /// The shipment form's field set.
    ///
    /// Customer and branch collections feed the select options, and the
    /// dimension fields use dotted keys the engine treats as opaque; this
    /// module owns their reassembly in [`FormEntity::from_values`].
    pub fn form_fields(customers: &[Customer], branches: &[Branch]) -> Vec<FieldSpec> {
        let customer_options: Vec<SelectOption> = customers
            .iter()
            .filter_map(|c| {
                c.id.map(|id| SelectOption::new(id.to_string(), c.full_name()))
            })
            .collect();
        let branch_options: Vec<SelectOption> = branches
            .iter()
            .filter_map(|b| {
                b.id.map(|id| SelectOption::new(id.to_string(), b.name.clone()))
            })
            .collect();

        vec![
            FieldSpec::new("senderId", "Sender", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(customer_options.clone()),
            FieldSpec::new("receiverId", "Receiver", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(customer_options),
            FieldSpec::new("sourceBranchId", "Source Branch", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(branch_options.clone()),
            FieldSpec::new("destinationBranchId", "Destination Branch", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(branch_options),
            FieldSpec::new("content", "Content Description", FieldKind::Textarea)
                .rules(RuleSet::new().required().max_length(500)),
            FieldSpec::new("weight", "Weight (kg)", FieldKind::Number)
                .rules(RuleSet::new().required().min(0.0)),
            FieldSpec::new("dimensions.length", "Length (cm)", FieldKind::Number)
                .rules(RuleSet::new().required().min(0.0)),
            FieldSpec::new("dimensions.width", "Width (cm)", FieldKind::Number)
                .rules(RuleSet::new().required().min(0.0)),
            FieldSpec::new("dimensions.height", "Height (cm)", FieldKind::Number)
                .rules(RuleSet::new().required().min(0.0)),
        ]
    }
}

impl EntityRow for Shipment {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Entity for Shipment {
    const NAME: &'static str = "Shipment";
    const COLLECTION: &'static str = "shipments";
}

impl TableEntity for Shipment {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("id", "ID").sortable(),
            ColumnSpec::new("content", "Content").sortable(),
            ColumnSpec::new("status", "Status").sortable(),
            ColumnSpec::new("weight", "Weight")
                .sortable()
                .formatter(|v| format!("{v} kg")),
            ColumnSpec::new("dimensions", "Dimensions"),
        ]
    }

    fn to_record(&self) -> Record {
        Record::new()
            .set("id", id_value(self.id))
            .set("content", self.content.as_str())
            .set("status", self.status.as_str())
            .set("weight", self.weight)
            .set("dimensions", self.dimensions.formatted())
            .set("timestamp", self.timestamp.to_rfc3339())
    }
}

impl FormEntity for Shipment {
    fn form_values(&self) -> HashMap<String, Value> {
        HashMap::from([
            (
                "senderId".to_string(),
                Value::String(self.sender_id.to_string()),
            ),
            (
                "receiverId".to_string(),
                Value::String(self.receiver_id.to_string()),
            ),
            (
                "sourceBranchId".to_string(),
                Value::String(self.source_branch_id.to_string()),
            ),
            (
                "destinationBranchId".to_string(),
                Value::String(self.destination_branch_id.to_string()),
            ),
            ("content".to_string(), Value::from(self.content.as_str())),
            ("weight".to_string(), Value::Float(self.weight)),
            (
                "dimensions.length".to_string(),
                Value::Float(self.dimensions.length),
            ),
            (
                "dimensions.width".to_string(),
                Value::Float(self.dimensions.width),
            ),
            (
                "dimensions.height".to_string(),
                Value::Float(self.dimensions.height),
            ),
        ])
    }

    fn from_values(
        values: &HashMap<String, Value>,
        existing: Option<&Self>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            id: existing.and_then(|s| s.id),
            sender_id: require_uuid(values, "senderId")?,
            receiver_id: require_uuid(values, "receiverId")?,
            source_branch_id: require_uuid(values, "sourceBranchId")?,
            destination_branch_id: require_uuid(values, "destinationBranchId")?,
            content: require_str(values, "content")?.to_string(),
            status: existing.map(|s| s.status).unwrap_or_default(),
            weight: require_f64(values, "weight")?,
            dimensions: Dimensions {
                length: require_f64(values, "dimensions.length")?,
                width: require_f64(values, "dimensions.width")?,
                height: require_f64(values, "dimensions.height")?,
            },
            timestamp: existing.map(|s| s.timestamp).unwrap_or_else(Utc::now),
            created_at: existing.and_then(|s| s.created_at),
            updated_at: existing.and_then(|s| s.updated_at),
        })
    }
}
