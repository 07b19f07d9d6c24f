//! Vehicle entity

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

use super::{Branch, Entity, FormEntity, TableEntity};
use super::{id_value, require_f64, require_str, require_uuid};

/// Kind of delivery vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleKind {
    Truck,
    Van,
    Motorcycle,
}

impl VehicleKind {
    /// Wire name, as the backend sends it.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Truck => "TRUCK",
            VehicleKind::Van => "VAN",
            VehicleKind::Motorcycle => "MOTORCYCLE",
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Truck => "Truck",
            VehicleKind::Van => "Van",
            VehicleKind::Motorcycle => "Motorcycle",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "TRUCK" => Some(VehicleKind::Truck),
            "VAN" => Some(VehicleKind::Van),
            "MOTORCYCLE" => Some(VehicleKind::Motorcycle),
            _ => None,
        }
    }
}

/// Availability state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
}

impl VehicleStatus {
    /// Wire name, as the backend sends it.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::InUse => "IN_USE",
            VehicleStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InUse => "In Use",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

/// A delivery vehicle attached to a branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub plate_number: String,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub capacity: f64,
    pub status: VehicleStatus,
    pub branch_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// The vehicle form's field set; branches feed the branch options.
    pub fn form_fields(branches: &[Branch]) -> Vec<FieldSpec> {
        let branch_options: Vec<SelectOption> = branches
            .iter()
            .filter_map(|b| {
                b.id.map(|id| SelectOption::new(id.to_string(), b.name.clone()))
            })
            .collect();

        vec![
            FieldSpec::new("plateNumber", "Plate Number", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(5).max_length(20)),
            FieldSpec::new("type", "Vehicle Type", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(vec![
                    SelectOption::new("TRUCK", "Truck"),
                    SelectOption::new("VAN", "Van"),
                    SelectOption::new("MOTORCYCLE", "Motorcycle"),
                ]),
            FieldSpec::new("capacity", "Capacity (kg)", FieldKind::Number)
                .rules(RuleSet::new().required().min(0.0)),
            FieldSpec::new("branchId", "Branch", FieldKind::Select)
                .rules(RuleSet::new().required())
                .options(branch_options),
        ]
    }
}

impl EntityRow for Vehicle {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Entity for Vehicle {
    const NAME: &'static str = "Vehicle";
    const COLLECTION: &'static str = "vehicles";
}

impl TableEntity for Vehicle {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("plateNumber", "Plate Number").sortable(),
            ColumnSpec::new("type", "Type").sortable(),
            ColumnSpec::new("capacity", "Capacity").sortable(),
            ColumnSpec::new("status", "Status").sortable().formatter(|v| {
                match v.as_str() {
                    Some("AVAILABLE") => "Available".to_string(),
                    Some("IN_USE") => "In Use".to_string(),
                    Some("MAINTENANCE") => "Maintenance".to_string(),
                    // Unknown statuses render as received.
                    _ => v.to_string(),
                }
            }),
        ]
    }

    fn to_record(&self) -> Record {
        Record::new()
            .set("id", id_value(self.id))
            .set("plateNumber", self.plate_number.as_str())
            .set("type", self.kind.as_str())
            .set("capacity", self.capacity)
            .set("status", self.status.as_str())
            .set("branchId", id_value(Some(self.branch_id)))
    }
}

impl FormEntity for Vehicle {
    fn form_values(&self) -> HashMap<String, Value> {
        HashMap::from([
            (
                "plateNumber".to_string(),
                Value::from(self.plate_number.as_str()),
            ),
            ("type".to_string(), Value::from(self.kind.as_str())),
            ("capacity".to_string(), Value::Float(self.capacity)),
            (
                "branchId".to_string(),
                Value::String(self.branch_id.to_string()),
            ),
        ])
    }

    fn from_values(
        values: &HashMap<String, Value>,
        existing: Option<&Self>,
    ) -> Result<Self, ServiceError> {
        let kind = require_str(values, "type")
            .ok()
            .and_then(VehicleKind::parse)
            .ok_or_else(|| ServiceError::bad_field("type"))?;

        Ok(Self {
            id: existing.and_then(|v| v.id),
            plate_number: require_str(values, "plateNumber")?.to_string(),
            kind,
            capacity: require_f64(values, "capacity")?,
            // The form does not edit availability; new vehicles start available.
            status: existing.map(|v| v.status).unwrap_or_default(),
            branch_id: require_uuid(values, "branchId")?,
            created_at: existing.and_then(|v| v.created_at),
            updated_at: existing.and_then(|v| v.updated_at),
        })
    }
}
